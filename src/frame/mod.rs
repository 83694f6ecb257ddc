//! Reference frames and their hand-off to the engine.

pub mod engine;
mod reference_frame;

pub use engine::EngineTransform;
pub use reference_frame::ReferenceFrame;
