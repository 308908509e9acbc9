pub mod config;
pub mod segment;

pub use config::{TruncateConfig, TruncateMode};
pub use segment::Segment;
