pub mod engine;

pub use engine::TruncateEngine;
