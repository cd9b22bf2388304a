//! Sample text vocabulary, its renderer, and the demo runner built on them.

pub mod config;
pub mod demo;
pub mod render;
pub mod text;

pub use config::{ConfigError, DemoConfig, RenderConfig};
pub use demo::{DemoLine, run};
pub use render::{TextTarget, render};
pub use text::{DEFAULT_TEXT, TextIntention, TextLanguage, TextTerm};
