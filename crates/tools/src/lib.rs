//! CLI support library for `same-gen`/`same-info`: configuration,
//! header/WAV rendering, and shared scaffolding.

pub mod common;
pub mod config;
pub mod generator;

pub use common::{init_logging, GlobalConfig, ProgressReporter};
pub use config::{GenConfig, SineEngine};
pub use generator::{build_header, read_wav, render_to_wav};
