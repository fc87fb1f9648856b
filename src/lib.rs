pub mod config;
pub mod runner;
pub mod telemetry;

pub use config::{Algorithm, Args, Config, PivotKind, TraversalKind};
pub use runner::{format_values, load_values, read_values, run, SAMPLE};
