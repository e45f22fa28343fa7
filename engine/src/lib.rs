// Engine library root: the proceeds calculation and everything it needs to run.

pub mod calculator;
pub mod config;
pub mod error;
pub mod grouping;
pub mod validation;

pub use calculator::{compute_distribution, compute_distribution_with, ProceedsCalculator};
pub use error::EngineError;
