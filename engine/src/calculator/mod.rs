// Proceeds calculation module
pub mod distribution;
pub mod proceeds;
pub mod rules;

pub use distribution::{compute_distribution, compute_distribution_with, compute_pools};
pub use proceeds::ProceedsCalculator;
pub use rules::{CalculationRules, CapitalGainsTreatment, FixedRates, LossTreatment};
