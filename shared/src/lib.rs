// Data model and formatting helpers shared by the engine and the GUI.
pub mod models;
pub mod utils;

pub use models::{
    DistributionReport, Owner, OwnerExpenseBreakdown, OwnerNetProceeds, PoolAmounts, ReportTotals,
    SaleParameters,
};
