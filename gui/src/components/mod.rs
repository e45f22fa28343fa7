// GUI components module
pub mod expenses_table;
pub mod net_table;
pub mod sale_inputs;
pub mod summary_table;
pub mod toolbar;

pub use expenses_table::ExpensesTable;
pub use net_table::NetTable;
pub use sale_inputs::SaleInputs;
pub use summary_table::SummaryTable;
pub use toolbar::Toolbar;
