use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub share_percent: f64, // Plain percentage, e.g. 56.25
}

impl Owner {
    pub fn new(name: impl Into<String>, share_percent: f64) -> Self {
        Self {
            name: name.into(),
            share_percent,
        }
    }

    // Multiplier applied to every pool amount and to the gross sale price.
    pub fn share_factor(&self) -> f64 {
        self.share_percent / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleParameters {
    pub sale_price: f64,
    pub acquisition_value: f64, // Cadastral value
    pub commission_percent: f64,
    pub capital_gains_tax_percent: f64,
}

// Fees and taxes computed once on the whole sale, before the split among owners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoolAmounts {
    pub commission: f64,
    pub capital_gains_tax: f64,
    pub withholding: f64,
    pub notarial_fees_total: f64, // Both parties; shown in the summary only
    pub notarial_fees_seller_share: f64,
    pub honoraria: f64,
    pub vat_on_honoraria: f64,
    // Pool amounts deducted from the sellers' proceeds. Leaves out the
    // capital-gains tax when each owner settles it individually.
    pub deducted_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerExpenseBreakdown {
    pub name: String,
    pub share_percent: f64,
    pub commission: f64,
    pub capital_gains_tax: f64,
    pub withholding: f64,
    pub notarial_fees: f64,
    pub honoraria: f64,
    pub vat_on_honoraria: f64,
    pub total_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerNetProceeds {
    pub name: String,
    pub gross: f64,
    pub total_expenses: f64,
    pub capital_gains_tax: f64,
    pub net_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportTotals {
    pub total_expenses: f64,
    pub total_net: f64,
    pub total_capital_gains_tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    pub taxable_gain: f64, // May be negative when selling below the acquisition value
    pub pools: PoolAmounts,
    pub per_owner_expenses: Vec<OwnerExpenseBreakdown>,
    pub per_owner_net: Vec<OwnerNetProceeds>,
    pub totals: ReportTotals,
}

impl DistributionReport {
    pub fn expenses_for(&self, name: &str) -> Option<&OwnerExpenseBreakdown> {
        self.per_owner_expenses.iter().find(|row| row.name == name)
    }

    pub fn net_for(&self, name: &str) -> Option<&OwnerNetProceeds> {
        self.per_owner_net.iter().find(|row| row.name == name)
    }
}
