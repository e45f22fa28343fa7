// Fixed rates and policy switches that shape the calculation.
use serde::{Deserialize, Serialize};

// All percentages are plain numbers (1.0 means 1%). The VAT rate is a fraction of the honoraria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedRates {
    pub withholding_percent: f64,
    pub notarial_fees_percent: f64,
    pub notarial_seller_portion: f64, // Portion of the notarial fees borne by the sellers
    pub honoraria_percent: f64,
    pub vat_on_honoraria_rate: f64,
}

impl Default for FixedRates {
    fn default() -> Self {
        FixedRates {
            withholding_percent: 1.0,
            notarial_fees_percent: 0.54,
            notarial_seller_portion: 0.5,
            honoraria_percent: 0.5,
            vat_on_honoraria_rate: 0.19,
        }
    }
}

impl FixedRates {
    pub fn notarial_seller_percent(&self) -> f64 {
        self.notarial_fees_percent * self.notarial_seller_portion
    }
}

// Whether an owner's capital-gains tax is deducted from their proceeds here
// or settled by each owner on their own tax return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalGainsTreatment {
    #[default]
    IncludedInExpenses,
    PaidIndividually,
}

// How a sale below the acquisition value is taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossTreatment {
    #[default]
    NegativeTax,
    ClampToZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRules {
    pub rates: FixedRates,
    pub capital_gains: CapitalGainsTreatment,
    pub loss: LossTreatment,
}
