// Holds the editable inputs of the form and recomputes the report on demand.
use shared::models::{DistributionReport, Owner, SaleParameters};

use super::distribution::compute_distribution_with;
use super::rules::CalculationRules;
use crate::config::settings::{CalculatorSettings, PercentRange};
use crate::validation::{validate_shares, ShareWarning};

#[derive(Debug, Clone, PartialEq)]
pub struct ProceedsCalculator {
    settings: CalculatorSettings,
    sale_price: f64,
    commission_percent: f64,
    capital_gains_tax_percent: f64,
}

impl ProceedsCalculator {
    pub fn new(settings: CalculatorSettings) -> Self {
        let defaults = settings.defaults;
        let mut calculator = ProceedsCalculator {
            settings,
            sale_price: 0.0,
            commission_percent: 0.0,
            capital_gains_tax_percent: 0.0,
        };
        calculator.set_sale_price(defaults.sale_price);
        calculator.set_commission_percent(defaults.commission_percent);
        calculator.set_capital_gains_tax_percent(defaults.capital_gains_tax_percent);
        calculator
    }

    pub fn set_sale_price(&mut self, value: f64) {
        if !value.is_finite() || value < 0.0 {
            tracing::warn!(value, "Sale price must be a non-negative number, using 0");
            self.sale_price = 0.0;
        } else {
            self.sale_price = value;
        }
    }

    pub fn set_commission_percent(&mut self, value: f64) {
        self.commission_percent = clamp_to_range(value, &self.settings.commission_range, "commission_percent");
    }

    pub fn set_capital_gains_tax_percent(&mut self, value: f64) {
        self.capital_gains_tax_percent = clamp_to_range(
            value,
            &self.settings.capital_gains_tax_range,
            "capital_gains_tax_percent",
        );
    }

    pub fn parameters(&self) -> SaleParameters {
        SaleParameters {
            sale_price: self.sale_price,
            acquisition_value: self.settings.acquisition_value,
            commission_percent: self.commission_percent,
            capital_gains_tax_percent: self.capital_gains_tax_percent,
        }
    }

    pub fn owners(&self) -> &[Owner] {
        &self.settings.owners
    }

    pub fn rules(&self) -> &CalculationRules {
        &self.settings.rules
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    // A fresh report on every call; nothing is cached between input changes.
    pub fn report(&self) -> DistributionReport {
        let params = self.parameters();
        let report = compute_distribution_with(&params, &self.settings.owners, &self.settings.rules);
        tracing::debug!(
            sale_price = params.sale_price,
            commission_percent = params.commission_percent,
            capital_gains_tax_percent = params.capital_gains_tax_percent,
            taxable_gain = report.taxable_gain,
            total_expenses = report.totals.total_expenses,
            total_net = report.totals.total_net,
            "Recomputed distribution"
        );
        report
    }

    pub fn share_warning(&self) -> Option<ShareWarning> {
        validate_shares(&self.settings.owners)
    }
}

fn clamp_to_range(value: f64, range: &PercentRange, field: &str) -> f64 {
    if !value.is_finite() {
        tracing::warn!(field, "Non-numeric percentage, using range minimum {}", range.min);
        return range.min;
    }
    let clamped = range.clamp(value);
    if clamped != value {
        tracing::warn!(field, value, clamped, "Percentage outside slider range, clamped");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_distribution;

    #[test]
    fn test_new_seeds_inputs_from_defaults() {
        let calculator = ProceedsCalculator::new(CalculatorSettings::default());
        let params = calculator.parameters();
        assert_eq!(params.sale_price, 440_000_000.0);
        assert_eq!(params.acquisition_value, 362_514_000.0);
        assert_eq!(params.commission_percent, 3.0);
        assert_eq!(params.capital_gains_tax_percent, 12.5);
        assert_eq!(calculator.owners().len(), 5);
    }

    #[test]
    fn test_report_matches_pure_function() {
        let calculator = ProceedsCalculator::new(CalculatorSettings::default());
        let expected = compute_distribution(&calculator.parameters(), calculator.owners());
        assert_eq!(calculator.report(), expected);
    }

    #[test]
    fn test_setters_trigger_fresh_report() {
        let mut calculator = ProceedsCalculator::new(CalculatorSettings::default());
        let before = calculator.report();

        calculator.set_sale_price(500_000_000.0);
        let after = calculator.report();

        assert_ne!(before, after);
        assert_eq!(after.taxable_gain, 500_000_000.0 - 362_514_000.0);
        assert_eq!(before.taxable_gain, 77_486_000.0);
    }

    #[test]
    fn test_negative_sale_price_becomes_zero() {
        let mut calculator = ProceedsCalculator::new(CalculatorSettings::default());
        calculator.set_sale_price(-10.0);
        assert_eq!(calculator.parameters().sale_price, 0.0);
        calculator.set_sale_price(f64::NAN);
        assert_eq!(calculator.parameters().sale_price, 0.0);
    }

    #[test]
    fn test_percentages_clamped_to_slider_range() {
        let mut calculator = ProceedsCalculator::new(CalculatorSettings::default());
        calculator.set_commission_percent(5.0);
        assert_eq!(calculator.parameters().commission_percent, 3.5);
        calculator.set_commission_percent(3.2);
        assert_eq!(calculator.parameters().commission_percent, 3.2);

        calculator.set_capital_gains_tax_percent(1.0);
        assert_eq!(calculator.parameters().capital_gains_tax_percent, 10.0);
        calculator.set_capital_gains_tax_percent(f64::INFINITY);
        assert_eq!(calculator.parameters().capital_gains_tax_percent, 10.0);
    }

    #[test]
    fn test_share_warning_for_configured_owners() {
        let calculator = ProceedsCalculator::new(CalculatorSettings::default());
        assert!(calculator.share_warning().is_none());

        let mut settings = CalculatorSettings::default();
        settings.owners.pop();
        let calculator = ProceedsCalculator::new(settings);
        let warning = calculator.share_warning().unwrap();
        assert!((warning.total_percent - 93.75).abs() < 1e-9);
    }
}
