// Splits the proceeds of a sale among its owners after fees and taxes.
use super::rules::{CalculationRules, CapitalGainsTreatment, LossTreatment};
use shared::models::{
    DistributionReport, Owner, OwnerExpenseBreakdown, OwnerNetProceeds, PoolAmounts, ReportTotals,
    SaleParameters,
};

pub fn compute_distribution(params: &SaleParameters, owners: &[Owner]) -> DistributionReport {
    compute_distribution_with(params, owners, &CalculationRules::default())
}

// Taxable gain and the pool amounts computed once on the whole sale.
pub fn compute_pools(params: &SaleParameters, rules: &CalculationRules) -> (f64, PoolAmounts) {
    let rates = &rules.rates;
    let sale_price = params.sale_price;
    let taxable_gain = sale_price - params.acquisition_value;

    let capital_gains_tax = taxable_gain * (params.capital_gains_tax_percent / 100.0);
    let capital_gains_tax = match rules.loss {
        LossTreatment::NegativeTax => capital_gains_tax,
        LossTreatment::ClampToZero => capital_gains_tax.max(0.0),
    };

    let honoraria = sale_price * (rates.honoraria_percent / 100.0);
    let mut pools = PoolAmounts {
        commission: sale_price * (params.commission_percent / 100.0),
        capital_gains_tax,
        withholding: sale_price * (rates.withholding_percent / 100.0),
        notarial_fees_total: sale_price * (rates.notarial_fees_percent / 100.0),
        notarial_fees_seller_share: sale_price * (rates.notarial_seller_percent() / 100.0),
        honoraria,
        vat_on_honoraria: honoraria * rates.vat_on_honoraria_rate,
        deducted_total: 0.0,
    };
    let deducted_tax = match rules.capital_gains {
        CapitalGainsTreatment::IncludedInExpenses => pools.capital_gains_tax,
        CapitalGainsTreatment::PaidIndividually => 0.0,
    };
    pools.deducted_total = pools.commission
        + deducted_tax
        + pools.withholding
        + pools.notarial_fees_seller_share
        + pools.honoraria
        + pools.vat_on_honoraria;
    (taxable_gain, pools)
}

pub fn compute_distribution_with(
    params: &SaleParameters,
    owners: &[Owner],
    rules: &CalculationRules,
) -> DistributionReport {
    let (taxable_gain, pools) = compute_pools(params, rules);

    let per_owner_expenses: Vec<OwnerExpenseBreakdown> = owners
        .iter()
        .map(|owner| owner_expenses(owner, &pools, rules.capital_gains))
        .collect();

    let per_owner_net: Vec<OwnerNetProceeds> = owners
        .iter()
        .zip(&per_owner_expenses)
        .map(|(owner, expenses)| {
            let gross = params.sale_price * owner.share_factor();
            OwnerNetProceeds {
                name: owner.name.clone(),
                gross,
                total_expenses: expenses.total_expenses,
                capital_gains_tax: expenses.capital_gains_tax,
                net_amount: gross - expenses.total_expenses,
            }
        })
        .collect();

    let totals = ReportTotals {
        total_expenses: per_owner_expenses.iter().map(|e| e.total_expenses).sum(),
        total_net: per_owner_net.iter().map(|n| n.net_amount).sum(),
        total_capital_gains_tax: per_owner_expenses.iter().map(|e| e.capital_gains_tax).sum(),
    };

    DistributionReport {
        taxable_gain,
        pools,
        per_owner_expenses,
        per_owner_net,
        totals,
    }
}

fn owner_expenses(
    owner: &Owner,
    pools: &PoolAmounts,
    capital_gains: CapitalGainsTreatment,
) -> OwnerExpenseBreakdown {
    let factor = owner.share_factor();
    let commission = pools.commission * factor;
    let capital_gains_tax = pools.capital_gains_tax * factor;
    let withholding = pools.withholding * factor;
    let notarial_fees = pools.notarial_fees_seller_share * factor;
    let honoraria = pools.honoraria * factor;
    let vat_on_honoraria = pools.vat_on_honoraria * factor;

    let deducted_tax = match capital_gains {
        CapitalGainsTreatment::IncludedInExpenses => capital_gains_tax,
        CapitalGainsTreatment::PaidIndividually => 0.0,
    };
    let total_expenses =
        commission + deducted_tax + withholding + notarial_fees + honoraria + vat_on_honoraria;

    OwnerExpenseBreakdown {
        name: owner.name.clone(),
        share_percent: owner.share_percent,
        commission,
        capital_gains_tax,
        withholding,
        notarial_fees,
        honoraria,
        vat_on_honoraria,
        total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_owners() -> Vec<Owner> {
        vec![
            Owner::new("Isabel", 25.0),
            Owner::new("Laura", 56.25),
            Owner::new("Patricia", 6.25),
            Owner::new("Ruth", 6.25),
            Owner::new("Mauricio", 6.25),
        ]
    }

    fn reference_params() -> SaleParameters {
        SaleParameters {
            sale_price: 440_000_000.0,
            acquisition_value: 362_514_000.0,
            commission_percent: 3.0,
            capital_gains_tax_percent: 12.5,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_reference_sale_pools() {
        let report = compute_distribution(&reference_params(), &reference_owners());

        assert_eq!(report.taxable_gain, 77_486_000.0);
        assert_close(report.pools.capital_gains_tax, 9_685_750.0);
        assert_close(report.pools.commission, 13_200_000.0);
        assert_close(report.pools.withholding, 4_400_000.0);
        assert_close(report.pools.notarial_fees_total, 2_376_000.0);
        assert_close(report.pools.notarial_fees_seller_share, 1_188_000.0);
        assert_close(report.pools.honoraria, 2_200_000.0);
        assert_close(report.pools.vat_on_honoraria, 418_000.0);
        assert_close(report.totals.total_capital_gains_tax, 9_685_750.0);
    }

    #[test]
    fn test_reference_sale_laura_row() {
        let report = compute_distribution(&reference_params(), &reference_owners());
        let expected_expenses = 0.5625 * report.pools.deducted_total;

        let laura = report.net_for("Laura").unwrap();
        assert_close(laura.gross, 247_500_000.0);
        assert_close(laura.total_expenses, expected_expenses);
        assert_close(laura.net_amount, 247_500_000.0 - expected_expenses);

        let breakdown = report.expenses_for("Laura").unwrap();
        assert_close(breakdown.commission, 7_425_000.0);
        assert_close(breakdown.capital_gains_tax, 9_685_750.0 * 0.5625);
        assert_eq!(breakdown.share_percent, 56.25);
    }

    #[test]
    fn test_gross_shares_sum_to_sale_price() {
        let params = reference_params();
        let report = compute_distribution(&params, &reference_owners());
        let gross: f64 = report.per_owner_net.iter().map(|n| n.gross).sum();
        assert_close(gross, params.sale_price);
    }

    #[test]
    fn test_owner_expenses_agree_with_pool_totals() {
        let report = compute_distribution(&reference_params(), &reference_owners());
        let summed: f64 = report.per_owner_expenses.iter().map(|e| e.total_expenses).sum();
        assert_eq!(summed, report.totals.total_expenses);
        assert_close(report.totals.total_expenses, report.pools.deducted_total);
        assert_close(
            report.totals.total_net,
            reference_params().sale_price - report.pools.deducted_total,
        );
    }

    #[test]
    fn test_taxable_gain_is_exact_difference() {
        let params = SaleParameters {
            sale_price: 123_456_789.12,
            acquisition_value: 98_765_432.1,
            commission_percent: 3.3,
            capital_gains_tax_percent: 15.0,
        };
        let report = compute_distribution(&params, &reference_owners());
        assert_eq!(report.taxable_gain, params.sale_price - params.acquisition_value);
    }

    #[test]
    fn test_expenses_scale_with_share() {
        let params = reference_params();
        let report = compute_distribution(&params, &[Owner::new("A", 10.0), Owner::new("B", 20.0)]);
        let a = &report.per_owner_expenses[0];
        let b = &report.per_owner_expenses[1];

        assert_close(b.commission, 2.0 * a.commission);
        assert_close(b.capital_gains_tax, 2.0 * a.capital_gains_tax);
        assert_close(b.withholding, 2.0 * a.withholding);
        assert_close(b.notarial_fees, 2.0 * a.notarial_fees);
        assert_close(b.honoraria, 2.0 * a.honoraria);
        assert_close(b.vat_on_honoraria, 2.0 * a.vat_on_honoraria);
        assert_close(b.total_expenses, 2.0 * a.total_expenses);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let params = reference_params();
        let owners = reference_owners();
        let first = compute_distribution(&params, &owners);
        let second = compute_distribution(&params, &owners);
        assert_eq!(first, second);
        for (a, b) in first.per_owner_net.iter().zip(&second.per_owner_net) {
            assert_eq!(a.net_amount.to_bits(), b.net_amount.to_bits());
        }
    }

    #[test]
    fn test_zero_sale_price_yields_zero_everywhere() {
        let params = SaleParameters {
            sale_price: 0.0,
            acquisition_value: 0.0,
            commission_percent: 3.0,
            capital_gains_tax_percent: 12.5,
        };
        let report = compute_distribution(&params, &reference_owners());
        for row in &report.per_owner_expenses {
            assert_eq!(row.commission, 0.0);
            assert_eq!(row.capital_gains_tax, 0.0);
            assert_eq!(row.withholding, 0.0);
            assert_eq!(row.notarial_fees, 0.0);
            assert_eq!(row.honoraria, 0.0);
            assert_eq!(row.vat_on_honoraria, 0.0);
            assert_eq!(row.total_expenses, 0.0);
        }
        for row in &report.per_owner_net {
            assert_eq!(row.gross, 0.0);
            assert_eq!(row.net_amount, 0.0);
        }
        assert_eq!(report.totals, ReportTotals::default());
    }

    #[test]
    fn test_loss_produces_negative_tax_by_default() {
        let params = SaleParameters {
            sale_price: 300_000_000.0,
            ..reference_params()
        };
        let report = compute_distribution(&params, &reference_owners());
        assert!(report.taxable_gain < 0.0);
        assert!(report.pools.capital_gains_tax < 0.0);
        assert!(report.totals.total_capital_gains_tax < 0.0);
    }

    #[test]
    fn test_loss_clamped_to_zero_tax() {
        let params = SaleParameters {
            sale_price: 300_000_000.0,
            ..reference_params()
        };
        let rules = CalculationRules {
            loss: LossTreatment::ClampToZero,
            ..CalculationRules::default()
        };
        let report = compute_distribution_with(&params, &reference_owners(), &rules);
        assert_eq!(report.taxable_gain, 300_000_000.0 - 362_514_000.0);
        assert_eq!(report.pools.capital_gains_tax, 0.0);
        assert!(report.per_owner_expenses.iter().all(|e| e.capital_gains_tax == 0.0));
    }

    #[test]
    fn test_tax_paid_individually_is_reported_but_not_deducted() {
        let params = reference_params();
        let rules = CalculationRules {
            capital_gains: CapitalGainsTreatment::PaidIndividually,
            ..CalculationRules::default()
        };
        let included = compute_distribution(&params, &reference_owners());
        let separate = compute_distribution_with(&params, &reference_owners(), &rules);

        assert_close(separate.totals.total_capital_gains_tax, 9_685_750.0);
        assert_close(
            included.totals.total_expenses - separate.totals.total_expenses,
            9_685_750.0,
        );
        let laura = separate.net_for("Laura").unwrap();
        assert_close(laura.capital_gains_tax, 9_685_750.0 * 0.5625);
        assert_close(laura.net_amount, laura.gross - laura.total_expenses);
    }

    #[test]
    fn test_tax_paid_individually_pool_total_agrees_with_owner_totals() {
        let rules = CalculationRules {
            capital_gains: CapitalGainsTreatment::PaidIndividually,
            ..CalculationRules::default()
        };
        let owners = vec![Owner::new("A", 25.0), Owner::new("B", 75.0)];
        let report = compute_distribution_with(&reference_params(), &owners, &rules);

        assert_close(report.pools.deducted_total, 21_406_000.0);
        assert_close(report.totals.total_expenses, report.pools.deducted_total);
        assert_close(
            report.totals.total_net,
            reference_params().sale_price - report.pools.deducted_total,
        );
    }

    #[test]
    fn test_zero_sale_with_loss_clamped_yields_zero_everywhere() {
        let params = SaleParameters {
            sale_price: 0.0,
            ..reference_params()
        };
        let rules = CalculationRules {
            loss: LossTreatment::ClampToZero,
            ..CalculationRules::default()
        };
        let report = compute_distribution_with(&params, &reference_owners(), &rules);

        assert_eq!(report.taxable_gain, -362_514_000.0);
        for row in &report.per_owner_expenses {
            assert_eq!(row.capital_gains_tax, 0.0);
            assert_eq!(row.total_expenses, 0.0);
        }
        for row in &report.per_owner_net {
            assert_eq!(row.gross, 0.0);
            assert_eq!(row.net_amount, 0.0);
        }
        assert_eq!(report.pools.deducted_total, 0.0);
    }

    #[test]
    fn test_shares_not_summing_to_hundred_still_compute() {
        let params = reference_params();
        let owners = vec![Owner::new("A", 40.0), Owner::new("B", 40.0)];
        let report = compute_distribution(&params, &owners);
        let gross: f64 = report.per_owner_net.iter().map(|n| n.gross).sum();
        assert_close(gross, params.sale_price * 0.8);
        assert_close(report.totals.total_expenses, report.pools.deducted_total * 0.8);
    }
}
