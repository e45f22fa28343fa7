// Table 2: each owner's share of every fee and tax
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::grouping::{group_expense_rows, DisplayGroup, GroupableRow};
use shared::models::{DistributionReport, OwnerExpenseBreakdown};
use shared::utils::cop_format::{format_currency, format_percent};

use crate::config::theme::ThemePalette;

#[derive(Debug, Clone, PartialEq)]
struct ExpenseLine {
    label: String,
    commission: String,
    capital_gains_tax: String,
    withholding: String,
    notarial_fees: String,
    honoraria: String,
    vat_on_honoraria: String,
    total_expenses: String,
}

impl ExpenseLine {
    fn from_row(label: String, row: &OwnerExpenseBreakdown) -> Self {
        Self {
            label,
            commission: format_currency(row.commission),
            capital_gains_tax: format_currency(row.capital_gains_tax),
            withholding: format_currency(row.withholding),
            notarial_fees: format_currency(row.notarial_fees),
            honoraria: format_currency(row.honoraria),
            vat_on_honoraria: format_currency(row.vat_on_honoraria),
            total_expenses: format_currency(row.total_expenses),
        }
    }
}

#[component]
pub fn ExpensesTable(report: DistributionReport, groups: Vec<DisplayGroup>, palette: ThemePalette) -> Element {
    let lines = expense_lines(&report, &groups);
    let total = total_line(&report);
    let header_style = palette.header_style();
    let label_style = palette.label_cell_style();
    let cell_style = palette.cell_style();
    let total_style = palette.total_row_style();

    rsx! {
        section {
            class: "expenses",
            h2 { "Tabla 2: Gastos Individuales" }
            table {
                style: "border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "{header_style}", "Propietario" }
                        th { style: "{header_style}", "Comisión" }
                        th { style: "{header_style}", "Ganancia Ocasional" }
                        th { style: "{header_style}", "Retención" }
                        th { style: "{header_style}", "G. Notariales" }
                        th { style: "{header_style}", "Honorarios" }
                        th { style: "{header_style}", "IVA Honorarios" }
                        th { style: "{header_style}", "Total Gastos" }
                    }
                }
                tbody {
                    for line in lines {
                        tr {
                            key: "{line.label}",
                            td { style: "{label_style}", "{line.label}" }
                            td { style: "{cell_style}", "{line.commission}" }
                            td { style: "{cell_style}", "{line.capital_gains_tax}" }
                            td { style: "{cell_style}", "{line.withholding}" }
                            td { style: "{cell_style}", "{line.notarial_fees}" }
                            td { style: "{cell_style}", "{line.honoraria}" }
                            td { style: "{cell_style}", "{line.vat_on_honoraria}" }
                            td { style: "{cell_style}", "{line.total_expenses}" }
                        }
                    }
                    for line in total {
                        tr {
                            style: "{total_style}",
                            td { style: "{label_style}", "{line.label}" }
                            td { style: "{cell_style}", "{line.commission}" }
                            td { style: "{cell_style}", "{line.capital_gains_tax}" }
                            td { style: "{cell_style}", "{line.withholding}" }
                            td { style: "{cell_style}", "{line.notarial_fees}" }
                            td { style: "{cell_style}", "{line.honoraria}" }
                            td { style: "{cell_style}", "{line.vat_on_honoraria}" }
                            td { style: "{cell_style}", "{line.total_expenses}" }
                        }
                    }
                }
            }
        }
    }
}

fn expense_lines(report: &DistributionReport, groups: &[DisplayGroup]) -> Vec<ExpenseLine> {
    group_expense_rows(report, groups)
        .iter()
        .map(|display| {
            let label = format!("{} ({})", display.label(), format_percent(display.row.share_percent));
            ExpenseLine::from_row(label, &display.row)
        })
        .collect()
}

// Column sums over every owner; None when there are no owners.
fn total_line(report: &DistributionReport) -> Option<ExpenseLine> {
    let (first, rest) = report.per_owner_expenses.split_first()?;
    let mut total = first.clone();
    for row in rest {
        total.absorb(row);
    }
    Some(ExpenseLine::from_row("Total Vendedores".to_string(), &total))
}
