// Table 3: gross share, expenses and net proceeds per owner
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::grouping::{group_net_rows, DisplayGroup};
use shared::models::DistributionReport;
use shared::utils::cop_format::format_currency;

use crate::config::theme::ThemePalette;

#[derive(Debug, Clone, PartialEq)]
struct NetLine {
    label: String,
    gross: String,
    total_expenses: String,
    capital_gains_tax: String,
    net_amount: String,
    is_negative: bool,
}

#[component]
pub fn NetTable(
    report: DistributionReport,
    groups: Vec<DisplayGroup>,
    tax_paid_individually: bool,
    palette: ThemePalette,
) -> Element {
    let negative_style = format!("{} color: {};", palette.cell_style(), palette.negative);
    let cell_style = palette.cell_style();
    let rows: Vec<(NetLine, String)> = net_lines(&report, &groups)
        .into_iter()
        .map(|line| {
            let net_style = if line.is_negative { negative_style.clone() } else { cell_style.clone() };
            (line, net_style)
        })
        .collect();
    let total_net = format_currency(report.totals.total_net);
    let total_tax = format_currency(report.totals.total_capital_gains_tax);
    let header_style = palette.header_style();
    let label_style = palette.label_cell_style();
    let total_style = palette.total_row_style();

    rsx! {
        section {
            class: "net-amounts",
            h2 { "Tabla 3: Montos Netos" }
            table {
                style: "border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "{header_style}", "Propietario" }
                        th { style: "{header_style}", "Bruto" }
                        th { style: "{header_style}", "Total Gastos" }
                        if tax_paid_individually {
                            th { style: "{header_style}", "Ganancia Ocasional (pago individual)" }
                        }
                        th { style: "{header_style}", "Neto" }
                    }
                }
                tbody {
                    for (line, net_style) in rows {
                        tr {
                            key: "{line.label}",
                            td { style: "{label_style}", "{line.label}" }
                            td { style: "{cell_style}", "{line.gross}" }
                            td { style: "{cell_style}", "{line.total_expenses}" }
                            if tax_paid_individually {
                                td { style: "{cell_style}", "{line.capital_gains_tax}" }
                            }
                            td { style: "{net_style}", "{line.net_amount}" }
                        }
                    }
                    tr {
                        style: "{total_style}",
                        td { style: "{label_style}", "Neto Total Vendedores" }
                        td { style: "{cell_style}" }
                        td { style: "{cell_style}" }
                        if tax_paid_individually {
                            td { style: "{cell_style}", "{total_tax}" }
                        }
                        td { style: "{cell_style}", "{total_net}" }
                    }
                }
            }
        }
    }
}

fn net_lines(report: &DistributionReport, groups: &[DisplayGroup]) -> Vec<NetLine> {
    group_net_rows(report, groups)
        .iter()
        .map(|display| NetLine {
            label: display.label().to_string(),
            gross: format_currency(display.row.gross),
            total_expenses: format_currency(display.row.total_expenses),
            capital_gains_tax: format_currency(display.row.capital_gains_tax),
            net_amount: format_currency(display.row.net_amount),
            is_negative: display.row.net_amount < 0.0,
        })
        .collect()
}
