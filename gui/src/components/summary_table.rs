// Table 1: pool amounts computed on the whole sale
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{DistributionReport, SaleParameters};
use shared::utils::cop_format::{format_currency, format_percent};

use crate::config::theme::ThemePalette;

#[component]
pub fn SummaryTable(report: DistributionReport, params: SaleParameters, palette: ThemePalette) -> Element {
    let lines = summary_lines(&report, &params);
    let label_style = palette.label_cell_style();
    let cell_style = palette.cell_style();
    let total_style = palette.total_row_style();
    let total = seller_total(&report);

    rsx! {
        section {
            class: "summary",
            h2 { "Tabla 1: Resumen General" }
            table {
                style: "border-collapse: collapse;",
                tbody {
                    for (label, value) in lines {
                        tr {
                            key: "{label}",
                            td { style: "{label_style}", "{label}" }
                            td { style: "{cell_style}", "{value}" }
                        }
                    }
                    tr {
                        style: "{total_style}",
                        td { style: "{label_style}", "Total Gastos Vendedores" }
                        td { style: "{cell_style}", "{total}" }
                    }
                }
            }
        }
    }
}

fn summary_lines(report: &DistributionReport, params: &SaleParameters) -> Vec<(String, String)> {
    let pools = &report.pools;
    vec![
        ("Valor de Venta".to_string(), format_currency(params.sale_price)),
        ("Avalúo Catastral".to_string(), format_currency(params.acquisition_value)),
        ("Ganancia Sujeta a Impuesto".to_string(), format_currency(report.taxable_gain)),
        (
            format!("Comisión Agente ({})", format_percent(params.commission_percent)),
            format_currency(pools.commission),
        ),
        (
            format!("Ganancia Ocasional ({})", format_percent(params.capital_gains_tax_percent)),
            format_currency(pools.capital_gains_tax),
        ),
        ("Retención en la Fuente".to_string(), format_currency(pools.withholding)),
        ("Gastos Notariales Totales".to_string(), format_currency(pools.notarial_fees_total)),
        ("Gastos Notariales Vendedor".to_string(), format_currency(pools.notarial_fees_seller_share)),
        ("Honorarios Notariales".to_string(), format_currency(pools.honoraria)),
        ("IVA Honorarios".to_string(), format_currency(pools.vat_on_honoraria)),
    ]
}

// Same figure as the "Total Vendedores" row of Table 2
fn seller_total(report: &DistributionReport) -> String {
    format_currency(report.pools.deducted_total)
}
