// Input side of the form: sale price field and the two percentage sliders.
// Every edit goes through the calculator setters; the report memo in app.rs picks up the change.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::ProceedsCalculator;
use shared::utils::cop_format::{coerce_input, format_currency, format_percent};

#[component]
pub fn SaleInputs(calculator: Signal<ProceedsCalculator>) -> Element {
    let mut calculator = calculator;
    let params = calculator.read().parameters();
    let commission_range = calculator.read().settings().commission_range;
    let tax_range = calculator.read().settings().capital_gains_tax_range;

    let commission_label = format_percent(params.commission_percent);
    let tax_label = format_percent(params.capital_gains_tax_percent);
    let acquisition_label = format_currency(params.acquisition_value);

    rsx! {
        section {
            class: "sale-inputs",
            div {
                style: "margin-bottom: 1rem;",
                label { "Valor de Venta: " }
                input {
                    r#type: "number",
                    min: "0",
                    value: "{params.sale_price}",
                    oninput: move |evt: FormEvent| {
                        calculator.write().set_sale_price(coerce_input(&evt.value()));
                    }
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                label { "Avalúo Catastral: {acquisition_label}" }
            }
            div {
                style: "margin-bottom: 1rem;",
                label { "Comisión Agente ({commission_label}): " }
                input {
                    r#type: "range",
                    min: "{commission_range.min}",
                    max: "{commission_range.max}",
                    step: "{commission_range.step}",
                    value: "{params.commission_percent}",
                    oninput: move |evt: FormEvent| {
                        calculator.write().set_commission_percent(coerce_input(&evt.value()));
                    }
                }
            }
            div {
                style: "margin-bottom: 1rem;",
                label { "Ganancia Ocasional ({tax_label}): " }
                input {
                    r#type: "range",
                    min: "{tax_range.min}",
                    max: "{tax_range.max}",
                    step: "{tax_range.step}",
                    value: "{params.capital_gains_tax_percent}",
                    oninput: move |evt: FormEvent| {
                        calculator.write().set_capital_gains_tax_percent(coerce_input(&evt.value()));
                    }
                }
            }
        }
    }
}
