#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::calculator::CapitalGainsTreatment;
use engine::ProceedsCalculator;

use crate::components::{ExpensesTable, NetTable, SaleInputs, SummaryTable, Toolbar};
use crate::config::AppConfig;
use crate::state::app_state::AppState;

// Root component. Inputs sit in one signal and the report is a memo over it,
// so every setter call leads to exactly one recomputation.
#[component]
pub fn App() -> Element {
    let app_config = use_context::<AppConfig>();

    let calculator_settings = app_config.calculator.clone();
    let calculator = use_signal(move || ProceedsCalculator::new(calculator_settings));
    let state_config = app_config.clone();
    let app_state = use_signal(move || AppState::from_config(&state_config));
    let report = use_memo(move || calculator.read().report());

    let palette = app_state.read().palette();
    let params = calculator.read().parameters();
    // Owners are fixed for the session, so the share check runs once.
    let share_warning = use_hook(|| calculator.read().share_warning().map(|w| w.to_string()));
    let tax_paid_individually =
        calculator.read().rules().capital_gains == CapitalGainsTreatment::PaidIndividually;
    let groups = app_config.display.groups.clone();
    let title = app_config.app.title.clone();
    let container_style = format!(
        "padding: 2rem; font-family: Arial, sans-serif; min-height: 100vh; background-color: {}; color: {};",
        palette.background, palette.foreground
    );
    let warning_style = format!("color: {}; font-weight: bold;", palette.warning);

    rsx! {
        div {
            style: "{container_style}",
            Toolbar { app_state: app_state, title: title }
            SaleInputs { calculator: calculator }
            if let Some(text) = share_warning {
                p { class: "share-warning", style: "{warning_style}", "{text}" }
            }
            hr {}
            SummaryTable { report: report(), params: params, palette: palette.clone() }
            ExpensesTable { report: report(), groups: groups.clone(), palette: palette.clone() }
            NetTable {
                report: report(),
                groups: groups,
                tax_paid_individually: tax_paid_individually,
                palette: palette
            }
        }
    }
}
