// GUI state module
pub mod app_state;
