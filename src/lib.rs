pub mod app;
pub mod config;
pub mod contact_form;
pub mod domain;
pub mod email;
pub mod i18n;
pub mod telemetry;
