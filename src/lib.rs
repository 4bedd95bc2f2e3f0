pub mod api;
pub mod configuration;
pub mod domain;
pub mod error_classifier;
pub mod messages;
pub mod models;
pub mod pages;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod views;
pub mod widgets;
