pub mod app_info;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod geo;
pub mod logging;
pub mod model;
pub mod ui;
