pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod logging;
pub mod presenter;
pub mod ui;
