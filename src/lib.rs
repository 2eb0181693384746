pub mod action_handler;
pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod paths;
pub mod snapshot;
pub mod state;
pub mod ui;
pub mod window;
