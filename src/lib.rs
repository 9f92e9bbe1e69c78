pub mod app;
pub mod config;
pub mod event;
pub mod handler;
pub mod host;
pub mod logo;
pub mod netinfo;
pub mod tui;
pub mod ui;
