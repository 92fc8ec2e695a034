pub mod app;
pub mod config;
pub mod feeds;
pub mod ui;
