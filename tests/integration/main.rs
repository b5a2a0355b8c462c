#[path = "../common/mod.rs"]
mod common;

mod bridge_app;
mod config;
