pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetch;
pub mod menu;
pub mod registry;
pub mod render;
pub mod services;
