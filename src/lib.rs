pub mod caption;
pub mod config;
pub mod error;
pub mod language;
pub mod models;
pub mod output;
pub mod recover;
pub mod render;
