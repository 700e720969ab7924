pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod game;
pub mod http_client;
pub mod metric;
pub mod model;
pub mod render;
pub mod runner;
pub mod schedule;

pub use error::{Result, ScoresError};
