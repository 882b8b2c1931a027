pub mod app;
pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod output;
pub mod setup;
pub mod solver;

pub use error::TspError;
