pub mod arrivals;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod output;
pub mod pool;
pub mod service;
pub mod state;
