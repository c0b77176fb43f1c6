pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod instruments;
pub mod overview;
pub mod routes;
pub mod scanner;
pub mod types;

pub use generator::{generate_universe, UniverseGenerator};
pub use routes::{build_router, AppState};
pub use scanner::{scan, MarketScanner};
