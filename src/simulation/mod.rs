//! Simulation driver.

mod runner;

pub use runner::{ColumnModel, SimulationConfig, SimulationResult, Snapshot};
