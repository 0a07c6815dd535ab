//! Trial execution and aggregation.
//!
//! - [`engine`]: run trials sequentially or as a parallel batch

pub mod engine;

pub use engine::{
    SimulationResult, SimulationSummary, TrialRecord, run_simulation, run_trial,
    run_trial_recorded, simulate_batch,
};
