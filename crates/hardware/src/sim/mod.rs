//! Simulation driver.
//!
//! Ties the execution scheduler to the register bank and statistics and
//! provides run and drain loops over request sequences.

/// Top-level simulator.
pub mod simulator;

pub use self::simulator::Simulator;
