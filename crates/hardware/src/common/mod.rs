//! Common utilities and types used throughout the FPU model.
//!
//! This module provides the building blocks shared by the arithmetic units,
//! the scheduler and the simulator. It includes:
//! 1. **Constants:** IEEE-754 field layout, special encodings and pipeline timing.
//! 2. **Error Handling:** Host-side configuration and simulation errors.
//! 3. **Register Management:** The register bank written by the writeback step.

/// Common constants used throughout the model.
pub mod constants;

/// Error types for configuration and simulation.
pub mod error;

/// Register bank implementation.
pub mod reg;

pub use error::{ConfigError, SimError};
pub use reg::RegisterBank;
