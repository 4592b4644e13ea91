//! Execution pipeline implementation.
//!
//! This module contains the cycle-level scheduler that feeds the FPU. It
//! includes the following components:
//! 1. **Signals:** Request and response types exchanged every cycle.
//! 2. **Latches:** The slot record carried through the fixed pipe.
//! 3. **Fixed Pipe:** The three-stage ring for add, subtract and multiply.
//! 4. **Division Pool:** Independently progressing division state machines.
//! 5. **Scheduler:** Arbitration of the shared output channel.
//! 6. **Writeback:** The port through which results are committed.

/// Request, response and issue-status signals.
pub mod signals;

/// Fixed-pipe slot record.
pub mod latches;

/// Three-stage fixed-latency pipe.
pub mod fixed_pipe;

/// Division slot pool.
pub mod division_pool;

/// Execution scheduler and output arbitration.
pub mod scheduler;

/// Writeback port trait and commit helper.
pub mod writeback;

pub use self::scheduler::ExecutionScheduler;
