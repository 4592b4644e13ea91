//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run counters for the FPU model. It provides:
//! 1. **Cycles:** Total cycles and cycles spent under global stall.
//! 2. **Operation mix:** Accepted issues by opcode.
//! 3. **Divider pressure:** Divides blocked or dropped for lack of a slot.
//! 4. **Results:** Delivered results and how often each exception flag was raised.
//! 5. **Backlog:** Peak depth of the writeback backlog.

use serde::Serialize;

use crate::core::pipeline::signals::{FpOp, IssueStatus, OpRequest, TickOutput};
use crate::core::units::fpu::exception_flags::FpFlags;

/// Per-flag raise counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlagCounts {
    /// Results raising invalid operation.
    pub invalid: u64,
    /// Results raising overflow.
    pub overflow: u64,
    /// Results raising underflow.
    pub underflow: u64,
    /// Results raising divide by zero.
    pub div_by_zero: u64,
    /// Results raising inexact.
    pub inexact: u64,
}

impl FlagCounts {
    fn record(&mut self, flags: FpFlags) {
        for (flag, counter) in [
            (FpFlags::NV, &mut self.invalid),
            (FpFlags::OF, &mut self.overflow),
            (FpFlags::UF, &mut self.underflow),
            (FpFlags::DZ, &mut self.div_by_zero),
            (FpFlags::NX, &mut self.inexact),
        ] {
            if flags.contains(flag) {
                *counter += 1;
            }
        }
    }
}

/// FPU statistics for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FpuStats {
    /// Total cycles ticked.
    pub cycles: u64,
    /// Cycles with the global stall asserted.
    pub stall_cycles: u64,

    /// Accepted additions.
    pub issued_add: u64,
    /// Accepted subtractions.
    pub issued_sub: u64,
    /// Accepted multiplications.
    pub issued_mul: u64,
    /// Accepted divisions.
    pub issued_div: u64,

    /// Cycles a divide was held for lack of a free slot.
    pub blocked_divides: u64,
    /// Divides discarded for lack of a free slot.
    pub dropped_divides: u64,

    /// Results delivered on the output channel.
    pub results_delivered: u64,
    /// Exception flags raised by delivered results.
    pub flags: FlagCounts,

    /// Deepest writeback backlog observed.
    pub max_backlog: usize,
}

impl FpuStats {
    /// Records one scheduler cycle.
    ///
    /// # Arguments
    ///
    /// * `request` - The request presented on the cycle.
    /// * `out` - What the scheduler drove on the cycle.
    /// * `stall` - Whether the global stall was asserted.
    /// * `backlog` - Backlog depth after the cycle.
    pub fn record(&mut self, request: &OpRequest, out: &TickOutput, stall: bool, backlog: usize) {
        self.cycles += 1;
        if stall {
            self.stall_cycles += 1;
        }

        match out.issue {
            IssueStatus::Accepted => match request.op {
                FpOp::Add => self.issued_add += 1,
                FpOp::Sub => self.issued_sub += 1,
                FpOp::Mul => self.issued_mul += 1,
                FpOp::Div => self.issued_div += 1,
            },
            IssueStatus::Blocked => self.blocked_divides += 1,
            IssueStatus::Dropped => self.dropped_divides += 1,
            IssueStatus::Idle | IssueStatus::Stalled => {}
        }

        if out.response.valid {
            self.results_delivered += 1;
            self.flags.record(out.response.flags);
        }

        self.max_backlog = self.max_backlog.max(backlog);
    }

    /// Total accepted operations.
    pub const fn issued(&self) -> u64 {
        self.issued_add + self.issued_sub + self.issued_mul + self.issued_div
    }

    /// Serializes the counters as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates a serializer failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let cyc = self.cycles.max(1);
        let throughput = self.results_delivered as f64 / cyc as f64;

        println!("\n==========================================================");
        println!("FPU SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_stall_cycles         {}", self.stall_cycles);
        println!("sim_results              {}", self.results_delivered);
        println!("sim_results_per_cycle    {throughput:.4}");
        println!("----------------------------------------------------------");
        println!("OPERATION MIX");
        println!("  op.fadd                {}", self.issued_add);
        println!("  op.fsub                {}", self.issued_sub);
        println!("  op.fmul                {}", self.issued_mul);
        println!("  op.fdiv                {}", self.issued_div);
        println!("----------------------------------------------------------");
        println!("DIVIDER");
        println!("  div.blocked_cycles     {}", self.blocked_divides);
        println!("  div.dropped            {}", self.dropped_divides);
        println!("  wb.max_backlog         {}", self.max_backlog);
        println!("----------------------------------------------------------");
        println!("EXCEPTION FLAGS");
        println!("  flags.nv               {}", self.flags.invalid);
        println!("  flags.of               {}", self.flags.overflow);
        println!("  flags.uf               {}", self.flags.underflow);
        println!("  flags.dz               {}", self.flags.div_by_zero);
        println!("  flags.nx               {}", self.flags.inexact);
        println!("==========================================================");
    }
}
