//! Execution scheduler.
//!
//! The scheduler is the cycle-level owner of every in-flight operation. Each
//! call to [`ExecutionScheduler::tick`] models one clock edge and runs, in
//! order:
//! 1. **Arbitrate:** Pick at most one result for the shared output channel.
//!    A terminal division wins (oldest first); otherwise the oldest
//!    fixed-pipe result leaves the writeback backlog.
//! 2. **Divide:** Advance every occupied division slot by one iteration.
//! 3. **Compute:** Run the arithmetic for the fixed-pipe stage issued last cycle.
//! 4. **Issue:** Accept the presented request into the fixed pipe or a
//!    division slot.
//!
//! A global stall freezes the fixed pipe, issue and the output channel, but
//! division slots keep iterating. Results that lose arbitration wait in the
//! backlog, so nothing is ever dropped from the output side.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::config::{DivFullPolicy, SchedulerConfig};
use crate::core::pipeline::division_pool::DivisionPool;
use crate::core::pipeline::fixed_pipe::FixedPipe;
use crate::core::pipeline::signals::{FpOp, IssueStatus, OpRequest, OpResponse, TickOutput};

/// Cycle-accurate scheduler for the fixed pipe and the division pool.
#[derive(Clone, Debug)]
pub struct ExecutionScheduler {
    pipe: FixedPipe,
    divs: DivisionPool,
    backlog: VecDeque<OpResponse>,
    policy: DivFullPolicy,
    cycle: u64,
}

impl ExecutionScheduler {
    /// Creates an idle scheduler.
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            pipe: FixedPipe::new(),
            divs: DivisionPool::new(config.div_slots.max(1)),
            backlog: VecDeque::new(),
            policy: config.div_full_policy,
            cycle: 0,
        }
    }

    /// Advances the scheduler by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `request` - Operation presented this cycle; ignored unless `valid`.
    /// * `stall` - Global stall: freezes the fixed pipe, issue and output.
    ///
    /// # Returns
    ///
    /// The output channel for this cycle and the fate of `request`.
    pub fn tick(&mut self, request: &OpRequest, stall: bool) -> TickOutput {
        if stall {
            self.divs.advance();
            self.cycle += 1;
            let issue = if request.valid {
                debug!(cycle = self.cycle - 1, op = ?request.op, "request held by stall");
                IssueStatus::Stalled
            } else {
                IssueStatus::Idle
            };
            return TickOutput {
                response: OpResponse::idle(),
                issue,
            };
        }

        if let Some(done) = self.pipe.retire() {
            self.backlog.push_back(done);
        }
        let response = self
            .divs
            .take_ready()
            .or_else(|| self.backlog.pop_front())
            .unwrap_or_else(OpResponse::idle);
        if response.valid {
            trace!(
                cycle = self.cycle,
                dest = response.dest,
                result = response.result,
                flags = %response.flags,
                "deliver"
            );
        }

        self.divs.advance();
        self.pipe.compute();
        let issue = self.issue(request);
        self.pipe.advance();
        self.cycle += 1;

        TickOutput { response, issue }
    }

    fn issue(&mut self, request: &OpRequest) -> IssueStatus {
        if !request.valid {
            return IssueStatus::Idle;
        }
        if request.op != FpOp::Div {
            self.pipe.issue(request);
            trace!(cycle = self.cycle, op = request.op.mnemonic(), dest = request.dest, "issue");
            return IssueStatus::Accepted;
        }
        if let Some(slot) = self.divs.issue(request) {
            trace!(cycle = self.cycle, slot, dest = request.dest, "issue fdiv.s");
            return IssueStatus::Accepted;
        }
        match self.policy {
            DivFullPolicy::Stall => {
                debug!(cycle = self.cycle, dest = request.dest, "divide blocked: no free slot");
                IssueStatus::Blocked
            }
            DivFullPolicy::Drop => {
                warn!(cycle = self.cycle, dest = request.dest, "divide dropped: no free slot");
                IssueStatus::Dropped
            }
        }
    }

    /// Invalidates every stage, slot and backlog entry and rewinds the cycle count.
    pub fn reset(&mut self) {
        debug!(cycle = self.cycle, in_flight = self.in_flight(), "reset");
        self.pipe.clear();
        self.divs.clear();
        self.backlog.clear();
        self.cycle = 0;
    }

    /// Returns true if a request for `op` would be accepted on the next
    /// unstalled cycle.
    ///
    /// A terminal division counts as free: arbitration releases its slot
    /// before issue within the same tick.
    pub fn can_accept(&self, op: FpOp) -> bool {
        !op.is_divide() || self.divs.free_slot().is_some() || self.divs.has_ready()
    }

    /// Operations issued but not yet delivered.
    pub fn in_flight(&self) -> usize {
        self.pipe.occupied() + self.divs.occupied() + self.backlog.len()
    }

    /// Returns true if nothing is in flight.
    pub fn is_idle(&self) -> bool {
        self.in_flight() == 0
    }

    /// Cycles elapsed since construction or the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Fixed-pipe results waiting for the output channel.
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    /// Division slots currently free.
    pub fn free_div_slots(&self) -> usize {
        self.divs.free_slots()
    }

    /// Total division slots.
    pub fn div_slots(&self) -> usize {
        self.divs.capacity()
    }
}
