//! Simulator: owns the scheduler and the register bank side-by-side.
//!
//! The scheduler never touches architectural state. The simulator reads
//! operands from the register bank to build requests, ticks the scheduler,
//! and commits each delivered result back through the writeback port.

use tracing::info;

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::{ConfigError, SimError};
use crate::common::reg::RegisterBank;
use crate::config::Config;
use crate::core::pipeline::ExecutionScheduler;
use crate::core::pipeline::signals::{FpOp, OpRequest, OpResponse, TickOutput};
use crate::core::pipeline::writeback::writeback;
use crate::stats::FpuStats;

fn check_dest(dest: u8) -> Result<(), SimError> {
    if usize::from(dest) >= NUM_REGISTERS {
        return Err(SimError::RegisterOutOfRange(dest, NUM_REGISTERS));
    }
    Ok(())
}

/// Top-level simulator: scheduler + register bank + statistics.
#[derive(Clone, Debug)]
pub struct Simulator {
    scheduler: ExecutionScheduler,
    regs: RegisterBank,
    stats: FpuStats,
    trace: bool,
}

impl Simulator {
    /// Creates a simulator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scheduler: ExecutionScheduler::new(&config.scheduler),
            regs: RegisterBank::new(),
            stats: FpuStats::default(),
            trace: config.general.trace_results,
        })
    }

    /// Builds a request whose operands are read from registers `rs1` and `rs2`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if any index is outside the bank.
    pub fn request(&self, op: FpOp, dest: u8, rs1: u8, rs2: u8) -> Result<OpRequest, SimError> {
        check_dest(dest)?;
        let a = self.regs.read(rs1)?;
        let b = self.regs.read(rs2)?;
        Ok(OpRequest::new(op, a, b, dest))
    }

    /// Advances one cycle and commits the delivered result, if any.
    ///
    /// A valid request whose destination lies outside the bank is rejected
    /// before the scheduler sees it; the cycle does not advance.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] for such a request, or if the
    /// delivered result names a register outside the bank.
    pub fn tick(&mut self, request: &OpRequest, stall: bool) -> Result<TickOutput, SimError> {
        if request.valid {
            check_dest(request.dest)?;
        }
        let cycle = self.scheduler.cycle();
        let out = self.scheduler.tick(request, stall);
        self.stats
            .record(request, &out, stall, self.scheduler.backlog_len());

        if writeback(&out.response, &mut self.regs)? && self.trace {
            info!(
                cycle,
                dest = out.response.dest,
                value = f64::from(out.response.result_f32()),
                bits = out.response.result,
                flags = %out.response.flags,
                "commit"
            );
        }
        Ok(out)
    }

    /// Presents each request in order, re-presenting it while the scheduler
    /// reports it must retry, then drains.
    ///
    /// # Returns
    ///
    /// Every delivered response, in delivery order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] without ticking if any valid
    /// request names a destination outside the bank,
    /// [`SimError::DrainTimeout`] if the whole run exceeds `max_cycles`, or
    /// any writeback error.
    pub fn run(
        &mut self,
        requests: &[OpRequest],
        max_cycles: u64,
    ) -> Result<Vec<OpResponse>, SimError> {
        for request in requests.iter().filter(|r| r.valid) {
            check_dest(request.dest)?;
        }

        let start = self.scheduler.cycle();
        let mut delivered = Vec::new();

        for request in requests {
            loop {
                if self.scheduler.cycle() - start >= max_cycles {
                    return Err(SimError::DrainTimeout(max_cycles, self.scheduler.in_flight()));
                }
                let out = self.tick(request, false)?;
                if out.response.valid {
                    delivered.push(out.response);
                }
                if !out.issue.must_retry() {
                    break;
                }
            }
        }

        let used = self.scheduler.cycle() - start;
        delivered.extend(self.drain(max_cycles.saturating_sub(used))?);
        Ok(delivered)
    }

    /// Ticks idle cycles until nothing is in flight.
    ///
    /// # Returns
    ///
    /// The responses delivered while draining.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DrainTimeout`] if work remains after `max_cycles`.
    pub fn drain(&mut self, max_cycles: u64) -> Result<Vec<OpResponse>, SimError> {
        let idle = OpRequest::idle();
        let mut delivered = Vec::new();
        let mut elapsed = 0;
        while !self.scheduler.is_idle() {
            if elapsed >= max_cycles {
                return Err(SimError::DrainTimeout(max_cycles, self.scheduler.in_flight()));
            }
            let out = self.tick(&idle, false)?;
            if out.response.valid {
                delivered.push(out.response);
            }
            elapsed += 1;
        }
        Ok(delivered)
    }

    /// Synchronous reset: empties the scheduler, zeroes the register bank and
    /// clears statistics.
    pub fn reset(&mut self) {
        self.scheduler.reset();
        self.regs.reset();
        self.stats = FpuStats::default();
    }

    /// Register bank.
    pub const fn regs(&self) -> &RegisterBank {
        &self.regs
    }

    /// Mutable register bank, for loading operands.
    pub const fn regs_mut(&mut self) -> &mut RegisterBank {
        &mut self.regs
    }

    /// Scheduler state.
    pub const fn scheduler(&self) -> &ExecutionScheduler {
        &self.scheduler
    }

    /// Statistics collected since construction or the last reset.
    pub const fn stats(&self) -> &FpuStats {
        &self.stats
    }
}
