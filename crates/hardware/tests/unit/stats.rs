//! # Statistics Tests
//!
//! Counters recorded by the simulator over short runs.

use fpsim_core::core::pipeline::signals::{FpOp, IssueStatus, OpRequest, OpResponse, TickOutput};
use fpsim_core::core::units::fpu::exception_flags::FpFlags;
use fpsim_core::stats::FpuStats;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn test_record_counts_issue_and_delivery() {
    let mut stats = FpuStats::default();
    let req = OpRequest::from_f32(FpOp::Mul, 1.0, 2.0, 1);
    let out = TickOutput {
        response: OpResponse::new(0, 1, FpFlags::UF | FpFlags::NX),
        issue: IssueStatus::Accepted,
    };
    stats.record(&req, &out, false, 2);

    assert_eq!(stats.cycles, 1);
    assert_eq!(stats.issued_mul, 1);
    assert_eq!(stats.issued(), 1);
    assert_eq!(stats.results_delivered, 1);
    assert_eq!(stats.flags.underflow, 1);
    assert_eq!(stats.flags.inexact, 1);
    assert_eq!(stats.flags.overflow, 0);
    assert_eq!(stats.max_backlog, 2);
}

#[test]
fn test_stall_and_blocked_counts() {
    let mut stats = FpuStats::default();
    let req = OpRequest::from_f32(FpOp::Div, 1.0, 2.0, 1);
    let stalled = TickOutput {
        response: OpResponse::idle(),
        issue: IssueStatus::Stalled,
    };
    let blocked = TickOutput {
        response: OpResponse::idle(),
        issue: IssueStatus::Blocked,
    };
    stats.record(&req, &stalled, true, 0);
    stats.record(&req, &blocked, false, 0);

    assert_eq!(stats.stall_cycles, 1);
    assert_eq!(stats.blocked_divides, 1);
    assert_eq!(stats.issued(), 0);
    assert_eq!(stats.results_delivered, 0);
}

#[test]
fn test_simulator_run_mix() {
    let mut ctx = TestContext::new();
    let reqs = [
        OpRequest::from_f32(FpOp::Add, 1.0, 2.0, 1),
        OpRequest::from_f32(FpOp::Sub, 1.0, 2.0, 2),
        OpRequest::from_f32(FpOp::Mul, 1.0, 2.0, 3),
        OpRequest::from_f32(FpOp::Div, 1.0, 0.0, 4),
        OpRequest::from_f32(FpOp::Div, 0.0, 0.0, 5),
    ];
    let results = ctx.sim.run(&reqs, 100).unwrap();
    assert_eq!(results.len(), 5);

    let stats = ctx.sim.stats();
    assert_eq!(
        (stats.issued_add, stats.issued_sub, stats.issued_mul, stats.issued_div),
        (1, 1, 1, 2)
    );
    assert_eq!(stats.results_delivered, 5);
    assert_eq!(stats.flags.div_by_zero, 1);
    assert_eq!(stats.flags.invalid, 1);
    assert_eq!(stats.cycles, ctx.sim.scheduler().cycle());
}

#[test]
fn test_json_report() {
    let mut stats = FpuStats::default();
    stats.cycles = 42;
    stats.flags.inexact = 3;
    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert_eq!(json["cycles"], 42);
    assert_eq!(json["flags"]["inexact"], 3);
    assert_eq!(json["max_backlog"], 0);
}
