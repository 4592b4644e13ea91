//! Fixed and divide latencies on an unstalled scheduler.

use fpsim_core::common::constants::DIV_LATENCY;
use fpsim_core::config::DivFullPolicy;
use fpsim_core::core::pipeline::signals::{FpOp, IssueStatus, OpRequest};
use fpsim_core::core::units::fpu::exception_flags::FpFlags;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{replay, scheduler};

#[rstest]
#[case::add(FpOp::Add, 3.0, 2.0, 0x40A0_0000)]
#[case::sub(FpOp::Sub, 5.0, 5.0, 0x0000_0000)]
#[case::mul(FpOp::Mul, -1.5, 4.0, 0xC0C0_0000)]
fn test_fixed_latency_is_three(
    #[case] op: FpOp,
    #[case] a: f32,
    #[case] b: f32,
    #[case] expected: u32,
) {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let out = replay(&mut sched, &[(5, OpRequest::from_f32(op, a, b, 9))], 20);
    assert_eq!(out.len(), 1);
    let (cycle, resp) = out[0];
    assert_eq!(cycle, 5 + 3);
    assert_eq!(resp.result, expected);
    assert_eq!(resp.dest, 9);
    assert_eq!(resp.flags, FpFlags::NONE);
}

#[test]
fn test_divide_latency() {
    assert_eq!(DIV_LATENCY, 26);
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let out = replay(
        &mut sched,
        &[(2, OpRequest::from_f32(FpOp::Div, 10.0, 4.0, 3))],
        40,
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0, 2 + DIV_LATENCY);
    assert_eq!(out[0].1.result, 0x4020_0000);
    assert_eq!(out[0].1.dest, 3);
}

#[test]
fn test_consecutive_divides_deliver_on_consecutive_cycles() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let out = replay(
        &mut sched,
        &[
            (0, OpRequest::from_f32(FpOp::Div, 1.0, 3.0, 1)),
            (1, OpRequest::from_f32(FpOp::Div, 2.0, 3.0, 2)),
        ],
        40,
    );
    let summary: Vec<_> = out.iter().map(|(c, r)| (*c, r.dest, r.result)).collect();
    assert_eq!(summary, vec![(26, 1, 0x3EAA_AAAB), (27, 2, 0x3F2A_AAAB)]);
}

#[test]
fn test_special_divide_has_full_latency() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let out = replay(
        &mut sched,
        &[(0, OpRequest::from_f32(FpOp::Div, 1.0, 0.0, 4))],
        40,
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0, 26);
    assert_eq!(out[0].1.result, 0x7F80_0000);
    assert_eq!(out[0].1.flags, FpFlags::DZ);
}

#[test]
fn test_fixed_pipe_accepts_every_cycle() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    for i in 0..10u8 {
        let req = OpRequest::from_f32(FpOp::Add, f32::from(i), 1.0, i + 1);
        assert_eq!(sched.tick(&req, false).issue, IssueStatus::Accepted);
    }
    assert_eq!(sched.in_flight(), 3);
}
