//! Result ordering: same-class in issue order, divides first on conflicts,
//! and no result lost to arbitration.

use fpsim_core::config::DivFullPolicy;
use fpsim_core::core::pipeline::signals::{FpOp, OpRequest};
use pretty_assertions::assert_eq;

use crate::common::harness::{replay, scheduler};

fn add(dest: u8) -> OpRequest {
    OpRequest::from_f32(FpOp::Add, f32::from(dest), 0.5, dest)
}

fn div(dest: u8) -> OpRequest {
    OpRequest::from_f32(FpOp::Div, f32::from(dest), 2.0, dest)
}

#[test]
fn test_fixed_results_in_issue_order() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let schedule: Vec<_> = (0..6u8).map(|i| (u64::from(i), add(i + 1))).collect();
    let out = replay(&mut sched, &schedule, 20);
    let dests: Vec<_> = out.iter().map(|(c, r)| (*c, r.dest)).collect();
    assert_eq!(dests, vec![(3, 1), (4, 2), (5, 3), (6, 4), (7, 5), (8, 6)]);
}

#[test]
fn test_cross_class_completes_out_of_order() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let out = replay(&mut sched, &[(0, div(10)), (1, add(11))], 40);
    let dests: Vec<_> = out.iter().map(|(c, r)| (*c, r.dest)).collect();
    assert_eq!(dests, vec![(4, 11), (26, 10)]);
}

#[test]
fn test_divide_wins_arbitration_and_add_is_backlogged() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    // The add issued at 23 would deliver at 26, colliding with the divide.
    let out = replay(&mut sched, &[(0, div(1)), (23, add(2))], 40);
    let dests: Vec<_> = out.iter().map(|(c, r)| (*c, r.dest)).collect();
    assert_eq!(dests, vec![(26, 1), (27, 2)]);
}

#[test]
fn test_backlog_drains_in_order_behind_divides() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let schedule = [
        (0, div(1)),
        (1, div(2)),
        (2, div(3)),
        (23, add(4)),
        (24, add(5)),
        (25, add(6)),
    ];
    let out = replay(&mut sched, &schedule, 40);
    let dests: Vec<_> = out.iter().map(|(c, r)| (*c, r.dest)).collect();
    assert_eq!(
        dests,
        vec![(26, 1), (27, 2), (28, 3), (29, 4), (30, 5), (31, 6)]
    );
    assert!(sched.is_idle());
}

#[test]
fn test_results_match_operands() {
    let mut sched = scheduler(4, DivFullPolicy::Stall);
    let out = replay(&mut sched, &[(0, div(9)), (1, add(3))], 40);
    for (_, resp) in out {
        let expected = if resp.dest == 9 { 4.5f32 } else { 3.5f32 };
        assert_eq!(resp.result_f32(), expected);
    }
}
