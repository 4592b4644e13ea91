//! Division slot pool.
//!
//! Divides are long and iterative, so each one runs in its own slot and
//! advances independently of the fixed pipe. The pool tracks issue order
//! with a sequence number so that, when several divisions finish together,
//! the oldest one is delivered first.

use crate::core::pipeline::signals::{OpRequest, OpResponse};
use crate::core::units::fpu::components::decompose;
use crate::core::units::fpu::divide::DivisionState;

/// One occupied division slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionSlot {
    /// Issue sequence number.
    pub seq: u64,
    /// Destination register index.
    pub dest: u8,
    /// Division state machine.
    pub state: DivisionState,
}

/// Fixed-size pool of division slots.
#[derive(Clone, Debug)]
pub struct DivisionPool {
    slots: Vec<Option<DivisionSlot>>,
    next_seq: u64,
}

impl DivisionPool {
    /// Creates a pool with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            next_seq: 0,
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a division.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of free slots.
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.occupied()
    }

    /// Index of the first free slot.
    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Starts a division in a free slot.
    ///
    /// # Returns
    ///
    /// The slot index, or `None` if every slot is busy.
    pub fn issue(&mut self, request: &OpRequest) -> Option<usize> {
        let idx = self.free_slot()?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[idx] = Some(DivisionSlot {
            seq,
            dest: request.dest,
            state: DivisionState::setup(decompose(request.operand_a), decompose(request.operand_b)),
        });
        Some(idx)
    }

    /// Runs one iteration in every occupied slot.
    pub fn advance(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.state.step();
        }
    }

    /// Frees the oldest terminal division and returns its result.
    pub fn take_ready(&mut self) -> Option<OpResponse> {
        let idx = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (i, s)))
            .filter(|(_, s)| s.state.is_terminal())
            .min_by_key(|(_, s)| s.seq)
            .map(|(i, _)| i)?;
        let slot = self.slots[idx].take()?;
        let (result, flags) = slot.state.result()?;
        Some(OpResponse::new(result, slot.dest, flags))
    }

    /// Returns true if some division has finished and awaits delivery.
    pub fn has_ready(&self) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|s| s.state.is_terminal())
    }

    /// Iterates the occupied slots.
    pub fn iter(&self) -> impl Iterator<Item = &DivisionSlot> {
        self.slots.iter().flatten()
    }

    /// Empties every slot and restarts the sequence count.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.next_seq = 0;
    }
}
