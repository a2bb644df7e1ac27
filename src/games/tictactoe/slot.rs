//! Board slots and the set of slots still open for play.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A slot on the tic-tac-toe board, numbered 1-9 in reading order.
///
/// Only the nine real slots are representable, so an out-of-range
/// move can never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Top-left (slot 1)
    TopLeft,
    /// Top-center (slot 2)
    TopCenter,
    /// Top-right (slot 3)
    TopRight,
    /// Middle-left (slot 4)
    MiddleLeft,
    /// Center (slot 5)
    Center,
    /// Middle-right (slot 6)
    MiddleRight,
    /// Bottom-left (slot 7)
    BottomLeft,
    /// Bottom-center (slot 8)
    BottomCenter,
    /// Bottom-right (slot 9)
    BottomRight,
}

impl Slot {
    /// All 9 slots in reading order.
    pub const ALL: [Slot; 9] = [
        Slot::TopLeft,
        Slot::TopCenter,
        Slot::TopRight,
        Slot::MiddleLeft,
        Slot::Center,
        Slot::MiddleRight,
        Slot::BottomLeft,
        Slot::BottomCenter,
        Slot::BottomRight,
    ];

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// User-facing slot number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates a slot from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a slot from a user-facing number (1-9).
    #[instrument]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1..=9 => Self::from_index((number - 1) as usize),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Slot::TopLeft => "Top-left",
            Slot::TopCenter => "Top-center",
            Slot::TopRight => "Top-right",
            Slot::MiddleLeft => "Middle-left",
            Slot::Center => "Center",
            Slot::MiddleRight => "Middle-right",
            Slot::BottomLeft => "Bottom-left",
            Slot::BottomCenter => "Bottom-center",
            Slot::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Slots not yet occupied, kept in step with the board move by move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlots {
    slots: Vec<Slot>,
}

impl AvailableSlots {
    /// All nine slots open.
    pub fn full() -> Self {
        Self {
            slots: Slot::ALL.to_vec(),
        }
    }

    /// Removes a slot once it has been filled. Returns false if it was not open.
    pub fn remove(&mut self, slot: Slot) -> bool {
        match self.slots.iter().position(|s| *s == slot) {
            Some(i) => {
                self.slots.remove(i);
                true
            }
            None => false,
        }
    }

    /// Returns true if the slot is still open.
    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    /// Number of open slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true once every slot has been filled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Open slots in reading order.
    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }

    /// Uniformly samples one open slot, or `None` if none remain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Slot> {
        self.slots.choose(rng).copied()
    }
}

impl Default for AvailableSlots {
    fn default() -> Self {
        Self::full()
    }
}
