use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::{Debug, Display},
};

pub const MIN_SEATS: usize = 3;
pub const MAX_SEATS: usize = 5;

/// A position at the table, numbered from zero in turn order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(u8);

impl Seat {
    pub fn new(idx: usize) -> Self {
        debug_assert!(idx < MAX_SEATS, "idx={}", idx);
        Seat(idx as u8)
    }

    pub fn all(seats: usize) -> impl Iterator<Item = Seat> {
        (0..seats).map(Seat::new)
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }

    pub fn next(self, seats: usize) -> Self {
        self.offset(1, seats)
    }

    pub fn offset(self, n: usize, seats: usize) -> Self {
        Seat::new((self.idx() + n) % seats)
    }

    /// Seats in turn order starting with `self`.
    pub fn rotation(self, seats: usize) -> impl Iterator<Item = Seat> {
        (0..seats).map(move |n| self.offset(n, seats))
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
