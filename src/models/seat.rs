use serde::{Deserialize, Serialize};

use super::User;

/// Stable seat identifier, 1..=N, assigned once at construction.
pub type SeatId = u32;

/// Occupancy state of a single seat.
///
/// The wire format of the service this replaces encoded "empty" as seat
/// number 0 and "occupied" as the seat's own number; here the state is a
/// proper enum and the number is derived at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Occupancy {
    Empty,
    Occupied { user: User },
}

impl Occupancy {
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupancy::Empty)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Occupied { user } => Some(user),
        }
    }
}

/// One unit of bookable inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub occupancy: Occupancy,
}

impl Seat {
    pub fn empty(id: SeatId) -> Self {
        Seat {
            id,
            occupancy: Occupancy::Empty,
        }
    }
}
