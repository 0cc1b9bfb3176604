use crate::models::{Occupancy, Seat, SeatId, User};

/// Fixed inventory of seats, ordered ascending by id.
///
/// The table itself does no locking; the reservation core wraps it in its
/// critical section. Allocation is a deterministic ascending-id scan, so the
/// first purchase on a fresh table always gets seat 1.
#[derive(Debug)]
pub struct SeatTable {
    seats: Vec<Seat>,
}

impl SeatTable {
    /// Creates `seat_count` empty seats numbered 1..=seat_count. Ids are never
    /// reused for a different slot and the table is never resized.
    pub fn new(seat_count: u32) -> Self {
        let seats = (1..=seat_count).map(Seat::empty).collect();
        SeatTable { seats }
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// Lowest-numbered empty seat, if any.
    pub fn find_free_seat(&self) -> Option<SeatId> {
        self.seats
            .iter()
            .find(|seat| seat.occupancy.is_empty())
            .map(|seat| seat.id)
    }

    /// Assigns the seat to `user`. Callers must only pass an id obtained from
    /// `find_free_seat` within the same critical section.
    pub fn occupy(&mut self, seat_id: SeatId, user: User) {
        if let Some(seat) = self.seat_mut(seat_id) {
            seat.occupancy = Occupancy::Occupied { user };
        }
    }

    /// Resets the seat to empty, dropping any associated user.
    pub fn release(&mut self, seat_id: SeatId) {
        if let Some(seat) = self.seat_mut(seat_id) {
            seat.occupancy = Occupancy::Empty;
        }
    }

    /// Snapshot of occupied seats in ascending id order. Later mutation does
    /// not affect a previously returned snapshot.
    pub fn list_occupied(&self) -> Vec<(SeatId, User)> {
        self.seats
            .iter()
            .filter_map(|seat| seat.occupancy.user().map(|user| (seat.id, user.clone())))
            .collect()
    }

    /// Occupied seats whose user has the given first name, ascending id order.
    pub fn seats_held_by_first_name(&self, first_name: &str) -> Vec<SeatId> {
        self.seats
            .iter()
            .filter(|seat| {
                seat.occupancy
                    .user()
                    .is_some_and(|user| user.first_name == first_name)
            })
            .map(|seat| seat.id)
            .collect()
    }

    fn seat_mut(&mut self, seat_id: SeatId) -> Option<&mut Seat> {
        // ids are 1..=N in insertion order, so this is an index lookup
        self.seats.get_mut(seat_id.checked_sub(1)? as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user(first: &str) -> User {
        User {
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
        }
    }

    #[test]
    fn allocation_is_ascending() {
        let mut table = SeatTable::new(3);
        for expected in 1..=3 {
            let id = table.find_free_seat().unwrap();
            assert_eq!(id, expected);
            table.occupy(id, user("John"));
        }
        assert_eq!(table.find_free_seat(), None);
    }

    #[test]
    fn release_makes_seat_allocatable_again() {
        let mut table = SeatTable::new(2);
        table.occupy(1, user("John"));
        table.occupy(2, user("Jane"));
        table.release(1);
        assert_eq!(table.find_free_seat(), Some(1));
        assert_eq!(table.list_occupied(), vec![(2, user("Jane"))]);
    }

    #[test]
    fn snapshot_is_not_a_live_view() {
        let mut table = SeatTable::new(2);
        table.occupy(1, user("John"));
        let snapshot = table.list_occupied();
        table.release(1);
        assert_eq!(snapshot, vec![(1, user("John"))]);
        assert!(table.list_occupied().is_empty());
    }

    #[test]
    fn seats_held_by_first_name_matches_all() {
        let mut table = SeatTable::new(3);
        table.occupy(1, user("John"));
        table.occupy(2, user("Jane"));
        table.occupy(3, user("John"));
        assert_eq!(table.seats_held_by_first_name("John"), vec![1, 3]);
        assert!(table.seats_held_by_first_name("Mary").is_empty());
    }

    proptest! {
        // Filling the table always yields each id exactly once, in order.
        #[test]
        fn fill_assigns_distinct_ids(seat_count in 1u32..64) {
            let mut table = SeatTable::new(seat_count);
            let mut assigned = Vec::new();
            while let Some(id) = table.find_free_seat() {
                table.occupy(id, user("John"));
                assigned.push(id);
            }
            let expected: Vec<SeatId> = (1..=seat_count).collect();
            prop_assert_eq!(assigned, expected);
        }

        // Releasing any subset frees exactly those seats for reallocation.
        #[test]
        fn release_frees_exactly_released(seat_count in 1u32..32, to_release in proptest::collection::hash_set(1u32..32, 0..8)) {
            let mut table = SeatTable::new(seat_count);
            while let Some(id) = table.find_free_seat() {
                table.occupy(id, user("John"));
            }
            let released: Vec<SeatId> = to_release.iter().copied().filter(|id| *id <= seat_count).collect();
            for id in &released {
                table.release(*id);
            }
            let occupied: Vec<SeatId> = table.list_occupied().into_iter().map(|(id, _)| id).collect();
            for id in 1..=seat_count {
                prop_assert_eq!(occupied.contains(&id), !released.contains(&id));
            }
        }
    }
}
