pub mod directory;
pub mod seats;

use tokio::sync::Mutex;
use validator::Validate;

use crate::error::ServiceError;
use crate::models::{Receipt, SeatId, Ticket, User};
use directory::UserDirectory;
use seats::SeatTable;

/// Everything guarded by the reservation lock. The seat table and the user
/// directory are always mutated together, so they share one critical section.
#[derive(Debug)]
struct ReservationState {
    seats: SeatTable,
    directory: UserDirectory,
}

/// The reservation core. Each public operation takes the lock for its full
/// duration; no two operations ever interleave, and no operation observes
/// another's partial effect.
#[derive(Debug)]
pub struct TicketingService {
    state: Mutex<ReservationState>,
}

/// Parallel snapshot of occupied seats and their purchasers. `users[i]` is the
/// occupant of `seats[i]`.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub users: Vec<User>,
    pub seats: Vec<(SeatId, User)>,
}

impl TicketingService {
    pub fn new(seat_count: u32) -> Self {
        TicketingService {
            state: Mutex::new(ReservationState {
                seats: SeatTable::new(seat_count),
                directory: UserDirectory::new(),
            }),
        }
    }

    /// Allocates the lowest free seat to the ticket's user and registers the
    /// user in the directory. The receipt echoes the submitted ticket
    /// unchanged; price and route are not validated.
    pub async fn purchase_ticket(&self, ticket: Ticket) -> Result<Receipt, ServiceError> {
        let mut state = self.state.lock().await;

        ticket
            .user
            .validate()
            .map_err(|_| ServiceError::InvalidArgument("user information is invalid".to_string()))?;

        let seat_id = state
            .seats
            .find_free_seat()
            .ok_or_else(|| ServiceError::ResourceExhausted("no available seats".to_string()))?;

        state.seats.occupy(seat_id, ticket.user.clone());
        state.directory.insert(ticket.user.clone());

        tracing::debug!(seat_id, email = %ticket.user.email, "seat assigned");
        Ok(Receipt::for_ticket(ticket))
    }

    /// Confirms a prior purchase. The returned receipt wraps the *input*
    /// ticket; the stored seat data is only consulted for the identity match.
    pub async fn view_receipt(&self, ticket: Ticket) -> Result<Receipt, ServiceError> {
        let state = self.state.lock().await;

        let matched = state
            .seats
            .list_occupied()
            .iter()
            .any(|(_, user)| user.same_identity(&ticket.user));
        if !matched {
            return Err(ServiceError::NotFound("receipt not found".to_string()));
        }

        Ok(Receipt::for_ticket(ticket))
    }

    /// Full snapshot of current assignments. Any section filter the caller
    /// supplies is ignored.
    pub async fn view_admin_details(&self) -> AdminView {
        let state = self.state.lock().await;

        let seats = state.seats.list_occupied();
        let users = seats.iter().map(|(_, user)| user.clone()).collect();
        AdminView { users, seats }
    }

    /// Drops every directory entry and every seat assignment matching the
    /// user's first name. Fails when the directory knows no such user.
    pub async fn remove_user(&self, user: &User) -> Result<(), ServiceError> {
        let mut state = self.state.lock().await;

        if !state.directory.contains_first_name(&user.first_name) {
            return Err(ServiceError::NotFound(
                "user to be removed not found".to_string(),
            ));
        }

        let removed = state.directory.remove_by_first_name(&user.first_name);
        let held: Vec<SeatId> = state.seats.seats_held_by_first_name(&user.first_name);
        for seat_id in &held {
            state.seats.release(*seat_id);
        }

        tracing::debug!(
            first_name = %user.first_name,
            directory_entries = removed,
            seats_freed = held.len(),
            "user removed"
        );
        Ok(())
    }

    /// Moves the first seat held under the user's first name to a free seat,
    /// releasing the old one, and replaces the stored user record with the
    /// submitted one.
    pub async fn modify_seat(&self, user: User) -> Result<(), ServiceError> {
        let mut state = self.state.lock().await;

        let current = state
            .seats
            .seats_held_by_first_name(&user.first_name)
            .first()
            .copied()
            .ok_or_else(|| ServiceError::NotFound("user not found in seats".to_string()))?;

        // The external contract reports a full inventory here as an internal
        // failure rather than exhaustion.
        let target = state
            .seats
            .find_free_seat()
            .ok_or_else(|| ServiceError::Internal("no free seat available".to_string()))?;

        state.seats.release(current);
        state.seats.occupy(target, user);

        tracing::debug!(from = current, to = target, "seat reassigned");
        Ok(())
    }
}
