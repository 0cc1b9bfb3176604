pub mod user;
pub mod ticket;
pub mod seat;
pub mod book;

pub use user::User;
pub use ticket::{Receipt, Ticket};
pub use seat::{Occupancy, Seat, SeatId};
pub use book::Book;
