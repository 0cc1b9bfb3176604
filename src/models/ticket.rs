use serde::{Deserialize, Serialize};

use super::User;

/// Travel details submitted with a purchase. Transient: only the seat/user
/// linkage persists, never the ticket itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub user: User,
    #[serde(rename = "pricePaid", default)]
    pub price_paid: f64,
}

/// Confirmation wrapper echoed back to the caller. Regenerated on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub ticket: Ticket,
}

impl Receipt {
    pub fn for_ticket(ticket: Ticket) -> Self {
        Receipt { ticket }
    }
}
