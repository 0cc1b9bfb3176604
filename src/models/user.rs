use serde::{Deserialize, Serialize};
use validator::Validate;

/// A purchaser. Descriptive attributes only; the user directory keys entries
/// by a synthetic id, never by these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(rename = "firstName", default)]
    #[validate(length(min = 1, message = "first name must not be empty"))]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    #[validate(length(min = 1, message = "last name must not be empty"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

impl User {
    /// Exact identity match on the (first name, last name, email) triple.
    pub fn same_identity(&self, other: &User) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.email == other.email
    }
}
