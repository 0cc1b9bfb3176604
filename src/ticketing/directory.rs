use std::collections::HashMap;

use uuid::Uuid;

use crate::models::User;

/// Secondary index of known purchasers, keyed by a synthetic id minted at
/// insertion time. First names are descriptive attributes and may collide;
/// removal by first name clears every matching entry.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<Uuid, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user under a fresh synthetic id and returns it.
    pub fn insert(&mut self, user: User) -> Uuid {
        let id = Uuid::new_v4();
        self.users.insert(id, user);
        id
    }

    pub fn contains_first_name(&self, first_name: &str) -> bool {
        self.users.values().any(|user| user.first_name == first_name)
    }

    /// Removes every entry with the given first name, returning how many were
    /// dropped.
    pub fn remove_by_first_name(&mut self, first_name: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|_, user| user.first_name != first_name);
        before - self.users.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, email: &str) -> User {
        User {
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn insert_mints_distinct_ids() {
        let mut dir = UserDirectory::new();
        let a = dir.insert(user("John", "john@example.com"));
        let b = dir.insert(user("John", "john.b@example.com"));
        assert_ne!(a, b);
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn remove_by_first_name_clears_all_matches() {
        let mut dir = UserDirectory::new();
        dir.insert(user("John", "john@example.com"));
        dir.insert(user("John", "john.b@example.com"));
        dir.insert(user("Jane", "jane@example.com"));

        assert_eq!(dir.remove_by_first_name("John"), 2);
        assert!(!dir.contains_first_name("John"));
        assert!(dir.contains_first_name("Jane"));
    }

    #[test]
    fn remove_unknown_first_name_is_a_noop() {
        let mut dir = UserDirectory::new();
        dir.insert(user("Jane", "jane@example.com"));
        assert_eq!(dir.remove_by_first_name("John"), 0);
        assert_eq!(dir.len(), 1);
    }
}
