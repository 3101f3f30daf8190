//! Keys: unlock credentials the player can find.

use serde::{Deserialize, Serialize};

/// An unlock credential.
///
/// Locked exits name the key that opens them by identifier. Possession is
/// a one-way flag: once claimed, a key stays owned for the rest of the
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    identifier: String,
    owned: bool,
}

impl Key {
    /// Creates an unowned key.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            owned: false,
        }
    }

    /// Display name, also the token locked exits are matched against.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Takes possession of the key. Idempotent.
    pub fn claim(&mut self) {
        self.owned = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key_is_unowned() {
        let key = Key::new("brass");
        assert_eq!(key.identifier(), "brass");
        assert!(!key.is_owned());
    }

    #[test]
    fn test_claim_is_idempotent() {
        let mut key = Key::new("brass");
        key.claim();
        key.claim();
        assert!(key.is_owned());
    }
}
