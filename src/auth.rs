//! Access Gates
//!
//! A single shared passphrase unlocks the app for the device; the unlocked
//! flag is kept in localStorage with no expiry. Factory reset sits behind a
//! second, different passphrase.

use gloo_storage::{LocalStorage, Storage};

const SESSION_KEY: &str = "kaimono_auth_v1";

const ACCESS_KEY: &str = "8349";
const RESET_KEY: &str = "hirake5ma";

/// Whether this device has been unlocked before
pub fn is_unlocked() -> bool {
    LocalStorage::get(SESSION_KEY).unwrap_or(false)
}

/// Persist the unlocked flag
pub fn remember_unlock() {
    let _ = LocalStorage::set(SESSION_KEY, true);
}

/// Drop the unlocked flag (factory reset)
pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

/// Check the app access passphrase
pub fn check_access_key(input: &str) -> bool {
    input == ACCESS_KEY
}

/// Check the factory-reset passphrase
pub fn check_reset_key(input: &str) -> bool {
    input == RESET_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passphrases_are_distinct() {
        assert!(check_access_key("8349"));
        assert!(!check_reset_key("8349"));
        assert!(check_reset_key("hirake5ma"));
        assert!(!check_access_key("hirake5ma"));
        assert!(!check_access_key(""));
    }
}
