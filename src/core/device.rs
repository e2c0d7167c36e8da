//! Device Identifiers
//!
//! Random device ids for userless sessions.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated device ids (the provider accepts 20 to 30 characters).
pub const DEVICE_ID_LENGTH: usize = 30;

/// Generate a random alphanumeric device id.
pub fn generate_device_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(DEVICE_ID_LENGTH)
        .map(char::from)
        .collect()
}
