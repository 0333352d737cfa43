//! Cryptographic Utilities

use rand::distributions::Alphanumeric;
use rand::{Rng, rngs::OsRng};

/// Generate a random string over `[A-Za-z0-9]` from the OS CSPRNG
///
/// Each character is drawn uniformly from the 62 symbols, so a string of
/// length `len` carries `len * log2(62)` bits of entropy (about 148 for 25).
pub fn random_alphanumeric(len: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
