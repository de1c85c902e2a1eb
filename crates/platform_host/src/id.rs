//! Process-unique string identifiers for persisted records.

use crate::time::next_monotonic_timestamp_ms;

const RANDOM_SUFFIX_LEN: usize = 11;

/// Generates an identifier made of a base-36 millisecond timestamp and a base-36 random suffix.
///
/// The timestamp part is monotonic within the process, so identifiers generated in the same
/// millisecond still differ even before the random suffix is considered.
pub fn generate_unique_id() -> String {
    let mut id = to_base36(next_monotonic_timestamp_ms());
    let mut suffix = to_base36(random_u64());
    suffix.truncate(RANDOM_SUFFIX_LEN);
    id.push_str(&suffix);
    id
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn random_u64() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
        (high << 32) | low
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        rand::random::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn identifiers_are_lowercase_alphanumeric() {
        let id = generate_unique_id();
        assert!(!id.is_empty());
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn identifiers_are_unique_in_a_tight_loop() {
        let ids = (0..500).map(|_| generate_unique_id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 500);
    }
}
