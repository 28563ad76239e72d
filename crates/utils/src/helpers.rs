//! Helper functions

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix timestamp in seconds (0 if the clock is before the epoch)
pub fn current_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Truncate to at most `max_len` characters, ending with `suffix` when cut
pub fn truncate(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let head: String = s.chars().take(keep).collect();
    format!("{}{}", head, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10, "..."), "Hello");
        assert_eq!(truncate("Hello World", 8, "..."), "Hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "ç" and "ã" are two bytes each; cutting must stay on char boundaries
        assert_eq!(truncate("Programação avançada", 10, "..."), "Program...");
    }

    #[test]
    fn test_timestamp() {
        let ts = current_timestamp_secs();
        assert!(ts > 0);
    }
}
