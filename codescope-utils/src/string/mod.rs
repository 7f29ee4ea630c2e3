//! String helpers

/// Case-insensitive substring test against a needle that is already
/// lowercase. An empty needle always matches.
///
/// Lowercase the needle once with [`str::to_lowercase`] when matching it
/// against many haystacks.
pub fn contains_lowercased(haystack: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_lowercased() {
        assert!(contains_lowercased("UserService", "service"));
        assert!(contains_lowercased("src/api/Auth.ts", "auth"));
        assert!(!contains_lowercased("Button", "modal"));
        assert!(contains_lowercased("anything", ""));
        assert!(!contains_lowercased("", "x"));
    }

    #[test]
    fn test_needle_is_not_lowercased_again() {
        assert!(!contains_lowercased("UserService", "Service"));
    }
}
