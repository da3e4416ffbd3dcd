//! Input normalization helpers

/// Canonical form of an email address: trimmed and lowercased.
///
/// Emails are unique per account, so both signup and login must normalize
/// before hitting the store or two spellings of one address diverge.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Canonical form of a display name: trimmed.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A@X.com", "a@x.com")]
    #[case("  ann@example.com  ", "ann@example.com")]
    #[case("MiXeD@Example.COM", "mixed@example.com")]
    fn email_normalization(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_email(raw), expected);
    }

    #[test]
    fn name_is_trimmed_only() {
        assert_eq!(normalize_name("  Ann Lee "), "Ann Lee");
        assert_eq!(normalize_name("Ann"), "Ann");
    }
}
