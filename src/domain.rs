/// Domain validation and blocklist checks for Wayfinder lookups.
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{LookupError, Result};

/// Accepted domain syntax: letters, digits, dot, and hyphen only.
fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9.-]+$").expect("domain pattern compiles"))
}

pub fn is_valid_domain(domain: &str) -> bool {
    domain_pattern().is_match(domain)
}

/// Gate a lookup before any network call: syntax first, then blocklist.
pub fn check_domain(domain: &str, blocklist: &[String]) -> Result<()> {
    if !is_valid_domain(domain) {
        return Err(LookupError::InvalidDomain(domain.to_string()));
    }
    if blocklist.iter().any(|blocked| blocked == domain) {
        return Err(LookupError::BlockedDomain(domain.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("sub.example.co.uk"));
        assert!(is_valid_domain("my-site.io"));
        assert!(is_valid_domain("EXAMPLE.COM"));
        assert!(is_valid_domain("127.0.0.1"));
    }

    #[test]
    fn test_invalid_domains() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("bad domain!"));
        assert!(!is_valid_domain("exa_mple.com"));
        assert!(!is_valid_domain("example.com/path"));
        assert!(!is_valid_domain("münchen.de"));
    }

    #[test]
    fn test_check_domain_accepts_clean_domain() {
        let blocklist = vec!["evil.com".to_string()];
        assert!(check_domain("example.com", &blocklist).is_ok());
    }

    #[test]
    fn test_check_domain_rejects_bad_syntax() {
        let err = check_domain("bad domain!", &[]).unwrap_err();
        assert!(matches!(err, LookupError::InvalidDomain(_)));
    }

    #[test]
    fn test_check_domain_rejects_blocklisted() {
        let blocklist = vec!["evil.com".to_string()];
        let err = check_domain("evil.com", &blocklist).unwrap_err();
        assert!(matches!(err, LookupError::BlockedDomain(_)));
    }

    #[test]
    fn test_syntax_checked_before_blocklist() {
        let blocklist = vec!["bad domain!".to_string()];
        let err = check_domain("bad domain!", &blocklist).unwrap_err();
        assert!(matches!(err, LookupError::InvalidDomain(_)));
    }
}
