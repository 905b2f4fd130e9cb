use gethost_domain::DomainError;

/// Longest textual DNS name; nothing longer can match a cached hostname.
const MAX_FRAGMENT_LEN: usize = 253;

pub fn validate_fragment(fragment: &str) -> Result<(), DomainError> {
    if fragment.len() > MAX_FRAGMENT_LEN {
        return Err(DomainError::InvalidQuery(format!(
            "fragment longer than {} characters",
            MAX_FRAGMENT_LEN
        )));
    }
    if fragment.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(DomainError::InvalidQuery(
            "fragment contains whitespace or control characters".to_string(),
        ));
    }
    Ok(())
}
