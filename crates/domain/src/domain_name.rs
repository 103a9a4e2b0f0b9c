use crate::DomainError;

pub const MAX_NAME_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Checks that `name` is usable as a query name.
///
/// A single trailing dot (absolute form) is accepted. Labels may contain
/// letters, digits, hyphens and underscores. Non-ASCII letters are allowed
/// so internationalized names reach the codec, which converts them to
/// punycode.
pub fn validate_domain_name(name: &str) -> Result<(), DomainError> {
    let relative = presentation_name(name);

    if relative.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}': name cannot be empty",
            name
        )));
    }
    if relative.len() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}': name exceeds {} characters",
            name, MAX_NAME_LENGTH
        )));
    }

    for label in relative.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}': empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}': label '{}' exceeds {} characters",
                name, label, MAX_LABEL_LENGTH
            )));
        }
        if !label
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}': label '{}' contains invalid characters",
                name, label
            )));
        }
    }

    Ok(())
}

/// Strips the trailing root dot, if any.
pub fn presentation_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Appends the root dot so the codec treats the name as fully qualified.
pub fn absolute_name(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
