//! Format rules for slugs, email addresses and URLs.
//!
//! Valid slugs match `^[a-z0-9]+(-[a-z0-9]+)*$`:
//! - Lowercase ASCII letters, digits and single hyphens
//! - Cannot start or end with a hyphen
//! - Cannot have consecutive hyphens (`--`)

/// Validates a slug.
///
/// # Examples
/// ```
/// use backoffice::schema::rules::validate_slug;
///
/// assert!(validate_slug("my-category").is_ok());
/// assert!(validate_slug("2024-recap").is_ok());
///
/// assert!(validate_slug("").is_err());
/// assert!(validate_slug("My Category").is_err());
/// assert!(validate_slug("-lead").is_err());
/// assert!(validate_slug("trail-").is_err());
/// assert!(validate_slug("a--b").is_err());
/// ```
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.starts_with('-') {
        return Err(SlugError::LeadingHyphen);
    }

    let mut prev_was_hyphen = false;
    for ch in slug.chars() {
        if ch == '-' {
            if prev_was_hyphen {
                return Err(SlugError::ConsecutiveHyphens);
            }
            prev_was_hyphen = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            prev_was_hyphen = false;
        } else {
            return Err(SlugError::InvalidCharacter(ch));
        }
    }

    if prev_was_hyphen {
        return Err(SlugError::TrailingHyphen);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    Empty,
    LeadingHyphen,
    TrailingHyphen,
    ConsecutiveHyphens,
    InvalidCharacter(char),
}

impl std::fmt::Display for SlugError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlugError::Empty => write!(f, "cannot be empty"),
            SlugError::LeadingHyphen => write!(f, "cannot start with a hyphen"),
            SlugError::TrailingHyphen => write!(f, "cannot end with a hyphen"),
            SlugError::ConsecutiveHyphens => write!(f, "cannot contain consecutive hyphens"),
            SlugError::InvalidCharacter(ch) => write!(
                f,
                "contains invalid character '{}' (only lowercase letters, digits and hyphens allowed)",
                ch
            ),
        }
    }
}

impl std::error::Error for SlugError {}

/// Loose structural email check: one `@`, a non-empty local part and a
/// dotted domain without empty labels or whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Absolute `http`/`https` URL with a non-empty host and no whitespace.
pub fn is_valid_url(url: &str) -> bool {
    let rest = match url.split_once("://") {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("http") => rest,
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("https") => rest,
        _ => return false,
    };
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = match host.rsplit_once(':') {
        Some((h, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => h,
        Some((_, _)) => return false,
        None => host,
    };
    !host.is_empty() && !host.starts_with('.') && !host.ends_with('.')
}
