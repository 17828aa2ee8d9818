//! Email address accepted by the newsletter signup.
//!
//! Validation follows the rule browsers apply to `<input type="email">`, so
//! an address the signup form lets through is never rejected by the server
//! and vice versa.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Punctuation allowed in the local part besides ASCII letters and digits.
const LOCAL_PUNCTUATION: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Longest domain label (RFC 1034).
const MAX_LABEL_LEN: usize = 63;

/// Why an input is not an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    #[error("email local part is empty or has characters that are not allowed")]
    InvalidLocalPart,
    #[error("email domain `{0}` is not a valid host name")]
    InvalidDomain(String),
}

/// A subscriber's email address, trimmed and lowercased.
///
/// ```
/// use border3d_core::Email;
///
/// let email = Email::parse("  Maker@Border3D.com ").unwrap();
/// assert_eq!(email.as_str(), "maker@border3d.com");
/// assert_eq!(email.domain(), "border3d.com");
///
/// assert!(Email::parse("no-at-symbol").is_err());
/// assert!(Email::parse("a b@border3d.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse form input.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] found, checking length, then the
    /// local part, then the domain.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let s = input.trim();

        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        // The local part cannot contain '@', so the first one splits
        let (local, domain) = s.split_once('@').ok_or(EmailError::MissingAtSymbol)?;

        if !is_valid_local_part(local) {
            return Err(EmailError::InvalidLocalPart);
        }
        if !is_valid_domain(domain) {
            return Err(EmailError::InvalidDomain(domain.to_string()));
        }

        Ok(Self(s.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the @, used in logs instead of the full address.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c))
}

/// Dot-separated labels of letters, digits and inner hyphens.
fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
