use std::fmt;

use phonenumber::country;
use url::Url;

use crate::domain::validation::ValidationError;

/// API version pinned for the `sms` send operation.
pub const SMS_API_VERSION: &str = "2021-03-07";

#[derive(Clone, PartialEq, Eq, Hash)]
/// ACS access key sent as `Authorization: Bearer <key>`.
///
/// No format validation is performed. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Base URL of an ACS resource, e.g. `https://<resource>.communication.azure.com`.
///
/// Invariant: `<base>/sms?api-version=2021-03-07` is an absolute http(s) URL.
pub struct Endpoint {
    base: String,
    send_url: Url,
}

impl Endpoint {
    /// Validate a single endpoint. Surrounding whitespace and trailing `/` are dropped.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let base = value.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ValidationError::MissingEndpoint);
        }

        let invalid = |reason: String| ValidationError::InvalidEndpoint {
            input: value.clone(),
            reason,
        };
        let send_url = Url::parse(&format!("{base}/sms?api-version={SMS_API_VERSION}"))
            .map_err(|err| invalid(err.to_string()))?;
        if !matches!(send_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", send_url.scheme())));
        }

        Ok(Self {
            base: base.to_owned(),
            send_url,
        })
    }

    /// Pick the first entry of an endpoint list; the rest are ignored.
    pub fn first_of<S: AsRef<str>>(endpoints: &[S]) -> Result<Self, ValidationError> {
        let first = endpoints.first().ok_or(ValidationError::MissingEndpoint)?;
        Self::new(first.as_ref())
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fully-qualified URL of the send operation.
    pub fn send_url(&self) -> &Url {
        &self.send_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to ACS (`from` / `to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name used for recipients (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to ACS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Phone number normalized to E.164, the format ACS expects for `from` and `to`.
///
/// Equality and hashing use the E.164 form, so `+1 (425) 555-0123` and `+14255550123`
/// are the same number.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let e164 = phonenumber::parse(default_region, &raw)
            .map(|parsed| {
                phonenumber::format(&parsed)
                    .mode(phonenumber::Mode::E164)
                    .to_string()
            })
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}
