use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

static NPA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[2-9][0-8][0-9]$").unwrap());
static NXX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[2-9][0-9]{2}$").unwrap());
static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[2-9][0-8][0-9][2-9][0-9]{2}[0-9]{4}$").unwrap());
static ELEMENT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.-]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// VTWhite API username (`packet/auth/user`).
///
/// Invariant: non-empty after trimming. The original value is sent verbatim.
pub struct Username(String);

impl Username {
    /// Element name used in the request packet (`user`).
    pub const FIELD: &'static str = "user";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// VTWhite API password (`packet/auth/pass`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Element name used in the request packet (`pass`).
    pub const FIELD: &'static str = "pass";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Remote procedure name (`packet/function`), e.g. `GetNumbers`.
///
/// Invariant: non-empty after trimming. The original value is sent verbatim.
pub struct FunctionName(String);

impl FunctionName {
    /// Element name used in the request packet (`function`).
    pub const FIELD: &'static str = "function";

    /// Create a validated [`FunctionName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the function name as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Name of a `packet/data` child element.
///
/// Invariant: matches `[A-Za-z_][A-Za-z0-9_.-]*`, so it can be written as an XML tag.
pub struct ArgumentName(String);

impl ArgumentName {
    /// Create a validated [`ArgumentName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !ELEMENT_NAME_RE.is_match(&value) {
            return Err(ValidationError::InvalidArgumentName { name: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Numbering plan area code (`npa`), the first three digits of a NANP number.
///
/// Invariant: matches `[2-9][0-8][0-9]`.
pub struct Npa(String);

impl Npa {
    /// Argument name used by VTWhite (`npa`).
    pub const FIELD: &'static str = "npa";

    /// Create a validated [`Npa`]. Surrounding whitespace is not accepted.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !NPA_RE.is_match(&value) {
            return Err(ValidationError::InvalidNpa { input: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Central office exchange code (`nxx`), the second three digits of a NANP number.
///
/// Invariant: matches `[2-9][0-9][0-9]`.
pub struct Nxx(String);

impl Nxx {
    /// Argument name used by VTWhite (`nxx`).
    pub const FIELD: &'static str = "nxx";

    /// Create a validated [`Nxx`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !NXX_RE.is_match(&value) {
            return Err(ValidationError::InvalidNxx { input: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Where calls to a provisioned number are delivered (`route`), e.g. a SIP URI.
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct Route(String);

impl Route {
    /// Argument name used by VTWhite (`route`).
    pub const FIELD: &'static str = "route";

    /// Create a validated [`Route`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the route as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// 10-digit US phone number (`number`) without country code or separators.
///
/// Invariant: matches `[2-9][0-8][0-9][2-9][0-9]{2}[0-9]{4}`.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Argument name used by VTWhite (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !PHONE_NUMBER_RE.is_match(&value) {
            return Err(ValidationError::InvalidPhoneNumber { input: value });
        }
        Ok(Self(value))
    }

    /// The 10 digits as sent to VTWhite.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
