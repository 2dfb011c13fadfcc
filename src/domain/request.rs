use std::collections::BTreeMap;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Npa, Nxx};

/// Argument name to value mapping placed under `packet/data`.
pub type Arguments = BTreeMap<String, String>;

/// Keys that make a `GetNumbers` search valid; at least one must be present.
pub const NUMBER_SEARCH_KEYS: [&str; 3] = ["npa", "nxx", "state"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What [`crate::ApiClient::send`] hands back.
pub enum ReturnMode {
    /// The parsed `data` node as-is.
    #[default]
    Output,
    /// A [`crate::CallStatus`] summary of `success` / `error`.
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A VTWhite API surface. Each one lives at its own endpoint.
pub enum Service {
    Provisioning,
    E911,
}

impl Service {
    pub const PROVISIONING_ENDPOINT: &'static str =
        "https://api.vtwhite.com/provisioning/provisioning.api.php";
    pub const PROVISIONING_TEST_ENDPOINT: &'static str =
        "https://api.vtwhite.com/provisioning/testprovisioning.api.php";
    pub const E911_ENDPOINT: &'static str = "https://api.vtwhite.com/provisioning/911.api.php";
    pub const E911_TEST_ENDPOINT: &'static str =
        "https://api.vtwhite.com/provisioning/test-911.api.php";

    /// Default endpoint URL for this service.
    pub fn endpoint(self, test_mode: bool) -> &'static str {
        match (self, test_mode) {
            (Self::Provisioning, false) => Self::PROVISIONING_ENDPOINT,
            (Self::Provisioning, true) => Self::PROVISIONING_TEST_ENDPOINT,
            (Self::E911, false) => Self::E911_ENDPOINT,
            (Self::E911, true) => Self::E911_TEST_ENDPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Remote procedures exposed by the 911 endpoint.
///
/// The crate forwards these verbatim and does not interpret their arguments or replies.
pub enum E911Function {
    Query,
    Update,
    Validate,
    Remove,
}

impl E911Function {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Update => "Update",
            Self::Validate => "Validate",
            Self::Remove => "Remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Search criteria for `GetNumbers`.
///
/// Invariant: contains at least one of `npa`, `nxx` or `state`. Other keys are passed through.
pub struct NumberQuery {
    args: Arguments,
}

impl NumberQuery {
    /// Validate a free-form argument map.
    pub fn new(args: Arguments) -> Result<Self, ValidationError> {
        if !NUMBER_SEARCH_KEYS.iter().any(|key| args.contains_key(*key)) {
            return Err(ValidationError::MissingSearchKey);
        }
        Ok(Self { args })
    }

    /// Search by area code.
    pub fn npa(npa: Npa) -> Self {
        Self {
            args: Arguments::from([(Npa::FIELD.to_owned(), npa.as_str().to_owned())]),
        }
    }

    /// Search by area code and exchange.
    pub fn npa_nxx(npa: Npa, nxx: Nxx) -> Self {
        Self {
            args: Arguments::from([
                (Npa::FIELD.to_owned(), npa.as_str().to_owned()),
                (Nxx::FIELD.to_owned(), nxx.as_str().to_owned()),
            ]),
        }
    }

    /// Search by state, e.g. `"AL"`.
    pub fn state(state: impl Into<String>) -> Result<Self, ValidationError> {
        let state = state.into();
        if state.trim().is_empty() {
            return Err(ValidationError::Empty { field: "state" });
        }
        Ok(Self {
            args: Arguments::from([("state".to_owned(), state)]),
        })
    }

    /// Add an extra pass-through argument.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn args(&self) -> &Arguments {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_query_requires_a_search_key() {
        assert_eq!(
            NumberQuery::new(Arguments::new()).unwrap_err(),
            ValidationError::MissingSearchKey
        );
        let only_other = Arguments::from([("limit".to_owned(), "5".to_owned())]);
        assert!(NumberQuery::new(only_other).is_err());

        for key in NUMBER_SEARCH_KEYS {
            let args = Arguments::from([(key.to_owned(), "x".to_owned())]);
            assert!(NumberQuery::new(args).is_ok(), "{key} should be accepted");
        }
    }

    #[test]
    fn typed_constructors_fill_args() {
        let query = NumberQuery::npa_nxx(Npa::new("205").unwrap(), Nxx::new("555").unwrap())
            .with("limit", "10");
        assert_eq!(query.args().get("npa").map(String::as_str), Some("205"));
        assert_eq!(query.args().get("nxx").map(String::as_str), Some("555"));
        assert_eq!(query.args().get("limit").map(String::as_str), Some("10"));

        assert!(NumberQuery::state("  ").is_err());
        assert_eq!(
            NumberQuery::state("AL").unwrap().args().get("state").map(String::as_str),
            Some("AL")
        );
    }

    #[test]
    fn endpoints_follow_test_mode() {
        assert_eq!(
            Service::Provisioning.endpoint(false),
            "https://api.vtwhite.com/provisioning/provisioning.api.php"
        );
        assert_eq!(
            Service::Provisioning.endpoint(true),
            "https://api.vtwhite.com/provisioning/testprovisioning.api.php"
        );
        assert_eq!(
            Service::E911.endpoint(false),
            "https://api.vtwhite.com/provisioning/911.api.php"
        );
        assert_eq!(
            Service::E911.endpoint(true),
            "https://api.vtwhite.com/provisioning/test-911.api.php"
        );
    }
}
