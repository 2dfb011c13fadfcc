//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Arguments, E911Function, NUMBER_SEARCH_KEYS, NumberQuery, ReturnMode, Service};
pub use response::{CallStatus, NUMERIC_TAG_PREFIX, Reply, ResponseData, XmlNode};
pub use validation::ValidationError;
pub use value::{
    ArgumentName, FunctionName, Npa, Nxx, Password, PhoneNumber, Route, Username,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static credentials embedded in every request packet.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated credentials from a username/password pair.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
