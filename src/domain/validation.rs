use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidNpa { input: String },
    InvalidNxx { input: String },
    InvalidPhoneNumber { input: String },
    InvalidArgumentName { name: String },
    MissingSearchKey,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidNpa { input } => {
                write!(f, "invalid NPA {input:?} (expected [2-9][0-8][0-9])")
            }
            Self::InvalidNxx { input } => {
                write!(f, "invalid NXX {input:?} (expected [2-9][0-9][0-9])")
            }
            Self::InvalidPhoneNumber { input } => {
                write!(f, "invalid 10-digit US phone number: {input:?}")
            }
            Self::InvalidArgumentName { name } => {
                write!(f, "argument name {name:?} is not a valid XML element name")
            }
            Self::MissingSearchKey => {
                write!(f, "GetNumbers requires one of the keys: npa, nxx, state")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
