//! Typed Rust client for the VTWhite XML provisioning API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the XML
//! wire-format quirks (escaped request packets, numeric response tags), and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use vtwhite::{Credentials, Npa, Nxx, ProvisioningClient, Route};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vtwhite::VtWhiteError> {
//!     let client = ProvisioningClient::new(Credentials::new("user", "pass")?, true);
//!     let data = client
//!         .add_number(&Npa::new("205")?, &Nxx::new("555")?, &Route::new("sip:pbx@example.com")?)
//!         .await?;
//!     println!("success: {:?}", data.success());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiClient, ApiClientBuilder, BoxFuture, E911Client, HttpResponse, HttpTransport,
    ProvisioningClient, VtWhiteError, parse_response,
};
pub use domain::{
    ArgumentName, Arguments, CallStatus, Credentials, E911Function, FunctionName,
    NUMBER_SEARCH_KEYS, NumberQuery, Npa, Nxx, Password, PhoneNumber, Reply, ResponseData,
    ReturnMode, Route, Service, Username, ValidationError, XmlNode,
};
