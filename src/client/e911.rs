use crate::client::{ApiClient, ApiClientBuilder, VtWhiteError};
use crate::domain::{Arguments, Credentials, E911Function, ResponseData, Service};

#[derive(Clone)]
/// Client for the 911 service endpoint.
///
/// Only the transport is provided here: arguments are forwarded as given and the reply's `data`
/// node is returned uninterpreted.
pub struct E911Client {
    api: ApiClient,
}

impl E911Client {
    /// Create a client for the production or test 911 endpoint.
    pub fn new(credentials: Credentials, test_mode: bool) -> Self {
        Self {
            api: ApiClient::new(Service::E911, credentials, test_mode),
        }
    }

    /// Builder preset for the 911 service. Wrap the result with [`E911Client::from`].
    pub fn builder(credentials: Credentials) -> ApiClientBuilder {
        ApiClient::builder(Service::E911, credentials)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Invoke one of the 911 functions in output mode.
    pub async fn call(
        &self,
        function: E911Function,
        args: &Arguments,
    ) -> Result<ResponseData, VtWhiteError> {
        self.api.send_output(function.as_str(), args).await
    }
}

impl From<ApiClient> for E911Client {
    fn from(api: ApiClient) -> Self {
        Self { api }
    }
}
