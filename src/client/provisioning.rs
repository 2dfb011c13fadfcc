use crate::client::{ApiClient, ApiClientBuilder, VtWhiteError};
use crate::domain::{
    Arguments, CallStatus, Credentials, NumberQuery, Npa, Nxx, PhoneNumber, ResponseData, Route,
    Service,
};

const GET_NUMBERS: &str = "GetNumbers";
const ADD_NUMBER: &str = "AddNumber";
const REMOVE_NUMBER: &str = "RemoveNumber";

#[derive(Clone)]
/// Client for the number provisioning endpoint.
///
/// Arguments are validated by their constructors ([`NumberQuery`], [`Npa`], [`Nxx`], [`Route`],
/// [`PhoneNumber`]), so invalid input never reaches the network.
pub struct ProvisioningClient {
    api: ApiClient,
}

impl ProvisioningClient {
    /// Create a client for the production or test provisioning endpoint.
    pub fn new(credentials: Credentials, test_mode: bool) -> Self {
        Self {
            api: ApiClient::new(Service::Provisioning, credentials, test_mode),
        }
    }

    /// Builder preset for the provisioning service. Wrap the result with [`ProvisioningClient::from`].
    pub fn builder(credentials: Credentials) -> ApiClientBuilder {
        ApiClient::builder(Service::Provisioning, credentials)
    }

    /// The underlying [`ApiClient`], for functions without a typed wrapper.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Search the inventory for available numbers (`GetNumbers`).
    pub async fn get_numbers(&self, query: &NumberQuery) -> Result<ResponseData, VtWhiteError> {
        self.api.send_output(GET_NUMBERS, query.args()).await
    }

    /// Order a number in `npa`/`nxx` and point it at `route` (`AddNumber`).
    pub async fn add_number(
        &self,
        npa: &Npa,
        nxx: &Nxx,
        route: &Route,
    ) -> Result<ResponseData, VtWhiteError> {
        let args = Arguments::from([
            (Npa::FIELD.to_owned(), npa.as_str().to_owned()),
            (Nxx::FIELD.to_owned(), nxx.as_str().to_owned()),
            (Route::FIELD.to_owned(), route.as_str().to_owned()),
        ]);
        self.api.send_output(ADD_NUMBER, &args).await
    }

    /// Release a number from the account (`RemoveNumber`).
    pub async fn remove_number(&self, number: &PhoneNumber) -> Result<CallStatus, VtWhiteError> {
        let args = Arguments::from([(PhoneNumber::FIELD.to_owned(), number.as_str().to_owned())]);
        self.api.send_status(REMOVE_NUMBER, &args).await
    }
}

impl From<ApiClient> for ProvisioningClient {
    fn from(api: ApiClient) -> Self {
        Self { api }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{FakeTransport, credentials, make_client};
    use crate::domain::ValidationError;

    use super::*;

    const NUMBERS_RESPONSE: &str = r#"<?xml version="1.0"?>
        <response>
          <data>
            <success>TRUE</success>
            <error></error>
            <1><number>2055550100</number></1>
            <2><number>2055550101</number></2>
          </data>
        </response>"#;

    fn client(transport: FakeTransport) -> ProvisioningClient {
        ProvisioningClient::from(make_client(Service::Provisioning, transport))
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[tokio::test]
    async fn get_numbers_sends_query_and_returns_data() {
        let transport = FakeTransport::new(200, NUMBERS_RESPONSE);
        let client = client(transport.clone());

        let query = NumberQuery::new(Arguments::from([("npa".to_owned(), "205".to_owned())]))
            .unwrap();
        let data = client.get_numbers(&query).await.unwrap();

        let numbers = data
            .numbered()
            .into_iter()
            .filter_map(|entry| entry.child_text("number"))
            .collect::<Vec<_>>();
        assert_eq!(numbers, vec!["2055550100", "2055550101"]);

        assert_eq!(transport.last_function(), "GetNumbers");
        assert_eq!(transport.last_data_args(), pairs(&[("npa", "205")]));
    }

    #[test]
    fn get_numbers_without_search_key_fails_validation() {
        assert_eq!(
            NumberQuery::new(Arguments::new()).unwrap_err(),
            ValidationError::MissingSearchKey
        );
    }

    #[tokio::test]
    async fn add_number_sends_npa_nxx_route() {
        let transport = FakeTransport::new(200, NUMBERS_RESPONSE);
        let client = client(transport.clone());

        let data = client
            .add_number(
                &Npa::new("205").unwrap(),
                &Nxx::new("555").unwrap(),
                &Route::new("sip:foo@bar").unwrap(),
            )
            .await
            .unwrap();
        assert!(data.is_success());

        assert_eq!(transport.last_function(), "AddNumber");
        assert_eq!(
            transport.last_data_args(),
            pairs(&[("npa", "205"), ("nxx", "555"), ("route", "sip:foo@bar")])
        );
    }

    #[test]
    fn add_number_rejects_invalid_npa() {
        assert!(matches!(
            Npa::new("105"),
            Err(ValidationError::InvalidNpa { .. })
        ));
        let err: VtWhiteError = Npa::new("105").unwrap_err().into();
        assert!(matches!(err, VtWhiteError::Validation(_)));
    }

    #[tokio::test]
    async fn remove_number_uses_status_mode() {
        let transport = FakeTransport::new(
            200,
            "<r><data><success>TRUE</success><error></error></data></r>",
        );
        let client = client(transport.clone());

        let status = client
            .remove_number(&PhoneNumber::new("2025551234").unwrap())
            .await
            .unwrap();
        assert_eq!(status, CallStatus::Success);
        assert_eq!(transport.last_function(), "RemoveNumber");
        assert_eq!(transport.last_data_args(), pairs(&[("number", "2025551234")]));

        let transport = FakeTransport::new(
            200,
            "<r><data><success>FALSE</success><error>Not found</error></data></r>",
        );
        let status = self::client(transport)
            .remove_number(&PhoneNumber::new("2025551234").unwrap())
            .await
            .unwrap();
        assert_eq!(status, CallStatus::Error("Not found".to_owned()));
    }

    #[test]
    fn remove_number_rejects_leading_one() {
        assert!(matches!(
            PhoneNumber::new("1025551234"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn constructors_target_provisioning_endpoints() {
        let client = ProvisioningClient::new(credentials(), true);
        assert_eq!(client.api().endpoint(), Service::PROVISIONING_TEST_ENDPOINT);

        let client = ProvisioningClient::from(ProvisioningClient::builder(credentials()).build().unwrap());
        assert_eq!(client.api().endpoint(), Service::PROVISIONING_ENDPOINT);
        assert_eq!(client.api().service(), Service::Provisioning);
    }
}
