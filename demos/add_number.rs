mod common;

use vtwhite::{Npa, Nxx, ProvisioningClient, Route};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let npa = Npa::new(common::required_env("VTWHITE_NPA")?)?;
    let nxx = Nxx::new(common::required_env("VTWHITE_NXX")?)?;
    let route = Route::new(common::required_env("VTWHITE_ROUTE")?)?;

    let client = ProvisioningClient::new(common::credentials()?, common::test_mode());
    let data = client.add_number(&npa, &nxx, &route).await?;

    println!("status: {:?}, data: {:?}", data.status(), data.node());

    Ok(())
}
