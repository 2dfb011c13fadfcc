mod common;

use vtwhite::{PhoneNumber, ProvisioningClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let number = PhoneNumber::new(common::required_env("VTWHITE_NUMBER")?)?;

    let client = ProvisioningClient::new(common::credentials()?, common::test_mode());
    let status = client.remove_number(&number).await?;

    println!("{}: {status:?}", number.as_str());

    Ok(())
}
