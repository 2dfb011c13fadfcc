mod common;

use vtwhite::{Arguments, NumberQuery, ProvisioningClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Arguments::new();
    for key in vtwhite::NUMBER_SEARCH_KEYS {
        if let Ok(value) = std::env::var(format!("VTWHITE_{}", key.to_uppercase())) {
            args.insert(key.to_owned(), value);
        }
    }
    let query = NumberQuery::new(args)?;

    let client = ProvisioningClient::new(common::credentials()?, common::test_mode());
    let data = client.get_numbers(&query).await?;

    println!("success: {:?}, error: {:?}", data.success(), data.error());
    for entry in data.numbered() {
        println!("{}: {:?}", entry.name, entry.child_text("number").or(entry.text.as_deref()));
    }

    Ok(())
}
