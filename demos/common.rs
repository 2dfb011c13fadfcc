use std::io;

use vtwhite::Credentials;

/// Read a required environment variable.
pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// Credentials from `VTWHITE_USER` / `VTWHITE_PASS`.
pub fn credentials() -> Result<Credentials, Box<dyn std::error::Error>> {
    Ok(Credentials::new(
        required_env("VTWHITE_USER")?,
        required_env("VTWHITE_PASS")?,
    )?)
}

/// `VTWHITE_TEST=1` targets the test endpoint.
pub fn test_mode() -> bool {
    std::env::var("VTWHITE_TEST").is_ok_and(|value| value == "1")
}
