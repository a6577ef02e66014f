use reqwest::Client;
use std::time::Duration;
use utility::Result;

/// makes a HTTP client with an optional request timeout, otherwise reqwest's defaults apply
pub fn make_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut client = reqwest::ClientBuilder::new();

    if let Some(time) = timeout {
        client = client.timeout(time);
    }

    Ok(client.build()?)
}
