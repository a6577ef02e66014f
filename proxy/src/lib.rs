use crate::client::ClientAuth;

pub mod auth;
pub mod client;
pub mod deploy;
pub mod describe;
pub mod list;
pub mod proxy;
pub mod utils;
pub mod version;

/// no-op authentication used by tests talking to the mock gateway
#[derive(Clone)]
pub struct TestAuth;

impl ClientAuth for TestAuth {
    fn set(&self, _req: &mut reqwest::RequestBuilder) -> utility::Result<()> {
        Ok(())
    }
}
