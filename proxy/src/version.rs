use crate::client::Client;
use crate::utils::INFO_ENDPOINT;
use reqwest::{Method, StatusCode};
use utility::faas::types::info_request::GatewayInfo;
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// get_system_info reads the gateway and provider identity from /system/info
    pub async fn get_system_info(&self) -> Result<GatewayInfo> {
        let req = self
            .new_request(Method::GET, INFO_ENDPOINT, "".into())?
            .build()?;

        let res = self.do_request(req).await.map_err(|e| {
            Error::Custom(format!(
                "can't open OpenFaaS on URL {}\nand debug reason {:?}",
                self.gateway.as_str(),
                e
            ))
        })?;

        match res.status() {
            StatusCode::OK | StatusCode::ACCEPTED => {
                let body = res.text().await?;
                let info: GatewayInfo = serde_json::from_str(body.as_str()).map_err(|e| {
                    Error::Custom(format!(
                        "can't read system info from OpenFaaS on URL {}\nand debug reason {:?}",
                        self.gateway.as_str(),
                        e
                    ))
                })?;
                Ok(info)
            }
            _ => Err(self.status_error(res).await),
        }
    }
}
