use crate::client::{add_query_params, Client};
use crate::utils::{NAMESPACE_KEY, SYSTEM_PATH};
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use tracing::debug;
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// ListFunctions list deployed functions
    pub async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        let mut list_endpoint = SYSTEM_PATH.to_string();
        if !namespace.is_empty() {
            let mut map = HashMap::new();
            map.insert(NAMESPACE_KEY, namespace);
            list_endpoint = add_query_params(list_endpoint.as_str(), &map)?;
        }

        let req = self
            .new_request(Method::GET, list_endpoint.as_str(), "".into())?
            .build()?;

        let res = self.do_request(req).await.map_err(|e| {
            Error::Custom(format!(
                "can't read list from OpenFaaS on URL {}: {}",
                self.gateway.as_str(),
                e
            ))
        })?;
        match res.status() {
            StatusCode::OK => {
                let status: Vec<FunctionStatus> = serde_json::from_str(res.text().await?.as_str())
                    .map_err(|e| {
                        Error::Custom(format!(
                            "can't read list from OpenFaaS on URL {}: {}",
                            self.gateway.as_str(),
                            e
                        ))
                    })?;
                debug!(namespace, count = status.len(), "listed functions");
                Ok(status)
            }
            _ => Err(self.status_error(res).await),
        }
    }
}
