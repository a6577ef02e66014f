use crate::client::{add_query_params, Client};
use crate::utils::{FUNCTION_PATH, NAMESPACE_KEY};
use http::StatusCode;
use reqwest::Method;
use std::collections::HashMap;
use utility::faas::types::model::FunctionStatus;
use utility::{Error, Result};

impl<'s> Client<'s> {
    ///get an OpenFaaS function's full definition.
    /// A 404 from the gateway is reported as `Error::NotFound` so callers can tell
    /// a missing function apart from a failed request.
    pub async fn get_function_info(
        &self,
        function_name: &str,
        namespace: &str,
    ) -> Result<FunctionStatus> {
        let mut function_path = format!("{}/{}", FUNCTION_PATH, function_name);
        if !namespace.is_empty() {
            let mut map = HashMap::new();
            map.insert(NAMESPACE_KEY, namespace);
            function_path = add_query_params(function_path.as_str(), &map)?;
        }

        let req = self
            .new_request(Method::GET, function_path.as_str(), "".into())?
            .build()?;

        let res = self.do_request(req).await.map_err(|e| {
            Error::Custom(format!(
                "can't connect to OpenFaaS on URL: {}: {}",
                self.gateway.as_str(),
                e
            ))
        })?;
        match res.status() {
            StatusCode::OK => {
                let status: FunctionStatus = serde_json::from_str(res.text().await?.as_str())
                    .map_err(|e| {
                        Error::Custom(format!(
                            "can't read function info from OpenFaaS on URL {}\nand debug reason {:?}",
                            self.gateway.as_str(),
                            e
                        ))
                    })?;
                Ok(status)
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound(function_name.to_string())),
            _ => Err(self.status_error(res).await),
        }
    }
}
