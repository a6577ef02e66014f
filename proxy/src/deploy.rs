use crate::client::Client;
use crate::utils::SYSTEM_PATH;
use reqwest::{Method, StatusCode};
use tracing::{debug, info};
use utility::faas::types::model::FunctionDeployment;
use utility::{Error, Result};

/// name used by the gateway to route to a function, `name.namespace` when namespaced
pub fn generate_func_str(spec: &FunctionDeployment) -> String {
    if !spec.namespace.is_empty() {
        format!("{}.{}", spec.service, spec.namespace)
    } else {
        spec.service.clone()
    }
}

impl<'s> Client<'s> {
    /// creates a new function, POST /system/functions
    pub async fn deploy_function(&self, spec: &FunctionDeployment) -> Result<u16> {
        self.send_deployment(Method::POST, spec).await
    }

    /// updates an existing function in place, PUT /system/functions
    pub async fn update_function(&self, spec: &FunctionDeployment) -> Result<u16> {
        self.send_deployment(Method::PUT, spec).await
    }

    /// sends a deployment to the gateway and returns the status code it answered with.
    /// Anything other than 200, 201 or 202 is an error.
    pub(crate) async fn send_deployment(
        &self,
        method: Method,
        spec: &FunctionDeployment,
    ) -> Result<u16> {
        let req_bytes = serde_json::to_string(spec)?;
        debug!(%method, function = %generate_func_str(spec), "sending deployment");

        let request = self
            .new_request(method, SYSTEM_PATH, req_bytes)?
            .build()?;

        let response = self
            .do_request(request)
            .await
            .map_err(|e| Error::Custom(format!("InternalServerError:{}", e)))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {
                info!(
                    "Deployed. {}. URL: {}function/{}",
                    response.status(),
                    self.gateway,
                    generate_func_str(spec)
                );
                Ok(response.status().as_u16())
            }
            _ => Err(self.status_error(response).await),
        }
    }
}

#[cfg(test)]
mod test_deploy {
    use crate::client::Client;
    use crate::deploy::generate_func_str;
    use crate::utils::SYSTEM_PATH;
    use mockito::Matcher;
    use reqwest::StatusCode;
    use utility::faas::types::model::FunctionDeployment;

    struct DeployProxyTest {
        _title: &'static str,
        mock_server_responses: u16,
        update: bool,
        method: &'static str,
        expected_ok: bool,
        expected_output: &'static str,
    }

    fn test_spec(name: &str) -> FunctionDeployment {
        FunctionDeployment {
            service: name.to_string(),
            image: "image".to_string(),
            env_process: "fprocess".to_string(),
            namespace: "openfaas-fn".to_string(),
            ..Default::default()
        }
    }

    async fn run_deploy_proxy_test(dep: &DeployProxyTest) -> utility::Result<u16> {
        let name = format!("function-{}", dep._title);
        let _mok = mockito::mock(dep.method, SYSTEM_PATH)
            .match_body(Matcher::PartialJsonString(format!(
                r#"{{"service":"{}","namespace":"openfaas-fn"}}"#,
                name
            )))
            .with_status(dep.mock_server_responses as usize)
            .with_body("boom")
            .create();

        let cli_auth = crate::TestAuth {};
        let add = format!("http://{}", mockito::server_address().to_string());
        let client = Client::new(Box::new(&cli_auth), add.as_str()).unwrap();

        let spec = test_spec(name.as_str());
        if dep.update {
            client.update_function(&spec).await
        } else {
            client.deploy_function(&spec).await
        }
    }

    #[tokio::test]
    async fn test_run_deploy_proxy_tests() {
        let cases = vec![
            DeployProxyTest {
                _title: "200_Deploy",
                mock_server_responses: StatusCode::OK.as_u16(),
                update: false,
                method: "POST",
                expected_ok: true,
                expected_output: "200",
            },
            DeployProxyTest {
                _title: "202_Update",
                mock_server_responses: StatusCode::ACCEPTED.as_u16(),
                update: true,
                method: "PUT",
                expected_ok: true,
                expected_output: "202",
            },
            DeployProxyTest {
                _title: "500_Deploy",
                mock_server_responses: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                update: false,
                method: "POST",
                expected_ok: false,
                expected_output: "unexpected status code 500 and body boom",
            },
            DeployProxyTest {
                _title: "404_Update",
                mock_server_responses: StatusCode::NOT_FOUND.as_u16(),
                update: true,
                method: "PUT",
                expected_ok: false,
                expected_output: "unexpected status code 404",
            },
            DeployProxyTest {
                _title: "401_Deploy",
                mock_server_responses: StatusCode::UNAUTHORIZED.as_u16(),
                update: false,
                method: "POST",
                expected_ok: false,
                expected_output: "unauthorized access",
            },
        ];
        for case in cases.iter() {
            let res = run_deploy_proxy_test(case).await;
            assert_eq!(res.is_ok(), case.expected_ok, "{}", case._title);
            let out = match res {
                Ok(code) => code.to_string(),
                Err(e) => e.to_string(),
            };
            assert!(out.contains(case.expected_output), "{}: {}", case._title, out);
        }
    }

    #[test]
    fn test_deploy_function_generate_func_str() {
        struct TestCase {
            _name: &'static str,
            spec: FunctionDeployment,
            expected_str: &'static str,
        }
        let cases = vec![
            TestCase {
                _name: "No Namespace",
                spec: FunctionDeployment {
                    service: "funcName".to_string(),
                    ..Default::default()
                },
                expected_str: "funcName",
            },
            TestCase {
                _name: "with Namespace",
                spec: FunctionDeployment {
                    service: "funcName".to_string(),
                    namespace: "Namespace".to_string(),
                    ..Default::default()
                },
                expected_str: "funcName.Namespace",
            },
        ];

        for test in cases {
            assert_eq!(test.expected_str, generate_func_str(&test.spec));
        }
    }
}
