use reqwest::{Response, StatusCode, Url};
use std::collections::HashMap;
use tracing::debug;
use url::ParseError;
use utility::{Error, Result};

pub const USER_AGENT: &str = concat!("fn-migrate/", env!("CARGO_PKG_VERSION"));

///an API client to perform all operations against one gateway
pub struct Client<'s> {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Box<&'s dyn ClientAuth>,
    ///Gatewayurl base url of OpenFaaS gateway
    pub gateway: Url,
    ///user agent for the client
    pub user_agent: Option<&'s str>,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth: Send + Sync {
    fn set(&self, req: &mut reqwest::RequestBuilder) -> Result<()>;
}

impl<'s> Client<'s> {
    /// initializes a new API client
    pub fn new(auth: Box<&'s dyn ClientAuth>, gateway: &str) -> Result<Client<'s>> {
        let url = gateway.trim_end_matches('/');
        let url = Url::parse(url).map_err(|e| Error::Custom(format!("{:?}", e)))?;

        Ok(Client {
            http_client: reqwest::Client::new(),
            client_auth: auth,
            gateway: url,
            user_agent: Some(USER_AGENT),
        })
    }

    ///replaces the underlying http client, e.g. one built with a timeout
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Client<'s> {
        self.http_client = http_client;
        self
    }

    ///create a new HTTP request with authentication
    pub fn new_request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: String,
    ) -> Result<reqwest::RequestBuilder> {
        let u = match url::Url::parse(path) {
            Ok(u) => u,
            Err(e) => {
                if e == ParseError::RelativeUrlWithoutBase {
                    let url = format!("http://example.com/{}", path.trim_start_matches('/'));
                    url::Url::parse(url.as_str())?
                } else {
                    return Err(Error::Custom(format!("{:?}", e)));
                }
            }
        };

        // copy the gateway url and append the supplied path and args to the copy so that
        // a gateway mounted below a path prefix keeps its prefix
        let mut endpoint = self.gateway.clone();
        let path = format!(
            "{}/{}",
            endpoint.path().trim_end_matches('/'),
            u.path().trim_start_matches('/')
        );
        endpoint.set_path(path.as_str());
        endpoint.set_query(u.query());

        debug!(%method, %endpoint, "new gateway request");
        let mut req = self.http_client.request(method, endpoint);

        if let Some(agent) = self.user_agent {
            req = req.header(reqwest::header::USER_AGENT, agent);
        }
        if !body.is_empty() {
            req = req.header("Content-Type", "application/json").body(body);
        } else {
            req = req.body("");
        }
        self.client_auth.set(&mut req)?;

        Ok(req)
    }

    ///perform an HTTP request
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        let resp = self.http_client.execute(req).await?;
        debug!(status = resp.status().as_u16(), url = %resp.url(), "gateway response");
        Ok(resp)
    }

    ///maps a non-success response to an error, reading the body for the message
    pub(crate) async fn status_error(&self, res: Response) -> Error {
        match res.status() {
            StatusCode::UNAUTHORIZED => Error::Unauthorized(self.gateway.to_string()),
            status => match res.text().await {
                Ok(body) => Error::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                },
                Err(e) => Error::Reqwest(e),
            },
        }
    }
}

pub(crate) fn add_query_params(url: &str, params: &HashMap<&str, &str>) -> Result<String> {
    let mut relative = false;
    let mut parsed_url = match url::Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            if e == ParseError::RelativeUrlWithoutBase {
                let url = format!("http://example.com/{}", url.trim_start_matches('/'));
                relative = true;
                url::Url::parse(url.as_str())?
            } else {
                return Err(Error::Custom(format!("{:?}", e)));
            }
        }
    };
    {
        let mut modifier = parsed_url.query_pairs_mut();
        for (key, val) in params {
            modifier.append_pair(key, val);
        }
    }

    let url = parsed_url.to_string();
    if relative {
        Ok(url.trim_start_matches("http://example.com").to_string())
    } else {
        Ok(url)
    }
}

#[test]
fn test_add_query_params() {
    struct TestCase {
        _name: &'static str,
        params: HashMap<&'static str, &'static str>,
        url: &'static str,
        expected_url: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "url without hostname",
            params: [("namespace", "openfaas-fn")].iter().cloned().collect(),
            url: "/system/functions",
            expected_url: "/system/functions?namespace=openfaas-fn",
        },
        TestCase {
            _name: "url hostname",
            params: [("namespace", "openfaas-fn")].iter().cloned().collect(),
            url: "http://127.0.0.1/system/functions",
            expected_url: "http://127.0.0.1/system/functions?namespace=openfaas-fn",
        },
        TestCase {
            _name: "function path",
            params: [("namespace", "staging")].iter().cloned().collect(),
            url: "/system/function/figlet",
            expected_url: "/system/function/figlet?namespace=staging",
        },
    ];

    for test in cases {
        let res = add_query_params(test.url, &test.params);
        assert!(res.is_ok());
        let url = res.unwrap();
        assert_eq!(url, test.expected_url);
    }
}

#[test]
fn test_new_request_keeps_gateway_prefix() {
    let auth = crate::TestAuth {};
    let client = Client::new(Box::new(&auth), "http://127.0.0.1:8080/gateway/").unwrap();
    let req = client
        .new_request(
            reqwest::Method::GET,
            "/system/functions?namespace=openfaas-fn",
            "".into(),
        )
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        req.url().as_str(),
        "http://127.0.0.1:8080/gateway/system/functions?namespace=openfaas-fn"
    );
    assert_eq!(req.headers()[reqwest::header::USER_AGENT], USER_AGENT);
}
