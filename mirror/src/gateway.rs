use async_trait::async_trait;
use proxy::client::Client;
use utility::faas::types::info_request::GatewayInfo;
use utility::faas::types::model::{FunctionDeployment, FunctionStatus};
use utility::Result;

/// FunctionGateway the subset of the gateway REST API needed to copy functions between clusters.
#[async_trait]
pub trait FunctionGateway: Send + Sync {
    /// summaries of the functions deployed in `namespace`
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>>;

    /// full definition of one function. A missing function must be `Error::NotFound`.
    async fn get_function(&self, name: &str, namespace: &str) -> Result<FunctionStatus>;

    /// creates a function, returning the gateway's status code
    async fn deploy(&self, spec: &FunctionDeployment) -> Result<u16>;

    /// updates an existing function, returning the gateway's status code
    async fn update(&self, spec: &FunctionDeployment) -> Result<u16>;

    async fn get_info(&self) -> Result<GatewayInfo>;
}

#[async_trait]
impl<'s> FunctionGateway for Client<'s> {
    async fn list_functions(&self, namespace: &str) -> Result<Vec<FunctionStatus>> {
        Client::list_functions(self, namespace).await
    }

    async fn get_function(&self, name: &str, namespace: &str) -> Result<FunctionStatus> {
        self.get_function_info(name, namespace).await
    }

    async fn deploy(&self, spec: &FunctionDeployment) -> Result<u16> {
        self.deploy_function(spec).await
    }

    async fn update(&self, spec: &FunctionDeployment) -> Result<u16> {
        self.update_function(spec).await
    }

    async fn get_info(&self) -> Result<GatewayInfo> {
        self.get_system_info().await
    }
}
