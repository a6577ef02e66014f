mod error;
mod openfaas;
pub use openfaas::*;

pub use error::*;

/// namespace holding user functions on a gateway running faas-netes or the operator
pub const DEFAULT_FUNCTION_NAMESPACE: &str = "openfaas-fn";

pub fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    *t == Default::default()
}
