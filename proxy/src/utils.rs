pub const SYSTEM_PATH: &str = "/system/functions";
pub const FUNCTION_PATH: &str = "/system/function";
pub const NAMESPACE_KEY: &str = "namespace";
pub const INFO_ENDPOINT: &str = "/system/info";
