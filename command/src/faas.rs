pub const DEFAULT_SOURCE: &str = "http://admin@$PASSWORD:127.0.0.1:8080";
pub const DEFAULT_TARGET: &str = "http://admin@$PASSWORD:127.0.0.1:8081";
pub const DEFAULT_NAMESPACE: &str = utility::DEFAULT_FUNCTION_NAMESPACE;

/// long flags that may also be written with a single dash, e.g. `-source`
pub(crate) const SINGLE_DASH_FLAGS: &[&str] = &[
    "source",
    "target",
    "dry-run",
    "namespace",
    "timeout",
    "tls-no-verify",
    "expires",
];
