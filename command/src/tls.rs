use url::{Host, Url};

/// Warning printed when a gateway is reached without TLS
pub(crate) const NOT_TLS_WARN: &str =
    "WARNING! You are not using an encrypted connection to the gateway, consider using HTTPS.";

/// tls_warning returns NOT_TLS_WARN for a plain HTTP gateway that isn't on the loopback
/// interface. Credentials travel in every request, so they'd be sent in clear text.
pub(crate) fn tls_warning(gateway: &Url, tls_insecure: bool) -> Option<&'static str> {
    if tls_insecure || gateway.scheme() == "https" {
        return None;
    }
    let loopback = match gateway.host() {
        Some(Host::Domain(domain)) => domain == "localhost",
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    };
    if loopback {
        None
    } else {
        Some(NOT_TLS_WARN)
    }
}
