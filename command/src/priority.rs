pub(crate) const SOURCE_URL_ENVIRONMENT: &str = "FN_MIGRATE_SOURCE";
pub(crate) const TARGET_URL_ENVIRONMENT: &str = "FN_MIGRATE_TARGET";
pub(crate) const NAMESPACE_ENVIRONMENT: &str = "FN_MIGRATE_NAMESPACE";
pub(crate) const EXPIRES_ENVIRONMENT: &str = "FN_MIGRATE_EXPIRES";

/// an explicit flag wins over the environment, which wins over the default
pub(crate) fn get_setting(argument: &str, default: &str, environment: &str) -> String {
    if !argument.is_empty() && argument != default {
        argument.into()
    } else if !environment.is_empty() {
        environment.into()
    } else {
        default.into()
    }
}

/// resolves a gateway address the same way as get_setting and adds `http://`
/// when no scheme was given
pub(crate) fn get_gateway_url(argument_url: &str, default_url: &str, environment_url: &str) -> String {
    let gateway_url = get_setting(argument_url, default_url, environment_url);
    let gateway_url = gateway_url.trim_end_matches('/');
    if !gateway_url.contains("://") {
        format!("http://{}", gateway_url)
    } else {
        gateway_url.to_string()
    }
}
