//! Build-time configuration.

/// Base URL for the prediction API.
///
/// Overridable at compile time with `DIABETES_API_URL`; defaults to the
/// `/api` prefix the backend serves under, so a reverse proxy needs no
/// extra configuration.
pub fn api_base() -> &'static str {
    option_env!("DIABETES_API_URL").unwrap_or("/api")
}

/// Join an endpoint path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_base() {
        assert!(api_url("/predict").ends_with("/predict"));
        assert!(api_url("/current_user").starts_with(api_base()));
    }
}
