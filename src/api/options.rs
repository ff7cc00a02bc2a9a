use reqwest::Method;
use serde::Serialize;

/// Caller overrides for a single API call
///
/// Each field that is set replaces the corresponding default as a whole, so
/// `headers: Some(..)` drops the default `Content-Type` unless it is listed
/// again. The `with_header` / `bearer_auth` helpers start from the default
/// header set instead.
#[derive(Debug, Clone, Default)]
pub struct ApiCallOptions {
    pub method: Option<Method>,
    pub headers: Option<Vec<(String, String)>>,
    pub body: Option<String>,
}

/// Options after the defaults have been applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

pub(crate) fn default_headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_string(), "application/json".to_string())]
}

impl ApiCallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(default_headers)
            .push((name.into(), value.into()));
        self
    }

    pub fn bearer_auth(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {}", token))
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, serde_json::Error> {
        Ok(self.body(serde_json::to_string(value)?))
    }

    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            method: self.method.unwrap_or(Method::GET),
            headers: self.headers.unwrap_or_else(default_headers),
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = ApiCallOptions::new().resolve();
        assert_eq!(resolved.method, Method::GET);
        assert_eq!(resolved.headers, default_headers());
        assert_eq!(resolved.body, None);
    }

    #[test]
    fn test_explicit_headers_replace_defaults() {
        let resolved = ApiCallOptions {
            headers: Some(vec![("Accept".to_string(), "text/plain".to_string())]),
            ..Default::default()
        }
        .resolve();

        assert_eq!(
            resolved.headers,
            vec![("Accept".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn test_bearer_auth_keeps_content_type() {
        let resolved = ApiCallOptions::new()
            .method(Method::POST)
            .bearer_auth("abc")
            .resolve();

        assert_eq!(resolved.method, Method::POST);
        assert_eq!(
            resolved.headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_body() {
        let options = ApiCallOptions::new()
            .json(&serde_json::json!({"athlete_id": 12}))
            .unwrap();
        assert_eq!(options.body.as_deref(), Some(r#"{"athlete_id":12}"#));
    }
}
