use crate::shared::config::AuthConfig;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::OnceCell;

static AUTH_CONFIG: OnceCell<Option<AuthConfig>> = OnceCell::new();

/// Remember the configured credentials; `None` disables the check
pub fn initialize(auth: Option<AuthConfig>) {
    if auth.is_some() {
        tracing::info!("Basic auth enabled for /api/product routes");
    } else {
        tracing::warn!("No [auth] section configured, product routes are open");
    }
    let _ = AUTH_CONFIG.set(auth);
}

pub fn configured() -> Option<&'static AuthConfig> {
    AUTH_CONFIG.get().and_then(|a| a.as_ref())
}

/// Decode `Basic base64(user:password)` into its two parts
pub fn parse_basic_header(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?.trim();
    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Check an Authorization header value against the configured credentials
pub fn is_authorized(header: Option<&str>, auth: &AuthConfig) -> bool {
    match header.and_then(parse_basic_header) {
        Some((user, password)) => user == auth.username && password == auth.app_password,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            username: "seller".into(),
            app_password: "cdcB 77WT AYOD".into(),
        }
    }

    fn header(user: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
    }

    #[test]
    fn test_parse_basic_header() {
        assert_eq!(
            parse_basic_header(&header("seller", "a:b")),
            Some(("seller".to_string(), "a:b".to_string()))
        );
        assert_eq!(parse_basic_header("Bearer abc"), None);
        assert_eq!(parse_basic_header("Basic !!!"), None);
    }

    #[test]
    fn test_is_authorized() {
        assert!(is_authorized(Some(&header("seller", "cdcB 77WT AYOD")), &auth()));
        assert!(!is_authorized(Some(&header("seller", "wrong")), &auth()));
        assert!(!is_authorized(None, &auth()));
    }
}
