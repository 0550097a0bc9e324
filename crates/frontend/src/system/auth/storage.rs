use base64::{engine::general_purpose::STANDARD, Engine as _};
use web_sys::window;

const USERNAME_KEY: &str = "api_username";
const APP_PASSWORD_KEY: &str = "api_app_password";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

/// Get API credentials from localStorage; both parts must be present
pub fn get_credentials() -> Option<(String, String)> {
    Some((get_item(USERNAME_KEY)?, get_item(APP_PASSWORD_KEY)?))
}

pub fn encode_basic(username: &str, app_password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", username, app_password))
    )
}

/// `Authorization` header value for the stored credentials, if any
pub fn basic_auth_header() -> Option<String> {
    get_credentials().map(|(user, password)| encode_basic(&user, &password))
}
