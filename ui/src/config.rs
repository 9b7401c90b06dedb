/// Base URL of the marketplace API.
///
/// `BACKEND_URL` is read at build time; without it the portal talks to the
/// origin it was served from.
pub fn backend_url() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.to_string();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// localStorage key holding the serialized operator session.
pub const SESSION_STORAGE_KEY: &str = "operator_session";
