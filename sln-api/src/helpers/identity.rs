use crate::error::AppError;
use actix_web::HttpRequest;

/// Header carrying the username of the caller
pub const USER_HEADER: &str = "X-SLN-User";

/// Separator between username and realm in bank user ids
pub const USER_ID_SEPARATOR: &str = "--";

#[derive(Debug, Clone)]
pub struct IdentitySettings {
    pub user_realm: String,
    pub default_user: String,
}

/// Build the bank user id `<username>--<realm>` for the caller
pub fn resolve_user_id(req: &HttpRequest, settings: &IdentitySettings) -> Result<String, AppError> {
    let username = match req.headers().get(USER_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::InvalidRequest(format!("{USER_HEADER} must be valid ASCII")))?
            .trim(),
        None => "",
    };
    let username = if username.is_empty() {
        settings.default_user.as_str()
    } else {
        username
    };

    Ok(format!(
        "{}{}{}",
        username, USER_ID_SEPARATOR, settings.user_realm
    ))
}
