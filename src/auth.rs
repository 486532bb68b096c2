use axum::http::{header, HeaderMap, HeaderValue};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::AuthConfig;
use crate::db::operations::user as user_ops;
use crate::db::operations::user::UserRecord;
use crate::db::DatabaseProxy;
use crate::response::AppError;

pub const AUTH_COOKIE_NAME: &str = "awareness_session";

type HmacSha256 = Hmac<Sha256>;

/// The authenticated caller, attached to request extensions by `require_auth`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
}

impl From<&UserRecord> for AuthUser {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("session expired")]
    Expired,
    #[error("invalid JWT_EXPIRES_IN")]
    InvalidExpiresIn,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => AppError::unauthorized("Authentication required"),
            AuthError::InvalidToken | AuthError::Expired => {
                AppError::unauthorized("Session is invalid or expired, please log in again")
            }
            AuthError::InvalidExpiresIn | AuthError::Hash(_) => AppError::internal(err.to_string()),
            AuthError::Database(db) => AppError::from(db),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|err| AuthError::Hash(err.to_string()))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = get_cookie(headers, AUTH_COOKIE_NAME) {
        return Some(token);
    }

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Signs a token for the user and records its hash as a session.
pub async fn issue_session(
    proxy: &DatabaseProxy,
    config: &AuthConfig,
    user_id: i64,
) -> Result<IssuedSession, AuthError> {
    let (token, expires_at) = sign_jwt_for_user(user_id, config)?;
    user_ops::insert_session(proxy, &hash_token(&token), user_id, expires_at).await?;
    Ok(IssuedSession { token, expires_at })
}

pub async fn revoke_session(proxy: &DatabaseProxy, token: &str) -> Result<(), AuthError> {
    user_ops::delete_session(proxy, &hash_token(token)).await?;
    Ok(())
}

pub async fn verify_request_token(
    proxy: &DatabaseProxy,
    config: &AuthConfig,
    token: &str,
) -> Result<AuthUser, AuthError> {
    let user_id = verify_jwt_hs256(token, &config.jwt_secret)?;

    let session = user_ops::find_session(proxy, &hash_token(token))
        .await?
        .ok_or(AuthError::InvalidToken)?;

    if session.user_id != user_id {
        return Err(AuthError::InvalidToken);
    }
    if session.expires_at < Utc::now() {
        user_ops::delete_session(proxy, &session.token_hash).await?;
        return Err(AuthError::Expired);
    }

    let user = user_ops::find_user_by_id(proxy, user_id)
        .await?
        .ok_or(AuthError::InvalidToken)?;

    Ok(AuthUser::from(&user))
}

pub fn sign_jwt_for_user(
    user_id: i64,
    config: &AuthConfig,
) -> Result<(String, DateTime<Utc>), AuthError> {
    let expires_in_ms = parse_expires_in_ms(&config.expires_in)?;

    let issued_at = Utc::now();
    let exp = issued_at
        .checked_add_signed(Duration::milliseconds(expires_in_ms))
        .ok_or(AuthError::InvalidExpiresIn)?;

    let header_json = serde_json::json!({
        "alg": "HS256",
        "typ": "JWT",
    });

    // jti keeps tokens unique when two logins land in the same second.
    let mut nonce = [0u8; 12];
    rand::rng().fill_bytes(&mut nonce);

    let payload_json = serde_json::json!({
        "userId": user_id,
        "iat": issued_at.timestamp(),
        "exp": exp.timestamp(),
        "jti": hex::encode(nonce),
    });

    let header_b64 = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&header_json).map_err(|_| AuthError::InvalidToken)?);
    let payload_b64 = URL_SAFE_NO_PAD
        .encode(serde_json::to_vec(&payload_json).map_err(|_| AuthError::InvalidToken)?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let mut mac = HmacSha256::new_from_slice(config.jwt_secret.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    mac.update(signing_input.as_bytes());
    let sig_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok((format!("{signing_input}.{sig_b64}"), exp))
}

fn verify_jwt_hs256(token: &str, secret: &str) -> Result<i64, AuthError> {
    let mut parts = token.split('.');
    let header_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    let payload_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    let sig_b64 = parts.next().ok_or(AuthError::InvalidToken)?;
    if parts.next().is_some() {
        return Err(AuthError::InvalidToken);
    }

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;
    let sig_bytes = URL_SAFE_NO_PAD
        .decode(sig_b64.as_bytes())
        .map_err(|_| AuthError::InvalidToken)?;

    let header_json: serde_json::Value =
        serde_json::from_slice(&header_bytes).map_err(|_| AuthError::InvalidToken)?;
    if header_json.get("alg").and_then(|value| value.as_str()) != Some("HS256") {
        return Err(AuthError::InvalidToken);
    }

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::InvalidToken)?;
    mac.update(format!("{header_b64}.{payload_b64}").as_bytes());
    mac.verify_slice(&sig_bytes)
        .map_err(|_| AuthError::InvalidToken)?;

    let payload_json: serde_json::Value =
        serde_json::from_slice(&payload_bytes).map_err(|_| AuthError::InvalidToken)?;

    if let Some(exp) = payload_json.get("exp").and_then(|value| value.as_i64()) {
        if Utc::now().timestamp() >= exp {
            return Err(AuthError::Expired);
        }
    }

    payload_json
        .get("userId")
        .and_then(|value| value.as_i64())
        .ok_or(AuthError::InvalidToken)
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// 32 random bytes, URL-safe encoded.
pub fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn parse_expires_in_ms(value: &str) -> Result<i64, AuthError> {
    let trimmed = value.trim();
    if trimmed.len() < 2 {
        return Err(AuthError::InvalidExpiresIn);
    }

    let (digits, unit) = trimmed.split_at(trimmed.len() - 1);

    let amount: i64 = digits.parse().map_err(|_| AuthError::InvalidExpiresIn)?;
    if amount <= 0 {
        return Err(AuthError::InvalidExpiresIn);
    }

    match unit {
        "s" => Ok(amount * 1000),
        "m" => Ok(amount * 60 * 1000),
        "h" => Ok(amount * 60 * 60 * 1000),
        "d" => Ok(amount * 24 * 60 * 60 * 1000),
        _ => Err(AuthError::InvalidExpiresIn),
    }
}

pub fn session_cookie(token: &str, expires_at: DateTime<Utc>, secure: bool) -> Option<HeaderValue> {
    let max_age = (expires_at - Utc::now()).num_seconds().max(0);
    let mut cookie =
        format!("{AUTH_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).ok()
}

pub fn clear_session_cookie(secure: bool) -> Option<HeaderValue> {
    let mut cookie = format!(
        "{AUTH_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).ok()
}

fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            expires_in: "1h".to_string(),
            cookie_secure: false,
            bcrypt_cost: 4,
        }
    }

    #[test]
    fn jwt_round_trip_recovers_user_id() {
        let config = test_config();
        let (token, exp) = sign_jwt_for_user(42, &config).unwrap();
        assert!(exp > Utc::now());
        assert_eq!(verify_jwt_hs256(&token, &config.jwt_secret).unwrap(), 42);
    }

    #[test]
    fn jwt_with_wrong_secret_is_rejected() {
        let config = test_config();
        let (token, _) = sign_jwt_for_user(7, &config).unwrap();
        assert!(matches!(
            verify_jwt_hs256(&token, "another-secret"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let config = test_config();
        let (token, _) = sign_jwt_for_user(7, &config).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(br#"{"userId":1,"exp":9999999999}"#);
        parts[1] = &forged;
        assert!(verify_jwt_hs256(&parts.join("."), &config.jwt_secret).is_err());
    }

    #[test]
    fn expires_in_units() {
        assert_eq!(parse_expires_in_ms("30s").unwrap(), 30_000);
        assert_eq!(parse_expires_in_ms("15m").unwrap(), 900_000);
        assert_eq!(parse_expires_in_ms("24h").unwrap(), 86_400_000);
        assert_eq!(parse_expires_in_ms("7d").unwrap(), 604_800_000);
        assert!(parse_expires_in_ms("h").is_err());
        assert!(parse_expires_in_ms("0h").is_err());
        assert!(parse_expires_in_ms("12w").is_err());
    }

    #[test]
    fn token_is_read_from_cookie_before_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; awareness_session=from-cookie"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(extract_token(&headers).as_deref(), Some("from-cookie"));

        headers.remove(header::COOKIE);
        assert_eq!(extract_token(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn reset_tokens_are_url_safe_and_unique() {
        let a = generate_reset_token();
        let b = generate_reset_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn bcrypt_helpers_agree() {
        let hash = hash_password("CorrectHorse42", 4).unwrap();
        assert!(verify_password("CorrectHorse42", &hash));
        assert!(!verify_password("WrongHorse42", &hash));
    }
}
