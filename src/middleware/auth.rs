//! Middleware de autenticación HTTP Basic
//!
//! Este módulo extrae las credenciales de la cabecera `Authorization`,
//! las verifica contra el directorio de usuarios y expone el usuario
//! autenticado como extractor de Axum.

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use tracing::debug;

use crate::{
    models::auth::UserInfo,
    services::UserDirectory,
    state::AppState,
    utils::errors::AppError,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const MANAGER_REQUIRED: &str = "Manager access required";

/// Usuario autenticado (cualquier rol)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserInfo);

/// Usuario autenticado con rol de manager
#[derive(Debug, Clone)]
pub struct ManagerUser(pub UserInfo);

impl FromRef<AppState> for Arc<UserDirectory> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

/// Decodificar una cabecera `Basic <base64(user:password)>`
pub fn decode_basic_credentials(value: &str) -> Option<(String, String)> {
    let encoded = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Codificar credenciales como cabecera `Authorization`
pub fn encode_basic_credentials(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<UserDirectory>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (username, password) = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(decode_basic_credentials)
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let users = Arc::<UserDirectory>::from_ref(state);
        let user = users
            .authenticate_blocking(username, password)
            .await
            .map_err(|e| AppError::Internal(format!("Credential check failed: {}", e)))?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        debug!("🔑 {} autenticado como {}", user.username, user.role.as_str());
        Ok(AuthenticatedUser(user))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ManagerUser
where
    Arc<UserDirectory>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(user) = AuthenticatedUser::from_request_parts(parts, state).await?;
        if !user.is_manager() {
            return Err(AppError::Forbidden(MANAGER_REQUIRED.to_string()));
        }
        Ok(ManagerUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_credentials_round_trip() {
        let header = encode_basic_credentials("john.smith", "JSmith@123");
        assert_eq!(header, "Basic am9obi5zbWl0aDpKU21pdGhAMTIz");
        assert_eq!(
            decode_basic_credentials(&header),
            Some(("john.smith".to_string(), "JSmith@123".to_string()))
        );
    }

    #[test]
    fn test_password_may_contain_colons() {
        let header = encode_basic_credentials("admin", "a:b:c");
        let (_, password) = decode_basic_credentials(&header).unwrap();
        assert_eq!(password, "a:b:c");
    }

    #[test]
    fn test_rejects_malformed_headers() {
        assert!(decode_basic_credentials("Bearer token").is_none());
        assert!(decode_basic_credentials("Basic !!!").is_none());
        assert!(decode_basic_credentials(&format!("Basic {}", STANDARD.encode("nocolon"))).is_none());
    }
}
