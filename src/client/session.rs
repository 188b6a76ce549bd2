//! Sesión de autenticación del dashboard
//!
//! Las credenciales viven solo en este objeto, que se crea explícitamente y
//! se pasa al cliente. No hay estado global: `login` lo rellena y `logout`
//! (o cualquier 401) lo vacía.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::middleware::auth::encode_basic_credentials;
use crate::models::auth::UserInfo;

use super::error::ClientError;

/// Sesión compartida entre las peticiones de un mismo cliente
pub type SharedSession = Arc<RwLock<AuthSession>>;

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    credentials: Option<Credentials>,
    user: Option<UserInfo>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_manager(&self) -> bool {
        self.user.as_ref().is_some_and(UserInfo::is_manager)
    }

    /// Guardar credenciales ya verificadas por el servidor
    pub fn establish(&mut self, username: &str, password: &str, user: UserInfo) {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.credentials = None;
        self.user = None;
    }

    /// Cabecera `Authorization` para la sesión actual
    pub fn authorization_header(&self) -> Result<String, ClientError> {
        self.credentials
            .as_ref()
            .map(|c| encode_basic_credentials(&c.username, &c.password))
            .ok_or(ClientError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;

    fn manager() -> UserInfo {
        UserInfo {
            username: "admin".to_string(),
            display_name: "Admin Manager".to_string(),
            role: UserRole::Manager,
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.authorization_header(),
            Err(ClientError::NotAuthenticated)
        ));

        session.establish("admin", "Manager@2024", manager());
        assert!(session.is_authenticated());
        assert!(session.is_manager());
        assert!(session.authorization_header().unwrap().starts_with("Basic "));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
