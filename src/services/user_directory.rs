//! Directorio de usuarios
//!
//! Cuentas fijas del concesionario. Las contraseñas se guardan solo como
//! hash bcrypt, calculado una vez al arrancar. La verificación bloquea el
//! hilo, así que las peticiones la ejecutan con `spawn_blocking`.

use std::collections::HashMap;
use std::sync::Arc;

use bcrypt::{hash, verify};
use tokio::task::JoinError;
use tracing::{debug, info};

use crate::models::auth::{UserInfo, UserRole};

/// Cuenta con su hash de contraseña
#[derive(Debug, Clone)]
struct UserAccount {
    info: UserInfo,
    password_hash: String,
}

/// Directorio en memoria de las cuentas del sistema
#[derive(Debug, Clone)]
pub struct UserDirectory {
    accounts: HashMap<String, UserAccount>,
    /// Hash de relleno para que un usuario desconocido cueste lo mismo que uno real
    dummy_hash: String,
}

const DUMMY_PASSWORD: &str = "aura-drive-unknown-user";

const DEFAULT_ACCOUNTS: [(&str, &str, &str, UserRole); 5] = [
    ("admin", "Manager@2024", "Admin Manager", UserRole::Manager),
    ("john.smith", "JSmith@123", "John Smith", UserRole::Salesman),
    ("emma.wilson", "EWilson@123", "Emma Wilson", UserRole::Salesman),
    ("david.chen", "DChen@123", "David Chen", UserRole::Salesman),
    ("sarah.jones", "SJones@123", "Sarah Jones", UserRole::Salesman),
];

impl UserDirectory {
    /// Directorio vacío; `cost` es el coste bcrypt de las cuentas que se añadan
    pub fn new(cost: u32) -> Result<Self, bcrypt::BcryptError> {
        Ok(Self {
            accounts: HashMap::new(),
            dummy_hash: hash(DUMMY_PASSWORD, cost)?,
        })
    }

    /// Directorio con las cuentas por defecto del concesionario
    pub fn with_default_accounts(cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let mut directory = Self::new(cost)?;
        for (username, password, display_name, role) in DEFAULT_ACCOUNTS {
            directory.add_user(username, password, display_name, role, cost)?;
        }
        info!("👥 Directorio de usuarios cargado: {} cuentas", directory.len());
        Ok(directory)
    }

    pub fn add_user(
        &mut self,
        username: &str,
        password: &str,
        display_name: &str,
        role: UserRole,
        cost: u32,
    ) -> Result<(), bcrypt::BcryptError> {
        let password_hash = hash(password, cost)?;
        self.accounts.insert(
            username.to_string(),
            UserAccount {
                info: UserInfo {
                    username: username.to_string(),
                    display_name: display_name.to_string(),
                    role,
                },
                password_hash,
            },
        );
        Ok(())
    }

    /// Verificar credenciales; `None` si el usuario no existe o la contraseña no coincide
    pub fn authenticate(&self, username: &str, password: &str) -> Option<UserInfo> {
        let Some(account) = self.accounts.get(username) else {
            let _ = verify(password, &self.dummy_hash);
            debug!("🔒 Usuario desconocido: {}", username);
            return None;
        };
        match verify(password, &account.password_hash) {
            Ok(true) => Some(account.info.clone()),
            Ok(false) => {
                debug!("🔒 Contraseña incorrecta para {}", username);
                None
            }
            Err(e) => {
                debug!("🔒 Hash inválido para {}: {}", username, e);
                None
            }
        }
    }

    /// `authenticate` en el pool de hilos bloqueantes de tokio
    pub async fn authenticate_blocking(
        self: Arc<Self>,
        username: String,
        password: String,
    ) -> Result<Option<UserInfo>, JoinError> {
        tokio::task::spawn_blocking(move || self.authenticate(&username, &password)).await
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> UserDirectory {
        UserDirectory::with_default_accounts(4).unwrap()
    }

    #[test]
    fn test_default_accounts() {
        let users = directory();
        assert_eq!(users.len(), 5);

        let admin = users.authenticate("admin", "Manager@2024").unwrap();
        assert_eq!(admin.role, UserRole::Manager);
        assert_eq!(admin.display_name, "Admin Manager");

        let john = users.authenticate("john.smith", "JSmith@123").unwrap();
        assert_eq!(john.role, UserRole::Salesman);
    }

    #[test]
    fn test_rejects_bad_credentials() {
        let users = directory();
        assert!(users.authenticate("admin", "wrong").is_none());
        assert!(users.authenticate("nobody", "Manager@2024").is_none());
    }

    #[test]
    fn test_unknown_user_checks_dummy_hash() {
        let users = directory();
        assert!(users.dummy_hash.starts_with("$2b$04$"));
        assert!(users.authenticate("nobody", DUMMY_PASSWORD).is_none());
    }

    #[tokio::test]
    async fn test_authenticate_off_the_runtime() {
        let users = Arc::new(directory());
        let admin = users
            .clone()
            .authenticate_blocking("admin".to_string(), "Manager@2024".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, UserRole::Manager);

        let rejected = users
            .authenticate_blocking("admin".to_string(), "wrong".to_string())
            .await
            .unwrap();
        assert!(rejected.is_none());
    }
}
