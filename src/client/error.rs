use thiserror::Error;

use crate::models::vehicle::VehicleStatus;

/// Errores del cliente del dashboard
#[derive(Debug, Error)]
pub enum ClientError {
    /// 401: las credenciales se descartan y hay que volver a iniciar sesión
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// 403: recurso reservado al manager
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Cualquier otra respuesta de error, con el `detail` del servidor
    #[error("request failed with status {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Fallo de red o de decodificación de la respuesta
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("not logged in")]
    NotAuthenticated,

    #[error("vehicle {0} is not loaded")]
    UnknownVehicle(i64),

    #[error("status change from {from} to {to} is not offered")]
    TransitionNotOffered { from: VehicleStatus, to: VehicleStatus },
}

impl ClientError {
    /// La sesión ya no es válida y hay que pedir credenciales de nuevo
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_) | ClientError::NotAuthenticated)
    }

    /// Mensaje para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized(_) | ClientError::NotAuthenticated => {
                "Your session has ended. Please sign in again.".to_string()
            }
            ClientError::Forbidden(detail) | ClientError::Api { detail, .. } => detail.clone(),
            ClientError::Network(_) => "Something went wrong. Please try again.".to_string(),
            ClientError::UnknownVehicle(_) | ClientError::TransitionNotOffered { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_surfaced_verbatim() {
        let err = ClientError::Api {
            status: 409,
            detail: "Vehicle with this VIN already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Vehicle with this VIN already exists");
        assert!(!err.requires_login());

        let err = ClientError::Forbidden("Manager access required".to_string());
        assert_eq!(err.user_message(), "Manager access required");
    }

    #[test]
    fn test_unauthorized_requires_login() {
        assert!(ClientError::Unauthorized("Invalid credentials".to_string()).requires_login());
        assert!(ClientError::NotAuthenticated.requires_login());
    }
}
