//! Ciclo de vida del vehículo
//!
//! Este módulo aplica en el servidor la misma tabla de transiciones que
//! ofrece el dashboard: ninguna llamada directa a la API puede saltársela.

use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::{AppError, AppResult};

/// Resultado de validar un cambio de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// El vehículo ya está en el estado pedido
    Unchanged,
    /// La transición está permitida y debe aplicarse
    Apply,
}

/// Validar un cambio de estado contra la tabla de transiciones
///
/// Pedir el estado actual no es un error: se trata como una operación
/// idempotente que no escribe nada.
pub fn check_transition(from: VehicleStatus, to: VehicleStatus) -> AppResult<TransitionOutcome> {
    if from == to {
        return Ok(TransitionOutcome::Unchanged);
    }
    if from.can_transition_to(to) {
        Ok(TransitionOutcome::Apply)
    } else {
        Err(AppError::InvalidTransition { from, to })
    }
}

/// Validar que un vehículo puede venderse
pub fn ensure_sellable(status: VehicleStatus) -> AppResult<()> {
    match status {
        VehicleStatus::Sold => Err(AppError::Conflict("Vehicle is already sold".to_string())),
        other if other.can_transition_to(VehicleStatus::Sold) => Ok(()),
        other => Err(AppError::InvalidTransition {
            from: other,
            to: VehicleStatus::Sold,
        }),
    }
}

/// Destinos que se ofrecen al usuario desde el estado actual
pub fn status_options(current: VehicleStatus) -> Vec<VehicleStatus> {
    current.allowed_transitions().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use VehicleStatus::*;

    #[test]
    fn test_allowed_transitions_apply() {
        assert_eq!(check_transition(Available, Sold).unwrap(), TransitionOutcome::Apply);
        assert_eq!(check_transition(InTransit, Available).unwrap(), TransitionOutcome::Apply);
        assert_eq!(check_transition(Booked, Available).unwrap(), TransitionOutcome::Apply);
    }

    #[test]
    fn test_same_status_is_unchanged() {
        for status in VehicleStatus::ALL {
            assert_eq!(check_transition(status, status).unwrap(), TransitionOutcome::Unchanged);
        }
    }

    #[test]
    fn test_disallowed_transitions_are_rejected() {
        for (from, to) in [(Sold, InTransit), (Sold, Available), (Available, InTransit), (Booked, InTransit)] {
            let err = check_transition(from, to).unwrap_err();
            assert!(matches!(err, AppError::InvalidTransition { .. }), "{} -> {}", from, to);
        }
    }

    #[test]
    fn test_sold_vehicle_cannot_be_sold_again() {
        assert!(ensure_sellable(Available).is_ok());
        assert!(ensure_sellable(InTransit).is_ok());
        assert!(ensure_sellable(Booked).is_ok());
        assert!(matches!(ensure_sellable(Sold), Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_status_options_never_include_current_or_leave_sold() {
        for status in VehicleStatus::ALL {
            assert!(!status_options(status).contains(&status));
        }
        assert!(status_options(Sold).is_empty());
    }
}
