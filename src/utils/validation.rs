//! Utilidades de validación
//!
//! Este módulo contiene expresiones y funciones helper para validar los
//! datos que llegan por la API, complementando los derives de `validator`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::{validation_error, AppResult};

lazy_static! {
    /// VIN: de 11 a 17 caracteres, sin I, O ni Q
    pub static ref VIN_REGEX: Regex = Regex::new(r"^[A-HJ-NPR-Z0-9]{11,17}$").unwrap();
}

/// Normalizar un VIN antes de validarlo y guardarlo
pub fn normalize_vin(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar que un importe sea estrictamente positivo
pub fn ensure_positive(field: &'static str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(validation_error(field, "must be greater than zero"));
    }
    Ok(())
}

/// Validar que un importe no sea negativo
pub fn ensure_non_negative(field: &'static str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(validation_error(field, "must not be negative"));
    }
    Ok(())
}

/// Validar que un texto obligatorio no esté vacío
pub fn ensure_not_blank(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(validation_error(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin_regex() {
        assert!(VIN_REGEX.is_match("WP0AB2A71KS123001"));
        assert!(VIN_REGEX.is_match("SCBBD7ZH3KC00001"));
        assert!(!VIN_REGEX.is_match("WP0AB2A71KS12300I"));
        assert!(!VIN_REGEX.is_match("SHORT"));
        assert!(!VIN_REGEX.is_match("WP0AB2A71KS1230012"));
    }

    #[test]
    fn test_normalize_vin() {
        assert_eq!(normalize_vin("  wp0ab2a71ks123001 "), "WP0AB2A71KS123001");
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("purchase_price", 185_000.0).is_ok());
        assert!(ensure_positive("purchase_price", 0.0).is_err());
        assert!(ensure_positive("purchase_price", -1.0).is_err());
        assert!(ensure_positive("purchase_price", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("commission", 0.0).is_ok());
        assert!(ensure_non_negative("commission", -0.01).is_err());
    }

    #[test]
    fn test_ensure_not_blank() {
        assert!(ensure_not_blank("make", "Ferrari").is_ok());
        assert!(ensure_not_blank("make", "   ").is_err());
    }
}
