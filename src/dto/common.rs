use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

/// Límite por defecto de los listados
pub const DEFAULT_LIMIT: u32 = 50;

/// Filtro opcional de query string: `?status=` vacío equivale a no filtrar
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            T::deserialize(raw.trim().to_string().into_deserializer())
                .map(Some)
                .map_err(|e: serde::de::value::Error| <D::Error as serde::de::Error>::custom(e))
        }
        _ => Ok(None),
    }
}

/// Paginación `skip` / `limit` de los listados
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.skip.unwrap_or(0))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit.unwrap_or(DEFAULT_LIMIT))
    }
}
