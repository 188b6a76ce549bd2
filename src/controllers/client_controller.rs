use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

use crate::dto::client_dto::{ClientFilters, CreateClientRequest, UpdateClientRequest};
use crate::models::client::Client;
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppResult};
use crate::utils::validation::{ensure_non_negative, ensure_not_blank};

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: ClientFilters) -> AppResult<Vec<Client>> {
        self.repository.list(&filters).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Client> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client"))
    }

    pub async fn create(&self, request: CreateClientRequest) -> AppResult<Client> {
        request.validate()?;
        ensure_not_blank("first_name", &request.first_name)?;
        ensure_not_blank("last_name", &request.last_name)?;
        ensure_non_negative("lifetime_value", request.lifetime_value)?;

        if self.repository.email_exists(&request.email, None).await? {
            return Err(conflict_error("Client", "email"));
        }

        let client = self.repository.create(&request).await?;
        info!("👤 Cliente registrado: {} ({})", client.full_name(), client.vip_tier);
        Ok(client)
    }

    pub async fn update(&self, id: i64, request: UpdateClientRequest) -> AppResult<Client> {
        request.validate()?;
        if let Some(value) = request.lifetime_value {
            ensure_non_negative("lifetime_value", value)?;
        }

        let current = self.get_by_id(id).await?;
        if let Some(email) = &request.email {
            if self.repository.email_exists(email, Some(id)).await? {
                return Err(conflict_error("Client", "email"));
            }
        }

        let client = self.repository.update(current, request).await?;
        info!("👤 Cliente {} actualizado", client.id);
        Ok(client)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Client"));
        }
        info!("🗑️ Cliente {} eliminado", id);
        Ok(())
    }
}
