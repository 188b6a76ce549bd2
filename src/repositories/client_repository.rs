use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::client_dto::{ClientFilters, CreateClientRequest, UpdateClientRequest};
use crate::models::client::Client;
use crate::utils::errors::{map_constraint_error, AppError};

const CLIENT_COLUMNS: &str = "id, first_name, last_name, email, phone, lifetime_value, vip_tier";

pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Listado ordenado por valor acumulado, de mayor a menor
    pub async fn list(&self, filters: &ClientFilters) -> Result<Vec<Client>, AppError> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM clients", CLIENT_COLUMNS));

        if let Some(tier) = filters.vip_tier {
            query.push(" WHERE vip_tier = ").push_bind(tier);
        }

        let page = filters.pagination();
        query
            .push(" ORDER BY lifetime_value DESC, id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let clients = query.build_query_as::<Client>().fetch_all(&self.pool).await?;
        Ok(clients)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {} FROM clients WHERE id = ?",
            CLIENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn email_exists(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE lower(email) = lower(?) AND id != COALESCE(?, -1))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    pub async fn create(&self, request: &CreateClientRequest) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (first_name, last_name, email, phone, lifetime_value, vip_tier)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            CLIENT_COLUMNS
        ))
        .bind(request.first_name.trim())
        .bind(request.last_name.trim())
        .bind(request.email.trim())
        .bind(request.phone.as_deref())
        .bind(request.lifetime_value)
        .bind(request.vip_tier)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, "Client with this email already exists"))?;

        Ok(client)
    }

    pub async fn update(&self, current: Client, request: UpdateClientRequest) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            UPDATE clients
            SET first_name = ?, last_name = ?, email = ?, phone = ?, lifetime_value = ?, vip_tier = ?
            WHERE id = ?
            RETURNING {}
            "#,
            CLIENT_COLUMNS
        ))
        .bind(request.first_name.unwrap_or(current.first_name))
        .bind(request.last_name.unwrap_or(current.last_name))
        .bind(request.email.unwrap_or(current.email))
        .bind(request.phone.or(current.phone))
        .bind(request.lifetime_value.unwrap_or(current.lifetime_value))
        .bind(request.vip_tier.unwrap_or(current.vip_tier))
        .bind(current.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, "Client with this email already exists"))?;

        Ok(client)
    }

    /// Devuelve `false` si el cliente no existía
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, "Client has recorded sales and cannot be deleted"))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::DatabaseConnection;
    use crate::models::client::VipTier;

    async fn seeded_repository() -> ClientRepository {
        let db = DatabaseConnection::new(DatabaseConfig::in_memory()).await.unwrap();
        db.seed_if_empty().await.unwrap();
        ClientRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn test_list_orders_by_lifetime_value() {
        let repo = seeded_repository().await;
        let clients = repo.list(&ClientFilters::default()).await.unwrap();
        assert_eq!(clients.len(), 8);
        assert_eq!(clients[0].last_name, "Al-Rashid");
        assert!(clients
            .windows(2)
            .all(|pair| pair[0].lifetime_value >= pair[1].lifetime_value));
    }

    #[tokio::test]
    async fn test_list_filters_by_tier() {
        let repo = seeded_repository().await;
        let filters = ClientFilters {
            vip_tier: Some(VipTier::Gold),
            ..Default::default()
        };
        let clients = repo.list(&filters).await.unwrap();
        assert_eq!(clients.len(), 3);
        assert!(clients.iter().all(|c| c.vip_tier == VipTier::Gold));
    }

    #[tokio::test]
    async fn test_email_exists_ignores_case() {
        let repo = seeded_repository().await;
        assert!(repo.email_exists("M.STERLING@vault.com", None).await.unwrap());
        assert!(!repo.email_exists("m.sterling@vault.com", Some(7)).await.unwrap());
    }
}
