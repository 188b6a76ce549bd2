use sqlx::SqlitePool;

use crate::analysis;
use crate::models::analytics::{Insights, QuarterlyAggregate};
use crate::repositories::sale_repository::SaleRepository;
use crate::utils::errors::AppResult;

pub struct AnalyticsController {
    sales: SaleRepository,
}

impl AnalyticsController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            sales: SaleRepository::new(pool),
        }
    }

    pub async fn quarterly(&self) -> AppResult<Vec<QuarterlyAggregate>> {
        let sales = self.sales.list_all().await?;
        Ok(analysis::quarterly_aggregates(&sales))
    }

    pub async fn insights(&self) -> AppResult<Insights> {
        let quarters = self.quarterly().await?;
        Ok(analysis::insights(&quarters))
    }
}
