//! Cartera de clientes: rankings, comisión por cliente y niveles VIP

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::LookupIndex;
use crate::models::{Client, Sale, VipTier};

/// Los `limit` clientes con mayor valor acumulado
pub fn top_clients_by_value(clients: &[Client], limit: usize) -> Vec<Client> {
    let mut ranked = clients.to_vec();
    ranked.sort_by(|a, b| b.lifetime_value.total_cmp(&a.lifetime_value));
    ranked.truncate(limit);
    ranked
}

/// Número de compras por cliente
pub fn purchase_counts(sales: &[Sale]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for sale in sales {
        *counts.entry(sale.client_id).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedClient {
    pub client: Client,
    pub purchases: usize,
}

/// Ranking por valor acumulado con el número de compras de cada cliente
pub fn client_ranking(clients: &[Client], sales: &[Sale], limit: usize) -> Vec<RankedClient> {
    let counts = purchase_counts(sales);
    top_clients_by_value(clients, limit)
        .into_iter()
        .map(|client| RankedClient {
            purchases: counts.get(&client.id).copied().unwrap_or(0),
            client,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCommission {
    pub client_id: i64,
    pub client_name: String,
    pub deals: usize,
    pub commission: f64,
}

/// Comisión generada por cliente, de mayor a menor, los `limit` primeros
pub fn commission_by_client(sales: &[Sale], index: &LookupIndex, limit: usize) -> Vec<ClientCommission> {
    let mut groups: HashMap<i64, ClientCommission> = HashMap::new();
    for sale in sales {
        let entry = groups.entry(sale.client_id).or_insert_with(|| ClientCommission {
            client_id: sale.client_id,
            client_name: index
                .client(sale.client_id)
                .map_or_else(|| "Unknown".to_string(), |c| c.full_name()),
            deals: 0,
            commission: 0.0,
        });
        entry.deals += 1;
        entry.commission += sale.commission;
    }

    let mut rows: Vec<ClientCommission> = groups.into_values().collect();
    rows.sort_by(|a, b| {
        b.commission
            .total_cmp(&a.commission)
            .then_with(|| a.client_id.cmp(&b.client_id))
    });
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCount {
    pub tier: VipTier,
    pub count: usize,
}

/// Clientes por nivel VIP, todos los niveles presentes, de Black a Standard
pub fn tier_counts(clients: &[Client]) -> Vec<TierCount> {
    VipTier::ALL
        .into_iter()
        .map(|tier| TierCount {
            tier,
            count: clients.iter().filter(|c| c.vip_tier == tier).count(),
        })
        .collect()
}
