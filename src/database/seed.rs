//! Datos de ejemplo del concesionario
//!
//! Inventario, cartera de clientes y ventas de 2025-2026. Solo se insertan
//! cuando la tabla de vehículos está vacía.

use sqlx::SqlitePool;

use crate::models::{VehicleStatus, VipTier};

struct SeedVehicle {
    vin: &'static str,
    make: &'static str,
    model: &'static str,
    year: i32,
    purchase_price: f64,
    status: VehicleStatus,
}

struct SeedClient {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    lifetime_value: f64,
    vip_tier: VipTier,
}

/// (vehicle_id, client_id, sale_price, sale_date, commission)
type SeedSale = (i64, i64, f64, &'static str, f64);

const fn vehicle(
    vin: &'static str,
    make: &'static str,
    model: &'static str,
    year: i32,
    purchase_price: f64,
    status: VehicleStatus,
) -> SeedVehicle {
    SeedVehicle { vin, make, model, year, purchase_price, status }
}

const fn client(
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    lifetime_value: f64,
    vip_tier: VipTier,
) -> SeedClient {
    SeedClient { first_name, last_name, email, phone, lifetime_value, vip_tier }
}

const VEHICLES: [SeedVehicle; 15] = [
    vehicle("WP0AB2A71KS123001", "Porsche", "911 Turbo S", 2025, 185_000.0, VehicleStatus::Sold),
    vehicle("WP0AB2A71KS123002", "Porsche", "Cayenne Turbo GT", 2025, 195_000.0, VehicleStatus::Sold),
    vehicle("ZFF80ALA5K0230001", "Ferrari", "F8 Tributo", 2024, 280_000.0, VehicleStatus::Sold),
    vehicle("ZFF80ALA5K0230002", "Ferrari", "Roma Spider", 2025, 265_000.0, VehicleStatus::Sold),
    vehicle("ZHWUF4ZF3LLA00001", "Lamborghini", "Huracán EVO", 2024, 260_000.0, VehicleStatus::Sold),
    vehicle("ZHWUF4ZF3LLA00002", "Lamborghini", "Urus Performante", 2025, 240_000.0, VehicleStatus::Sold),
    vehicle("SCFLMCDY1KGR00001", "Aston Martin", "DB12", 2025, 245_000.0, VehicleStatus::Sold),
    vehicle("SCFLMCDY1KGR00002", "Aston Martin", "Vantage V12", 2024, 310_000.0, VehicleStatus::Sold),
    vehicle("SBM14DCA5LW000001", "McLaren", "750S", 2025, 320_000.0, VehicleStatus::Sold),
    vehicle("SBM14DCA5LW000002", "McLaren", "Artura", 2025, 250_000.0, VehicleStatus::Sold),
    vehicle("SCBBD7ZH3KC00001", "Bentley", "Continental GT Speed", 2025, 285_000.0, VehicleStatus::Sold),
    vehicle("SCBBD7ZH3KC00002", "Bentley", "Flying Spur", 2024, 230_000.0, VehicleStatus::Sold),
    vehicle("WP0AB2A71KS123003", "Porsche", "Taycan Turbo S", 2026, 205_000.0, VehicleStatus::Available),
    vehicle("ZFF80ALA5K0230003", "Ferrari", "296 GTB", 2026, 350_000.0, VehicleStatus::Available),
    vehicle("ZHWUF4ZF3LLA00003", "Lamborghini", "Revuelto", 2026, 600_000.0, VehicleStatus::InTransit),
];

const CLIENTS: [SeedClient; 8] = [
    client("Alexander", "Rothschild", "a.rothschild@luxmail.com", "+1-212-555-0101", 1_250_000.0, VipTier::Black),
    client("Victoria", "Chen-Wu", "victoria.cw@elitemail.com", "+1-310-555-0202", 890_000.0, VipTier::Platinum),
    client("Sebastian", "Al-Rashid", "s.alrashid@premiummail.com", "+971-55-555-0303", 2_100_000.0, VipTier::Black),
    client("Isabella", "Montague", "i.montague@finesse.com", "+44-20-555-0404", 560_000.0, VipTier::Gold),
    client("James", "Worthington III", "j.worthington@heritage.com", "+1-617-555-0505", 340_000.0, VipTier::Gold),
    client("Natalia", "Petrova", "n.petrova@luxelife.com", "+7-495-555-0606", 1_780_000.0, VipTier::Black),
    client("Marcus", "Sterling", "m.sterling@vault.com", "+1-415-555-0707", 150_000.0, VipTier::Standard),
    client("Amara", "Okafor-Davies", "a.okafor@prestige.com", "+234-1-555-0808", 420_000.0, VipTier::Gold),
];

const SALES: [SeedSale; 12] = [
    (1, 1, 218_000.0, "2025-01-15", 10_900.0),
    (3, 3, 335_000.0, "2025-02-20", 16_750.0),
    (2, 2, 228_000.0, "2025-04-10", 11_400.0),
    (5, 6, 310_000.0, "2025-05-05", 15_500.0),
    (4, 1, 315_000.0, "2025-06-18", 15_750.0),
    (6, 4, 285_000.0, "2025-07-22", 14_250.0),
    (7, 5, 290_000.0, "2025-08-14", 14_500.0),
    (8, 3, 375_000.0, "2025-10-03", 18_750.0),
    (9, 6, 385_000.0, "2025-11-28", 19_250.0),
    (10, 2, 295_000.0, "2025-12-15", 14_750.0),
    (11, 8, 340_000.0, "2026-01-10", 17_000.0),
    (12, 7, 272_000.0, "2026-02-25", 13_600.0),
];

/// Sembrar la base de datos. Devuelve `false` si ya había vehículos.
///
/// Las ventas se insertan tal cual: el valor acumulado de cada cliente ya
/// viene incluido en los datos de ejemplo.
pub async fn seed_database(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for v in &VEHICLES {
        sqlx::query(
            "INSERT INTO vehicles (vin, make, model, year, purchase_price, status) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(v.vin)
        .bind(v.make)
        .bind(v.model)
        .bind(v.year)
        .bind(v.purchase_price)
        .bind(v.status)
        .execute(&mut *tx)
        .await?;
    }

    for c in &CLIENTS {
        sqlx::query(
            "INSERT INTO clients (first_name, last_name, email, phone, lifetime_value, vip_tier) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(c.first_name)
        .bind(c.last_name)
        .bind(c.email)
        .bind(c.phone)
        .bind(c.lifetime_value)
        .bind(c.vip_tier)
        .execute(&mut *tx)
        .await?;
    }

    for (vehicle_id, client_id, sale_price, sale_date, commission) in SALES {
        sqlx::query(
            "INSERT INTO sales (vehicle_id, client_id, sale_price, sale_date, commission) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(vehicle_id)
        .bind(client_id)
        .bind(sale_price)
        .bind(sale_date)
        .bind(commission)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::schema;

    #[tokio::test]
    async fn test_seed_counts() {
        let pool = DatabaseConfig::in_memory().create_pool().await.unwrap();
        schema::create_tables(&pool).await.unwrap();
        assert!(seed_database(&pool).await.unwrap());

        for (table, expected) in [("vehicles", 15), ("clients", 8), ("sales", 12)] {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(count, expected, "{}", table);
        }
    }

    #[test]
    fn test_every_sale_points_at_a_sold_vehicle() {
        for (vehicle_id, client_id, _, _, _) in SALES {
            let v = &VEHICLES[(vehicle_id - 1) as usize];
            assert_eq!(v.status, VehicleStatus::Sold);
            assert!((1..=CLIENTS.len() as i64).contains(&client_id));
        }
    }
}
