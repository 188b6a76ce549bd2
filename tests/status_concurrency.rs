use futures::future::join_all;

use aura_drive::config::DatabaseConfig;
use aura_drive::controllers::vehicle_controller::VehicleController;
use aura_drive::database::DatabaseConnection;
use aura_drive::dto::vehicle_dto::{ChangeStatusRequest, UpdateVehicleRequest};
use aura_drive::models::VehicleStatus;
use aura_drive::utils::errors::AppError;

const VEHICLE_ID: i64 = 14;

/// Base en fichero: varias conexiones reales escribiendo a la vez
async fn file_backed_pool(dir: &tempfile::TempDir) -> sqlx::SqlitePool {
    let url = format!("sqlite://{}", dir.path().join("status.db").display());
    let db = DatabaseConnection::new(DatabaseConfig::new(url)).await.unwrap();
    db.seed_if_empty().await.unwrap();
    db.pool().clone()
}

async fn reset_to_booked(pool: &sqlx::SqlitePool) {
    sqlx::query("UPDATE vehicles SET status = 'Booked' WHERE id = ?")
        .bind(VEHICLE_ID)
        .execute(pool)
        .await
        .unwrap();
}

fn assert_lost_race(err: &AppError) {
    assert!(
        matches!(err, AppError::Conflict(_) | AppError::InvalidTransition { .. }),
        "unexpected error: {:?}",
        err
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_status_changes_keep_sold_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_backed_pool(&dir).await;

    for round in 0..20 {
        reset_to_booked(&pool).await;

        let tasks = (0..8).map(|i| {
            let pool = pool.clone();
            let target = if i % 2 == 0 {
                VehicleStatus::Sold
            } else {
                VehicleStatus::Available
            };
            tokio::spawn(async move {
                let controller = VehicleController::new(pool);
                let result = controller
                    .change_status(VEHICLE_ID, ChangeStatusRequest { status: target })
                    .await;
                (target, result)
            })
        });

        let mut sold_accepted = false;
        for joined in join_all(tasks).await {
            let (target, result) = joined.unwrap();
            match result {
                Ok(vehicle) => {
                    if target == VehicleStatus::Sold {
                        assert_eq!(vehicle.status, VehicleStatus::Sold);
                        sold_accepted = true;
                    }
                }
                Err(err) => assert_lost_race(&err),
            }
        }

        let stored = VehicleController::new(pool.clone())
            .get_by_id(VEHICLE_ID)
            .await
            .unwrap();
        if sold_accepted {
            assert_eq!(stored.status, VehicleStatus::Sold, "round {}", round);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_update_never_reopens_a_sold_vehicle() {
    let dir = tempfile::tempdir().unwrap();
    let pool = file_backed_pool(&dir).await;

    for round in 0..20 {
        reset_to_booked(&pool).await;

        let sell = {
            let pool = pool.clone();
            tokio::spawn(async move {
                VehicleController::new(pool)
                    .change_status(
                        VEHICLE_ID,
                        ChangeStatusRequest {
                            status: VehicleStatus::Sold,
                        },
                    )
                    .await
            })
        };
        let reopen = {
            let pool = pool.clone();
            tokio::spawn(async move {
                let request = UpdateVehicleRequest {
                    status: Some(VehicleStatus::Available),
                    ..Default::default()
                };
                VehicleController::new(pool).update(VEHICLE_ID, request).await
            })
        };

        let sold = sell.await.unwrap();
        let reopened = reopen.await.unwrap();
        if let Err(err) = &reopened {
            assert_lost_race(err);
        }

        let stored = VehicleController::new(pool.clone())
            .get_by_id(VEHICLE_ID)
            .await
            .unwrap();
        match sold {
            Ok(_) => assert_eq!(stored.status, VehicleStatus::Sold, "round {}", round),
            Err(err) => assert_lost_race(&err),
        }
    }
}
