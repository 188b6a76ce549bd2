use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use aura_drive::config::{DatabaseConfig, EnvironmentConfig};
use aura_drive::database::DatabaseConnection;
use aura_drive::services::UserDirectory;
use aura_drive::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🏎️ Aura Drive - Luxury Dealership API");
    info!("======================================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::new(config.database_url.clone());
    let db_connection = match DatabaseConnection::new(db_config.clone()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if config.seed_database {
        db_connection.seed_if_empty().await?;
    } else {
        warn!("🌱 Sembrado de datos desactivado");
    }

    let users = UserDirectory::with_default_accounts(config.bcrypt_cost)?;
    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(db_connection.pool().clone(), config, db_config, users);
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Información del servicio");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Vehículos:");
    info!("   GET|POST /api/vehicles/ - Listar / crear");
    info!("   GET|PUT|DELETE /api/vehicles/:id - Obtener / actualizar / eliminar");
    info!("   PATCH /api/vehicles/:id/status - Cambiar estado");
    info!("   GET  /api/vehicles/:id/transitions - Estados permitidos");
    info!("   GET  /api/vehicles/:id/specs - Ficha técnica");
    info!("👤 Clientes: GET|POST /api/clients/, GET|PUT|DELETE /api/clients/:id");
    info!("💰 Ventas: GET|POST /api/sales/, GET|PUT|DELETE /api/sales/:id");
    info!("📊 Analítica: GET /api/analytics/quarterly, GET /api/analytics/insights");
    info!("🩺 Sistema: GET /api/system/health, GET /api/specs/catalog");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
