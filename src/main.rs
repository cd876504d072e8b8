use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::Notify;
use tracing::{error, info, warn};

use autoservice::config::EnvironmentConfig;
use autoservice::console::{Console, StdinInput};
use autoservice::database::DatabaseConnection;
use autoservice::routes::create_router;
use autoservice::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Logs a stderr para no mezclarlos con la consola
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("🔧 Autoservice - gestión del taller");
    if !config.http_enabled && !config.console_enabled {
        warn!("⚠️ HTTP_ENABLED y CONSOLE_ENABLED desactivados, no hay nada que ejecutar");
    }

    let db_connection = match DatabaseConnection::new(&config.database).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };
    db_connection.run_migrations().await?;

    let state = AppState::new(db_connection.pool().clone());
    let console_done = Arc::new(Notify::new());

    let server_handle = if config.http_enabled {
        let addr: SocketAddr = config.server_url().parse()?;
        let app = create_router(state.clone(), config.cors_origins.clone());
        // Con consola activa el servidor vive hasta que ésta termina
        let done = config.console_enabled.then(|| console_done.clone());

        info!("🌐 Servidor iniciando en http://{}", addr);
        info!("   GET  /clients - Listar clientes");
        info!("   POST /clients - Crear cliente");

        Some(tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal(done))
                .await
        }))
    } else {
        None
    };

    if config.console_enabled {
        let mut console = Console::new(state, Box::new(StdinInput::new()), std::io::stdout());
        if let Err(e) = console.run().await {
            error!("❌ Error en la consola: {}", e);
        }
        console_done.notify_one();
    }

    if let Some(handle) = server_handle {
        if let Err(e) = handle.await? {
            error!("❌ Servidor terminó con error: {}", e);
        }
    }

    info!("👋 Autoservice terminado");
    Ok(())
}

/// Señal de apagado graceful: fin de la consola si está activa,
/// Ctrl+C o SIGTERM en caso contrario
async fn shutdown_signal(console_done: Option<Arc<Notify>>) {
    if let Some(done) = console_done {
        done.notified().await;
        info!("🛑 Consola cerrada, apagando servidor...");
        return;
    }

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el manejador de SIGTERM: {}", e);
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
