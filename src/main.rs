
mod api;
mod app_state;
mod db;
mod env_config;
mod error;
mod layers;
mod logger;
mod server;

use app_state::models::AppState;
use db::mongo::mongo_service::MongoService;
use env_config::models::{app_config::LogConfig, app_setting::AppSettings};
use env_config::error::ConfigError;
use error::AppError;
use server::{HttpServer, ServerConfig};
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let shutdown = CancellationToken::new();
    tokio::spawn(watch_shutdown_signals(shutdown.clone()));

    if let Err(err) = run(shutdown).await {
        println!("error: {err}");
        std::process::exit(1);
    }
}

/// Запускает сервис и блокируется до отмены `shutdown` или падения сервера
async fn run(shutdown: CancellationToken) -> Result<(), AppError> {
    // Загрузка переменных окружения и конфигурации
    let settings: Arc<AppSettings> = Arc::new(initialize_application(AppSettings::load)?);

    serve(settings, &ServerConfig::default(), shutdown).await
}

/// Подключает MongoDB и обслуживает HTTP до остановки
async fn serve(
    settings: Arc<AppSettings>,
    server_config: &ServerConfig,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    // Подключение к MongoDB, прерывается по сигналу
    let mongo_service = MongoService::new(&settings, &shutdown).await?;

    if shutdown.is_cancelled() {
        info!("Shutdown requested during startup, HTTP server not started");
        mongo_service.close().await;
        return Ok(());
    }

    info!("MongoDB ready, starting HTTP server");

    // Создание глобального состояния приложения
    let app_state = Arc::new(AppState::new(mongo_service.repository_stock.clone()));

    // Создание API роутера
    let app_router = api::create_router(app_state);

    // Запуск HTTP сервера
    let http_server = HttpServer::new(server_config, app_router);
    let result = http_server.run(shutdown).await;

    // Соединение закрывается в любом случае
    mongo_service.close().await;

    result.map_err(AppError::from)
}

/// Инициализирует настройки и логирование приложения
fn initialize_application<F>(load: F) -> Result<AppSettings, AppError>
where
    F: FnOnce() -> Result<AppSettings, ConfigError>,
{
    let app_settings = match load() {
        Ok(settings) => settings,
        Err(err) => {
            // Настроек нет, логируем с параметрами по умолчанию.
            // Ошибка логгера здесь вторична, возвращаем ошибку конфигурации
            let defaults = LogConfig::default();
            let _ = logger::init_logger(&defaults.level, &defaults.format, true);
            info!("start service");
            error!(error = %err, "Failed to load configuration");
            return Err(err.into());
        }
    };

    logger::init_logger(
        &app_settings.app_config.log.level,
        &app_settings.app_config.log.format,
        app_settings.app_env.is_local(),
    )?;

    info!("start service");
    info!("Current environment: {}", app_settings.app_env.env);

    if app_settings.app_env.is_local() {
        debug!(
            database = %app_settings.app_env.mongodb_name,
            collection = %app_settings.app_env.mongodb_stocks_collection_name,
            log_level = %app_settings.app_config.log.level,
            "Running in local development mode"
        );
    }

    Ok(app_settings)
}

/// Отменяет `shutdown` по Ctrl+C или SIGTERM
async fn watch_shutdown_signals(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }

    shutdown.cancel();
}
