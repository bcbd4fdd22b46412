use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, Environment as EnvironmentSource, File};
use tokio::net::TcpListener;

use clearspeech::application::ports::ProjectRepository;
use clearspeech::application::services::{AudioFileProcessor, ProjectProcessingService};
use clearspeech::infrastructure::audio::{AsrServiceClient, DenoiserFactory};
use clearspeech::infrastructure::observability::{init_tracing, TracingConfig};
use clearspeech::infrastructure::persistence::{create_pool, PgProjectRepository};
use clearspeech::infrastructure::storage::BlobStoreFactory;
use clearspeech::presentation::config::Environment;
use clearspeech::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;
    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    let repository: Arc<dyn ProjectRepository> = Arc::new(PgProjectRepository::new(pool));

    let blob_store = BlobStoreFactory::create(&settings.storage)?;
    let denoiser = DenoiserFactory::create(&settings.denoiser).await;
    let transcriber = Arc::new(AsrServiceClient::new(
        &settings.asr.base_url,
        Duration::from_secs(settings.asr.timeout_seconds),
    ));

    let processor = Arc::new(AudioFileProcessor::new(
        Arc::clone(&repository),
        blob_store,
        denoiser,
        transcriber,
        Path::new(&settings.processing.work_dir),
    )?);
    let processing_service = Arc::new(ProjectProcessingService::new(
        Arc::clone(&repository),
        processor,
    ));

    let state = AppState {
        processing_service,
        project_repository: repository,
    };
    let router = create_router(state);

    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", bind_addr);

    let listener = TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
