use hello_app::{config::Settings, error::AppError, serve, telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    telemetry::init_subscriber(&settings)?;

    let addr = settings.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(%addr, env = %settings.app_env, "Server starting");

    serve(listener).await
}
