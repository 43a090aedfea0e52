use poem::{listener::TcpListener, Server};
use shopping_list_api::api::build_app;
use shopping_list_api::app_data::AppData;
use shopping_list_api::config::{init_logging, BootstrapSettings, LoggingConfig, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&LoggingConfig::from_env_provider(&SystemEnvironment))?;

    let settings = BootstrapSettings::from_env()?;
    tracing::info!(?settings, "Loaded bootstrap settings");

    let address = settings.server_address();
    let app_data = AppData::init(settings);
    let app = build_app(&app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Item endpoints available at http://{}/items", address);

    Server::new(TcpListener::bind(address))
        .run(app)
        .await?;

    Ok(())
}
