use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use image_gallery::{
    config::Config,
    gallery::{GalleryProperties, HostAdapter, ImageGallery},
    routes::create_router,
    search::UnsplashClient,
    utils::init_logger,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);
    if config.unsplash.access_key.is_empty() {
        warn!("UNSPLASH_ACCESS_KEY is not set; searches will fail until it is configured");
    }

    let client = UnsplashClient::from_config(&config.unsplash)
        .map_err(|e| anyhow::anyhow!("Failed to build Unsplash client: {}", e))?;

    let gallery = ImageGallery::new(
        Arc::new(client),
        GalleryProperties { description: config.gallery.description.clone() },
    );
    gallery.on_init().await?;
    info!(instance = %gallery.instance_id(), "Gallery component initialized");

    // Create shared state
    let state = AppState { config: config.clone(), gallery };

    // Create router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
