use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardroom::{
    routes, AppError, AppState, EventBus, InMemoryConnectionManager, InMemoryRoomRepository,
    RoomCoordinator, RoomSubscription, ServerConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardroom=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    info!(config = ?config, "Starting card room server");

    let connection_manager = Arc::new(InMemoryConnectionManager::new());
    let (event_bus, receiver) = EventBus::channel();

    // One dispatcher task owns the room registry; every event runs to completion in order
    let coordinator = RoomCoordinator::new(
        Box::new(InMemoryRoomRepository::new()),
        connection_manager.clone(),
    );
    let _dispatcher = RoomSubscription::new(coordinator, receiver).start();

    let app_state = AppState::new(connection_manager, event_bus);
    let app = routes::build_router(app_state, routes::cors_layer(&config)?);

    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    info!(address = %listener.local_addr()?, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
