use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::bus::Bus;
use crate::catalog::HttpCatalog;
use crate::config::{load_or_create_config, ShopfrontConfig};
use crate::error::{CoreError, CoreResult};
use crate::home::{HomePanel, HomeStore};
use crate::nav::BusNavigator;

pub mod error;
pub mod events;
pub mod home;
pub mod openapi;

/// HTTP surface for the home panel core.
pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    state: Arc<ServerState>,
}

impl Server {
    /// Wires the core, runs the one-shot category load, and starts
    /// serving on `config.bind_addr`.
    pub async fn start(config: ShopfrontConfig) -> CoreResult<Self> {
        let bus = Bus::new(config.events_capacity);
        let store = Arc::new(HomeStore::new(bus.clone(), config.journal_capacity));
        let catalog = Arc::new(HttpCatalog::from_config(&config)?);
        let navigator = Arc::new(BusNavigator::new(bus.clone()));
        let panel = Arc::new(HomePanel::new(
            Arc::clone(&store),
            catalog.clone(),
            catalog,
            navigator,
        ));
        panel.initialize().await;

        let state = Arc::new(ServerState {
            panel,
            store,
            bus,
            config: config.clone(),
        });
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = router(state.clone());
        #[cfg(feature = "swagger-ui")]
        let app = app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url(
                "/api-docs/openapi.json",
                <openapi::ApiDoc as utoipa::OpenApi>::openapi(),
            ),
        );
        let app = app.layer(cors);

        let listener = TcpListener::bind(&config.bind_addr).await.map_err(|error| {
            CoreError::Internal(format!("failed to bind {}: {error}", config.bind_addr))
        })?;
        let addr = listener
            .local_addr()
            .map_err(|error| CoreError::Internal(format!("failed to read local addr: {error}")))?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        info!("shopfront server listening on http://{addr}");
        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
            state,
        })
    }

    /// Loads (or creates) the config under `dir`, applies environment
    /// overrides, and starts the server.
    pub async fn start_in_dir(dir: &Path) -> CoreResult<Self> {
        let config = load_or_create_config(dir)?.with_env_overrides();
        Self::start(config).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Handle to the running panel, for embedding callers.
    pub fn panel(&self) -> Arc<HomePanel> {
        Arc::clone(&self.state.panel)
    }

    pub fn shutdown(&mut self) -> CoreResult<()> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| CoreError::Internal("failed to send shutdown signal".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/home/state", get(home::get_state))
        .route("/home/categories", get(home::list_categories))
        .route("/home/categories/:id/open", post(home::open_category))
        .route("/home/filter", get(home::get_filter).put(home::update_filter))
        .route("/home/search", post(home::trigger_search))
        .route("/home/panels", put(home::update_panels))
        .route("/home/journal", get(home::get_journal))
        .route("/home/events", get(events::stream_events))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

pub(crate) struct ServerState {
    pub(crate) panel: Arc<HomePanel>,
    pub(crate) store: Arc<HomeStore>,
    pub(crate) bus: Bus,
    pub(crate) config: ShopfrontConfig,
}
