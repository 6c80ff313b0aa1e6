//! HTTP command surface for display clients.
//!
//! Exposes the engine's three commands as JSON endpoints. The engine lives
//! behind a mutex so concurrent requests are applied one at a time.

use crate::config::ServerConfig;
use crate::games::tictactoe::GameEngine;
use crate::snapshot::GameSnapshot;
use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Request for making a move.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MakeMoveRequest {
    /// Position on board (0-8, where 0=top-left, 8=bottom-right).
    pub position: i64,
}

/// Shared handle to the one engine of this process.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    engine: Arc<Mutex<GameEngine>>,
}

impl AppState {
    /// Wraps an existing engine.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// Every engine operation leaves the state consistent, so a lock poisoned
    /// by a panicking holder is still safe to reuse.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut engine)
    }
}

/// Builds the router with the three game commands and a health check.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get_game_state", get(get_game_state))
        .route("/make_move", post(make_move))
        .route("/reset_game", post(reset_game))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

async fn get_game_state(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.with_engine(|engine| engine.get_state()).into())
}

#[instrument(skip(state))]
async fn make_move(
    State(state): State<AppState>,
    Json(req): Json<MakeMoveRequest>,
) -> Json<GameSnapshot> {
    Json(state.with_engine(|engine| engine.make_move(req.position)).into())
}

#[instrument(skip(state))]
async fn reset_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.with_engine(|engine| engine.reset()).into())
}

async fn health() -> &'static str {
    "ok"
}

/// Failure to run the HTTP server.
#[derive(Debug, Display, Error)]
pub enum ServerError {
    /// Could not bind the listening socket.
    #[display("Failed to bind {}: {}", address, source)]
    Bind {
        /// Address that was requested.
        address: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[display("Server error: {}", _0)]
    Serve(std::io::Error),
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(config, state), fields(address = %config.bind_address()))]
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

    info!("Server ready at http://{}/", address);
    info!("Display clients can call get_game_state, make_move and reset_game");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C; shutting down"),
    }
}
