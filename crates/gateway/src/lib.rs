//! HTTP server for the Scrollfolio portfolio site.
//!
//! Serves the embedded single-page frontend, the hero frame sequence from
//! disk, and the JSON API used by the page (chat, contact, sequence,
//! profile).
//!
//! Built on Axum for high performance async HTTP.

pub mod api;
pub mod frontend;

use axum::extract::{ConnectInfo, DefaultBodyLimit};
use axum::{
    Router,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::Json,
    routing::get,
};
use serde::Serialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use scrollfolio_chat::ChatResponder;
use scrollfolio_config::AppConfig;
use scrollfolio_contact::ContactSender;
use scrollfolio_core::KnowledgeBase;

/// Read-only state shared by every request.
pub struct AppState {
    pub config: AppConfig,
    pub knowledge: Arc<KnowledgeBase>,
    pub chat: ChatResponder,
    pub contact: ContactSender,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build the profile, chat responder and contact sender once.
    pub fn from_config(config: AppConfig) -> scrollfolio_core::Result<Self> {
        let knowledge = Arc::new(KnowledgeBase::load_or_builtin(
            config.profile.path.as_deref(),
        )?);
        let provider = scrollfolio_providers::build_from_config(&config.chat);
        let chat = ChatResponder::from_config(&config.chat, knowledge.clone(), provider);
        let contact = ContactSender::from_config(&config.mail);

        Ok(Self {
            config,
            knowledge,
            chat,
            contact,
        })
    }
}

/// Build the full router.
///
/// Layers applied:
/// - Request body size limit (`server.body_limit_bytes`)
/// - In-memory rate limiting of `/api` POST routes (`server.rate_limit_per_minute`, 0 disables)
/// - HTTP trace logging
pub fn build_router(state: SharedState) -> Router {
    let server = &state.config.server;
    let sequence = &state.config.sequence;

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::api_router(state.clone()))
        .merge(frontend::frontend_router());

    let mount = sequence.public_path.trim_end_matches('/');
    if !mount.is_empty() {
        router = router.nest_service(mount, ServeDir::new(&sequence.dir));
    }

    let mut router = router
        .fallback_service(ServeDir::new(&server.public_dir))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes));

    if server.rate_limit_per_minute > 0 {
        let limiter = Arc::new(RateLimiter::new(
            server.rate_limit_per_minute,
            Duration::from_secs(60),
        ));
        let trust_forwarded_for = server.trust_forwarded_for;
        router = router.layer(middleware::from_fn(move |req, next| {
            let limiter = limiter.clone();
            rate_limit_middleware(limiter, trust_forwarded_for, req, next)
        }));
    }

    router.layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the HTTP server and run until it fails.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.server.addr();
    let state = Arc::new(AppState::from_config(config)?);

    info!(
        addr = %addr,
        chat = state.chat.strategy_name(),
        mail = state.contact.is_configured(),
        sequence_dir = %state.config.sequence.dir.display(),
        "Scrollfolio starting"
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

// --- Rate Limiter ---

/// Simple in-memory sliding-window rate limiter.
///
/// Tracks request timestamps per client key.
/// Thread-safe via `std::sync::Mutex` (non-async, held briefly).
struct RateLimiter {
    max_requests: usize,
    window: Duration,
    clients: std::sync::Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: std::sync::Mutex::new(HashMap::new()),
        }
    }

    /// Check if the client is within rate limits. Returns `true` if allowed.
    fn check(&self, client_key: &str) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());

        // Periodic cleanup: if map grows too large, evict stale entries
        if clients.len() > 10_000 {
            clients.retain(|_, timestamps| {
                timestamps
                    .last()
                    .is_some_and(|t| now.duration_since(*t) < self.window)
            });
        }

        let timestamps = clients.entry(client_key.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.max_requests {
            return false;
        }

        timestamps.push(now);
        true
    }
}

/// Client key: the first `X-Forwarded-For` hop when the proxy is trusted,
/// else the peer address, else "anonymous".
fn client_key(req: &axum::extract::Request, trust_forwarded_for: bool) -> String {
    let forwarded = trust_forwarded_for
        .then(|| req.headers().get("X-Forwarded-For"))
        .flatten()
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    forwarded
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Rate limiting middleware for the mutating `/api` routes (chat, contact).
/// Page assets, frames and `/health` pass through untouched.
async fn rate_limit_middleware(
    limiter: Arc<RateLimiter>,
    trust_forwarded_for: bool,
    req: axum::extract::Request,
    next: Next,
) -> Result<axum::response::Response, StatusCode> {
    if *req.method() != Method::POST || !req.uri().path().starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let key = client_key(&req, trust_forwarded_for);
    if !limiter.check(&key) {
        warn!(client = %key, path = %req.uri().path(), "Rate limit exceeded");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    Ok(next.run(req).await)
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
