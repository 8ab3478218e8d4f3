//! Run with
//!
//! ```not_rust
//! cargo run --example axum
//! ```
//!
//! ```not_rust
//! curl -X POST localhost:4000/login -d 'u1'
//! curl localhost:4000/me -H 'Authorization: Bearer <token>'
//! ```

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
    routing::{get, post},
};
use edtoken::{KeyPair, TokenIssuer, TokenVerifier, current_timestamp};
use miniserde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
struct AppState {
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

#[derive(Clone, Serialize, Deserialize)]
struct Subject {
    subject: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,edtoken=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let keys = KeyPair::generate().expect("key generation failed");
    let state = AppState {
        issuer: keys.issuer(),
        verifier: keys.verifier(),
    };

    let protected = Router::new()
        .route("/me", get(me))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            token_auth_middleware,
        ));

    let app = Router::new()
        .route("/login", post(login))
        .route("/introspect", get(introspect))
        .merge(protected)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:4000")
        .await
        .unwrap();
    tracing::debug!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

/// Issue a token for the subject in the request body
///
/// Credential checks belong to the user repository and are out of scope here.
async fn login(State(state): State<AppState>, body: String) -> Result<String, StatusCode> {
    let subject = body.trim();
    if subject.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let issued = state
        .issuer
        .issue(
            Subject {
                subject: subject.to_string(),
            },
            current_timestamp(),
        )
        .map_err(|e| {
            tracing::error!("token issuance failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(issued.into_string())
}

/// Accept either a bare token or `Bearer <token>`
fn presented_token(headers: &HeaderMap) -> &str {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    value.strip_prefix("Bearer ").unwrap_or(value).trim()
}

async fn token_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let introspection = state
        .verifier
        .introspect::<Subject>(presented_token(request.headers()), current_timestamp());

    let Some(token) = introspection.into_token() else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request.extensions_mut().insert(token.payload);

    Ok(next.run(request).await)
}

async fn me(axum::extract::Extension(subject): axum::extract::Extension<Subject>) -> String {
    format!("You are authorized: {}", subject.subject)
}

async fn introspect(State(state): State<AppState>, headers: HeaderMap) -> String {
    state
        .verifier
        .introspect::<Subject>(presented_token(&headers), current_timestamp())
        .report()
        .to_json()
}
