use std::sync::Arc;
use axum::{routing::{get, put}, Router, Json};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::edition::{Edition, EditionFields};
use crate::error::Result;
use crate::persist::Persistor;

pub fn router(persistor: Arc<Persistor>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/biblias", get(list).post(create))
        .route("/biblias/:id", put(update).delete(delete))
        .with_state(persistor)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Runs one store call on the blocking pool, since SQLite is synchronous.
async fn with_store<T, F>(persistor: Arc<Persistor>, call: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Persistor) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&persistor)).await?
}

async fn list(State(persistor): State<Arc<Persistor>>) -> Result<Json<Vec<Edition>>> {
    let editions = with_store(persistor, |store| store.list_all()).await?;
    info!(rows = editions.len(), "editions listed");
    Ok(Json(editions))
}

async fn create(State(persistor): State<Arc<Persistor>>, body: Bytes) -> Result<StatusCode> {
    let fields = EditionFields::from_json(&body)?;
    let id = with_store(persistor, move |store| store.insert(&fields)).await?;
    info!(id, "edition created");
    Ok(StatusCode::CREATED)
}

// Zero matching rows is still a success.
async fn update(State(persistor): State<Arc<Persistor>>, Path(id): Path<i64>, body: Bytes) -> Result<StatusCode> {
    let fields = EditionFields::from_json(&body)?;
    let affected = with_store(persistor, move |store| store.update(id, &fields)).await?;
    info!(id, affected, "edition updated");
    Ok(StatusCode::OK)
}

async fn delete(State(persistor): State<Arc<Persistor>>, Path(id): Path<i64>) -> Result<StatusCode> {
    let affected = with_store(persistor, move |store| store.remove(id)).await?;
    info!(id, affected, "edition deleted");
    Ok(StatusCode::OK)
}
