//! Handlers for the demo user directory.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Shared handler state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    directory: Arc<RwLock<Directory>>,
}

#[derive(Debug, Default)]
struct Directory {
    next_id: u64,
    created_total: u64,
    users: BTreeMap<u64, User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub users: usize,
    pub created_total: u64,
}

pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let directory = state.directory.read().await;
    Json(directory.users.values().cloned().collect())
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> (StatusCode, Json<User>) {
    let mut directory = state.directory.write().await;
    directory.next_id += 1;
    directory.created_total += 1;

    let user = User {
        id: directory.next_id,
        name: new_user.name,
    };
    directory.users.insert(user.id, user.clone());
    tracing::debug!(id = user.id, "user created");

    (StatusCode::CREATED, Json(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, StatusCode> {
    let directory = state.directory.read().await;
    directory
        .users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn rename_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(new_user): Json<NewUser>,
) -> Result<Json<User>, StatusCode> {
    let mut directory = state.directory.write().await;
    let user = directory.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    user.name = new_user.name;
    Ok(Json(user.clone()))
}

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut directory = state.directory.write().await;
    match directory.users.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

pub async fn stats(State(state): State<AppState>) -> Json<Stats> {
    let directory = state.directory.read().await;
    Json(Stats {
        users: directory.users.len(),
        created_total: directory.created_total,
    })
}

pub async fn reset(State(state): State<AppState>) -> StatusCode {
    let mut directory = state.directory.write().await;
    directory.users.clear();
    tracing::info!("user directory reset");
    StatusCode::NO_CONTENT
}
