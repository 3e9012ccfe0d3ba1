//! Demo service: a small user directory built with [`DocRouter`].
//!
//! ```text
//! GET    /                  service info
//! GET    /users             list users
//! POST   /users             create user
//! GET    /users/:id         fetch user
//! DELETE /users/:id         delete user
//! PUT    /users/:id/name    rename user
//! GET    /admin/stats       directory statistics   (admin group)
//! POST   /admin/reset       clear the directory    (admin group)
//! ```

pub mod handlers;

use axum::Router;
use serde_json::json;

use crate::config::DocsConfig;
use crate::doc::DocEntry;
use crate::router::DocRouter;

pub use handlers::AppState;
use handlers::*;

/// Admin route group, mounted under `/admin`.
pub fn admin_router() -> DocRouter<AppState> {
    DocRouter::new()
        .get(
            "/stats",
            stats,
            DocEntry::titled("Directory statistics")
                .output(json!({"users": "usize", "created_total": "u64"})),
        )
        .post(
            "/reset",
            reset,
            DocEntry::titled("Reset directory").description("Removes every user."),
        )
}

/// The documented application router, before freezing.
pub fn documented_router() -> DocRouter<AppState> {
    let user = json!({"id": "u64", "name": "string"});

    DocRouter::new()
        .get("/", index, DocEntry::titled("Service info"))
        .get(
            "/users",
            list_users,
            DocEntry::titled("List users").output(json!([user.clone()])),
        )
        .post(
            "/users",
            create_user,
            DocEntry::titled("Create user")
                .input(json!({"name": "string"}))
                .output(user.clone()),
        )
        .get(
            "/users/:id",
            get_user,
            DocEntry::titled("Fetch user")
                .url_param("id", "u64")
                .output(user.clone()),
        )
        .delete("/users/:id", delete_user, DocEntry::titled("Delete user"))
        .put(
            "/users/:id/name",
            rename_user,
            DocEntry::titled("Rename user")
                .input(json!({"name": "string"}))
                .output(user),
        )
        .nest("/admin/*", admin_router())
}

/// Build the application router with state attached.
pub fn build(docs: &DocsConfig) -> Router {
    documented_router()
        .finish(docs.served_path())
        .with_state(AppState::default())
}
