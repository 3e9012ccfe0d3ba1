//! Documenting router.
//!
//! # Responsibilities
//! - Forward every route registration to axum
//! - Record the same registration in a [`RouteTree`]
//! - Keep both sides in step when route groups are nested
//! - Serve the frozen tree as JSON
//!
//! # Design Decisions
//! - Dispatch is entirely axum's job; the tree only observes
//! - Middleware passthroughs never touch the tree
//! - Once `finish` is called the tree is immutable and shared via `Arc`

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use axum::{
    extract::Request,
    handler::Handler,
    http::Method,
    response::IntoResponse,
    routing::{self, MethodRouter, Route},
    Json, Router,
};
use tower::{Layer, Service};

use crate::doc::{DocEntry, RouteTree};
use crate::router::path::{to_axum_path, to_nest_path};

/// An axum router that documents itself.
///
/// ```ignore
/// let admin = DocRouter::new()
///     .get("/stats", stats, DocEntry::titled("Usage statistics"));
///
/// let app = DocRouter::new()
///     .get("/users/:id", get_user, None)
///     .nest("/admin/*", admin)
///     .finish(Some("/_docs"));
/// ```
pub struct DocRouter<S = ()> {
    router: Router<S>,
    tree: RouteTree,
}

impl<S> DocRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            tree: RouteTree::new(),
        }
    }

    pub fn get<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::GET, pattern, routing::get(handler), doc.into())
    }

    pub fn head<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::HEAD, pattern, routing::head(handler), doc.into())
    }

    pub fn post<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::POST, pattern, routing::post(handler), doc.into())
    }

    pub fn put<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::PUT, pattern, routing::put(handler), doc.into())
    }

    pub fn patch<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::PATCH, pattern, routing::patch(handler), doc.into())
    }

    pub fn delete<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::DELETE, pattern, routing::delete(handler), doc.into())
    }

    pub fn options<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::OPTIONS, pattern, routing::options(handler), doc.into())
    }

    pub fn trace<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::TRACE, pattern, routing::trace(handler), doc.into())
    }

    pub fn connect<H, T>(self, pattern: &str, handler: H, doc: impl Into<Option<DocEntry>>) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.register(Method::CONNECT, pattern, routing::connect(handler), doc.into())
    }

    /// Mount `child` under `pattern` (`/admin` or `/admin/*`).
    ///
    /// Mounting at the root merges the two routers.
    pub fn nest(mut self, pattern: &str, child: DocRouter<S>) -> Self {
        let DocRouter { router, tree } = child;

        tracing::debug!(
            pattern,
            routes = tree.root().children().len(),
            "nesting documented router"
        );
        self.tree.mount(pattern, tree);
        self.router = match to_nest_path(pattern) {
            Some(path) => self.router.nest(&path, router),
            None => self.router.merge(router),
        };
        self
    }

    /// Apply a middleware layer to every route registered so far.
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.router = self.router.layer(layer);
        self
    }

    /// Apply a middleware layer that only runs when a route matched.
    pub fn route_layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.router = self.router.route_layer(layer);
        self
    }

    /// Handler for requests no route matched. Not documented.
    pub fn fallback<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.router = self.router.fallback(handler);
        self
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    pub fn into_parts(self) -> (Router<S>, RouteTree) {
        (self.router, self.tree)
    }

    /// Freeze the documentation and return the axum router.
    ///
    /// With `docs_path` set, `GET docs_path` answers with the tree as JSON.
    /// The docs route itself does not appear in the tree.
    pub fn finish(self, docs_path: Option<&str>) -> Router<S> {
        let (router, tree) = self.into_parts();
        let Some(docs_path) = docs_path else {
            return router;
        };

        let tree = Arc::new(tree);
        tracing::info!(
            path = docs_path,
            endpoints = tree.len(),
            "serving route documentation"
        );
        router.route(
            &to_axum_path(docs_path),
            routing::get(move || serve_tree(Arc::clone(&tree))),
        )
    }

    fn register(
        mut self,
        method: Method,
        pattern: &str,
        route: MethodRouter<S>,
        doc: Option<DocEntry>,
    ) -> Self {
        let path = to_axum_path(pattern);

        tracing::debug!(
            method = %method,
            pattern,
            axum_path = %path,
            documented = doc.is_some(),
            "registering route"
        );
        self.tree.register(method.as_str(), pattern, doc);
        self.router = self.router.route(&path, route);
        self
    }
}

impl<S> Default for DocRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for DocRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocRouter")
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

async fn serve_tree(tree: Arc<RouteTree>) -> Json<RouteTree> {
    Json(RouteTree::clone(&tree))
}
