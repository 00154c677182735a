use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use warp::filters::BoxedFilter;
use warp::{reply::Response, Filter};

use super::routes;
use crate::storage::item_store::ItemStore;
use crate::storage::storage_trait::EmployeeStorage;

/// Web server for the employee pages and the item API.
///
/// Either surface can be left out; static assets are always served.
pub struct WebServer<S: EmployeeStorage> {
    storage: Option<Arc<S>>,
    items: Option<Arc<ItemStore>>,
}

impl<S: EmployeeStorage> WebServer<S> {
    /// Create a new WebServer instance
    pub fn new(storage: Option<Arc<S>>, items: Option<Arc<ItemStore>>) -> Self {
        Self { storage, items }
    }

    /// Every enabled route, composed into one filter.
    pub fn routes(&self) -> BoxedFilter<(Response,)> {
        let mut routes = routes::static_route().boxed();
        if let Some(storage) = &self.storage {
            routes = routes
                .or(routes::employee_routes(storage.clone()))
                .unify()
                .boxed();
        }
        if let Some(items) = &self.items {
            routes = routes
                .or(routes::item_routes(items.clone()))
                .unify()
                .boxed();
        }
        routes
    }

    /// Serve on `addr` until `shutdown` resolves.
    pub async fn start(&self, addr: SocketAddr, shutdown: impl Future<Output = ()>) {
        let routes = self.routes().with(warp::log("roster::access"));
        info!(
            "Web server listening on http://{} (employees: {}, items: {})",
            addr,
            self.storage.is_some(),
            self.items.is_some()
        );
        tokio::select! {
            _ = warp::serve(routes).run(addr) => {}
            _ = shutdown => info!("Web server shutting down"),
        }
    }
}
