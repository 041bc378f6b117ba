// File: src/engine.rs
// Purpose: Registration boundary and request dispatch over compiled routes

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use tracing::debug;

use crate::handler::HandlerFn;
use crate::request_context::{ParamValue, PathParams, QueryParams, RequestContext};
use trellis_router::{CompiledRoute, ParamKind};

/// One route registration as the registry hands it to the engine.
#[derive(Clone)]
pub struct EndpointRoute {
    /// Compiled pattern plus parameter table
    pub route: CompiledRoute,
    /// HTTP method this endpoint answers
    pub method: Method,
    /// Engine-level endpoint name, conventionally `<method>_<file-stem>`
    pub name: String,
    /// Classification tag
    pub tag: String,
    /// The handler, adapted to the common calling convention
    pub handler: HandlerFn,
}

/// The registration boundary between the route registry and whatever engine
/// serves requests. Registration order is preserved; for colliding patterns
/// the earlier registration wins at resolve time.
pub trait RouteSink {
    fn register(&mut self, route: EndpointRoute);
}

/// Immutable endpoint table a snapshot holds.
struct RouteTable {
    endpoints: Vec<Arc<EndpointRoute>>,
}

/// Request dispatcher over an atomically swapped endpoint table.
///
/// Registrations accumulate in a staging area; `commit` swaps the staged
/// list in as the new table wholesale, so concurrent readers see either the
/// old table or the new one, never a partially rebuilt mix. `discard` drops
/// a staged partial scan after a failure.
pub struct Dispatcher {
    staged: Vec<Arc<EndpointRoute>>,
    table: ArcSwap<RouteTable>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            staged: Vec::new(),
            table: ArcSwap::from_pointee(RouteTable {
                endpoints: Vec::new(),
            }),
        }
    }

    /// Installs the staged registrations as the live table.
    pub fn commit(&mut self) {
        let endpoints = std::mem::take(&mut self.staged);
        debug!("Committing route table with {} endpoints", endpoints.len());
        self.table.store(Arc::new(RouteTable { endpoints }));
    }

    /// Drops staged registrations without touching the live table.
    pub fn discard(&mut self) {
        self.staged.clear();
    }

    /// Number of endpoints in the live table.
    pub fn endpoint_count(&self) -> usize {
        self.table.load().endpoints.len()
    }

    /// Live endpoints as `(method, pattern, name, tag)` rows, in
    /// registration order.
    pub fn endpoints(&self) -> Vec<(Method, String, String, String)> {
        self.table
            .load()
            .endpoints
            .iter()
            .map(|e| {
                (
                    e.method.clone(),
                    e.route.pattern.clone(),
                    e.name.clone(),
                    e.tag.clone(),
                )
            })
            .collect()
    }

    /// Finds the first registered endpoint matching the request, binding
    /// typed path parameters in route discovery order.
    ///
    /// A path whose integer-constrained segment fails to parse does not
    /// match; the request falls through to later endpoints and ultimately to
    /// the caller's 404 handling.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<(Arc<EndpointRoute>, PathParams)> {
        let table = self.table.load();
        for endpoint in &table.endpoints {
            if endpoint.method != *method {
                continue;
            }
            if let Some(raw) = endpoint.route.matches(path) {
                let params = bind_params(&endpoint.route, &raw);
                return Some((endpoint.clone(), params));
            }
        }
        None
    }

    /// Resolves and invokes the matching handler. `None` means no route
    /// matched and the caller should answer 404.
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: QueryParams,
        headers: HeaderMap,
    ) -> Option<Response> {
        let (endpoint, params) = self.resolve(&method, path)?;
        let ctx = RequestContext::new(method, path.to_string(), params, query, headers);
        Some((endpoint.handler)(ctx).await)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSink for Dispatcher {
    fn register(&mut self, route: EndpointRoute) {
        debug!(
            "Staging endpoint: {} {} ({})",
            route.method, route.route.pattern, route.name
        );
        self.staged.push(Arc::new(route));
    }
}

/// Binds matched parameter values in the route's discovery order, coercing
/// integer-kinded values.
fn bind_params(route: &CompiledRoute, raw: &HashMap<String, String>) -> PathParams {
    let values = route
        .params
        .iter()
        .filter_map(|p| {
            raw.get(&p.name).map(|v| {
                let value = match p.kind {
                    // The matcher already validated the parse
                    ParamKind::Int => v
                        .parse::<i64>()
                        .map(ParamValue::Int)
                        .unwrap_or_else(|_| ParamValue::Str(v.clone())),
                    ParamKind::Str => ParamValue::Str(v.clone()),
                };
                (p.name.clone(), value)
            })
        })
        .collect();
    PathParams::new(values)
}
