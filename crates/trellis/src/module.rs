// File: src/module.rs
// Purpose: Explicit registration of route units in place of runtime module loading
// Each route file compiles to a typed unit whose exports are wired into the
// table at startup; the scan looks units up by source path instead of
// executing file contents.

use std::collections::HashMap;

use axum::http::Method;
use tracing::warn;

use crate::handler::HandlerFn;
use trellis_router::normalize_separators;

/// HTTP methods a route unit may export handlers for, in probe order.
pub fn recognized_methods() -> [Method; 7] {
    [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::HEAD,
        Method::OPTIONS,
    ]
}

/// The typed unit a single route file exposes: an ordered list of named
/// exports, some of which are HTTP method handlers.
#[derive(Clone, Default)]
pub struct RouteUnit {
    exports: Vec<(String, HandlerFn)>,
}

impl RouteUnit {
    pub fn new() -> Self {
        Self {
            exports: Vec::new(),
        }
    }

    /// Adds a named export. Names matching an HTTP method (compared
    /// lower-cased) become handlers at extraction time; other names are
    /// carried so the extractor can diagnose them.
    pub fn export(mut self, name: impl Into<String>, handler: HandlerFn) -> Self {
        self.exports.push((name.into(), handler));
        self
    }

    /// Iterates exports in declaration order
    pub fn exports(&self) -> impl Iterator<Item = (&str, &HandlerFn)> {
        self.exports.iter().map(|(n, h)| (n.as_str(), h))
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

/// Registry of route units keyed by routes-root-relative source path
/// (including the file extension, `/`-separated).
#[derive(Clone, Default)]
pub struct UnitTable {
    units: HashMap<String, RouteUnit>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
        }
    }

    /// Registers a unit for a source path, replacing any previous unit for
    /// the same path.
    pub fn register(&mut self, source: impl Into<String>, unit: RouteUnit) {
        let key = normalize_separators(&source.into()).into_owned();
        self.units.insert(key, unit);
    }

    /// Resolves the unit for a source path.
    pub fn get(&self, source: &str) -> Option<&RouteUnit> {
        self.units.get(normalize_separators(source).as_ref())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Extracts HTTP method handlers from a route unit.
///
/// An export handles method M when its name, lower-cased, equals M's name
/// lower-cased - exact match only, so `getty` never handles GET. Methods are
/// probed in the fixed `recognized_methods` order, which fixes the order of
/// the resulting pairs.
///
/// Exports that match nothing are reported with a warning unless their name
/// starts with `_` or appears in `skip_exports`.
pub fn extract_handlers(
    unit: &RouteUnit,
    source: &str,
    skip_exports: &[String],
) -> Vec<(Method, HandlerFn)> {
    let mut handlers = Vec::new();

    for method in recognized_methods() {
        let method_name = method.as_str().to_ascii_lowercase();
        let found = unit
            .exports
            .iter()
            .find(|(name, _)| name.to_ascii_lowercase() == method_name);
        if let Some((_, handler)) = found {
            handlers.push((method, handler.clone()));
        }
    }

    for (name, _) in &unit.exports {
        if name.starts_with('_') {
            continue;
        }
        let lower = name.to_ascii_lowercase();
        let is_method = recognized_methods()
            .iter()
            .any(|m| m.as_str().to_ascii_lowercase() == lower);
        if !is_method && !skip_exports.iter().any(|s| s == name) {
            warn!(
                "Export '{}' in {} is not a recognized HTTP method handler",
                name, source
            );
        }
    }

    handlers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn dummy() -> HandlerFn {
        Arc::new(|_ctx| Box::pin(async { StatusCode::OK.into_response() }))
    }

    #[test]
    fn test_extract_recognized_methods() {
        let unit = RouteUnit::new()
            .export("get", dummy())
            .export("post", dummy());

        let handlers = extract_handlers(&unit, "index.rs", &[]);
        let methods: Vec<&str> = handlers.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(methods, vec!["GET", "POST"]);
    }

    #[test]
    fn test_extract_probe_order_is_fixed() {
        // Declaration order doesn't matter; extraction follows probe order.
        let unit = RouteUnit::new()
            .export("delete", dummy())
            .export("get", dummy());

        let handlers = extract_handlers(&unit, "index.rs", &[]);
        let methods: Vec<&str> = handlers.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(methods, vec!["GET", "DELETE"]);
    }

    #[test]
    fn test_extract_is_exact_match_only() {
        let unit = RouteUnit::new().export("getty", dummy());
        let handlers = extract_handlers(&unit, "users/index.rs", &[]);
        assert!(handlers.is_empty());
    }

    #[test]
    fn test_extract_matches_case_insensitively() {
        let unit = RouteUnit::new().export("GET", dummy());
        let handlers = extract_handlers(&unit, "index.rs", &[]);
        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].0, Method::GET);
    }

    #[test]
    fn test_extract_empty_unit_yields_nothing() {
        let unit = RouteUnit::new().export("helper", dummy());
        assert!(extract_handlers(&unit, "x.rs", &[]).is_empty());
    }

    #[test]
    fn test_unit_table_lookup() {
        let mut table = UnitTable::new();
        table.register("users/[id].rs", RouteUnit::new().export("get", dummy()));

        assert!(table.get("users/[id].rs").is_some());
        assert!(table.get("users\\[id].rs").is_some());
        assert!(table.get("users/[other].rs").is_none());
    }

    #[test]
    fn test_unit_table_last_registration_wins() {
        let mut table = UnitTable::new();
        table.register("a.rs", RouteUnit::new().export("get", dummy()));
        table.register("a.rs", RouteUnit::new());

        assert!(table.get("a.rs").unwrap().is_empty());
        assert_eq!(table.len(), 1);
    }
}
