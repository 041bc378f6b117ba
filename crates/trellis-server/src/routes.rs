// File: src/routes.rs
// Purpose: Handler units for the demo routes/ tree
// The URL patterns come from the file paths on disk; these units only supply
// the handlers the scan wires up per file.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use trellis::{HandlerFn, Registry, RouteUnit};

/// Registers one unit per file in the demo routes tree.
pub fn register_units(registry: &mut Registry) {
    // routes/index.rs -> /
    let welcome: HandlerFn = Arc::new(|_ctx| {
        Box::pin(async {
            Json(json!({
                "message": "Trellis file-based router demo",
                "try": [
                    "/users",
                    "/users/1",
                    "/posts?limit=5",
                    "/blog/hello-world",
                    "/files/documents/readme.txt",
                    "/api/v1/health",
                ],
            }))
            .into_response()
        })
    });
    registry.register_unit("index.rs", RouteUnit::new().export("get", welcome));

    // routes/users/index.rs -> /users
    // The stray `seed_users` export is not an HTTP method and gets flagged
    // by the scan diagnostics.
    let list_users: HandlerFn = Arc::new(|_ctx| {
        Box::pin(async {
            Json(json!({
                "users": [
                    {"id": 1, "name": "Alice", "email": "alice@example.com"},
                    {"id": 2, "name": "Bob", "email": "bob@example.com"},
                    {"id": 3, "name": "Charlie", "email": "charlie@example.com"},
                ]
            }))
            .into_response()
        })
    });
    let create_user: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let name = ctx
                .query
                .get("name")
                .cloned()
                .unwrap_or_else(|| "anonymous".to_string());
            (
                StatusCode::CREATED,
                Json(json!({"message": "User created", "user": {"id": 4, "name": name}})),
            )
                .into_response()
        })
    });
    let seed_users: HandlerFn = Arc::new(|_ctx| {
        Box::pin(async { Json(json!({"seeded": 3})).into_response() })
    });
    registry.register_unit(
        "users/index.rs",
        RouteUnit::new()
            .export("get", list_users)
            .export("post", create_user)
            .export("seed_users", seed_users),
    );

    // routes/users/[id:int].rs -> /users/{id}
    let get_user: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let id = ctx.params.get_int("id").unwrap_or_default();
            Json(json!({"user": {"id": id, "name": format!("user-{}", id)}})).into_response()
        })
    });
    let update_user: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let id = ctx.params.get_int("id").unwrap_or_default();
            Json(json!({"message": "User updated", "id": id})).into_response()
        })
    });
    let delete_user: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let id = ctx.params.get_int("id").unwrap_or_default();
            Json(json!({"message": "User deleted", "id": id})).into_response()
        })
    });
    registry.register_unit(
        "users/[id:int].rs",
        RouteUnit::new()
            .export("get", get_user)
            .export("put", update_user)
            .export("delete", delete_user),
    );

    // routes/posts.rs -> /posts
    let list_posts: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let limit: usize = ctx.query.get_as("limit").unwrap_or(10);
            let offset: usize = ctx.query.get_as("offset").unwrap_or(0);
            let posts: Vec<_> = (0..limit)
                .map(|i| json!({"id": offset + i, "title": format!("Post {}", offset + i)}))
                .collect();
            Json(json!({"posts": posts, "limit": limit, "offset": offset})).into_response()
        })
    });
    registry.register_unit("posts.rs", RouteUnit::new().export("get", list_posts));

    // routes/blog/[slug:].rs -> /blog/{slug}
    let article: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let slug = ctx.params.get_str("slug").unwrap_or("").to_string();
            Json(json!({"slug": slug, "article": format!("Content for {}", slug)}))
                .into_response()
        })
    });
    registry.register_unit("blog/[slug:].rs", RouteUnit::new().export("get", article));

    // routes/files/[...path].rs -> /files/{path}
    let read_file: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let path = ctx.params.get_str("path").unwrap_or("").to_string();
            let segments: Vec<&str> = path.split('/').collect();
            Json(json!({"path": path, "segments": segments})).into_response()
        })
    });
    let create_file: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let path = ctx.params.get_str("path").unwrap_or("").to_string();
            Json(json!({"message": format!("File created at {}", path), "action": "create"}))
                .into_response()
        })
    });
    let delete_file: HandlerFn = Arc::new(|ctx| {
        Box::pin(async move {
            let path = ctx.params.get_str("path").unwrap_or("").to_string();
            Json(json!({"message": format!("File deleted at {}", path), "action": "delete"}))
                .into_response()
        })
    });
    registry.register_unit(
        "files/[...path].rs",
        RouteUnit::new()
            .export("get", read_file)
            .export("post", create_file)
            .export("delete", delete_file),
    );

    // routes/api/v1/health.rs -> /api/v1/health
    let health: HandlerFn = Arc::new(|_ctx| {
        Box::pin(async { Json(json!({"status": "ok"})).into_response() })
    });
    registry.register_unit("api/v1/health.rs", RouteUnit::new().export("get", health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method};
    use pretty_assertions::assert_eq;
    use trellis::{Dispatcher, QueryParams};

    fn demo_registry() -> Registry {
        let root = concat!(env!("CARGO_MANIFEST_DIR"), "/../../routes");
        let mut registry = Registry::new(root);
        register_units(&mut registry);
        registry
    }

    #[test]
    fn test_demo_tree_scans_completely() {
        let mut registry = demo_registry();
        let mut dispatcher = Dispatcher::new();
        registry.scan(&mut dispatcher).unwrap();
        dispatcher.commit();

        let mut patterns: Vec<String> = registry
            .routes()
            .iter()
            .map(|r| r.pattern.clone())
            .collect();
        patterns.sort();
        assert_eq!(
            patterns,
            vec![
                "/",
                "/api/v1/health",
                "/blog/{slug}",
                "/files/{path}",
                "/posts",
                "/users",
                "/users/{id}",
            ]
        );
    }

    #[tokio::test]
    async fn test_demo_dispatch() {
        let mut registry = demo_registry();
        let mut dispatcher = Dispatcher::new();
        registry.scan(&mut dispatcher).unwrap();
        dispatcher.commit();

        let response = dispatcher
            .dispatch(
                Method::GET,
                "/api/v1/health",
                QueryParams::default(),
                HeaderMap::new(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Integer-typed user id: non-numeric values fall through to 404.
        assert!(dispatcher.resolve(&Method::GET, "/users/abc").is_none());
        assert!(dispatcher.resolve(&Method::GET, "/users/3").is_some());
    }
}
