mod routes;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use trellis::{Config, Dispatcher, QueryParams, Registry};

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    dispatcher: Arc<Dispatcher>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    println!("trellis starting...");

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    println!(
        "Port: {}, Routes: {}",
        config.server.port, config.routing.routes_dir
    );

    let mut registry = Registry::with_config(&config);
    routes::register_units(&mut registry);

    // Directory-level tag for the virtual file tree demo
    registry.set_custom_tag(
        format!("{}/files", config.routing.routes_dir),
        "filesystem",
    );

    let mut dispatcher = Dispatcher::new();
    match registry.scan(&mut dispatcher) {
        Ok(()) => {
            dispatcher.commit();
            info!("Dispatcher ready with {} endpoints", dispatcher.endpoint_count());

            let mut discovered = registry.routes();
            discovered.sort_by(|a, b| a.pattern.cmp(&b.pattern));

            println!("Registered routes:");
            for route in &discovered {
                let methods: Vec<&str> = route.methods.iter().map(|m| m.as_str()).collect();
                println!(
                    "  {:<30} [{}] -> {}",
                    route.pattern,
                    methods.join(", "),
                    route.source_path
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to scan routes: {:#}", e);
            std::process::exit(1);
        }
    }

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    let app = Router::new()
        .fallback(dispatch_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("Server running at http://{}", addr);
    println!("Example requests to try:");
    println!("  curl http://{}/", addr);
    println!("  curl http://{}/users/1", addr);
    println!("  curl http://{}/blog/hello-world", addr);
    println!("  curl http://{}/files/documents/readme.txt", addr);
    println!("  curl http://{}/api/v1/health", addr);
    axum::serve(listener, app).await.unwrap();
}

/// Resolves every request through the dispatcher; unmatched paths get 404.
async fn dispatch_handler(State(state): State<AppState>, req: Request) -> Response {
    let (parts, _body) = req.into_parts();
    let path = parts.uri.path().to_string();
    let query = QueryParams::from_query(parts.uri.query().unwrap_or(""));

    match state
        .dispatcher
        .dispatch(parts.method, &path, query, parts.headers)
        .await
    {
        Some(response) => response,
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
