// File: src/handler.rs
// Purpose: Handler calling convention shared by route units and the dispatcher

use axum::response::Response;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request_context::RequestContext;

/// Boxed future a handler returns.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A route handler: takes the request context, returns a boxed response
/// future. Synchronous handlers wrap their body in an immediately-ready
/// `async` block; the rest of the system never distinguishes the two.
///
/// ```ignore
/// let hello: HandlerFn = Arc::new(|_ctx| {
///     Box::pin(async { Json(json!({"message": "Hello"})).into_response() })
/// });
/// ```
pub type HandlerFn = Arc<dyn Fn(RequestContext) -> HandlerFuture + Send + Sync>;
