// Trellis - file-based routing for Rust web services
// Compiles a directory tree of handler units into routes and dispatches
// requests to them through an atomically swapped endpoint table.

pub mod config;
pub mod engine;
pub mod handler;
pub mod module;
pub mod registry;
pub mod request_context;
pub mod tag;

// Re-export framework types
pub use config::Config;
pub use engine::{Dispatcher, EndpointRoute, RouteSink};
pub use handler::{HandlerFn, HandlerFuture};
pub use module::{RouteUnit, UnitTable};
pub use registry::{Registry, RouteDescriptor};
pub use request_context::{ParamValue, PathParams, QueryParams, RequestContext};
pub use tag::TagOverrides;

// Re-export the compilation core
pub use trellis_router::{
    compile_route, CompileError, CompiledRoute, ParamDescriptor, ParamKind,
};

// Re-export commonly used types from dependencies
pub use axum;
pub use axum::http::{Method, StatusCode};
