//! # Trellis Router
//!
//! A zero-dependency route-compilation library that turns file paths into
//! URL patterns:
//! - Literal segments (`about` → `/about`)
//! - Named parameters (`[id]` → `/{id}`)
//! - Typed parameters (`[id:int]` → `/{id}`, integer-constrained)
//! - Catch-all parameters (`[...path]` → `/{path}`, matches the rest of the
//!   path including `/`)
//! - `index` files map to their containing directory (`users/index` → `/users`)
//!
//! Compilation is pure: the same relative path always produces the same
//! pattern and parameter table, with no I/O and no side effects. Matching a
//! compiled route against a request path is equally pure, so the library can
//! sit underneath any HTTP engine.
//!
//! ## Example
//!
//! ```
//! use trellis_router::{compile_route, ParamKind};
//!
//! let route = compile_route("users/[id:int]").unwrap();
//! assert_eq!(route.pattern, "/users/{id}");
//! assert_eq!(route.params[0].name, "id");
//! assert_eq!(route.params[0].kind, ParamKind::Int);
//!
//! let params = route.matches("/users/42").unwrap();
//! assert_eq!(params.get("id"), Some(&"42".to_string()));
//! assert!(route.matches("/users/abc").is_none());
//! ```

use std::fmt;

pub mod compile;
pub mod matcher;
pub mod path;
pub mod segment;

pub use compile::compile_route;
pub use path::{normalize_separators, Ancestors};
pub use segment::{classify_segment, SegmentKind};

// ============================================================================
// Core Types
// ============================================================================

/// The value type a path parameter binds to.
///
/// Unrecognized type tokens fall back to `Str`; the file-naming contract is
/// permissive by design, so `[id:uuid]` compiles to a plain string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Binds the raw segment text.
    Str,
    /// Binds a base-10 integer; a segment that does not parse rejects the match.
    Int,
}

impl ParamKind {
    /// Maps a type token from a `[name:token]` segment to a kind.
    ///
    /// An empty token (`[slug:]`) and any token other than `int` map to `Str`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "int" => ParamKind::Int,
            _ => ParamKind::Str,
        }
    }

    /// Whether a matched segment value is acceptable for this kind.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ParamKind::Str => true,
            ParamKind::Int => value.parse::<i64>().is_ok(),
        }
    }
}

/// One named parameter discovered while compiling a route.
///
/// Invariant: `catch_all` implies `kind == ParamKind::Str`. The segment
/// parser only ever constructs catch-all descriptors with `Str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Parameter name, taken verbatim from the file name (no validation).
    pub name: String,
    /// Value type the parameter binds to.
    pub kind: ParamKind,
    /// Whether this parameter greedily matches the remaining path segments.
    pub catch_all: bool,
}

/// A compiled route: URL pattern plus its ordered parameter table.
///
/// `params` preserves the left-to-right order in which parameter segments
/// appeared in the source path; callers rely on that order when binding
/// values to handler arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoute {
    /// URL pattern like `/users/{id}`. Always begins with `/`.
    pub pattern: String,
    /// Parameters in discovery order.
    pub params: Vec<ParamDescriptor>,
}

impl CompiledRoute {
    /// Looks up a parameter descriptor by name.
    pub fn param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Whether the route ends in a catch-all parameter.
    pub fn has_catch_all(&self) -> bool {
        self.params.iter().any(|p| p.catch_all)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Compilation failure for a single route file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A catch-all segment was followed by further segments. Catch-all
    /// parameters consume the rest of the request path, so anything after
    /// one could never match.
    CatchAllNotLast {
        /// Name of the offending catch-all parameter.
        param: String,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::CatchAllNotLast { param } => write!(
                f,
                "catch-all parameter '{}' must be the last path segment",
                param
            ),
        }
    }
}

impl std::error::Error for CompileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_kind_from_token() {
        assert_eq!(ParamKind::from_token("int"), ParamKind::Int);
        assert_eq!(ParamKind::from_token(""), ParamKind::Str);
        assert_eq!(ParamKind::from_token("uuid"), ParamKind::Str);
    }

    #[test]
    fn test_param_kind_accepts() {
        assert!(ParamKind::Str.accepts("anything"));
        assert!(ParamKind::Int.accepts("42"));
        assert!(ParamKind::Int.accepts("-7"));
        assert!(!ParamKind::Int.accepts("abc"));
        assert!(!ParamKind::Int.accepts("4.2"));
    }

    #[test]
    fn test_compile_error_display() {
        let err = CompileError::CatchAllNotLast {
            param: "rest".to_string(),
        };
        assert!(err.to_string().contains("rest"));
    }
}
