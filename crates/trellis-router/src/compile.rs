//! Route compilation: relative file path → URL pattern + parameter table.
//!
//! Pure transformation with no filesystem access. The caller strips the file
//! extension before compiling; directory separators may be `/` or `\`.

use crate::path::normalize_separators;
use crate::segment::{classify_segment, SegmentKind};
use crate::{CompileError, CompiledRoute, ParamDescriptor};

/// Accumulator for the per-segment compilation pass.
struct ParseState {
    pattern: String,
    params: Vec<ParamDescriptor>,
}

impl ParseState {
    fn new() -> Self {
        Self {
            pattern: String::new(),
            params: Vec::new(),
        }
    }

    /// Appends a literal segment to the pattern.
    fn with_literal(mut self, segment: &str) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(segment);
        self
    }

    /// Appends a parameter placeholder and records the descriptor.
    fn with_param(mut self, param: ParamDescriptor) -> Self {
        self.pattern.push_str("/{");
        self.pattern.push_str(&param.name);
        self.pattern.push('}');
        self.params.push(param);
        self
    }

    /// Handles the empty-pattern case (a bare `index` file).
    fn finalize(mut self) -> CompiledRoute {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        CompiledRoute {
            pattern: self.pattern,
            params: self.params,
        }
    }
}

/// Compiles a routes-root-relative path (extension already removed) into a
/// URL pattern and ordered parameter table.
///
/// A final segment equal to `index` is dropped: index files stand for their
/// containing directory, so `users/index` compiles to `/users` and a root
/// `index` compiles to `/`.
///
/// A catch-all segment must be the last segment of the path; anything after
/// it could never match a request and fails compilation.
///
/// # Examples
///
/// ```
/// use trellis_router::compile_route;
///
/// assert_eq!(compile_route("index").unwrap().pattern, "/");
/// assert_eq!(compile_route("users/index").unwrap().pattern, "/users");
/// assert_eq!(compile_route("users/[id]").unwrap().pattern, "/users/{id}");
/// assert_eq!(compile_route("files/[...path]").unwrap().pattern, "/files/{path}");
///
/// assert!(compile_route("files/[...path]/meta").is_err());
/// ```
pub fn compile_route(rel_path: &str) -> Result<CompiledRoute, CompileError> {
    let normalized = normalize_separators(rel_path);

    let mut segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

    // Index files represent their containing directory.
    if segments.last() == Some(&"index") {
        segments.pop();
    }

    let mut state = ParseState::new();
    let mut pending_catch_all: Option<String> = None;

    for segment in segments {
        if let Some(param) = pending_catch_all.take() {
            return Err(CompileError::CatchAllNotLast { param });
        }

        state = match classify_segment(segment) {
            SegmentKind::Literal(text) => state.with_literal(&text),
            SegmentKind::Param(param) => {
                if param.catch_all {
                    pending_catch_all = Some(param.name.clone());
                }
                state.with_param(param)
            }
        };
    }

    Ok(state.finalize())
}
