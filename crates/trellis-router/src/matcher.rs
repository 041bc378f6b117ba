//! Matching a compiled route against a request path.
//!
//! The walk steps through pattern and path segments in lockstep: literals
//! compare exactly, `{name}` binds one segment, a catch-all parameter binds
//! the remaining one-or-more segments joined with `/`. Parameter kinds are
//! validated after the structural match, so an integer-constrained route
//! rejects `/posts/abc` even though the shape lines up.

use std::collections::HashMap;

use crate::CompiledRoute;

/// Extracts the parameter name from a `{name}` pattern segment.
fn param_name_of(segment: &str) -> Option<&str> {
    segment.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
}

impl CompiledRoute {
    /// Matches this route against a request path, returning bound parameter
    /// values on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_router::compile_route;
    ///
    /// let route = compile_route("files/[...path]").unwrap();
    /// let params = route.matches("/files/a/b/c").unwrap();
    /// assert_eq!(params.get("path"), Some(&"a/b/c".to_string()));
    /// ```
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let pattern_segments: Vec<&str> =
            self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        fn match_segments(
            route: &CompiledRoute,
            pattern_segments: &[&str],
            path_segments: &[&str],
            pattern_idx: usize,
            path_idx: usize,
            params: HashMap<String, String>,
        ) -> Option<HashMap<String, String>> {
            // Base case: consumed all pattern segments.
            if pattern_idx >= pattern_segments.len() {
                return if path_idx == path_segments.len() {
                    Some(params)
                } else {
                    None
                };
            }

            let pattern_seg = pattern_segments[pattern_idx];

            match param_name_of(pattern_seg) {
                Some(name) => {
                    let descriptor = route.param(name)?;

                    if descriptor.catch_all {
                        // One-or-more remaining segments, joined with '/'.
                        let remaining = &path_segments[path_idx..];
                        if remaining.is_empty() {
                            return None;
                        }
                        let mut new_params = params;
                        new_params.insert(name.to_string(), remaining.join("/"));
                        Some(new_params)
                    } else {
                        if path_idx >= path_segments.len() {
                            return None;
                        }
                        let mut new_params = params;
                        new_params
                            .insert(name.to_string(), path_segments[path_idx].to_string());
                        match_segments(
                            route,
                            pattern_segments,
                            path_segments,
                            pattern_idx + 1,
                            path_idx + 1,
                            new_params,
                        )
                    }
                }
                None => {
                    if path_idx >= path_segments.len() {
                        return None;
                    }
                    if pattern_seg != path_segments[path_idx] {
                        return None;
                    }
                    match_segments(
                        route,
                        pattern_segments,
                        path_segments,
                        pattern_idx + 1,
                        path_idx + 1,
                        params,
                    )
                }
            }
        }

        let params = match_segments(
            self,
            &pattern_segments,
            &path_segments,
            0,
            0,
            HashMap::new(),
        )?;

        // Kind validation after the structural match.
        let all_valid = params.iter().all(|(name, value)| {
            self.param(name)
                .map(|p| p.kind.accepts(value))
                .unwrap_or(true)
        });

        if all_valid {
            Some(params)
        } else {
            None
        }
    }
}
