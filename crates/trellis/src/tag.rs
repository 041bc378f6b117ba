// File: src/tag.rs
// Purpose: Route classification tags with override precedence

use std::collections::HashMap;

use trellis_router::Ancestors;

/// Application-supplied tag overrides, keyed by route file path or directory
/// path. Last write for a key wins. Owned by the registry and passed
/// explicitly into `resolve_tag`, so resolution stays a pure function of its
/// arguments.
#[derive(Debug, Clone, Default)]
pub struct TagOverrides {
    overrides: HashMap<String, String>,
}

impl TagOverrides {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Records an override for a specific route file or directory.
    ///
    /// ```
    /// use trellis::TagOverrides;
    ///
    /// let mut overrides = TagOverrides::new();
    /// overrides.set("routes/users/[id].rs", "user-details"); // specific file
    /// overrides.set("routes/users", "user-management");      // whole directory
    /// ```
    pub fn set(&mut self, path: impl Into<String>, tag: impl Into<String>) {
        self.overrides.insert(path.into(), tag.into());
    }

    /// Looks up an override by exact path key.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.overrides.get(path).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Computes the classification tag for a route.
///
/// Priority, first match wins:
/// 1. Override keyed by the file's full path.
/// 2. Override keyed by an ancestor directory, nearest first, stopping
///    before the routes root itself.
/// 3. First pattern segment that is not a parameter.
/// 4. `"default"` (the root route has no qualifying segment).
///
/// Re-evaluated on every scan; overrides may change between scans.
pub fn resolve_tag(
    overrides: &TagOverrides,
    source_path: &str,
    pattern: &str,
    routes_root: &str,
) -> String {
    if let Some(tag) = overrides.get(source_path) {
        return tag.to_string();
    }

    let ancestor_tag = Ancestors::new(source_path)
        .take_while(|dir| *dir != routes_root)
        .find_map(|dir| overrides.get(dir));
    if let Some(tag) = ancestor_tag {
        return tag.to_string();
    }

    pattern
        .split('/')
        .find(|s| !s.is_empty() && !s.starts_with('{'))
        .map(|s| s.to_string())
        .unwrap_or_else(|| "default".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_first_segment() {
        let overrides = TagOverrides::new();
        assert_eq!(
            resolve_tag(&overrides, "routes/users/[id].rs", "/users/{id}", "routes"),
            "users"
        );
    }

    #[test]
    fn test_root_route_tag_is_default() {
        let overrides = TagOverrides::new();
        assert_eq!(
            resolve_tag(&overrides, "routes/index.rs", "/", "routes"),
            "default"
        );
    }

    #[test]
    fn test_parameter_segments_skipped_for_fallback() {
        let overrides = TagOverrides::new();
        assert_eq!(
            resolve_tag(&overrides, "routes/[org]/teams.rs", "/{org}/teams", "routes"),
            "teams"
        );
    }

    #[test]
    fn test_file_override_beats_directory_override() {
        let mut overrides = TagOverrides::new();
        overrides.set("routes/users", "user-management");
        overrides.set("routes/users/[id].rs", "user-details");

        assert_eq!(
            resolve_tag(&overrides, "routes/users/[id].rs", "/users/{id}", "routes"),
            "user-details"
        );
        // Sibling file only sees the directory override
        assert_eq!(
            resolve_tag(&overrides, "routes/users/index.rs", "/users", "routes"),
            "user-management"
        );
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let mut overrides = TagOverrides::new();
        overrides.set("routes/api", "api");
        overrides.set("routes/api/v1", "api-v1");

        assert_eq!(
            resolve_tag(
                &overrides,
                "routes/api/v1/health.rs",
                "/api/v1/health",
                "routes"
            ),
            "api-v1"
        );
    }

    #[test]
    fn test_routes_root_is_not_an_override_key() {
        let mut overrides = TagOverrides::new();
        overrides.set("routes", "everything");

        assert_eq!(
            resolve_tag(&overrides, "routes/users/index.rs", "/users", "routes"),
            "users"
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut overrides = TagOverrides::new();
        overrides.set("routes/users", "first");
        overrides.set("routes/users", "second");

        assert_eq!(
            resolve_tag(&overrides, "routes/users/index.rs", "/users", "routes"),
            "second"
        );
    }
}
