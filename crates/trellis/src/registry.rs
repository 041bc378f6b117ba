// File: src/registry.rs
// Purpose: Scans the route-file tree and registers compiled routes with the engine

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use axum::http::Method;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::engine::{EndpointRoute, RouteSink};
use crate::module::{extract_handlers, RouteUnit, UnitTable};
use crate::tag::{resolve_tag, TagOverrides};
use trellis_router::{compile_route, normalize_separators, ParamDescriptor};

/// A registered route as recorded during a scan.
///
/// Descriptors are rebuilt from scratch on every scan; the registry never
/// mutates one in place.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// URL pattern, always beginning with `/`
    pub pattern: String,
    /// Source file path including the routes directory, `/`-separated
    pub source_path: String,
    /// Path parameters in discovery order
    pub params: Vec<ParamDescriptor>,
    /// HTTP methods the file exports handlers for
    pub methods: Vec<Method>,
    /// Classification tag
    pub tag: String,
}

/// File-based route registry.
///
/// Owns the scan loop over the routes directory: compiles each file's path
/// into a pattern, resolves its handler unit, extracts method handlers,
/// assigns a tag, and registers every `(method, handler)` pair with the
/// engine behind the `RouteSink` boundary.
pub struct Registry {
    routes_dir: PathBuf,
    root_str: String,
    extension: String,
    skip_exports: Vec<String>,
    units: UnitTable,
    overrides: TagOverrides,
    routes: Vec<RouteDescriptor>,
}

impl Registry {
    /// Creates a registry over a routes directory with default settings.
    pub fn new(routes_dir: impl Into<PathBuf>) -> Self {
        let routes_dir = routes_dir.into();
        let root_str = normalize_separators(&routes_dir.to_string_lossy()).into_owned();
        Self {
            routes_dir,
            root_str,
            extension: "rs".to_string(),
            skip_exports: Vec::new(),
            units: UnitTable::new(),
            overrides: TagOverrides::new(),
            routes: Vec::new(),
        }
    }

    /// Creates a registry from application configuration.
    pub fn with_config(config: &Config) -> Self {
        let mut registry = Self::new(&config.routing.routes_dir);
        registry.extension = config.routing.extension.clone();
        registry.skip_exports = config.routing.skip_exports.clone();
        registry
    }

    /// Registers the handler unit for a route file, keyed by its
    /// routes-relative path (extension included).
    pub fn register_unit(&mut self, source: impl Into<String>, unit: RouteUnit) {
        self.units.register(source, unit);
    }

    /// Sets a custom tag for a route file or directory. Takes effect on the
    /// next scan; already-registered routes keep their tags.
    ///
    /// Examples:
    /// - `registry.set_custom_tag("routes/users/[id].rs", "user-details")` for a specific file
    /// - `registry.set_custom_tag("routes/users", "user-management")` for a whole directory
    pub fn set_custom_tag(&mut self, path: impl Into<String>, tag: impl Into<String>) {
        self.overrides.set(path, tag);
    }

    /// Information about all registered routes (a copy; mutating it does not
    /// touch registry state).
    pub fn routes(&self) -> Vec<RouteDescriptor> {
        self.routes.clone()
    }

    /// Scans the routes directory and registers every route file with the
    /// engine.
    ///
    /// The walk is depth-first with directory entries sorted by name at
    /// every level, so registration order is deterministic for a given tree.
    /// Files and directories whose names start with `_` are skipped.
    ///
    /// A missing routes directory is fatal. Per-file failures (a compile
    /// error, a missing handler unit) are logged and skipped; the scan
    /// continues with the next file. On success the descriptor set is
    /// replaced wholesale - re-scanning never accumulates stale descriptors.
    pub fn scan(&mut self, sink: &mut dyn RouteSink) -> Result<()> {
        if !self.routes_dir.exists() {
            bail!("Routes directory {:?} not found", self.routes_dir);
        }

        let mut files = Vec::new();
        collect_route_files(&self.routes_dir, &self.extension, &mut files)
            .with_context(|| format!("Failed to walk routes directory {:?}", self.routes_dir))?;

        let mut scanned = Vec::new();
        for file_path in &files {
            if let Err(e) = self.scan_file(file_path, sink, &mut scanned) {
                error!("Error loading route {}: {:#}", file_path.display(), e);
            }
        }

        info!(
            "Scan registered {} of {} route files under {:?}",
            scanned.len(),
            files.len(),
            self.routes_dir
        );
        self.routes = scanned;
        Ok(())
    }

    fn scan_file(
        &self,
        file_path: &Path,
        sink: &mut dyn RouteSink,
        scanned: &mut Vec<RouteDescriptor>,
    ) -> Result<()> {
        let rel = file_path.strip_prefix(&self.routes_dir).unwrap_or(file_path);
        let rel_str = normalize_separators(&rel.to_string_lossy()).into_owned();

        let stem_path = rel.with_extension("");
        let compiled = compile_route(&stem_path.to_string_lossy())?;

        let source_path = format!("{}/{}", self.root_str, rel_str);

        let unit = self
            .units
            .get(&rel_str)
            .with_context(|| format!("No route unit registered for '{}'", rel_str))?;

        let handlers = extract_handlers(unit, &source_path, &self.skip_exports);
        if handlers.is_empty() {
            debug!("Skipping {}: no recognized handler exports", source_path);
            return Ok(());
        }

        let tag = resolve_tag(&self.overrides, &source_path, &compiled.pattern, &self.root_str);

        let stem = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let methods: Vec<Method> = handlers.iter().map(|(m, _)| m.clone()).collect();

        for (method, handler) in handlers {
            let name = format!("{}_{}", method.as_str().to_ascii_lowercase(), stem);
            sink.register(EndpointRoute {
                route: compiled.clone(),
                method,
                name,
                tag: tag.clone(),
                handler,
            });
        }

        scanned.push(RouteDescriptor {
            pattern: compiled.pattern,
            source_path,
            params: compiled.params,
            methods,
            tag,
        });

        Ok(())
    }
}

/// Collects route files depth-first, sorting directory entries by name at
/// every level. `_`-prefixed files and directories are excluded entirely.
fn collect_route_files(
    dir: &Path,
    extension: &str,
    files: &mut Vec<PathBuf>,
) -> std::io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('_') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            collect_route_files(&path, extension, files)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    Ok(())
}
