//! Path utilities shared by compilation and tag resolution.

use std::borrow::Cow;

/// Normalizes directory separators to `/`.
///
/// Returns the input unchanged (no allocation) when it already uses forward
/// slashes.
///
/// # Examples
///
/// ```
/// use trellis_router::normalize_separators;
///
/// assert_eq!(normalize_separators("users/[id]"), "users/[id]");
/// assert_eq!(normalize_separators("users\\[id]"), "users/[id]");
/// ```
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Lazy iterator over a path's ancestor directories, nearest first.
///
/// For `routes/users/[id].rs`, yields `routes/users` then `routes`. Only
/// borrows from the input; generates each parent on demand so callers can
/// short-circuit with `find`/`find_map`.
///
/// # Examples
///
/// ```
/// use trellis_router::Ancestors;
///
/// let dirs: Vec<&str> = Ancestors::new("routes/users/[id].rs").collect();
/// assert_eq!(dirs, vec!["routes/users", "routes"]);
/// ```
pub struct Ancestors<'a> {
    current: Option<&'a str>,
}

impl<'a> Ancestors<'a> {
    /// Creates an iterator starting at the parent of `path`.
    pub fn new(path: &'a str) -> Self {
        Self {
            current: Some(path),
        }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.current?;
        match current.rfind('/') {
            Some(idx) if idx > 0 => {
                let parent = &current[..idx];
                self.current = Some(parent);
                Some(parent)
            }
            _ => {
                self.current = None;
                None
            }
        }
    }
}
