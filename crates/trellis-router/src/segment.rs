//! Segment classification for route patterns.
//!
//! Pure parsing of a single path segment into a literal or a parameter.
//! Same input always produces the same output; no side effects, no I/O.

use crate::{ParamDescriptor, ParamKind};

/// What a single path segment compiles to.
///
/// # Examples
///
/// ```
/// use trellis_router::{classify_segment, SegmentKind};
///
/// assert!(matches!(classify_segment("about"), SegmentKind::Literal(_)));
/// assert!(matches!(classify_segment("[id]"), SegmentKind::Param(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Static text that must match the request path exactly.
    Literal(String),
    /// A named parameter, possibly typed or catch-all.
    Param(ParamDescriptor),
}

/// Classifies one path segment.
///
/// # Parsing rules (evaluated in order)
///
/// 1. Not wrapped in `[`…`]` → literal.
/// 2. Interior starts with `...` → catch-all; the name is everything after
///    the dots, taken verbatim; kind is always `Str`.
/// 3. Interior contains `:` → split on the first `:` into name and type
///    token. An empty token (`[slug:]`) means `Str`; `int` means `Int`; any
///    other token also means `Str`.
/// 4. Otherwise the whole interior is the parameter name, kind `Str`.
///
/// Parameter names pass through unchecked: no case normalization, no
/// character validation.
///
/// # Examples
///
/// ```
/// use trellis_router::{classify_segment, ParamKind, SegmentKind};
///
/// let seg = classify_segment("[id:int]");
/// match seg {
///     SegmentKind::Param(p) => {
///         assert_eq!(p.name, "id");
///         assert_eq!(p.kind, ParamKind::Int);
///         assert!(!p.catch_all);
///     }
///     _ => panic!("expected a parameter"),
/// }
/// ```
pub fn classify_segment(segment: &str) -> SegmentKind {
    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => {
            // Catch-all: [...rest]. The name is verbatim, so [...rest:int]
            // names its parameter "rest:int" and stays a string.
            if let Some(name) = inner.strip_prefix("...") {
                return SegmentKind::Param(ParamDescriptor {
                    name: name.to_string(),
                    kind: ParamKind::Str,
                    catch_all: true,
                });
            }

            // Typed: [id:int], [slug:]
            if let Some((name, token)) = inner.split_once(':') {
                return SegmentKind::Param(ParamDescriptor {
                    name: name.to_string(),
                    kind: ParamKind::from_token(token),
                    catch_all: false,
                });
            }

            // Plain: [id]
            SegmentKind::Param(ParamDescriptor {
                name: inner.to_string(),
                kind: ParamKind::Str,
                catch_all: false,
            })
        }
        None => SegmentKind::Literal(segment.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(segment: &str) -> ParamDescriptor {
        match classify_segment(segment) {
            SegmentKind::Param(p) => p,
            SegmentKind::Literal(l) => panic!("expected param, got literal '{}'", l),
        }
    }

    #[test]
    fn test_classify_literal() {
        assert_eq!(
            classify_segment("about"),
            SegmentKind::Literal("about".to_string())
        );
    }

    #[test]
    fn test_classify_plain_param() {
        let p = param("[id]");
        assert_eq!(p.name, "id");
        assert_eq!(p.kind, ParamKind::Str);
        assert!(!p.catch_all);
    }

    #[test]
    fn test_classify_typed_param() {
        let p = param("[id:int]");
        assert_eq!(p.name, "id");
        assert_eq!(p.kind, ParamKind::Int);
        assert!(!p.catch_all);
    }

    #[test]
    fn test_classify_empty_type_token() {
        let p = param("[slug:]");
        assert_eq!(p.name, "slug");
        assert_eq!(p.kind, ParamKind::Str);
        assert!(!p.catch_all);
    }

    #[test]
    fn test_classify_unknown_type_token_falls_back_to_str() {
        let p = param("[id:uuid]");
        assert_eq!(p.name, "id");
        assert_eq!(p.kind, ParamKind::Str);
    }

    #[test]
    fn test_classify_catch_all() {
        let p = param("[...rest]");
        assert_eq!(p.name, "rest");
        assert_eq!(p.kind, ParamKind::Str);
        assert!(p.catch_all);
    }

    #[test]
    fn test_classify_catch_all_name_is_verbatim() {
        let p = param("[...rest:int]");
        assert_eq!(p.name, "rest:int");
        assert_eq!(p.kind, ParamKind::Str);
        assert!(p.catch_all);
    }

    #[test]
    fn test_classify_unbalanced_brackets_are_literal() {
        assert!(matches!(classify_segment("[id"), SegmentKind::Literal(_)));
        assert!(matches!(classify_segment("id]"), SegmentKind::Literal(_)));
    }

    #[test]
    fn test_classify_name_passes_through_unchecked() {
        let p = param("[User-ID]");
        assert_eq!(p.name, "User-ID");
    }
}
