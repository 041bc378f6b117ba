//! Table-driven checks of the file-naming contract as re-exported by the
//! framework crate.

use pretty_assertions::assert_eq;
use rstest::rstest;

use trellis::{compile_route, ParamKind};

#[rstest]
#[case("index", "/", None)]
#[case("users/index", "/users", None)]
#[case("users/[id]", "/users/{id}", Some(("id", ParamKind::Str, false)))]
#[case("posts/[id:int]", "/posts/{id}", Some(("id", ParamKind::Int, false)))]
#[case("blog/[slug:]", "/blog/{slug}", Some(("slug", ParamKind::Str, false)))]
#[case("files/[...path]", "/files/{path}", Some(("path", ParamKind::Str, true)))]
fn file_naming_contract(
    #[case] rel_path: &str,
    #[case] pattern: &str,
    #[case] param: Option<(&str, ParamKind, bool)>,
) {
    let route = compile_route(rel_path).unwrap();
    assert_eq!(route.pattern, pattern);

    match param {
        Some((name, kind, catch_all)) => {
            assert_eq!(route.params.len(), 1);
            assert_eq!(route.params[0].name, name);
            assert_eq!(route.params[0].kind, kind);
            assert_eq!(route.params[0].catch_all, catch_all);
        }
        None => assert!(route.params.is_empty()),
    }
}

#[rstest]
#[case("users/[id]", "/users/7", "id", "7")]
#[case("blog/[slug:]", "/blog/my-awesome-post", "slug", "my-awesome-post")]
#[case("files/[...path]", "/files/a/b/c", "path", "a/b/c")]
fn file_naming_contract_matching(
    #[case] rel_path: &str,
    #[case] request_path: &str,
    #[case] param: &str,
    #[case] expected: &str,
) {
    let route = compile_route(rel_path).unwrap();
    let params = route.matches(request_path).unwrap();
    assert_eq!(params.get(param), Some(&expected.to_string()));
}
