//! Path resolution through the public router API.

use typed_router::{Path, Resolution, Router, RouterError, Template, TemplateBuilder, TemplateError};

mod common;
use common::View;

fn router() -> Router<View> {
    Router::with_identifier("TestRouter")
}

#[test]
fn test_zero_arity_route_matches_exactly() {
    let mut router = router();
    router.add_path("home", || View::page("home")).unwrap();

    assert_eq!(router.resolve("home"), Resolution::Matched(View::page("home")));
    assert!(router.resolve("hom").is_not_found());
    assert!(router.resolve("home/").is_not_found());
    assert!(router.resolve("/home").is_not_found());
}

#[test]
fn test_two_string_placeholders() {
    let mut router = router();
    router
        .add_path("path/:p1/:p2", |p1: String, p2: String| View::page(format!("{p1},{p2}")))
        .unwrap();

    assert_eq!(router.view("path/hats/boots"), View::page("hats,boots"));
    assert!(router.resolve("path/hats").is_not_found());
    assert!(router.resolve("path/hats/boots/socks").is_not_found());
}

#[test]
fn test_decode_failure_is_not_found() {
    let mut router = router();
    router
        .add_path("product/list/:category/:num", |category: String, num: i64| {
            View::page(format!("{category}#{num}"))
        })
        .unwrap();

    assert_eq!(router.view("product/list/hats/12"), View::page("hats#12"));
    assert_eq!(router.view("product/list/hats/-3"), View::page("hats#-3"));
    assert!(router.resolve("product/list/hats/abc").is_not_found());
    assert!(!router.can_match("product/list/hats/abc"));
    // Matches the integer fragment but does not parse.
    assert!(router.resolve("product/list/hats/1-2").is_not_found());
}

#[test]
fn test_missing_or_empty_placeholder_segment() {
    let mut router = router();
    router.add_path("a/b/:c", |c: String| View::page(c)).unwrap();

    assert!(router.can_match("a/b/c"));
    assert!(!router.can_match("a/b/"));
    assert!(!router.can_match("a/b"));
    assert!(!router.can_match("a//c"));
}

#[test]
fn test_literals_are_case_insensitive() {
    let mut router = router();
    router.add_path("Settings/:tab", |tab: String| View::page(tab)).unwrap();

    assert_eq!(router.view("settings/Privacy"), View::page("Privacy"));
    assert_eq!(router.view("SETTINGS/general"), View::page("general"));
}

#[test]
fn test_regex_metacharacters_in_literals_are_escaped() {
    let mut router = router();
    router.add_path("v1.0/:id", |id: u32| View::page(id.to_string())).unwrap();

    assert!(router.can_match("v1.0/7"));
    assert!(!router.can_match("v1x0/7"));
}

#[test]
fn test_unsigned_and_float_placeholders() {
    let mut router = router();
    router.add_path("page/:n", |n: u32| View::page(format!("page {n}"))).unwrap();
    router.add_path("price/:amount", |amount: f64| View::page(format!("{amount:.2}"))).unwrap();

    assert_eq!(router.view("page/3"), View::page("page 3"));
    assert!(router.resolve("page/-3").is_not_found());
    assert_eq!(router.view("price/3.5"), View::page("3.50"));
    assert_eq!(router.view("price/-1e2"), View::page("-100.00"));
    assert!(router.resolve("price/cheap").is_not_found());
}

#[test]
fn test_bool_and_char_placeholders() {
    let mut router = router();
    router
        .add_path("flag/:on/:initial", |on: bool, initial: char| View::page(format!("{on}:{initial}")))
        .unwrap();

    assert_eq!(router.view("flag/true/x"), View::page("true:x"));
    assert!(router.resolve("flag/yes/x").is_not_found());
    assert!(router.resolve("flag/true/xy").is_not_found());
}

#[test]
fn test_newer_route_overrides_older() {
    let mut router = router();
    router.add_path("home", || View::page("first")).unwrap();
    router.add_path("home", || View::page("second")).unwrap();

    assert_eq!(router.view("home"), View::page("second"));
    assert_eq!(router.route_count(), 2);
}

#[test]
fn test_older_route_is_fallback_when_newer_rejects() {
    let mut router = router();
    router.add_path("item/:name", |name: String| View::page(format!("name:{name}"))).unwrap();
    router.add_path("item/:id", |id: i64| View::page(format!("id:{id}"))).unwrap();

    assert_eq!(router.view("item/42"), View::page("id:42"));
    assert_eq!(router.view("item/hat"), View::page("name:hat"));
}

#[test]
fn test_ten_placeholders() {
    let mut router: Router<i64> = Router::new();
    router
        .add_path(
            "sum/:a/:b/:c/:d/:e/:f/:g/:h/:i/:j",
            |a: i64, b: i64, c: i64, d: i64, e: i64, f: i64, g: i64, h: i64, i: i64, j: i64| {
                a + b + c + d + e + f + g + h + i + j
            },
        )
        .unwrap();

    assert_eq!(router.resolve("sum/1/2/3/4/5/6/7/8/9/10"), Resolution::Matched(55));
    assert!(router.resolve("sum/1/2/3/4/5/6/7/8/9").is_not_found());
}

#[test]
fn test_arity_mismatch_is_rejected_at_registration() {
    let mut router = router();
    let err = router
        .add_path("path/:p1/:p2", |p1: String| View::page(p1))
        .unwrap_err();

    assert_eq!(
        err,
        RouterError::Template(TemplateError::ArityMismatch {
            pattern: "path/:p1/:p2".to_string(),
            expected: 1,
            found: 2,
        })
    );
    assert_eq!(router.route_count(), 0);
}

#[test]
fn test_can_match_agrees_with_resolve() {
    let mut router = router();
    router.add_path("home", || View::page("home")).unwrap();
    router.add_path("user/:id", |id: u64| View::page(id.to_string())).unwrap();
    router
        .add_path("user/:id/post/:slug", |id: u64, slug: String| View::page(format!("{id}/{slug}")))
        .unwrap();

    let candidates = [
        "home", "HOME", "home/", "", "/", "user/1", "user/-1", "user/x", "user/1/post/hello",
        "user/1/post/", "user//post/hello", "user/1/post/hello/extra",
    ];
    for candidate in candidates {
        assert_eq!(
            router.can_match(candidate),
            router.resolve(candidate).is_matched(),
            "disagreement on {candidate:?}"
        );
    }
}

#[test]
fn test_template_registration_and_path_generation() {
    let template = TemplateBuilder::start()
        .path("product")
        .placeholder::<String>("category")
        .path("page")
        .placeholder::<u32>("number")
        .template();
    assert_eq!(template.pattern(), "product/:category/page/:number");

    let mut router = router();
    router
        .add(&template, |category: String, number: u32| View::page(format!("{category}@{number}")))
        .unwrap();

    let path = template.path(("hats".to_string(), 4));
    assert_eq!(path, Path::from("product/hats/page/4"));
    assert_eq!(router.view(path), View::page("hats@4"));
}

#[test]
fn test_parsed_template_round_trips_its_values() {
    let template = Template::<(String, i32)>::parse("product/list/:category/:num").unwrap();

    let path = template.path(("boots".to_string(), -7));
    assert_eq!(path.as_str(), "product/list/boots/-7");
    assert_eq!(template.matches(path.as_str()), Some(("boots".to_string(), -7)));
    assert_eq!(template.matches("product/list/boots/seven"), None);
}

#[test]
fn test_not_found_view_lists_routes() {
    let mut router = router();
    router.add_path("home", || View::page("home")).unwrap();
    router.add_path("user/:id", |id: u64| View::page(id.to_string())).unwrap();

    let View::Missing(report) = router.view("nowhere") else {
        panic!("expected a not-found view");
    };
    assert!(report.starts_with("404: Not Found\nno route matches path 'nowhere'"));
    assert!(report.contains("home () -> View"));
    assert!(report.contains("user/:id (u64) -> View"));
}
