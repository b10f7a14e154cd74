//! Integration tests for a blog application's routing
//!
//! This test file verifies the integration between:
//! - The `waymark` facade and prelude
//! - Request dispatch by handler reference
//! - HTTP status mapping of routing failures
//! - Links generated for the matched route

use rstest::rstest;
use waymark::prelude::*;
use waymark_integration_tests::blog_router;

// ============================================================
// Test Utilities
// ============================================================

/// Minimal dispatcher: the handler a request resolves to, or the status
/// and `Allow` header a server would answer with
fn dispatch(router: &Router, path: &str, method: &str) -> Result<String, (u16, Option<String>)> {
	match router.match_path(path, method) {
		Ok(params) => Ok(params
			.get("_controller")
			.and_then(ParamValue::as_handler)
			.map(|h| h.as_str().to_string())
			.unwrap_or_default()),
		Err(e) => Err((e.status_code().as_u16(), e.allow_header())),
	}
}

// ============================================================
// Dispatch Tests
// ============================================================

/// Test Intent: Verify each request reaches the expected handler
/// Integration Point: Router::match_path + HandlerRef defaults
#[rstest]
#[case("/", "GET", "pages::home")]
#[case("/blog", "GET", "blog::index")]
#[case("/blog/3", "HEAD", "blog::index")]
#[case("/blog/2024/05/hello", "GET", "blog::post")]
#[case("/article/9", "GET", "article::show")]
#[case("/api/users", "POST", "users::create")]
#[case("/api/users", "put", "users::update")]
fn test_dispatch_to_handler(#[case] path: &str, #[case] method: &str, #[case] handler: &str) {
	let router = blog_router();
	assert_eq!(dispatch(&router, path, method), Ok(handler.to_string()));
}

/// Test Intent: Verify failures map to 404 and 405 with an Allow header
/// Integration Point: RoutingError::status_code + allow_header
#[rstest]
#[case("/missing", "GET", 404, None)]
#[case("/article/abc", "GET", 404, None)]
#[case("/blog/24/05/hello", "GET", 404, None)]
#[case("/api/users", "GET", 405, Some("POST, PUT"))]
#[case("/api/users", "DELETE", 405, Some("POST, PUT"))]
fn test_dispatch_failures(
	#[case] path: &str,
	#[case] method: &str,
	#[case] status: u16,
	#[case] allow: Option<&str>,
) {
	let router = blog_router();
	assert_eq!(
		dispatch(&router, path, method),
		Err((status, allow.map(str::to_string)))
	);
}

// ============================================================
// Link Generation Tests
// ============================================================

/// Test Intent: Verify pagination links for the matched listing
/// Integration Point: match result fed back into generation
#[rstest]
fn test_next_page_link() {
	let router = blog_router();
	let current = router.match_path("/blog/4", "GET").unwrap();

	let page: i64 = current["page"].as_url_string().parse().unwrap();
	let next = router
		.generate("blog", &params([("page", ParamValue::from(page + 1))]))
		.unwrap();

	assert_eq!(next, "/blog/5");
}

/// Test Intent: Verify a navigation menu drops entries it cannot build
/// Integration Point: Router::generate_multiple
#[rstest]
fn test_menu_generation() {
	let router = blog_router();
	let mut menu = indexmap::IndexMap::new();
	menu.insert("home".to_string(), Parameters::new());
	menu.insert("blog".to_string(), Parameters::new());
	menu.insert("post".to_string(), Parameters::new());
	menu.insert(
		"article".to_string(),
		params([("id", ParamValue::from(1)), ("ref", "menu".into())]),
	);

	let urls = router.generate_multiple(&menu);

	assert_eq!(urls.len(), 3);
	assert_eq!(urls["home"], "/");
	assert_eq!(urls["blog"], "/blog/1");
	assert_eq!(urls["article"], "/article/1?ref=menu");
}

/// Test Intent: Verify generation errors are client errors with precise messages
/// Integration Point: RoutingError display + status mapping
#[rstest]
fn test_generation_error_reporting() {
	let router = blog_router();

	let err = router
		.generate(
			"article",
			&params([("id", ParamValue::from("latest"))]),
		)
		.unwrap_err();

	assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
	assert!(matches!(err, RoutingError::InvalidParameter { .. }));
	let message = err.to_string();
	assert!(message.contains("id"));
	assert!(message.contains("latest"));
}
