//! Behavioural guarantees of the routing engine
//!
//! Each test pins one guarantee callers rely on, exercised through the
//! public `waymark` facade.

use rstest::rstest;
use waymark::prelude::*;
use waymark::routing::RouteDefinition;
use waymark_integration_tests::{blog_router, blog_routes};

/// Test Intent: Verify a static path matches itself and nothing longer or shorter
#[rstest]
#[case("/about", true)]
#[case("/about/", false)]
#[case("/abou", false)]
#[case("/about/team", false)]
fn test_static_path_matches_exactly(#[case] path: &str, #[case] expected: bool) {
	let mut routes = RouteCollection::new();
	routes.add("about", Route::new("/about")).unwrap();
	let router = Router::new(routes).unwrap();

	assert_eq!(router.has_match(path, "GET"), expected);
}

/// Test Intent: Verify regex metacharacters in literal text are not interpreted
#[rstest]
#[case("/v1.0/items", true)]
#[case("/v1x0/items", false)]
#[case("/files/a+b", true)]
#[case("/files/aab", false)]
fn test_literals_are_escaped(#[case] path: &str, #[case] expected: bool) {
	let mut routes = RouteCollection::new();
	routes.add("items", Route::new("/v1.0/items")).unwrap();
	routes.add("plus", Route::new("/files/a+b")).unwrap();
	let router = Router::new(routes).unwrap();

	assert_eq!(router.has_match(path, "GET"), expected);
}

/// Test Intent: Verify every route of the table round-trips through generate and match
#[rstest]
#[case("home", Parameters::new())]
#[case("blog", params([("page", ParamValue::from(12))]))]
#[case("post", params([("year", ParamValue::from(1999)), ("month", "12".into()), ("slug", "party".into())]))]
#[case("article", params([("id", ParamValue::from(5))]))]
fn test_generate_match_round_trip(#[case] name: &str, #[case] values: Parameters) {
	let router = blog_router();

	let url = router.generate(name, &values).unwrap();
	let matched = router.match_path(&url, "GET").unwrap();

	assert_eq!(matched["_route"], ParamValue::from(name));
	for (key, value) in &values {
		assert_eq!(matched[key.as_str()].as_url_string(), value.as_url_string());
	}
}

/// Test Intent: Verify the earliest registered route wins when patterns overlap
#[rstest]
fn test_registration_order_is_priority() {
	let mut routes = RouteCollection::new();
	routes.add("specific", Route::new("/pages/about")).unwrap();
	routes.add("generic", Route::new("/pages/{slug}")).unwrap();
	routes.add("shadowed", Route::new("/pages/about")).unwrap();
	let router = Router::new(routes).unwrap();

	assert_eq!(router.match_route_name("/pages/about", "GET").unwrap(), "specific");
	assert_eq!(router.match_route_name("/pages/team", "GET").unwrap(), "generic");
}

/// Test Intent: Verify duplicate placeholders are rejected at compile time
#[rstest]
fn test_duplicate_placeholder_rejected() {
	let mut routes = RouteCollection::new();
	routes.add("dup", Route::new("/{id}/x/{id}")).unwrap();

	let err = Router::new(routes).unwrap_err();

	assert!(matches!(
		err,
		RoutingError::DuplicatePlaceholder { ref name, .. } if name == "id"
	));
	assert_eq!(err.status_code().as_u16(), 500);
}

/// Test Intent: Verify changing a route after a lookup takes effect on the next one
#[rstest]
fn test_mutation_recompiles() {
	let mut route = Route::new("/item/{id}");
	assert!(route.match_path("/item/abc", "GET").unwrap().is_some());

	route.add_requirement("id", r"\d+");

	assert!(route.match_path("/item/abc", "GET").unwrap().is_none());
	assert!(route.match_path("/item/1", "GET").unwrap().is_some());
}

/// Test Intent: Verify the declarative export rebuilds an equivalent router
#[rstest]
fn test_definitions_rebuild_equivalent_router() {
	let original = blog_routes();
	let definitions: indexmap::IndexMap<String, RouteDefinition> = original.to_definitions();

	let rebuilt = Router::from_definitions(definitions).unwrap();
	let reference = blog_router();

	for (path, method) in [
		("/", "GET"),
		("/blog", "GET"),
		("/blog/2024/05/x", "GET"),
		("/api/users", "PUT"),
		("/api/users", "GET"),
		("/nope", "GET"),
	] {
		let left = rebuilt.match_path(path, method).map_err(|e| e.status_code());
		let right = reference.match_path(path, method).map_err(|e| e.status_code());
		assert_eq!(left, right, "{} {}", method, path);
	}
}
