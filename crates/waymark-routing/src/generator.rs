//! URL generation
//!
//! Inverse of matching: builds a concrete URL from a route name and
//! parameter values.
//!
//! Defaults are merged under the supplied parameters before placeholders
//! are substituted, so an optional placeholder always has a value. The
//! path is assembled in one pass over the compiled template, so only the
//! template's own placeholders are ever filled and a value is copied as
//! is, even when it contains brace text. An optional placeholder whose
//! value is empty is dropped together with the `/` in front of it. Supplied parameters that fill no placeholder and do
//! not start with `_` are appended as a query string.

use crate::collection::RouteCollection;
use crate::error::{Result, RoutingError};
use crate::pattern::TemplateToken;
use crate::value::{Parameters, is_internal};
use indexmap::IndexMap;
use std::sync::Arc;

/// Builds URLs for the named routes of a collection.
#[derive(Debug, Clone)]
pub struct UrlGenerator {
	routes: Arc<RouteCollection>,
}

impl UrlGenerator {
	pub fn new(routes: Arc<RouteCollection>) -> Self {
		Self { routes }
	}

	pub fn routes(&self) -> &RouteCollection {
		&self.routes
	}

	/// Generate the URL of route `name`
	///
	/// # Errors
	///
	/// - [`RoutingError::UnknownRoute`] for an unregistered name
	/// - [`RoutingError::MissingMandatoryParameters`] listing every
	///   placeholder left without a value
	/// - [`RoutingError::InvalidParameter`] for the first value violating
	///   its requirement
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{ParamValue, Route, RouteCollection, UrlGenerator, params};
	/// use std::sync::Arc;
	///
	/// let mut routes = RouteCollection::new();
	/// routes.add("article", Route::new("/article/{id}").with_requirement("id", r"\d+")).unwrap();
	/// let generator = UrlGenerator::new(Arc::new(routes));
	///
	/// let url = generator
	///     .generate("article", &params([("id", ParamValue::from(42)), ("ref", "home".into())]))
	///     .unwrap();
	/// assert_eq!(url, "/article/42?ref=home");
	/// ```
	pub fn generate(&self, name: &str, parameters: &Parameters) -> Result<String> {
		let route = self
			.routes
			.get(name)
			.ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;
		let compiled = route.compile()?;

		let mut merged = route.defaults().clone();
		merged.extend(parameters.iter().map(|(k, v)| (k.clone(), v.clone())));

		let missing: Vec<String> = compiled
			.variables()
			.iter()
			.filter(|variable| !merged.contains_key(variable.as_str()))
			.cloned()
			.collect();
		if !missing.is_empty() {
			return Err(RoutingError::MissingMandatoryParameters {
				route: name.to_string(),
				missing,
			});
		}

		let mut url = String::with_capacity(route.path().len());
		for token in compiled.tokens() {
			let (index, separator) = match token {
				TemplateToken::Literal(text) => {
					url.push_str(text);
					continue;
				}
				TemplateToken::Variable { index, separator } => (*index, *separator),
			};
			let variable = &compiled.variables()[index];
			let value = &merged[variable.as_str()];

			// Empty optional values vanish along with their own separator
			if value.is_empty() && compiled.is_optional(variable) {
				continue;
			}

			let value = value.as_url_string();
			if let Some((requirement, regex)) = compiled.requirement(variable)
				&& !regex.is_match(&value)
			{
				return Err(RoutingError::InvalidParameter {
					route: name.to_string(),
					parameter: variable.clone(),
					requirement: requirement.to_string(),
					value,
				});
			}

			if separator {
				url.push('/');
			}
			url.push_str(&value);
		}

		if url.len() > 1 && url.ends_with('/') {
			url.pop();
		}

		let extra: Vec<(&str, String)> = parameters
			.iter()
			.filter(|(key, _)| !is_internal(key) && !compiled.variables().contains(*key))
			.map(|(key, value)| (key.as_str(), value.as_url_string()))
			.collect();
		if !extra.is_empty() {
			url.push('?');
			url.push_str(&serde_urlencoded::to_string(&extra)?);
		}

		Ok(url)
	}

	/// Generate several URLs, leaving out every route that fails
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{Parameters, Route, RouteCollection, UrlGenerator};
	/// use indexmap::IndexMap;
	/// use std::sync::Arc;
	///
	/// let mut routes = RouteCollection::new();
	/// routes.add("home", Route::new("/")).unwrap();
	/// let generator = UrlGenerator::new(Arc::new(routes));
	///
	/// let mut menu = IndexMap::new();
	/// menu.insert("home".to_string(), Parameters::new());
	/// menu.insert("gone".to_string(), Parameters::new());
	///
	/// let urls = generator.generate_multiple(&menu);
	/// assert_eq!(urls.len(), 1);
	/// assert_eq!(urls["home"], "/");
	/// ```
	pub fn generate_multiple(
		&self,
		requests: &IndexMap<String, Parameters>,
	) -> IndexMap<String, String> {
		requests
			.iter()
			.filter_map(|(name, parameters)| match self.generate(name, parameters) {
				Ok(url) => Some((name.clone(), url)),
				Err(e) => {
					tracing::debug!(route = %name, error = %e, "skipping route in batch generation");
					None
				}
			})
			.collect()
	}
}
