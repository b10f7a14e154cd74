//! Error types for route compilation, matching and URL generation.
//!
//! Every failure in this crate is deterministic and caused by caller input
//! or route configuration. The HTTP layer maps them with
//! [`RoutingError::status_code`].

use http::StatusCode;
use thiserror::Error;

/// Errors raised by the routing core.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RoutingError {
	/// No route pattern matches the path under any method.
	#[error("No route found for \"{path}\"")]
	RouteNotFound {
		/// The requested path.
		path: String,
	},

	/// At least one route matches the path, but none allows the method.
	#[error("No route found for \"{method} {path}\": method not allowed (allow: {})", .allowed.join(", "))]
	MethodNotAllowed {
		/// The requested path.
		path: String,
		/// The requested method, upper-cased.
		method: String,
		/// De-duplicated methods accepted by the routes matching `path`.
		allowed: Vec<String>,
	},

	/// Generation requested for a name absent from the collection.
	#[error("Route \"{0}\" does not exist")]
	UnknownRoute(String),

	/// Generation omitted placeholders that have no default.
	#[error("Some mandatory parameters are missing (\"{}\") to generate a URL for route \"{route}\"", .missing.join("\", \""))]
	MissingMandatoryParameters {
		/// The route being generated.
		route: String,
		/// Every unmet mandatory placeholder, in template order.
		missing: Vec<String>,
	},

	/// A generation value does not satisfy the placeholder requirement.
	#[error("Parameter \"{parameter}\" for route \"{route}\" must match \"{requirement}\" (\"{value}\" given)")]
	InvalidParameter {
		route: String,
		parameter: String,
		requirement: String,
		value: String,
	},

	/// A collection already holds a route under this name.
	#[error("Route name \"{0}\" is already registered")]
	DuplicateRouteName(String),

	/// A path template uses the same placeholder name twice.
	#[error("Route pattern \"{path}\" cannot reference placeholder \"{name}\" more than once")]
	DuplicatePlaceholder { path: String, name: String },

	/// A requirement is not a valid regular expression.
	#[error("Requirement \"{requirement}\" for placeholder \"{name}\" is not a valid regex: {source}")]
	InvalidRequirement {
		name: String,
		requirement: String,
		#[source]
		source: regex::Error,
	},

	/// The compiled path pattern exceeds the regex engine limits.
	#[error("Route pattern \"{path}\" could not be compiled: {source}")]
	InvalidPattern {
		path: String,
		#[source]
		source: regex::Error,
	},

	/// The query string of a generated URL could not be encoded.
	#[error("Failed to encode query string: {0}")]
	QueryEncoding(#[from] serde_urlencoded::ser::Error),
}

impl RoutingError {
	/// HTTP status an HTTP-layer collaborator should answer with.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::RoutingError;
	/// use http::StatusCode;
	///
	/// let err = RoutingError::RouteNotFound { path: "/missing".to_string() };
	/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
			Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
			Self::UnknownRoute(_)
			| Self::MissingMandatoryParameters { .. }
			| Self::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
			Self::DuplicateRouteName(_)
			| Self::DuplicatePlaceholder { .. }
			| Self::InvalidRequirement { .. }
			| Self::InvalidPattern { .. }
			| Self::QueryEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Value for the `Allow` response header, only set for
	/// [`RoutingError::MethodNotAllowed`].
	pub fn allow_header(&self) -> Option<String> {
		match self {
			Self::MethodNotAllowed { allowed, .. } => Some(allowed.join(", ")),
			_ => None,
		}
	}

	/// Whether the error comes from resolving a request path.
	pub fn is_match_failure(&self) -> bool {
		matches!(
			self,
			Self::RouteNotFound { .. } | Self::MethodNotAllowed { .. }
		)
	}
}

/// Result type alias for routing operations.
pub type Result<T> = std::result::Result<T, RoutingError>;
