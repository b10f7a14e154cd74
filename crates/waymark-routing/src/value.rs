//! Typed values carried by route defaults and matched parameters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker prefix of internal parameters.
///
/// Generation never renders a parameter starting with this marker into
/// the query string.
pub const INTERNAL_PREFIX: char = '_';

/// Reserved default key holding the request-handler reference.
pub const HANDLER_KEY: &str = "_controller";

/// Key injected into matched parameters with the matched route name.
pub const ROUTE_KEY: &str = "_route";

/// Insertion-ordered parameter map used for defaults, match output and
/// generation input.
pub type Parameters = IndexMap<String, ParamValue>;

/// Reference to the handler a route dispatches to.
///
/// The routing core never resolves it; the dispatching collaborator does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerRef(String);

impl HandlerRef {
	/// Create a handler reference from its identifier.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::HandlerRef;
	///
	/// let handler = HandlerRef::new("blog::show");
	/// assert_eq!(handler.as_str(), "blog::show");
	/// ```
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for HandlerRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A default or parameter value.
///
/// Matching always yields [`ParamValue::Str`] for captured segments;
/// the other variants come from route defaults or caller input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
	Bool(bool),
	Int(i64),
	Str(String),
	/// Never produced by untagged deserialization; loaders promote the
	/// string stored under [`HANDLER_KEY`].
	Handler(HandlerRef),
}

impl ParamValue {
	/// Canonical string form used for requirement checks and URL output.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::ParamValue;
	///
	/// assert_eq!(ParamValue::from(42).as_url_string(), "42");
	/// assert_eq!(ParamValue::from(true).as_url_string(), "true");
	/// assert_eq!(ParamValue::from("slug").as_url_string(), "slug");
	/// ```
	pub fn as_url_string(&self) -> String {
		match self {
			Self::Bool(b) => b.to_string(),
			Self::Int(i) => i.to_string(),
			Self::Str(s) => s.clone(),
			Self::Handler(h) => h.to_string(),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_handler(&self) -> Option<&HandlerRef> {
		match self {
			Self::Handler(h) => Some(h),
			_ => None,
		}
	}

	/// Whether the canonical string form is empty.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Str(s) if s.is_empty())
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.as_url_string())
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<HandlerRef> for ParamValue {
	fn from(value: HandlerRef) -> Self {
		Self::Handler(value)
	}
}

/// Build a [`Parameters`] map from `(name, value)` pairs.
///
/// # Examples
///
/// ```
/// use waymark_routing::{ParamValue, params};
///
/// let p = params([("id", ParamValue::from(7)), ("slug", "intro".into())]);
/// assert_eq!(p.get("id"), Some(&ParamValue::Int(7)));
/// ```
pub fn params<K, I>(pairs: I) -> Parameters
where
	K: Into<String>,
	I: IntoIterator<Item = (K, ParamValue)>,
{
	pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Whether `name` is reserved for internal use.
pub fn is_internal(name: &str) -> bool {
	name.starts_with(INTERNAL_PREFIX)
}
