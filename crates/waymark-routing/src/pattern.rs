//! Path template compilation.
//!
//! Turns a template such as `/blog/{year}/{slug}` into an anchored regex
//! with one named capture group per placeholder.
//!
//! # Template Syntax
//!
//! - `{name}` - a placeholder; `name` is `[A-Za-z_][A-Za-z0-9_]*`
//! - any other text, including a `{` that does not open a valid
//!   placeholder, is matched literally
//!
//! A placeholder that has a default is optional. When it directly follows
//! a `/`, that separator becomes optional together with the value, so
//! `/blog/{page}` matches both `/blog` and `/blog/2`.

use crate::error::{Result, RoutingError};
use crate::value::{ParamValue, Parameters};
use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use std::fmt::Write;

/// Constraint applied to placeholders without a requirement.
pub const DEFAULT_REQUIREMENT: &str = "[^/]+";

/// Maximum allowed size for a compiled route regex (in bytes).
const MAX_ROUTE_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateToken {
	/// Text copied verbatim into generated URLs
	Literal(String),
	/// A placeholder, by index into [`CompiledRoute::variables`]
	///
	/// `separator` is set when the `/` in front of an optional placeholder
	/// belongs to it and is omitted together with an empty value.
	Variable { index: usize, separator: bool },
}

/// The matcher derived from a route's path, defaults and requirements.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
	source: String,
	regex: Regex,
	tokens: Vec<TemplateToken>,
	variables: Vec<String>,
	optional: Vec<bool>,
	/// `^(?:requirement)$` per constrained placeholder, used by generation.
	requirements: IndexMap<String, (String, Regex)>,
}

impl CompiledRoute {
	/// Compile a template against its defaults and requirements.
	///
	/// # Errors
	///
	/// - [`RoutingError::DuplicatePlaceholder`] if a name occurs twice
	/// - [`RoutingError::InvalidRequirement`] if a requirement is not a regex
	/// - [`RoutingError::InvalidPattern`] if the whole pattern cannot compile
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{CompiledRoute, Parameters};
	/// use indexmap::IndexMap;
	///
	/// let mut requirements = IndexMap::new();
	/// requirements.insert("id".to_string(), r"\d+".to_string());
	///
	/// let compiled = CompiledRoute::compile("/article/{id}", &Parameters::new(), &requirements).unwrap();
	/// assert_eq!(compiled.source(), r"^/article/(?P<id>(?:\d+))$");
	/// assert_eq!(compiled.variables(), &["id"]);
	/// ```
	pub fn compile(
		path: &str,
		defaults: &Parameters,
		requirements: &IndexMap<String, String>,
	) -> Result<Self> {
		let mut source = String::from("^");
		let mut tokens = Vec::new();
		let mut variables: Vec<String> = Vec::new();
		let mut optional = Vec::new();
		let mut constrained = IndexMap::new();
		let mut literal = String::new();
		let mut rest = path;

		while let Some(open) = rest.find('{') {
			let Some(name) = placeholder_at(&rest[open..]) else {
				// Not a placeholder, keep the brace as text
				literal.push_str(&rest[..=open]);
				rest = &rest[open + 1..];
				continue;
			};

			if variables.iter().any(|v| v == name) {
				return Err(RoutingError::DuplicatePlaceholder {
					path: path.to_string(),
					name: name.to_string(),
				});
			}

			literal.push_str(&rest[..open]);

			let requirement = match requirements.get(name) {
				Some(requirement) => {
					let anchored = RegexBuilder::new(&format!("^(?:{})$", requirement))
						.size_limit(MAX_ROUTE_REGEX_SIZE)
						.build()
						.map_err(|source| RoutingError::InvalidRequirement {
							name: name.to_string(),
							requirement: requirement.clone(),
							source,
						})?;
					constrained.insert(name.to_string(), (requirement.clone(), anchored));
					requirement.as_str()
				}
				None => DEFAULT_REQUIREMENT,
			};

			let is_optional = defaults.contains_key(name);
			let separator = is_optional && literal.ends_with('/');
			if separator {
				literal.pop();
			}
			source.push_str(&regex::escape(&literal));
			if separator {
				let _ = write!(source, "(?:/(?P<{}>(?:{})))?", name, requirement);
			} else {
				let _ = write!(source, "(?P<{}>(?:{}))", name, requirement);
				if is_optional {
					source.push('?');
				}
			}
			if !literal.is_empty() {
				tokens.push(TemplateToken::Literal(std::mem::take(&mut literal)));
			}
			tokens.push(TemplateToken::Variable {
				index: variables.len(),
				separator,
			});

			variables.push(name.to_string());
			optional.push(is_optional);
			rest = &rest[open + name.len() + 2..];
		}

		literal.push_str(rest);
		source.push_str(&regex::escape(&literal));
		source.push('$');
		if !literal.is_empty() {
			tokens.push(TemplateToken::Literal(literal));
		}

		let regex = RegexBuilder::new(&source)
			.size_limit(MAX_ROUTE_REGEX_SIZE)
			.build()
			.map_err(|source| RoutingError::InvalidPattern {
				path: path.to_string(),
				source,
			})?;

		tracing::trace!(path, pattern = %source, "compiled route");

		Ok(Self {
			source,
			regex,
			tokens,
			variables,
			optional,
			requirements: constrained,
		})
	}

	/// The anchored regex source.
	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn regex(&self) -> &Regex {
		&self.regex
	}

	/// The template split into literal text and placeholders.
	pub fn tokens(&self) -> &[TemplateToken] {
		&self.tokens
	}

	/// Placeholder names in template order.
	pub fn variables(&self) -> &[String] {
		&self.variables
	}

	/// Whether `name` is a placeholder that has a default.
	pub fn is_optional(&self, name: &str) -> bool {
		self.variables
			.iter()
			.position(|v| v == name)
			.is_some_and(|i| self.optional[i])
	}

	/// Whether the template has no placeholders.
	pub fn is_static(&self) -> bool {
		self.variables.is_empty()
	}

	/// Requirement text and its anchored regex for `name`, if constrained.
	pub fn requirement(&self, name: &str) -> Option<(&str, &Regex)> {
		self.requirements
			.get(name)
			.map(|(text, regex)| (text.as_str(), regex))
	}

	/// Run the pattern against `path`, ignoring any method restriction.
	///
	/// Returns only the placeholders that captured something; omitted
	/// optional segments are absent from the result.
	pub fn captures(&self, path: &str) -> Option<Parameters> {
		let caps = self.regex.captures(path)?;
		Some(
			self.variables
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), ParamValue::from(m.as_str())))
				})
				.collect(),
		)
	}

	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}
}

/// Returns the placeholder name if `text` starts with `{identifier}`.
fn placeholder_at(text: &str) -> Option<&str> {
	let inner = text.strip_prefix('{')?;
	let close = inner.find('}')?;
	let name = &inner[..close];
	let mut chars = name.chars();
	let first = chars.next()?;
	if !(first.is_ascii_alphabetic() || first == '_') {
		return None;
	}
	if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
		Some(name)
	} else {
		None
	}
}
