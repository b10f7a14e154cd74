use crate::error::Result;
use crate::pattern::CompiledRoute;
use crate::value::{HANDLER_KEY, HandlerRef, ParamValue, Parameters};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Route definition
/// A path template plus its defaults, requirements and allowed methods.
///
/// The compiled pattern is derived lazily and cached. Every setter that
/// changes the path, the defaults or the requirements drops the cache;
/// mutation needs `&mut self`, so a route shared behind `&` or `Arc` is
/// never recompiled under a reader.
#[derive(Debug, Clone)]
pub struct Route {
	path: String,
	defaults: Parameters,
	requirements: IndexMap<String, String>,
	methods: Vec<String>,
	compiled: OnceCell<Arc<CompiledRoute>>,
}

impl Route {
	/// Create a new route
	///
	/// The path is normalized to start with `/`.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::Route;
	///
	/// let route = Route::new("users/{id}");
	/// assert_eq!(route.path(), "/users/{id}");
	/// assert!(route.methods().is_empty());
	/// ```
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: normalize_path(path.into()),
			defaults: Parameters::new(),
			requirements: IndexMap::new(),
			methods: Vec::new(),
			compiled: OnceCell::new(),
		}
	}

	/// Add a default value, making the placeholder of the same name optional
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::Route;
	///
	/// let route = Route::new("/blog/{page}").with_default("page", 1);
	/// assert!(route.has_default("page"));
	/// ```
	pub fn with_default(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.set_default(name, value);
		self
	}

	pub fn with_defaults(mut self, defaults: Parameters) -> Self {
		self.add_defaults(defaults);
		self
	}

	/// Constrain a placeholder with a regular expression
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::Route;
	///
	/// let route = Route::new("/article/{id}").with_requirement("id", r"^\d+$");
	/// assert_eq!(route.requirement("id"), Some(r"\d+"));
	/// ```
	pub fn with_requirement(mut self, name: impl Into<String>, regex: impl Into<String>) -> Self {
		self.add_requirement(name, regex);
		self
	}

	pub fn with_requirements(mut self, requirements: IndexMap<String, String>) -> Self {
		self.add_requirements(requirements);
		self
	}

	/// Restrict the route to the given HTTP methods
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::Route;
	///
	/// let route = Route::new("/api/users").with_methods(["post", "PUT", "post"]);
	/// assert_eq!(route.methods(), &["POST", "PUT"]);
	/// ```
	pub fn with_methods<I, S>(mut self, methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.set_methods(methods);
		self
	}

	/// Set the request handler reference under the reserved `_controller` key
	pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
		self.set_default(HANDLER_KEY, HandlerRef::new(handler));
		self
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn set_path(&mut self, path: impl Into<String>) {
		self.path = normalize_path(path.into());
		self.invalidate();
	}

	pub fn defaults(&self) -> &Parameters {
		&self.defaults
	}

	/// Replace every default
	pub fn set_defaults(&mut self, defaults: Parameters) {
		self.defaults = defaults;
		self.invalidate();
	}

	/// Merge defaults into the existing ones; given values win
	pub fn add_defaults(&mut self, defaults: Parameters) {
		self.defaults.extend(defaults);
		self.invalidate();
	}

	pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
		self.defaults.insert(name.into(), value.into());
		self.invalidate();
	}

	pub fn default(&self, name: &str) -> Option<&ParamValue> {
		self.defaults.get(name)
	}

	pub fn has_default(&self, name: &str) -> bool {
		self.defaults.contains_key(name)
	}

	pub fn requirements(&self) -> &IndexMap<String, String> {
		&self.requirements
	}

	/// Replace every requirement
	pub fn set_requirements(&mut self, requirements: IndexMap<String, String>) {
		self.requirements.clear();
		self.add_requirements(requirements);
	}

	/// Merge requirements into the existing ones; given values win
	pub fn add_requirements(&mut self, requirements: IndexMap<String, String>) {
		for (name, regex) in requirements {
			self.requirements.insert(name, normalize_requirement(&regex));
		}
		self.invalidate();
	}

	/// Set one requirement
	///
	/// A leading `^` and a trailing `$` are stripped, the compiled pattern
	/// anchors itself.
	pub fn add_requirement(&mut self, name: impl Into<String>, regex: impl Into<String>) {
		let regex = regex.into();
		self.requirements
			.insert(name.into(), normalize_requirement(&regex));
		self.invalidate();
	}

	pub fn requirement(&self, name: &str) -> Option<&str> {
		self.requirements.get(name).map(String::as_str)
	}

	pub fn has_requirement(&self, name: &str) -> bool {
		self.requirements.contains_key(name)
	}

	/// Allowed methods, upper-cased; empty means every method
	pub fn methods(&self) -> &[String] {
		&self.methods
	}

	/// Replace the allowed methods
	///
	/// Method filtering is independent of the compiled pattern, so the
	/// cache is kept.
	pub fn set_methods<I, S>(&mut self, methods: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.methods.clear();
		for method in methods {
			let method = method.as_ref().trim().to_ascii_uppercase();
			if !method.is_empty() && !self.methods.contains(&method) {
				self.methods.push(method);
			}
		}
	}

	/// Check if `method` passes the method restriction (case-insensitive)
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::Route;
	///
	/// let route = Route::new("/api/users").with_methods(["POST"]);
	/// assert!(route.allows_method("post"));
	/// assert!(!route.allows_method("GET"));
	/// assert!(Route::new("/any").allows_method("DELETE"));
	/// ```
	pub fn allows_method(&self, method: &str) -> bool {
		self.methods.is_empty()
			|| self
				.methods
				.iter()
				.any(|allowed| allowed.eq_ignore_ascii_case(method))
	}

	/// Typed access to the handler reference stored under `_controller`
	pub fn handler(&self) -> Option<&HandlerRef> {
		self.defaults.get(HANDLER_KEY).and_then(ParamValue::as_handler)
	}

	/// Compile the route, reusing the cached result
	///
	/// # Errors
	///
	/// Propagates the compile errors of [`CompiledRoute::compile`]. A
	/// failed compilation is not cached.
	pub fn compile(&self) -> Result<Arc<CompiledRoute>> {
		self.compiled
			.get_or_try_init(|| {
				CompiledRoute::compile(&self.path, &self.defaults, &self.requirements).map(Arc::new)
			})
			.cloned()
	}

	/// Placeholder names in template order
	pub fn variables(&self) -> Result<Vec<String>> {
		Ok(self.compile()?.variables().to_vec())
	}

	/// Whether the compiled pattern is currently cached
	pub fn is_compiled(&self) -> bool {
		self.compiled.get().is_some()
	}

	/// Match a path and method against this route
	///
	/// Returns `Ok(None)` when the method is not allowed or the path does
	/// not match. Captured values take precedence over defaults.
	///
	/// # Examples
	///
	/// ```
	/// use waymark_routing::{ParamValue, Route};
	///
	/// let route = Route::new("/blog/{page}")
	///     .with_default("page", "1")
	///     .with_requirement("page", r"\d+");
	///
	/// let params = route.match_path("/blog", "GET").unwrap().unwrap();
	/// assert_eq!(params.get("page"), Some(&ParamValue::from("1")));
	///
	/// let params = route.match_path("/blog/2", "GET").unwrap().unwrap();
	/// assert_eq!(params.get("page"), Some(&ParamValue::from("2")));
	/// ```
	pub fn match_path(&self, path: &str, method: &str) -> Result<Option<Parameters>> {
		if !self.allows_method(method) {
			return Ok(None);
		}
		self.match_path_any_method(path)
	}

	/// Match the path only, disregarding the method restriction
	pub fn match_path_any_method(&self, path: &str) -> Result<Option<Parameters>> {
		let compiled = self.compile()?;
		Ok(compiled.captures(path).map(|captured| {
			let mut merged = self.defaults.clone();
			merged.extend(captured);
			merged
		}))
	}

	fn invalidate(&mut self) {
		self.compiled.take();
	}
}

fn normalize_path(path: String) -> String {
	if path.starts_with('/') {
		path
	} else {
		format!("/{}", path)
	}
}

fn normalize_requirement(regex: &str) -> String {
	let regex = regex.strip_prefix('^').unwrap_or(regex);
	match regex.strip_suffix('$') {
		Some(stripped) if !stripped.ends_with('\\') => stripped.to_string(),
		_ => regex.to_string(),
	}
}
