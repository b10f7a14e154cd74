//! Settings and route-file module.
//!
//! # Examples
//!
//! ```rust
//! use waymark::conf::RoutingSettings;
//!
//! assert!(RoutingSettings::default().warm_up);
//! ```

pub use waymark_conf::*;
