//! # tempora-axum
//!
//! Model-binding adapter over the `tempora-core` registry: raw request
//! strings become typed temporal values, and every invalid field is
//! collected into one structured validation rejection instead of aborting
//! on the first failure.
//!
//! The host extracts raw field strings however it likes (query, form,
//! path); [`FieldBinder`] only does the string-to-value step, so it stays
//! framework-version agnostic while [`BindRejection`] plugs into axum via
//! `IntoResponse` (HTTP 400 with a JSON error list, or 500 when the binder
//! itself is miswired).
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tempora_axum::{BindRejection, FieldBinder};
//! use tempora_core::ConverterRegistry;
//!
//! fn bind_range(
//!     registry: &ConverterRegistry,
//!     from: Option<&str>,
//!     to: Option<&str>,
//! ) -> Result<(NaiveDate, Option<NaiveDate>), BindRejection> {
//!     let mut binder = FieldBinder::new(registry);
//!     let from = binder.required("from", from);
//!     let to = binder.optional("to", to);
//!     binder.finish()?;
//!     // `finish` returned Ok, so every bound field parsed.
//!     Ok((from.expect("checked by finish"), to))
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ConverterRegistry::with_tzdb()?;
//! let (from, to) = bind_range(&registry, Some("2024-03-01"), None)?;
//! assert_eq!(to, None);
//! # Ok(())
//! # }
//! ```

mod binder;
mod error;

pub use binder::{FieldBinder, MISSING_VALUE};
pub use error::{BindRejection, FieldError};
