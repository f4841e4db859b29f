//! Field-by-field temporal binding with error aggregation.

use tempora_core::ConverterRegistry;
use tempora_core::RegistryError;
use tracing::trace;

use crate::error::{BindRejection, FieldError};

/// Failure code for a required field that was absent or blank.
pub const MISSING_VALUE: &str = "missing-value";

/// Binds raw request strings to temporal values through the registry,
/// collecting every field failure before the request is rejected.
///
/// ```rust
/// use chrono::NaiveDate;
/// use tempora_axum::FieldBinder;
/// use tempora_core::ConverterRegistry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = ConverterRegistry::with_tzdb()?;
/// let mut binder = FieldBinder::new(&registry);
/// let from: Option<NaiveDate> = binder.required("from", Some("2024-03-01"));
/// let to: Option<NaiveDate> = binder.required("to", Some("2024-03-31"));
/// binder.finish()?;
/// # Ok(())
/// # }
/// ```
pub struct FieldBinder<'a> {
    registry: &'a ConverterRegistry,
    errors: Vec<FieldError>,
    registry_fault: Option<RegistryError>,
}

impl<'a> FieldBinder<'a> {
    /// Start a bind pass against the given registry.
    pub fn new(registry: &'a ConverterRegistry) -> Self {
        Self { registry, errors: Vec::new(), registry_fault: None }
    }

    /// Bind a required field. A missing or blank value is recorded as a
    /// field error; so is unparseable text. Returns `None` on failure so the
    /// caller can keep binding the remaining fields.
    pub fn required<T: 'static>(&mut self, field: &str, raw: Option<&str>) -> Option<T> {
        match raw {
            None | Some("") => {
                self.errors.push(FieldError {
                    field: field.to_string(),
                    value: None,
                    code: MISSING_VALUE,
                    message: "a value is required".to_string(),
                });
                None
            }
            Some(text) => self.parse_field(field, text),
        }
    }

    /// Bind an optional field: a missing or blank value is simply `None`,
    /// while present-but-unparseable text is still a field error.
    pub fn optional<T: 'static>(&mut self, field: &str, raw: Option<&str>) -> Option<T> {
        match raw {
            None | Some("") => None,
            Some(text) => self.parse_field(field, text),
        }
    }

    fn parse_field<T: 'static>(&mut self, field: &str, text: &str) -> Option<T> {
        let codec = match self.registry.resolve::<T>() {
            Ok(codec) => codec,
            Err(fault) => {
                // A registry miss poisons the whole pass; it outranks any
                // field errors because the handler itself is miswired.
                self.registry_fault.get_or_insert(fault);
                return None;
            }
        };
        match codec.parse(text) {
            Ok(value) => Some(value),
            Err(failure) => {
                trace!(field, code = failure.code(), "temporal field failed to bind");
                self.errors.push(FieldError {
                    field: field.to_string(),
                    value: Some(text.to_string()),
                    code: failure.code(),
                    message: failure.detail().to_string(),
                });
                None
            }
        }
    }

    /// Number of field errors accumulated so far.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// End the bind pass: `Ok` when every bound field parsed, otherwise the
    /// aggregated rejection.
    pub fn finish(self) -> Result<(), BindRejection> {
        if let Some(fault) = self.registry_fault {
            return Err(BindRejection::Registry(fault));
        }
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(BindRejection::Validation { errors: self.errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};
    use pretty_assertions::assert_eq;

    fn registry() -> ConverterRegistry {
        ConverterRegistry::with_tzdb().unwrap()
    }

    #[test]
    fn valid_fields_bind_and_finish_cleanly() {
        let registry = registry();
        let mut binder = FieldBinder::new(&registry);
        let from: Option<NaiveDate> = binder.required("from", Some("2024-03-01"));
        let wait: Option<TimeDelta> = binder.optional("wait", Some("0:10:00"));
        assert_eq!(from, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert_eq!(wait, Some(TimeDelta::minutes(10)));
        assert!(binder.finish().is_ok());
    }

    #[test]
    fn invalid_field_produces_exactly_one_error_and_rejects_the_request() {
        // Scenario: a LocalDate field bound from `not-a-date` yields one
        // validation error naming that field, and the pass as a whole fails.
        let registry = registry();
        let mut binder = FieldBinder::new(&registry);
        let value: Option<NaiveDate> = binder.required("from", Some("not-a-date"));
        assert_eq!(value, None);

        let rejection = binder.finish().unwrap_err();
        let errors = rejection.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "from");
        assert_eq!(errors[0].value.as_deref(), Some("not-a-date"));
        assert_eq!(errors[0].code, "invalid-local-date");
    }

    #[test]
    fn errors_accumulate_across_fields() {
        let registry = registry();
        let mut binder = FieldBinder::new(&registry);
        let _: Option<NaiveDate> = binder.required("from", Some("not-a-date"));
        let _: Option<NaiveDate> = binder.required("to", None);
        let _: Option<TimeDelta> = binder.required("wait", Some("ten minutes"));
        assert_eq!(binder.error_count(), 3);

        let rejection = binder.finish().unwrap_err();
        let codes: Vec<_> = rejection.field_errors().iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["invalid-local-date", MISSING_VALUE, "invalid-duration"]);
    }

    #[test]
    fn missing_optional_field_is_not_an_error() {
        let registry = registry();
        let mut binder = FieldBinder::new(&registry);
        let value: Option<NaiveDate> = binder.optional("from", None);
        assert_eq!(value, None);
        let blank: Option<NaiveDate> = binder.optional("to", Some(""));
        assert_eq!(blank, None);
        assert!(binder.finish().is_ok());
    }

    #[test]
    fn unregistered_type_is_a_registry_fault_not_a_field_error() {
        let registry = registry();
        let mut binder = FieldBinder::new(&registry);
        let value: Option<u64> = binder.required("page", Some("3"));
        assert_eq!(value, None);
        assert!(matches!(binder.finish(), Err(BindRejection::Registry(_))));
    }
}
