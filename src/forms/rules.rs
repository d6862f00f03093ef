//! Field rules shared by the tag forms.
//!
//! Every rule is a pure function returning `None` when the value passes and a
//! [`Violation`] otherwise. [`check`] folds any number of rule outcomes into
//! `validator`'s aggregate error type, so all violations are reported
//! together and evaluation order never changes the outcome.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// A single failed rule for a named field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub error: ValidationError,
}

impl Violation {
    fn new(field: &'static str, code: &'static str, message: String) -> Self {
        Self {
            field,
            error: ValidationError::new(code).with_message(Cow::Owned(message)),
        }
    }
}

/// Outcome of a single rule.
pub type Rule = Option<Violation>;

/// The value must be non-blank.
pub fn required(field: &'static str, value: &str) -> Rule {
    value
        .trim()
        .is_empty()
        .then(|| Violation::new(field, "required", format!("{field} cannot be empty")))
}

/// The value must be at most `max` bytes long.
pub fn max_size(field: &'static str, value: &str, max: usize) -> Rule {
    (value.len() > max).then(|| {
        Violation::new(
            field,
            "max_size",
            format!("{field} must be at most {max} bytes"),
        )
    })
}

/// The value must lie in `min..=max`.
pub fn range(field: &'static str, value: i32, min: i32, max: i32) -> Rule {
    (!(min..=max).contains(&value)).then(|| {
        Violation::new(
            field,
            "range",
            format!("{field} must be between {min} and {max}"),
        )
    })
}

/// The value must be at least `min`.
pub fn min(field: &'static str, value: i32, min: i32) -> Rule {
    (value < min).then(|| Violation::new(field, "min", format!("{field} must be at least {min}")))
}

/// Parses a raw parameter as an integer.
pub fn integer(field: &'static str, raw: &str) -> Result<i32, Violation> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| Violation::new(field, "integer", format!("{field} must be an integer")))
}

/// Folds rule outcomes into a single result.
pub fn check<I>(rules: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = Rule>,
{
    let errors = rules
        .into_iter()
        .flatten()
        .fold(ValidationErrors::new(), |mut errors, violation| {
            errors.add(violation.field, violation.error);
            errors
        });

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
