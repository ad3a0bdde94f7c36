//! Booking form validation.
//!
//! A pure check over the four raw text inputs of the booking form. Every rule
//! is evaluated on every call so that each invalid field gets its own message
//! at the same time; there is no early return on the first failure.

use std::{collections::BTreeMap, fmt, num::NonZeroU32, sync::LazyLock};

use regex::Regex;

/// Message for an empty (or whitespace-only) name.
pub const NAME_REQUIRED: &str = "Name is required";
/// Message for an email that is not `local@domain.tld` shaped.
pub const INVALID_EMAIL: &str = "Invalid email format";
/// Message for a phone number that is not exactly ten digits.
pub const INVALID_PHONE: &str = "Phone number must be 10 digits";
/// Message for a seat count that is not a positive integer.
pub const INVALID_SEATS: &str = "Number of seats must be a positive number";

#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invariant: email pattern is valid")
});

#[allow(clippy::expect_used)]
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("invariant: phone pattern is valid"));

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Passenger name.
    Name,
    /// Passenger email.
    Email,
    /// Passenger phone.
    Phone,
    /// Number of seats.
    Seats,
}

impl Field {
    /// All validated fields, in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Seats];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Seats => "seats",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation messages for one submit attempt.
///
/// A field without an entry is valid. Empty means the whole input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    /// No field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `field`. `None` if the field is valid.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Invalid fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate the raw booking form inputs.
pub fn validate(name: &str, email: &str, phone: &str, seats: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if !is_valid_email(email) {
        errors.insert(Field::Email, INVALID_EMAIL);
    }
    if !is_valid_phone(phone) {
        errors.insert(Field::Phone, INVALID_PHONE);
    }
    if parse_seats(seats).is_none() {
        errors.insert(Field::Seats, INVALID_SEATS);
    }

    errors
}

/// Syntactic `local@domain.tld` check. No existence verification.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Parse the free-text seat count.
///
/// Surrounding whitespace is ignored; the rest must be ASCII digits. Signs,
/// decimals and exponents are rejected. `None` for zero or overflow.
pub fn parse_seats(seats: &str) -> Option<NonZeroU32> {
    let digits = seats.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().and_then(NonZeroU32::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_invalid_input_reports_every_field() {
        let errors = validate("", "x", "123", "0");

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
        assert_eq!(errors.get(Field::Phone), Some(INVALID_PHONE));
        assert_eq!(errors.get(Field::Seats), Some(INVALID_SEATS));
    }

    #[test]
    fn valid_input_has_no_errors() {
        let errors = validate("Ann", "ann@example.com", "1234567890", "2");
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn whitespace_name_is_required() {
        let errors = validate(" \t ", "ann@example.com", "1234567890", "2");
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(Field::Name, NAME_REQUIRED)]);
    }

    #[test]
    fn seats() {
        assert_eq!(parse_seats("5").map(NonZeroU32::get), Some(5));
        assert_eq!(parse_seats(" 12 ").map(NonZeroU32::get), Some(12));

        for rejected in ["-1", "0", "abc", "", "   ", "+3", "2.5", "1e3", "99999999999"] {
            assert_eq!(parse_seats(rejected), None, "{rejected:?} should be rejected");
        }
    }

    #[test]
    fn email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));

        for rejected in ["a@b", "a.com", "a @b.com", "a@@b.com", "@b.com", "a@b.com "] {
            assert!(!is_valid_email(rejected), "{rejected:?} should be rejected");
        }
    }

    #[test]
    fn phone() {
        assert!(is_valid_phone("0123456789"));

        for rejected in ["123456789", "12345678901", "12345-6789", "123456789a", " 1234567890"] {
            assert!(!is_valid_phone(rejected), "{rejected:?} should be rejected");
        }
    }

    #[test]
    fn display_lists_fields_in_form_order() {
        let errors = validate("", "ok@mail.com", "1", "1");
        assert_eq!(
            errors.to_string(),
            "name: Name is required; phone: Phone number must be 10 digits"
        );
    }
}
