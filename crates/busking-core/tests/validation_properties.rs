//! Property-based tests for booking validation.
//!
//! Validation must evaluate every rule on every call: the error set is exactly
//! the union of the individual field checks, whatever the input.

use busking_core::{
    BookingInput, BusId, Field, validate,
    validation::{is_valid_email, is_valid_phone, parse_seats},
};
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{0,3}",
        "[a-z]{1,8}",
        "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{2,3}",
        "[0-9]{8,12}",
        "-?[0-9]{1,4}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn prop_errors_are_union_of_field_rules(
        name in field_strategy(),
        email in field_strategy(),
        phone in field_strategy(),
        seats in field_strategy(),
    ) {
        let errors = validate(&name, &email, &phone, &seats);

        prop_assert_eq!(errors.get(Field::Name).is_some(), name.trim().is_empty());
        prop_assert_eq!(errors.get(Field::Email).is_some(), !is_valid_email(&email));
        prop_assert_eq!(errors.get(Field::Phone).is_some(), !is_valid_phone(&phone));
        prop_assert_eq!(errors.get(Field::Seats).is_some(), parse_seats(&seats).is_none());
    }

    #[test]
    fn prop_ten_digits_are_a_phone(phone in "[0-9]{10}") {
        prop_assert!(is_valid_phone(&phone));
    }

    #[test]
    fn prop_other_digit_lengths_are_not_a_phone(
        len in (0usize..20).prop_filter("not ten", |l| *l != 10)
    ) {
        let phone = "7".repeat(len);
        prop_assert!(!is_valid_phone(&phone));
    }

    #[test]
    fn prop_positive_counts_are_seats(seats in 1u32..=u32::MAX) {
        prop_assert_eq!(parse_seats(&seats.to_string()).map(|s| s.get()), Some(seats));
    }

    #[test]
    fn prop_non_positive_counts_are_rejected(seats in i64::MIN..=0) {
        prop_assert_eq!(parse_seats(&seats.to_string()), None);
    }

    #[test]
    fn prop_request_only_exists_for_valid_input(
        name in field_strategy(),
        email in field_strategy(),
        phone in field_strategy(),
        seats in field_strategy(),
    ) {
        let input = BookingInput { name, email, phone, seats };
        let valid = input.validate().is_empty();

        match input.to_request(Some(BusId::from(1))) {
            Ok(request) => {
                prop_assert!(valid);
                prop_assert!(request.seats().get() > 0);
            },
            Err(errors) => {
                prop_assert!(!valid);
                prop_assert_eq!(errors, input.validate());
            },
        }
    }
}

#[test]
fn fully_invalid_submission_produces_four_messages() {
    let errors = validate("", "x", "123", "0");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.iter().map(|(field, _)| field).collect::<Vec<_>>(), Field::ALL.to_vec());
}
