use crate::models::user::{IdentifierKind, mask_identifier};

use googletest::assert_that;
use googletest::prelude::eq;

// =========================================================================
// Identifier classification
// =========================================================================

#[test]
fn given_identifier_with_at_sign_when_classify_then_email() {
    assert_that!(IdentifierKind::classify("a@b.com"), eq(IdentifierKind::Email));
}

#[test]
fn given_identifier_without_at_sign_when_classify_then_phone() {
    assert_that!(
        IdentifierKind::classify("09121234567"),
        eq(IdentifierKind::Phone)
    );
}

#[test]
fn given_kind_when_round_trip_through_str_then_same_kind() {
    for kind in [IdentifierKind::Email, IdentifierKind::Phone] {
        assert_that!(kind.as_str().parse::<IdentifierKind>().unwrap(), eq(kind));
    }
}

// =========================================================================
// Feed masking
// =========================================================================

#[test]
fn given_email_when_mask_then_first_three_of_local_part_kept() {
    assert_that!(
        mask_identifier("john@example.com").as_str(),
        eq("joh***@example.com")
    );
}

#[test]
fn given_short_local_part_when_mask_then_whole_local_part_kept() {
    assert_that!(mask_identifier("ab@x.io").as_str(), eq("ab***@x.io"));
}

#[test]
fn given_eleven_digit_phone_when_mask_then_middle_digits_hidden() {
    assert_that!(mask_identifier("09121234567").as_str(), eq("0912****567"));
}

#[test]
fn given_short_phone_when_mask_then_no_suffix() {
    // Fewer than 9 characters: nothing survives past the mask.
    assert_that!(mask_identifier("0912").as_str(), eq("0912****"));
}
