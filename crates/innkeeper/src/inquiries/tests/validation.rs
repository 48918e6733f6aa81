use chrono::NaiveDate;

use super::common::*;
use crate::inquiries::domain::{EventKind, InquiryKind};
use crate::inquiries::validate::{self, ValidationError, BOOKING_GUESTS_MAX, EVENT_GUESTS_MAX};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 1).expect("valid date")
}

#[test]
fn booking_accepts_a_well_formed_request() {
    let inquiry = validate::booking(booking_request(), today()).expect("request validates");

    assert_eq!(inquiry.name, "Test User");
    assert_eq!(inquiry.kind, InquiryKind::Booking);
    assert_eq!(
        inquiry.check_in,
        NaiveDate::from_ymd_opt(2099, 3, 15)
    );
    assert_eq!(
        inquiry.check_out,
        NaiveDate::from_ymd_opt(2099, 3, 17)
    );
    assert_eq!(inquiry.guests, Some(2));
}

#[test]
fn booking_enumerates_all_missing_fields() {
    let mut request = booking_request();
    request.name = None;
    request.email = Some("   ".to_string());
    request.message = None;

    let err = validate::booking(request, today()).expect_err("request is rejected");
    assert_eq!(
        err,
        ValidationError::MissingFields(vec!["name", "email", "message"])
    );
}

#[test]
fn booking_requires_stay_dates_for_booking_kind() {
    let mut request = booking_request();
    request.check_in = None;
    request.check_out = Some(String::new());

    let err = validate::booking(request, today()).expect_err("request is rejected");
    assert_eq!(
        err,
        ValidationError::MissingFields(vec!["check_in", "check_out"])
    );
}

#[test]
fn general_inquiry_does_not_require_stay_dates() {
    let mut request = booking_request();
    request.inquiry_type = Some("general".to_string());
    request.check_in = None;
    request.check_out = None;

    let inquiry = validate::booking(request, today()).expect("request validates");
    assert_eq!(inquiry.kind, InquiryKind::General);
    assert!(inquiry.check_in.is_none());
    assert!(inquiry.check_out.is_none());
}

#[test]
fn booking_rejects_malformed_email() {
    for email in ["plainaddress", "a b@example.com", "user@nodot", "user@@x.com", "@example.com"] {
        let mut request = booking_request();
        request.email = Some(email.to_string());
        let err = validate::booking(request, today()).expect_err("email is rejected");
        assert_eq!(err, ValidationError::InvalidEmail, "email: {email}");
    }
}

#[test]
fn booking_rejects_malformed_phone() {
    for phone in ["12345", "0712345678", "not-a-number", "+12345678901234567"] {
        let mut request = booking_request();
        request.phone = Some(phone.to_string());
        let err = validate::booking(request, today()).expect_err("phone is rejected");
        assert_eq!(err, ValidationError::InvalidPhone, "phone: {phone}");
    }
}

#[test]
fn booking_accepts_formatted_phone_numbers() {
    let mut request = booking_request();
    request.phone = Some("+254 (700) 000-000".to_string());
    validate::booking(request, today()).expect("formatted phone validates");
}

#[test]
fn booking_rejects_unknown_inquiry_kind() {
    let mut request = booking_request();
    request.inquiry_type = Some("walk_in".to_string());
    let err = validate::booking(request, today()).expect_err("kind is rejected");
    assert_eq!(err, ValidationError::InvalidInquiryKind);
}

#[test]
fn booking_rejects_short_messages() {
    let mut request = booking_request();
    request.message = Some("too short".to_string());
    let err = validate::booking(request, today()).expect_err("message is rejected");
    assert_eq!(err, ValidationError::MessageTooShort { min: 10 });
}

#[test]
fn booking_rejects_checkout_not_after_checkin() {
    let mut request = booking_request();
    request.check_in = Some("2099-03-17".to_string());
    request.check_out = Some("2099-03-17".to_string());
    let err = validate::booking(request, today()).expect_err("dates are rejected");
    assert_eq!(err, ValidationError::CheckOutNotAfterCheckIn);
}

#[test]
fn booking_rejects_past_checkin() {
    let mut request = booking_request();
    request.check_in = Some("2098-12-31".to_string());
    let err = validate::booking(request, today()).expect_err("dates are rejected");
    assert_eq!(err, ValidationError::CheckInPast);
}

#[test]
fn booking_rejects_malformed_dates() {
    let mut request = booking_request();
    request.check_in = Some("15/03/2099".to_string());
    let err = validate::booking(request, today()).expect_err("dates are rejected");
    assert_eq!(err, ValidationError::InvalidDate { field: "check_in" });
}

#[test]
fn booking_rejects_out_of_range_guest_counts() {
    for guests in [0, BOOKING_GUESTS_MAX + 1] {
        let mut request = booking_request();
        request.guests = Some(guests);
        let err = validate::booking(request, today()).expect_err("guests are rejected");
        assert_eq!(
            err,
            ValidationError::GuestCountOutOfRange {
                min: 1,
                max: BOOKING_GUESTS_MAX
            }
        );
    }
}

#[test]
fn booking_truncates_overlong_fields() {
    let mut request = booking_request();
    request.name = Some("x".repeat(500));
    let inquiry = validate::booking(request, today()).expect("request validates");
    assert_eq!(inquiry.name.chars().count(), 100);
}

#[test]
fn event_accepts_a_well_formed_request() {
    let inquiry = validate::event(event_request(), today()).expect("request validates");

    assert_eq!(inquiry.event_kind, EventKind::Wedding);
    assert_eq!(inquiry.guest_count, 150);
    assert_eq!(inquiry.venue_preference.as_deref(), Some("field_1"));
}

#[test]
fn event_enumerates_missing_fields() {
    let mut request = event_request();
    request.event_type = None;
    request.guest_count = None;

    let err = validate::event(request, today()).expect_err("request is rejected");
    assert_eq!(
        err,
        ValidationError::MissingFields(vec!["event_type", "guest_count"])
    );
}

#[test]
fn event_rejects_unknown_event_kind() {
    let mut request = event_request();
    request.event_type = Some("rave".to_string());
    let err = validate::event(request, today()).expect_err("kind is rejected");
    assert_eq!(err, ValidationError::InvalidEventKind);
}

#[test]
fn event_rejects_past_dates() {
    let mut request = event_request();
    request.event_date = Some("2098-06-20".to_string());
    let err = validate::event(request, today()).expect_err("date is rejected");
    assert_eq!(err, ValidationError::EventDatePast);
}

#[test]
fn event_accepts_today_as_event_date() {
    let mut request = event_request();
    request.event_date = Some("2099-01-01".to_string());
    validate::event(request, today()).expect("today validates");
}

#[test]
fn event_rejects_out_of_range_guest_counts() {
    let mut request = event_request();
    request.guest_count = Some(EVENT_GUESTS_MAX + 1);
    let err = validate::event(request, today()).expect_err("guests are rejected");
    assert_eq!(
        err,
        ValidationError::GuestCountOutOfRange {
            min: 1,
            max: EVENT_GUESTS_MAX
        }
    );
}

#[test]
fn event_treats_blank_venue_preference_as_absent() {
    let mut request = event_request();
    request.venue_preference = Some("   ".to_string());
    let inquiry = validate::event(request, today()).expect("request validates");
    assert!(inquiry.venue_preference.is_none());
}

#[test]
fn contact_requires_name_email_and_message() {
    let mut request = contact_request();
    request.email = None;
    let err = validate::contact(request).expect_err("request is rejected");
    assert_eq!(err, ValidationError::MissingFields(vec!["email"]));
}

#[test]
fn contact_defaults_subject_and_stores_as_general() {
    let submission = validate::contact(contact_request()).expect("request validates");
    assert_eq!(submission.subject, "General Inquiry");
    assert_eq!(submission.inquiry.kind, InquiryKind::General);
    assert!(submission.inquiry.room_id.is_none());
    assert!(submission.inquiry.phone.is_empty());
}

#[test]
fn contact_keeps_a_provided_subject() {
    let mut request = contact_request();
    request.subject = Some("Airport pickup".to_string());
    let submission = validate::contact(request).expect("request validates");
    assert_eq!(submission.subject, "Airport pickup");
}
