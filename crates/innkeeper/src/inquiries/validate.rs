use chrono::NaiveDate;

use super::domain::{
    BookingInquiryRequest, ContactRequest, ContactSubmission, EventInquiryRequest, EventKind,
    InquiryKind, NewEventInquiry, NewInquiry,
};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 100;
const PHONE_MAX: usize = 20;
const KIND_MAX: usize = 50;
const VENUE_MAX: usize = 50;
const MESSAGE_MAX: usize = 2000;
const MESSAGE_MIN: usize = 10;

pub const BOOKING_GUESTS_MAX: u32 = 10;
pub const EVENT_GUESTS_MAX: u32 = 500;

const DEFAULT_CONTACT_SUBJECT: &str = "General Inquiry";

/// Validation errors raised before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid email format")]
    InvalidEmail,
    #[error("invalid phone format, use international format like +254700000000")]
    InvalidPhone,
    #[error("invalid inquiry type, must be booking or general")]
    InvalidInquiryKind,
    #[error("invalid event type, must be wedding, corporate, birthday, reunion, graduation, or other")]
    InvalidEventKind,
    #[error("invalid {field} date, use YYYY-MM-DD")]
    InvalidDate { field: &'static str },
    #[error("check-in date cannot be in the past")]
    CheckInPast,
    #[error("check-out date must be after check-in date")]
    CheckOutNotAfterCheckIn,
    #[error("event date must be today or in the future")]
    EventDatePast,
    #[error("guest count must be between {min} and {max}")]
    GuestCountOutOfRange { min: u32, max: u32 },
    #[error("message must be at least {min} characters long")]
    MessageTooShort { min: usize },
    #[error("unknown or inactive room id {0}")]
    UnknownRoom(i64),
}

/// Validate a booking-inquiry payload into a record ready to persist.
/// `today` anchors the not-in-the-past checks.
pub fn booking(
    request: BookingInquiryRequest,
    today: NaiveDate,
) -> Result<NewInquiry, ValidationError> {
    let missing = missing_fields(&[
        ("name", &request.name),
        ("email", &request.email),
        ("phone", &request.phone),
        ("inquiry_type", &request.inquiry_type),
        ("message", &request.message),
    ]);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let name = sanitize(request.name.as_deref().unwrap_or_default(), NAME_MAX);
    let email = sanitize(request.email.as_deref().unwrap_or_default(), EMAIL_MAX);
    let phone = sanitize(request.phone.as_deref().unwrap_or_default(), PHONE_MAX);
    let kind_raw = sanitize(request.inquiry_type.as_deref().unwrap_or_default(), KIND_MAX);
    let message = sanitize(request.message.as_deref().unwrap_or_default(), MESSAGE_MAX);

    if !email_is_valid(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !phone_is_valid(&phone) {
        return Err(ValidationError::InvalidPhone);
    }
    let kind = InquiryKind::parse(&kind_raw).ok_or(ValidationError::InvalidInquiryKind)?;
    if message.chars().count() < MESSAGE_MIN {
        return Err(ValidationError::MessageTooShort { min: MESSAGE_MIN });
    }

    // Stay dates are part of the booking contract; a general inquiry may
    // still carry them and gets the same ordering checks when it does.
    let (check_in, check_out) = match kind {
        InquiryKind::Booking => {
            let missing = missing_fields(&[
                ("check_in", &request.check_in),
                ("check_out", &request.check_out),
            ]);
            if !missing.is_empty() {
                return Err(ValidationError::MissingFields(missing));
            }
            let (check_in, check_out) = stay_dates(
                request.check_in.as_deref().unwrap_or_default(),
                request.check_out.as_deref().unwrap_or_default(),
                today,
            )?;
            (Some(check_in), Some(check_out))
        }
        InquiryKind::General => match (request.check_in.as_deref(), request.check_out.as_deref()) {
            (Some(check_in), Some(check_out)) => {
                let (check_in, check_out) = stay_dates(check_in, check_out, today)?;
                (Some(check_in), Some(check_out))
            }
            _ => (None, None),
        },
    };

    if let Some(guests) = request.guests {
        if !(1..=BOOKING_GUESTS_MAX).contains(&guests) {
            return Err(ValidationError::GuestCountOutOfRange {
                min: 1,
                max: BOOKING_GUESTS_MAX,
            });
        }
    }

    Ok(NewInquiry {
        name,
        email,
        phone,
        kind,
        room_id: request.room_id,
        check_in,
        check_out,
        guests: request.guests,
        message,
    })
}

/// Validate an event-inquiry payload into a record ready to persist.
pub fn event(
    request: EventInquiryRequest,
    today: NaiveDate,
) -> Result<NewEventInquiry, ValidationError> {
    let mut missing = missing_fields(&[
        ("name", &request.name),
        ("email", &request.email),
        ("phone", &request.phone),
        ("event_type", &request.event_type),
        ("event_date", &request.event_date),
        ("message", &request.message),
    ]);
    if request.guest_count.is_none() {
        missing.push("guest_count");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let name = sanitize(request.name.as_deref().unwrap_or_default(), NAME_MAX);
    let email = sanitize(request.email.as_deref().unwrap_or_default(), EMAIL_MAX);
    let phone = sanitize(request.phone.as_deref().unwrap_or_default(), PHONE_MAX);
    let kind_raw = sanitize(request.event_type.as_deref().unwrap_or_default(), KIND_MAX);
    let message = sanitize(request.message.as_deref().unwrap_or_default(), MESSAGE_MAX);

    if !email_is_valid(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !phone_is_valid(&phone) {
        return Err(ValidationError::InvalidPhone);
    }
    let event_kind = EventKind::parse(&kind_raw).ok_or(ValidationError::InvalidEventKind)?;

    let event_date = parse_date(
        request.event_date.as_deref().unwrap_or_default(),
        "event_date",
    )?;
    if event_date < today {
        return Err(ValidationError::EventDatePast);
    }

    let guest_count = request.guest_count.unwrap_or_default();
    if !(1..=EVENT_GUESTS_MAX).contains(&guest_count) {
        return Err(ValidationError::GuestCountOutOfRange {
            min: 1,
            max: EVENT_GUESTS_MAX,
        });
    }

    if message.chars().count() < MESSAGE_MIN {
        return Err(ValidationError::MessageTooShort { min: MESSAGE_MIN });
    }

    let venue_preference = request
        .venue_preference
        .as_deref()
        .map(|value| sanitize(value, VENUE_MAX))
        .filter(|value| !value.is_empty());

    Ok(NewEventInquiry {
        name,
        email,
        phone,
        event_kind,
        event_date,
        guest_count,
        venue_preference,
        message,
    })
}

/// Validate a contact-form payload. The result persists as a `general`
/// inquiry; the subject line only feeds the notification emails.
pub fn contact(request: ContactRequest) -> Result<ContactSubmission, ValidationError> {
    let missing = missing_fields(&[
        ("name", &request.name),
        ("email", &request.email),
        ("message", &request.message),
    ]);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let name = sanitize(request.name.as_deref().unwrap_or_default(), NAME_MAX);
    let email = sanitize(request.email.as_deref().unwrap_or_default(), EMAIL_MAX);
    let phone = sanitize(request.phone.as_deref().unwrap_or_default(), PHONE_MAX);
    let message = sanitize(request.message.as_deref().unwrap_or_default(), MESSAGE_MAX);

    if !email_is_valid(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if message.chars().count() < MESSAGE_MIN {
        return Err(ValidationError::MessageTooShort { min: MESSAGE_MIN });
    }

    let subject = request
        .subject
        .as_deref()
        .map(|value| sanitize(value, NAME_MAX))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTACT_SUBJECT.to_string());

    Ok(ContactSubmission {
        inquiry: NewInquiry {
            name,
            email,
            phone,
            kind: InquiryKind::General,
            room_id: None,
            check_in: None,
            check_out: None,
            guests: None,
            message,
        },
        subject,
    })
}

fn missing_fields(fields: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.as_deref().map(str::trim).unwrap_or_default().is_empty())
        .map(|(field, _)| *field)
        .collect()
}

fn sanitize(value: &str, max_length: usize) -> String {
    value.trim().chars().take(max_length).collect()
}

fn email_is_valid(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && domain.split('.').all(|segment| !segment.is_empty())
        }
        _ => false,
    }
}

fn phone_is_valid(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }

    (7..=15).contains(&digits.len()) && digits.chars().all(|ch| ch.is_ascii_digit())
}

fn parse_date(raw: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field })
}

fn stay_dates(
    check_in: &str,
    check_out: &str,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let check_in = parse_date(check_in, "check_in")?;
    let check_out = parse_date(check_out, "check_out")?;

    if check_in < today {
        return Err(ValidationError::CheckInPast);
    }
    if check_out <= check_in {
        return Err(ValidationError::CheckOutNotAfterCheckIn);
    }

    Ok((check_in, check_out))
}
