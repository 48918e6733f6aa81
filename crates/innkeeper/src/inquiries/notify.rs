use async_trait::async_trait;
use chrono::NaiveDate;

use super::domain::{EventInquiry, Inquiry};
use crate::config::BusinessProfile;
use crate::rooms::domain::Room;

/// Outbound plain-text email rendered by the notification layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Mail transport seam. Delivery is best-effort: callers log failures and
/// never surface them to the submitter.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError>;
}

/// Mail dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

fn room_section(room: &Room) -> String {
    format!(
        "\nRoom Details:\n- Room: {}\n- Type: {}\n- Price: KSh {}/night\n",
        room.name, room.room_type, room.price_per_night
    )
}

fn stay_section(inquiry: &Inquiry) -> String {
    match (inquiry.check_in, inquiry.check_out) {
        (Some(check_in), Some(check_out)) => {
            let guests = inquiry
                .guests
                .map(|count| count.to_string())
                .unwrap_or_else(|| "Not specified".to_string());
            format!(
                "\nDates:\n- Check-in: {}\n- Check-out: {}\n- Guests: {}\n",
                long_date(check_in),
                long_date(check_out),
                guests
            )
        }
        _ => String::new(),
    }
}

fn contact_footer(business: &BusinessProfile) -> String {
    format!(
        "- Phone: {}\n- WhatsApp: {}\n- Email: {}",
        business.phone, business.whatsapp, business.email
    )
}

fn signature(business: &BusinessProfile) -> String {
    format!(
        "Warm regards,\nThe {name} Team\n\n---\n{name}\nGuest House | Leisure Gardens | Event Venue\n{location}",
        name = business.name,
        location = business.location
    )
}

/// Owner-facing notification for a room inquiry. Reply-to points at the
/// guest so the owner can answer directly.
pub fn booking_notification(
    inquiry: &Inquiry,
    room: Option<&Room>,
    business: &BusinessProfile,
) -> EmailMessage {
    let room_info = room.map(room_section).unwrap_or_default();
    let dates_info = stay_section(inquiry);

    let body = format!(
        "You have received a new booking inquiry from the {name} website.\n\n\
         Guest Information:\n\
         - Name: {guest}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         - Inquiry Type: {kind}\n\
         {room_info}{dates_info}\n\
         Message:\n{message}\n\n\
         ---\n\
         This is an automated message from the {name} booking system.\n\
         Reply directly to this email to respond to the guest.",
        name = business.name,
        guest = inquiry.name,
        email = inquiry.email,
        phone = inquiry.phone,
        kind = inquiry.kind.label(),
        room_info = room_info,
        dates_info = dates_info,
        message = inquiry.message,
    );

    EmailMessage {
        to: business.email.clone(),
        reply_to: Some(inquiry.email.clone()),
        subject: format!("New Booking Inquiry - {}", inquiry.name),
        body,
    }
}

/// Confirmation sent back to the guest after a room inquiry.
pub fn booking_confirmation(
    inquiry: &Inquiry,
    room: Option<&Room>,
    business: &BusinessProfile,
) -> EmailMessage {
    let room_info = room.map(room_section).unwrap_or_default();
    let dates_info = stay_section(inquiry);

    let body = format!(
        "Dear {guest},\n\n\
         Thank you for your interest in {name}!\n\n\
         We have received your inquiry and will get back to you within 24 hours.\n\n\
         Your Inquiry Details:\n\
         - Inquiry Type: {kind}\n\
         {room_info}{dates_info}\n\
         In the meantime, if you have any urgent questions, feel free to reach us at:\n\
         {footer}\n\n\
         We look forward to hosting you!\n\n\
         {signature}",
        guest = inquiry.name,
        name = business.name,
        kind = inquiry.kind.label(),
        room_info = room_info,
        dates_info = dates_info,
        footer = contact_footer(business),
        signature = signature(business),
    );

    EmailMessage {
        to: inquiry.email.clone(),
        reply_to: None,
        subject: format!("Thank you for your inquiry - {}", business.name),
        body,
    }
}

/// Owner-facing notification for an event-venue inquiry.
pub fn event_notification(inquiry: &EventInquiry, business: &BusinessProfile) -> EmailMessage {
    let venue_info = inquiry
        .venue_preference
        .as_deref()
        .map(|venue| format!("- Venue Preference: {venue}\n"))
        .unwrap_or_default();

    let body = format!(
        "You have received a new event venue inquiry from the {name} website.\n\n\
         Client Information:\n\
         - Name: {client}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\n\
         Event Details:\n\
         - Event Type: {kind}\n\
         - Event Date: {date}\n\
         - Expected Guests: {guests}\n\
         {venue_info}\n\
         Message:\n{message}\n\n\
         ---\n\
         This is an automated message from the {name} booking system.\n\
         Reply directly to this email to respond to the client.",
        name = business.name,
        client = inquiry.name,
        email = inquiry.email,
        phone = inquiry.phone,
        kind = inquiry.event_kind.label(),
        date = long_date(inquiry.event_date),
        guests = inquiry.guest_count,
        venue_info = venue_info,
        message = inquiry.message,
    );

    EmailMessage {
        to: business.email.clone(),
        reply_to: Some(inquiry.email.clone()),
        subject: format!("New Event Inquiry - {}", inquiry.event_kind.label()),
        body,
    }
}

/// Confirmation sent back to the client after an event inquiry.
pub fn event_confirmation(inquiry: &EventInquiry, business: &BusinessProfile) -> EmailMessage {
    let body = format!(
        "Dear {client},\n\n\
         Thank you for considering {name} for your {kind}!\n\n\
         We have received your event inquiry and will get back to you within 24 hours to discuss:\n\
         - Venue availability for {date}\n\
         - Event setup options\n\
         - Catering arrangements\n\
         - Pricing and packages\n\n\
         Your Event Details:\n\
         - Event Type: {kind}\n\
         - Date: {date}\n\
         - Guest Count: {guests}\n\n\
         For immediate assistance, please contact us at:\n\
         {footer}\n\n\
         We look forward to making your event memorable!\n\n\
         {signature}",
        client = inquiry.name,
        name = business.name,
        kind = inquiry.event_kind.label(),
        date = long_date(inquiry.event_date),
        guests = inquiry.guest_count,
        footer = contact_footer(business),
        signature = signature(business),
    );

    EmailMessage {
        to: inquiry.email.clone(),
        reply_to: None,
        subject: format!("Thank you for your event inquiry - {}", business.name),
        body,
    }
}

/// Owner-facing notification for a contact-form submission.
pub fn contact_notification(
    inquiry: &Inquiry,
    subject: &str,
    business: &BusinessProfile,
) -> EmailMessage {
    let phone = if inquiry.phone.is_empty() {
        "Not provided"
    } else {
        inquiry.phone.as_str()
    };

    let body = format!(
        "You have received a new message from the {name} contact form.\n\n\
         Contact Information:\n\
         - Name: {sender}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         - Subject: {subject}\n\n\
         Message:\n{message}\n\n\
         ---\n\
         This is an automated message from the {name} website.\n\
         Reply directly to this email to respond to the sender.",
        name = business.name,
        sender = inquiry.name,
        email = inquiry.email,
        phone = phone,
        subject = subject,
        message = inquiry.message,
    );

    EmailMessage {
        to: business.email.clone(),
        reply_to: Some(inquiry.email.clone()),
        subject: format!("Contact Form: {subject}"),
        body,
    }
}

/// Confirmation sent back to the sender of a contact-form message.
pub fn contact_confirmation(inquiry: &Inquiry, business: &BusinessProfile) -> EmailMessage {
    let body = format!(
        "Dear {sender},\n\n\
         Thank you for reaching out to {name}!\n\n\
         We have received your message and will respond shortly.\n\n\
         Your Message:\n{message}\n\n\
         If you need immediate assistance, please contact us at:\n\
         {footer}\n\n\
         {signature}",
        sender = inquiry.name,
        name = business.name,
        message = inquiry.message,
        footer = contact_footer(business),
        signature = signature(business),
    );

    EmailMessage {
        to: inquiry.email.clone(),
        reply_to: None,
        subject: format!("Thank you for contacting {}", business.name),
        body,
    }
}
