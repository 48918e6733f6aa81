//! Inquiry intake: validation, persistence, and best-effort notification
//! for booking, event, and contact submissions.

pub mod domain;
pub mod notify;
pub mod repository;
pub mod router;
pub mod service;
pub mod validate;

#[cfg(test)]
mod tests;

pub use domain::{
    BookingInquiryRequest, ContactRequest, ContactSubmission, EventInquiry, EventInquiryRequest,
    EventInquiryView, EventKind, Inquiry, InquiryKind, InquiryStatus, InquiryView, NewEventInquiry,
    NewInquiry,
};
pub use notify::{EmailMessage, MailError, Mailer};
pub use repository::{InquiryStore, InquiryStoreError};
pub use router::inquiries_router;
pub use service::{InquiryService, InquiryServiceError};
pub use validate::ValidationError;
