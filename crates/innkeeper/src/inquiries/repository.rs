use async_trait::async_trait;

use super::domain::{EventInquiry, Inquiry, NewEventInquiry, NewInquiry};

/// Storage abstraction for inquiry rows. Each write is a single row; there
/// is no idempotency key, so identical submissions produce distinct rows.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError>;
    async fn insert_event(
        &self,
        inquiry: NewEventInquiry,
    ) -> Result<EventInquiry, InquiryStoreError>;
    async fn recent(&self, limit: u32) -> Result<Vec<Inquiry>, InquiryStoreError>;
    async fn recent_events(&self, limit: u32) -> Result<Vec<EventInquiry>, InquiryStoreError>;
}

/// Error enumeration for inquiry store failures.
#[derive(Debug, thiserror::Error)]
pub enum InquiryStoreError {
    #[error("inquiry store unavailable: {0}")]
    Unavailable(String),
}
