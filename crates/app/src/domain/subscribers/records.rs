//! Subscriber Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Subscriber UUID
pub type SubscriberUuid = TypedUuid<SubscriberRecord>;

/// Subscriber Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberRecord {
    pub uuid: SubscriberUuid,
    pub email: String,
    pub subscribed_at: Timestamp,
}
