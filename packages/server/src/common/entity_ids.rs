//! Typed ID definitions for domain entities.

// Re-export the core Id type
pub use super::id::Id;

/// Marker type for Donation entities.
pub struct DonationEntity;

/// Typed ID for Donation entities.
pub type DonationId = Id<DonationEntity>;
