//! Arithmetic related constants

// =============================================================================
// Numeric identities
// =============================================================================

/// Additive identity, returned by the variadic sum of an empty sequence
pub const ADDITIVE_IDENTITY: i64 = 0;
