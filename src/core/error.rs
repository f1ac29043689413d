//=========================================================================
// Section Errors
//=========================================================================
//
// Error taxonomy for mask computation, section construction, and
// library queries.
//
// Note: an empty openings sequence is NOT an error. It is reported as a
// warning and yields an unset mask (see `SectionConnector::compute_mask`).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::connector::MAX_LANES;

//=== SectionError ========================================================

/// Errors produced while building sections or querying a library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// An openings sequence is wider than an [`OpeningMask`](super::OpeningMask) can hold.
    #[error("{lanes} lanes exceed the maximum of {max}", max = MAX_LANES)]
    TooManyLanes { lanes: usize },

    /// A section's lane count differs from the library's configured width.
    #[error("section {name:?} has {found} lanes, expected {expected}")]
    LaneCountMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A section's entrance or exit openings were never set.
    #[error("section {0:?} has no openings set")]
    Unconfigured(String),

    /// An authoring tag does not name a known placeholder kind.
    #[error("unknown placeholder tag {0:?}")]
    UnknownTag(String),

    /// A section key does not belong to the library.
    #[error("section key {0} is out of range")]
    UnknownSection(usize),

    /// No section in the library can follow the named section.
    #[error("no section can follow {0:?}")]
    DeadEnd(String),
}

//=========================================================================
// Unit Tests
//=========================================================================
