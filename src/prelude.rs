//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use treadmill_sections::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Masks and compatibility
pub use crate::core::connector::{OpeningMask, SectionConnector, MAX_LANES};

// Errors
pub use crate::core::error::SectionError;

// Sections and placeholders
pub use crate::core::section::{
    CrystalColor, PickupColor, PickupGroup, PlaceholderTag, Section, SectionBlueprint,
    SpawnDescriptor,
};

// Section library
pub use crate::core::library::{SectionKey, SectionLibrary, SectionLibraryBuilder};
