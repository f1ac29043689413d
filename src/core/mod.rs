//=========================================================================
// Core
//
// Host-independent track section logic.
//
// Responsibilities:
// - Encode section faces into opening masks (`connector`)
// - Build immutable sections from authoring data (`section`)
// - Maintain a pool of sections with precomputed adjacency (`library`)
//
// Notes:
// Nothing in here owns object lifecycle or touches a scene graph. The
// host instantiates what `SpawnDescriptor`s describe and calls into this
// module only for masks, compatibility checks, and section selection.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod connector;
pub mod error;
pub mod library;
pub mod section;

//=== Re-exports ==========================================================

pub use connector::{OpeningMask, SectionConnector, MAX_LANES};
pub use error::SectionError;
pub use library::{SectionKey, SectionLibrary, SectionLibraryBuilder, DEFAULT_LANE_COUNT};
pub use section::{Section, SectionBlueprint};
