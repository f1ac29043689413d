//=========================================================================
// Treadmill Sections — Library Root
//
// Entrance/exit opening masks and sequence compatibility for the track
// sections of a runner game.
//
// Responsibilities:
// - Encode each section face as a compact bitmap of open lanes
// - Decide in O(1) whether one section may follow another
// - Select and validate chains of sections from a prebuilt pool
//
// Typical usage:
// ```
// use treadmill_sections::prelude::*;
//
// let exit = SectionConnector::compute_mask(&[true, false, true, true]).unwrap();
// let entrance = OpeningMask::from_bits(0b0010, 4);
//
// assert_eq!(exit.bits(), 11);
// assert!(SectionConnector::can_follow(exit, entrance));
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds all section logic: masks, sections, placeholders, and the
// section library. Most callers only need the `prelude`.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// The two operations every host needs, available at the crate root.
//
pub use crate::core::{OpeningMask, SectionConnector, SectionError};
