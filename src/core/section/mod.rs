//=========================================================================
// Sections
//=========================================================================
//
// A section is one piece of track with an entrance face, an exit face,
// and a set of placeholders the host replaces with pickups and obstacles.
//
// Lifecycle:
//   SectionBlueprint (authoring data) ──from_blueprint()──> Section
//
// Masks and the pickup count are computed once, at construction, and a
// `Section` never changes afterwards.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::connector::{self, OpeningMask, SectionConnector};
use super::error::SectionError;

//=== Module Declarations =================================================

pub mod placeholder;

//=== Public API ==========================================================

pub use placeholder::{CrystalColor, PickupColor, PickupGroup, PlaceholderTag, SpawnDescriptor};

//=== SectionBlueprint ====================================================

/// Authoring data for a section, as produced by a level editor.
///
/// ```
/// use treadmill_sections::prelude::*;
///
/// let section = SectionBlueprint::new("split")
///     .with_entrance([true, true, true, true, true])
///     .with_exit([true, false, false, false, true])
///     .with_placeholder(PlaceholderTag::PickupGroup(PickupGroup::A))
///     .build()
///     .unwrap();
///
/// assert_eq!(section.exit().bits(), 17);
/// assert_eq!(section.pickup_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBlueprint {
    pub name: String,
    pub entrance_openings: Vec<bool>,
    pub exit_openings: Vec<bool>,
    pub placeholders: Vec<PlaceholderTag>,
}

impl SectionBlueprint {
    /// Creates an empty blueprint. Faces must be set before the section
    /// can join a library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the entrance openings, first lane first.
    pub fn with_entrance(mut self, openings: impl Into<Vec<bool>>) -> Self {
        self.entrance_openings = openings.into();
        self
    }

    /// Sets the exit openings, first lane first.
    pub fn with_exit(mut self, openings: impl Into<Vec<bool>>) -> Self {
        self.exit_openings = openings.into();
        self
    }

    /// Appends one placeholder.
    pub fn with_placeholder(mut self, tag: PlaceholderTag) -> Self {
        self.placeholders.push(tag);
        self
    }

    /// Appends several placeholders, keeping their order.
    pub fn with_placeholders(mut self, tags: impl IntoIterator<Item = PlaceholderTag>) -> Self {
        self.placeholders.extend(tags);
        self
    }

    /// Shorthand for [`Section::from_blueprint`].
    pub fn build(self) -> Result<Section, SectionError> {
        Section::from_blueprint(self)
    }
}

//=== Section =============================================================

/// Immutable, fully computed track section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entrance: OpeningMask,
    exit: OpeningMask,
    placeholders: Vec<PlaceholderTag>,
    pickup_count: usize,
}

impl Section {
    //--- Construction -----------------------------------------------------

    /// Computes entrance and exit masks and the pickup count.
    ///
    /// An empty face does not fail; it logs a warning naming the section
    /// and leaves that face [unset](OpeningMask::is_unset).
    ///
    /// # Errors
    ///
    /// [`SectionError::TooManyLanes`] if either face is too wide.
    pub fn from_blueprint(blueprint: SectionBlueprint) -> Result<Self, SectionError> {
        let SectionBlueprint {
            name,
            entrance_openings,
            exit_openings,
            placeholders,
        } = blueprint;

        let entrance = connector::encode(&entrance_openings, Some(&name))?;
        let exit = connector::encode(&exit_openings, Some(&name))?;

        let pickup_count = placeholders
            .iter()
            .filter(|tag| tag.counts_toward_pickups())
            .count();

        Ok(Self {
            name,
            entrance,
            exit,
            placeholders,
            pickup_count,
        })
    }

    //--- Queries ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entrance(&self) -> OpeningMask {
        self.entrance
    }

    pub fn exit(&self) -> OpeningMask {
        self.exit
    }

    /// Lane count of the entrance face, or of the exit if the entrance is unset.
    pub fn lanes(&self) -> usize {
        if self.entrance.is_unset() {
            self.exit.lanes()
        } else {
            self.entrance.lanes()
        }
    }

    /// Number of grouped pickups this section contributes.
    pub fn pickup_count(&self) -> usize {
        self.pickup_count
    }

    pub fn placeholders(&self) -> &[PlaceholderTag] {
        &self.placeholders
    }

    /// Returns `true` once both faces have openings set.
    pub fn is_configured(&self) -> bool {
        !self.entrance.is_unset() && !self.exit.is_unset()
    }

    //--- Sequencing -------------------------------------------------------

    /// Returns `true` if `next` may be placed directly after this section.
    ///
    /// Compares this exit against `next`'s entrance. Faces of different
    /// widths are compared anyway, with a warning.
    pub fn can_be_followed_by(&self, next: &Section) -> bool {
        if !self.exit.is_unset()
            && !next.entrance.is_unset()
            && self.exit.lanes() != next.entrance.lanes()
        {
            warn!(
                "Comparing {:?} exit ({} lanes) with {:?} entrance ({} lanes)",
                self.name,
                self.exit.lanes(),
                next.name,
                next.entrance.lanes()
            );
        }
        SectionConnector::can_follow(self.exit, next.entrance)
    }

    /// Spawn descriptors for every placeholder, in authoring order.
    pub fn spawn_plan(&self) -> Vec<SpawnDescriptor> {
        self.placeholders
            .iter()
            .map(|tag| tag.spawn_descriptor())
            .collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
