//=========================================================================
// Placeholders
//=========================================================================
//
// Authoring tags attached to a section's placeholder objects and the
// spawn descriptors they resolve to.
//
// Tag → descriptor:
//   Block                 → Block
//   PickupGroupA/B/C      → Crystal(Group(..))   color chosen by host
//   Red/Green/BluePickup  → Crystal(Fixed(..))
//   Wildcard              → Wildcard             spawned only if host needs one
//
// Nothing here touches a scene graph; the host instantiates whatever a
// descriptor names at the placeholder's position.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

//=== Internal Dependencies ===============================================

use crate::core::error::SectionError;

//=== Pickup Kinds ========================================================

/// Fixed crystal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupColor {
    Red,
    Green,
    Blue,
}

/// Pickup groups whose color is assigned per section instance by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupGroup {
    A,
    B,
    C,
}

//=== PlaceholderTag ======================================================

/// Kind of object a placeholder stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderTag {
    /// Solid obstacle block.
    Block,

    /// Crystal whose color is shared by every placeholder in the group.
    PickupGroup(PickupGroup),

    /// Crystal with a fixed color.
    Pickup(PickupColor),

    /// Wildcard pickup, spawned only when the host asks for one.
    Wildcard,
}

impl PlaceholderTag {
    /// Authoring name of the tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::PickupGroup(PickupGroup::A) => "PickupGroupA",
            Self::PickupGroup(PickupGroup::B) => "PickupGroupB",
            Self::PickupGroup(PickupGroup::C) => "PickupGroupC",
            Self::Pickup(PickupColor::Red) => "RedPickup",
            Self::Pickup(PickupColor::Green) => "GreenPickup",
            Self::Pickup(PickupColor::Blue) => "BluePickup",
            Self::Wildcard => "Wildcard",
        }
    }

    /// Whether this placeholder adds to a section's pickup count.
    ///
    /// Only grouped pickups count; fixed-color crystals and wildcards
    /// do not.
    pub const fn counts_toward_pickups(self) -> bool {
        matches!(self, Self::PickupGroup(_))
    }

    /// What the host should spawn in place of this placeholder.
    pub const fn spawn_descriptor(self) -> SpawnDescriptor {
        match self {
            Self::Block => SpawnDescriptor::Block,
            Self::PickupGroup(group) => SpawnDescriptor::Crystal(CrystalColor::Group(group)),
            Self::Pickup(color) => SpawnDescriptor::Crystal(CrystalColor::Fixed(color)),
            Self::Wildcard => SpawnDescriptor::Wildcard,
        }
    }
}

impl FromStr for PlaceholderTag {
    type Err = SectionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let parsed = match tag {
            "Block" => Self::Block,
            "PickupGroupA" => Self::PickupGroup(PickupGroup::A),
            "PickupGroupB" => Self::PickupGroup(PickupGroup::B),
            "PickupGroupC" => Self::PickupGroup(PickupGroup::C),
            "RedPickup" => Self::Pickup(PickupColor::Red),
            "GreenPickup" => Self::Pickup(PickupColor::Green),
            "BluePickup" => Self::Pickup(PickupColor::Blue),
            "Wildcard" => Self::Wildcard,
            other => return Err(SectionError::UnknownTag(other.to_owned())),
        };
        Ok(parsed)
    }
}

impl fmt::Display for PlaceholderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=== SpawnDescriptor =====================================================

/// Crystal color, either fixed or resolved from a pickup group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrystalColor {
    Fixed(PickupColor),
    Group(PickupGroup),
}

/// Host-facing description of what to instantiate at a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnDescriptor {
    Block,
    Crystal(CrystalColor),
    /// Conditional: the host spawns it only if a wildcard is currently
    /// needed, otherwise the placeholder is simply discarded.
    Wildcard,
}

//=========================================================================
// Unit Tests
//=========================================================================
