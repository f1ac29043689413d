//=========================================================================
// Opening Mask
//=========================================================================
//
// Compact bit encoding of one section face (entrance or exit).
//
// Layout (L = lane count, here L = 4):
//   openings: [ T,  F,  T,  T ]
//   bit:        3   2   1   0     → 0b1011
//
// The first lane maps to the highest used bit, the last lane to bit 0.
// Bits above L are always zero.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Constants ===========================================================

/// Widest face an [`OpeningMask`] can encode.
pub const MAX_LANES: usize = u8::BITS as usize;

//=== OpeningMask =========================================================

/// Bitmap of open lanes on one face of a section.
///
/// Carries its lane count alongside the bits so that an unset face
/// (`lanes() == 0`) can be told apart from an all-closed one, even though
/// both have `bits() == 0`.
///
/// ```
/// use treadmill_sections::prelude::*;
///
/// let mask = OpeningMask::from_bits(0b1011, 4);
/// assert!(mask.is_open(0));
/// assert!(!mask.is_open(1));
/// assert_eq!(mask.to_string(), "1011");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpeningMask {
    bits: u8,
    lanes: u8,
}

impl OpeningMask {
    /// Mask of a face whose openings were never set.
    pub const UNSET: Self = Self { bits: 0, lanes: 0 };

    //--- Construction -----------------------------------------------------

    /// Builds a mask from raw bits for a face with `lanes` lanes.
    ///
    /// Bits above `lanes` are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `lanes > MAX_LANES`.
    pub const fn from_bits(bits: u8, lanes: usize) -> Self {
        assert!(lanes <= MAX_LANES, "lane count exceeds MAX_LANES");
        let lanes = lanes as u8;
        Self {
            bits: bits & used_bits(lanes),
            lanes,
        }
    }

    /// All lanes open.
    pub const fn all_open(lanes: usize) -> Self {
        Self::from_bits(u8::MAX, lanes)
    }

    /// All lanes blocked. Unlike [`OpeningMask::UNSET`], this face is configured.
    pub const fn all_closed(lanes: usize) -> Self {
        Self::from_bits(0, lanes)
    }

    //--- Queries ----------------------------------------------------------

    /// Raw bit pattern.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Number of lanes this mask was computed for.
    #[inline]
    pub const fn lanes(self) -> usize {
        self.lanes as usize
    }

    /// Returns `true` if the face was never configured.
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.lanes == 0
    }

    /// Returns `true` if `lane` (0 = first authored lane) is open.
    ///
    /// Lanes past the face width are reported as closed.
    pub const fn is_open(self, lane: usize) -> bool {
        if lane >= self.lanes as usize {
            return false;
        }
        let shift = self.lanes as usize - 1 - lane;
        (self.bits >> shift) & 1 == 1
    }

    /// Number of open lanes.
    #[inline]
    pub const fn open_lane_count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if at least one lane is open in both masks.
    #[inline]
    pub const fn overlaps(self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    /// Decodes back into the authored lane order.
    pub fn to_openings(self) -> Vec<bool> {
        (0..self.lanes()).map(|lane| self.is_open(lane)).collect()
    }
}

//=== Conversions =========================================================

impl From<OpeningMask> for u8 {
    fn from(mask: OpeningMask) -> Self {
        mask.bits
    }
}

impl fmt::Display for OpeningMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            return f.write_str("unset");
        }
        write!(f, "{:0width$b}", self.bits, width = self.lanes())
    }
}

//=== Internal Helpers ====================================================

/// Low `lanes` bits set.
const fn used_bits(lanes: u8) -> u8 {
    if lanes as usize >= MAX_LANES {
        u8::MAX
    } else {
        (1u8 << lanes) - 1
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
