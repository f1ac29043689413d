//=========================================================================
// Section Connector
//=========================================================================
//
// Encodes a face's lane openings into an `OpeningMask` and tests whether
// one section's exit lines up with another section's entrance.
//
// Flow:
//   authored openings ──compute_mask()──> OpeningMask   (once, at setup)
//   exit mask, entrance mask ──can_follow()──> bool     (any time, O(1))
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::error::SectionError;

//=== Module Declarations =================================================

mod mask;

//=== Public API ==========================================================

pub use mask::{OpeningMask, MAX_LANES};

//=== SectionConnector ====================================================

/// Stateless mask encoder and compatibility test.
///
/// ```
/// use treadmill_sections::prelude::*;
///
/// let exit = SectionConnector::compute_mask(&[true, false, true, true]).unwrap();
/// let entrance = SectionConnector::compute_mask(&[false, true, false, false]).unwrap();
///
/// assert_eq!(exit.bits(), 11);
/// assert!(!SectionConnector::can_follow(exit, entrance));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionConnector;

impl SectionConnector {
    /// Encodes `openings` with the first element as the most significant
    /// used bit.
    ///
    /// An empty sequence is not an error: it logs a warning and returns
    /// [`OpeningMask::UNSET`], whose bits are zero.
    ///
    /// # Errors
    ///
    /// [`SectionError::TooManyLanes`] if `openings` is wider than
    /// [`MAX_LANES`].
    pub fn compute_mask(openings: &[bool]) -> Result<OpeningMask, SectionError> {
        encode(openings, None)
    }

    /// Returns `true` if at least one lane is open on both `exit` and
    /// `next_entrance`.
    ///
    /// Both masks should share a lane count; that is up to the caller.
    #[inline]
    pub const fn can_follow(exit: OpeningMask, next_entrance: OpeningMask) -> bool {
        exit.overlaps(next_entrance)
    }
}

//=== Internal Helpers ====================================================

/// Shared encoder. `owner` names the section in the empty-input warning.
pub(crate) fn encode(openings: &[bool], owner: Option<&str>) -> Result<OpeningMask, SectionError> {
    if openings.is_empty() {
        match owner {
            Some(name) => warn!("Cannot compute opening mask for {:?} until openings are set", name),
            None => warn!("Cannot compute opening mask until openings are set"),
        }
        return Ok(OpeningMask::UNSET);
    }

    if openings.len() > MAX_LANES {
        return Err(SectionError::TooManyLanes {
            lanes: openings.len(),
        });
    }

    let bits = openings
        .iter()
        .fold(0u8, |acc, &open| (acc << 1) | u8::from(open));

    Ok(OpeningMask::from_bits(bits, openings.len()))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    //--- Test Helpers -----------------------------------------------------

    /// Every boolean sequence of length `lanes`, first lane as the high bit.
    fn all_sequences(lanes: usize) -> Vec<Vec<bool>> {
        (0u16..(1 << lanes))
            .map(|n| (0..lanes).map(|i| n >> (lanes - 1 - i) & 1 == 1).collect())
            .collect()
    }

    fn mask(openings: &[bool]) -> OpeningMask {
        SectionConnector::compute_mask(openings).unwrap()
    }

    const T: bool = true;
    const F: bool = false;

    //=== compute_mask ====================================================

    #[test]
    fn known_encodings() {
        assert_eq!(mask(&[T, F, T, T]).bits(), 11);
        assert_eq!(mask(&[T, F, F, F, T]).bits(), 17);
        assert_eq!(mask(&[T, T, T, T, T]).bits(), 31);
        assert_eq!(mask(&[T, F, T, F, F]).bits(), 20);
        assert_eq!(mask(&[F, F, F, T, T]).bits(), 3);
    }

    #[test]
    fn records_lane_count() {
        assert_eq!(mask(&[T, F, T, T]).lanes(), 4);
        assert_eq!(mask(&[F]).lanes(), 1);
    }

    #[test]
    fn all_open_is_all_ones_for_every_width() {
        for lanes in 1..=MAX_LANES {
            let expected = ((1u16 << lanes) - 1) as u8;
            assert_eq!(mask(&vec![true; lanes]).bits(), expected);
        }
    }

    #[test]
    fn all_closed_is_zero_for_every_width() {
        for lanes in 1..=MAX_LANES {
            let m = mask(&vec![false; lanes]);
            assert_eq!(m.bits(), 0);
            assert!(!m.is_unset());
        }
    }

    #[test]
    fn empty_input_yields_unset_mask() {
        let m = SectionConnector::compute_mask(&[]).unwrap();
        assert_eq!(m.bits(), 0);
        assert!(m.is_unset());
    }

    #[test]
    fn injective_and_in_range_per_width() {
        for lanes in 1..=MAX_LANES {
            let mut seen = HashSet::new();
            for seq in all_sequences(lanes) {
                let bits = mask(&seq).bits() as u16;
                assert!(bits < (1 << lanes), "{:?} out of range", seq);
                assert!(seen.insert(bits), "{:?} collided", seq);
            }
            assert_eq!(seen.len(), 1 << lanes);
        }
    }

    #[test]
    fn decoding_recovers_authored_openings() {
        for seq in all_sequences(6) {
            assert_eq!(mask(&seq).to_openings(), seq);
        }
    }

    #[test]
    fn rejects_faces_wider_than_a_byte() {
        let err = SectionConnector::compute_mask(&[true; MAX_LANES + 1]).unwrap_err();
        assert_eq!(err, SectionError::TooManyLanes { lanes: 9 });
    }

    //=== can_follow ======================================================

    #[test]
    fn overlapping_lane_allows_follow() {
        let exit = OpeningMask::from_bits(0b1011, 4);
        let entrance = OpeningMask::from_bits(0b0110, 4);
        assert!(SectionConnector::can_follow(exit, entrance));
    }

    #[test]
    fn single_entrance_lane_closed_on_exit() {
        // 1011 & 0100: the one open entrance lane is closed on the exit.
        let exit = OpeningMask::from_bits(11, 4);
        let entrance = OpeningMask::from_bits(4, 4);
        assert!(!SectionConnector::can_follow(exit, entrance));
    }

    #[test]
    fn disjoint_lanes_block_follow() {
        let exit = OpeningMask::from_bits(8, 4);
        let entrance = OpeningMask::from_bits(4, 4);
        assert!(!SectionConnector::can_follow(exit, entrance));
    }

    #[test]
    fn can_follow_is_symmetric() {
        for a in all_sequences(4) {
            for b in all_sequences(4) {
                let (a, b) = (mask(&a), mask(&b));
                assert_eq!(
                    SectionConnector::can_follow(a, b),
                    SectionConnector::can_follow(b, a)
                );
            }
        }
    }

    #[test]
    fn zero_mask_never_follows() {
        let zero = OpeningMask::all_closed(5);
        for other in all_sequences(5) {
            let other = mask(&other);
            assert!(!SectionConnector::can_follow(zero, other));
            assert!(!SectionConnector::can_follow(other, zero));
        }
        assert!(!SectionConnector::can_follow(
            OpeningMask::UNSET,
            OpeningMask::all_open(5)
        ));
    }
}
