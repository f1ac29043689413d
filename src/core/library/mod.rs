//=========================================================================
// Section Library
//=========================================================================
//
// Pool of sections the treadmill draws from, with precomputed adjacency.
//
// Architecture:
//   SectionLibraryBuilder ──build()──> SectionLibrary
//     ├─ with_lane_count()               ├─ sections: Vec<Section>
//     ├─ with_section()                  └─ followers: Vec<Vec<SectionKey>>
//     └─ with_blueprint()
//
// Every section's follower list is computed once at build time, so
// picking the next section is a single random index into a slice.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::{debug, warn};
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::connector::{SectionConnector, MAX_LANES};
use super::error::SectionError;
use super::section::{Section, SectionBlueprint};

//=== Constants ===========================================================

/// Lane count used when the builder is not told otherwise.
pub const DEFAULT_LANE_COUNT: usize = 5;

//=== SectionKey ==========================================================

/// Stable handle to a section inside one [`SectionLibrary`].
///
/// Keys are assigned in registration order and are only meaningful for the
/// library that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionKey(usize);

impl SectionKey {
    /// Position of the section in registration order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== SectionLibraryBuilder ===============================================

/// Builder for configuring and constructing a [`SectionLibrary`].
///
/// # Default Values
///
/// - **Lane count**: 5
///
/// # Examples
///
/// ```
/// use treadmill_sections::prelude::*;
///
/// let library = SectionLibraryBuilder::new()
///     .with_lane_count(3)
///     .with_blueprint(
///         SectionBlueprint::new("open")
///             .with_entrance([true, true, true])
///             .with_exit([true, true, true]),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(library.len(), 1);
/// assert_eq!(library.lane_count(), 3);
/// ```
#[derive(Debug)]
pub struct SectionLibraryBuilder {
    lane_count: usize,
    entries: Vec<Result<Section, SectionError>>,
}

impl SectionLibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            lane_count: DEFAULT_LANE_COUNT,
            entries: Vec::new(),
        }
    }

    /// Sets the number of lanes every section face must have.
    ///
    /// Default: 5
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= lanes <= MAX_LANES`.
    pub fn with_lane_count(mut self, lanes: usize) -> Self {
        assert!(
            (1..=MAX_LANES).contains(&lanes),
            "lane count must be in 1..={}, got {}",
            MAX_LANES,
            lanes
        );
        self.lane_count = lanes;
        self
    }

    /// Registers an already computed section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.entries.push(Ok(section));
        self
    }

    /// Registers a section from authoring data. Any construction error is
    /// reported by [`build`](Self::build).
    pub fn with_blueprint(mut self, blueprint: SectionBlueprint) -> Self {
        self.entries.push(Section::from_blueprint(blueprint));
        self
    }

    /// Validates every section and precomputes follower lists.
    ///
    /// # Errors
    ///
    /// - Any error raised while computing a registered blueprint
    /// - [`SectionError::Unconfigured`] if a section has an unset face
    /// - [`SectionError::LaneCountMismatch`] if a face has the wrong width
    pub fn build(self) -> Result<SectionLibrary, SectionError> {
        let lane_count = self.lane_count;
        let sections = self.entries.into_iter().collect::<Result<Vec<_>, _>>()?;

        for (index, section) in sections.iter().enumerate() {
            validate(section, lane_count)?;
            if sections[..index].iter().any(|earlier| earlier.name() == section.name()) {
                warn!("Section {:?} is registered more than once", section.name());
            }
        }

        let followers: Vec<Vec<SectionKey>> = sections
            .iter()
            .map(|current| {
                sections
                    .iter()
                    .enumerate()
                    .filter(|(_, next)| current.can_be_followed_by(next))
                    .map(|(index, _)| SectionKey(index))
                    .collect()
            })
            .collect();

        for (section, next) in sections.iter().zip(&followers) {
            if next.is_empty() {
                warn!("Section {:?} is a dead end: nothing can follow it", section.name());
            }
        }

        debug!(
            "Built section library with {} sections across {} lanes",
            sections.len(),
            lane_count
        );

        Ok(SectionLibrary {
            lane_count,
            sections,
            followers,
        })
    }
}

impl Default for SectionLibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== SectionLibrary ======================================================

/// Validated, immutable pool of sections sharing one lane count.
#[derive(Debug, Clone)]
pub struct SectionLibrary {
    lane_count: usize,
    sections: Vec<Section>,
    followers: Vec<Vec<SectionKey>>,
}

impl SectionLibrary {
    //--- Queries ----------------------------------------------------------

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn get(&self, key: SectionKey) -> Option<&Section> {
        self.sections.get(key.0)
    }

    /// First section registered under `name`.
    pub fn find(&self, name: &str) -> Option<SectionKey> {
        self.sections
            .iter()
            .position(|section| section.name() == name)
            .map(SectionKey)
    }

    /// Sections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &Section)> + '_ {
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| (SectionKey(index), section))
    }

    /// Keys of every section that may follow `key`, in registration order.
    pub fn followers(&self, key: SectionKey) -> Result<&[SectionKey], SectionError> {
        self.followers
            .get(key.0)
            .map(Vec::as_slice)
            .ok_or(SectionError::UnknownSection(key.0))
    }

    /// Library sections that may follow `current`, which need not belong
    /// to this library.
    pub fn candidates_after<'a>(
        &'a self,
        current: &'a Section,
    ) -> impl Iterator<Item = (SectionKey, &'a Section)> + 'a {
        self.iter()
            .filter(move |(_, next)| SectionConnector::can_follow(current.exit(), next.entrance()))
    }

    //--- Sequencing -------------------------------------------------------

    /// Picks uniformly among the sections that may follow `current`.
    ///
    /// # Errors
    ///
    /// - [`SectionError::UnknownSection`] if `current` is not in this library
    /// - [`SectionError::DeadEnd`] if nothing can follow it
    pub fn pick_next<R: Rng>(
        &self,
        current: SectionKey,
        rng: &mut R,
    ) -> Result<SectionKey, SectionError> {
        let followers = self.followers(current)?;
        if followers.is_empty() {
            let name = self.sections[current.0].name().to_owned();
            return Err(SectionError::DeadEnd(name));
        }
        Ok(followers[rng.random_range(0..followers.len())])
    }

    /// Chains `length` sections starting with `start`.
    ///
    /// Every adjacent pair in the result satisfies
    /// [`Section::can_be_followed_by`].
    pub fn generate_run<R: Rng>(
        &self,
        start: SectionKey,
        length: usize,
        rng: &mut R,
    ) -> Result<Vec<SectionKey>, SectionError> {
        if self.get(start).is_none() {
            return Err(SectionError::UnknownSection(start.0));
        }

        let mut run = Vec::with_capacity(length);
        if length == 0 {
            return Ok(run);
        }

        let mut current = start;
        run.push(current);
        while run.len() < length {
            current = self.pick_next(current, rng)?;
            run.push(current);
        }

        Ok(run)
    }

    /// Returns `true` if every key is known and each section may follow
    /// the one before it.
    pub fn is_valid_sequence(&self, keys: &[SectionKey]) -> bool {
        if keys.iter().any(|&key| self.get(key).is_none()) {
            return false;
        }
        keys.windows(2).all(|pair| {
            let (current, next) = (&self.sections[pair[0].0], &self.sections[pair[1].0]);
            SectionConnector::can_follow(current.exit(), next.entrance())
        })
    }
}

//=== Internal Helpers ====================================================

fn validate(section: &Section, lane_count: usize) -> Result<(), SectionError> {
    if !section.is_configured() {
        return Err(SectionError::Unconfigured(section.name().to_owned()));
    }

    for face in [section.entrance(), section.exit()] {
        if face.lanes() != lane_count {
            return Err(SectionError::LaneCountMismatch {
                name: section.name().to_owned(),
                expected: lane_count,
                found: face.lanes(),
            });
        }
    }

    Ok(())
}

//=========================================================================
// Unit Tests
//=========================================================================
