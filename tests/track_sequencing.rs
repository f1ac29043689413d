//! End-to-end: authoring data → sections → library → generated track.

use rand::rngs::StdRng;
use rand::SeedableRng;
use treadmill_sections::prelude::*;

const T: bool = true;
const F: bool = false;

fn tag(name: &str) -> PlaceholderTag {
    name.parse().unwrap()
}

fn track_library() -> SectionLibrary {
    SectionLibraryBuilder::new()
        .with_lane_count(5)
        .with_blueprint(
            SectionBlueprint::new("straight")
                .with_entrance([T, T, T, T, T])
                .with_exit([T, T, T, T, T])
                .with_placeholders([tag("PickupGroupA"), tag("PickupGroupA"), tag("Block")]),
        )
        .with_blueprint(
            SectionBlueprint::new("funnel_left")
                .with_entrance([T, T, T, T, T])
                .with_exit([T, F, F, F, F])
                .with_placeholders([tag("Block"), tag("Block"), tag("RedPickup")]),
        )
        .with_blueprint(
            SectionBlueprint::new("funnel_right")
                .with_entrance([T, T, T, T, T])
                .with_exit([F, F, F, F, T])
                .with_placeholder(tag("Wildcard")),
        )
        .with_blueprint(
            SectionBlueprint::new("left_gate")
                .with_entrance([T, F, F, F, F])
                .with_exit([T, F, T, F, T])
                .with_placeholders([tag("PickupGroupB"), tag("PickupGroupC")]),
        )
        .with_blueprint(
            SectionBlueprint::new("split")
                .with_entrance([T, F, T, F, T])
                .with_exit([T, F, F, F, T]),
        )
        .build()
        .unwrap()
}

#[test]
fn authored_masks_match_expected_bits() {
    let library = track_library();
    let bits = |name: &str| {
        let section = library.get(library.find(name).unwrap()).unwrap();
        (section.entrance().bits(), section.exit().bits())
    };

    assert_eq!(bits("straight"), (31, 31));
    assert_eq!(bits("funnel_left"), (31, 16));
    assert_eq!(bits("funnel_right"), (31, 1));
    assert_eq!(bits("left_gate"), (16, 21));
    assert_eq!(bits("split"), (21, 17));
}

#[test]
fn funnel_right_cannot_reach_left_gate() {
    let library = track_library();
    let funnel_right = library.find("funnel_right").unwrap();
    let left_gate = library.find("left_gate").unwrap();

    assert!(!library.followers(funnel_right).unwrap().contains(&left_gate));
    assert!(!library.is_valid_sequence(&[funnel_right, left_gate]));
}

#[test]
fn generated_tracks_are_always_valid() {
    let library = track_library();

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        for (start, _) in library.iter() {
            let run = library.generate_run(start, 40, &mut rng).unwrap();
            assert_eq!(run.len(), 40);
            assert!(library.is_valid_sequence(&run), "seed {seed} produced {run:?}");
        }
    }
}

#[test]
fn pickup_totals_accumulate_over_a_run() {
    let library = track_library();
    let mut rng = StdRng::seed_from_u64(2024);
    let start = library.find("straight").unwrap();

    let run = library.generate_run(start, 10, &mut rng).unwrap();
    let total: usize = run
        .iter()
        .map(|&key| library.get(key).unwrap().pickup_count())
        .sum();

    assert!(total >= 2);
    assert!(total <= 10 * 2);
}

#[test]
fn spawn_plan_leaves_group_colors_to_host() {
    let library = track_library();
    let gate = library.get(library.find("left_gate").unwrap()).unwrap();

    assert_eq!(
        gate.spawn_plan(),
        vec![
            SpawnDescriptor::Crystal(CrystalColor::Group(PickupGroup::B)),
            SpawnDescriptor::Crystal(CrystalColor::Group(PickupGroup::C)),
        ]
    );
}

#[test]
fn unconfigured_sections_are_kept_out_of_the_pool() {
    let result = SectionLibraryBuilder::new()
        .with_blueprint(SectionBlueprint::new("unfinished").with_entrance([T, T, T, T, T]))
        .build();

    assert!(matches!(result, Err(SectionError::Unconfigured(name)) if name == "unfinished"));
}
