//! Board integration tests.
//!
//! These tests check lane generation and player movement across many
//! sizes and seeds.

use genome_quest::board::{PlayerTrack, TileColor, TileDeck};
use genome_quest::core::{GameRng, PlayerId, PlayerMap};
use proptest::prelude::*;

fn track(size: usize, seed: u64) -> PlayerTrack {
    let deck = TileDeck::new(30);
    let mut rng = GameRng::new(seed);
    PlayerTrack::new(PlayerMap::new(|_| deck.generate(size, &mut rng)))
}

proptest! {
    /// Start and Finish are fixed and the Regular quota is met exactly.
    #[test]
    fn lane_shape_holds(size in 2usize..200, seed in any::<u64>()) {
        let lane = TileDeck::new(30).generate(size, &mut GameRng::new(seed));

        prop_assert_eq!(lane.len(), size);
        prop_assert_eq!(lane.get(0), Some(TileColor::Start));
        prop_assert_eq!(lane.get(size - 1), Some(TileColor::Finish));
        prop_assert_eq!(lane.count(TileColor::Regular), 30usize.min(size - 2));
        prop_assert_eq!(lane.count(TileColor::Start), 1);
        prop_assert_eq!(lane.count(TileColor::Finish), 1);

        for tile in &lane.tiles()[1..size - 1] {
            prop_assert!(*tile == TileColor::Regular || TileColor::SPECIAL.contains(tile));
        }
    }

    /// Any quota is honored, capped by the interior length.
    #[test]
    fn quota_is_exact(size in 2usize..120, quota in 0usize..150, seed in any::<u64>()) {
        let lane = TileDeck::new(quota).generate(size, &mut GameRng::new(seed));
        prop_assert_eq!(lane.count(TileColor::Regular), quota.min(size - 2));
    }

    /// Each advance moves exactly one tile and only the last reports finish.
    #[test]
    fn advance_steps_by_one(size in 2usize..80, seed in any::<u64>()) {
        let mut track = track(size, seed);
        let player = PlayerId::new(1);

        for expected in 1..size {
            let finished = track.advance(player);
            prop_assert_eq!(track.position(player), Some(expected));
            prop_assert_eq!(finished, expected == size - 1);
        }
        prop_assert!(track.is_finished(player));
        prop_assert_eq!(track.position(PlayerId::new(0)), Some(0));
    }
}

/// Both players finish after 51 moves on a 52-tile lane.
#[test]
fn test_both_players_finish_on_default_board() {
    let mut track = track(52, 2024);
    let mut finished = PlayerMap::with_value(false);

    for _ in 0..51 {
        for player in PlayerId::all() {
            assert!(!finished[player]);
            finished[player] = track.advance(player);
        }
    }

    for player in PlayerId::all() {
        assert!(finished[player]);
        assert_eq!(track.position(player), Some(51));
        assert_eq!(track.current_tile(player), Some(TileColor::Finish));
    }
}

/// Lanes are generated independently per player.
#[test]
fn test_lanes_differ_between_players() {
    let track = track(52, 11);
    let a = track.lane(PlayerId::new(0)).unwrap();
    let b = track.lane(PlayerId::new(1)).unwrap();

    assert_eq!(a.len(), b.len());
    assert_eq!(a.count(TileColor::Regular), b.count(TileColor::Regular));
    assert_ne!(a, b);
}

/// Lookups past either end return the sentinel instead of panicking.
#[test]
fn test_out_of_range_is_none() {
    let track = track(52, 3);

    assert_eq!(track.tile_color(PlayerId::new(0), 52), None);
    assert_eq!(track.tile_color(PlayerId::new(0), usize::MAX), None);
    assert_eq!(track.tile_color(PlayerId::new(2), 0), None);
    assert_eq!(track.position(PlayerId::new(9)), None);
}
