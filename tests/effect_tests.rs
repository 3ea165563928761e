//! Tile effect integration tests.
//!
//! Each tile color is resolved through `EffectRouter` with a scripted
//! terminal standing in for the players.

use genome_quest::board::{DnaTask, TileColor};
use genome_quest::core::{
    EventTrigger, GameRng, PlayerState, RiddleNormalization, SelectionPolicy,
};
use genome_quest::data::{RandomEvent, Riddle};
use genome_quest::effects::{Effect, EffectRouter, ResolutionKind, SkipReason};
use genome_quest::terminal::ScriptedTerminal;

fn scientist() -> PlayerState {
    PlayerState::new("Dr. Test").with_stats(1, 100, 100, 100, 1000)
}

fn events() -> Vec<RandomEvent> {
    vec![
        RandomEvent::new("Grant approved", 500),
        RandomEvent::new("Freezer failure", -300),
        RandomEvent::new("Paper accepted", 1200),
    ]
}

fn riddles() -> Vec<Riddle> {
    vec![
        Riddle::new("Closest planet to the sun?", "mercury"),
        Riddle::new("Base that pairs with adenine in DNA?", "thymine"),
    ]
}

// =============================================================================
// DNA Tasks
// =============================================================================

#[test]
fn test_similarity_task_awards_accuracy() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["AAAA", "AAAT"]);

    let resolution = router
        .resolve(&mut player, TileColor::TaskA, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.kind, ResolutionKind::Task(DnaTask::Similarity));
    assert_eq!(resolution.effect, Some(Effect::accuracy(150)));
    assert_eq!(player.accuracy, 250);
    assert!(terminal.saw("Similarity score: 0.75"));
    assert!(terminal.saw("Current stats - Accuracy: 250"));
}

#[test]
fn test_similarity_task_length_mismatch_scores_zero() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["AA", "AAA"]);

    router
        .resolve(&mut player, TileColor::TaskA, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(player.accuracy, 100);
    assert!(terminal.saw("same length"));
}

#[test]
fn test_similarity_task_ignores_surrounding_whitespace() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new([" ACGT", "ACGT  "]);

    router
        .resolve(&mut player, TileColor::TaskA, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(player.accuracy, 300);
}

#[test]
fn test_best_match_task() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["ACGTACGT", "CGT"]);

    let resolution = router
        .resolve(&mut player, TileColor::TaskB, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.kind, ResolutionKind::Task(DnaTask::BestMatch));
    assert_eq!(player.efficiency, 250);
    assert!(terminal.saw("Best match starts at index 1"));
}

#[test]
fn test_best_match_task_without_alignment_gives_nothing() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["AC", "ACGT"]);

    let resolution = router
        .resolve(&mut player, TileColor::TaskB, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.effect, None);
    assert_eq!(player, scientist());
    assert!(terminal.saw("longer than input strand"));
}

#[test]
fn test_mutation_task_always_awards_insight() {
    for (input, target) in [("ACGT", "ACGT"), ("ACGA", "ACGTTT"), ("", "")] {
        let mut router = EffectRouter::new(vec![], vec![]);
        let mut player = scientist();
        let mut terminal = ScriptedTerminal::new([input, target]);

        router
            .resolve(&mut player, TileColor::TaskC, &mut GameRng::new(1), &mut terminal)
            .unwrap();

        assert_eq!(player.insight, 250, "input {:?} target {:?}", input, target);
    }
}

#[test]
fn test_mutation_task_reports_differences() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["ACGA", "ACGTT"]);

    router
        .resolve(&mut player, TileColor::TaskC, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert!(terminal.saw("Substitution at position 3: T -> A"));
    assert!(terminal.saw("Deletion at position 4: missing base 'T'"));
}

#[test]
fn test_transcription_task() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["GATTACA"]);

    router
        .resolve(&mut player, TileColor::TaskD, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(player.accuracy, 150);
    assert_eq!(player.efficiency, 150);
    assert_eq!(player.insight, 100);
    assert!(terminal.saw("RNA sequence: GAUUACA"));
}

#[test]
fn test_similarity_bonus_has_no_rounding_loss() {
    let first = "A".repeat(50);
    let second = format!("{}{}", "A".repeat(29), "T".repeat(21));
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new([first, second]);

    router
        .resolve(&mut player, TileColor::TaskA, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(player.accuracy, 100 + 116);
    assert!(terminal.saw("Accuracy increased by 116 points."));
}

#[test]
fn test_non_ascii_strands_are_rejected_consistently() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["ACé", "ACG", "ACGTé", "CG", "ACé", "ACG"]);
    let mut rng = GameRng::new(1);

    for color in [TileColor::TaskA, TileColor::TaskB, TileColor::TaskC] {
        router.resolve(&mut player, color, &mut rng, &mut terminal).unwrap();
    }

    assert_eq!(player.accuracy, 100);
    assert_eq!(player.efficiency, 100);
    // The mutation task pays out regardless of the report.
    assert_eq!(player.insight, 250);
    let rejections = terminal
        .transcript()
        .iter()
        .filter(|line| line.contains("only contain ASCII"))
        .count();
    assert_eq!(rejections, 3);
}

// =============================================================================
// Riddles
// =============================================================================

#[test]
fn test_riddle_case_insensitive() {
    let mut router = EffectRouter::new(vec![], riddles());
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["Mercury"]);

    let resolution = router
        .resolve(&mut player, TileColor::Riddle, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.kind, ResolutionKind::Riddle { correct: true });
    assert_eq!(player.insight, 600);
    assert!(terminal.saw("Insight is now 600"));
}

#[test]
fn test_riddle_trailing_space_case_only() {
    let mut router = EffectRouter::new(vec![], riddles());
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["Mercury "]);

    let resolution = router
        .resolve(&mut player, TileColor::Riddle, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.kind, ResolutionKind::Riddle { correct: false });
    assert_eq!(player.insight, 100);
    assert!(terminal.saw("the correct answer is: mercury"));
}

#[test]
fn test_riddle_trailing_space_trimmed() {
    let mut router =
        EffectRouter::new(vec![], riddles()).with_normalization(RiddleNormalization::Trimmed);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["Mercury "]);

    let resolution = router
        .resolve(&mut player, TileColor::Riddle, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.kind, ResolutionKind::Riddle { correct: true });
    assert_eq!(player.insight, 600);
}

#[test]
fn test_riddles_cycle() {
    let mut router = EffectRouter::new(vec![], riddles());
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::new(["mercury", "thymine", "wrong"]);
    let mut rng = GameRng::new(1);

    for _ in 0..3 {
        router.resolve(&mut player, TileColor::Riddle, &mut rng, &mut terminal).unwrap();
    }

    // Third riddle wraps back to the first, answered wrong.
    assert_eq!(player.insight, 1100);
    let questions: Vec<_> = terminal
        .transcript()
        .iter()
        .filter(|line| line.ends_with('?'))
        .cloned()
        .collect();
    assert_eq!(
        questions,
        vec![
            "Closest planet to the sun?",
            "Base that pairs with adenine in DNA?",
            "Closest planet to the sun?",
        ]
    );
}

#[test]
fn test_no_riddles_degrades() {
    let mut router = EffectRouter::new(vec![], vec![]);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::default();

    for _ in 0..2 {
        let resolution = router
            .resolve(&mut player, TileColor::Riddle, &mut GameRng::new(1), &mut terminal)
            .unwrap();
        assert_eq!(resolution.kind, ResolutionKind::Skipped(SkipReason::NoRiddles));
    }
    assert_eq!(player, scientist());
    assert!(terminal.saw("No riddles loaded."));
}

// =============================================================================
// Random Events
// =============================================================================

#[test]
fn test_alternate_trigger_toggles() {
    let mut router = EffectRouter::new(events(), vec![]).with_event_trigger(EventTrigger::Alternate);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::default();
    let mut rng = GameRng::new(1);

    let kinds: Vec<_> = (0..4)
        .map(|_| router.resolve(&mut player, TileColor::Regular, &mut rng, &mut terminal).unwrap().kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            ResolutionKind::Event { description: "Grant approved".to_string() },
            ResolutionKind::Quiet,
            ResolutionKind::Event { description: "Freezer failure".to_string() },
            ResolutionKind::Quiet,
        ]
    );
    assert_eq!(player.discover_points, 1000 + 500 - 300);
}

#[test]
fn test_negative_event_is_not_clamped() {
    let events = vec![RandomEvent::new("Lab flood", -5000)];
    let mut router = EffectRouter::new(events, vec![]).with_event_trigger(EventTrigger::Alternate);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::default();

    router
        .resolve(&mut player, TileColor::Regular, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(player.discover_points, -4000);
    assert!(terminal.saw("You lose 5000 Discover Points..."));
}

#[test]
fn test_coin_flip_fires_about_half_the_time() {
    let mut router = EffectRouter::new(vec![RandomEvent::new("Tick", 1)], vec![]);
    let mut player = PlayerState::new("Counter");
    let mut terminal = ScriptedTerminal::default();
    let mut rng = GameRng::new(77);

    let mut fired = 0;
    for _ in 0..1000 {
        let resolution = router.resolve(&mut player, TileColor::Regular, &mut rng, &mut terminal).unwrap();
        if matches!(resolution.kind, ResolutionKind::Event { .. }) {
            fired += 1;
        }
    }

    assert_eq!(player.discover_points, fired);
    assert!((400..=600).contains(&fired), "fired {} times", fired);
}

#[test]
fn test_coin_flip_is_reproducible() {
    let run = |seed| {
        let mut router = EffectRouter::new(events(), vec![]).with_event_policy(SelectionPolicy::Random);
        let mut player = scientist();
        let mut terminal = ScriptedTerminal::default();
        let mut rng = GameRng::new(seed);
        for _ in 0..30 {
            router.resolve(&mut player, TileColor::Regular, &mut rng, &mut terminal).unwrap();
        }
        player.discover_points
    };

    assert_eq!(run(5), run(5));
}

#[test]
fn test_random_policy_picks_loaded_events() {
    let mut router = EffectRouter::new(events(), vec![])
        .with_event_trigger(EventTrigger::Alternate)
        .with_event_policy(SelectionPolicy::Random);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::default();
    let mut rng = GameRng::new(3);

    for _ in 0..20 {
        let resolution = router.resolve(&mut player, TileColor::Regular, &mut rng, &mut terminal).unwrap();
        if let ResolutionKind::Event { description } = resolution.kind {
            assert!(router.events().iter().any(|e| e.description == description));
        }
    }
}

#[test]
fn test_no_events_degrades() {
    let mut router = EffectRouter::new(vec![], vec![]).with_event_trigger(EventTrigger::Alternate);
    let mut player = scientist();
    let mut terminal = ScriptedTerminal::default();

    let resolution = router
        .resolve(&mut player, TileColor::Regular, &mut GameRng::new(1), &mut terminal)
        .unwrap();

    assert_eq!(resolution.kind, ResolutionKind::Skipped(SkipReason::NoEvents));
    assert_eq!(player, scientist());
    assert!(terminal.saw("No random events loaded."));
}
