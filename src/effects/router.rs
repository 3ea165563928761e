//! Tile effect dispatch.
//!
//! `EffectRouter` maps the color a player landed on to an effect:
//!
//! | Color | Effect |
//! |---|---|
//! | Regular | 50% chance of a random event (Discover Points delta) |
//! | TaskA | strand similarity, `floor(score * 200)` Accuracy |
//! | TaskB | best strand match, +150 Efficiency if an alignment exists |
//! | TaskC | mutation report, +150 Insight |
//! | TaskD | transcription, +50 Accuracy and +50 Efficiency |
//! | Riddle | +500 Insight for a matching answer |
//! | Start / Finish | nothing |
//!
//! Event and riddle cursors live here, so two routers never share state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Effect;
use crate::board::{DnaTask, TileColor};
use crate::core::{
    EventTrigger, GameConfig, GameError, GameRng, PlayerState, RiddleNormalization, SelectionPolicy,
};
use crate::data::{RandomEvent, Riddle};
use crate::dna;
use crate::terminal::Terminal;

/// Accuracy awarded for a perfect similarity score.
pub const SIMILARITY_MAX_BONUS: i64 = 200;
pub const BEST_MATCH_BONUS: i64 = 150;
pub const MUTATION_BONUS: i64 = 150;
pub const TRANSCRIPTION_BONUS: i64 = 50;
pub const RIDDLE_BONUS: i64 = 500;

/// Why a tile did nothing when it normally would.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    NoEvents,
    NoRiddles,
}

/// What happened on a tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// Start or Finish: nothing to do.
    Nothing,
    /// Regular tile that did not fire an event.
    Quiet,
    /// Regular tile that fired an event.
    Event { description: String },
    /// A DNA task was played.
    Task(DnaTask),
    /// A riddle was answered.
    Riddle { correct: bool },
    /// The tile needed data that was not loaded.
    Skipped(SkipReason),
}

/// Outcome of resolving one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub color: TileColor,
    pub kind: ResolutionKind,
    /// The stat change applied, if any.
    pub effect: Option<Effect>,
}

impl Resolution {
    fn new(color: TileColor, kind: ResolutionKind, effect: Option<Effect>) -> Self {
        Self { color, kind, effect }
    }
}

/// Dispatches tile colors to their effects.
#[derive(Clone, Debug)]
pub struct EffectRouter {
    events: Vec<RandomEvent>,
    riddles: Vec<Riddle>,

    event_policy: SelectionPolicy,
    riddle_policy: SelectionPolicy,
    event_trigger: EventTrigger,
    normalization: RiddleNormalization,

    next_event: usize,
    next_riddle: usize,
    /// For `EventTrigger::Alternate`: whether the next Regular tile fires.
    event_due: bool,

    warned_no_events: bool,
    warned_no_riddles: bool,
}

impl EffectRouter {
    /// Create a router with the default policies.
    pub fn new(events: Vec<RandomEvent>, riddles: Vec<Riddle>) -> Self {
        Self {
            events,
            riddles,
            event_policy: SelectionPolicy::default(),
            riddle_policy: SelectionPolicy::default(),
            event_trigger: EventTrigger::default(),
            normalization: RiddleNormalization::default(),
            next_event: 0,
            next_riddle: 0,
            event_due: true,
            warned_no_events: false,
            warned_no_riddles: false,
        }
    }

    /// Create a router with the policies from `config`.
    pub fn from_config(config: &GameConfig, events: Vec<RandomEvent>, riddles: Vec<Riddle>) -> Self {
        Self::new(events, riddles)
            .with_event_policy(config.event_policy)
            .with_riddle_policy(config.riddle_policy)
            .with_event_trigger(config.event_trigger)
            .with_normalization(config.riddle_normalization)
    }

    #[must_use]
    pub fn with_event_policy(mut self, policy: SelectionPolicy) -> Self {
        self.event_policy = policy;
        self
    }

    #[must_use]
    pub fn with_riddle_policy(mut self, policy: SelectionPolicy) -> Self {
        self.riddle_policy = policy;
        self
    }

    #[must_use]
    pub fn with_event_trigger(mut self, trigger: EventTrigger) -> Self {
        self.event_trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: RiddleNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn events(&self) -> &[RandomEvent] {
        &self.events
    }

    #[must_use]
    pub fn riddles(&self) -> &[Riddle] {
        &self.riddles
    }

    /// Resolve the tile `player` landed on and apply its effect.
    ///
    /// Only I/O failures on the terminal are returned as errors.
    pub fn resolve(
        &mut self,
        player: &mut PlayerState,
        color: TileColor,
        rng: &mut GameRng,
        terminal: &mut dyn Terminal,
    ) -> Result<Resolution, GameError> {
        let resolution = match (color, color.task()) {
            (_, Some(task)) => {
                let effect = run_task(task, terminal)?;
                Resolution::new(color, ResolutionKind::Task(task), effect)
            }
            (TileColor::Regular, None) => self.regular_tile(rng, terminal)?,
            (TileColor::Riddle, None) => self.riddle_tile(player, rng, terminal)?,
            _ => {
                terminal.show("Nothing on this tile.")?;
                Resolution::new(color, ResolutionKind::Nothing, None)
            }
        };

        if let Some(effect) = &resolution.effect {
            effect.apply(player);
            if color.task().is_some() {
                terminal.show(&format!(
                    "Current stats - Accuracy: {}, Efficiency: {}, Insight: {}",
                    player.accuracy, player.efficiency, player.insight
                ))?;
            }
        }

        debug!(player = %player.name, tile = %color, kind = ?resolution.kind, "tile resolved");
        Ok(resolution)
    }

    fn regular_tile(
        &mut self,
        rng: &mut GameRng,
        terminal: &mut dyn Terminal,
    ) -> Result<Resolution, GameError> {
        terminal.show("Green tile: 50% chance of a random event.")?;

        let fires = match self.event_trigger {
            EventTrigger::CoinFlip => rng.gen_bool(0.5),
            EventTrigger::Alternate => {
                let due = self.event_due;
                self.event_due = !due;
                due
            }
        };

        if !fires {
            terminal.show("No event this time.")?;
            return Ok(Resolution::new(TileColor::Regular, ResolutionKind::Quiet, None));
        }

        if self.events.is_empty() {
            if !self.warned_no_events {
                warn!("random event fired but no events are loaded");
                self.warned_no_events = true;
            }
            terminal.show("No random events loaded.")?;
            return Ok(Resolution::new(
                TileColor::Regular,
                ResolutionKind::Skipped(SkipReason::NoEvents),
                None,
            ));
        }

        let index = pick(self.event_policy, &mut self.next_event, self.events.len(), rng);
        let event = &self.events[index];

        terminal.show("--- RANDOM EVENT ---")?;
        terminal.show(&event.description)?;
        let delta = event.discover_point_delta;
        if delta >= 0 {
            terminal.show(&format!("You gain {} Discover Points!", delta))?;
        } else {
            terminal.show(&format!("You lose {} Discover Points...", -delta))?;
        }

        Ok(Resolution::new(
            TileColor::Regular,
            ResolutionKind::Event { description: event.description.clone() },
            Some(Effect::discover_points(delta)),
        ))
    }

    fn riddle_tile(
        &mut self,
        player: &PlayerState,
        rng: &mut GameRng,
        terminal: &mut dyn Terminal,
    ) -> Result<Resolution, GameError> {
        if self.riddles.is_empty() {
            if !self.warned_no_riddles {
                warn!("riddle tile reached but no riddles are loaded");
                self.warned_no_riddles = true;
            }
            terminal.show("No riddles loaded.")?;
            return Ok(Resolution::new(
                TileColor::Riddle,
                ResolutionKind::Skipped(SkipReason::NoRiddles),
                None,
            ));
        }

        let index = pick(self.riddle_policy, &mut self.next_riddle, self.riddles.len(), rng);
        let riddle = &self.riddles[index];

        terminal.show("--- RIDDLE TILE ---")?;
        terminal.show(&riddle.question)?;
        let answer = terminal.ask("Your answer: ")?;

        let correct = self.normalization.matches(&answer, &riddle.answer);
        let effect = if correct {
            terminal.show(&format!("Correct, Insight +{}", RIDDLE_BONUS))?;
            Some(Effect::insight(RIDDLE_BONUS))
        } else {
            terminal.show(&format!("Incorrect, the correct answer is: {}", riddle.answer))?;
            None
        };

        let insight = player.insight + if correct { RIDDLE_BONUS } else { 0 };
        terminal.show(&format!("Insight is now {}", insight))?;

        Ok(Resolution::new(TileColor::Riddle, ResolutionKind::Riddle { correct }, effect))
    }
}

/// Next index under `policy`. `len` must be non-zero.
fn pick(policy: SelectionPolicy, cursor: &mut usize, len: usize, rng: &mut GameRng) -> usize {
    match policy {
        SelectionPolicy::Cyclic => {
            let index = *cursor % len;
            *cursor = (index + 1) % len;
            index
        }
        SelectionPolicy::Random => rng.gen_range_usize(0..len),
    }
}

/// Play one DNA task and return the bonus it earns.
fn run_task(task: DnaTask, terminal: &mut dyn Terminal) -> Result<Option<Effect>, GameError> {
    terminal.show("--- DNA TASK ---")?;
    terminal.show(task.title())?;

    match task {
        DnaTask::Similarity => {
            let first = ask_strand(terminal, "Enter first DNA strand: ")?;
            let second = ask_strand(terminal, "Enter second DNA strand (same length): ")?;

            let bonus = match dna::matching_bases(&first, &second) {
                Ok(matches) => {
                    let score = matches as f64 / first.len() as f64;
                    terminal.show(&format!("Similarity score: {}", score))?;
                    similarity_bonus(matches, first.len())
                }
                Err(err) => {
                    terminal.show(&format!("{}.", capitalize(&err.to_string())))?;
                    0
                }
            };

            terminal.show(&format!("Accuracy increased by {} points.", bonus))?;
            Ok(Some(Effect::accuracy(bonus)))
        }

        DnaTask::BestMatch => {
            let input = ask_strand(terminal, "Enter input strand: ")?;
            let target = ask_strand(terminal, "Enter target strand: ")?;

            match dna::best_alignment(&input, &target) {
                Ok(alignment) => {
                    terminal.show(&format!(
                        "Best match starts at index {} with similarity {}",
                        alignment.index, alignment.score
                    ))?;
                    terminal.show(&format!("Efficiency increased by {} points.", BEST_MATCH_BONUS))?;
                    Ok(Some(Effect::efficiency(BEST_MATCH_BONUS)))
                }
                Err(err) => {
                    terminal.show(&format!("{}.", capitalize(&err.to_string())))?;
                    Ok(None)
                }
            }
        }

        DnaTask::Mutations => {
            let input = ask_strand(terminal, "Enter input strand: ")?;
            let target = ask_strand(terminal, "Enter target strand: ")?;

            terminal.show("Comparing input vs target for mutations...")?;
            match dna::diff_report(&input, &target) {
                Ok(report) if report.is_empty() => terminal.show("No mutations found.")?,
                Ok(report) => {
                    for mutation in &report {
                        terminal.show(&mutation.to_string())?;
                    }
                }
                Err(err) => terminal.show(&format!("{}.", capitalize(&err.to_string())))?,
            }

            terminal.show(&format!("Insight increased by {} points.", MUTATION_BONUS))?;
            Ok(Some(Effect::insight(MUTATION_BONUS)))
        }

        DnaTask::Transcription => {
            let strand = ask_strand(terminal, "Enter DNA strand: ")?;
            terminal.show(&format!("RNA sequence: {}", dna::transcribe(&strand)))?;

            terminal.show(&format!(
                "Accuracy and Efficiency increased by {} points each.",
                TRANSCRIPTION_BONUS
            ))?;
            Ok(Some(Effect::batch([
                Effect::accuracy(TRANSCRIPTION_BONUS),
                Effect::efficiency(TRANSCRIPTION_BONUS),
            ])))
        }
    }
}

/// Accuracy bonus for `matches` agreeing bases out of `len`:
/// `floor(matches / len * 200)`, computed exactly. Zero when `len` is zero.
#[must_use]
pub fn similarity_bonus(matches: usize, len: usize) -> i64 {
    if len == 0 {
        return 0;
    }
    (matches.min(len) as i64 * SIMILARITY_MAX_BONUS) / len as i64
}

/// Strands are single tokens; surrounding whitespace is dropped.
fn ask_strand(terminal: &mut dyn Terminal, question: &str) -> Result<String, GameError> {
    Ok(terminal.ask(question)?.trim().to_string())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
