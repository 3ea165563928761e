//! A single game from character selection to the final scores.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{render_board, PlayerTrack, TileColor, TileDeck};
use crate::core::{GameConfig, GameError, GameRng, PathType, PlayerId, PlayerMap, PlayerState};
use crate::data::{self, CharacterRecord, RandomEvent, Riddle};
use crate::effects::{Effect, EffectRouter, Resolution};
use crate::rules::{winner, GameResult, ScoreLine};
use crate::terminal::Terminal;

/// Stat change applied once when a player picks a path.
///
/// ```
/// use genome_quest::core::PathType;
/// use genome_quest::effects::Stat;
/// use genome_quest::game::path_bonus;
///
/// assert_eq!(path_bonus(PathType::Fellowship).delta(Stat::DiscoverPoints), -5000);
/// assert_eq!(path_bonus(PathType::DirectLab).delta(Stat::Insight), 200);
/// ```
#[must_use]
pub fn path_bonus(path: PathType) -> Effect {
    match path {
        PathType::Fellowship => Effect::batch([
            Effect::discover_points(-5000),
            Effect::accuracy(500),
            Effect::efficiency(500),
            Effect::insight(1000),
        ]),
        PathType::DirectLab => Effect::batch([
            Effect::discover_points(5000),
            Effect::accuracy(200),
            Effect::efficiency(200),
            Effect::insight(200),
        ]),
    }
}

/// One player's move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    /// Tile index after the move.
    pub position: usize,
    pub color: Option<TileColor>,
    /// Whether this move reached the Finish tile.
    pub finished: bool,
    /// Tile effect, absent on the finishing move.
    pub resolution: Option<Resolution>,
}

/// Everything one game needs: lanes, players, data and the RNG.
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    track: PlayerTrack,
    players: PlayerMap<PlayerState>,
    roster: Vec<CharacterRecord>,
    router: EffectRouter,
    history: Vec<TurnRecord>,
}

impl GameSession {
    /// Set up a game with the given data.
    ///
    /// A roster with fewer than two characters is topped up with the
    /// built-in scientists.
    pub fn new(
        config: GameConfig,
        mut roster: Vec<CharacterRecord>,
        events: Vec<RandomEvent>,
        riddles: Vec<Riddle>,
    ) -> Self {
        config.validate();

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "starting game");

        let deck = TileDeck::new(config.regular_quota);
        let lanes = PlayerMap::new(|_| deck.generate(config.board_size, &mut rng));
        let track = PlayerTrack::new(lanes);
        debug!(size = config.board_size, quota = config.regular_quota, "lanes generated");

        if roster.len() < 2 {
            warn!("only {} characters loaded; adding the default roster", roster.len());
            roster.extend(data::default_roster());
        }

        let router = EffectRouter::from_config(&config, events, riddles);
        let players = PlayerMap::new(|p| PlayerState::new(p.to_string()));

        Self {
            config,
            rng,
            track,
            players,
            roster,
            router,
            history: Vec::new(),
        }
    }

    /// Set up a game from the data files named in `config`.
    ///
    /// Missing or unreadable files are logged and treated as empty.
    pub fn load(config: GameConfig) -> Self {
        let capacity = config.max_records;
        let roster = data::load_or_empty(&config.characters_path, capacity);
        let events = data::load_or_empty(&config.events_path, capacity);
        let riddles = data::load_or_empty(&config.riddles_path, capacity);
        Self::new(config, roster, events, riddles)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed that reproduces this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn track(&self) -> &PlayerTrack {
        &self.track
    }

    #[must_use]
    pub fn roster(&self) -> &[CharacterRecord] {
        &self.roster
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player)
    }

    /// Seat a player directly, skipping the selection menus.
    pub fn set_player(&mut self, player: PlayerId, state: PlayerState) {
        self.players[player] = state;
    }

    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<usize> {
        self.track.position(player)
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.players.iter().all(|(_, p)| p.finished)
    }

    /// Full game: pick characters, pick paths, play, report.
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<GameResult, GameError> {
        self.choose_characters(terminal)?;
        self.choose_paths(terminal)?;
        self.play(terminal)
    }

    /// Let each player pick a different scientist from the roster.
    pub fn choose_characters(&mut self, terminal: &mut dyn Terminal) -> Result<(), GameError> {
        let count = self.roster.len() as i64;

        terminal.show("AVAILABLE SCIENTISTS")?;
        for (index, character) in self.roster.iter().enumerate() {
            terminal.show(&format!("{}. {}", index + 1, character.to_player().summary()))?;
        }

        let first = ask_choice(
            terminal,
            &format!("Player 1, choose your scientist (1-{}): ", count),
            |n| (1..=count).contains(&n),
        )?;
        let second = ask_choice(
            terminal,
            &format!("Player 2, choose your scientist (1-{}), but not {}: ", count, first),
            |n| (1..=count).contains(&n) && n != first,
        )?;

        for (player, choice) in PlayerId::all().zip([first, second]) {
            let character = &self.roster[(choice - 1) as usize];
            self.players[player] = character.to_player();
            terminal.show(&format!("{} chose: {}", player, character.name))?;
            info!(%player, character = %character.name, "character chosen");
        }
        Ok(())
    }

    /// Let each player pick a path, then apply the path bonuses.
    pub fn choose_paths(&mut self, terminal: &mut dyn Terminal) -> Result<(), GameError> {
        for player in PlayerId::all() {
            terminal.show(&format!(
                "Path selection for {} ({})",
                player, self.players[player].name
            ))?;
            terminal.show("0 = Training Fellowship (lower starting DP, higher stats)")?;
            terminal.show("1 = Direct Lab Assignment (more starting DP, smaller stat boost)")?;

            let code = ask_choice(terminal, "Your choice: ", |n| PathType::from_code(n).is_some())?;
            if let Some(path) = PathType::from_code(code) {
                self.players[player].path = path;
            }
        }

        for player in PlayerId::all() {
            self.apply_path_bonus(player, terminal)?;
        }
        Ok(())
    }

    /// Apply the bonus for the path `player` has chosen.
    pub fn apply_path_bonus(
        &mut self,
        player: PlayerId,
        terminal: &mut dyn Terminal,
    ) -> Result<(), GameError> {
        let state = &mut self.players[player];
        let bonus = path_bonus(state.path);
        bonus.apply(state);
        terminal.show(&format!("{} takes the {}: {}.", state.name, state.path, bonus))?;
        Ok(())
    }

    /// Alternate turns until both players stand on Finish, then score.
    pub fn play(&mut self, terminal: &mut dyn Terminal) -> Result<GameResult, GameError> {
        while !self.all_finished() {
            for player in PlayerId::all() {
                if self.players[player].finished {
                    continue;
                }
                self.take_turn(player, terminal)?;
            }
        }

        terminal.show("Both players have finished.")?;
        let result = winner(&self.players);
        self.report(result, terminal)?;
        Ok(result)
    }

    /// Move `player` one tile and resolve where they land.
    ///
    /// Panics if the player has already finished.
    pub fn take_turn(
        &mut self,
        player: PlayerId,
        terminal: &mut dyn Terminal,
    ) -> Result<&TurnRecord, GameError> {
        terminal.show(&format!("--- {} ({}) turn ---", player, self.players[player].name))?;

        let finished = self.track.advance(player);
        terminal.show(&render_board(&self.track))?;

        let position = self.track.position(player).unwrap_or_default();
        let color = self.track.tile_color(player, position);
        debug!(%player, position, ?color, "moved");

        let resolution = if finished {
            self.players[player].finished = true;
            terminal.show(&format!("{} reached the finish.", player))?;
            info!(%player, "player finished");
            None
        } else if let Some(color) = color {
            Some(self.resolve_tile(player, color, terminal)?)
        } else {
            warn!(%player, position, "no tile under player");
            None
        };

        self.history.push(TurnRecord { player, position, color, finished, resolution });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Resolve a tile color for `player` through the effect router.
    pub fn resolve_tile(
        &mut self,
        player: PlayerId,
        color: TileColor,
        terminal: &mut dyn Terminal,
    ) -> Result<Resolution, GameError> {
        self.router.resolve(&mut self.players[player], color, &mut self.rng, terminal)
    }

    fn report(&self, result: GameResult, terminal: &mut dyn Terminal) -> Result<(), GameError> {
        for line in ScoreLine::for_players(&self.players) {
            terminal.show(&line.to_string())?;
        }

        match result {
            GameResult::Winner(player) => {
                let name = &self.players[player].name;
                terminal.show(&format!("Winner: {}", name))?;
                info!(%player, name = %name, "game over");
            }
            GameResult::Tie => {
                terminal.show("It's a tie!")?;
                info!("game over: tie");
            }
        }
        Ok(())
    }
}

/// Parse a menu answer as an integer accepted by `valid`.
pub fn parse_choice(input: &str, valid: impl Fn(i64) -> bool) -> Result<i64, GameError> {
    match input.trim().parse::<i64>() {
        Ok(n) if valid(n) => Ok(n),
        _ => Err(GameError::InvalidChoice { input: input.to_string() }),
    }
}

/// Ask until the answer passes `valid`.
fn ask_choice(
    terminal: &mut dyn Terminal,
    question: &str,
    valid: impl Fn(i64) -> bool,
) -> Result<i64, GameError> {
    loop {
        let answer = terminal.ask(question)?;
        match parse_choice(&answer, &valid) {
            Ok(choice) => return Ok(choice),
            Err(err) => {
                debug!("{}", err);
                terminal.show("Invalid choice. Try again.")?;
            }
        }
    }
}
