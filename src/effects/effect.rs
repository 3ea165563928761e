//! Stat changes.
//!
//! Every tile outcome and path bonus is expressed as an `Effect` and applied
//! to a `PlayerState` in one place.

use serde::{Deserialize, Serialize};

use crate::core::PlayerState;

/// A numeric player stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Experience,
    Accuracy,
    Efficiency,
    Insight,
    DiscoverPoints,
}

impl Stat {
    fn slot(self, player: &mut PlayerState) -> &mut i64 {
        match self {
            Stat::Experience => &mut player.experience,
            Stat::Accuracy => &mut player.accuracy,
            Stat::Efficiency => &mut player.efficiency,
            Stat::Insight => &mut player.insight,
            Stat::DiscoverPoints => &mut player.discover_points,
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stat::Experience => "Experience",
            Stat::Accuracy => "Accuracy",
            Stat::Efficiency => "Efficiency",
            Stat::Insight => "Insight",
            Stat::DiscoverPoints => "Discover Points",
        };
        f.write_str(name)
    }
}

/// A change to one or more player stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Add `delta` to a stat. No clamping.
    ModifyStat { stat: Stat, delta: i64 },

    /// Apply several effects in order.
    Batch(Vec<Effect>),
}

impl Effect {
    pub fn modify(stat: Stat, delta: i64) -> Self {
        Effect::ModifyStat { stat, delta }
    }

    pub fn accuracy(delta: i64) -> Self {
        Self::modify(Stat::Accuracy, delta)
    }

    pub fn efficiency(delta: i64) -> Self {
        Self::modify(Stat::Efficiency, delta)
    }

    pub fn insight(delta: i64) -> Self {
        Self::modify(Stat::Insight, delta)
    }

    pub fn discover_points(delta: i64) -> Self {
        Self::modify(Stat::DiscoverPoints, delta)
    }

    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Effect::Batch(effects.into_iter().collect())
    }

    /// Apply to a player. Stats saturate at the `i64` bounds.
    pub fn apply(&self, player: &mut PlayerState) {
        match self {
            Effect::ModifyStat { stat, delta } => {
                let slot = stat.slot(player);
                *slot = slot.saturating_add(*delta);
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    effect.apply(player);
                }
            }
        }
    }

    /// Net change this effect makes to `stat`.
    #[must_use]
    pub fn delta(&self, stat: Stat) -> i64 {
        match self {
            Effect::ModifyStat { stat: s, delta } if *s == stat => *delta,
            Effect::ModifyStat { .. } => 0,
            Effect::Batch(effects) => effects
                .iter()
                .fold(0i64, |total, e| total.saturating_add(e.delta(stat))),
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::ModifyStat { stat, delta } => write!(f, "{:+} {}", delta, stat),
            Effect::Batch(effects) => {
                let parts: Vec<String> = effects.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}
