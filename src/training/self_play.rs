//! Random self-play loop for generating training data.
//!
//! Both players pick uniformly random legal moves. Only the trained
//! player's plays are recorded; each finished game is turned into a
//! `TrainingBatch` by a `RewardShaper`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, GameState, Player};
use crate::error::Result;
use crate::rules::Outcome;

use super::record::PlayRecord;
use super::reward::{RewardShaper, TrainingBatch};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Seed for the worker RNG. Each game gets a forked stream.
    pub seed: u64,

    /// Player whose plays are recorded.
    pub trained_player: Player,

    /// Player who moves first.
    pub opening_player: Player,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            trained_player: Player::X,
            opening_player: Player::X,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the recorded player.
    pub fn with_trained_player(mut self, player: Player) -> Self {
        self.trained_player = player;
        self
    }

    /// Set the player who opens.
    pub fn with_opening_player(mut self, player: Player) -> Self {
        self.opening_player = player;
        self
    }
}

/// One finished self-play game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// The trained player's plays.
    pub record: PlayRecord,

    /// How the game ended.
    pub outcome: Outcome,

    /// Seed of the RNG stream the game was played with.
    pub seed: u64,
}

/// Worker for running random self-play games.
#[derive(Clone, Debug)]
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
    rng: GameRng,
}

impl SelfPlayWorker {
    /// Create a new self-play worker.
    pub fn new(config: SelfPlayConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one game to completion.
    pub fn play_game(&mut self) -> Result<Episode> {
        let game_rng = self.rng.fork();
        let seed = game_rng.seed();
        let mut game = GameState::with_rng(game_rng);
        let mut record = PlayRecord::new(self.config.trained_player);
        let mut to_move = self.config.opening_player;

        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }
            if to_move == record.player() {
                record.play_random(&mut game)?;
            } else {
                game.random_legal_move(to_move)?;
            }
            to_move = to_move.opponent();
        };

        debug!(seed, %outcome, plays = record.len(), "self-play game finished");
        Ok(Episode {
            record,
            outcome,
            seed,
        })
    }

    /// Play `count` games and shape each into a training batch.
    ///
    /// Games in which the trained player never moved are skipped.
    pub fn play_games(
        &mut self,
        count: usize,
        shaper: &RewardShaper,
    ) -> Result<Vec<TrainingBatch>> {
        let mut batches = Vec::with_capacity(count);
        let (mut wins, mut losses, mut draws) = (0usize, 0usize, 0usize);

        for _ in 0..count {
            let episode = self.play_game()?;
            match episode.outcome {
                Outcome::Winner(p) if p == self.config.trained_player => wins += 1,
                Outcome::Winner(_) => losses += 1,
                Outcome::Draw => draws += 1,
            }
            if episode.record.is_empty() {
                continue;
            }
            batches.push(shaper.compute(episode.outcome, &episode.record)?);
        }

        info!(
            games = count,
            wins,
            losses,
            draws,
            trained_player = %self.config.trained_player,
            "self-play complete"
        );
        Ok(batches)
    }
}
