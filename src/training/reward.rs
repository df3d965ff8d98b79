//! Discounted reward shaping.
//!
//! Converts a finished game's play record into training arrays:
//!
//! - **Rewards**: play `i` of `N` receives `discount^(N-1-i) * base`, so the
//!   last play gets the full terminal reward and earlier plays get less
//! - **Features**: one `FEATURE_WIDTH` row per play (pre-move board
//!   followed by the one-hot move)

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Player;
use crate::error::{Error, Result};
use crate::nn::{BoardEncoder, CellEncoding, FEATURE_WIDTH};
use crate::rules::Outcome;
use crate::training::record::PlayRecord;

/// Reward shaping parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Terminal reward when the recorded player wins (default: 100).
    pub win_reward: f64,

    /// Terminal reward when the opponent wins (default: -100).
    pub loss_reward: f64,

    /// Terminal reward on a draw (default: 0).
    pub draw_reward: f64,

    /// Per-step decay applied going back from the last play (default: 0.8).
    /// Must be in (0, 1].
    pub discount_factor: f64,

    /// Numeric cell encoding for the feature matrix.
    pub encoding: CellEncoding,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win_reward: 100.0,
            loss_reward: -100.0,
            draw_reward: 0.0,
            discount_factor: 0.8,
            encoding: CellEncoding::default(),
        }
    }
}

impl RewardConfig {
    /// Set the reward for a win.
    pub fn with_win_reward(mut self, reward: f64) -> Self {
        self.win_reward = reward;
        self
    }

    /// Set the reward for a loss.
    pub fn with_loss_reward(mut self, reward: f64) -> Self {
        self.loss_reward = reward;
        self
    }

    /// Set the reward for a draw.
    pub fn with_draw_reward(mut self, reward: f64) -> Self {
        self.draw_reward = reward;
        self
    }

    /// Set the discount factor.
    pub fn with_discount_factor(mut self, gamma: f64) -> Self {
        self.discount_factor = gamma;
        self
    }

    /// Set the cell encoding.
    pub fn with_encoding(mut self, encoding: CellEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Check that rewards are finite, the discount is in (0, 1] and the
    /// encoding is usable.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("win_reward", self.win_reward),
            ("loss_reward", self.loss_reward),
            ("draw_reward", self.draw_reward),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    message: format!("{} must be finite, got {}", name, value),
                });
            }
        }

        if !(self.discount_factor > 0.0 && self.discount_factor <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "discount_factor must be in (0, 1], got {}",
                    self.discount_factor
                ),
            });
        }

        self.encoding.validate()
    }

    /// Terminal reward for `player` given the outcome.
    #[must_use]
    pub fn base_reward(&self, outcome: Outcome, player: Player) -> f64 {
        match outcome {
            Outcome::Winner(winner) if winner == player => self.win_reward,
            Outcome::Winner(_) => self.loss_reward,
            Outcome::Draw => self.draw_reward,
        }
    }
}

/// Training arrays for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingBatch {
    /// One discounted reward per play, chronological.
    pub rewards: Vec<f64>,

    /// Row-major `len() x FEATURE_WIDTH` feature matrix.
    pub features: Vec<f32>,
}

impl TrainingBatch {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Feature matrix shape as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), FEATURE_WIDTH)
    }

    /// Get one feature row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(FEATURE_WIDTH)?;
        self.features.get(start..start + FEATURE_WIDTH)
    }

    /// Iterate over feature rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.features.chunks_exact(FEATURE_WIDTH)
    }

    /// Encode to bytes for handing to a trainer process.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes, checking the matrix shape.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let batch: Self = bincode::deserialize(bytes)?;
        if batch.features.len() != batch.rewards.len() * FEATURE_WIDTH {
            return Err(Error::InvalidInput {
                reason: format!(
                    "feature length {} does not match {} rewards x {} columns",
                    batch.features.len(),
                    batch.rewards.len(),
                    FEATURE_WIDTH
                ),
            });
        }
        Ok(batch)
    }
}

/// Computes discounted rewards and features from play records.
///
/// Stateless apart from its configuration, so one shaper can serve any
/// number of games, including from several threads.
#[derive(Clone, Debug, Default)]
pub struct RewardShaper {
    config: RewardConfig,
    encoder: BoardEncoder,
}

impl RewardShaper {
    /// Create a shaper, validating the configuration.
    pub fn new(config: RewardConfig) -> Result<Self> {
        config.validate()?;
        let encoder = BoardEncoder::new(config.encoding);
        Ok(Self { config, encoder })
    }

    #[must_use]
    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Compute rewards and the feature matrix for a finished game.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `plays` is empty.
    pub fn compute(&self, outcome: Outcome, plays: &PlayRecord) -> Result<TrainingBatch> {
        if plays.is_empty() {
            return Err(Error::InvalidInput {
                reason: "play record is empty".to_string(),
            });
        }

        let player = plays.player();
        let base = self.config.base_reward(outcome, player);
        let n = plays.len();

        let mut rewards = Vec::with_capacity(n);
        let mut features = Vec::with_capacity(n * FEATURE_WIDTH);

        for (i, play) in plays.iter().enumerate() {
            let steps_back = (n - 1 - i) as i32;
            let reward = self.config.discount_factor.powi(steps_back) * base;
            trace!(index = i, cell = %play.mv, reward, "shaped play");

            rewards.push(reward);
            let row = self.encoder.encode_play(&play.board_before, play.mv, player);
            features.extend_from_slice(&row);
        }

        Ok(TrainingBatch { rewards, features })
    }
}

/// Compute rewards and features with the given configuration.
///
/// Convenience wrapper over [`RewardShaper`].
pub fn compute_rewards(
    outcome: Outcome,
    plays: &PlayRecord,
    config: &RewardConfig,
) -> Result<TrainingBatch> {
    RewardShaper::new(config.clone())?.compute(outcome, plays)
}
