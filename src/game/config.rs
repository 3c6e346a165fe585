use super::constants::{
  DEFAULT_BASE_SPEED, DEFAULT_BOOST_SPEED, DEFAULT_GAME_RADIUS, DEFAULT_INITIAL_MASS,
  DEFAULT_INITIAL_SCORE, DEFAULT_INITIAL_SEGMENTS, DEFAULT_MAX_SEGMENTS, DEFAULT_MOVE_DISTANCE,
  DEFAULT_PLAY_RADIUS, DEFAULT_SPAWN_SPACING, DEFAULT_SPEED_ANGLE_DIVISOR,
  DEFAULT_SPEED_PER_SCALE, DEFAULT_TURN_RATE, MIN_SEGMENTS,
};
use super::growth::GrowthCurve;
use super::types::Point;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Tunables in the scaling the wire protocol announces them with: speeds in
/// hundredths, turn rate in thousandths of a radian, angle divisor in tenths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
  pub base_speed: f64,
  pub speed_per_scale: f64,
  pub boost_speed: f64,
  pub turn_rate: f64,
  pub speed_angle_divisor: f64,
  pub move_distance: f64,
  pub initial_score: i64,
  pub max_segments: usize,
  /// The arena centre sits at `(game_radius, game_radius)`.
  pub game_radius: f64,
  pub play_radius: f64,
  pub initial_segments: usize,
  pub initial_mass: f64,
  pub spawn_spacing: f64,
}

impl Default for SnakeConfig {
  fn default() -> Self {
    Self {
      base_speed: DEFAULT_BASE_SPEED,
      speed_per_scale: DEFAULT_SPEED_PER_SCALE,
      boost_speed: DEFAULT_BOOST_SPEED,
      turn_rate: DEFAULT_TURN_RATE,
      speed_angle_divisor: DEFAULT_SPEED_ANGLE_DIVISOR,
      move_distance: DEFAULT_MOVE_DISTANCE,
      initial_score: DEFAULT_INITIAL_SCORE,
      max_segments: DEFAULT_MAX_SEGMENTS,
      game_radius: DEFAULT_GAME_RADIUS,
      play_radius: DEFAULT_PLAY_RADIUS,
      initial_segments: DEFAULT_INITIAL_SEGMENTS,
      initial_mass: DEFAULT_INITIAL_MASS,
      spawn_spacing: DEFAULT_SPAWN_SPACING,
    }
  }
}

impl SnakeConfig {
  pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
    let config: Self = serde_json::from_str(raw).context("invalid snake config json")?;
    config.validate()?;
    Ok(config)
  }

  pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read snake config {}", path.display()))?;
    Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
  }

  /// Loads the file named by `SNAKE_CONFIG`, or the defaults when unset.
  pub fn from_env() -> anyhow::Result<Self> {
    match env::var("SNAKE_CONFIG") {
      Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
      _ => Ok(Self::default()),
    }
  }

  pub fn validate(&self) -> anyhow::Result<()> {
    if self.max_segments < MIN_SEGMENTS {
      bail!("max_segments must be at least {MIN_SEGMENTS}, got {}", self.max_segments);
    }
    if self.initial_segments < MIN_SEGMENTS {
      bail!(
        "initial_segments must be at least {MIN_SEGMENTS}, got {}",
        self.initial_segments
      );
    }
    if self.initial_segments > self.max_segments {
      bail!(
        "initial_segments ({}) exceeds max_segments ({})",
        self.initial_segments,
        self.max_segments
      );
    }
    let positive = [
      ("base_speed", self.base_speed),
      ("boost_speed", self.boost_speed),
      ("turn_rate", self.turn_rate),
      ("speed_angle_divisor", self.speed_angle_divisor),
      ("move_distance", self.move_distance),
      ("game_radius", self.game_radius),
      ("play_radius", self.play_radius),
    ];
    for (name, value) in positive {
      if !value.is_finite() || value <= 0.0 {
        bail!("{name} must be a positive finite number, got {value}");
      }
    }
    let finite = [
      ("speed_per_scale", self.speed_per_scale),
      ("spawn_spacing", self.spawn_spacing),
    ];
    for (name, value) in finite {
      if !value.is_finite() {
        bail!("{name} must be finite, got {value}");
      }
    }
    if !(0.0..1.0).contains(&self.initial_mass) {
      bail!("initial_mass must be in [0, 1), got {}", self.initial_mass);
    }
    Ok(())
  }

  pub fn arena_center(&self) -> Point {
    Point {
      x: self.game_radius,
      y: self.game_radius,
    }
  }
}

/// Validated config plus the growth curve precomputed for its segment cap.
/// Shared by every snake in a world through an `Arc`.
#[derive(Debug, Clone)]
pub struct Rules {
  config: SnakeConfig,
  curve: GrowthCurve,
}

impl Rules {
  pub fn new(config: SnakeConfig) -> anyhow::Result<Self> {
    config.validate()?;
    let curve = GrowthCurve::new(config.max_segments);
    Ok(Self { config, curve })
  }

  pub fn config(&self) -> &SnakeConfig {
    &self.config
  }

  pub fn curve(&self) -> &GrowthCurve {
    &self.curve
  }
}

impl Default for Rules {
  fn default() -> Self {
    let config = SnakeConfig::default();
    let curve = GrowthCurve::new(config.max_segments);
    Self { config, curve }
  }
}
