use rand::Rng;
use slither_core::game::arena::Arena;
use slither_core::game::config::{Rules, SnakeConfig};
use slither_core::game::constants::{BOT_COUNT, TICK_MS};
use slither_core::game::types::SnakeSnapshot;
use std::env;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_TICKS: u64 = 1000;
const FOOD_PER_BOT: usize = 40;
const TURN_CHANCE: f64 = 0.04;
const BOOST_CHANCE: f64 = 0.01;
const EDGE_FRACTION: f64 = 0.85;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let config = SnakeConfig::from_env()?;
  let rules = Arc::new(Rules::new(config)?);

  let ticks: u64 = env::var("SIM_TICKS")
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(DEFAULT_TICKS);
  let seed: u64 = env::var("SIM_SEED")
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or_else(rand::random);

  let mut arena = Arena::new(Arc::clone(&rules), seed);
  let mut next_bot = 1;
  for _ in 0..BOT_COUNT {
    arena.spawn_snake(&format!("Bot-{next_bot}"), next_bot as u8);
    next_bot += 1;
  }
  arena.scatter_food(BOT_COUNT * FOOD_PER_BOT);
  tracing::info!(ticks, seed, bots = BOT_COUNT, "simulation starting");

  let mut rng = rand::thread_rng();
  let mut interval = tokio::time::interval(std::time::Duration::from_millis(TICK_MS));
  for tick in 0..ticks {
    interval.tick().await;
    steer_bots(&mut arena, &mut rng);

    let report = arena.tick(TICK_MS as f64);
    for id in &report.dead {
      if let Some(snake) = arena.remove(id) {
        tracing::info!(tick, name = snake.name(), score = snake.score(), "bot died");
      }
      arena.spawn_snake(&format!("Bot-{next_bot}"), next_bot as u8);
      next_bot += 1;
    }

    let shortfall = (BOT_COUNT * FOOD_PER_BOT).saturating_sub(arena.food().len());
    if shortfall > 0 {
      arena.scatter_food(shortfall);
    }
  }

  let mut leaderboard: Vec<SnakeSnapshot> =
    arena.snakes().iter().map(|snake| snake.snapshot()).collect();
  leaderboard.sort_by(|a, b| b.score.cmp(&a.score));
  for entry in &leaderboard {
    tracing::info!(
      name = %entry.name,
      score = entry.score,
      segments = entry.segment_count,
      kills = entry.kills,
      "final standing"
    );
  }
  println!("{}", serde_json::to_string_pretty(&leaderboard)?);

  Ok(())
}

fn steer_bots(arena: &mut Arena, rng: &mut impl Rng) {
  let rules = Arc::clone(arena.rules());
  let center = rules.config().arena_center();
  let edge = rules.config().play_radius * EDGE_FRACTION;

  for snake in arena.snakes_mut() {
    if snake.distance_from_center() > edge {
      let position = snake.position();
      snake.set_wanted_heading((center.y - position.y).atan2(center.x - position.x));
      snake.set_boost(false);
      continue;
    }
    if rng.gen_bool(TURN_CHANCE) {
      snake.set_wanted_heading_byte(rng.gen_range(0..=251));
    }
    if rng.gen_bool(BOOST_CHANCE) {
      let boosting = !snake.is_boosting() && snake.segment_count() > 12;
      snake.set_boost(boosting);
    }
  }
}
