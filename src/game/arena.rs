use super::config::Rules;
use super::constants::{FOOD_PICKUP_RADIUS, FOOD_SIZE_MAX, FOOD_SIZE_MIN};
use super::math::{advance, circles_overlap};
use super::snake::Snake;
use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::f64::consts::TAU;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
  pub position: Point,
  pub size: f64,
}

#[derive(Debug, Default)]
pub struct TickReport {
  pub dead: Vec<String>,
  pub eaten: usize,
  pub dropped: usize,
}

/// Minimal scheduler that drives a set of snakes one tick at a time.
///
/// Order per tick: steer and move every snake, then eat, then run the
/// collision pass against the settled positions. Dead snakes are reported,
/// not removed; the caller decides what happens to them.
#[derive(Debug)]
pub struct Arena {
  rules: Arc<Rules>,
  snakes: Vec<Snake>,
  food: Vec<Food>,
  rng: StdRng,
}

impl Arena {
  pub fn new(rules: Arc<Rules>, seed: u64) -> Self {
    Self {
      rules,
      snakes: Vec::new(),
      food: Vec::new(),
      rng: StdRng::seed_from_u64(seed),
    }
  }

  pub fn rules(&self) -> &Arc<Rules> {
    &self.rules
  }

  pub fn snakes(&self) -> &[Snake] {
    &self.snakes
  }

  pub fn snakes_mut(&mut self) -> &mut [Snake] {
    &mut self.snakes
  }

  pub fn snake(&self, id: &str) -> Option<&Snake> {
    self.snakes.iter().find(|snake| snake.id() == id)
  }

  pub fn snake_mut(&mut self, id: &str) -> Option<&mut Snake> {
    self.snakes.iter_mut().find(|snake| snake.id() == id)
  }

  pub fn food(&self) -> &[Food] {
    &self.food
  }

  pub fn add_food(&mut self, position: Point, size: f64) {
    self.food.push(Food { position, size });
  }

  pub fn insert(&mut self, snake: Snake) {
    self.snakes.push(snake);
  }

  /// Spawns a snake somewhere in the inner half of the play area.
  pub fn spawn_snake(&mut self, name: &str, skin: u8) -> String {
    let position = self.random_point(0.5);
    let heading = self.rng.gen::<f64>() * TAU;
    let id = Uuid::new_v4().to_string();
    let snake = Snake::with_heading(
      id.clone(),
      name,
      skin,
      position,
      heading,
      Arc::clone(&self.rules),
    );
    self.snakes.push(snake);
    id
  }

  pub fn scatter_food(&mut self, count: usize) {
    for _ in 0..count {
      let position = self.random_point(0.95);
      let size = self.rng.gen_range(FOOD_SIZE_MIN..FOOD_SIZE_MAX);
      self.food.push(Food { position, size });
    }
  }

  fn random_point(&mut self, fraction: f64) -> Point {
    let config = self.rules.config();
    let radius = config.play_radius * fraction * self.rng.gen::<f64>().sqrt();
    let angle = self.rng.gen::<f64>() * TAU;
    advance(config.arena_center(), angle, radius)
  }

  /// Removes a snake and leaves food along its body.
  pub fn remove(&mut self, id: &str) -> Option<Snake> {
    let index = self.snakes.iter().position(|snake| snake.id() == id)?;
    let snake = self.snakes.swap_remove(index);
    for segment in snake.body() {
      self.food.push(Food {
        position: *segment,
        size: FOOD_SIZE_MAX,
      });
    }
    tracing::debug!(snake_id = id, segments = snake.segment_count(), "snake removed");
    Some(snake)
  }

  pub fn tick(&mut self, delta_ms: f64) -> TickReport {
    let mut report = TickReport::default();

    for snake in &mut self.snakes {
      snake.update(delta_ms);
      snake.move_forward();
      snake.materialize_pending_growth();
      if let Some(position) = snake.dropped_food() {
        self.food.push(Food {
          position,
          size: FOOD_SIZE_MIN,
        });
        report.dropped += 1;
      }
    }

    for snake in &mut self.snakes {
      let head = snake.position();
      let reach = snake.head_radius();
      let mut index = self.food.len();
      while index > 0 {
        index -= 1;
        let item = self.food[index];
        if !circles_overlap(head, item.position, reach, FOOD_PICKUP_RADIUS) {
          continue;
        }
        self.food.swap_remove(index);
        snake.add_mass_from_food(item.size);
        report.eaten += 1;
      }
    }

    let mut dead: Vec<String> = Vec::new();
    let mut killers: HashSet<String> = HashSet::new();
    for snake in &self.snakes {
      if snake.hit_boundary() {
        dead.push(snake.id().to_string());
        continue;
      }
      if let Some(other) = self.snakes.iter().find(|other| snake.collides_with(other)) {
        dead.push(snake.id().to_string());
        killers.insert(other.id().to_string());
      }
    }

    for snake in &mut self.snakes {
      if killers.contains(snake.id()) {
        snake.record_kill();
      }
      snake.refresh_score();
    }

    for id in &dead {
      tracing::debug!(snake_id = %id, "snake died");
    }
    report.dead = dead;
    report
  }
}
