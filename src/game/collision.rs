use super::constants::{HEAD_LENIENCY, NECK_SKIP_FRACTION, NECK_SKIP_MAX, RADIUS_PER_SCALE};
use super::math::{circles_overlap, distance, distance_sq};
use super::snake::Snake;
use super::types::Point;

impl Snake {
  pub fn head_radius(&self) -> f64 {
    RADIUS_PER_SCALE * self.scale()
  }

  pub fn body_radius(&self) -> f64 {
    RADIUS_PER_SCALE * self.scale()
  }

  /// Number of chain entries behind the head that `exclude_head` skips.
  pub fn neck_length(&self) -> usize {
    let fraction = (self.segment_count() as f64 * NECK_SKIP_FRACTION).floor() as usize;
    fraction.min(NECK_SKIP_MAX)
  }

  /// Tests a circle of `radius` at `point` against every body segment.
  ///
  /// With `exclude_head` the first `neck_length()` segments are ignored so a
  /// snake's own head never registers against the neck right behind it.
  pub fn is_point_on_body(&self, point: Point, radius: f64, exclude_head: bool) -> bool {
    let start = if exclude_head { self.neck_length() } else { 0 };
    let body_radius = self.body_radius();
    self
      .body()
      .iter()
      .skip(start)
      .any(|segment| circles_overlap(point, *segment, radius, body_radius))
  }

  /// True when this snake's head runs into `other`'s body. A snake never
  /// collides with itself through this query.
  pub fn collides_with(&self, other: &Snake) -> bool {
    if other.id() == self.id() {
      return false;
    }
    other.is_point_on_body(self.position(), self.head_radius() * HEAD_LENIENCY, false)
  }

  pub fn hit_boundary(&self) -> bool {
    let config = self.rules().config();
    let reach = config.play_radius;
    distance_sq(self.position(), config.arena_center()) >= reach * reach
  }

  pub fn distance_from_center(&self) -> f64 {
    distance(self.position(), self.rules().config().arena_center())
  }
}

#[cfg(test)]
mod tests {
  use crate::game::config::{Rules, SnakeConfig};
  use crate::game::snake::Snake;
  use crate::game::types::Point;
  use std::sync::Arc;

  fn rules() -> Arc<Rules> {
    Arc::new(
      Rules::new(SnakeConfig {
        game_radius: 1000.0,
        play_radius: 900.0,
        initial_segments: 10,
        ..SnakeConfig::default()
      })
      .expect("rules"),
    )
  }

  fn snake_at(id: &str, x: f64, y: f64, heading: f64) -> Snake {
    Snake::with_heading(id, id, 0, Point { x, y }, heading, rules())
  }

  #[test]
  fn radii_scale_with_length() {
    let snake = snake_at("a", 0.0, 0.0, 0.0);
    assert!((snake.head_radius() - 14.5 * snake.scale()).abs() < 1e-12);
    assert_eq!(snake.head_radius(), snake.body_radius());
  }

  #[test]
  fn point_on_body_uses_strict_overlap() {
    let snake = snake_at("a", 0.0, 0.0, 0.0);
    let first = snake.body()[0];
    let reach = snake.body_radius() + 5.0;

    let touching = Point {
      x: first.x,
      y: first.y + reach,
    };
    assert!(!snake.is_point_on_body(touching, 5.0, false));

    let inside = Point {
      x: first.x,
      y: first.y + reach - 0.01,
    };
    assert!(snake.is_point_on_body(inside, 5.0, false));
  }

  #[test]
  fn exclude_head_skips_neck_segments() {
    let snake = snake_at("a", 0.0, 0.0, 0.0);
    assert_eq!(snake.neck_length(), 3);

    let neck = snake.body()[1];
    assert!(snake.is_point_on_body(neck, 0.0, false));
    assert!(!snake.is_point_on_body(neck, 0.0, true));

    let past_neck = snake.body()[3];
    assert!(snake.is_point_on_body(past_neck, 0.0, true));
  }

  #[test]
  fn neck_length_is_capped_at_ten() {
    let mut snake = snake_at("a", 0.0, 0.0, 0.0);
    snake.add_score(100.0 * 90.0);
    assert_eq!(snake.segment_count(), 100);
    assert_eq!(snake.neck_length(), 10);
  }

  #[test]
  fn head_hits_other_body_with_leniency() {
    let victim = snake_at("victim", 0.0, 0.0, 0.0);
    let segment = victim.body()[4];
    let lenient_reach = victim.body_radius() + victim.head_radius() * 0.8;

    let near_miss = snake_at("attacker", segment.x, segment.y + lenient_reach + 0.5, 0.0);
    assert!(!near_miss.collides_with(&victim));
    let full_reach = near_miss.head_radius() + victim.body_radius();
    assert!(lenient_reach + 0.5 < full_reach);

    let hit = snake_at("attacker", segment.x, segment.y + lenient_reach - 0.5, 0.0);
    assert!(hit.collides_with(&victim));
  }

  #[test]
  fn never_collides_with_same_id() {
    let snake = snake_at("same", 0.0, 0.0, 0.0);
    let twin = snake.clone();
    assert!(!snake.collides_with(&twin));
  }

  #[test]
  fn boundary_is_inclusive_at_play_radius() {
    let on_edge = snake_at("a", 1000.0 + 900.0, 1000.0, 0.0);
    assert!(on_edge.hit_boundary());
    assert!((on_edge.distance_from_center() - 900.0).abs() < 1e-9);

    let inside = snake_at("b", 1000.0 + 899.0, 1000.0, 0.0);
    assert!(!inside.hit_boundary());
    assert!((inside.distance_from_center() - 899.0).abs() < 1e-9);
  }
}
