use super::angle::{
    radians_to_units, shortest_diff_units, units_from_heading_byte, units_to_radians, wrap_units,
};
use super::config::{Rules, SnakeConfig};
use super::constants::{
    FOOD_MASS_DIVISOR, FOOD_MASS_FACTOR, MAX_SCALE, MIN_SEGMENTS, SCORE_MASS_FACTOR,
    SEGMENTS_PER_SCALE, TURN_DEADZONE_RAD,
};
use super::math::{advance, random_heading};
use super::types::{Point, SnakeSnapshot};
use std::f64::consts::PI;
use std::sync::Arc;

/// Authoritative state of one creature.
///
/// The encoded headings are the source of truth for steering; the radian
/// fields are re-derived from them on every `update`.
#[derive(Debug, Clone)]
pub struct Snake {
    rules: Arc<Rules>,
    id: String,
    name: String,
    skin: u8,
    custom_skin: Option<Vec<u8>>,
    position: Point,
    heading: f64,
    wanted_heading: f64,
    encoded_heading: f64,
    encoded_wanted_heading: f64,
    speed: f64,
    boosting: bool,
    segment_count: usize,
    mass: f64,
    body: Vec<Point>,
    pending_growth: u32,
    score: i64,
    kills: u32,
    dropped_food: Option<Point>,
}

impl Snake {
    /// Spawns a snake at `position` facing a random direction.
    pub fn spawn(
        id: impl Into<String>,
        name: impl Into<String>,
        skin: u8,
        position: Point,
        rules: Arc<Rules>,
    ) -> Self {
        Self::with_heading(id, name, skin, position, random_heading(), rules)
    }

    pub fn with_heading(
        id: impl Into<String>,
        name: impl Into<String>,
        skin: u8,
        position: Point,
        heading: f64,
        rules: Arc<Rules>,
    ) -> Self {
        let config = rules.config();
        let encoded_heading = wrap_units(radians_to_units(heading));
        let heading = units_to_radians(encoded_heading);
        let segment_count = config.initial_segments;
        let body = straight_tail(position, heading, segment_count, config.spawn_spacing);

        let snake = Self {
            id: id.into(),
            name: name.into(),
            skin,
            custom_skin: None,
            position,
            heading,
            wanted_heading: heading,
            encoded_heading,
            encoded_wanted_heading: encoded_heading,
            speed: config.base_speed / 100.0,
            boosting: false,
            segment_count,
            mass: config.initial_mass,
            body,
            pending_growth: 0,
            score: config.initial_score,
            kills: 0,
            dropped_food: None,
            rules,
        };
        tracing::debug!(
            snake_id = %snake.id,
            x = position.x,
            y = position.y,
            heading,
            "snake spawned"
        );
        snake
    }

    fn config(&self) -> &SnakeConfig {
        self.rules.config()
    }

    pub fn scale(&self) -> f64 {
        let extra = self.segment_count.saturating_sub(MIN_SEGMENTS) as f64;
        (1.0 + extra / SEGMENTS_PER_SCALE).min(MAX_SCALE)
    }

    /// Turn agility from size, in `[0.28, 1.0]`; bigger creatures turn slower.
    pub fn turn_agility_from_scale(&self) -> f64 {
        0.28 + 0.72 * ((7.0 - self.scale()) / 6.0).powf(1.5)
    }

    /// Turn agility from the current speed, capped at 1.
    pub fn turn_agility_from_speed(&self) -> f64 {
        (self.speed / (self.config().speed_angle_divisor / 10.0)).min(1.0)
    }

    pub fn base_speed(&self) -> f64 {
        let config = self.config();
        config.base_speed / 100.0 + config.speed_per_scale / 100.0 * self.scale()
    }

    pub fn boost_speed(&self) -> f64 {
        self.config().boost_speed / 100.0
    }

    pub fn current_speed(&self) -> f64 {
        if self.boosting {
            self.boost_speed()
        } else {
            self.base_speed()
        }
    }

    /// Largest heading change allowed for a tick of `delta_ms`, in radians.
    pub fn max_turn_radians(&self, delta_ms: f64) -> f64 {
        let turn_rate = self.config().turn_rate / 1000.0;
        turn_rate * (delta_ms / 8.0) * self.turn_agility_from_scale() * self.turn_agility_from_speed()
    }

    /// Rate-limited steering toward the wanted heading, then speed refresh.
    pub fn update(&mut self, delta_ms: f64) {
        let max_turn = radians_to_units(self.max_turn_radians(delta_ms));
        let diff = shortest_diff_units(self.encoded_wanted_heading, self.encoded_heading);
        let deadzone = radians_to_units(TURN_DEADZONE_RAD);

        if diff.abs() > deadzone {
            self.encoded_heading = if diff.abs() <= max_turn {
                wrap_units(self.encoded_wanted_heading)
            } else {
                wrap_units(self.encoded_heading + diff.signum() * max_turn)
            };
        }

        self.heading = units_to_radians(self.encoded_heading);
        self.wanted_heading = units_to_radians(self.encoded_wanted_heading);
        self.speed = self.current_speed();
    }

    /// Advances the head one fixed step and drags the chain behind it.
    ///
    /// Step length is `move_distance` regardless of speed or boost. While
    /// boosting, one unit of mass burns per call; when that underflows, the
    /// tail is shed into `dropped_food`.
    pub fn move_forward(&mut self) -> Point {
        let next = advance(self.position, self.heading, self.config().move_distance);

        self.trail_head();
        self.position = next;
        self.dropped_food = None;

        if self.boosting && self.segment_count > MIN_SEGMENTS {
            self.mass -= 1.0;
            if self.mass < 0.0 {
                self.mass += 1.0;
                if self.segment_count > MIN_SEGMENTS {
                    self.shed_tail();
                }
            }
        }

        next
    }

    fn trail_head(&mut self) {
        if self.body.is_empty() {
            return;
        }
        self.body.rotate_right(1);
        self.body[0] = self.position;
    }

    fn shed_tail(&mut self) {
        if let Some(tail) = self.body.pop() {
            self.dropped_food = Some(tail);
        }
        self.segment_count -= 1;
        tracing::trace!(
            snake_id = %self.id,
            segment_count = self.segment_count,
            dropped = ?self.dropped_food,
            "boost shed tail"
        );
    }

    /// Sets the wanted heading from a quantized input byte (`0..=251`).
    pub fn set_wanted_heading_byte(&mut self, input: u8) {
        self.encoded_wanted_heading = wrap_units(units_from_heading_byte(input));
        self.wanted_heading = units_to_radians(self.encoded_wanted_heading);
    }

    pub fn set_wanted_heading(&mut self, radians: f64) {
        self.encoded_wanted_heading = wrap_units(radians_to_units(radians));
        self.wanted_heading = units_to_radians(self.encoded_wanted_heading);
    }

    /// Turning boost on at minimum length is ignored; turning it off always works.
    pub fn set_boost(&mut self, boosting: bool) {
        if self.segment_count > MIN_SEGMENTS || !boosting {
            self.boosting = boosting;
        }
    }

    /// Credits mass for an eaten food item of `food_size`.
    /// Returns how many whole segments were gained.
    pub fn add_mass_from_food(&mut self, food_size: f64) -> usize {
        let credit = food_size * food_size * FOOD_MASS_FACTOR / FOOD_MASS_DIVISOR;
        self.credit_mass(credit)
    }

    /// Credits mass for an externally decided score award.
    pub fn add_score(&mut self, amount: f64) -> usize {
        self.credit_mass(amount * SCORE_MASS_FACTOR)
    }

    fn credit_mass(&mut self, credit: f64) -> usize {
        self.mass += credit;
        let max_segments = self.config().max_segments;
        let mut grown = 0;
        while self.mass >= 1.0 && self.segment_count < max_segments {
            self.mass -= 1.0;
            self.segment_count += 1;
            self.pending_growth += 1;
            grown += 1;
        }
        if grown > 0 {
            tracing::trace!(
                snake_id = %self.id,
                grown,
                segment_count = self.segment_count,
                "snake grew"
            );
            if self.segment_count >= max_segments {
                tracing::debug!(snake_id = %self.id, max_segments, "snake reached segment cap");
            }
        }
        grown
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth > 0
    }

    pub fn consume_one_pending_growth(&mut self) {
        self.pending_growth = self.pending_growth.saturating_sub(1);
    }

    /// Drains one pending-growth credit and appends a chain entry on top of
    /// the current tail, returning it. The new entry spreads out naturally as
    /// the chain shifts on later moves.
    pub fn materialize_pending_growth(&mut self) -> Option<Point> {
        if !self.has_pending_growth() {
            return None;
        }
        self.consume_one_pending_growth();
        let anchor = self.body.last().copied().unwrap_or(self.position);
        self.body.push(anchor);
        Some(anchor)
    }

    pub fn score(&self) -> i64 {
        self.rules.curve().score(self.segment_count, self.mass)
    }

    /// Recomputes the score and stores it as the published value.
    pub fn refresh_score(&mut self) -> i64 {
        self.score = self.score();
        self.score
    }

    pub fn published_score(&self) -> i64 {
        self.score
    }

    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            skin: self.skin,
            custom_skin: self.custom_skin.clone(),
            x: self.position.x,
            y: self.position.y,
            heading: self.heading,
            wanted_heading: self.wanted_heading,
            encoded_heading: self.encoded_heading,
            encoded_wanted_heading: self.encoded_wanted_heading,
            speed: self.speed,
            boosting: self.boosting,
            segment_count: self.segment_count,
            mass: self.mass,
            score: self.score(),
            kills: self.kills,
            body: self.body.clone(),
        }
    }

    pub fn rules(&self) -> &Arc<Rules> {
        &self.rules
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skin(&self) -> u8 {
        self.skin
    }

    pub fn custom_skin(&self) -> Option<&[u8]> {
        self.custom_skin.as_deref()
    }

    pub fn set_custom_skin(&mut self, skin: Option<Vec<u8>>) {
        self.custom_skin = skin;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn wanted_heading(&self) -> f64 {
        self.wanted_heading
    }

    pub fn encoded_heading(&self) -> f64 {
        self.encoded_heading
    }

    pub fn encoded_wanted_heading(&self) -> f64 {
        self.encoded_wanted_heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_boosting(&self) -> bool {
        self.boosting
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Tail position shed by the last `move_forward`, if any.
    pub fn dropped_food(&self) -> Option<Point> {
        self.dropped_food
    }
}

fn straight_tail(head: Point, heading: f64, count: usize, spacing: f64) -> Vec<Point> {
    let tail_angle = heading + PI;
    (0..count)
        .map(|index| advance(head, tail_angle, (index + 1) as f64 * spacing))
        .collect()
}
