pub const ANGLE_MAX: f64 = 16_777_215.0;
pub const HALF_ANGLE_MAX: f64 = ANGLE_MAX / 2.0;
pub const HEADING_INPUT_MAX: f64 = 251.0;
pub const TURN_DEADZONE_RAD: f64 = 0.0001;

pub const MIN_SEGMENTS: usize = 2;
pub const MAX_SCALE: f64 = 6.0;
pub const SEGMENTS_PER_SCALE: f64 = 106.0;
pub const RADIUS_PER_SCALE: f64 = 14.5;
pub const HEAD_LENIENCY: f64 = 0.8;
pub const NECK_SKIP_MAX: usize = 10;
pub const NECK_SKIP_FRACTION: f64 = 0.3;

pub const FOOD_MASS_FACTOR: f64 = 46.0 * 46.0;
pub const FOOD_MASS_DIVISOR: f64 = 16_777_216.0;
pub const SCORE_MASS_FACTOR: f64 = 0.01;
pub const GROWTH_COST_EXPONENT: f64 = 2.25;

pub const DEFAULT_BASE_SPEED: f64 = 539.0;
pub const DEFAULT_SPEED_PER_SCALE: f64 = 40.0;
pub const DEFAULT_BOOST_SPEED: f64 = 1400.0;
pub const DEFAULT_TURN_RATE: f64 = 33.0;
pub const DEFAULT_SPEED_ANGLE_DIVISOR: f64 = 48.0;
pub const DEFAULT_MOVE_DISTANCE: f64 = 42.0;
pub const DEFAULT_INITIAL_SCORE: i64 = 10;
pub const DEFAULT_MAX_SEGMENTS: usize = 411;
pub const DEFAULT_GAME_RADIUS: f64 = 21_600.0;
pub const DEFAULT_PLAY_RADIUS: f64 = 21_000.0;
pub const DEFAULT_INITIAL_SEGMENTS: usize = 10;
pub const DEFAULT_INITIAL_MASS: f64 = 0.5;
pub const DEFAULT_SPAWN_SPACING: f64 = 42.0;

pub const TICK_MS: u64 = 8;
pub const BOT_COUNT: usize = 6;
pub const FOOD_SIZE_MIN: f64 = 8.0;
pub const FOOD_SIZE_MAX: f64 = 46.0;
pub const FOOD_PICKUP_RADIUS: f64 = 40.0;
