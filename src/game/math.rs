use super::types::Point;

pub fn distance_sq(a: Point, b: Point) -> f64 {
  let dx = a.x - b.x;
  let dy = a.y - b.y;
  dx * dx + dy * dy
}

pub fn distance(a: Point, b: Point) -> f64 {
  distance_sq(a, b).sqrt()
}

/// Point reached by travelling `dist` from `origin` along `angle` radians.
pub fn advance(origin: Point, angle: f64, dist: f64) -> Point {
  Point {
    x: origin.x + angle.cos() * dist,
    y: origin.y + angle.sin() * dist,
  }
}

/// True when circles of radius `ra` and `rb` strictly overlap.
pub fn circles_overlap(a: Point, b: Point, ra: f64, rb: f64) -> bool {
  let reach = ra + rb;
  distance_sq(a, b) < reach * reach
}

pub fn random_heading() -> f64 {
  rand::random::<f64>() * std::f64::consts::TAU
}
