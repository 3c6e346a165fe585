use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

/// Read-only projection of a snake used to describe it to other subsystems.
///
/// `body` is an owned copy, so later chain mutation on the live entity is
/// never visible through a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnakeSnapshot {
  pub id: String,
  pub name: String,
  pub skin: u8,
  #[serde(rename = "customSkin")]
  pub custom_skin: Option<Vec<u8>>,
  pub x: f64,
  pub y: f64,
  pub heading: f64,
  #[serde(rename = "wantedHeading")]
  pub wanted_heading: f64,
  #[serde(rename = "encodedHeading")]
  pub encoded_heading: f64,
  #[serde(rename = "encodedWantedHeading")]
  pub encoded_wanted_heading: f64,
  pub speed: f64,
  pub boosting: bool,
  #[serde(rename = "segmentCount")]
  pub segment_count: usize,
  pub mass: f64,
  pub score: i64,
  pub kills: u32,
  pub body: Vec<Point>,
}
