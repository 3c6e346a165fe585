//! Fixed angle-unit space shared with the wire encoding.
//!
//! A full turn is `ANGLE_MAX` units. Turn-rate math and wraparound comparisons
//! happen here rather than on radians so the simulated heading matches the
//! quantized value clients receive.

use super::constants::{ANGLE_MAX, HALF_ANGLE_MAX, HEADING_INPUT_MAX};
use std::f64::consts::TAU;

pub const RAD_TO_ANGLE: f64 = ANGLE_MAX / TAU;
pub const ANGLE_TO_RAD: f64 = TAU / ANGLE_MAX;

/// Reduces `units` into `[0, ANGLE_MAX)` with floored modulo.
pub fn wrap_units(units: f64) -> f64 {
    let wrapped = units.rem_euclid(ANGLE_MAX);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= ANGLE_MAX {
        0.0
    } else {
        wrapped
    }
}

/// Minimal signed rotation from `current` to `target`, in angle units.
///
/// A difference of exactly half a turn is left as-is in either direction.
pub fn shortest_diff_units(target: f64, current: f64) -> f64 {
    let diff = target - current;
    if diff > HALF_ANGLE_MAX {
        diff - ANGLE_MAX
    } else if diff < -HALF_ANGLE_MAX {
        diff + ANGLE_MAX
    } else {
        diff
    }
}

pub fn radians_to_units(radians: f64) -> f64 {
    radians * RAD_TO_ANGLE
}

pub fn units_to_radians(units: f64) -> f64 {
    units * ANGLE_TO_RAD
}

/// Maps a quantized heading byte (`0..=251` on the wire) into angle units.
/// Values outside that range are not rejected; the formula applies as-is.
pub fn units_from_heading_byte(input: u8) -> f64 {
    (input as f64 / HEADING_INPUT_MAX) * ANGLE_MAX
}
