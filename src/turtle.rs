//! Turtle state and operations for planar drawing interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The pose of the drawing cursor.
///
/// Tracks position and heading on the plane. The heading is kept in degrees
/// and accumulates without wraparound normalization: four left turns of 90
/// degrees leave it at `360.0`, not `0.0`. Conversion to radians happens only
/// when a forward move needs a direction vector, so arbitrarily large
/// headings still resolve correctly through the periodic trig functions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: Vec2,

    /// Heading in degrees, counter-clockwise from the +X axis.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 90.0, // facing "up"
        }
    }
}

impl TurtleState {
    /// Creates a turtle at `position` facing `heading` degrees.
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Returns the unit vector along the current heading.
    pub fn heading_vector(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// Turns the turtle counter-clockwise by `degrees` (negative turns
    /// clockwise). No normalization is applied.
    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees;
    }

    /// Returns the position reached by moving `distance` forward from here.
    pub fn advanced(&self, distance: f32) -> Vec2 {
        self.position + self.heading_vector() * distance
    }
}

/// Operations that can be performed by the drawing turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Move forward by the current step length and emit a segment
    /// (`F`, `G`, `R`, `L`).
    Draw,
    /// Move forward without emitting anything (`f`, pen-up).
    Move,
    /// Turn by the configured angle times the given sign (`+` / `-`).
    Turn(f32),
    /// Save the current pose onto the state stack (`[`).
    Push,
    /// Restore the most recently saved pose (`]`).
    Pop,
    /// Divide the step length by the configured scale factor (`<`).
    ScaleDown,
    /// Multiply the step length by the configured scale factor (`>`).
    ScaleUp,
    /// No-op; the symbol has no registered meaning.
    Ignore,
}
