//! Engine-agnostic drawing output produced by the interpreter.

use crate::turtle::TurtleState;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single drawing instruction for an external renderer.
///
/// Primitives are emitted in the order their symbols were consumed, so a
/// renderer can replay them as-is to animate the drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawPrimitive {
    /// A straight stroke from one point to another.
    Segment {
        /// Start of the stroke.
        from: Vec2,
        /// End of the stroke.
        to: Vec2,
        /// Stroke width hint, passed through untouched for the renderer.
        linewidth: f32,
    },
    /// A point marker.
    Dot {
        /// Location of the marker.
        at: Vec2,
    },
}

/// The complete, engine-agnostic result of interpreting a word.
///
/// This is the "phenotype" generated from an L-system word: an ordered list
/// of drawing primitives plus the turtle's final pose, the leftover state
/// stack, and the step length in effect when interpretation finished. For a
/// balanced word the leftover stack is empty; that is documented behavior,
/// not enforced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    /// Drawing primitives in emission order.
    pub primitives: Vec<DrawPrimitive>,

    /// The turtle's pose after the last symbol.
    pub turtle: TurtleState,

    /// Saved poses never restored by a matching `]`.
    pub stack: Vec<TurtleState>,

    /// Step length after the last symbol (scaling symbols mutate it).
    pub step: f32,
}

impl Sketch {
    /// Creates an empty sketch starting from `turtle` with step length `step`.
    pub fn new(turtle: TurtleState, step: f32) -> Self {
        Self {
            primitives: Vec::new(),
            turtle,
            stack: Vec::new(),
            step,
        }
    }

    /// Appends a stroke.
    pub fn add_segment(&mut self, from: Vec2, to: Vec2, linewidth: f32) {
        self.primitives.push(DrawPrimitive::Segment {
            from,
            to,
            linewidth,
        });
    }

    /// Appends a point marker.
    pub fn add_dot(&mut self, at: Vec2) {
        self.primitives.push(DrawPrimitive::Dot { at });
    }

    /// Number of strokes in the sketch.
    pub fn segment_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Segment { .. }))
            .count()
    }

    /// Number of point markers in the sketch.
    pub fn dot_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Dot { .. }))
            .count()
    }

    /// Whether the sketch holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Axis-aligned bounding box `(min, max)` over every primitive, for a
    /// renderer to size its viewport. `None` when nothing was drawn.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut bounds: Option<(Vec2, Vec2)> = None;
        let mut include = |bounds: &mut Option<(Vec2, Vec2)>, p: Vec2| {
            *bounds = Some(match *bounds {
                Some((min, max)) => (min.min(p), max.max(p)),
                None => (p, p),
            });
        };
        for primitive in &self.primitives {
            match primitive {
                DrawPrimitive::Segment { from, to, .. } => {
                    include(&mut bounds, *from);
                    include(&mut bounds, *to);
                }
                DrawPrimitive::Dot { at } => include(&mut bounds, *at),
            }
        }
        bounds
    }
}
