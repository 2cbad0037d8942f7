//! Interpreter that converts an L-system word into a [`Sketch`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`SketchConfig`], adjust symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] if the standard alphabet does not fit, then
//! call [`TurtleInterpreter::draw`] with a rewritten word.

use crate::error::LsystemError;
use crate::sketch::Sketch;
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Distance covered by one forward step.
    pub length: f32,

    /// Turn increment in degrees for `+` / `-`.
    pub angle: f32,

    /// Multiplicative step-length factor for `<` / `>`.
    pub scale: f32,

    /// Initial x position.
    pub x: f32,

    /// Initial y position.
    pub y: f32,

    /// Initial heading in degrees (90 points straight up).
    pub heading: f32,

    /// Emit a dot marker at the end of every drawn segment.
    pub show_dot: bool,

    /// Stroke width passed through on every segment for the renderer.
    pub linewidth: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            length: 0.2,
            angle: 90.0,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            heading: 90.0,
            show_dot: false,
            linewidth: 1.0,
        }
    }
}

impl SketchConfig {
    /// Rejects configurations the interpreter cannot run meaningfully.
    ///
    /// Every numeric field must be finite, and `scale` must be non-zero since
    /// `<` divides the step length by it.
    pub fn validate(&self) -> Result<(), LsystemError> {
        let fields = [
            ("length", self.length),
            ("angle", self.angle),
            ("scale", self.scale),
            ("x", self.x),
            ("y", self.y),
            ("heading", self.heading),
            ("linewidth", self.linewidth),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LsystemError::InvalidArgument(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.scale == 0.0 {
            return Err(LsystemError::InvalidArgument(
                "scale must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The turtle pose this configuration starts from.
    pub fn origin(&self) -> TurtleState {
        TurtleState::new(Vec2::new(self.x, self.y), self.heading)
    }
}

/// Interprets L-system words to build a [`Sketch`].
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: SketchConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and the
    /// standard drawing alphabet registered.
    ///
    /// Override or extend individual symbols with [`set_op`](Self::set_op),
    /// or replace the whole map with [`with_map`](Self::with_map).
    pub fn new(config: SketchConfig) -> Self {
        Self {
            op_map: standard_symbols(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern).
    ///
    /// Any character absent from `map` is treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, overriding any standard
    /// mapping for that character.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// The configuration this interpreter runs with.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Interprets the full `word` and returns the resulting [`Sketch`].
    ///
    /// Walks every character left to right in a single pass, dispatching each
    /// to its registered [`TurtleOp`]. Characters with no registered mapping
    /// are silently ignored; as far as drawing is concerned they are grammar
    /// punctuation.
    ///
    /// The step length starts at the configured `length` and is mutated by
    /// the scaling symbols. It is interpreter-local state: `[` saves only the
    /// pose, so `]` does not restore the step length.
    ///
    /// # Errors
    ///
    /// Fails fast and discards the partial sketch when:
    /// - the configuration is out of domain ([`LsystemError::InvalidArgument`]),
    /// - `]` is consumed while the stack is empty
    ///   ([`LsystemError::StackUnderflow`]),
    /// - a pen-up move runs before any drawing move has established a
    ///   reference position ([`LsystemError::InvalidSequence`]).
    pub fn draw(&self, word: &str) -> Result<Sketch, LsystemError> {
        self.config.validate()?;

        let mut turtle = self.config.origin();
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut length = self.config.length;
        let mut has_drawn = false;
        let mut sketch = Sketch::new(turtle, length);

        for (index, symbol) in word.chars().enumerate() {
            let op = self
                .op_map
                .get(&symbol)
                .copied()
                .unwrap_or(TurtleOp::Ignore);

            match op {
                TurtleOp::Draw => {
                    let from = turtle.position;
                    let to = turtle.advanced(length);
                    sketch.add_segment(from, to, self.config.linewidth);
                    if self.config.show_dot {
                        sketch.add_dot(to);
                    }
                    turtle.position = to;
                    has_drawn = true;
                }
                TurtleOp::Move => {
                    if !has_drawn {
                        return Err(LsystemError::InvalidSequence { index });
                    }
                    turtle.position = turtle.advanced(length);
                }
                TurtleOp::Turn(sign) => turtle.turn(self.config.angle * sign),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => {
                    turtle = stack.pop().ok_or(LsystemError::StackUnderflow { index })?;
                }
                TurtleOp::ScaleDown => length /= self.config.scale,
                TurtleOp::ScaleUp => length *= self.config.scale,
                TurtleOp::Ignore => {}
            }
        }

        sketch.turtle = turtle;
        sketch.stack = stack;
        sketch.step = length;
        Ok(sketch)
    }
}

impl Default for TurtleInterpreter {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

/// The conventional symbol-to-operation mappings.
fn standard_symbols() -> HashMap<char, TurtleOp> {
    let mappings = [
        ('F', TurtleOp::Draw),
        ('G', TurtleOp::Draw),
        ('R', TurtleOp::Draw),
        ('L', TurtleOp::Draw),
        ('f', TurtleOp::Move),
        ('+', TurtleOp::Turn(1.0)),
        ('-', TurtleOp::Turn(-1.0)),
        ('[', TurtleOp::Push),
        (']', TurtleOp::Pop),
        ('<', TurtleOp::ScaleDown),
        ('>', TurtleOp::ScaleUp),
    ];
    mappings.into_iter().collect()
}
