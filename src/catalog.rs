//! Embedded classic L-systems, ready to expand and draw.
//!
//! Each preset bundles an axiom, its production rules, a generation count at
//! which the curve renders well, and the drawing configuration to go with it.
//! They double as executable documentation of the standard alphabet.

use crate::error::LsystemError;
use crate::interpreter::{SketchConfig, TurtleInterpreter};
use crate::rewrite::{RuleSet, iterate};
use crate::sketch::Sketch;
use serde::{Deserialize, Serialize};

/// A named, self-contained L-system definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LsystemPreset {
    /// Display name, unique within the registry.
    pub name: String,
    /// The generation-zero word.
    pub axiom: String,
    /// Productions covering every character the expansion can produce.
    pub rules: RuleSet,
    /// Generation count the preset is tuned for.
    pub generations: usize,
    /// Drawing configuration matching the grammar's turn angle.
    pub config: SketchConfig,
}

impl LsystemPreset {
    /// Expands the axiom for the preset's generation count.
    pub fn expand(&self) -> Result<String, LsystemError> {
        iterate(&self.axiom, &self.rules, self.generations)
    }

    /// Expands the axiom and interprets the result into a [`Sketch`].
    pub fn sketch(&self) -> Result<Sketch, LsystemError> {
        let word = self.expand()?;
        TurtleInterpreter::new(self.config.clone()).draw(&word)
    }
}

lazy_static::lazy_static! {
    /// The embedded preset registry.
    pub static ref PRESETS: Vec<LsystemPreset> = vec![
        LsystemPreset {
            name: "koch curve".to_string(),
            axiom: "F".to_string(),
            rules: RuleSet::new().rule('F', "F+F-F-F+F").identities("+-"),
            generations: 3,
            config: SketchConfig {
                length: 0.05,
                ..SketchConfig::default()
            },
        },
        LsystemPreset {
            name: "koch island".to_string(),
            axiom: "F+F+F+F".to_string(),
            rules: RuleSet::new().rule('F', "F+F-F-FF+F+F-F").identities("+-"),
            generations: 2,
            config: SketchConfig {
                length: 0.05,
                ..SketchConfig::default()
            },
        },
        LsystemPreset {
            name: "sierpinski arrowhead".to_string(),
            axiom: "F".to_string(),
            rules: RuleSet::new()
                .rule('F', "G-F-G")
                .rule('G', "F+G+F")
                .identities("+-"),
            generations: 5,
            config: SketchConfig {
                length: 0.05,
                angle: 60.0,
                heading: 0.0,
                ..SketchConfig::default()
            },
        },
        LsystemPreset {
            name: "dragon curve".to_string(),
            axiom: "F".to_string(),
            rules: RuleSet::new()
                .rule('F', "F+G")
                .rule('G', "F-G")
                .identities("+-"),
            generations: 9,
            config: SketchConfig {
                length: 0.05,
                heading: 0.0,
                ..SketchConfig::default()
            },
        },
        LsystemPreset {
            name: "fractal plant".to_string(),
            axiom: "X".to_string(),
            rules: RuleSet::new()
                .rule('X', "F+[[X]-X]-F[-FX]+X")
                .rule('F', "FF")
                .identities("+-[]"),
            generations: 4,
            config: SketchConfig {
                length: 0.02,
                angle: 25.0,
                ..SketchConfig::default()
            },
        },
    ];
}

/// Looks up a preset by name.
///
/// # Errors
///
/// Fails with [`LsystemError::InvalidArgument`] when no preset carries that
/// name.
pub fn preset(name: &str) -> Result<LsystemPreset, LsystemError> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .cloned()
        .ok_or_else(|| LsystemError::InvalidArgument(format!("unknown preset '{name}'")))
}

/// Names of every embedded preset, in registry order.
pub fn preset_names() -> Vec<String> {
    PRESETS.iter().map(|preset| preset.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let koch = preset("koch curve").unwrap();
        assert_eq!(koch.axiom, "F");

        assert!(matches!(
            preset("no such curve"),
            Err(LsystemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_registry_names_are_unique() {
        let mut names = preset_names();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(total >= 5);
    }

    #[test]
    fn test_expansion_growth() {
        let koch = preset("koch curve").unwrap();
        // One generation turns the single F into its 9-symbol replacement.
        let word = iterate(&koch.axiom, &koch.rules, 1).unwrap();
        assert_eq!(word, "F+F-F-F+F");
    }

    #[test]
    fn test_every_preset_expands_and_draws() {
        for preset in PRESETS.iter() {
            let sketch = preset
                .sketch()
                .unwrap_or_else(|e| panic!("preset '{}' failed: {e}", preset.name));
            assert!(
                !sketch.is_empty(),
                "preset '{}' drew nothing",
                preset.name
            );
            assert!(
                sketch.stack.is_empty(),
                "preset '{}' left saved states behind",
                preset.name
            );
        }
    }

    #[test]
    fn test_preset_serialization() {
        let plant = preset("fractal plant").unwrap();
        let json = serde_json::to_string(&plant).unwrap();
        let back: LsystemPreset = serde_json::from_str(&json).unwrap();
        assert_eq!(plant, back);
    }
}
