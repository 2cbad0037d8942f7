//! The string-rewriting engine: the generational half of an L-system.
//!
//! A [`RuleSet`] maps each single-character symbol to its replacement word.
//! [`rewrite`] applies every production once across a word, [`iterate`] chains
//! generations. Both are pure functions of their inputs, so callers are free
//! to memoize expanded words.

use crate::error::LsystemError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A letter-to-replacement production table.
///
/// Keys are unique single characters, order irrelevant. Every character that
/// can appear in a word being rewritten must have an entry; looking up a
/// missing key during rewriting is an error, never a silent pass-through.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: HashMap<char, String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a production (builder pattern).
    pub fn rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.insert(symbol, replacement);
        self
    }

    /// Maps each character of `symbols` to itself (builder pattern).
    ///
    /// Grammar punctuation like `+-[]` usually survives rewriting unchanged;
    /// this saves spelling the identity productions out one by one.
    pub fn identities(mut self, symbols: &str) -> Self {
        for c in symbols.chars() {
            self.insert(c, c.to_string());
        }
        self
    }

    /// Adds or replaces a production in place.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// Returns the replacement for `symbol`, if one is registered.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Whether `symbol` has a production.
    pub fn contains(&self, symbol: char) -> bool {
        self.rules.contains_key(&symbol)
    }

    /// Number of productions.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set holds no productions.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(char, String)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(char, &'a str)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (char, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(symbol, replacement)| (symbol, replacement.to_owned()))
            .collect()
    }
}

/// Applies every production once across `word`.
///
/// The output is the in-order concatenation of the replacement of each input
/// character, so its length equals the sum of the replacement lengths.
///
/// # Errors
///
/// Fails with [`LsystemError::UnknownSymbol`] on the first character that has
/// no production.
pub fn rewrite(word: &str, rules: &RuleSet) -> Result<String, LsystemError> {
    let mut newword = String::with_capacity(word.len());
    for letter in word.chars() {
        let replacement = rules
            .get(letter)
            .ok_or(LsystemError::UnknownSymbol(letter))?;
        newword.push_str(replacement);
    }
    Ok(newword)
}

/// Rewrites `word` for `generations` generations.
///
/// Each generation feeds on the previous generation's full output; zero
/// generations returns the word unchanged. Negative counts are
/// unrepresentable by construction.
pub fn iterate(word: &str, rules: &RuleSet, generations: usize) -> Result<String, LsystemError> {
    let mut word = word.to_owned();
    for _ in 0..generations {
        word = rewrite(&word, rules)?;
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn koch_rules() -> RuleSet {
        RuleSet::new().rule('F', "F+F-F-F+F").identities("+-")
    }

    #[test]
    fn test_rewrite_concatenates_in_order() {
        let rules = RuleSet::new().rule('A', "AB").rule('B', "A");
        assert_eq!(rewrite("A", &rules).unwrap(), "AB");
        assert_eq!(rewrite("AB", &rules).unwrap(), "ABA");
        assert_eq!(rewrite("ABA", &rules).unwrap(), "ABAAB");
    }

    #[test]
    fn test_rewrite_length_is_sum_of_replacements() {
        let rules = koch_rules();
        let word = "F+F";
        let expanded = rewrite(word, &rules).unwrap();

        let expected: usize = word
            .chars()
            .map(|c| rules.get(c).unwrap().chars().count())
            .sum();
        assert_eq!(expanded.chars().count(), expected);
    }

    #[test]
    fn test_rewrite_unknown_symbol() {
        let rules = RuleSet::new().rule('F', "FF");
        assert_eq!(
            rewrite("FX", &rules),
            Err(LsystemError::UnknownSymbol('X'))
        );
    }

    #[test]
    fn test_iterate_zero_is_identity() {
        let rules = koch_rules();
        assert_eq!(iterate("F+F", &rules, 0).unwrap(), "F+F");
    }

    #[test]
    fn test_iterate_composes() {
        let rules = koch_rules();
        let in_one_go = iterate("F", &rules, 3).unwrap();
        let two_then_one = iterate(&iterate("F", &rules, 2).unwrap(), &rules, 1).unwrap();
        assert_eq!(in_one_go, two_then_one);
    }

    #[test]
    fn test_identities_map_to_themselves() {
        let rules = RuleSet::new().identities("+-[]");
        assert_eq!(rules.get('+'), Some("+"));
        assert_eq!(rules.get(']'), Some("]"));
        assert_eq!(rewrite("+-[]", &rules).unwrap(), "+-[]");
    }

    #[test]
    fn test_ruleset_serialization() {
        let rules = koch_rules();
        let json = serde_json::to_string(&rules).unwrap();
        let back: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, back);
    }
}
