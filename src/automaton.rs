//! 1-D binary cellular automaton with an append-only row history.
//!
//! The update rule is the two-neighbor exclusive-or: a cell lights up when
//! exactly one of its horizontal neighbors is alive (Rule 90 without the
//! self term). Neighbors are gathered by circular shift, then the wrap
//! artifacts at the two ends are zeroed so the row edges never see a
//! neighbor from the opposite end. Seeded from a single center cell this
//! grows the Pascal's-triangle-mod-2 pattern.

use crate::error::LsystemError;
use serde::{Deserialize, Serialize};

/// A growing history of automaton rows, all the same width.
///
/// Rows before the last are immutable history; [`CellGrid::step`] appends
/// exactly one new row computed from the last one. Width is fixed at
/// creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    width: usize,
    rows: Vec<Vec<u8>>,
}

impl CellGrid {
    /// Creates the seed generation: all zeros with a single live cell at
    /// `width / 2`.
    ///
    /// # Errors
    ///
    /// Fails with [`LsystemError::InvalidArgument`] when `width` is zero.
    pub fn seed(width: usize) -> Result<Self, LsystemError> {
        if width == 0 {
            return Err(LsystemError::InvalidArgument(
                "grid width must be positive".to_string(),
            ));
        }
        let mut row = vec![0u8; width];
        row[width / 2] = 1;
        Ok(Self {
            width,
            rows: vec![row],
        })
    }

    /// Builds a grid from existing rows.
    ///
    /// # Errors
    ///
    /// Fails with [`LsystemError::InvalidArgument`] when `rows` is empty,
    /// the first row is empty, or any row's width differs from the first's.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, LsystemError> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => {
                return Err(LsystemError::InvalidArgument(
                    "grid needs at least one row".to_string(),
                ));
            }
        };
        if width == 0 {
            return Err(LsystemError::InvalidArgument(
                "grid width must be positive".to_string(),
            ));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(LsystemError::InvalidArgument(format!(
                "row {bad} has width {}, expected {width}",
                rows[bad].len()
            )));
        }
        Ok(Self { width, rows })
    }

    /// Appends the next generation computed from the last row.
    pub fn step(&mut self) {
        let next = next_row(self.last_row());
        self.rows.push(next);
    }

    /// Runs `generations` update steps.
    pub fn run(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Width shared by every row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows computed so far, the seed included.
    pub fn generations(&self) -> usize {
        self.rows.len()
    }

    /// Every row in generation order.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The most recent generation.
    pub fn last_row(&self) -> &[u8] {
        self.rows.last().expect("grid always holds at least one row")
    }
}

/// Computes one generation of the two-neighbor XOR rule.
///
/// `left[i]` and `right[i]` are circular shifts of the row; the wrap
/// artifacts (`left` at the last cell, `right` at the first) are zeroed
/// before the rule is applied, so the edges do not wrap. The new cell is 1
/// iff exactly one of the two neighbors is 1.
pub fn next_row(last: &[u8]) -> Vec<u8> {
    let nx = last.len();
    if nx == 0 {
        return Vec::new();
    }

    let mut shift_left: Vec<u8> = (0..nx).map(|i| last[(i + 1) % nx]).collect();
    let mut shift_right: Vec<u8> = (0..nx).map(|i| last[(i + nx - 1) % nx]).collect();
    shift_left[nx - 1] = 0;
    shift_right[0] = 0;

    (0..nx)
        .map(|i| u8::from(shift_left[i] + shift_right[i] == 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_places_single_center_cell() {
        let grid = CellGrid::seed(5).unwrap();
        assert_eq!(grid.rows(), &[vec![0, 0, 1, 0, 0]]);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.generations(), 1);

        // Even width rounds the center down.
        let grid = CellGrid::seed(4).unwrap();
        assert_eq!(grid.last_row(), &[0, 0, 1, 0]);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(matches!(
            CellGrid::seed(0),
            Err(LsystemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_neighbors_of_seed_light_up() {
        let mut grid = CellGrid::seed(5).unwrap();
        grid.step();
        assert_eq!(grid.last_row(), &[0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A live cell on the left edge feeds only its right neighbor; the
        // circular shift must not leak it to the far end.
        let mut grid = CellGrid::from_rows(vec![vec![1, 0, 0, 0]]).unwrap();
        grid.step();
        assert_eq!(grid.last_row(), &[0, 1, 0, 0]);

        let mut grid = CellGrid::from_rows(vec![vec![0, 0, 0, 1]]).unwrap();
        grid.step();
        assert_eq!(grid.last_row(), &[0, 0, 1, 0]);
    }

    #[test]
    fn test_both_neighbors_alive_cancel() {
        let mut grid = CellGrid::from_rows(vec![vec![1, 0, 1]]).unwrap();
        grid.step();
        // Center sees two live neighbors, XOR kills it; edges see one each.
        assert_eq!(grid.last_row(), &[0, 0, 0]);
    }

    #[test]
    fn test_growth_is_append_only() {
        let mut grid = CellGrid::seed(7).unwrap();
        let seed_row = grid.rows()[0].clone();

        grid.run(10);
        assert_eq!(grid.generations(), 11);
        assert_eq!(grid.rows()[0], seed_row);
        assert!(grid.rows().iter().all(|row| row.len() == 7));
    }

    #[test]
    fn test_update_is_deterministic() {
        let mut a = CellGrid::seed(31).unwrap();
        let mut b = CellGrid::seed(31).unwrap();
        a.run(12);
        b.run(12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pascal_triangle_mod_two() {
        let mut grid = CellGrid::seed(7).unwrap();
        grid.run(2);
        assert_eq!(
            grid.rows(),
            &[
                vec![0, 0, 0, 1, 0, 0, 0],
                vec![0, 0, 1, 0, 1, 0, 0],
                vec![0, 1, 0, 0, 0, 1, 0],
            ]
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = CellGrid::from_rows(vec![vec![0, 1], vec![0, 1, 0]]);
        assert!(matches!(err, Err(LsystemError::InvalidArgument(_))));

        assert!(matches!(
            CellGrid::from_rows(Vec::new()),
            Err(LsystemError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_grid_serialization() {
        let mut grid = CellGrid::seed(9).unwrap();
        grid.run(3);

        let json = serde_json::to_string(&grid).unwrap();
        let back: CellGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
