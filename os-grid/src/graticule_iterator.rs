//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Boustrophedon walk over grid line intersections

#[derive(PartialEq, Clone, Copy, Debug)]
enum Sweep {
    Columns,
    Rows,
    Finished,
}

/// Walks every vertical and then every horizontal grid line as one
/// connected path, reversing direction on each new line.
///
/// Items are `(side, length)` indices: `side` counts steps eastwards from
/// the west boundary, `length` counts steps northwards from the south boundary.
pub struct GraticuleIterator {
    side_steps: i64,
    length_steps: i64,
    side: i64,
    length: i64,
    direction: i64,
    lengthways: i64,
    sweep: Sweep,
}

impl GraticuleIterator {
    pub fn new(side_steps: u32, length_steps: u32) -> GraticuleIterator {
        GraticuleIterator {
            side_steps: side_steps as i64,
            length_steps: length_steps as i64,
            side: 0,
            length: 0,
            direction: 1,
            lengthways: 1,
            sweep: Sweep::Columns,
        }
    }

    fn advance_column(&mut self) {
        let at_end = if self.direction > 0 {
            self.length >= self.length_steps
        } else {
            self.length <= 0
        };
        if !at_end {
            self.length += self.direction;
            return;
        }
        self.direction = -self.direction;
        self.side += 1;
        if self.side > self.side_steps {
            // Rows are walked back from the corner the last column ended in
            self.lengthways = self.direction;
            self.length = if self.direction < 0 {
                self.length_steps
            } else {
                0
            };
            self.side = self.side_steps;
            self.direction = -1;
            self.sweep = Sweep::Rows;
        }
    }

    fn advance_row(&mut self) {
        let at_end = if self.direction > 0 {
            self.side >= self.side_steps
        } else {
            self.side <= 0
        };
        if !at_end {
            self.side += self.direction;
            return;
        }
        self.direction = -self.direction;
        self.length += self.lengthways;
        if self.length < 0 || self.length > self.length_steps {
            self.sweep = Sweep::Finished;
        }
    }
}

impl Iterator for GraticuleIterator {
    /// Current intersection `(side, length)`
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = (self.side as u32, self.length as u32);
        match self.sweep {
            Sweep::Columns => self.advance_column(),
            Sweep::Rows => self.advance_row(),
            Sweep::Finished => return None,
        }
        Some(current)
    }
}

/// Number of points emitted for a grid of `side_steps` x `length_steps` cells
pub fn graticule_len(side_steps: u32, length_steps: u32) -> usize {
    2 * (side_steps as usize + 1) * (length_steps as usize + 1)
}

#[test]
fn test_single_cell_walk() {
    let cells = GraticuleIterator::new(1, 1).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            // columns
            (0, 0),
            (0, 1),
            (1, 1),
            (1, 0),
            // rows, starting where the last column ended
            (1, 0),
            (0, 0),
            (0, 1),
            (1, 1)
        ]
    );
}

#[test]
fn test_odd_column_count() {
    let cells = GraticuleIterator::new(2, 1).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (0, 0),
            (0, 1),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 0),
            (1, 0),
            (2, 0)
        ]
    );
}

#[test]
fn test_degenerate_grids() {
    let cells = GraticuleIterator::new(0, 0).collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0), (0, 0)]);

    let cells = GraticuleIterator::new(0, 2).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(0, 0), (0, 1), (0, 2), (0, 2), (0, 1), (0, 0)]
    );

    let cells = GraticuleIterator::new(2, 0).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(0, 0), (1, 0), (2, 0), (2, 0), (1, 0), (0, 0)]
    );
}

#[test]
fn test_walk_is_connected() {
    for &(sides, lengths) in &[(3, 4), (4, 3), (5, 5), (6, 1), (1, 7)] {
        let cells = GraticuleIterator::new(sides, lengths).collect::<Vec<_>>();
        assert_eq!(cells.len(), graticule_len(sides, lengths));
        for pair in cells.windows(2) {
            let ds = (pair[0].0 as i64 - pair[1].0 as i64).abs();
            let dl = (pair[0].1 as i64 - pair[1].1 as i64).abs();
            assert!(ds + dl <= 1, "jump between {:?} and {:?}", pair[0], pair[1]);
        }
        // every line is traced end to end
        for side in 0..=sides {
            assert!((0..=lengths).all(|length| cells.contains(&(side, length))));
        }
    }
}
