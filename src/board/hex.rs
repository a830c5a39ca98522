//! Hex geometry on an offset-column grid.
//!
//! The map is stored as a rectangle where odd columns sit half a cell higher
//! than even ones ("even-q" layout). Neighbour offsets therefore depend on
//! the parity of the column. Distances are computed in axial coordinates.

use super::grid::Coord;

#[inline]
fn parity(col: i32) -> i32 {
    col.rem_euclid(2)
}

/// The six neighbours of `c`, unclipped.
///
/// Order: up, upper-left, upper-right, lower-left, lower-right, down.
pub fn neighbors(c: Coord) -> [Coord; 6] {
    let (r, col) = (c.row, c.col);
    let p = parity(col);
    [
        Coord::new(r - 1, col),
        Coord::new(r - p, col - 1),
        Coord::new(r - p, col + 1),
        Coord::new(r + 1 - p, col - 1),
        Coord::new(r + 1 - p, col + 1),
        Coord::new(r + 1, col),
    ]
}

/// Neighbours of `c` that fall inside a `height x width` grid.
pub fn neighbors_in_bounds(c: Coord, height: usize, width: usize) -> impl Iterator<Item = Coord> {
    neighbors(c).into_iter().filter(move |n| {
        n.row >= 0 && n.col >= 0 && (n.row as usize) < height && (n.col as usize) < width
    })
}

/// Returns true if `a` and `b` share an edge.
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    neighbors(a).contains(&b)
}

/// Axial `(q, r)` coordinates of an offset cell.
fn to_axial(c: Coord) -> (i32, i32) {
    let q = c.col;
    let r = c.row - (c.col + parity(c.col)) / 2;
    (q, r)
}

/// Number of steps between two cells on an unobstructed hex grid.
pub fn distance(a: Coord, b: Coord) -> u32 {
    let (aq, ar) = to_axial(a);
    let (bq, br) = to_axial(b);
    let dq = aq - bq;
    let dr = ar - br;
    dq.unsigned_abs()
        .max(dr.unsigned_abs())
        .max((dq + dr).unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_column_neighbors() {
        let n = neighbors(Coord::new(2, 2));
        assert_eq!(
            n,
            [
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 3),
                Coord::new(3, 1),
                Coord::new(3, 3),
                Coord::new(3, 2),
            ]
        );
    }

    #[test]
    fn odd_column_neighbors() {
        let n = neighbors(Coord::new(2, 3));
        assert_eq!(
            n,
            [
                Coord::new(1, 3),
                Coord::new(1, 2),
                Coord::new(1, 4),
                Coord::new(2, 2),
                Coord::new(2, 4),
                Coord::new(3, 3),
            ]
        );
    }

    #[test]
    fn corner_is_clipped() {
        let n: Vec<Coord> = neighbors_in_bounds(Coord::new(0, 0), 4, 4).collect();
        assert_eq!(n, vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn adjacency_is_symmetric_on_small_grid() {
        for row in 0..5 {
            for col in 0..5 {
                let c = Coord::new(row, col);
                for n in neighbors_in_bounds(c, 5, 5) {
                    assert!(
                        neighbors_in_bounds(n, 5, 5).any(|m| m == c),
                        "{:?} not a neighbour of its neighbour {:?}",
                        c,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn neighbors_are_distance_one() {
        for row in -2..4 {
            for col in -2..4 {
                let c = Coord::new(row, col);
                for n in neighbors(c) {
                    assert_eq!(distance(c, n), 1, "{:?} -> {:?}", c, n);
                }
                assert_eq!(distance(c, c), 0);
            }
        }
    }

    #[test]
    fn distance_examples() {
        assert_eq!(distance(Coord::new(0, 0), Coord::new(0, 4)), 4);
        assert_eq!(distance(Coord::new(0, 0), Coord::new(3, 0)), 3);
        // Moving diagonally across columns gains a row every two steps.
        assert_eq!(distance(Coord::new(0, 0), Coord::new(2, 4)), 4);
        assert_eq!(distance(Coord::new(0, 0), Coord::new(3, 2)), 4);
    }
}
