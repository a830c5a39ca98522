//! Shortest paths over land.
//!
//! Two passes: `expand` grows BFS layers from the source until the target
//! layer is reached, and `back_prune` walks those layers backwards keeping
//! only cells that continue towards the target. `shortest_path` threads a
//! single chain through the pruned layers.

use crate::board::{is_adjacent, neighbors_in_bounds, Coord, Grid, Seen, Terrain};

/// BFS layers from `from` until the layer containing `to`.
///
/// Layer 0 is `[from]`; the final layer is collapsed to `[to]`. Only visible
/// land cells are entered. Returns `None` when `to` cannot be reached.
pub fn expand(land: &Grid<Seen<Terrain>>, from: Coord, to: Coord) -> Option<Vec<Vec<Coord>>> {
    let mut layers: Vec<Vec<Coord>> = vec![vec![from]];
    if from == to {
        return Some(layers);
    }

    let (height, width) = (land.height(), land.width());
    let mut visited = Grid::filled(height, width, false);
    visited.set(from, true);

    loop {
        let mut next = Vec::new();
        if let Some(frontier) = layers.last() {
            for &c in frontier {
                for n in neighbors_in_bounds(c, height, width) {
                    if visited.get(n) == Some(&false)
                        && land.get(n).is_some_and(|t| t.is(Terrain::Land))
                    {
                        visited.set(n, true);
                        next.push(n);
                    }
                }
            }
        }

        if next.is_empty() {
            return None;
        }
        if next.contains(&to) {
            layers.push(vec![to]);
            return Some(layers);
        }
        layers.push(next);
    }
}

/// Drops every cell that is not adjacent to a kept cell of the next layer.
///
/// After pruning, each remaining cell lies on some shortest route to the
/// final layer.
pub fn back_prune(mut layers: Vec<Vec<Coord>>) -> Vec<Vec<Coord>> {
    for i in (1..layers.len()).rev() {
        let (head, tail) = layers.split_at_mut(i);
        let kept = &tail[0];
        head[i - 1].retain(|&c| kept.iter().any(|&k| is_adjacent(c, k)));
    }
    layers
}

/// A shortest land route from `from` to `to`, both ends included.
pub fn shortest_path(land: &Grid<Seen<Terrain>>, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    let layers = back_prune(expand(land, from, to)?);

    let mut path = Vec::with_capacity(layers.len());
    let mut current = to;
    path.push(current);
    for layer in layers.iter().rev().skip(1) {
        current = layer.iter().copied().find(|&c| is_adjacent(c, current))?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
