//! Benchmark fixtures for the quadrille grid toolkit.
//!
//! Provides deterministic pre-built grids so benches measure container
//! operations, not input generation.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadrille_grid::{Grid, GridMut};

/// Build a `size x size` character grid of open floor with walls sprinkled
/// on a deterministic pseudo-random pattern (roughly one cell in eight).
pub fn wall_grid(size: usize) -> Grid<char> {
    let mut grid = Grid::new();
    for y in 0..size as u64 {
        let row = (0..size as u64)
            .map(|x| {
                let h = (x.wrapping_mul(6364136223846793007)) ^ (y.wrapping_mul(1442695040888963407));
                if h % 8 == 0 {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        grid.push_row(row)
            .expect("generated rows share one width");
    }
    grid
}

/// Same fixture with the write capability attached.
pub fn wall_grid_mut(size: usize) -> GridMut<char> {
    GridMut::from(wall_grid(size))
}
