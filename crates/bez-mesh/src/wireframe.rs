//! Line-list indices for drawing sampled curves and grids as wireframes.

use bez_math::Point3;

use crate::grid::row_offsets;

/// Segment pairs `(k, k + 1)` joining `count` consecutive samples.
pub fn polyline_indices(count: usize) -> Vec<u32> {
    (0..count.saturating_sub(1))
        .flat_map(|k| [k as u32, k as u32 + 1])
        .collect()
}

/// Segment pairs outlining every triangle [`grid_mesh`](crate::grid_mesh)
/// would emit: the four cell edges plus the shared diagonal.
pub fn grid_line_indices(grid: &[Vec<Point3>]) -> Vec<u32> {
    let offsets = row_offsets(grid);
    let idx = |row: usize, col: usize| -> u32 { (offsets[row] + col) as u32 };
    let mut lines = Vec::new();
    for i in 0..grid.len().saturating_sub(1) {
        let shared = grid[i].len().min(grid[i + 1].len());
        for j in 0..shared.saturating_sub(1) {
            let (a, b) = (idx(i, j), idx(i, j + 1));
            let (c, d) = (idx(i + 1, j), idx(i + 1, j + 1));
            lines.extend_from_slice(&[a, b, a, c, c, d, d, b, b, c]);
        }
    }
    lines
}
