//! Triangulation of sampled surface grids.

use bez_core::Result;
use bez_geometry::{BezierSurface, TessellationParams};
use bez_math::{Point2, Point3};

use crate::triangulate::{MeshBuilder, TriangleMesh};

/// Index of the first vertex of every row when rows are laid out back to back.
pub(crate) fn row_offsets(grid: &[Vec<Point3>]) -> Vec<usize> {
    grid.iter()
        .scan(0, |offset, row| {
            let start = *offset;
            *offset += row.len();
            Some(start)
        })
        .collect()
}

/// Build a triangle mesh from a grid of surface samples.
///
/// Vertices are appended row-major, so vertex `(i, j)` has index
/// `offset(i) + j` (`i * row_len + j` for a rectangular grid). Each cell
/// `(i, j)` yields `(i,j)-(i,j+1)-(i+1,j)` and `(i+1,j)-(i,j+1)-(i+1,j+1)`.
/// When neighbouring rows differ in length only the columns both rows share
/// are joined.
pub fn grid_mesh(grid: &[Vec<Point3>]) -> TriangleMesh {
    let offsets = row_offsets(grid);
    let mut mesh = TriangleMesh::new();
    let u_span = grid.len().saturating_sub(1).max(1) as f64;
    for (i, row) in grid.iter().enumerate() {
        let v_span = row.len().saturating_sub(1).max(1) as f64;
        for (j, &p) in row.iter().enumerate() {
            mesh.add_vertex(p);
            mesh.uvs.push(Point2::new(i as f64 / u_span, j as f64 / v_span));
        }
    }

    for i in 0..grid.len().saturating_sub(1) {
        let idx = |row: usize, col: usize| -> u32 { (offsets[row] + col) as u32 };
        let shared = grid[i].len().min(grid[i + 1].len());
        for j in 0..shared.saturating_sub(1) {
            mesh.add_triangle(idx(i, j), idx(i, j + 1), idx(i + 1, j));
            mesh.add_triangle(idx(i + 1, j), idx(i, j + 1), idx(i + 1, j + 1));
        }
    }
    log::debug!(
        "grid mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Sample `surface` with `params` and triangulate the grid.
pub fn surface_mesh(surface: &BezierSurface, params: &TessellationParams) -> Result<TriangleMesh> {
    let grid = surface.tessellate(params.step_u, params.step_v, params.method)?;
    Ok(grid_mesh(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bez_core::traits::Validate;
    use bez_geometry::EvalMethod;
    use bez_math::DVec3;

    fn flat_grid(rows: usize, cols: usize) -> Vec<Vec<Point3>> {
        (0..rows)
            .map(|i| (0..cols).map(|j| DVec3::new(i as f64, j as f64, 0.0)).collect())
            .collect()
    }

    #[test]
    fn test_counts() {
        let mesh = grid_mesh(&flat_grid(3, 5));
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.triangle_count(), 2 * 4 * 2);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_non_square_grid_uses_row_length() {
        let mesh = grid_mesh(&flat_grid(2, 4));
        let tris: Vec<[u32; 3]> = mesh.triangles().collect();
        assert_eq!(tris[0], [0, 1, 4]);
        assert_eq!(tris[1], [4, 1, 5]);
        assert_eq!(tris[5], [6, 3, 7]);
        // Each triangle spans neighbouring samples only.
        for [a, b, c] in tris {
            let (pa, pb, pc) = (
                mesh.positions[a as usize],
                mesh.positions[b as usize],
                mesh.positions[c as usize],
            );
            assert!((pa - pb).length() < 1.5 && (pb - pc).length() < 1.5);
        }
    }

    #[test]
    fn test_ragged_rows_join_shared_columns() {
        let grid = vec![
            vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0],
            vec![DVec3::Y, DVec3::Y + DVec3::X],
        ];
        let mesh = grid_mesh(&grid);
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.indices, vec![0, 1, 3, 3, 1, 4]);
    }

    #[test]
    fn test_degenerate_grids() {
        assert_eq!(grid_mesh(&[]).vertex_count(), 0);
        let single_row = grid_mesh(&flat_grid(1, 4));
        assert_eq!(single_row.vertex_count(), 4);
        assert_eq!(single_row.triangle_count(), 0);
    }

    #[test]
    fn test_uvs_span_unit_square() {
        let mesh = grid_mesh(&flat_grid(3, 3));
        assert_eq!(mesh.uvs[0], Point2::new(0.0, 0.0));
        assert_eq!(mesh.uvs[8], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_surface_mesh() {
        let surface = BezierSurface::new(vec![
            vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 1.0), DVec3::new(0.0, 2.0, 0.0)],
            vec![DVec3::new(1.0, 0.0, 1.0), DVec3::new(1.0, 1.0, 2.0), DVec3::new(1.0, 2.0, 1.0)],
        ])
        .unwrap();
        let params = TessellationParams {
            step_u: 0.5,
            step_v: 0.25,
            method: EvalMethod::Analytical,
        };
        let mut mesh = surface_mesh(&surface, &params).unwrap();
        assert_eq!(mesh.vertex_count(), 3 * 5);
        assert_eq!(mesh.triangle_count(), 2 * 4 * 2);
        mesh.compute_normals();
        assert_eq!(mesh.normals.len(), mesh.vertex_count());

        let bad = TessellationParams {
            step_u: 0.0,
            ..params
        };
        assert!(surface_mesh(&surface, &bad).is_err());
    }
}
