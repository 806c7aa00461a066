pub mod grid;
pub mod revolution;
pub mod triangulate;
pub mod wireframe;

pub use grid::{grid_mesh, surface_mesh};
pub use revolution::{revolve_curve, surface_of_revolution};
pub use triangulate::{MeshBuilder, TriangleMesh};
pub use wireframe::{grid_line_indices, polyline_indices};
