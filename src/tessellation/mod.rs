mod tessellate_revolution;
mod vertex_normals;

pub use tessellate_revolution::{build_mesh, TessellateRevolution};

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3};

/// Parameters controlling the ring grid of a surface of revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevolutionParams {
    /// Total height of the shape along the Y axis.
    pub height: f64,
    /// Radius that the profile's radius fractions are scaled by.
    pub base_radius: f64,
    /// Number of rings along the height axis (at least 2).
    pub major_resolution: usize,
    /// Number of vertices per ring (at least 3).
    pub minor_resolution: usize,
}

impl RevolutionParams {
    /// Checks the parameters describe a non-degenerate ring grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a resolution is below its minimum, the height or
    /// base radius is not positive and finite, or the vertex count does not
    /// fit `u32` indices.
    pub fn validate(&self) -> Result<()> {
        if self.major_resolution < 2 {
            return Err(TessellationError::InvalidParameters(format!(
                "major resolution must be at least 2, got {}",
                self.major_resolution
            ))
            .into());
        }
        if self.minor_resolution < 3 {
            return Err(TessellationError::InvalidParameters(format!(
                "minor resolution must be at least 3, got {}",
                self.minor_resolution
            ))
            .into());
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "height must be positive and finite".to_owned(),
            )
            .into());
        }
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "base radius must be positive and finite".to_owned(),
            )
            .into());
        }
        let fits_u32 = self
            .major_resolution
            .checked_mul(self.minor_resolution)
            .and_then(|n| n.checked_add(1))
            .is_some_and(|n| u32::try_from(n).is_ok());
        if !fits_u32 {
            return Err(TessellationError::InvalidParameters(
                "ring grid has too many vertices for u32 indices".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

impl Default for RevolutionParams {
    fn default() -> Self {
        Self {
            height: 240.0,
            base_radius: 100.0,
            major_resolution: 20,
            minor_resolution: 20,
        }
    }
}

/// An 8-bit RGB vertex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure red.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Creates a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A colored triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Vertex colors.
    pub colors: Vec<Color>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of index entries (three per triangle).
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len() * 3
    }

    /// Iterates the triangle indices as a flat index buffer.
    pub fn flat_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().flatten().copied()
    }

    /// Returns one line segment `v → v + n·length` per vertex, for drawing
    /// normal overlays.
    #[must_use]
    pub fn normal_segments(&self, length: f64) -> Vec<(Point3, Point3)> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(v, n)| (*v, *v + *n * length))
            .collect()
    }

    /// Returns the geometric normal of triangle `tri` following the
    /// right-hand rule, unnormalized.
    ///
    /// Returns `None` if the triangle or any of its vertices is out of range.
    #[must_use]
    pub fn face_normal(&self, tri: usize) -> Option<Vector3> {
        let [a, b, c] = *self.indices.get(tri)?;
        let a = self.vertices.get(a as usize)?;
        let b = self.vertices.get(b as usize)?;
        let c = self.vertices.get(c as usize)?;
        Some((b - a).cross(&(c - a)))
    }
}
