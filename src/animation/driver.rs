use crate::error::Result;
use crate::geometry::{Profile, SquarePath};
use crate::math::{Matrix4, Point3, Vector3};
use crate::tessellation::{TessellateRevolution, TriangleMesh};

use super::{AnimationState, DriverConfig, TimeStep};

/// Per-frame animation state around a mesh built once at startup.
///
/// A `Driver` only exists in the running state: [`Driver::init`] builds the
/// mesh and resets the clock, after which the host calls [`Driver::tick`]
/// once per frame and reads the mesh and offset back for drawing.
#[derive(Debug, Clone)]
pub struct Driver {
    config: DriverConfig,
    mesh: TriangleMesh,
    path: SquarePath,
    state: AnimationState,
}

impl Driver {
    /// Builds the amphora mesh and starts the clock at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or its mesh parameters are invalid.
    pub fn init(config: DriverConfig) -> Result<Self> {
        Self::with_profile(&Profile::amphora(), config)
    }

    /// Like [`Driver::init`], revolving `profile` instead of the amphora.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or its mesh parameters are invalid.
    pub fn with_profile(profile: &Profile, config: DriverConfig) -> Result<Self> {
        config.validate()?;
        let path = SquarePath::new(config.path_period)?;
        let mesh = TessellateRevolution::new(profile, config.mesh).execute()?;

        tracing::info!(
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            triangles = mesh.triangle_count(),
            "mesh built"
        );

        let state = AnimationState {
            elapsed: 0.0,
            offset: path.position_at(0.0).coords * config.path_scale,
        };

        Ok(Self {
            config,
            mesh,
            path,
            state,
        })
    }

    /// Advances the clock by one tick and moves the mesh along the path.
    ///
    /// `dt` is only used with [`TimeStep::Measured`].
    pub fn tick(&mut self, dt: f64) {
        let step = match self.config.time_step {
            TimeStep::Fixed(step) => step,
            TimeStep::Measured if dt.is_finite() && dt > 0.0 => dt,
            TimeStep::Measured => 0.0,
        };

        self.state.elapsed += step;
        self.state.offset =
            self.path.position_at(self.state.elapsed).coords * self.config.path_scale;

        tracing::trace!(
            elapsed = self.state.elapsed,
            x = self.state.offset.x,
            z = self.state.offset.z,
            "tick"
        );
    }

    /// Returns the elapsed time and current offset.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Returns the elapsed time since initialisation.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.state.elapsed
    }

    /// Returns the mesh built at initialisation.
    #[must_use]
    pub fn current_mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Returns the current translation of the mesh.
    #[must_use]
    pub fn current_offset(&self) -> Vector3 {
        self.state.offset
    }

    /// Returns the model matrix translating the mesh to the current offset.
    #[must_use]
    pub fn current_transform(&self) -> Matrix4 {
        Matrix4::new_translation(&self.state.offset)
    }

    /// Returns the normal overlay segments of the mesh in model space, using
    /// the configured normal length.
    #[must_use]
    pub fn normal_overlay(&self) -> Vec<(Point3, Point3)> {
        self.mesh.normal_segments(self.config.normal_length)
    }

    /// Returns the configuration the driver was initialised with.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}
