//! One animated object, one camera, one clock: the per-frame pipeline.

use std::time::Instant;

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::mesh::MeshKind;
use crate::settings::Settings;
use crate::transform::Transform;
use crate::uniform::FrameUniforms;
use crate::{Mat4, Vec3};

/// The drawable: where it is and which mesh it uses.
#[derive(Clone, Copy, Debug)]
pub struct SceneObject {
    pub transform: Transform,
    pub mesh: MeshKind,
}

/// What the renderer needs for one draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub mvp: Mat4,
    /// Elapsed seconds.
    pub time: f32,
    pub delta: f32,
    pub mesh: MeshKind,
}

impl FrameOutput {
    #[inline]
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms::new(self.mvp, self.time)
    }
}

pub struct Scene {
    pub object: SceneObject,
    pub camera: Camera,
    clock: FrameClock,
    /// Degrees per second around X/Y/Z.
    angular_speed: Vec3,
}

impl Scene {
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, FrameClock::new())
    }

    pub fn with_clock(settings: &Settings, clock: FrameClock) -> Self {
        let o = &settings.object;
        let transform = Transform::from_trs(o.position, o.rotation_deg, o.scale);
        Self {
            object: SceneObject {
                transform,
                mesh: o.mesh,
            },
            camera: Camera::from_settings(&settings.camera, settings.viewport),
            clock,
            angular_speed: settings.animation.angular_speed_deg,
        }
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[inline]
    pub fn angular_speed(&self) -> Vec3 {
        self.angular_speed
    }

    pub fn set_angular_speed(&mut self, deg_per_sec: Vec3) {
        self.angular_speed = deg_per_sec;
    }

    pub fn set_mesh(&mut self, mesh: MeshKind) {
        if self.object.mesh != mesh {
            log::debug!("Mesh switched: {:?} -> {:?}", self.object.mesh, mesh);
        }
        self.object.mesh = mesh;
    }

    /// Window resize. Only the viewport is recorded here.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Turns the object by `angular_speed * dt`.
    pub fn spin(&mut self, dt: f32) {
        let step = self.angular_speed * dt;
        if step != Vec3::ZERO {
            self.object.transform.rotate(step.x, step.y, step.z);
        }
    }

    /// One frame against the wall clock.
    pub fn advance(&mut self, width: u32, height: u32) -> FrameOutput {
        self.advance_at(Instant::now(), width, height)
    }

    /// One frame at `now`: tick, animate, then build the MVP.
    pub fn advance_at(&mut self, now: Instant, width: u32, height: u32) -> FrameOutput {
        self.clock.tick_at(now);
        self.spin(self.clock.delta_seconds());
        self.render_frame(width, height)
    }

    /// MVP and time for the current state, without ticking.
    pub fn render_frame(&mut self, width: u32, height: u32) -> FrameOutput {
        let model = self.object.transform.matrix();
        let mvp = self.camera.compute_mvp(model, width, height);
        FrameOutput {
            mvp,
            time: self.clock.elapsed_seconds(),
            delta: self.clock.delta_seconds(),
            mesh: self.object.mesh,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
