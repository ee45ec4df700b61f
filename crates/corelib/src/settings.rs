//! Start-up configuration with the defaults of the spinning-cube demo.

use crate::error::{CoreError, CoreResult};
use crate::mesh::MeshKind;
use crate::viewport::Viewport;
use crate::{Vec3, vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub position: Vec3,
    /// Euler X/Y/Z in degrees.
    pub rotation_deg: Vec3,
}

impl CameraSettings {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(CoreError::InvalidFieldOfView(self.fov_y_deg));
        }
        if !(self.z_near > 0.0 && self.z_near < self.z_far) {
            return Err(CoreError::InvalidClipPlanes {
                near: self.z_near,
                far: self.z_far,
            });
        }
        Ok(())
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y_deg: 90.0,
            z_near: 1.0,
            z_far: 10.0,
            position: Vec3::ZERO,
            rotation_deg: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectSettings {
    pub mesh: MeshKind,
    pub position: Vec3,
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl Default for ObjectSettings {
    fn default() -> Self {
        Self {
            mesh: MeshKind::Cube,
            position: vec3(0.0, 0.0, 2.0),
            rotation_deg: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    /// Degrees per second around X/Y/Z.
    pub angular_speed_deg: Vec3,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        // ~0.01 rad per frame at 60 Hz.
        Self {
            angular_speed_deg: vec3(0.0, 34.4, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Settings {
    pub camera: CameraSettings,
    pub object: ObjectSettings,
    pub animation: AnimationSettings,
    pub viewport: Viewport,
}

impl Settings {
    pub fn validate(&self) -> CoreResult<()> {
        self.camera.validate()?;
        Viewport::checked(self.viewport.width, self.viewport.height)?;
        Ok(())
    }
}
