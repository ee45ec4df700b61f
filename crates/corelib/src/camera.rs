use crate::settings::CameraSettings;
use crate::transform::Transform;
use crate::viewport::Viewport;
use crate::{Mat4, Vec3, Vec4};

/// Perspective camera placed by its own [`Transform`].
///
/// Left-handed: the camera looks down its local +Z, clip-space `w` is the
/// view-space `z`, and depth lands in `[-1, 1]` after the divide (OpenGL
/// style).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub transform: Transform,
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    viewport: Viewport,
}

impl Camera {
    pub fn new_perspective(fov_y_deg: f32, z_near: f32, z_far: f32, viewport: Viewport) -> Self {
        Self {
            transform: Transform::identity(),
            fov_y_deg,
            z_near,
            z_far,
            viewport,
        }
    }

    pub fn from_settings(settings: &CameraSettings, viewport: Viewport) -> Self {
        let mut camera =
            Self::new_perspective(settings.fov_y_deg, settings.z_near, settings.z_far, viewport);
        let p = settings.position;
        let r = settings.rotation_deg;
        camera.transform.set_position(p.x, p.y, p.z);
        camera.transform.set_rotation(r.x, r.y, r.z);
        camera
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Records the new size. Matrices are rebuilt on the next request.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if viewport != self.viewport {
            log::debug!(
                "Camera viewport {}x{} -> {}x{}",
                self.viewport.width,
                self.viewport.height,
                width,
                height
            );
        }
        self.viewport = viewport;
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.transform.set_position(x, y, z);
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.transform.set_rotation(x, y, z);
    }

    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.transform.rotate(dx, dy, dz);
    }

    /// World -> camera space.
    ///
    /// The rotation block is the transposed camera basis and the last
    /// column holds `-dot(eye, axis)` per axis, so no general inverse is
    /// needed.
    ///
    /// Camera scale magnitude is ignored. A negative factor keeps its sign
    /// and mirrors the matching view axis.
    pub fn view(&mut self) -> Mat4 {
        let (u, v, n) = self.transform.axes();
        view_from_basis(self.transform.position(), u, v, n)
    }

    /// Camera -> clip space, using the aspect ratio of the current viewport.
    pub fn proj(&self) -> Mat4 {
        perspective(self.fov_y_deg, self.viewport.aspect(), self.z_near, self.z_far)
    }

    #[inline]
    pub fn proj_view(&mut self) -> Mat4 {
        self.proj() * self.view()
    }

    /// `P * V * M` for the given viewport size.
    pub fn compute_mvp(&mut self, model: Mat4, width: u32, height: u32) -> Mat4 {
        self.resize(width, height);
        self.proj_view() * model
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default(), Viewport::default())
    }
}

/// Builds a view matrix from an eye point and an orthonormal basis
/// (`u` right, `v` up, `n` forward).
pub fn view_from_basis(eye: Vec3, u: Vec3, v: Vec3, n: Vec3) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(u.x, v.x, n.x, 0.0),
        Vec4::new(u.y, v.y, n.y, 0.0),
        Vec4::new(u.z, v.z, n.z, 0.0),
        Vec4::new(-eye.dot(u), -eye.dot(v), -eye.dot(n), 1.0),
    )
}

/// Left-handed perspective with clip z in `[-1, 1]`.
///
/// With `d = 1 / tan(fov / 2)`: `x' = d / aspect * x`, `y' = d * y`,
/// `z' = a * z + b`, `w' = z`, where `a = -(f + n) / (n - f)` and
/// `b = 2 f n / (n - f)`. Degenerate input is not rejected.
pub fn perspective(fov_y_deg: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
    let d = 1.0 / (fov_y_deg.to_radians() / 2.0).tan();
    let z_range = z_near - z_far;
    let a = (-z_far - z_near) / z_range;
    let b = 2.0 * z_far * z_near / z_range;
    Mat4::from_cols(
        Vec4::new(d / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, d, 0.0, 0.0),
        Vec4::new(0.0, 0.0, a, 1.0),
        Vec4::new(0.0, 0.0, b, 0.0),
    )
}

/// Perspective divide of `mvp * point`. `None` when `w` is too close to
/// zero to divide by.
pub fn project_to_ndc(mvp: Mat4, point: Vec3) -> Option<Vec3> {
    let clip = mvp * point.extend(1.0);
    if clip.w.abs() < 1e-6 {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    const EPS: f32 = 1e-5;

    fn camera(width: u32, height: u32) -> Camera {
        Camera::new_perspective(90.0, 1.0, 10.0, Viewport::new(width, height))
    }

    #[test]
    fn unmoved_camera_has_identity_view() {
        let mut cam = camera(800, 800);
        assert_eq!(cam.view(), Mat4::IDENTITY);
    }

    #[test]
    fn projection_depth_terms() {
        let p = camera(800, 800).proj();
        assert!((p.z_axis.z - 11.0 / 9.0).abs() < EPS, "a = {}", p.z_axis.z);
        assert!((p.w_axis.z - -20.0 / 9.0).abs() < EPS, "b = {}", p.w_axis.z);
        assert_eq!(p.z_axis.w, 1.0);
        assert_eq!(p.w_axis.w, 0.0);
        // tan(45 deg) = 1
        assert!((p.x_axis.x - 1.0).abs() < EPS);
        assert!((p.y_axis.y - 1.0).abs() < EPS);
    }

    #[test]
    fn near_and_far_map_to_clip_bounds() {
        let p = camera(800, 800).proj();
        let near = project_to_ndc(p, vec3(0.0, 0.0, 1.0)).unwrap();
        let far = project_to_ndc(p, vec3(0.0, 0.0, 10.0)).unwrap();
        assert!((near.z - -1.0).abs() < EPS, "{near:?}");
        assert!((far.z - 1.0).abs() < EPS, "{far:?}");
    }

    #[test]
    fn widening_viewport_halves_only_x_scale() {
        let mut cam = camera(800, 800);
        let square = cam.proj();
        cam.resize(1600, 800);
        let wide = cam.proj();

        let a = square.to_cols_array();
        let b = wide.to_cols_array();
        assert_eq!(b[0], a[0] * 0.5);
        for i in 1..16 {
            assert_eq!(a[i], b[i], "element {i} changed");
        }
    }

    #[test]
    fn resize_is_not_cached_across_mvp_calls() {
        let mut cam = camera(800, 800);
        let first = cam.compute_mvp(Mat4::IDENTITY, 800, 800);
        let second = cam.compute_mvp(Mat4::IDENTITY, 1600, 800);
        assert_eq!(second.x_axis.x, first.x_axis.x * 0.5);
        assert_eq!(cam.viewport(), Viewport::new(1600, 800));
    }

    #[test]
    fn translated_camera_sees_point_relative_to_eye() {
        let mut cam = camera(800, 800);
        cam.set_position(1.0, 2.0, -3.0);
        let p = cam.view().transform_point3(vec3(1.0, 2.0, 0.0));
        assert!(p.abs_diff_eq(vec3(0.0, 0.0, 3.0), EPS), "{p:?}");
    }

    #[test]
    fn rotated_camera_view_inverts_its_transform() {
        let mut cam = camera(800, 800);
        cam.set_position(2.0, -1.0, 4.0);
        cam.set_rotation(15.0, -30.0, 5.0);
        let world = cam.transform.matrix();
        let view = cam.view();
        assert!((view * world).abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn camera_turned_right_sees_plus_x_straight_ahead() {
        let mut cam = camera(800, 800);
        cam.rotate(0.0, -90.0, 0.0);
        let p = cam.view().transform_point3(vec3(5.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(vec3(0.0, 0.0, 5.0), 1e-4), "{p:?}");
    }

    #[test]
    fn camera_scale_magnitude_is_ignored_but_sign_mirrors() {
        let mut cam = camera(800, 800);
        cam.set_position(0.0, 1.0, 0.0);
        cam.transform.set_scale_xyz(-2.0, 3.0, 1.0);
        let p = cam.view().transform_point3(vec3(3.0, 2.0, 4.0));
        assert!(p.abs_diff_eq(vec3(-3.0, 1.0, 4.0), EPS), "{p:?}");
    }

    #[test]
    fn mvp_applies_model_first() {
        let mut cam = camera(800, 800);
        let model = Mat4::from_translation(vec3(0.0, 0.0, 2.0));
        let mvp = cam.compute_mvp(model, 800, 800);
        let ndc = project_to_ndc(mvp, Vec3::ZERO).unwrap();
        let expected = project_to_ndc(cam.proj(), vec3(0.0, 0.0, 2.0)).unwrap();
        assert!(ndc.abs_diff_eq(expected, EPS));
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn projecting_eye_plane_yields_none() {
        let p = camera(800, 800).proj();
        assert_eq!(project_to_ndc(p, vec3(1.0, 1.0, 0.0)), None);
    }
}
