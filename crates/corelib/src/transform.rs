use crate::{Mat4, Vec3, Vec4};

/// Position, Euler rotation (degrees, X/Y/Z) and scale of one entity, plus
/// a lazily rebuilt model matrix.
///
/// Matrices act on column vectors (`p' = M * p`). The model matrix is
/// `T * Rz * Ry * Rx * S`: scale first, then X, Y, Z rotation, then
/// translation.
///
/// Every mutator clears the cache flag; [`Transform::matrix`] rebuilds only
/// when the flag is clear.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    model: Mat4,
    cache_valid: bool,
    #[cfg(test)]
    recomputes: u32,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            model: Mat4::IDENTITY,
            cache_valid: false,
            #[cfg(test)]
            recomputes: 0,
        }
    }

    /// `rotation_deg` is Euler X/Y/Z in degrees.
    #[inline]
    pub fn from_trs(position: Vec3, rotation_deg: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: rotation_deg,
            scale,
            ..Self::identity()
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles in degrees, exactly as accumulated (never normalised).
    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[inline]
    pub fn is_cache_valid(&self) -> bool {
        self.cache_valid
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
        self.cache_valid = false;
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vec3::new(x, y, z);
        self.cache_valid = false;
    }

    /// Uniform scale. Zero or negative values are accepted as-is.
    pub fn set_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
        self.cache_valid = false;
    }

    pub fn set_scale_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.scale = Vec3::new(x, y, z);
        self.cache_valid = false;
    }

    /// Adds to the current Euler angles (degrees).
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation += Vec3::new(dx, dy, dz);
        self.cache_valid = false;
    }

    /// Model matrix. O(1) while the cache is valid.
    pub fn matrix(&mut self) -> Mat4 {
        if self.cache_valid {
            return self.model;
        }

        let model = compose(self.position, self.rotation, self.scale);
        log::trace!(
            "model matrix rebuilt: pos={:?} rot={:?} scale={:?}",
            self.position,
            self.rotation,
            self.scale
        );

        #[cfg(test)]
        {
            self.recomputes += 1;
        }
        self.model = model;
        self.cache_valid = true;
        model
    }

    /// Unit right/up/forward axes of this transform in world space.
    pub fn axes(&mut self) -> (Vec3, Vec3, Vec3) {
        let m = self.matrix();
        (
            m.x_axis.truncate().normalize_or_zero(),
            m.y_axis.truncate().normalize_or_zero(),
            m.z_axis.truncate().normalize_or_zero(),
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

fn compose(position: Vec3, rotation_deg: Vec3, scale: Vec3) -> Mat4 {
    let translation = Mat4::from_translation(position);
    let rotation = rotation_z(rotation_deg.z.to_radians())
        * rotation_y(rotation_deg.y.to_radians())
        * rotation_x(rotation_deg.x.to_radians());
    translation * rotation * Mat4::from_scale(scale)
}

/// +Y toward +Z.
fn rotation_x(theta: f32) -> Mat4 {
    let (s, c) = theta.sin_cos();
    Mat4::from_cols(
        Vec4::X,
        Vec4::new(0.0, c, s, 0.0),
        Vec4::new(0.0, -s, c, 0.0),
        Vec4::W,
    )
}

/// +X toward +Z.
fn rotation_y(theta: f32) -> Mat4 {
    let (s, c) = theta.sin_cos();
    Mat4::from_cols(
        Vec4::new(c, 0.0, s, 0.0),
        Vec4::Y,
        Vec4::new(-s, 0.0, c, 0.0),
        Vec4::W,
    )
}

/// +X toward +Y.
fn rotation_z(theta: f32) -> Mat4 {
    let (s, c) = theta.sin_cos();
    Mat4::from_cols(
        Vec4::new(c, s, 0.0, 0.0),
        Vec4::new(-s, c, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    const EPS: f32 = 1e-5;

    /// Independent rebuild from glam primitives. glam's Y rotation turns +X
    /// toward -Z, hence the negated angle.
    fn reference(position: Vec3, rotation_deg: Vec3, scale: Vec3) -> Mat4 {
        Mat4::from_translation(position)
            * Mat4::from_rotation_z(rotation_deg.z.to_radians())
            * Mat4::from_rotation_y(-rotation_deg.y.to_radians())
            * Mat4::from_rotation_x(rotation_deg.x.to_radians())
            * Mat4::from_scale(scale)
    }

    #[test]
    fn default_is_identity() {
        let mut t = Transform::default();
        assert!(!t.is_cache_valid());
        assert_eq!(t.matrix(), Mat4::IDENTITY);
        assert!(t.is_cache_valid());
    }

    #[test]
    fn repeated_reads_do_not_recompute() {
        let mut t = Transform::identity();
        t.set_position(1.0, -2.0, 3.5);
        t.set_rotation(10.0, 20.0, 30.0);
        t.set_scale_xyz(2.0, 0.5, 1.5);

        let first = t.matrix();
        for _ in 0..5 {
            assert_eq!(t.matrix(), first);
        }
        assert_eq!(t.recomputes, 1);

        let expected = reference(t.position(), t.rotation(), t.scale());
        assert!(first.abs_diff_eq(expected, EPS), "{first:?} != {expected:?}");
    }

    #[test]
    fn every_mutator_invalidates() {
        let mut t = Transform::identity();
        let mutators: [fn(&mut Transform); 5] = [
            |t| t.set_position(0.0, 1.0, 0.0),
            |t| t.set_rotation(0.0, 45.0, 0.0),
            |t| t.set_scale(3.0),
            |t| t.set_scale_xyz(1.0, 2.0, 3.0),
            |t| t.rotate(5.0, 0.0, 0.0),
        ];
        t.matrix();
        t.recomputes = 0;
        for (i, mutate) in mutators.iter().enumerate() {
            t.matrix();
            assert!(t.is_cache_valid());
            mutate(&mut t);
            assert!(!t.is_cache_valid(), "mutator {i} left the cache valid");
            let m = t.matrix();
            assert!(m.abs_diff_eq(reference(t.position(), t.rotation(), t.scale()), EPS));
        }
        assert_eq!(t.recomputes, mutators.len() as u32);
    }

    #[test]
    fn translation_moves_origin() {
        let mut t = Transform::identity();
        t.set_position(0.0, 0.0, 2.0);
        let p = t.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, vec3(0.0, 0.0, 2.0));
    }

    #[test]
    fn scale_applies_before_translation() {
        let mut t = Transform::from_trs(vec3(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::splat(2.0));
        let p = t.matrix().transform_point3(vec3(1.0, 1.0, 1.0));
        assert!(p.abs_diff_eq(vec3(3.0, 4.0, 5.0), EPS));
    }

    #[test]
    fn four_quarter_turns_return_to_start() {
        let mut t = Transform::identity();
        let start = t.matrix();
        for _ in 0..4 {
            t.rotate(0.0, 90.0, 0.0);
        }
        assert_eq!(t.rotation(), vec3(0.0, 360.0, 0.0));
        assert!(t.matrix().abs_diff_eq(start, EPS));
    }

    #[test]
    fn positive_y_rotation_sweeps_x_toward_z() {
        let mut t = Transform::identity();
        t.set_rotation(0.0, 90.0, 0.0);
        let x = t.matrix().transform_vector3(Vec3::X);
        assert!(x.abs_diff_eq(Vec3::Z, EPS), "{x:?}");
    }

    #[test]
    fn rotations_apply_x_then_y_then_z() {
        // X by 90 sends +Y to +Z; Y by 90 then sends +Z to -X.
        let mut t = Transform::identity();
        t.set_rotation(90.0, 90.0, 0.0);
        let y = t.matrix().transform_vector3(Vec3::Y);
        assert!(y.abs_diff_eq(-Vec3::X, EPS), "{y:?}");
    }

    #[test]
    fn axes_ignore_scale() {
        let mut t = Transform::identity();
        t.set_scale(4.0);
        t.set_rotation(0.0, 90.0, 0.0);
        let (u, v, n) = t.axes();
        assert!(u.abs_diff_eq(Vec3::Z, EPS));
        assert!(v.abs_diff_eq(Vec3::Y, EPS));
        assert!(n.abs_diff_eq(-Vec3::X, EPS));
    }
}
