use crate::{EulerRot, Mat4, Quat, Vec3};

/// Translation step applied per keyboard nudge.
pub const NUDGE_STEP: f32 = 0.1;

/// Rigid transform with non-uniform scale (Euler XYZ).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians (XYZ order).
    pub rotation_euler: Vec3,
    pub scale: Vec3,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_euler: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Shift the object in the camera plane, one keyboard nudge at a time.
    #[inline]
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        self.translation.x += dx;
        self.translation.y += dy;
    }

    /// Apply the scale parameter. Only x and y scale; depth stays untouched,
    /// as the original screensaver scaled only those two axes.
    #[inline]
    pub fn set_scale_xy(&mut self, factor: f32) {
        self.scale.x = factor;
        self.scale.y = factor;
    }

    /// Build matrix = T * R * S (column-major Mat4 per glam).
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation_euler.x,
            self.rotation_euler.y,
            self.rotation_euler.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
