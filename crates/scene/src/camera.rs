use crate::{Mat4, Vec3, vec3};

/// Simple perspective camera (right-handed).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub aspect: f32,
}

impl Camera {
    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_rad,
            self.aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }

    #[inline]
    pub fn proj_view(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

/// Height of the eye in top view, in tween steps of 1.
const TOP_VIEW_HEIGHT: i32 = 10;

/// Camera plus the front/top tween the T key drives.
///
/// Toggling while a tween is in flight is ignored; the eye climbs or
/// descends one unit per tick until it reaches the other endpoint.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    height: i32,
    target_height: i32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera {
                eye: vec3(0.0, 0.0, 10.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
                fov_y_rad: 60f32.to_radians(),
                z_near: 0.1,
                z_far: 50.0,
                aspect,
            },
            height: 0,
            target_height: 0,
        }
    }

    /// Whether the rig is currently parked in top view.
    #[inline]
    pub fn is_top_view(&self) -> bool {
        self.height == TOP_VIEW_HEIGHT
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.height != self.target_height
    }

    /// Start the tween towards the other endpoint, unless one is in flight.
    pub fn toggle_top_view(&mut self) {
        if self.is_animating() {
            return;
        }
        self.target_height = if self.is_top_view() { 0 } else { TOP_VIEW_HEIGHT };
    }

    /// Advance the tween by one step and update the camera eye.
    pub fn tick(&mut self) {
        if self.height < self.target_height {
            self.height += 1;
        } else if self.height > self.target_height {
            self.height -= 1;
        }
        self.camera.eye.y = self.height as f32;
    }
}
