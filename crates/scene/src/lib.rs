//! Scene state for the screensaver: camera rig, object transform, drifting
//! colors, and the parameters the keyboard/sliders drive.

pub use glam::{EulerRot, Mat4, Quat, Vec3, vec3};

use rand::Rng;

pub mod camera;
pub mod drift;
pub mod transform;

use camera::CameraRig;
use drift::ColorDrift;
use transform::{NUDGE_STEP, Transform};

/// Keyboard commands the screensaver understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleTopView,
    NudgeLeft,
    NudgeRight,
    NudgeUp,
    NudgeDown,
    RandomizeColors,
    ToggleOverlay,
}

impl Command {
    /// Map a pressed key to a command. Letters are case-insensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            't' => Some(Self::ToggleTopView),
            'a' => Some(Self::NudgeLeft),
            'd' => Some(Self::NudgeRight),
            'w' => Some(Self::NudgeUp),
            's' => Some(Self::NudgeDown),
            ' ' => Some(Self::RandomizeColors),
            'o' => Some(Self::ToggleOverlay),
            _ => None,
        }
    }
}

/// Everything that changes over the life of the screensaver.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub transform: Transform,
    pub rig: CameraRig,
    pub drift: ColorDrift,
    /// Time multiplier for the spin animation; slider notches of 0.1.
    pub speed_mult: f32,
    /// Object scale; slider notches of 0.1, applied to x/y only.
    pub scale_mult: f32,
    pub light_dir: Vec3,
    pub show_overlay: bool,
}

impl SceneState {
    pub fn new(aspect: f32, rng: &mut impl Rng) -> Self {
        Self {
            transform: Transform::identity(),
            rig: CameraRig::new(aspect),
            drift: ColorDrift::new(rng),
            speed_mult: 1.0,
            scale_mult: 1.0,
            light_dir: vec3(1.0, 1.0, 1.0),
            show_overlay: false,
        }
    }

    pub fn apply(&mut self, command: Command, rng: &mut impl Rng) {
        match command {
            Command::ToggleTopView => self.rig.toggle_top_view(),
            Command::NudgeLeft => self.transform.nudge(-NUDGE_STEP, 0.0),
            Command::NudgeRight => self.transform.nudge(NUDGE_STEP, 0.0),
            Command::NudgeUp => self.transform.nudge(0.0, NUDGE_STEP),
            Command::NudgeDown => self.transform.nudge(0.0, -NUDGE_STEP),
            Command::RandomizeColors => self.drift.randomize(rng),
            Command::ToggleOverlay => self.show_overlay = !self.show_overlay,
        }
    }

    /// Slider setters. Sliders report integer notches; a notch is 0.1.
    pub fn set_speed_notch(&mut self, notch: i32) {
        self.speed_mult = notch as f32 / 10.0;
    }

    pub fn set_scale_notch(&mut self, notch: i32) {
        self.scale_mult = notch as f32 / 10.0;
        self.transform.set_scale_xy(self.scale_mult);
    }

    pub fn set_light_dir_notches(&mut self, x: i32, y: i32, z: i32) {
        self.light_dir = vec3(x as f32 / 10.0, y as f32 / 10.0, z as f32 / 10.0);
    }

    /// Advance one frame: camera tween and color drift.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.rig.tick();
        self.drift.update(rng);
    }

    /// Model-view-projection for the spinning object at time `t` seconds.
    pub fn spin_matrix(&self, t: f32) -> Mat4 {
        let rotate = -(t * self.speed_mult);
        spin(
            self.rig.camera.proj_view(),
            self.transform.translation,
            rotate,
            0.0,
        )
    }
}

/// Orbit composition: view-projection, then revolve about the scene's y
/// axis, then offset, then rotate the object about its own y axis.
pub fn spin(view_proj: Mat4, translation: Vec3, rotate: f32, revolve: f32) -> Mat4 {
    view_proj
        * Mat4::from_rotation_y(revolve)
        * Mat4::from_translation(translation)
        * Mat4::from_rotation_y(rotate)
}
