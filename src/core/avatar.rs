use super::constants::*;
use super::smoothing::{damp_vec2, damp_vec3};
use glam::{Vec2, Vec3};

/// Guide section ids and avatar keys differ only for the landing section.
#[inline]
pub fn avatar_key(section_id: &str) -> &str {
    match section_id {
        "hero" => "home",
        other => other,
    }
}

/// Head orientation per section as (pitch, yaw) in radians.
pub fn look_target(key: &str) -> Vec2 {
    match key {
        "fms" => Vec2::new(-0.05, -0.25),
        "hospital" => Vec2::new(0.02, 0.3),
        "mission" => Vec2::new(0.05, 0.0),
        _ => Vec2::ZERO,
    }
}

pub fn section_description(key: &str) -> &'static str {
    match key {
        "home" => "Your virtual guide to Smart Health Care City.",
        "fms" => "Faculty of Medicine — education, training and research.",
        "hospital" => "UM6P Hospital — advanced clinical care & innovation.",
        "mission" => "Our mission: integrated education, research and exceptional clinical care.",
        _ => "Explore more about this section.",
    }
}

/// Link behind the widget's "Open" button.
pub fn section_link(key: &str) -> &'static str {
    match key {
        "fms" => "https://fms.shcc-um6p.ma",
        "hospital" => "https://hospital.shcc-um6p.ma",
        _ => "#",
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarPose {
    pub rotation: Vec2, // (pitch, yaw)
    pub position: Vec3,
    pub scale: f32,
}

impl Default for AvatarPose {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            position: Vec3::new(0.0, AVATAR_FLOAT_OFFSET, 0.0),
            scale: AVATAR_BASE_SCALE,
        }
    }
}

/// Pose targets for the guide avatar; the 3D scene reads `pose()` each frame.
#[derive(Clone, Debug)]
pub struct AvatarRig {
    key: Option<String>,
    look: Vec2,
    hover: Vec2,
    pose: AvatarPose,
    expanded: bool,
    elapsed: f32,
}

impl Default for AvatarRig {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarRig {
    pub fn new() -> Self {
        Self {
            key: None,
            look: Vec2::ZERO,
            hover: Vec2::ZERO,
            pose: AvatarPose::default(),
            expanded: false,
            elapsed: 0.0,
        }
    }

    pub fn pose(&self) -> AvatarPose {
        self.pose
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn look(&self) -> Vec2 {
        self.look
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Retargets the pose. Returns the description to narrate when the key
    /// actually changed.
    pub fn set_section(&mut self, key: &str) -> Option<&'static str> {
        if self.key.as_deref() == Some(key) {
            return None;
        }
        self.key = Some(key.to_owned());
        self.look = look_target(key);
        Some(section_description(key))
    }

    /// Pointer in normalized device coordinates, both axes in [-1, 1].
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.hover = pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn tick(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0).min(MAX_TICK_SEC);
        self.elapsed += dt;
        let t = self.elapsed;

        self.pose.rotation.y += dt * AVATAR_IDLE_SPIN_PER_SEC;
        self.pose.rotation = damp_vec2(self.pose.rotation, self.look, AVATAR_LOOK_RATE, dt);

        let float_y = (t * AVATAR_FLOAT_FREQ).sin() * AVATAR_FLOAT_AMPLITUDE
            + (t * AVATAR_HEARTBEAT_FREQ).sin() * AVATAR_HEARTBEAT_AMPLITUDE
            + AVATAR_FLOAT_OFFSET;
        // screen y grows downward, scene y upward
        let target = Vec3::new(
            self.hover.x * AVATAR_HOVER_SPAN,
            -self.hover.y * AVATAR_HOVER_SPAN + float_y,
            0.0,
        );
        self.pose.position = damp_vec3(self.pose.position, target, AVATAR_FOLLOW_RATE, dt);

        let breathe = 1.0 + (t * AVATAR_BREATHE_FREQ).sin() * AVATAR_BREATHE_DEPTH;
        let open = if self.expanded {
            AVATAR_EXPANDED_SCALE
        } else {
            1.0
        };
        self.pose.scale = AVATAR_BASE_SCALE * breathe * open;
    }
}
