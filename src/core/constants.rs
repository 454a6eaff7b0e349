/// Animation and interaction tuning constants.
///
/// Velocities and per-step increments are expressed per reference frame at
/// 60 Hz; the tick functions scale them by elapsed time.
// Reference frame rate used to turn per-frame constants into per-second rates
pub const REFERENCE_FPS: f32 = 60.0;
// Longest step a single tick may integrate (seconds); larger gaps are clamped
pub const MAX_TICK_SEC: f32 = 0.1;

// Background network
pub const NETWORK_NODE_COUNT: usize = 120;
pub const NETWORK_SPEED_SPAN: f32 = 0.4; // velocity per axis in [-span/2, span/2)
pub const NODE_RADIUS_MIN: f32 = 0.5;
pub const NODE_RADIUS_SPAN: f32 = 2.5;
pub const NODE_PHASE_STEP: f32 = 0.03;
pub const LINK_DISTANCE: f32 = 180.0;
pub const LINK_MAX_OPACITY: f32 = 0.2;
pub const LINK_MID_BOOST: f32 = 1.2; // middle gradient stop is brighter
pub const TRAIL_ALPHA: f32 = 0.1;

// Pulse shaping: pulse = sin(phase) * PULSE_AMPLITUDE + PULSE_BIAS
pub const PULSE_AMPLITUDE: f32 = 0.4;
pub const PULSE_BIAS: f32 = 0.6;
pub const SPRITE_GLOW_SCALE: f32 = 3.0; // gradient radius multiplier
pub const SPRITE_DISC_SCALE: f32 = 2.0; // filled disc radius multiplier
pub const SPRITE_ALPHA: f32 = 0.6;

// Accent palette (deep and light emerald)
pub const PALETTE_DEEP: [u8; 3] = [0, 84, 64];
pub const PALETTE_LIGHT: [u8; 3] = [0, 150, 120];
pub const TRAIL_RGB: [u8; 3] = [250, 251, 252];

// Avatar panel dust
pub const DUST_PARTICLE_COUNT: usize = 200;
pub const DUST_WOBBLE: f32 = 0.6;
pub const DUST_RGB: [u8; 3] = [0, 255, 170];

// Guide
pub const GUIDE_TRANSITION_SEC: f32 = 0.3;

// Avatar rig
pub const AVATAR_BASE_SCALE: f32 = 1.6;
pub const AVATAR_IDLE_SPIN_PER_SEC: f32 = 0.08;
pub const AVATAR_LOOK_RATE: f32 = 2.0; // damping rate toward the section pose
pub const AVATAR_FOLLOW_RATE: f32 = 3.0; // damping rate toward the hover position
pub const AVATAR_BREATHE_FREQ: f32 = 1.1;
pub const AVATAR_BREATHE_DEPTH: f32 = 0.005;
pub const AVATAR_EXPANDED_SCALE: f32 = 1.03;
pub const AVATAR_FLOAT_FREQ: f32 = 1.2;
pub const AVATAR_FLOAT_AMPLITUDE: f32 = 0.2;
pub const AVATAR_HEARTBEAT_FREQ: f32 = 3.0;
pub const AVATAR_HEARTBEAT_AMPLITUDE: f32 = 0.02;
pub const AVATAR_FLOAT_OFFSET: f32 = -0.3;
pub const AVATAR_HOVER_SPAN: f32 = 0.5; // pointer [-1,1] maps to +-span in scene units

// Narration
pub const NARRATION_LANG: &str = "en-US";
pub const NARRATION_RATE: f32 = 1.03;
pub const NARRATION_PITCH: f32 = 1.05;

// Page effects
pub const HERO_PARALLAX_FACTOR: f32 = 0.15;
pub const HERO_FADE_PER_PX: f32 = 0.0015;
pub const SPOTLIGHT_SPAN_PCT: f32 = 12.0;
pub const TESTIMONIAL_COUNT: usize = 3;
pub const TESTIMONIAL_PERIOD_SEC: f32 = 5.0;
