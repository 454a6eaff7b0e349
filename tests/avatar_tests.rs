// Host-side tests for pose damping, the avatar rig and narration requests.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
    pub mod avatar {
        include!("../src/core/avatar.rs");
    }
    pub mod narration {
        include!("../src/core/narration.rs");
    }
}

use glam::{Vec2, Vec3};
use site::avatar::*;
use site::constants::*;
use site::narration::*;
use site::smoothing::*;

const FRAME: f32 = 1.0 / 60.0;

fn run(rig: &mut AvatarRig, seconds: f32) {
    let frames = (seconds / FRAME) as usize;
    for _ in 0..frames {
        rig.tick(FRAME);
    }
}

#[test]
fn damp_moves_toward_target_without_overshoot() {
    let mut x = 0.0;
    let mut prev = x;
    for _ in 0..200 {
        x = damp(x, 1.0, 2.0, FRAME);
        assert!(x > prev && x <= 1.0);
        prev = x;
    }
    assert!((1.0 - x) < 0.01);
}

#[test]
fn damp_is_frame_rate_independent() {
    let mut fine = 0.0;
    for _ in 0..120 {
        fine = damp(fine, 1.0, 3.0, 1.0 / 120.0);
    }
    let mut coarse = 0.0;
    for _ in 0..30 {
        coarse = damp(coarse, 1.0, 3.0, 1.0 / 30.0);
    }
    assert!((fine - coarse).abs() < 1e-4);
}

#[test]
fn damp_handles_degenerate_inputs() {
    assert_eq!(damp(0.5, 1.0, 2.0, 0.0), 0.5);
    assert_eq!(damp(0.5, 1.0, 0.0, 1.0), 0.5);
    assert_eq!(approach_alpha(2.0, -1.0), 0.0);
    let v = damp_vec3(Vec3::ZERO, Vec3::ONE, 1e6, 1.0);
    assert!((v - Vec3::ONE).length() < 1e-5);
    let v2 = damp_vec2(Vec2::ZERO, Vec2::new(2.0, -2.0), 1.0, 0.5);
    assert!(v2.x > 0.0 && v2.x < 2.0 && v2.y < 0.0);
}

#[test]
fn hero_maps_to_the_home_key() {
    assert_eq!(avatar_key("hero"), "home");
    assert_eq!(avatar_key("stats"), "stats");
}

#[test]
fn descriptions_fall_back_for_unknown_sections() {
    assert_eq!(section_description("home"), "Your virtual guide to Smart Health Care City.");
    assert_eq!(section_description("cta"), "Explore more about this section.");
    assert_eq!(section_link("fms"), "https://fms.shcc-um6p.ma");
    assert_eq!(section_link("stats"), "#");
}

#[test]
fn set_section_reports_only_changes() {
    let mut rig = AvatarRig::new();
    assert_eq!(
        rig.set_section("hospital"),
        Some("UM6P Hospital — advanced clinical care & innovation.")
    );
    assert_eq!(rig.set_section("hospital"), None);
    assert_eq!(rig.key(), Some("hospital"));
    assert_eq!(rig.look(), Vec2::new(0.02, 0.3));
    assert!(rig.set_section("fms").is_some());
    assert_eq!(rig.look(), Vec2::new(-0.05, -0.25));
}

#[test]
fn rotation_settles_near_the_section_pose() {
    let mut rig = AvatarRig::new();
    rig.set_section("hospital");
    run(&mut rig, 10.0);
    let r = rig.pose().rotation;
    assert!((r.x - 0.02).abs() < 1e-3, "pitch {}", r.x);
    // idle spin keeps yaw slightly ahead of the target
    assert!(r.y > 0.3 && r.y < 0.36, "yaw {}", r.y);
}

#[test]
fn neutral_sections_look_straight_ahead() {
    let mut rig = AvatarRig::new();
    rig.set_section("mission");
    run(&mut rig, 2.0);
    rig.set_section("stats");
    run(&mut rig, 10.0);
    assert!(rig.pose().rotation.x.abs() < 1e-3);
}

#[test]
fn position_follows_the_pointer() {
    let mut rig = AvatarRig::new();
    rig.set_pointer(Vec2::new(1.0, 0.0));
    run(&mut rig, 10.0);
    assert!((rig.pose().position.x - AVATAR_HOVER_SPAN).abs() < 1e-3);
    rig.set_pointer(Vec2::new(-5.0, 0.0));
    run(&mut rig, 10.0);
    assert!((rig.pose().position.x + AVATAR_HOVER_SPAN).abs() < 1e-3);
}

#[test]
fn floating_stays_within_its_amplitude() {
    let mut rig = AvatarRig::new();
    let band = AVATAR_FLOAT_AMPLITUDE + AVATAR_HEARTBEAT_AMPLITUDE;
    for _ in 0..1200 {
        rig.tick(FRAME);
        let y = rig.pose().position.y;
        assert!(y >= AVATAR_FLOAT_OFFSET - band - 1e-4 && y <= AVATAR_FLOAT_OFFSET + band + 1e-4);
    }
}

#[test]
fn breathing_and_expansion_scale_the_avatar() {
    let mut rig = AvatarRig::new();
    for _ in 0..300 {
        rig.tick(FRAME);
        let s = rig.pose().scale / AVATAR_BASE_SCALE;
        assert!((s - 1.0).abs() <= AVATAR_BREATHE_DEPTH + 1e-5);
    }
    assert!(rig.toggle_expanded());
    rig.tick(FRAME);
    let s = rig.pose().scale / (AVATAR_BASE_SCALE * AVATAR_EXPANDED_SCALE);
    assert!((s - 1.0).abs() <= AVATAR_BREATHE_DEPTH + 1e-5);
    assert!(!rig.toggle_expanded());
}

#[test]
fn nan_dt_leaves_the_pose_untouched() {
    let mut rig = AvatarRig::new();
    run(&mut rig, 1.0);
    let before = rig.pose();
    rig.tick(f32::NAN);
    let after = rig.pose();
    assert!(after.position.is_finite() && after.rotation.is_finite() && after.scale.is_finite());
    assert!((after.position - before.position).length() < 1e-6);
    assert!((after.rotation - before.rotation).length() < 1e-6);
}

#[test]
fn utterance_carries_voice_settings() {
    let u = Utterance::new("Hello");
    assert_eq!(u.text, "Hello");
    assert_eq!(u.lang, "en-US");
    assert_eq!(u.rate, 1.03);
    assert_eq!(u.pitch, 1.05);
}

#[test]
fn narrator_respects_the_toggle() {
    let mut n = Narrator::default();
    assert!(n.is_enabled());
    assert!(n.utter("Welcome").is_some());
    assert!(n.utter("   ").is_none());
    assert!(!n.toggle());
    assert!(n.utter("Welcome").is_none());
    assert!(n.toggle());
}
