// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Time constants should be positive
    assert!(REFERENCE_FPS > 0.0);
    assert!(MAX_TICK_SEC > 0.0 && MAX_TICK_SEC < 1.0);
    assert!(GUIDE_TRANSITION_SEC > 0.0);
    assert!(TESTIMONIAL_PERIOD_SEC > 0.0);

    // Opacities live in [0, 1]
    assert!(TRAIL_ALPHA > 0.0 && TRAIL_ALPHA < 1.0);
    assert!(LINK_MAX_OPACITY > 0.0 && LINK_MAX_OPACITY <= 1.0);
    assert!(LINK_MAX_OPACITY * LINK_MID_BOOST <= 1.0);
    assert!(SPRITE_ALPHA > 0.0 && SPRITE_ALPHA <= 1.0);

    // Damping rates should be positive
    assert!(AVATAR_LOOK_RATE > 0.0);
    assert!(AVATAR_FOLLOW_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_never_inverts() {
    // sin ranges over [-1, 1]; the pulse must stay strictly positive
    assert!(PULSE_BIAS - PULSE_AMPLITUDE > 0.0);
    assert!(PULSE_BIAS + PULSE_AMPLITUDE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn node_glow_reaches_past_its_disc() {
    assert!(SPRITE_GLOW_SCALE > SPRITE_DISC_SCALE);
    assert!(NODE_RADIUS_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_spin_is_slower_than_the_look_damping() {
    // otherwise the avatar would drift away from its section pose
    assert!(AVATAR_IDLE_SPIN_PER_SEC < AVATAR_LOOK_RATE);
    assert!(AVATAR_EXPANDED_SCALE > 1.0);
    assert!(AVATAR_BREATHE_DEPTH < 0.05);
}
