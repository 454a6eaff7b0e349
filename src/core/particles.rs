use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2, // pixels per reference frame
    pub radius: f32,
    pub phase: f32,
    pub color: [u8; 3],
}

/// Shape of a particle field. The background network and the avatar panel
/// dust are two presets of the same simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub phase_step: f32,
    /// Pairs closer than this are linked; `None` disables links entirely.
    pub link_distance: Option<f32>,
    pub link_max_opacity: f32,
    pub palette: [[u8; 3]; 2],
    pub trail_alpha: f32,
    /// Vertical drift amplitude (pixels per reference frame), 0 for none.
    pub wobble: f32,
}

impl FieldParams {
    pub fn network() -> Self {
        Self {
            count: NETWORK_NODE_COUNT,
            speed_span: NETWORK_SPEED_SPAN,
            radius_min: NODE_RADIUS_MIN,
            radius_span: NODE_RADIUS_SPAN,
            phase_step: NODE_PHASE_STEP,
            link_distance: Some(LINK_DISTANCE),
            link_max_opacity: LINK_MAX_OPACITY,
            palette: [PALETTE_DEEP, PALETTE_LIGHT],
            trail_alpha: TRAIL_ALPHA,
            wobble: 0.0,
        }
    }

    pub fn dust() -> Self {
        Self {
            count: DUST_PARTICLE_COUNT,
            speed_span: NETWORK_SPEED_SPAN * 0.5,
            radius_min: NODE_RADIUS_MIN,
            radius_span: 1.0,
            phase_step: NODE_PHASE_STEP * 2.0,
            link_distance: None,
            link_max_opacity: 0.0,
            palette: [DUST_RGB, PALETTE_LIGHT],
            trail_alpha: 1.0,
            wobble: DUST_WOBBLE,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::network()
    }
}

/// Per-frame draw data for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSprite {
    pub center: Vec2,
    pub glow_radius: f32,
    pub disc_radius: f32,
    pub alpha: f32,
    pub color: [u8; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub opacity: f32,
}

#[inline]
pub fn pulse(phase: f32) -> f32 {
    phase.sin() * PULSE_AMPLITUDE + PULSE_BIAS
}

/// Linear falloff: `max_opacity` at distance 0, zero at and beyond `threshold`.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32, max_opacity: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / threshold) * max_opacity
}

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    elapsed: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: FieldParams, width: f32, height: f32, rng: &mut R) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..params.count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * params.speed_span,
                    (rng.gen::<f32>() - 0.5) * params.speed_span,
                ),
                radius: rng.gen::<f32>() * params.radius_span + params.radius_min,
                phase: rng.gen::<f32>() * TAU,
                color: if rng.gen_bool(0.5) {
                    params.palette[0]
                } else {
                    params.palette[1]
                },
            })
            .collect();
        Self {
            params,
            particles,
            width,
            height,
            elapsed: 0.0,
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// New surface size; particles keep their state and are pulled back
    /// inside on the next tick if the surface shrank.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn tick(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0).min(MAX_TICK_SEC);
        if dt == 0.0 {
            return;
        }
        let frames = dt * REFERENCE_FPS;
        self.elapsed += dt;
        let (w, h) = (self.width, self.height);
        let wobble = self.params.wobble;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position += p.velocity * frames;
            if wobble != 0.0 {
                p.position.y += (self.elapsed + i as f32).sin() * wobble * frames;
            }
            reflect_axis(&mut p.position.x, &mut p.velocity.x, w);
            reflect_axis(&mut p.position.y, &mut p.velocity.y, h);
            p.phase += self.params.phase_step * frames;
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = NodeSprite> + '_ {
        self.particles.iter().map(|p| {
            let k = pulse(p.phase);
            NodeSprite {
                center: p.position,
                glow_radius: p.radius * k * SPRITE_GLOW_SCALE,
                disc_radius: p.radius * k * SPRITE_DISC_SCALE,
                alpha: SPRITE_ALPHA * k,
                color: p.color,
            }
        })
    }

    /// Every unordered pair within the link distance. Quadratic in the
    /// particle count.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.params.link_distance.unwrap_or(0.0);
        let max_opacity = self.params.link_max_opacity;
        let ps: &[Particle] = match self.params.link_distance {
            Some(_) => &self.particles,
            None => &[],
        };
        ps.iter().enumerate().flat_map(move |(i, a)| {
            ps[i + 1..].iter().filter_map(move |b| {
                let d = a.position.distance(b.position);
                let opacity = link_opacity(d, threshold, max_opacity);
                (opacity > 0.0).then_some(Link {
                    a: a.position,
                    b: b.position,
                    opacity,
                })
            })
        })
    }
}

#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = extent;
        *vel = -vel.abs();
    }
}
