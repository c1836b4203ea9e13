//! Cursor trail: short-lived sparks left behind by the pointer.
//!
//! Each pointer move spawns one particle a little off the pointer position.
//! It eases back towards that spawn point while wandering slightly, fades as
//! its life decays, and leaves the pool on the first tick its life reaches
//! zero. The pool is a FIFO capped at `capacity`; a full pool drops its
//! oldest spark to make room.

use crate::constants::*;
use crate::surface::{Rgb, Surface};
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorParticle {
    pub id: u64,
    pub pos: Vec2,
    pub target: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub life: f32,
    pub decay: f32,
    pub color: Rgb,
}

impl CursorParticle {
    /// Fresh particle sitting on its target. `id` is assigned by the trail.
    pub fn new(target: Vec2, radius: f32, decay: f32, color: Rgb) -> Self {
        Self {
            id: 0,
            pos: target,
            target,
            radius,
            opacity: TRAIL_OPACITY_SCALE,
            life: 1.0,
            decay,
            color,
        }
    }

    pub fn random<R: Rng + ?Sized>(target: Vec2, rng: &mut R) -> Self {
        let jitter = Vec2::new(
            rng.gen_range(-TRAIL_SPAWN_JITTER_PX..TRAIL_SPAWN_JITTER_PX),
            rng.gen_range(-TRAIL_SPAWN_JITTER_PX..TRAIL_SPAWN_JITTER_PX),
        );
        let color = Rgb::new(
            rng.gen_range(TRAIL_RED.0..=TRAIL_RED.1),
            rng.gen_range(TRAIL_GREEN.0..=TRAIL_GREEN.1),
            rng.gen_range(TRAIL_BLUE.0..=TRAIL_BLUE.1),
        );
        Self {
            pos: target + jitter,
            ..Self::new(
                target,
                TRAIL_RADIUS_MIN + rng.gen::<f32>() * TRAIL_RADIUS_SPAN,
                rng.gen_range(TRAIL_DECAY_MIN..TRAIL_DECAY_MAX),
                color,
            )
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos += (self.target - self.pos) * TRAIL_EASE;
        self.pos += Vec2::new(
            rng.gen_range(-TRAIL_WANDER_PX..TRAIL_WANDER_PX),
            rng.gen_range(-TRAIL_WANDER_PX..TRAIL_WANDER_PX),
        );
        self.life -= self.decay;
        self.opacity = (self.life * TRAIL_OPACITY_SCALE).max(0.0);
    }
}

/// Link alpha between two sparks `distance` px apart, if they link.
#[inline]
pub fn trail_link_alpha(distance: f32, opacity_a: f32, opacity_b: f32) -> Option<f32> {
    (distance < TRAIL_LINK_DISTANCE_PX).then(|| {
        (1.0 - distance / TRAIL_LINK_DISTANCE_PX) * opacity_a * opacity_b * TRAIL_LINK_ALPHA
    })
}

#[derive(Clone, Debug)]
pub struct CursorTrail {
    particles: VecDeque<CursorParticle>,
    capacity: usize,
    next_id: u64,
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CursorParticle> + '_ {
        self.particles.iter()
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) -> Option<u64> {
        if self.capacity == 0 {
            return None;
        }
        let particle = CursorParticle::random(Vec2::new(x, y), rng);
        self.push(particle)
    }

    /// Appends `particle` with a fresh id, evicting the oldest while full.
    pub fn push(&mut self, mut particle: CursorParticle) -> Option<u64> {
        if self.capacity == 0 {
            return None;
        }
        while self.particles.len() >= self.capacity {
            self.particles.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        particle.id = id;
        self.particles.push_back(particle);
        Some(id)
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in self.particles.iter_mut() {
            p.advance(rng);
        }
        self.particles.retain(CursorParticle::is_alive);
    }

    /// Paints sparks with their glow, then the links. Returns the link count.
    pub fn render(&self, surface: &mut dyn Surface) -> usize {
        for p in &self.particles {
            let r = p.radius * p.life;
            surface.draw_disc(p.pos, r, p.color.with_alpha(p.opacity));
            surface.draw_disc(
                p.pos,
                r * TRAIL_GLOW_RADIUS_SCALE,
                p.color.with_alpha(p.opacity * TRAIL_GLOW_ALPHA_SCALE),
            );
        }

        let mut links = 0;
        for (i, a) in self.particles.iter().enumerate() {
            for b in self.particles.iter().skip(i + 1) {
                let d = a.pos.distance(b.pos);
                if let Some(alpha) = trail_link_alpha(d, a.opacity, b.opacity) {
                    surface.draw_line(a.pos, b.pos, a.color.with_alpha(alpha));
                    links += 1;
                }
            }
        }
        links
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: &mut dyn Surface) -> usize {
        self.advance(rng);
        self.render(surface)
    }
}
