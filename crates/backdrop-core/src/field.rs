//! Ambient field: the slow background drift.
//!
//! A fixed pool of small discs wanders inside the viewport, bouncing off its
//! edges. The pointer acts as a weak attractor within [`POINTER_RADIUS_PX`]:
//! it nudges velocity rather than position, so particles swing around it
//! instead of snapping onto it. Nearby particles are joined by faint lines.

use crate::config::BackdropConfig;
use crate::constants::*;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl AmbientParticle {
    pub fn random<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                spread(rng, viewport.width),
                spread(rng, viewport.height),
            ),
            vel: Vec2::new(
                rng.gen_range(-AMBIENT_SPEED_MAX..AMBIENT_SPEED_MAX),
                rng.gen_range(-AMBIENT_SPEED_MAX..AMBIENT_SPEED_MAX),
            ),
            radius: AMBIENT_RADIUS_MIN + rng.gen::<f32>() * AMBIENT_RADIUS_SPAN,
            opacity: AMBIENT_OPACITY_MIN + rng.gen::<f32>() * AMBIENT_OPACITY_SPAN,
        }
    }

    fn advance(&mut self, bounds: Viewport, pointer: Option<Vec2>) {
        self.pos += self.vel;

        if let Some(p) = pointer {
            let to_pointer = p - self.pos;
            let d = to_pointer.length();
            if d < POINTER_RADIUS_PX {
                let force = (POINTER_RADIUS_PX - d) / POINTER_RADIUS_PX;
                self.vel += to_pointer * force * POINTER_FORCE;
            }
        }

        if self.pos.x < 0.0 || self.pos.x > bounds.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.height {
            self.vel.y = -self.vel.y;
        }
        self.pos = self
            .pos
            .clamp(Vec2::ZERO, Vec2::new(bounds.width, bounds.height));
    }
}

// Uniform in [0, extent), or 0 for an empty axis.
#[inline]
fn spread<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// Link alpha for two ambient particles `distance` px apart, if they link.
#[inline]
pub fn ambient_link_alpha(distance: f32) -> Option<f32> {
    (distance < AMBIENT_LINK_DISTANCE_PX)
        .then(|| AMBIENT_LINK_ALPHA * (1.0 - distance / AMBIENT_LINK_DISTANCE_PX))
}

#[derive(Clone, Debug, Default)]
pub struct AmbientField {
    particles: Vec<AmbientParticle>,
}

impl AmbientField {
    pub fn build<R: Rng + ?Sized>(
        viewport: Viewport,
        config: &BackdropConfig,
        rng: &mut R,
    ) -> Self {
        let mut field = Self::default();
        field.rebuild(viewport, config, rng);
        field
    }

    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        config: &BackdropConfig,
        rng: &mut R,
    ) {
        let count = config.ambient_count(viewport.width);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| AmbientParticle::random(viewport, rng)));
        log::debug!(
            "[field] rebuilt {} particles for {:.0}x{:.0}",
            count,
            viewport.width,
            viewport.height
        );
    }

    pub fn particles(&self) -> &[AmbientParticle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [AmbientParticle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn advance(&mut self, bounds: Viewport, pointer: Option<Vec2>) {
        for p in &mut self.particles {
            p.advance(bounds, pointer);
        }
    }

    /// Paints every particle, then the proximity links. Returns the link count.
    pub fn render(&self, surface: &mut dyn Surface) -> usize {
        for p in &self.particles {
            surface.draw_disc(p.pos, p.radius, AMBIENT_RGB.with_alpha(p.opacity));
        }

        // All pairs; fine while the pool is capped at a hundred.
        let mut links = 0;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(alpha) = ambient_link_alpha(a.pos.distance(b.pos)) {
                    surface.draw_line(a.pos, b.pos, AMBIENT_RGB.with_alpha(alpha));
                    links += 1;
                }
            }
        }
        links
    }

    pub fn step(
        &mut self,
        bounds: Viewport,
        pointer: Option<Vec2>,
        surface: &mut dyn Surface,
    ) -> usize {
        self.advance(bounds, pointer);
        self.render(surface)
    }
}
