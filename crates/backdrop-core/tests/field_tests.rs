// Ambient field behaviour against a fixed-seed generator.

use backdrop_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn particle(x: f32, y: f32, vx: f32, vy: f32) -> AmbientParticle {
    AmbientParticle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        radius: 2.0,
        opacity: 0.5,
    }
}

fn field_of(particles: Vec<AmbientParticle>) -> AmbientField {
    let mut field = AmbientField::build(
        Viewport::new(10.0 * particles.len() as f32, 100.0),
        &BackdropConfig::default(),
        &mut rng(),
    );
    field.particles_mut().clone_from_slice(&particles);
    field
}

#[test]
fn rebuild_sizes_pool_from_width() {
    let cfg = BackdropConfig::default();
    let mut r = rng();
    for (w, expected) in [
        (0.0, 0),
        (5.0, 0),
        (10.0, 1),
        (375.0, 37),
        (999.0, 99),
        (1000.0, 100),
        (2560.0, 100),
    ] {
        let field = AmbientField::build(Viewport::new(w, 600.0), &cfg, &mut r);
        assert_eq!(field.len(), expected, "width {w}");
    }
}

#[test]
fn rebuild_places_particles_inside_viewport() {
    let cfg = BackdropConfig::default();
    let mut r = rng();
    for (w, h) in [(1000.0, 800.0), (320.0, 640.0), (1920.0, 1.0), (640.0, 0.0)] {
        let field = AmbientField::build(Viewport::new(w, h), &cfg, &mut r);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < w, "x {} outside [0,{w})", p.pos.x);
            if h > 0.0 {
                assert!(p.pos.y >= 0.0 && p.pos.y < h, "y {} outside [0,{h})", p.pos.y);
            } else {
                assert_eq!(p.pos.y, 0.0);
            }
            assert!(p.radius >= 1.0 && p.radius <= 3.0);
            assert!(p.opacity >= 0.2 && p.opacity <= 0.7);
            assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
        }
    }
}

#[test]
fn zero_viewport_renders_nothing() {
    let mut field = AmbientField::build(
        Viewport::new(0.0, 0.0),
        &BackdropConfig::default(),
        &mut rng(),
    );
    let mut list = DrawList::new(0.0, 0.0);
    let links = field.step(Viewport::new(0.0, 0.0), Some(Vec2::new(5.0, 5.0)), &mut list);
    assert!(field.is_empty());
    assert_eq!(links, 0);
    assert!(list.commands.is_empty());
}

#[test]
fn particles_stay_in_bounds_every_frame() {
    let bounds = Viewport::new(400.0, 300.0);
    let mut field = AmbientField::build(bounds, &BackdropConfig::default(), &mut rng());
    // Fast movers to make sure the clamp is exercised.
    for (i, p) in field.particles_mut().iter_mut().enumerate() {
        p.vel = Vec2::new(if i % 2 == 0 { 7.5 } else { -7.5 }, 11.0);
    }
    let mut list = DrawList::new(400.0, 300.0);
    for frame in 0..500 {
        let pointer = Vec2::new((frame * 3 % 400) as f32, (frame * 7 % 300) as f32);
        field.step(bounds, Some(pointer), &mut list);
        for p in field.particles() {
            assert!((0.0..=400.0).contains(&p.pos.x), "frame {frame}: x={}", p.pos.x);
            assert!((0.0..=300.0).contains(&p.pos.y), "frame {frame}: y={}", p.pos.y);
        }
    }
}

#[test]
fn boundary_crossing_flips_velocity_and_clamps() {
    let mut field = field_of(vec![particle(399.0, 150.0, 2.0, 0.0)]);
    field.advance(Viewport::new(400.0, 300.0), None);
    let p = &field.particles()[0];
    assert_eq!(p.pos.x, 400.0);
    assert_eq!(p.vel.x, -2.0);

    let mut field = field_of(vec![particle(10.0, 0.5, 0.0, -1.0)]);
    field.advance(Viewport::new(400.0, 300.0), None);
    let p = &field.particles()[0];
    assert_eq!(p.pos.y, 0.0);
    assert_eq!(p.vel.y, 1.0);
}

#[test]
fn pointer_attracts_within_radius_only() {
    let bounds = Viewport::new(1000.0, 1000.0);

    // 50 px to the right of the pointer: force = 0.5, dv = -50 * 0.5 * 0.001.
    let mut near = field_of(vec![particle(550.0, 500.0, 0.0, 0.0)]);
    near.advance(bounds, Some(Vec2::new(500.0, 500.0)));
    let v = near.particles()[0].vel;
    assert!((v.x + 0.025).abs() < 1e-6, "vx={}", v.x);
    assert_eq!(v.y, 0.0);

    let mut far = field_of(vec![particle(650.0, 500.0, 0.0, 0.0)]);
    far.advance(bounds, Some(Vec2::new(500.0, 500.0)));
    assert_eq!(far.particles()[0].vel, Vec2::ZERO);

    // Exactly on the radius gets nothing.
    let mut edge = field_of(vec![particle(600.0, 500.0, 0.0, 0.0)]);
    edge.advance(bounds, Some(Vec2::new(500.0, 500.0)));
    assert_eq!(edge.particles()[0].vel, Vec2::ZERO);
}

#[test]
fn attraction_changes_velocity_not_position() {
    let bounds = Viewport::new(1000.0, 1000.0);
    let mut field = field_of(vec![particle(520.0, 500.0, 0.0, 0.0)]);
    field.advance(bounds, Some(Vec2::new(500.0, 500.0)));
    // Position integrates the old (zero) velocity before the nudge lands.
    assert_eq!(field.particles()[0].pos, Vec2::new(520.0, 500.0));
    field.advance(bounds, Some(Vec2::new(500.0, 500.0)));
    assert!(field.particles()[0].pos.x < 520.0);
}

#[test]
fn no_pointer_means_no_force() {
    let mut field = field_of(vec![particle(5.0, 5.0, 0.0, 0.0)]);
    field.advance(Viewport::new(100.0, 100.0), None);
    assert_eq!(field.particles()[0].vel, Vec2::ZERO);
}

#[test]
fn link_drawn_iff_closer_than_threshold() {
    assert!(ambient_link_alpha(100.0).is_none());
    assert!(ambient_link_alpha(150.0).is_none());
    assert!((ambient_link_alpha(0.0).unwrap() - 0.1).abs() < 1e-7);
    assert!((ambient_link_alpha(50.0).unwrap() - 0.05).abs() < 1e-7);

    let mut prev = f32::MAX;
    for d in [0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 99.0, 99.9] {
        let a = ambient_link_alpha(d).unwrap();
        assert!(a < prev, "alpha not decreasing at {d}");
        assert!(a > 0.0);
        prev = a;
    }
}

#[test]
fn render_draws_disc_per_particle_then_links() {
    let field = field_of(vec![
        particle(0.0, 0.0, 0.0, 0.0),
        particle(99.0, 0.0, 0.0, 0.0),
        particle(0.0, 100.0, 0.0, 0.0),
    ]);
    let mut list = DrawList::new(300.0, 300.0);
    let links = field.render(&mut list);

    assert_eq!(list.discs().count(), 3);
    for (_, r, c) in list.discs() {
        assert_eq!(r, 2.0);
        assert_eq!(c, Rgb::new(102, 126, 234).with_alpha(0.5));
    }
    // (0,0)-(99,0) links; (0,0)-(0,100) sits exactly on the threshold; the third pair is far.
    assert_eq!(links, 1);
    let lines: Vec<_> = list.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Vec2::new(0.0, 0.0));
    assert_eq!(lines[0].1, Vec2::new(99.0, 0.0));
    assert!((lines[0].2.a - 0.001).abs() < 1e-6);
    // Discs come first.
    assert!(matches!(list.commands.last(), Some(DrawCommand::Line { .. })));
}
