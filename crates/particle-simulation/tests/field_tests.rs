use glam::Vec2;
use particle_physics::{Color, Particle, Viewport, PALETTE};
use particle_simulation::{
    CommandList, DrawCommand, FieldError, FieldParams, PairResolution, ParticleField, Pointer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn head_on_pair(resolution: PairResolution) -> ParticleField {
    let particles = vec![
        Particle::new(Vec2::new(100.0, 100.0), 20.0, PALETTE[1]).with_velocity(Vec2::new(1.0, 0.0)),
        Particle::new(Vec2::new(139.0, 100.0), 20.0, PALETTE[2]).with_velocity(Vec2::new(-1.0, 0.0)),
    ];
    ParticleField::from_particles(
        Viewport::new(800.0, 600.0),
        FieldParams::default().with_resolution(resolution),
        particles,
    )
}

#[test]
fn initialized_particles_do_not_overlap() {
    let viewport = Viewport::new(1280.0, 720.0);
    let field = ParticleField::initialize(viewport, FieldParams::default(), &mut seeded(7))
        .expect("default params fit a 1280x720 viewport");

    assert_eq!(field.len(), 100);
    let particles = field.particles();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let gap = particles[i].distance_to(&particles[j]) - 40.0;
            assert!(gap >= -1e-3, "particles {} and {} overlap by {}", i, j, -gap);
        }
    }
}

#[test]
fn initialized_particles_are_inside_with_defaults() {
    let viewport = Viewport::new(1280.0, 720.0);
    let field = ParticleField::initialize(viewport, FieldParams::default(), &mut seeded(11))
        .expect("field");

    for p in field.particles() {
        assert!(p.position.x >= p.radius && p.position.x <= viewport.width - p.radius);
        assert!(p.position.y >= p.radius && p.position.y <= viewport.height - p.radius);
        assert!(p.velocity.x >= -0.5 && p.velocity.x < 0.5);
        assert!(p.velocity.y >= -0.5 && p.velocity.y < 0.5);
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.opacity, 0.0);
        assert!(PALETTE.contains(&p.color));
    }
}

#[test]
fn crowded_viewport_still_terminates() {
    let params = FieldParams::default()
        .with_count(30)
        .with_placement_attempts(50);
    let field = ParticleField::initialize(Viewport::new(100.0, 100.0), params, &mut seeded(3))
        .expect("crowding is not an error");

    assert_eq!(field.len(), 30);
}

#[test]
fn tiny_viewport_is_a_configuration_error() {
    let result = ParticleField::initialize(
        Viewport::new(30.0, 500.0),
        FieldParams::default(),
        &mut seeded(1),
    );
    assert_eq!(
        result.err(),
        Some(FieldError::ViewportTooSmall {
            width: 30.0,
            height: 500.0,
            diameter: 40.0
        })
    );
}

#[test]
fn empty_palette_is_a_configuration_error() {
    let params = FieldParams::default().with_palette(Vec::new());
    let result = ParticleField::initialize(Viewport::new(800.0, 600.0), params, &mut seeded(1));
    assert!(matches!(result, Err(FieldError::EmptyPalette)));
}

#[test]
fn particle_past_right_edge_reflects() {
    let viewport = Viewport::new(800.0, 600.0);
    let particle = Particle::new(Vec2::new(800.0 - 20.0 + 1.0, 300.0), 20.0, Color::WHITE)
        .with_velocity(Vec2::new(2.0, 0.0));
    let mut field = ParticleField::from_particles(viewport, FieldParams::default(), vec![particle]);

    let stats = field.step(Pointer::absent(), &mut CommandList::new());

    assert_eq!(field.particles()[0].velocity.x, -2.0);
    assert_eq!(field.particles()[0].position.x, 800.0 - 20.0 - 1.0);
    assert_eq!(stats.reflections, 1);
}

#[test]
fn head_on_pair_swaps_within_a_step() {
    let mut field = head_on_pair(PairResolution::Both);
    let momentum = field.total_momentum();

    let stats = field.step(Pointer::absent(), &mut CommandList::new());

    assert_eq!(stats.contacts, 1, "second visit must be short-circuited");
    assert_eq!(field.particles()[0].velocity, Vec2::new(-1.0, 0.0));
    assert_eq!(field.particles()[1].velocity, Vec2::new(1.0, 0.0));
    assert!((field.total_momentum() - momentum).length() < 1e-6);
}

#[test]
fn single_and_double_visits_agree_for_isolated_pair() {
    let mut both = head_on_pair(PairResolution::Both);
    let mut once = head_on_pair(PairResolution::Once);

    for _ in 0..20 {
        both.step(Pointer::absent(), &mut CommandList::new());
        once.step(Pointer::absent(), &mut CommandList::new());
    }

    assert_eq!(both.particles(), once.particles());
}

#[test]
fn each_particle_draws_halo_fill_then_outline() {
    let mut particle = Particle::new(Vec2::new(200.0, 200.0), 20.0, PALETTE[3]);
    particle.opacity = 0.1;
    let mut field = ParticleField::from_particles(
        Viewport::new(800.0, 600.0),
        FieldParams::default(),
        vec![particle],
    );
    let mut surface = CommandList::new();

    field.step(Pointer::absent(), &mut surface);

    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::FillCircle {
                center: Vec2::new(200.0, 200.0),
                radius: 20.0,
                color: PALETTE[3],
                alpha: 0.1,
            },
            DrawCommand::StrokeCircle {
                center: Vec2::new(200.0, 200.0),
                radius: 20.0,
                color: PALETTE[3],
                line_width: 1.0,
            },
        ]
    );
}

#[test]
fn opacity_stays_clamped_while_pointer_sweeps() {
    let viewport = Viewport::new(1280.0, 720.0);
    let params = FieldParams::default().with_count(60);
    let mut field = ParticleField::initialize(viewport, params, &mut seeded(21)).expect("field");
    let mut surface = CommandList::new();

    let mut saw_halo = false;
    for frame in 0..600 {
        surface.reset();
        // Park the pointer for a while, then sweep it across the viewport.
        let pointer = if frame < 100 {
            let p = field.particles()[0].position;
            Pointer::at(p.x, p.y)
        } else {
            Pointer::at((frame as f32 * 3.0) % 1280.0, 360.0)
        };
        field.step(pointer, &mut surface);

        for p in field.particles() {
            assert!(p.opacity >= 0.0 && p.opacity <= 0.2, "opacity {}", p.opacity);
        }
        saw_halo |= field.max_opacity() > 0.0;
    }
    assert!(saw_halo, "pointer never lit a halo");
}

#[test]
fn particles_stay_within_one_frame_of_the_border() {
    let viewport = Viewport::new(1000.0, 800.0);
    let params = FieldParams::default().with_count(10).with_radius(10.0);
    let mut field = ParticleField::initialize(viewport, params, &mut seeded(5)).expect("field");
    let mut surface = CommandList::new();

    // Boundary flips and equal-mass collisions keep the sum of squared
    // speeds constant, so no particle can ever move faster than this.
    let speed_bound = field
        .particles()
        .iter()
        .map(|p| p.velocity.length_squared())
        .sum::<f32>()
        .sqrt()
        + 1e-3;

    for _ in 0..3000 {
        surface.reset();
        field.step(Pointer::absent(), &mut surface);
        for p in field.particles() {
            assert!(p.position.x - p.radius >= -speed_bound, "escaped left: {:?}", p.position);
            assert!(p.position.y - p.radius >= -speed_bound, "escaped top: {:?}", p.position);
            assert!(p.position.x + p.radius <= viewport.width + speed_bound);
            assert!(p.position.y + p.radius <= viewport.height + speed_bound);
        }
    }
}

#[test]
fn kinetic_energy_survives_many_frames() {
    let viewport = Viewport::new(800.0, 600.0);
    let params = FieldParams::default().with_count(40);
    let mut field = ParticleField::initialize(viewport, params, &mut seeded(9)).expect("field");
    let mut surface = CommandList::new();

    let before = field.kinetic_energy();
    let mut contacts = 0;
    for _ in 0..1000 {
        surface.reset();
        contacts += field.step(Pointer::absent(), &mut surface).contacts;
    }
    let after = field.kinetic_energy();

    assert!(contacts > 0, "expected at least one collision");
    assert!(
        (after - before).abs() / before < 1e-3,
        "energy drifted from {} to {}",
        before,
        after
    );
}

#[test]
fn resize_rebuilds_inside_new_viewport() {
    let mut field = ParticleField::initialize(
        Viewport::new(1280.0, 720.0),
        FieldParams::default().with_count(20),
        &mut seeded(13),
    )
    .expect("field");

    let small = Viewport::new(400.0, 300.0);
    field.resize(small, &mut seeded(14)).expect("resize");

    assert_eq!(field.viewport(), small);
    assert_eq!(field.len(), 20);
    for p in field.particles() {
        assert!(p.position.x + p.radius <= small.width);
        assert!(p.position.y + p.radius <= small.height);
    }
}

#[test]
fn failed_resize_keeps_previous_field() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut field = ParticleField::initialize(
        viewport,
        FieldParams::default().with_count(5),
        &mut seeded(2),
    )
    .expect("field");
    let before: Vec<Particle> = field.particles().to_vec();

    assert!(field.resize(Viewport::new(0.0, 0.0), &mut seeded(3)).is_err());
    assert_eq!(field.viewport(), viewport);
    assert_eq!(field.particles(), before.as_slice());
}

#[test]
fn halo_follows_viewport_center_before_pointer_moves() {
    let viewport = Viewport::new(800.0, 600.0);
    let particles = vec![
        Particle::new(viewport.center(), 20.0, PALETTE[0]),
        Particle::new(Vec2::new(60.0, 60.0), 20.0, PALETTE[1]),
    ];
    let mut field = ParticleField::from_particles(viewport, FieldParams::default(), particles);

    field.step(Pointer::absent(), &mut CommandList::new());

    assert!((field.particles()[0].opacity - 0.02).abs() < 1e-6);
    assert_eq!(field.particles()[1].opacity, 0.0);
}

#[test]
fn retuned_halo_applies_without_rebuild() {
    let viewport = Viewport::new(800.0, 600.0);
    let params = FieldParams::default().with_count(1).with_max_speed(0.0);
    let mut field = ParticleField::initialize(viewport, params, &mut seeded(31)).expect("field");
    let position = field.particles()[0].position;
    let far = Pointer::at(position.x + 150.0, position.y);

    field.step(far, &mut CommandList::new());
    assert_eq!(field.max_opacity(), 0.0, "default reach of 80 should not light it");

    field.set_halo(200.0, 0.5, 0.1);
    for _ in 0..5 {
        field.step(far, &mut CommandList::new());
    }

    assert_eq!(field.params().halo_distance, 200.0);
    assert!((field.max_opacity() - 0.5).abs() < 1e-5, "opacity {}", field.max_opacity());
    assert_eq!(field.particles()[0].position, position);
}
