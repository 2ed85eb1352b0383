use murmuration_core::{
    FlockConfig, Murmuration, NeighborStrategy, Starling, UpdatePolicy, Vector, Vector2D, Vector3D,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_flock<V: Vector + 'static>(bounds: V, config: FlockConfig, seed: u64) -> Murmuration<V> {
    let mut rng = StdRng::seed_from_u64(seed);
    Murmuration::from_rng(bounds, config, &mut rng).unwrap()
}

fn dense_config() -> FlockConfig {
    FlockConfig {
        population: 120,
        boundary_margin: 40.0,
        ..FlockConfig::default()
    }
}

#[test]
fn speed_never_exceeds_limit() {
    let policies = [UpdatePolicy::Snapshot, UpdatePolicy::InPlace];
    let strategies = [NeighborStrategy::BruteForce, NeighborStrategy::Grid];

    for policy in policies {
        for strategy in strategies {
            let config = FlockConfig {
                update_policy: policy,
                neighbor_strategy: strategy,
                initial_speed: 40.0,
                ..dense_config()
            };
            let mut murmuration = seeded_flock(Vector2D::new(400.0, 300.0), config, 7);
            for _ in 0..100 {
                murmuration.tick();
                for starling in murmuration.starlings() {
                    assert!(
                        starling.speed() <= config.speed_limit,
                        "{:?}/{:?}: speed {} over limit",
                        policy,
                        strategy,
                        starling.speed()
                    );
                }
            }
        }
    }
}

#[test]
fn neighbour_query_is_symmetric_and_excludes_self() {
    let mut murmuration = seeded_flock(Vector3D::new(300.0, 200.0, 150.0), dense_config(), 11);
    murmuration.tick();

    let starlings = murmuration.starlings().to_vec();
    for radius in [20.0, 45.0, 75.0] {
        for a in 0..starlings.len() {
            let of_a = murmuration.neighbours(a, radius);
            assert!(!of_a.contains(&a));
            for b in 0..starlings.len() {
                if a == b {
                    continue;
                }
                let close = starlings[a].position.distance(&starlings[b].position) < radius;
                let b_in_a = of_a.contains(&b);
                let a_in_b = murmuration.neighbours(b, radius).contains(&a);
                assert_eq!(b_in_a, close);
                assert_eq!(a_in_b, close);
            }
        }
    }
}

#[test]
fn isolated_starling_keeps_its_velocity() {
    let starlings = vec![
        Starling::new(Vector2D::new(500.0, 500.0), Vector2D::new(3.0, -4.0)),
        Starling::new(Vector2D::new(250.0, 750.0), Vector2D::new(-1.0, 1.0)),
    ];
    let mut murmuration =
        Murmuration::from_starlings(Vector2D::new(1000.0, 1000.0), FlockConfig::default(), starlings)
            .unwrap();

    murmuration.tick();

    let velocity = murmuration.starlings()[0].velocity;
    assert_eq!(velocity, Vector2D::new(3.0, -4.0));
    assert!(murmuration.flock().iter().all(|v| v.is_finite()));
}

#[test]
fn same_seed_same_trajectory() {
    let bounds = Vector3D::new(640.0, 480.0, 320.0);
    let mut first = seeded_flock(bounds, dense_config(), 42);
    let mut second = seeded_flock(bounds, dense_config(), 42);

    for _ in 0..50 {
        first.tick();
        second.tick();
    }

    assert_eq!(first.flock(), second.flock());
}

#[test]
fn grid_and_brute_force_agree() {
    let bounds = Vector2D::new(500.0, 500.0);
    let mut brute = seeded_flock(bounds, dense_config(), 3);
    let mut grid = seeded_flock(
        bounds,
        FlockConfig {
            neighbor_strategy: NeighborStrategy::Grid,
            ..dense_config()
        },
        3,
    );

    for _ in 0..30 {
        brute.tick();
        grid.tick();
        assert_eq!(brute.flock(), grid.flock());
    }
}

#[test]
fn snapshot_tick_ignores_visiting_order() {
    let bounds = Vector2D::new(400.0, 400.0);
    let forward = seeded_flock(bounds, dense_config(), 5);
    let mut reversed_starlings = forward.starlings().to_vec();
    reversed_starlings.reverse();

    let mut forward = forward;
    let mut reversed =
        Murmuration::from_starlings(bounds, dense_config(), reversed_starlings).unwrap();

    forward.tick();
    reversed.tick();

    let n = forward.size();
    for (idx, starling) in forward.starlings().iter().enumerate() {
        let mirror = reversed.starlings()[n - 1 - idx];
        assert!(starling.position.distance(&mirror.position) < 1e-3);
        assert!(starling.velocity.distance(&mirror.velocity) < 1e-3);
    }
}

#[test]
fn in_place_tick_lets_later_starlings_see_earlier_moves() {
    let starlings = vec![
        Starling::new(Vector2D::new(500.0, 500.0), Vector2D::new(4.0, 0.0)),
        Starling::new(Vector2D::new(530.0, 500.0), Vector2D::new(0.0, 1.0)),
    ];
    let bounds = Vector2D::new(1000.0, 1000.0);
    let mut snapshot =
        Murmuration::from_starlings(bounds, FlockConfig::default(), starlings.clone()).unwrap();
    let mut in_place = Murmuration::from_starlings(
        bounds,
        FlockConfig {
            update_policy: UpdatePolicy::InPlace,
            ..FlockConfig::default()
        },
        starlings,
    )
    .unwrap();

    snapshot.tick();
    in_place.tick();

    // The first starling visited reads untouched state under both policies.
    assert_eq!(snapshot.starlings()[0], in_place.starlings()[0]);
    assert_ne!(snapshot.starlings()[1], in_place.starlings()[1]);
}

#[test]
fn boundary_push_is_exactly_the_coefficient() {
    let config = FlockConfig::default();
    let width = 1000.0;
    let x = width - config.boundary_margin + 1.0;
    let starlings = vec![Starling::new(Vector2D::new(x, 500.0), Vector2D::zero())];
    let mut murmuration =
        Murmuration::from_starlings(Vector2D::new(width, 1000.0), config, starlings).unwrap();

    murmuration.tick();

    let velocity = murmuration.starlings()[0].velocity;
    assert_eq!(velocity.x, -config.boundary_coefficient);
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn lower_margin_pushes_in_every_axis() {
    let config = FlockConfig {
        boundary_margin: 50.0,
        ..FlockConfig::default()
    };
    let starlings = vec![Starling::new(Vector3D::new(10.0, 10.0, 10.0), Vector3D::zero())];
    let mut murmuration =
        Murmuration::from_starlings(Vector3D::new(500.0, 500.0, 500.0), config, starlings).unwrap();

    murmuration.tick();

    let push = config.boundary_coefficient;
    assert_eq!(murmuration.starlings()[0].velocity, Vector3D::new(push, push, push));
}

#[test]
fn speed_clamp_keeps_heading() {
    let config = FlockConfig {
        speed_limit: 12.0,
        ..FlockConfig::default()
    };
    let starlings = vec![Starling::new(Vector2D::new(500.0, 500.0), Vector2D::new(20.0, 0.0))];
    let mut murmuration =
        Murmuration::from_starlings(Vector2D::new(1000.0, 1000.0), config, starlings).unwrap();

    murmuration.tick();

    let starling = murmuration.starlings()[0];
    assert_eq!(starling.velocity, Vector2D::new(12.0, 0.0));
    assert_eq!(starling.speed(), 12.0);
    assert_eq!(starling.position, Vector2D::new(512.0, 500.0));
}

#[test]
fn crowded_pair_separates() {
    let config = FlockConfig {
        alignment_coefficient: 0.0,
        cohesion_coefficient: 0.0,
        ..FlockConfig::default()
    };
    let a = Vector2D::new(500.0, 500.0);
    let b = Vector2D::new(510.0, 505.0);
    let starlings = vec![
        Starling::new(a, Vector2D::zero()),
        Starling::new(b, Vector2D::zero()),
    ];
    let mut murmuration =
        Murmuration::from_starlings(Vector2D::new(1000.0, 1000.0), config, starlings).unwrap();

    murmuration.tick();

    let pushed_a = murmuration.starlings()[0].velocity;
    let pushed_b = murmuration.starlings()[1].velocity;
    assert_eq!(pushed_a.x.signum(), (a.x - b.x).signum());
    assert_eq!(pushed_a.y.signum(), (a.y - b.y).signum());
    assert_eq!(pushed_b.x.signum(), (b.x - a.x).signum());
    assert_eq!(pushed_b.y.signum(), (b.y - a.y).signum());
}

#[test]
fn population_is_fixed() {
    let mut murmuration = seeded_flock(Vector2D::new(800.0, 600.0), dense_config(), 9);
    let size = murmuration.size();
    for _ in 0..25 {
        murmuration.tick();
        assert_eq!(murmuration.size(), size);
        assert_eq!(murmuration.flock().len(), size * murmuration.stride());
    }
}
