use anyhow::Result;
use murmuration_cli::{build, parse_config, run, Overrides};
use murmuration_core::{FlockConfig, NeighborStrategy, Vector2D, Vector3D};

#[test]
fn test_seeded_runs_are_reproducible() -> Result<()> {
    let config = FlockConfig::with_population(80);
    let bounds = Vector2D::new(800.0, 600.0);

    let mut first = build(bounds, config, Some(1234))?;
    let mut second = build(bounds, config, Some(1234))?;

    let first_stats = run(&mut first, 40, 0);
    let second_stats = run(&mut second, 40, 10);

    assert_eq!(first_stats, second_stats);
    assert_eq!(first.flock(), second.flock());
    assert_eq!(first_stats.tick, 40);
    Ok(())
}

#[test]
fn test_3d_run_reports_three_axes() -> Result<()> {
    let mut murmuration = build(
        Vector3D::new(640.0, 480.0, 300.0),
        FlockConfig::with_population(50),
        Some(9),
    )?;

    let stats = run(&mut murmuration, 25, 5);

    assert_eq!(stats.centroid.len(), 3);
    assert!(stats.max_speed <= murmuration.config().speed_limit);
    assert!(stats.mean_speed <= stats.max_speed);
    assert!((0.0..=1.0001).contains(&stats.polarization));
    Ok(())
}

#[test]
fn test_config_file_flows_into_flock() -> Result<()> {
    let base = parse_config(
        r#"{
            "population": 30,
            "speed_limit": 5.0,
            "neighbor_strategy": "grid"
        }"#,
    )?;
    let config = Overrides {
        population: Some(45),
        ..Overrides::default()
    }
    .apply(base);

    let mut murmuration = build(Vector2D::new(500.0, 500.0), config, Some(2))?;
    let stats = run(&mut murmuration, 10, 0);

    assert_eq!(murmuration.size(), 45);
    assert_eq!(murmuration.config().neighbor_strategy, NeighborStrategy::Grid);
    assert!(stats.max_speed <= 5.0);
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() {
    let config = FlockConfig {
        speed_limit: -1.0,
        ..FlockConfig::default()
    };
    let err = match build(Vector2D::new(500.0, 500.0), config, None) {
        Ok(_) => panic!("negative speed limit accepted"),
        Err(err) => err,
    };
    assert!(format!("{:#}", err).contains("speed limit"));
}
