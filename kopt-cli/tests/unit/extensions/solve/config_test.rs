use super::*;
use std::fs::File;

fn read_settings(config: &str) -> GenericResult<SolverSettings> {
    create_settings_from_config_file(BufReader::new(config.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let config = read_config(BufReader::new(File::open("../data/config/config.full.json").expect("cannot open")))
        .expect("cannot read config");

    let settings = create_settings_from_config(&config).expect("cannot create settings");

    assert_eq!(settings.finder.kmax, 4);
    assert_eq!(settings.finder.mode, SearchMode::FirstImprovement);
    assert_eq!(settings.finder.strategy, SearchStrategy::Nonsequential);
    assert_eq!(settings.finder.max_nonsequential_moves, 32);
    assert_eq!(settings.finder.min_improvement, 1E-7);
    assert_eq!(settings.hill_climb.save_period, Some(100));
    assert!(settings.hill_climb.validate_tour);
    assert_eq!(
        settings.perturbation.as_ref().map(|perturbation| (perturbation.kind, perturbation.max_rounds)),
        Some((PerturbationKind::SegmentDoubleBridge, 50))
    );
    assert_eq!(settings.max_depth, 12);
    assert!(settings.length_cache);
    assert_eq!(settings.max_time, Some(60));
    assert_eq!(settings.log_every, Some(50));
    assert_eq!(settings.seed, Some(42));
}

#[test]
fn can_use_defaults_for_empty_config() {
    let settings = read_settings("{}").expect("cannot create settings");

    assert_eq!(settings.finder.kmax, 3);
    assert_eq!(settings.finder.mode, SearchMode::FirstImprovement);
    assert_eq!(settings.finder.strategy, SearchStrategy::Optimal);
    assert!(settings.perturbation.is_none());
    assert_eq!(settings.max_depth, Domain::DEFAULT_MAX_DEPTH);
    assert!(!settings.length_cache);
    assert!(settings.max_time.is_none());
    assert!(settings.log_every.is_none());
    assert!(settings.seed.is_none());
}

parameterized_test! {can_read_strategy, (strategy, first_improvement, expected), {
    let config = format!(r#"{{ "search": {{ "firstImprovement": {first_improvement}, "strategy": {strategy} }} }}"#);

    let settings = read_settings(config.as_str()).expect("cannot create settings");

    assert_eq!(settings.finder.strategy, expected.0);
    assert_eq!(settings.finder.mode, expected.1);
}}

can_read_strategy! {
    case01_optimal: (r#"{ "type": "optimal" }"#, true, (SearchStrategy::Optimal, SearchMode::FirstImprovement)),
    case02_random: (
        r#"{ "type": "random", "sampleSize": 5 }"#, false,
        (SearchStrategy::Random { sample_size: 5 }, SearchMode::BestImprovement)
    ),
    case03_nonsequential: (
        r#"{ "type": "nonsequential" }"#, true,
        (SearchStrategy::Nonsequential, SearchMode::FirstImprovement)
    ),
}

#[test]
fn can_read_double_bridge_perturbation() {
    let settings = read_settings(r#"{ "perturbation": { "type": "doubleBridge", "rounds": 10 } }"#)
        .expect("cannot create settings");

    let perturbation = settings.perturbation.expect("no perturbation");
    assert_eq!(perturbation.kind, PerturbationKind::DoubleBridge);
    assert_eq!(perturbation.max_rounds, 10);
}

#[test]
fn can_use_default_log_every_when_logging_enabled() {
    let settings = read_settings(r#"{ "logging": { "enabled": true } }"#).expect("cannot create settings");

    assert_eq!(settings.log_every, Some(DEFAULT_LOG_EVERY));
}

#[test]
fn can_disable_logging() {
    let settings = read_settings(r#"{ "logging": { "enabled": false, "logEvery": 10 } }"#)
        .expect("cannot create settings");

    assert_eq!(settings.log_every, None);
}

parameterized_test! {can_detect_invalid_config, (config, expected), {
    let result = read_settings(config).map(|_| ()).map_err(|err| err.to_string());

    assert_eq!(result, Err(expected.to_string()));
}}

can_detect_invalid_config! {
    case01_kmax: (r#"{ "search": { "kmax": 1 } }"#, "kmax should be at least 2, got 1"),
    case02_sample_size: (
        r#"{ "search": { "strategy": { "type": "random", "sampleSize": 0 } } }"#,
        "sample size should be positive"
    ),
    case03_min_improvement: (
        r#"{ "search": { "minImprovement": -1.0 } }"#,
        "min improvement should be non negative, got -1"
    ),
    case04_save_period: (r#"{ "hillClimb": { "savePeriod": 0 } }"#, "save period should be positive"),
    case05_max_depth: (r#"{ "quadtree": { "maxDepth": 40 } }"#, "quadtree max depth should be in [1, 31], got 40"),
    case06_log_every: (r#"{ "logging": { "enabled": true, "logEvery": 0 } }"#, "log every should be positive"),
}

#[test]
fn can_detect_unknown_strategy() {
    let result = read_settings(r#"{ "search": { "strategy": { "type": "greedy" } } }"#);

    let err = result.err().expect("no error").to_string();
    assert!(err.starts_with("cannot deserialize config:"), "unexpected error: {err}");
}

#[test]
fn can_create_repeatable_random() {
    let settings = SolverSettings { seed: Some(7), ..SolverSettings::default() };

    let first = settings.create_random().uniform_int(0, 1000);
    let second = settings.create_random().uniform_int(0, 1000);

    assert_eq!(first, second);
}
