use skillguard_core::config::*;
use skillguard_core::errors::ConfigError;
use skillguard_core::models::MitigationKind;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MitigationConfig::from_toml("").unwrap();
    assert_eq!(config, MitigationConfig::RECOMMENDED);

    // Graph defaults
    assert!(config.graph.enabled);
    assert_eq!(config.graph.discount_factor, 0.1);

    // Velocity defaults
    assert_eq!(config.velocity.window_ms, 60_000);
    assert_eq!(config.velocity.max_in_window, 10);
    assert_eq!(config.velocity.discount_factor, 0.5);

    // Anomaly defaults
    assert_eq!(config.anomaly.max_new_in_window, 5);
    assert_eq!(config.anomaly.discount_factor, 0.1);

    // Decay defaults
    assert!(!config.temporal_decay.enabled);
    assert_eq!(config.temporal_decay.half_life_ms, 86_400_000);

    // Recency defaults
    assert_eq!(config.submitter_recency.recent_threshold, 0.2);
    assert_eq!(config.submitter_recency.discount_factor, 0.2);

    // SybilRank defaults
    assert_eq!(config.sybil_rank.trust_threshold, 0.2);
    assert_eq!(config.sybil_rank.seed_fraction, 0.25);
    assert_eq!(
        config.sybil_rank.seed_initialization,
        SeedInitialization::DegreeWeighted
    );

    // Jaccard defaults
    assert_eq!(config.jaccard.min_agents_reviewed, 2);
    assert_eq!(config.jaccard.similarity_threshold, 0.7);
    assert_eq!(config.jaccard.min_cluster_size, 3);
    assert_eq!(config.jaccard.discount_factor, 0.15);

    // Temporal correlation defaults
    assert_eq!(config.temporal_correlation.min_lockstep_events, 3);
    assert_eq!(config.temporal_correlation.lockstep_window_ms, 5_000);
    assert_eq!(config.temporal_correlation.min_feedback_for_regularity, 5);
    assert_eq!(config.temporal_correlation.regularity_threshold, 0.15);
    assert_eq!(config.temporal_correlation.discount_factor, 0.2);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[graph]
discount_factor = 0.05

[sybil_rank]
enabled = false
seed_initialization = "uniform"

[temporal_decay]
enabled = true
"#;
    let config = MitigationConfig::from_toml(toml).unwrap();
    assert_eq!(config.graph.discount_factor, 0.05);
    assert!(config.graph.enabled);
    assert!(!config.sybil_rank.enabled);
    assert_eq!(
        config.sybil_rank.seed_initialization,
        SeedInitialization::Uniform
    );
    assert!(config.temporal_decay.enabled);
    // Non-overridden fields keep defaults
    assert_eq!(config.velocity.max_in_window, 10);
}

#[test]
fn config_serde_roundtrip() {
    let config = MitigationConfig::RECOMMENDED;
    let toml_str = config.to_toml().unwrap();
    let roundtripped = MitigationConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn out_of_range_discount_is_rejected() {
    let err = MitigationConfig::from_toml("[jaccard]\ndiscount_factor = 1.5\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "jaccard.discount_factor",
            ..
        }
    ));
}

#[test]
fn zero_window_is_rejected() {
    let err = MitigationConfig::from_toml("[velocity]\nwindow_ms = 0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "velocity.window_ms",
            ..
        }
    ));
}

#[test]
fn tiny_cluster_size_is_rejected() {
    let err = MitigationConfig::from_toml("[jaccard]\nmin_cluster_size = 1\n").unwrap_err();
    assert_eq!(
        err,
        ConfigError::BelowMinimum {
            field: "jaccard.min_cluster_size",
            value: 1,
            min: 2,
        }
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = MitigationConfig::from_toml("[graph\nenabled = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed { .. }));
}

#[test]
fn naive_baseline_disables_everything() {
    let naive = MitigationConfig::NAIVE_BASELINE;
    assert!(naive.is_naive());
    assert!(naive.enabled_kinds().is_empty());
    assert!(naive.validate().is_ok());
}

#[test]
fn recommended_enables_all_but_decay() {
    let kinds = MitigationConfig::RECOMMENDED.enabled_kinds();
    assert_eq!(kinds.len(), 7);
    assert!(!kinds.contains(&MitigationKind::TemporalDecay));
    assert_eq!(MitigationConfig::default(), MitigationConfig::RECOMMENDED);
}

#[test]
fn only_enables_a_single_mitigation() {
    for kind in MitigationKind::ALL {
        let config = MitigationConfig::only(kind);
        assert_eq!(config.enabled_kinds(), vec![kind]);
        assert!(!config.is_naive());
    }
}
