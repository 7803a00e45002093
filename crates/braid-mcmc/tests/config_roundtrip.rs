use braid_mcmc::{ExportFormat, RunConfig};

#[test]
fn empty_yaml_uses_defaults() {
    let config = RunConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.initial_word, vec![1, 2, 3]);
    assert_eq!(config.bounds.max_gen, 9);
    assert_eq!(config.bounds.max_len, 10);
    assert_eq!(config.num_braidreps, 1);
    assert_eq!(config.msteps, 100);
    assert_eq!(config.output.format, ExportFormat::Csv);
}

#[test]
fn yaml_overrides_fields() {
    let yaml = r#"
initial_word: [2, -1, 3]
bounds:
  max_gen: 5
  max_len: 8
num_braidreps: 4
msteps: 30
seed_policy:
  master_seed: 12
  label: pilot
output:
  format: txt
  only_braidreps: true
"#;
    let config = RunConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.initial_word, vec![2, -1, 3]);
    assert_eq!(config.bounds.max_gen, 5);
    assert_eq!(config.seed_policy.label.as_deref(), Some("pilot"));
    assert_eq!(
        config.output.resolved_data_file().to_str(),
        Some("braidreps.txt")
    );
    config.validate().unwrap();

    let text = config.to_yaml_string().unwrap();
    assert_eq!(RunConfig::from_yaml_str(&text).unwrap(), config);
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = RunConfig::from_yaml_str("msteps: [not, a, number]").unwrap_err();
    assert_eq!(err.info().code, "config-parse");
}

#[test]
fn validation_flags_words_outside_bounds() {
    let mut config = RunConfig::default();
    config.initial_word = vec![1, 12];
    let err = config.validate().unwrap_err();
    assert_eq!(err.info().code, "word-generator-too-large");
    assert!(err.info().hint.is_some());
    assert!(braid_mcmc::run(&config).is_err());
}
