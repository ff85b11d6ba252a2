//! Environment layering lives in its own test binary so the variables it
//! sets cannot leak into other config tests running in parallel.

use std::io::Write;

use climind_core::config::{AdaptationPaths, CliOverrides, ClimindConfig};

#[test]
fn layers_resolve_cli_over_env_over_file() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().to_path_buf();
    let path = dir.join("climind.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "[vocabulary]\nroot_concept = \"from file\"\n\n[output]\npretty = true"
    )
    .unwrap();

    // File only.
    let config = ClimindConfig::load(&dir, None, None).unwrap();
    assert_eq!(config.vocabulary.root_concept, "from file");

    // Env beats file.
    std::env::set_var("CLIMIND_ROOT_CONCEPT", "from env");
    std::env::set_var("CLIMIND_OUTPUT_PRETTY", "false");
    std::env::set_var("CLIMIND_LOG_JSON", "true");
    let config = ClimindConfig::load(&dir, Some(&path), None).unwrap();
    assert_eq!(config.vocabulary.root_concept, "from env");
    assert!(!config.output.pretty);
    assert!(config.observability.json);

    // CLI beats env.
    let cli = CliOverrides {
        root_concept: Some("from cli".to_string()),
        adaptation_paths: Some(AdaptationPaths::Raw),
        log_json: Some(false),
        ..Default::default()
    };
    let config = ClimindConfig::load(&dir, None, Some(&cli)).unwrap();
    assert_eq!(config.vocabulary.root_concept, "from cli");
    assert!(!config.observability.json);
    assert_eq!(config.solutions.adaptation_paths, AdaptationPaths::Raw);

    // A malformed path mode from the environment is rejected.
    std::env::set_var("CLIMIND_ADAPTATION_PATHS", "sideways");
    assert!(ClimindConfig::load(&dir, None, None).is_err());

    std::env::remove_var("CLIMIND_ROOT_CONCEPT");
    std::env::remove_var("CLIMIND_OUTPUT_PRETTY");
    std::env::remove_var("CLIMIND_LOG_JSON");
    std::env::remove_var("CLIMIND_ADAPTATION_PATHS");
}
