use anyhow::Result;
use featsent_testing::{TestWorld, assertions};

#[test]
fn test_config_show_defaults() -> Result<()> {
    let world = TestWorld::new();

    let json = world.run_json(&["config", "show"])?;
    assertions::assert_badge_level(&json, "info")?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["config"]["histogram_bins"], 20);
    assert_eq!(
        json["content"]["config"]["default_csv"],
        "data/processed/noom_google_clean.csv"
    );
    Ok(())
}

#[test]
fn test_config_init_then_show() -> Result<()> {
    let world = TestWorld::new();

    let json = world.run_json(&["config", "init"])?;
    assertions::assert_badge_level(&json, "success")?;
    assert!(world.config_path().exists());

    let show = world.run(&["config", "show"])?;
    assert!(show.success());
    assert!(show.stdout.contains("histogram_bins = 20"));
    assert!(show.stdout.contains("[[analyzer.buckets]]"));
    Ok(())
}

#[test]
fn test_config_init_keeps_existing_file() -> Result<()> {
    let world = TestWorld::new().with_config("histogram_bins = 7\n");

    let json = world.run_json(&["config", "init"])?;
    assertions::assert_badge_level(&json, "warning")?;
    assert_eq!(json["content"]["written"], false);
    assert_eq!(
        std::fs::read_to_string(world.config_path())?,
        "histogram_bins = 7\n"
    );

    let json = world.run_json(&["config", "init", "--force"])?;
    assertions::assert_badge_level(&json, "success")?;
    assert!(std::fs::read_to_string(world.config_path())?.contains("histogram_bins = 20"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let world = TestWorld::new().with_config("histogram_bins = 0\n");

    let result = world.run(&["analyze"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("histogram_bins must be at least 1"));
    Ok(())
}

#[test]
fn test_config_env_var_is_used_without_flag() -> Result<()> {
    use assert_cmd::Command;

    let world = TestWorld::new();
    let env_config = world.write_file("elsewhere/featsent.toml", "histogram_bins = 4\n");

    #[allow(deprecated)]
    let output = Command::cargo_bin("featsent")?
        .current_dir(world.cwd())
        .env("FEATSENT_CONFIG", &env_config)
        .args(["--format", "json", "config", "show"])
        .output()?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["content"]["config"]["histogram_bins"], 4);
    Ok(())
}
