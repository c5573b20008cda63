use mcdiag_testing::TestWorld;
use mcdiag_testing::assertions::{assert_diagnostic_count, assert_origins};

#[test]
fn test_analyze_fixture_with_custom_rule() {
    let world = TestWorld::new();
    let log = world
        .copy_sample("program_files_oom.log")
        .expect("Failed to copy sample");

    let added = world
        .run(&["custom", "add", "Lower your render distance", "Java heap space"])
        .expect("Failed to run custom add");
    assert!(added.success(), "stderr: {}", added.stderr());

    let result = world
        .run(&["analyze", log.to_str().unwrap(), "--format", "json"])
        .expect("Failed to run analyze");

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().expect("Parse failed");

    assert_origins(
        &json,
        &["program-files", "out-of-memory", "ram-allocation", "custom"],
    )
    .unwrap();

    let diagnostics = json["content"]["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics[0]["severity"], "critical");
    assert_eq!(diagnostics[0]["heading"], "‼");
    assert!(
        diagnostics[2]["message"]
            .as_str()
            .unwrap()
            .contains("12.288GB")
    );
    assert!(diagnostics[3].get("severity").is_none());
    assert_eq!(diagnostics[3]["heading"], "Lower");
    assert_eq!(diagnostics[3]["body"], "your render distance");
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_analyze_no_custom_skips_user_rules() {
    let world = TestWorld::new();
    let log = world
        .copy_sample("program_files_oom.log")
        .expect("Failed to copy sample");

    world
        .run(&["custom", "add", "Lower your render distance", "Java heap space"])
        .expect("Failed to run custom add");

    let result = world
        .run(&[
            "analyze",
            log.to_str().unwrap(),
            "--no-custom",
            "--format",
            "json",
        ])
        .expect("Failed to run analyze");

    assert!(result.success());
    let json = result.json().expect("Parse failed");
    assert_origins(&json, &["program-files", "out-of-memory", "ram-allocation"]).unwrap();
}

#[test]
fn test_analyze_other_scope_ignores_default_rules() {
    let world = TestWorld::new();
    let log = world.write_log("latest.log", "GPU driver outdated\n");

    world
        .run(&["custom", "add", "Update your drivers", "GPU driver outdated"])
        .expect("Failed to run custom add");

    let default_scope = world
        .run(&["analyze", log.to_str().unwrap(), "--format", "json"])
        .expect("Failed to run analyze");
    assert_diagnostic_count(&default_scope.json().unwrap(), 1).unwrap();

    let other_scope = world
        .run(&[
            "analyze",
            log.to_str().unwrap(),
            "--scope",
            "modpack",
            "--format",
            "json",
        ])
        .expect("Failed to run analyze");
    assert_diagnostic_count(&other_scope.json().unwrap(), 0).unwrap();
}

#[test]
fn test_analyze_clean_log_plain() {
    let world = TestWorld::new();
    let log = world
        .copy_sample("clean_java8.log")
        .expect("Failed to copy sample");

    let result = world
        .run(&["analyze", log.to_str().unwrap()])
        .expect("Failed to run analyze");

    assert!(result.success());
    assert!(
        result.stdout().contains("No known issues found"),
        "stdout: {}",
        result.stdout()
    );
}

#[test]
fn test_analyze_plain_output_shows_heading_and_origin() {
    let world = TestWorld::new();
    let log = world
        .copy_sample("fabric_onedrive_java17.log")
        .expect("Failed to copy sample");

    let result = world
        .run(&["analyze", log.to_str().unwrap()])
        .expect("Failed to run analyze");

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("5 known issues found"), "stdout: {}", stdout);
    assert!(stdout.contains("❗ (onedrive)"));
    assert!(stdout.contains("  You're using Java 17."));
}

#[test]
fn test_analyze_reads_stdin() {
    let world = TestWorld::new();
    let log = "Java is version 11.0.2, using 64-bit architecture.\n";

    for args in [&["analyze", "--format", "json"][..], &["analyze", "-", "--format", "json"][..]] {
        let result = world.run_with_stdin(args, log).expect("Failed to run analyze");

        assert!(result.success(), "stderr: {}", result.stderr());
        let json = result.json().expect("Parse failed");
        assert_eq!(json["content"]["source"], "stdin");
        assert_origins(&json, &["java-version"]).unwrap();
    }
}

#[test]
fn test_analyze_missing_file_fails() {
    let world = TestWorld::new();
    let missing = world.temp_dir().join("nope.log");

    let result = world
        .run(&["analyze", missing.to_str().unwrap()])
        .expect("Failed to run analyze");

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to read log file"));
}

#[test]
fn test_analyze_invalid_config_fails() {
    let world = TestWorld::new();
    let log = world.write_log("latest.log", "nothing here\n");
    world.write_raw_config("scopes = 3");

    let result = world
        .run(&["analyze", log.to_str().unwrap()])
        .expect("Failed to run analyze");

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to load custom rules"));

    // Built-in rules still run when custom rules are skipped.
    let result = world
        .run(&["analyze", log.to_str().unwrap(), "--no-custom"])
        .expect("Failed to run analyze");
    assert!(result.success());
}
