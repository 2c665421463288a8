// tests/config_test.rs
use ci_support::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.artifact.version_file, "java-client-version.txt");
    assert_eq!(config.artifact.output_dir, "build");
    assert_eq!(config.artifact.output_file, "java-client-library.jar");
    assert_eq!(config.tag.fallback_env, "GERRIT_BRANCH");
    assert_eq!(config.tag.default_tag, "latest");
    assert_eq!(config.tag.suffix, "-latest");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[artifact]
base_url = "http://localhost:8081/artifactory"
release_repository = "libs-release"

[tag]
fallback_env = "CI_BRANCH"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.artifact.base_url, "http://localhost:8081/artifactory");
    assert_eq!(config.artifact.release_repository, "libs-release");
    assert_eq!(config.artifact.snapshot_repository, "neptune-java-client-snapshot");
    assert_eq!(config.tag.fallback_env, "CI_BRANCH");
    assert_eq!(config.tag.default_tag, "latest");
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[artifact\nbase_url = ").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    assert!(load_config(Some("/nonexistent/ci-support.toml")).is_err());
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[tag]\nimage_name = \"neptune-frontend\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(config.unwrap().tag.image_name, "neptune-frontend");
}
