/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const AWS: &str = "hashicorp/aws@5.42.0";

/// Required arguments plus a pinned major version, so no release query runs
fn base_args(reference: &str) -> Vec<String> {
    [
        "-t",
        reference,
        "--cdktf-version",
        "^0.20.0",
        "--constructs-version",
        "^10.3.0",
        "--force-major-version",
        "1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn stdout_json(args: &[String]) -> serde_json::Value {
    let dir = TempDir::new().unwrap();
    let output = cargo_bin_cmd!("cdktf-provider-project")
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .args(base_args(AWS))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("cdktf-provider-project")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--terraform-provider"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("cdktf-provider-project")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("cdktf-provider-project")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("cdktf-provider-project")
            .args(["-f", "markdown"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Non-numeric major version
    #[test]
    fn test_exit_code_invalid_major_version() {
        cargo_bin_cmd!("cdktf-provider-project")
            .args(["--force-major-version", "one"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - no provider reference
    #[test]
    fn test_exit_code_missing_reference() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .args(["--cdktf-version", "^0.20.0", "--constructs-version", "^10.3.0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Missing required setting: terraform_provider",
            ));
    }

    /// Exit code 1: Application error - missing cdktf version
    #[test]
    fn test_exit_code_missing_cdktf_version() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .args(["-t", AWS, "--constructs-version", "^10.3.0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cdktf_version"));
    }

    /// Exit code 1: Application error - reserved `-go` suffix
    #[test]
    fn test_exit_code_go_suffix() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .args(base_args("hashicorp/aws-go@1.0.0"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("may not end with '-go'"))
            .stdout(predicate::str::is_empty());
    }

    /// Exit code 1: Application error - output directory does not exist
    #[test]
    fn test_exit_code_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let mut args = base_args(AWS);
        args.extend(["-o".to_string(), "/nonexistent/dir/provider.json".to_string()]);

        cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .args(args)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to write to file"));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_json_output_identifiers() {
        let value = stdout_json(&base_args(AWS));

        assert_eq!(value["name"], "@cdktf/provider-aws");
        assert_eq!(value["npm"]["name"], "@cdktf/provider-aws");
        assert_eq!(value["python"]["module"], "cdktf_cdktf_provider_aws");
        assert_eq!(value["python"]["distName"], "cdktf-cdktf-provider-aws");
        assert_eq!(value["nuget"]["packageId"], "HashiCorp.Cdktf.Providers.Aws");
        assert_eq!(
            value["maven"]["javaPackage"],
            "com.hashicorp.cdktf.providers.aws"
        );
        assert_eq!(
            value["go"]["moduleName"],
            "github.com/hashicorp/cdktf-provider-aws-go"
        );
        assert_eq!(value["cdktf"]["providerVersion"], "5.42.0");
        assert_eq!(value["majorVersion"], 1);
    }

    #[test]
    fn test_forced_major_version_zero() {
        let mut args = base_args(AWS);
        let position = args.len() - 1;
        args[position] = "0".to_string();

        let value = stdout_json(&args);
        assert_eq!(value["majorVersion"], 0);
    }

    #[test]
    fn test_registry_failure_degrades_to_unconstrained() {
        let dir = TempDir::new().unwrap();
        let output = cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .env("PATH", dir.path())
            .args([
                "-t",
                AWS,
                "--cdktf-version",
                "^0.20.0",
                "--constructs-version",
                "^10.3.0",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["npm"]["name"], "@cdktf/provider-aws");
        assert!(value.get("majorVersion").is_none());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Continuing without a major version constraint"));
    }

    #[test]
    fn test_reserved_java_name() {
        let value = stdout_json(&base_args("hashicorp/null@3.2.1"));
        assert_eq!(
            value["maven"]["javaPackage"],
            "com.hashicorp.cdktf.providers.null_provider"
        );
    }

    #[test]
    fn test_yaml_output_to_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("provider.yml");
        let mut args = base_args("hashicorp/google-beta@5.0.0");
        args.extend([
            "-f".to_string(),
            "yaml".to_string(),
            "-o".to_string(),
            output_path.to_str().unwrap().to_string(),
        ]);

        cargo_bin_cmd!("cdktf-provider-project")
            .current_dir(dir.path())
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Generating YAML configuration"));

        let content = std::fs::read_to_string(&output_path).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&content).unwrap();
        assert_eq!(
            value["python"]["module"].as_str(),
            Some("cdktf_cdktf_provider_google_beta")
        );
        assert_eq!(
            value["repositoryUrl"].as_str(),
            Some("https://github.com/hashicorp/cdktf-provider-googlebeta.git")
        );
    }
}
