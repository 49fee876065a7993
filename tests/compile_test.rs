use asset_compile::compile::{CompileOptions, Outcome, compile_file};
use asset_compile::config::SourceMaps;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Source tree with one admin-cabinet file and one extension file
fn create_project() -> (TempDir, PathBuf, PathBuf) {
    let root = tempdir().unwrap();

    let core_file = root
        .path()
        .join("Core/sites/admin-cabinet/assets/js/src/forms/Edit.js");
    fs::create_dir_all(core_file.parent().unwrap()).unwrap();
    fs::write(&core_file, "const edit = () => 1;\n").unwrap();

    let extension_file = root
        .path()
        .join("Extensions/MyExt/public/assets/js/src/widget.js");
    fs::create_dir_all(extension_file.parent().unwrap()).unwrap();
    fs::write(&extension_file, "const widget = () => 2;\n").unwrap();

    (root, core_file, extension_file)
}

/// Writes a shell script standing in for Babel
///
/// It records its arguments next to the output it is asked to produce.
#[cfg(unix)]
fn stub_transpiler(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("babel-stub.sh");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$@\" > \"$3/babel-args.txt\"\ncp \"$1\" \"$3/\"\nexit {exit_code}\n"
        ),
    )
    .unwrap();
    let mut permissions = fs::metadata(&script).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&script, permissions).unwrap();
    script
}

fn config_file(dir: &Path, content: &str) -> PathBuf {
    let file = dir.join("config.yaml");
    fs::write(&file, content).unwrap();
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_file_is_skipped() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("other/file.js");

        let options = CompileOptions {
            input: file,
            // A missing config would fail, but unmatched files never load it
            config_path: Some(dir.path().join("missing.yaml")),
            ..CompileOptions::default()
        };

        assert_eq!(compile_file(&options).unwrap(), Outcome::Skipped);
    }

    #[test]
    fn test_dry_run_does_not_touch_the_filesystem() {
        let (root, core_file, _) = create_project();
        let config = config_file(
            root.path(),
            "transpiler:\n  program: tools/babel\n  preset: env\n  source_maps: none\n",
        );

        let options = CompileOptions {
            input: core_file,
            config_path: Some(config),
            dry_run: true,
            ..CompileOptions::default()
        };

        let outcome = compile_file(&options).unwrap();
        let Outcome::DryRun { job } = outcome else {
            panic!("expected a dry run, got {outcome:?}");
        };

        let output_dir = root.path().join("Core/sites/admin-cabinet/assets/js/pbx/forms");
        assert_eq!(job.output_dir, output_dir);
        assert_eq!(job.program, root.path().join("tools/babel"));
        assert_eq!(job.preset, "env");
        assert_eq!(job.source_maps, SourceMaps::None);
        assert!(!output_dir.exists(), "dry run must not create directories");
    }

    #[test]
    fn test_overrides_take_precedence_over_config() {
        let (root, _, extension_file) = create_project();
        let config = config_file(root.path(), "transpiler:\n  preset: env\n");

        let options = CompileOptions {
            input: extension_file,
            config_path: Some(config),
            dry_run: true,
            program_override: Some(PathBuf::from("/opt/babel")),
            preset_override: Some("airbnb-base".to_string()),
        };

        let Outcome::DryRun { job } = compile_file(&options).unwrap() else {
            panic!("expected a dry run");
        };
        assert_eq!(job.program, PathBuf::from("/opt/babel"));
        assert_eq!(job.preset, "airbnb-base");
        assert_eq!(
            job.output_dir,
            root.path().join("Extensions/MyExt/public/assets/js")
        );
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let (root, core_file, _) = create_project();
        let config = config_file(root.path(), "transpiler: [not, a, map]\n");

        let options = CompileOptions {
            input: core_file,
            config_path: Some(config),
            ..CompileOptions::default()
        };

        let error = compile_file(&options).unwrap_err();
        assert!(error.to_string().contains("Failed to parse configuration file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_core_file_is_compiled_into_pbx_tree() {
        let (root, core_file, _) = create_project();
        let stub = stub_transpiler(root.path(), 0);

        let options = CompileOptions {
            input: core_file.clone(),
            config_path: Some(config_file(root.path(), "")),
            program_override: Some(stub),
            ..CompileOptions::default()
        };

        let output_dir = root.path().join("Core/sites/admin-cabinet/assets/js/pbx/forms");
        let outcome = compile_file(&options).unwrap();
        assert_eq!(
            outcome,
            Outcome::Compiled {
                output_file: output_dir.join("Edit.js")
            }
        );
        assert!(output_dir.join("Edit.js").is_file());

        let args = fs::read_to_string(output_dir.join("babel-args.txt")).unwrap();
        assert_eq!(
            args.trim(),
            format!(
                "{} --out-dir {} --source-maps inline --presets airbnb",
                core_file.display(),
                output_dir.display()
            )
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_output_directory_is_reused() {
        let (root, core_file, _) = create_project();
        let stub = stub_transpiler(root.path(), 0);
        let output_dir = root.path().join("Core/sites/admin-cabinet/assets/js/pbx/forms");
        fs::create_dir_all(&output_dir).unwrap();

        let options = CompileOptions {
            input: core_file,
            config_path: Some(config_file(root.path(), "")),
            program_override: Some(stub),
            ..CompileOptions::default()
        };

        compile_file(&options).unwrap();
        compile_file(&options).unwrap();
        assert!(output_dir.join("Edit.js").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_extension_file_is_compiled_next_to_src() {
        let (root, _, extension_file) = create_project();
        let stub = stub_transpiler(root.path(), 0);

        let options = CompileOptions {
            input: extension_file,
            config_path: Some(config_file(root.path(), "")),
            program_override: Some(stub),
            ..CompileOptions::default()
        };

        let output_dir = root.path().join("Extensions/MyExt/public/assets/js");
        assert_eq!(
            compile_file(&options).unwrap(),
            Outcome::Compiled {
                output_file: output_dir.join("widget.js")
            }
        );
        assert!(output_dir.join("widget.js").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_transpiler_failure_is_an_error() {
        let (root, core_file, _) = create_project();
        let stub = stub_transpiler(root.path(), 3);

        let options = CompileOptions {
            input: core_file,
            config_path: Some(config_file(root.path(), "")),
            program_override: Some(stub),
            ..CompileOptions::default()
        };

        let error = compile_file(&options).unwrap_err();
        assert!(
            error.to_string().contains("exited with status 3"),
            "unexpected error: {error}"
        );
    }

    #[test]
    fn test_missing_transpiler_is_an_error() {
        let (root, core_file, _) = create_project();

        let options = CompileOptions {
            input: core_file,
            config_path: Some(config_file(root.path(), "")),
            program_override: Some(root.path().join("node_modules/.bin/babel")),
            ..CompileOptions::default()
        };

        let error = compile_file(&options).unwrap_err();
        assert!(error.to_string().contains("Failed to start"));
    }
}
