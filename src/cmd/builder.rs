use std::path::Path;

use crate::cmd::action::Action;
use crate::cmd::platform::Platform;
use crate::error::StepError;

/// Assemble the full hammer invocation string for one step.
///
/// The drivers and project arguments are individually double-quoted so the
/// tokenizer keeps paths with spaces intact. The result is the intermediate
/// single-string form; separator and env-var normalization run afterwards.
pub fn build_command_line(
    install_dir: &str,
    drivers_dir: &str,
    project_dir: &str,
    action: Action,
    server: Option<&str>,
    platform: Platform,
) -> Result<String, StepError> {
    let executable = resolve_executable(install_dir, platform);
    let suffix = action_suffix(action, server)?;
    Ok(format!(
        "{executable} \"--drivers={drivers_dir}\" \"--project={project_dir}\" {suffix}"
    ))
}

/// Resolve the hammer executable under `install_dir`.
///
/// The full installer puts it at `<install>/repl/hammer`; the CLI installer
/// has no `repl` subdirectory, so when the first path does not exist we
/// fall back to `<install>/hammer`. If neither exists the fallback is
/// still returned and the launch reports the failure.
fn resolve_executable(install_dir: &str, platform: Platform) -> String {
    let name = format!("hammer{}", platform.exe_suffix());
    let primary = Path::new(install_dir).join("repl").join(&name);
    if primary.exists() {
        return primary.to_string_lossy().into_owned();
    }
    Path::new(install_dir)
        .join(&name)
        .to_string_lossy()
        .into_owned()
}

fn action_suffix(action: Action, server: Option<&str>) -> Result<String, StepError> {
    if !action.needs_server() {
        return Ok(action.token().to_string());
    }
    match server {
        Some(server) if !server.trim().is_empty() => {
            Ok(format!("{} \"{}\"", action.token(), server))
        }
        _ => Err(StepError::configuration(format!(
            "action {action} requires a server"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "#!/bin/sh\n").unwrap();
    }

    #[test]
    fn uses_repl_layout_when_present() {
        let install = tempfile::tempdir().unwrap();
        touch(&install.path().join("repl/hammer"));

        let line = build_command_line(
            install.path().to_str().unwrap(),
            "/opt/drivers",
            "/home/proj",
            Action::Status,
            Some("db1"),
            Platform::Posix,
        )
        .unwrap();

        let expected_exe = install.path().join("repl/hammer");
        assert_eq!(
            line,
            format!(
                "{} \"--drivers=/opt/drivers\" \"--project=/home/proj\" status \"db1\"",
                expected_exe.display()
            )
        );
    }

    #[test]
    fn falls_back_to_flat_layout() {
        let install = tempfile::tempdir().unwrap();
        touch(&install.path().join("hammer"));

        let line = build_command_line(
            install.path().to_str().unwrap(),
            "/opt/drivers",
            "/home/proj",
            Action::Status,
            Some("db1"),
            Platform::Posix,
        )
        .unwrap();

        let expected_exe = install.path().join("hammer");
        assert!(line.starts_with(&expected_exe.display().to_string()));
    }

    #[test]
    fn fallback_applies_even_when_nothing_exists() {
        let line = build_command_line(
            "/nowhere/datical",
            "/opt/drivers",
            "/home/proj",
            Action::Checkdrivers,
            None,
            Platform::Posix,
        )
        .unwrap();
        assert!(line.starts_with("/nowhere/datical/hammer "));
    }

    #[test]
    fn windows_appends_bat_suffix() {
        let line = build_command_line(
            r"C:\datical",
            r"C:\drivers",
            r"C:\proj",
            Action::Checkdrivers,
            None,
            Platform::Windows,
        )
        .unwrap();
        assert!(line.contains("hammer.bat"));
    }

    #[test]
    fn deploy_ends_with_quoted_server() {
        let line = build_command_line(
            "/opt/datical",
            "/opt/drivers",
            "/home/proj",
            Action::Deploy,
            Some("prod1"),
            Platform::Posix,
        )
        .unwrap();
        assert!(line.ends_with("deploy \"prod1\""));
    }

    #[test]
    fn checkdrivers_never_gets_a_server_argument() {
        let line = build_command_line(
            "/opt/datical",
            "/opt/drivers",
            "/home/proj",
            Action::Checkdrivers,
            Some("prod1"),
            Platform::Posix,
        )
        .unwrap();
        assert!(line.ends_with(" checkdrivers"));
        assert!(!line.contains("prod1"));
    }

    #[test]
    fn server_is_required_when_the_action_needs_one() {
        for server in [None, Some(""), Some("  ")] {
            let err = build_command_line(
                "/opt/datical",
                "/opt/drivers",
                "/home/proj",
                Action::Deploy,
                server,
                Platform::Posix,
            )
            .unwrap_err();
            assert!(matches!(err, StepError::Configuration(_)));
        }
    }
}
