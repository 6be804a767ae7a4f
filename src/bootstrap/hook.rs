use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Location of the hook file relative to the project root.
pub const PRE_COMMIT_HOOK_PATH: &str = ".husky/pre-commit";

/// Shell body of the pre-commit hook for `package_manager`.
pub fn pre_commit_hook(package_manager: &str) -> String {
    format!(
        r#"#!/bin/sh
export NVM_DIR="$HOME/.nvm"
[ -s "$NVM_DIR/nvm.sh" ] && . "$NVM_DIR/nvm.sh"

{package_manager} format
{package_manager} lint:fix
"#
    )
}

/// Write the pre-commit hook with mode 0755, replacing the one husky created.
pub fn write_pre_commit_hook(project_dir: &Path, package_manager: &str) -> Result<PathBuf> {
    let path = project_dir.join(PRE_COMMIT_HOOK_PATH);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::Io {
            context: format!("creating directory {}", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&path, pre_commit_hook(package_manager)).map_err(|e| ScaffoldError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
            ScaffoldError::Io {
                context: format!("setting permissions on {}", path.display()),
                source: e,
            }
        })?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_body_runs_format_and_lint_fix() {
        let body = pre_commit_hook("pnpm");
        assert!(body.starts_with("#!/bin/sh\n"));
        assert!(body.contains("[ -s \"$NVM_DIR/nvm.sh\" ] && . \"$NVM_DIR/nvm.sh\""));
        assert!(body.ends_with("pnpm format\npnpm lint:fix\n"));
    }

    #[test]
    fn hook_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".husky")).unwrap();
        std::fs::write(dir.path().join(PRE_COMMIT_HOOK_PATH), "npm test\n").unwrap();

        let path = write_pre_commit_hook(dir.path(), "pnpm").unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            pre_commit_hook("pnpm")
        );
    }

    #[test]
    fn husky_path_that_is_a_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".husky"), "not a directory").unwrap();

        let err = write_pre_commit_hook(dir.path(), "pnpm").unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".husky")).unwrap(),
            "not a directory"
        );
    }

    #[cfg(unix)]
    #[test]
    fn hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_pre_commit_hook(dir.path(), "pnpm").unwrap();

        let mode = std::fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
