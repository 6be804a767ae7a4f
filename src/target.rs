use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::name::NameSpec;

/// Where a project will be created and the name written into its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// Absolute path of the project directory.
    pub directory_path: PathBuf,
    /// Final path component of `directory_path`.
    pub directory_name: String,
    /// Value substituted for the placeholder token.
    pub display_name: String,
}

impl ProjectTarget {
    /// Derive the target for `name` under `parent`.
    ///
    /// A relative `parent` is resolved against the current directory.
    pub fn resolve(name: &NameSpec, parent: &Path, suffix: &str) -> Result<Self> {
        let parent = if parent.is_absolute() {
            parent.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| ScaffoldError::Io {
                    context: "getting current directory".into(),
                    source: e,
                })?
                .join(parent)
        };

        let directory_name = name.directory_name(suffix);
        Ok(ProjectTarget {
            directory_path: parent.join(&directory_name),
            directory_name,
            display_name: name.display_name(),
        })
    }

    /// Fail with `TargetExists` if anything is already at the target path.
    pub fn ensure_absent(&self) -> Result<()> {
        // symlink_metadata so a dangling link still counts as occupied
        if self.directory_path.symlink_metadata().is_ok() {
            return Err(ScaffoldError::TargetExists {
                path: self.directory_path.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_absolute_parent() {
        let dir = tempfile::tempdir().unwrap();
        let name = NameSpec::parse("@acme/payments").unwrap();

        let target = ProjectTarget::resolve(&name, dir.path(), "-sdk").unwrap();

        assert_eq!(target.directory_path, dir.path().join("payments-sdk"));
        assert_eq!(target.directory_name, "payments-sdk");
        assert_eq!(target.display_name, "@acme/payments");
    }

    #[test]
    fn relative_parent_becomes_absolute() {
        let name = NameSpec::parse("foo").unwrap();
        let target = ProjectTarget::resolve(&name, Path::new("out"), "-sdk").unwrap();
        assert!(target.directory_path.is_absolute());
        assert!(target.directory_path.ends_with("out/foo-sdk"));
    }

    #[test]
    fn existing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("foo-sdk")).unwrap();
        let name = NameSpec::parse("foo").unwrap();

        let target = ProjectTarget::resolve(&name, dir.path(), "-sdk").unwrap();
        let err = target.ensure_absent().unwrap_err();

        assert!(matches!(err, ScaffoldError::TargetExists { .. }));
    }

    #[test]
    fn existing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("foo-sdk"), "").unwrap();
        let name = NameSpec::parse("foo").unwrap();

        let target = ProjectTarget::resolve(&name, dir.path(), "-sdk").unwrap();
        assert!(target.ensure_absent().is_err());
    }

    #[test]
    fn missing_directory_passes() {
        let dir = tempfile::tempdir().unwrap();
        let name = NameSpec::parse("foo").unwrap();

        let target = ProjectTarget::resolve(&name, dir.path(), "-sdk").unwrap();
        assert!(target.ensure_absent().is_ok());
    }
}
