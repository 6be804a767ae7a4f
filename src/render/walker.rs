use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};
use crate::render::file::{looks_binary, rename_entry, substitute_placeholder, PLACEHOLDER};

#[derive(Debug)]
pub struct MaterializedProject {
    pub output_dir: PathBuf,
    pub files_created: Vec<PathBuf>,
    pub directories_created: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum EntryKind {
    Directory,
    File {
        /// Content after placeholder substitution.
        content: Vec<u8>,
        /// Number of placeholder occurrences replaced.
        substitutions: usize,
    },
}

/// A directory or file that would be created during materialization.
#[derive(Debug)]
pub struct PlannedEntry {
    /// Path relative to the output directory, after renaming.
    pub relative_path: PathBuf,
    pub kind: EntryKind,
}

/// The template tree read into memory, ready to be written.
#[derive(Debug)]
pub struct MaterializePlan {
    pub entries: Vec<PlannedEntry>,
    pub warnings: Vec<String>,
}

impl MaterializePlan {
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::File { .. }))
            .count()
    }

    pub fn directory_count(&self) -> usize {
        self.entries.len() - self.file_count()
    }
}

/// Walk the template directory and collect substituted files into memory without writing.
///
/// Fails with `PathCollision` when a renamed file lands on the same path as
/// another template entry, so the output always has one entry per source entry.
pub fn plan_materialize(template_dir: &Path, display_name: &str) -> Result<MaterializePlan> {
    if !template_dir.is_dir() {
        return Err(ScaffoldError::TemplateDirectoryMissing {
            path: template_dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    let mut warnings = Vec::new();
    // destination path -> source path that claimed it
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for entry in WalkDir::new(template_dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ScaffoldError::Io {
            context: format!("walking template {}", template_dir.display()),
            source: e.into(),
        })?;
        let src_path = entry.path();
        let rel_path = src_path
            .strip_prefix(template_dir)
            .map_err(|e| ScaffoldError::Io {
                context: format!("resolving {} inside the template", src_path.display()),
                source: std::io::Error::other(e),
            })?;

        if entry.file_type().is_dir() {
            claim(&mut claimed, rel_path, rel_path)?;
            entries.push(PlannedEntry {
                relative_path: rel_path.to_path_buf(),
                kind: EntryKind::Directory,
            });
            continue;
        }

        let raw = std::fs::read(src_path).map_err(|e| ScaffoldError::Io {
            context: format!("reading {}", src_path.display()),
            source: e,
        })?;
        let (content, substitutions) = substitute_placeholder(&raw, display_name);

        if substitutions > 0 && looks_binary(&raw) {
            warnings.push(format!(
                "{} looks binary but contains {PLACEHOLDER}; substituting anyway",
                rel_path.display()
            ));
        }

        let relative_path = match rel_path.file_name() {
            Some(file_name) => rel_path.with_file_name(rename_entry(file_name)),
            None => rel_path.to_path_buf(),
        };
        claim(&mut claimed, &relative_path, rel_path)?;

        entries.push(PlannedEntry {
            relative_path,
            kind: EntryKind::File {
                content,
                substitutions,
            },
        });
    }

    Ok(MaterializePlan { entries, warnings })
}

fn claim(claimed: &mut HashMap<PathBuf, PathBuf>, dest: &Path, source: &Path) -> Result<()> {
    if let Some(first) = claimed.get(dest) {
        return Err(ScaffoldError::PathCollision {
            path: dest.to_path_buf(),
            first: first.clone(),
            second: source.to_path_buf(),
        });
    }
    claimed.insert(dest.to_path_buf(), source.to_path_buf());
    Ok(())
}

/// Write a plan into `output_dir`, which must not exist yet.
///
/// Stops at the first failure and leaves whatever was already written.
pub fn execute_plan(plan: &MaterializePlan, output_dir: &Path) -> Result<MaterializedProject> {
    if let Some(parent) = output_dir.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::Io {
            context: format!("creating directory {}", parent.display()),
            source: e,
        })?;
    }
    std::fs::create_dir(output_dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            ScaffoldError::TargetExists {
                path: output_dir.to_path_buf(),
            }
        } else {
            ScaffoldError::Io {
                context: format!("creating directory {}", output_dir.display()),
                source: e,
            }
        }
    })?;

    let mut files_created = Vec::new();
    let mut directories_created = Vec::new();

    for entry in &plan.entries {
        let dest_path = output_dir.join(&entry.relative_path);
        match &entry.kind {
            EntryKind::Directory => {
                std::fs::create_dir_all(&dest_path).map_err(|e| ScaffoldError::Io {
                    context: format!("creating directory {}", dest_path.display()),
                    source: e,
                })?;
                directories_created.push(entry.relative_path.clone());
            }
            EntryKind::File { content, .. } => {
                if let Some(parent) = dest_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::Io {
                        context: format!("creating directory {}", parent.display()),
                        source: e,
                    })?;
                }
                std::fs::write(&dest_path, content).map_err(|e| ScaffoldError::Io {
                    context: format!("writing {}", dest_path.display()),
                    source: e,
                })?;
                files_created.push(entry.relative_path.clone());
            }
        }
    }

    Ok(MaterializedProject {
        output_dir: output_dir.to_path_buf(),
        files_created,
        directories_created,
    })
}

/// Copy the template tree into `output_dir`, substituting `display_name`.
pub fn materialize(
    template_dir: &Path,
    output_dir: &Path,
    display_name: &str,
) -> Result<MaterializedProject> {
    let plan = plan_materialize(template_dir, display_name)?;
    execute_plan(&plan, output_dir)
}
