mod hook;

use std::path::Path;
use std::process::Command;

use indicatif::ProgressBar;

use crate::error::{Result, ScaffoldError};

pub use hook::{pre_commit_hook, write_pre_commit_hook, PRE_COMMIT_HOOK_PATH};

/// One external command in the bootstrap pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    fn new(description: &str, program: &str, args: &[&str]) -> Self {
        Step {
            description: description.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The command line as a user would type it.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The fixed command sequence run inside a freshly materialized project.
pub fn bootstrap_steps(package_manager: &str) -> Vec<Step> {
    vec![
        Step::new("Installing dependencies", package_manager, &["install"]),
        Step::new(
            "Installing changesets",
            package_manager,
            &["add", "@changesets/cli"],
        ),
        Step::new(
            "Initializing changesets",
            package_manager,
            &["changeset", "init"],
        ),
        Step::new("Initializing git", "git", &["init"]),
        Step::new(
            "Setting up Husky",
            package_manager,
            &["exec", "husky", "init"],
        ),
    ]
}

/// Runs a single step to completion.
pub trait CommandRunner {
    /// Returns `Err` with a short reason when the command could not be
    /// spawned or exited unsuccessfully.
    fn run(&mut self, step: &Step, cwd: &Path) -> std::result::Result<(), String>;
}

/// Spawns the real program with inherited stdio and waits for it.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, step: &Step, cwd: &Path) -> std::result::Result<(), String> {
        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .status()
            .map_err(|e| format!("failed to execute: {e}"))?;

        if !status.success() {
            return Err(format!("exited with status {status}"));
        }
        Ok(())
    }
}

/// Run `steps` in order inside `project_dir`, stopping at the first failure.
///
/// Nothing already done is undone when a later step fails.
pub fn run_steps(
    steps: &[Step],
    project_dir: &Path,
    runner: &mut dyn CommandRunner,
    progress: &ProgressBar,
) -> Result<()> {
    for step in steps {
        progress.set_message(format!("{}...", step.description));
        progress
            .suspend(|| runner.run(step, project_dir))
            .map_err(|reason| ScaffoldError::ExternalCommand {
                step: step.description.clone(),
                command: step.command_line(),
                reason,
            })?;
    }
    Ok(())
}

/// Run the full pipeline: every step, then the pre-commit hook.
pub fn bootstrap(
    steps: &[Step],
    project_dir: &Path,
    package_manager: &str,
    runner: &mut dyn CommandRunner,
    progress: &ProgressBar,
) -> Result<()> {
    run_steps(steps, project_dir, runner, progress)?;
    progress.set_message("Adding pre-commit hook...");
    write_pre_commit_hook(project_dir, package_manager)?;
    Ok(())
}
