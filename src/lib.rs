pub mod bootstrap;
pub mod config;
pub mod error;
pub mod name;
pub mod prompt;
pub mod render;
pub mod target;

use std::path::PathBuf;

use console::style;
use indicatif::ProgressBar;

use crate::bootstrap::{bootstrap, bootstrap_steps, CommandRunner, Step};
use crate::config::Settings;
use crate::error::Result;
use crate::name::NameSpec;
use crate::render::{execute_plan, plan_materialize, MaterializePlan, MaterializedProject};
use crate::target::ProjectTarget;

pub struct ScaffoldOptions {
    pub name: NameSpec,
    /// Directory the project directory is created in.
    pub output: PathBuf,
    pub settings: Settings,
    pub skip_bootstrap: bool,
}

/// Everything needed to create a project that has been planned but not yet written.
pub struct ScaffoldPlan {
    pub target: ProjectTarget,
    pub materialize_plan: MaterializePlan,
    /// Empty when bootstrapping is skipped.
    pub steps: Vec<Step>,
    pub package_manager: String,
}

/// Plan a scaffold: resolve the target and read the template in memory.
///
/// Fails with `TargetExists` before anything is read or written if the
/// project directory is already there.
pub fn plan_scaffold(options: ScaffoldOptions) -> Result<ScaffoldPlan> {
    let target = ProjectTarget::resolve(&options.name, &options.output, &options.settings.suffix)?;
    target.ensure_absent()?;

    let materialize_plan = plan_materialize(&options.settings.template_dir, &target.display_name)?;

    let steps = if options.skip_bootstrap {
        Vec::new()
    } else {
        bootstrap_steps(&options.settings.package_manager)
    };

    Ok(ScaffoldPlan {
        target,
        materialize_plan,
        steps,
        package_manager: options.settings.package_manager,
    })
}

/// Execute a previously planned scaffold: write the tree, then run the bootstrap pipeline.
pub fn execute_scaffold(
    plan: ScaffoldPlan,
    runner: &mut dyn CommandRunner,
    progress: &ProgressBar,
) -> Result<MaterializedProject> {
    for warning in &plan.materialize_plan.warnings {
        progress.suspend(|| {
            eprintln!(
                "{} {}",
                style("warning:").yellow().bold(),
                style(warning).yellow()
            )
        });
    }

    progress.set_message(format!("Creating project {}...", plan.target.directory_name));
    let project = execute_plan(&plan.materialize_plan, &plan.target.directory_path)?;

    if !plan.steps.is_empty() {
        bootstrap(
            &plan.steps,
            &project.output_dir,
            &plan.package_manager,
            runner,
            progress,
        )?;
    }

    Ok(project)
}

/// Create a project from the template and bootstrap it.
pub fn scaffold(
    options: ScaffoldOptions,
    runner: &mut dyn CommandRunner,
    progress: &ProgressBar,
) -> Result<MaterializedProject> {
    let plan = plan_scaffold(options)?;
    execute_scaffold(plan, runner, progress)
}
