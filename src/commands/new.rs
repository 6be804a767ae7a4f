use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use miette::Result;
use sdk_scaffold::bootstrap::{pre_commit_hook, SystemRunner, PRE_COMMIT_HOOK_PATH};
use sdk_scaffold::config::{load_user_config, Overrides, Settings};
use sdk_scaffold::name::NameSpec;
use sdk_scaffold::prompt::prompt_name;
use sdk_scaffold::render::EntryKind;
use sdk_scaffold::{execute_scaffold, plan_scaffold, ScaffoldOptions, ScaffoldPlan};

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let name = match &cli.name {
        Some(raw) => NameSpec::parse(raw)?,
        None => prompt_name()?,
    };

    let settings = Settings::resolve(
        Overrides {
            template: cli.template,
            suffix: cli.suffix,
            package_manager: cli.package_manager,
        },
        load_user_config()?,
    );

    let plan = plan_scaffold(ScaffoldOptions {
        name,
        output: cli.output,
        settings,
        skip_bootstrap: cli.skip_bootstrap,
    })?;

    if cli.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let directory_name = plan.target.directory_name.clone();
    let package_manager = plan.package_manager.clone();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let project = match execute_scaffold(plan, &mut SystemRunner, &spinner) {
        Ok(project) => project,
        Err(e) => {
            spinner.abandon_with_message(format!("{} Failed to create project.", style("✗").red()));
            return Err(e.into());
        }
    };
    spinner.finish_and_clear();

    println!(
        "{} Project {} created successfully!",
        style("✓").green().bold(),
        style(&directory_name).cyan()
    );
    println!(
        "  {} files, {} directories",
        project.files_created.len(),
        project.directories_created.len()
    );
    println!("\n{}", style("Next steps:").green());
    println!("  cd {directory_name}");
    println!("  {package_manager} install");
    println!("  {package_manager} dev\n");

    Ok(())
}

fn print_dry_run(plan: &ScaffoldPlan) {
    println!(
        "\n{} Dry run: files that would be generated in {}:",
        style("==>").cyan().bold(),
        style(plan.target.directory_path.display()).cyan()
    );

    for entry in &plan.materialize_plan.entries {
        match &entry.kind {
            EntryKind::Directory => println!(
                "  {} {}/",
                style("mkdir ").green(),
                entry.relative_path.display()
            ),
            EntryKind::File { substitutions, .. } => println!(
                "  {} {}{}",
                style("create").green(),
                entry.relative_path.display(),
                if *substitutions > 0 {
                    style(format!(" ({substitutions} substitutions)")).dim()
                } else {
                    style(String::new())
                }
            ),
        }
    }

    for warning in &plan.materialize_plan.warnings {
        println!(
            "  {} {}",
            style("warning:").yellow().bold(),
            style(warning).yellow()
        );
    }

    if !plan.steps.is_empty() {
        println!("\n{} Commands:", style("==>").cyan().bold());
        for step in &plan.steps {
            println!(
                "  {} {}",
                style(step.command_line()).bold(),
                style(format!("# {}", step.description)).dim()
            );
        }
        println!(
            "\n{} {} would contain:",
            style("==>").cyan().bold(),
            PRE_COMMIT_HOOK_PATH
        );
        for line in pre_commit_hook(&plan.package_manager).lines() {
            println!("  {line}");
        }
    }

    println!(
        "\nSummary: {} files, {} directories",
        plan.materialize_plan.file_count(),
        plan.materialize_plan.directory_count()
    );
    println!(
        "\n{} Dry run: no files written.",
        style("\u{2139}").blue().bold()
    );
}
