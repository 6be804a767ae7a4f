use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sdk-scaffold",
    about = "Scaffold a new SDK project from a template and bootstrap its tooling",
    version
)]
pub struct Cli {
    /// Project name, bare (`payments`) or scoped (`@acme/payments`); prompted for when omitted
    pub name: Option<String>,

    /// Template directory (default: the bundled template)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory to create the project in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Appended to the name to form the project directory (default: -sdk)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Package manager used to install and initialize tooling (default: pnpm)
    #[arg(long)]
    pub package_manager: Option<String>,

    /// Only copy the template; skip dependency install, git and hooks
    #[arg(long)]
    pub skip_bootstrap: bool,

    /// Show planned files and commands without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
