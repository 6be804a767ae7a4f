pub mod user;

use std::path::PathBuf;

pub use user::{config_path, load_user_config, load_user_config_from, UserConfig};

pub const DEFAULT_SUFFIX: &str = "-sdk";
pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

const TEMPLATE_DIR_NAME: &str = "template";

/// Values given on the command line; `None` falls through to the user config.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub template: Option<PathBuf>,
    pub suffix: Option<String>,
    pub package_manager: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub template_dir: PathBuf,
    pub suffix: String,
    pub package_manager: String,
}

impl Settings {
    /// Merge command-line overrides over the user config over built-in defaults.
    pub fn resolve(overrides: Overrides, user: Option<UserConfig>) -> Settings {
        let user = user.unwrap_or_default();
        Settings {
            template_dir: resolve_template_dir(overrides.template, user.template),
            suffix: overrides
                .suffix
                .or(user.suffix)
                .unwrap_or_else(|| DEFAULT_SUFFIX.to_string()),
            package_manager: overrides
                .package_manager
                .or(user.package_manager)
                .unwrap_or_else(|| DEFAULT_PACKAGE_MANAGER.to_string()),
        }
    }
}

/// Pick the template root: the command-line path, then the config path,
/// then [`bundled_template_dir`].
pub fn resolve_template_dir(flag: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    flag.or(configured).unwrap_or_else(bundled_template_dir)
}

/// The template shipped with the tool.
///
/// Prefers a `template/` directory next to the installed executable, then
/// the one in the crate source tree. The source-tree path is fixed at compile
/// time, so an installed binary only finds it while the build checkout still
/// exists; installs should place `template/` beside the executable.
pub fn bundled_template_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR_NAME)));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME),
    }
}
