#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("Invalid name '{input}': {reason}")]
    #[diagnostic(help(
        "Use only letters, numbers, dashes, and underscores, optionally scoped as @org/name"
    ))]
    InvalidNameFormat { input: String, reason: String },

    #[error("Directory {path} already exists")]
    #[diagnostic(help("Choose another name or remove the existing directory"))]
    TargetExists { path: PathBuf },

    #[error("Template entries {first} and {second} both map to {path}")]
    #[diagnostic(help("Remove one of the two files from the template"))]
    PathCollision {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Template directory not found: {path}")]
    #[diagnostic(help("Pass --template or set `template` in the user config file"))]
    TemplateDirectoryMissing { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} failed: `{command}` {reason}")]
    #[diagnostic(help("Fix the problem above, then finish the remaining steps by hand"))]
    ExternalCommand {
        step: String,
        command: String,
        reason: String,
    },

    #[error("Failed to parse config.toml")]
    #[diagnostic(help("Check the TOML syntax in your sdk-scaffold config file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
