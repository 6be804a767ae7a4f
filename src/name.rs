use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::error::{Result, ScaffoldError};

/// Leading character that marks an organization-scoped name.
pub const NAMESPACE_MARKER: char = '@';

/// Separates the organization from the bare name in a scoped name.
pub const SEPARATOR: char = '/';

const NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// A validated project name, optionally scoped to an organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpec {
    /// The organization including its marker, e.g. `@acme`.
    pub organization: Option<String>,
    pub base_name: String,
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is valid"))
}

/// Whether `input` is a bare name made only of letters, digits, `-` and `_`.
pub fn is_valid_bare_name(input: &str) -> bool {
    name_regex().is_match(input)
}

impl NameSpec {
    /// Parse raw user input such as `my-api` or `@acme/my-api`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| ScaffoldError::InvalidNameFormat {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let Some(scoped) = input.strip_prefix(NAMESPACE_MARKER) else {
            if input.is_empty() {
                return Err(invalid("name is empty"));
            }
            if !is_valid_bare_name(input) {
                return Err(invalid("name contains characters outside [A-Za-z0-9_-]"));
            }
            return Ok(NameSpec {
                organization: None,
                base_name: input.to_string(),
            });
        };

        let Some((org, base)) = scoped.split_once(SEPARATOR) else {
            return Err(invalid("scoped name is missing the '/' separator"));
        };

        if org.is_empty() {
            return Err(invalid("organization is empty"));
        }
        if base.is_empty() {
            return Err(invalid("name after '/' is empty"));
        }
        if base.contains(SEPARATOR) {
            return Err(invalid("scoped name contains more than one '/'"));
        }
        if !is_valid_bare_name(org) {
            return Err(invalid(
                "organization contains characters outside [A-Za-z0-9_-]",
            ));
        }
        if !is_valid_bare_name(base) {
            return Err(invalid("name contains characters outside [A-Za-z0-9_-]"));
        }

        Ok(NameSpec {
            organization: Some(format!("{NAMESPACE_MARKER}{org}")),
            base_name: base.to_string(),
        })
    }

    /// The name substituted into template files: `@org/name` or `name`.
    pub fn display_name(&self) -> String {
        match &self.organization {
            Some(org) => format!("{org}{SEPARATOR}{}", self.base_name),
            None => self.base_name.clone(),
        }
    }

    /// The directory name for the generated project, e.g. `my-api-sdk`.
    pub fn directory_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.base_name)
    }
}

impl fmt::Display for NameSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
