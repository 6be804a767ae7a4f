use inquire::validator::{ErrorMessage, Validation};

use crate::error::{Result, ScaffoldError};
use crate::name::NameSpec;

const PROMPT_TEXT: &str = "Enter the SDK name:";

/// Ask for the project name until the user enters one that parses.
pub fn prompt_name() -> Result<NameSpec> {
    let answer = inquire::Text::new(PROMPT_TEXT)
        .with_help_message("letters, numbers, dashes, underscores; scope with @org/name")
        .with_validator(|input: &str| Ok(validate_name(input)))
        .prompt()
        .map_err(|_| ScaffoldError::PromptCancelled)?;

    NameSpec::parse(&answer)
}

fn validate_name(input: &str) -> Validation {
    match NameSpec::parse(input) {
        Ok(_) => Validation::Valid,
        Err(ScaffoldError::InvalidNameFormat { reason, .. }) => Validation::Invalid(
            ErrorMessage::Custom(format!(
                "Invalid name ({reason}). Use only letters, numbers, dashes, and underscores."
            )),
        ),
        Err(other) => Validation::Invalid(ErrorMessage::Custom(other.to_string())),
    }
}
