pub mod file;
pub mod walker;

pub use file::{rename_entry, substitute_placeholder, DOTFILE_TEMPLATE, PLACEHOLDER};
pub use walker::{
    execute_plan, materialize, plan_materialize, EntryKind, MaterializePlan, MaterializedProject,
    PlannedEntry,
};
