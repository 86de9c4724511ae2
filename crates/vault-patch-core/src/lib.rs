pub mod error;
pub mod matcher;
pub mod numbering;
pub mod operations;
pub mod reporter;
pub mod runner;
pub mod scripts;
pub mod types;

pub use error::PatchError;
pub use numbering::{check_account_numbering, NumberingIssue};
pub use operations::{apply_patch, apply_patch_set, run_preflight_checks};
pub use runner::{run_patch_set, RunOptions, RunOutcome};
pub use types::{
    MissingPolicy, Occurrence, Patch, PatchOp, PatchOutcome, PatchReport, PatchSet, RunReport,
    Step, StepReport,
};
