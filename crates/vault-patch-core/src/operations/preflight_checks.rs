use crate::operations::patch_applicator::{apply_patch, pending_matches};
use crate::types::{Occurrence, PatchOp, PatchOutcome, PatchSet};

/// Simulates `set` against `content` and collects one failure per patch that
/// would silently no-op or whose single-replacement search block is ambiguous.
pub fn run_preflight_checks(content: &str, set: &PatchSet) -> Result<(), Vec<String>> {
    println!("--- Running Preflight Checks ({}) ---", set.name);
    let mut errors = Vec::new();
    let mut simulated = content.to_string();

    for (i, patch) in set.patches().enumerate() {
        let prefix = format!("  - Patch #{} ({}):", i + 1, patch.label);

        if let PatchOp::Replace {
            occurrence: Occurrence::First,
            ..
        } = patch.op
        {
            let pending = pending_matches(&simulated, patch).len();
            if pending > 1 {
                let failure = format!(
                    "{} FAILED (Search block is ambiguous, found {} times)",
                    prefix, pending
                );
                println!("{}", failure);
                errors.push(failure);
                continue;
            }
        }

        let (next, outcome) = apply_patch(&simulated, patch);
        simulated = next;

        match outcome {
            PatchOutcome::Applied { replacements } => {
                println!("{} OK ({} replacement(s))", prefix, replacements)
            }
            PatchOutcome::AlreadyApplied => println!("{} OK (already applied)", prefix),
            PatchOutcome::NotFound => {
                let failure = format!("{} FAILED (Search block not found)", prefix);
                println!("{}", failure);
                errors.push(failure);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
