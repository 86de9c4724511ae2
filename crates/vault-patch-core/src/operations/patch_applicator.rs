use crate::matcher::{contains_block, find_first, uncovered_matches};
use crate::types::{
    Occurrence, Patch, PatchOp, PatchOutcome, PatchReport, PatchSet, RunReport, StepReport,
};
use log::debug;

/// Search matches still waiting to be replaced. Matches that sit inside an
/// existing copy of the replacement are already done.
pub fn pending_matches(content: &str, patch: &Patch) -> Vec<usize> {
    match &patch.op {
        PatchOp::Replace {
            search, replace, ..
        } => uncovered_matches(content, search, replace),
        PatchOp::InsertBefore { anchor, text } => {
            if contains_block(content, text) {
                Vec::new()
            } else {
                find_first(content, anchor).into_iter().collect()
            }
        }
    }
}

pub fn apply_patch(content: &str, patch: &Patch) -> (String, PatchOutcome) {
    let pending = pending_matches(content, patch);
    debug!("'{}': {} pending match(es)", patch.label, pending.len());

    if pending.is_empty() {
        let outcome = if contains_block(content, patch.applied_marker()) {
            PatchOutcome::AlreadyApplied
        } else {
            PatchOutcome::NotFound
        };
        debug!("'{}': {:?}", patch.label, outcome);
        return (content.to_string(), outcome);
    }

    let (match_len, insert, targets) = match &patch.op {
        PatchOp::Replace {
            search,
            replace,
            occurrence,
        } => {
            let targets = match occurrence {
                Occurrence::First => &pending[..1],
                Occurrence::All => &pending[..],
            };
            (search.len(), replace.as_str(), targets)
        }
        PatchOp::InsertBefore { text, .. } => (0, text.as_str(), &pending[..1]),
    };

    let mut patched = String::with_capacity(content.len() + insert.len() * targets.len());
    let mut cursor = 0;
    for &start in targets {
        patched.push_str(&content[cursor..start]);
        patched.push_str(insert);
        cursor = start + match_len;
    }
    patched.push_str(&content[cursor..]);

    (
        patched,
        PatchOutcome::Applied {
            replacements: targets.len(),
        },
    )
}

/// Applies every step in order; each patch sees the output of the one before it.
pub fn apply_patch_set(content: &str, set: &PatchSet) -> (String, RunReport) {
    let mut current = content.to_string();
    let mut steps = Vec::with_capacity(set.steps.len());

    for step in &set.steps {
        let mut patches = Vec::with_capacity(step.patches.len());
        for patch in &step.patches {
            let (next, outcome) = apply_patch(&current, patch);
            current = next;
            patches.push(PatchReport {
                label: patch.label.clone(),
                on_missing: patch.on_missing,
                outcome,
            });
        }
        steps.push(StepReport {
            title: step.title.clone(),
            patches,
        });
    }

    let changed = current != content;
    (
        current,
        RunReport {
            set_name: set.name.clone(),
            steps,
            changed,
        },
    )
}
