use crate::error::PatchError;
use crate::numbering::{check_account_numbering, NumberingIssue};
use crate::operations::{
    apply_patch_set, read_file_content, run_preflight_checks, write_file_content,
};
use crate::reporter::{print_lines, render_numbering_issues, render_report};
use crate::types::{MissingPolicy, PatchOutcome, PatchSet, RunReport};
use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub dry_run: bool,
    /// Abort before writing if any patch would silently no-op.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub report: RunReport,
    pub written: bool,
    pub numbering_issues: Vec<NumberingIssue>,
}

/// Load, patch, write back and report, in that order.
pub fn run_patch_set(path: &Path, set: &PatchSet, options: RunOptions) -> Result<RunOutcome> {
    println!("--- {}: patching {:?}", set.name, path);
    let content = read_file_content(path)?;

    if options.strict {
        if let Err(failures) = run_preflight_checks(&content, set) {
            println!("\n--- Preflight Checks Failed ---");
            print_lines(&failures);
            println!("\nAborting. No files were modified.");
            return Err(PatchError::Preflight {
                set: set.name.clone(),
                failures,
            }
            .into());
        }
        println!("\n--- Preflight Checks Passed. Proceeding with patching. ---");
    }

    let (patched, report) = apply_patch_set(&content, set);

    for patch in report.patch_reports() {
        if patch.outcome == PatchOutcome::NotFound && patch.on_missing == MissingPolicy::Warn {
            warn!("'{}': insertion point not found in {:?}", patch.label, path);
        }
    }

    let written = report.changed && !options.dry_run;
    if written {
        write_file_content(path, &patched)?;
    } else {
        debug!(
            "Skipping write (changed: {}, dry run: {})",
            report.changed, options.dry_run
        );
    }

    print_lines(&render_report(set, &report, options.dry_run));

    let numbering_issues = check_account_numbering(&patched);
    for issue in &numbering_issues {
        warn!(
            "Account numbering drift at line {}: expected {}, found {}",
            issue.line, issue.expected, issue.found
        );
    }
    print_lines(&render_numbering_issues(&numbering_issues));

    Ok(RunOutcome {
        report,
        written,
        numbering_issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Occurrence, Patch, Step};
    use std::fs;
    use tempfile::tempdir;

    fn set_of(patches: Vec<Patch>) -> PatchSet {
        PatchSet {
            name: "test".to_string(),
            steps: vec![Step::new("only", patches)],
            summary: "done".to_string(),
        }
    }

    #[test]
    fn test_run_writes_patched_content() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("code.ts");
        fs::write(&file_path, "const a = 1;\n").unwrap();

        let set = set_of(vec![Patch::replace(
            "a",
            "const a = 1;",
            "const a = 2;",
            Occurrence::First,
        )]);
        let outcome = run_patch_set(&file_path, &set, RunOptions::default()).unwrap();

        assert!(outcome.written);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "const a = 2;\n");
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("code.ts");
        fs::write(&file_path, "const a = 1;\n").unwrap();

        let set = set_of(vec![Patch::replace(
            "a",
            "const a = 1;",
            "const a = 2;",
            Occurrence::First,
        )]);
        let options = RunOptions {
            dry_run: true,
            strict: false,
        };
        let outcome = run_patch_set(&file_path, &set, options).unwrap();

        assert!(outcome.report.changed);
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "const a = 1;\n");
    }

    #[test]
    fn test_strict_aborts_before_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("code.ts");
        fs::write(&file_path, "const a = 1;\n").unwrap();

        let set = set_of(vec![
            Patch::replace("a", "const a = 1;", "const a = 2;", Occurrence::First),
            Patch::replace("missing", "const z = 0;", "const z = 1;", Occurrence::First),
        ]);
        let options = RunOptions {
            dry_run: false,
            strict: true,
        };
        let err = run_patch_set(&file_path, &set, options).unwrap_err();

        match err.downcast_ref::<PatchError>() {
            Some(PatchError::Preflight { failures, .. }) => assert_eq!(failures.len(), 1),
            None => panic!("Expected preflight error, got {:?}", err),
        }
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "const a = 1;\n");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.ts");

        let set = set_of(Vec::new());
        let err = run_patch_set(&file_path, &set, RunOptions::default()).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read file"));
    }
}
