use crate::numbering::NumberingIssue;
use crate::types::{MissingPolicy, PatchOutcome, PatchSet, RunReport};

pub fn render_report(set: &PatchSet, report: &RunReport, dry_run: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, step) in report.steps.iter().enumerate() {
        lines.push(format!("{}. {}...", i + 1, step.title));
        for patch in step
            .patches
            .iter()
            .filter(|p| p.on_missing == MissingPolicy::Warn)
        {
            lines.push(match patch.outcome {
                PatchOutcome::Applied { .. } => format!("   ✅ Added {}", patch.label),
                PatchOutcome::AlreadyApplied => format!("   ✅ {} already present", patch.label),
                PatchOutcome::NotFound => {
                    format!("   ⚠️  Could not find insertion point for {}", patch.label)
                }
            });
        }
    }

    let (mut applied, mut present, mut missing) = (0, 0, 0);
    for patch in report.patch_reports() {
        match patch.outcome {
            PatchOutcome::Applied { .. } => applied += 1,
            PatchOutcome::AlreadyApplied => present += 1,
            PatchOutcome::NotFound => missing += 1,
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Patches: {} applied, {} already present, {} not found",
        applied, present, missing
    ));

    if !report.changed {
        lines.push("No changes: file left untouched.".to_string());
    } else if dry_run {
        lines.push(format!("[DRY RUN] {} (no files were written)", set.summary));
    } else {
        lines.push(set.summary.clone());
    }

    lines
}

pub fn render_numbering_issues(issues: &[NumberingIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| {
            format!(
                "⚠️  Line {}: account comment '{}' is numbered {}, expected {}",
                issue.line, issue.account, issue.found, issue.expected
            )
        })
        .collect()
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
