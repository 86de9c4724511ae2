//! Audit of the numbered account comments (`// 9. token_vault ...`) in an
//! instruction account list. Literal patching cannot keep these in sync on
//! its own, so drift is reported after every run.

use once_cell::sync::Lazy;
use regex::Regex;

static ACCOUNT_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*//\s*(\d+)\.\s+(\S+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingIssue {
    /// 1-based line number in the checked content.
    pub line: usize,
    pub expected: u32,
    pub found: u32,
    pub account: String,
}

/// A run of account comments restarts at `1.`; the first comment of a run
/// may start anywhere, every later one must be its predecessor plus one.
/// A comment numbered `u32::MAX` has no successor and starts a new run.
pub fn check_account_numbering(content: &str) -> Vec<NumberingIssue> {
    let mut issues = Vec::new();
    let mut previous: Option<u32> = None;

    for (idx, line) in content.lines().enumerate() {
        let Some(caps) = ACCOUNT_COMMENT.captures(line) else {
            continue;
        };
        let Ok(found) = caps[1].parse::<u32>() else {
            continue;
        };

        if found != 1 {
            if let Some(expected) = previous.and_then(|prev| prev.checked_add(1)) {
                if found != expected {
                    issues.push(NumberingIssue {
                        line: idx + 1,
                        expected,
                        found,
                        account: caps[2].to_string(),
                    });
                }
            }
        }
        previous = Some(found);
    }

    issues
}
