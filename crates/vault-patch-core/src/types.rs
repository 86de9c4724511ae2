#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    All,
}

/// What to do when a patch's search text (or anchor) is not in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    Silent,
    Warn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    Replace {
        search: String,
        replace: String,
        occurrence: Occurrence,
    },
    InsertBefore {
        anchor: String,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub label: String,
    pub op: PatchOp,
    pub on_missing: MissingPolicy,
}

impl Patch {
    pub fn replace(label: &str, search: &str, replace: &str, occurrence: Occurrence) -> Self {
        Self {
            label: label.to_string(),
            op: PatchOp::Replace {
                search: search.to_string(),
                replace: replace.to_string(),
                occurrence,
            },
            on_missing: MissingPolicy::Silent,
        }
    }

    pub fn insert_before(label: &str, anchor: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            op: PatchOp::InsertBefore {
                anchor: anchor.to_string(),
                text: text.to_string(),
            },
            on_missing: MissingPolicy::Silent,
        }
    }

    pub fn warn_if_missing(mut self) -> Self {
        self.on_missing = MissingPolicy::Warn;
        self
    }

    /// Text whose presence means this edit has already been made.
    pub fn applied_marker(&self) -> &str {
        match &self.op {
            PatchOp::Replace { replace, .. } => replace,
            PatchOp::InsertBefore { text, .. } => text,
        }
    }

    pub fn search_text(&self) -> &str {
        match &self.op {
            PatchOp::Replace { search, .. } => search,
            PatchOp::InsertBefore { anchor, .. } => anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub title: String,
    pub patches: Vec<Patch>,
}

impl Step {
    pub fn new(title: &str, patches: Vec<Patch>) -> Self {
        Self {
            title: title.to_string(),
            patches,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchSet {
    pub name: String,
    pub steps: Vec<Step>,
    pub summary: String,
}

impl PatchSet {
    pub fn patches(&self) -> impl Iterator<Item = &Patch> {
        self.steps.iter().flat_map(|step| step.patches.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied { replacements: usize },
    AlreadyApplied,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub label: String,
    pub on_missing: MissingPolicy,
    pub outcome: PatchOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub title: String,
    pub patches: Vec<PatchReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub set_name: String,
    pub steps: Vec<StepReport>,
    pub changed: bool,
}

impl RunReport {
    pub fn patch_reports(&self) -> impl Iterator<Item = &PatchReport> {
        self.steps.iter().flat_map(|step| step.patches.iter())
    }

    pub fn missing(&self) -> impl Iterator<Item = &PatchReport> {
        self.patch_reports()
            .filter(|p| p.outcome == PatchOutcome::NotFound)
    }
}
