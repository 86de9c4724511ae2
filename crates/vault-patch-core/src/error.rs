#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Preflight checks failed for '{set}':\n{}", .failures.join("\n"))]
    Preflight { set: String, failures: Vec<String> },
}
