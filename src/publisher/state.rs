//! Workflow state threaded through the upload sequence.
//!
//! Each step consumes the value produced by its predecessor and returns it
//! augmented, so a field cannot be read before the step that writes it has
//! completed.

/// Prefix of every working branch this crate creates.
pub(crate) const BRANCH_PREFIX: &str = "figma-tokens-update";

/// Output of the branch-resolution steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBase {
    /// The repository's designated primary branch.
    pub default_branch: String,
    /// SHA of the commit the default branch points at; the creation point
    /// anchoring the working branch to the current state of the default
    /// branch.
    pub head_sha: String,
}

/// A freshly named working branch anchored to the resolved base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingBranch {
    pub base: ResolvedBase,
    pub name: String,
}

impl WorkingBranch {
    /// Derive a timestamp-suffixed name so repeated or concurrent uploads
    /// never collide on a branch.
    pub(crate) fn derive(base: ResolvedBase, unix_millis: i64) -> Self {
        Self {
            name: format!("{BRANCH_PREFIX}-{unix_millis}"),
            base,
        }
    }
}

/// Working branch plus the probe result for the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedTarget {
    pub branch: WorkingBranch,
    /// Content SHA of the existing file, or `None` when the upload will
    /// create it.
    pub existing_sha: Option<String>,
}
