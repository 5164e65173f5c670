//! Execution mode gate: the dry-run short circuit ahead of any workflow.

use std::fmt;

/// Workflow selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Count project rows per managed table. Read-only.
    List,
    /// Delete project rows and drop the project's dedicated database.
    Delete,
    /// Report existence and size of each project's dedicated database.
    Info,
}

impl Mode {
    /// Workflow name as shown to the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Delete => "delete",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gates every workflow invocation behind the dry-run flag.
///
/// Dry-run behavior is uniform across all modes: the caller prints the plan
/// and returns without constructing or touching the store, so no connection
/// is ever opened.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionGate {
    dry_run: bool,
}

impl ExecutionGate {
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// When dry-run, the action description to print instead of running the
    /// workflow: the workflow name plus the project list verbatim.
    #[must_use]
    pub fn plan(&self, mode: Mode, projects: &[String]) -> Option<String> {
        self.dry_run
            .then(|| format!("would run: {mode} [{}]", projects.join(",")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn dry_run_plan_names_workflow_and_projects_verbatim() {
        let gate = ExecutionGate::new(true);
        let plan = gate
            .plan(Mode::Delete, &projects(&["acme", "p50_sfr"]))
            .unwrap();
        assert!(plan.contains("delete"));
        assert!(plan.contains("acme,p50_sfr"));
    }

    #[test]
    fn dry_run_plan_is_uniform_across_modes() {
        let gate = ExecutionGate::new(true);
        for mode in [Mode::List, Mode::Delete, Mode::Info] {
            let plan = gate.plan(mode, &projects(&["acme"])).unwrap();
            assert!(plan.contains(mode.as_str()));
            assert!(plan.contains("acme"));
        }
    }

    #[test]
    fn no_plan_when_not_dry_run() {
        let gate = ExecutionGate::new(false);
        assert!(gate.plan(Mode::Info, &projects(&["acme"])).is_none());
    }
}
