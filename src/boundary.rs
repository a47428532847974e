use thiserror::Error;

pub const FALLBACK_TITLE: &str = "Section Loading Error";
pub const RETRY_LABEL: &str = "Try Again";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("invalid section data: {0}")]
    InvalidData(String),
    #[error("section failed to render: {0}")]
    Render(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed(SectionError),
}

/// Failure isolation for one section. A failure is caught here and never
/// reaches sibling sections; recovery only happens through [`Boundary::retry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    name: &'static str,
    state: BoundaryState,
    attempts: u32,
}

impl Boundary {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: BoundaryState::Healthy,
            attempts: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    /// Bumped on every retry; the subtree re-renders when this changes.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed(_))
    }

    /// Records the outcome of rendering the wrapped subtree. Returns true when
    /// this observation moved the boundary into the failed state.
    pub fn observe<T>(&mut self, result: &Result<T, SectionError>) -> bool {
        match (result, &self.state) {
            (Err(e), BoundaryState::Healthy) => {
                self.state = BoundaryState::Failed(e.clone());
                true
            }
            (Err(e), BoundaryState::Failed(_)) => {
                self.state = BoundaryState::Failed(e.clone());
                false
            }
            (Ok(_), _) => false,
        }
    }

    /// Resets a failed boundary so only its own subtree renders again.
    /// Does nothing while healthy.
    pub fn retry(&mut self) -> bool {
        if !self.is_failed() {
            return false;
        }
        self.state = BoundaryState::Healthy;
        self.attempts += 1;
        true
    }

    pub fn fallback_message(&self) -> String {
        format!("Unable to load {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken() -> Result<(), SectionError> {
        Err(SectionError::InvalidData("bad date".into()))
    }

    #[test]
    fn test_failure_is_contained() {
        let mut projects = Boundary::new("Projects");
        let mut skills = Boundary::new("Skills");

        assert!(projects.observe(&broken()));
        assert!(!skills.observe(&Ok::<_, SectionError>(())));

        assert!(projects.is_failed());
        assert_eq!(skills.state(), &BoundaryState::Healthy);
        assert_eq!(projects.fallback_message(), "Unable to load Projects");
    }

    #[test]
    fn test_no_automatic_recovery() {
        let mut b = Boundary::new("Skills");
        b.observe(&broken());
        // a later successful render elsewhere does not heal the boundary
        b.observe(&Ok::<_, SectionError>(()));
        assert!(b.is_failed());
        // repeated failures do not count as a new transition
        assert!(!b.observe(&broken()));
    }

    #[test]
    fn test_retry() {
        let mut b = Boundary::new("About");
        assert!(!b.retry());
        assert_eq!(b.attempts(), 0);

        b.observe(&broken());
        assert!(b.retry());
        assert_eq!(b.attempts(), 1);
        assert_eq!(b.state(), &BoundaryState::Healthy);

        // failing again after a retry re-enters the fallback
        assert!(b.observe(&broken()));
        assert!(b.retry());
        assert_eq!(b.attempts(), 2);
    }
}
