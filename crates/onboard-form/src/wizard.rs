//! # Wizard Step Bookkeeping
//!
//! Tracks which step of the onboarding wizard is active and how far the user
//! has progressed. Moving forward one step at a time is always allowed;
//! jumping is allowed back to any visited step, or to the step right after
//! the furthest one visited.

use serde::Serialize;

use crate::error::{FormError, FormResult};
use crate::fields::FieldCatalog;

/// Navigation state over an ordered, non-empty list of step names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wizard {
    steps: Vec<String>,
    current: usize,
    furthest: usize,
}

impl Wizard {
    pub fn new(steps: Vec<String>) -> FormResult<Self> {
        if steps.is_empty() {
            return Err(FormError::NoSteps);
        }
        Ok(Self {
            steps,
            current: 0,
            furthest: 0,
        })
    }

    /// Build a wizard from the steps named in a field catalog, in order.
    pub fn from_fields(fields: &FieldCatalog) -> FormResult<Self> {
        Self::new(fields.steps().into_iter().collect())
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn current(&self) -> &str {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Advance one step. Returns false when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        self.furthest = self.furthest.max(self.current);
        tracing::debug!(step = self.current(), "wizard advanced");
        true
    }

    /// Go back one step. Returns false when already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a named step.
    pub fn goto(&mut self, step: &str) -> FormResult<()> {
        let index = self
            .steps
            .iter()
            .position(|s| s == step)
            .ok_or_else(|| FormError::UnknownStep(step.to_string()))?;
        if index > self.furthest + 1 {
            return Err(FormError::StepNotReachable(step.to_string()));
        }
        self.current = index;
        self.furthest = self.furthest.max(index);
        Ok(())
    }

    pub fn is_visited(&self, step: &str) -> bool {
        self.steps
            .iter()
            .position(|s| s == step)
            .is_some_and(|i| i <= self.furthest)
    }

    /// `(1-based current step, total steps)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.steps.len())
    }

    /// Back to the first step, forgetting progress.
    pub fn reset(&mut self) {
        self.current = 0;
        self.furthest = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> Wizard {
        Wizard::new(
            ["Entity Details", "SPOC Details", "Consent Parameters", "Review"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_wizard_rejected() {
        assert!(matches!(Wizard::new(Vec::new()), Err(FormError::NoSteps)));
    }

    #[test]
    fn next_and_prev_stop_at_bounds() {
        let mut w = wizard();
        assert!(!w.prev());
        assert!(w.next());
        assert!(w.next());
        assert!(w.next());
        assert!(w.is_last());
        assert!(!w.next());
        assert_eq!(w.current(), "Review");
        assert_eq!(w.progress(), (4, 4));
        assert!(w.prev());
        assert_eq!(w.current(), "Consent Parameters");
    }

    #[test]
    fn goto_back_and_one_ahead() {
        let mut w = wizard();
        w.next();
        w.goto("Entity Details").unwrap();
        assert!(w.is_visited("SPOC Details"));
        w.goto("Consent Parameters").unwrap();
        assert_eq!(w.current_index(), 2);
    }

    #[test]
    fn goto_cannot_skip_ahead() {
        let mut w = wizard();
        let err = w.goto("Consent Parameters").unwrap_err();
        assert!(matches!(err, FormError::StepNotReachable(_)));
        assert!(!w.is_visited("Consent Parameters"));
    }

    #[test]
    fn goto_unknown_step() {
        let mut w = wizard();
        assert!(matches!(w.goto("Billing"), Err(FormError::UnknownStep(_))));
    }

    #[test]
    fn reset_forgets_progress() {
        let mut w = wizard();
        w.next();
        w.next();
        w.reset();
        assert!(w.is_first());
        assert!(!w.is_visited("SPOC Details"));
    }

    #[test]
    fn built_from_field_catalog() {
        let fields: FieldCatalog = serde_json::from_str(
            r#"[{"id": "a", "step": "One"}, {"id": "b", "step": "Two"}, {"id": "c", "step": "One"}]"#,
        )
        .unwrap();
        let w = Wizard::from_fields(&fields).unwrap();
        assert_eq!(w.steps(), &["One".to_string(), "Two".to_string()]);
    }
}
