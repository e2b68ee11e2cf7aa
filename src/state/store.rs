//! Shared stage store
//!
//! The store is a plain value. Every change goes through [`reduce`], which
//! takes the old state and an action and returns the next state.

use super::forms::SignupFields;

/// Stage index of the signup step
pub const SIGNUP_STAGE: u32 = 1;

/// State shared between the steps of the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageState {
    /// Index of the visible step
    pub stage: u32,
    /// Last snapshot committed by the signup step
    pub signup: Option<SignupFields>,
}

impl Default for StageState {
    fn default() -> Self {
        Self {
            stage: SIGNUP_STAGE,
            signup: None,
        }
    }
}

/// Updates accepted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageAction {
    /// Set the absolute stage index
    SetStage(u32),
    /// Replace the signup snapshot
    CommitSignupFields(SignupFields),
}

pub fn reduce(state: StageState, action: StageAction) -> StageState {
    match action {
        StageAction::SetStage(stage) => StageState { stage, ..state },
        StageAction::CommitSignupFields(fields) => StageState {
            signup: Some(fields),
            ..state
        },
    }
}

impl StageState {
    /// Apply an action in place
    pub fn dispatch(&mut self, action: StageAction) {
        *self = reduce(std::mem::take(self), action);
    }

    /// Values to pre-fill the signup step with (empty when nothing is committed)
    pub fn signup_seed(&self) -> SignupFields {
        self.signup.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> SignupFields {
        SignupFields {
            name: "St. Mary".to_string(),
            id: "N001".to_string(),
            email: "x@y.com".to_string(),
            password: "Passw0rd12".to_string(),
        }
    }

    #[test]
    fn test_default_starts_on_signup_stage() {
        let state = StageState::default();
        assert_eq!(state.stage, SIGNUP_STAGE);
        assert!(state.signup.is_none());
    }

    #[test]
    fn test_set_stage_is_absolute() {
        let state = reduce(StageState::default(), StageAction::SetStage(5));
        assert_eq!(state.stage, 5);
    }

    #[test]
    fn test_set_stage_keeps_snapshot() {
        let state = StageState {
            stage: 2,
            signup: Some(sample_fields()),
        };
        let next = reduce(state, StageAction::SetStage(1));
        assert_eq!(next.signup, Some(sample_fields()));
    }

    #[test]
    fn test_commit_replaces_snapshot() {
        let mut state = StageState::default();
        state.dispatch(StageAction::CommitSignupFields(SignupFields::default()));
        state.dispatch(StageAction::CommitSignupFields(sample_fields()));
        assert_eq!(state.signup, Some(sample_fields()));
        assert_eq!(state.stage, SIGNUP_STAGE);
    }

    #[test]
    fn test_signup_seed_defaults_to_empty() {
        assert_eq!(StageState::default().signup_seed(), SignupFields::default());
    }

    #[test]
    fn test_signup_seed_returns_committed_values() {
        let mut state = StageState::default();
        state.dispatch(StageAction::CommitSignupFields(sample_fields()));
        assert_eq!(state.signup_seed(), sample_fields());
    }
}
