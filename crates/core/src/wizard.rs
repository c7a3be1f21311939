//! Course wizard steps and the transitions between them.
//!
//! The wizard is a two-step flow (basic info, then curriculum) ending in a
//! terminal submitted state. Exactly three transitions exist; everything
//! else is a conflict. There is no partial-save or autosave state.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The steps of the course creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Curriculum,
    Submitted,
}

/// Total number of steps, including the terminal one.
pub const TOTAL_STEPS: u8 = 3;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Curriculum),
            3 => Ok(Self::Submitted),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between 1 and {TOTAL_STEPS}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Curriculum => 2,
            Self::Submitted => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info",
            Self::Curriculum => "curriculum",
            Self::Submitted => "submitted",
        }
    }

    /// Step caption shown in the wizard's progress header.
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "기본 정보",
            Self::Curriculum => "커리큘럼",
            Self::Submitted => "등록 완료",
        }
    }

    /// Whether the wizard has reached its terminal state.
    pub fn is_terminal(self) -> bool {
        self == Self::Submitted
    }

    /// Apply a wizard action, yielding the next step.
    ///
    /// The three legal transitions are save (basic info to curriculum),
    /// back (curriculum to basic info, non-destructive) and register
    /// (curriculum to submitted, terminal). Anything else is a
    /// [`CoreError::Conflict`].
    pub fn transition(self, action: WizardAction) -> Result<Self, CoreError> {
        match (self, action) {
            (Self::BasicInfo, WizardAction::Save) => Ok(Self::Curriculum),
            (Self::Curriculum, WizardAction::Back) => Ok(Self::BasicInfo),
            (Self::Curriculum, WizardAction::Register) => Ok(Self::Submitted),
            (step, action) => Err(CoreError::Conflict(format!(
                "cannot {} from the {} step",
                action.as_str(),
                step.as_str()
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The author actions that move the wizard between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Save,
    Back,
    Register,
}

impl WizardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Back => "back",
            Self::Register => "register",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_number_roundtrip() {
        for n in 1..=TOTAL_STEPS {
            assert_eq!(WizardStep::from_number(n).unwrap().to_number(), n);
        }
    }

    #[test]
    fn step_from_number_invalid() {
        assert!(WizardStep::from_number(0).is_err());
        assert!(WizardStep::from_number(4).is_err());
    }

    #[test]
    fn labels_are_nonempty() {
        for n in 1..=TOTAL_STEPS {
            assert!(!WizardStep::from_number(n).unwrap().label().is_empty());
        }
    }

    #[test]
    fn save_moves_to_curriculum() {
        assert_eq!(
            WizardStep::BasicInfo.transition(WizardAction::Save).unwrap(),
            WizardStep::Curriculum
        );
    }

    #[test]
    fn back_returns_to_basic_info() {
        assert_eq!(
            WizardStep::Curriculum.transition(WizardAction::Back).unwrap(),
            WizardStep::BasicInfo
        );
    }

    #[test]
    fn register_reaches_the_terminal_step() {
        let step = WizardStep::Curriculum
            .transition(WizardAction::Register)
            .unwrap();
        assert_eq!(step, WizardStep::Submitted);
        assert!(step.is_terminal());
    }

    #[test]
    fn no_other_transitions_exist() {
        let illegal = [
            (WizardStep::BasicInfo, WizardAction::Back),
            (WizardStep::BasicInfo, WizardAction::Register),
            (WizardStep::Curriculum, WizardAction::Save),
            (WizardStep::Submitted, WizardAction::Save),
            (WizardStep::Submitted, WizardAction::Back),
            (WizardStep::Submitted, WizardAction::Register),
        ];
        for (step, action) in illegal {
            assert!(
                matches!(step.transition(action), Err(CoreError::Conflict(_))),
                "{step:?} + {action:?} must conflict"
            );
        }
    }
}
