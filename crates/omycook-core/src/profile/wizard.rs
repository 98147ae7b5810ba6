//! Five-step profile setup flow.

use serde::{Deserialize, Serialize};

use super::model::{Allergy, CookingLevel, CookingTime, KitchenTool, Profile, ProfileDraft, SpicyLevel};
use crate::error::Result;

/// A page of the setup flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    CookingLevel,
    Allergies,
    SpicyLevel,
    CookingTime,
    KitchenTools,
}

impl WizardStep {
    pub const COUNT: u8 = 5;

    /// 1-based position of the step.
    pub fn number(&self) -> u8 {
        match self {
            Self::CookingLevel => 1,
            Self::Allergies => 2,
            Self::SpicyLevel => 3,
            Self::CookingTime => 4,
            Self::KitchenTools => 5,
        }
    }

    fn following(&self) -> Option<Self> {
        match self {
            Self::CookingLevel => Some(Self::Allergies),
            Self::Allergies => Some(Self::SpicyLevel),
            Self::SpicyLevel => Some(Self::CookingTime),
            Self::CookingTime => Some(Self::KitchenTools),
            Self::KitchenTools => None,
        }
    }

    fn preceding(&self) -> Option<Self> {
        match self {
            Self::CookingLevel => None,
            Self::Allergies => Some(Self::CookingLevel),
            Self::SpicyLevel => Some(Self::Allergies),
            Self::CookingTime => Some(Self::SpicyLevel),
            Self::KitchenTools => Some(Self::CookingTime),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::CookingLevel => "요리 수준을 선택해주세요",
            Self::Allergies => "알레르기 정보",
            Self::SpicyLevel => "맵기 선호도",
            Self::CookingTime => "조리 가능 시간",
            Self::KitchenTools => "보유 주방 도구",
        }
    }
}

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, PartialEq)]
pub enum NextTransition {
    /// Moved to the given step.
    Advanced(WizardStep),
    /// The last step was submitted; the profile is ready for the session.
    Completed(Profile),
    /// The current step's requirement is not met yet.
    Blocked,
    /// The wizard already completed.
    Finished,
}

/// Result of asking the wizard to move back.
#[derive(Debug, Clone, PartialEq)]
pub enum BackTransition {
    /// Moved to the given step.
    Retreated(WizardStep),
    /// Backed out of the first step; the draft is discarded.
    Exited,
    /// The wizard already completed.
    Finished,
}

/// Linear setup flow collecting a [`Profile`].
///
/// Each step has its own gate (see [`ProfileWizard::can_proceed`]). Going
/// back from the first step abandons the draft; there is no partial save.
#[derive(Debug, Clone, Default)]
pub struct ProfileWizard {
    step: WizardStepState,
    draft: ProfileDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardStepState {
    Active(WizardStep),
    Done,
}

impl Default for WizardStepState {
    fn default() -> Self {
        Self::Active(WizardStep::CookingLevel)
    }
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The step on screen, or `None` once completed.
    pub fn step(&self) -> Option<WizardStep> {
        match self.step {
            WizardStepState::Active(step) => Some(step),
            WizardStepState::Done => None,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn is_finished(&self) -> bool {
        self.step == WizardStepState::Done
    }

    /// `(current, total)` for a progress indicator.
    pub fn progress(&self) -> (u8, u8) {
        let current = self.step().map_or(WizardStep::COUNT, |s| s.number());
        (current, WizardStep::COUNT)
    }

    pub fn select_cooking_level(&mut self, level: CookingLevel) {
        self.draft.cooking_level = Some(level);
    }

    pub fn toggle_allergy(&mut self, allergy: Allergy) -> bool {
        self.draft.allergies.toggle(allergy)
    }

    /// Sets the spicy level directly (not a toggle).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `level` is outside 1..=5.
    pub fn set_spicy_level(&mut self, level: u8) -> Result<SpicyLevel> {
        let level = SpicyLevel::new(level)?;
        self.draft.spicy_level = level;
        Ok(level)
    }

    pub fn select_cooking_time(&mut self, time: CookingTime) {
        self.draft.cooking_time = Some(time);
    }

    pub fn toggle_kitchen_tool(&mut self, tool: KitchenTool) -> bool {
        self.draft.kitchen_tools.toggle(tool)
    }

    /// Whether the current step's requirement is satisfied.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStepState::Active(WizardStep::CookingLevel) => self.draft.cooking_level.is_some(),
            WizardStepState::Active(WizardStep::Allergies) => true,
            WizardStepState::Active(WizardStep::SpicyLevel) => true,
            WizardStepState::Active(WizardStep::CookingTime) => self.draft.cooking_time.is_some(),
            WizardStepState::Active(WizardStep::KitchenTools) => {
                !self.draft.kitchen_tools.is_empty()
            }
            WizardStepState::Done => false,
        }
    }

    pub fn next(&mut self) -> NextTransition {
        let WizardStepState::Active(step) = self.step else {
            return NextTransition::Finished;
        };
        if !self.can_proceed() {
            return NextTransition::Blocked;
        }

        match step.following() {
            Some(next) => {
                self.step = WizardStepState::Active(next);
                NextTransition::Advanced(next)
            }
            None => match self.draft.clone().into_profile() {
                Ok(profile) => {
                    self.step = WizardStepState::Done;
                    tracing::info!(
                        cooking_level = profile.cooking_level.label(),
                        tools = profile.kitchen_tools.len(),
                        "Profile setup completed"
                    );
                    NextTransition::Completed(profile)
                }
                Err(e) => {
                    tracing::warn!("Profile draft incomplete at final step: {}", e);
                    NextTransition::Blocked
                }
            },
        }
    }

    pub fn back(&mut self) -> BackTransition {
        let WizardStepState::Active(step) = self.step else {
            return BackTransition::Finished;
        };

        match step.preceding() {
            Some(previous) => {
                self.step = WizardStepState::Active(previous);
                BackTransition::Retreated(previous)
            }
            None => {
                tracing::debug!("Profile setup abandoned at first step");
                self.draft = ProfileDraft::default();
                BackTransition::Exited
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_to(wizard: &mut ProfileWizard, target: WizardStep) {
        while wizard.step() != Some(target) {
            match wizard.next() {
                NextTransition::Advanced(_) => {}
                other => panic!("could not reach {:?}: {:?}", target, other),
            }
        }
    }

    #[test]
    fn test_starts_at_first_step() {
        let wizard = ProfileWizard::new();
        assert_eq!(wizard.step(), Some(WizardStep::CookingLevel));
        assert_eq!(wizard.progress(), (1, 5));
        assert_eq!(wizard.draft().spicy_level.value(), 3);
    }

    #[test]
    fn test_first_step_requires_cooking_level() {
        let mut wizard = ProfileWizard::new();
        assert!(!wizard.can_proceed());
        assert_eq!(wizard.next(), NextTransition::Blocked);
        assert_eq!(wizard.step(), Some(WizardStep::CookingLevel));

        for level in [CookingLevel::Beginner, CookingLevel::Intermediate, CookingLevel::Advanced] {
            let mut wizard = ProfileWizard::new();
            wizard.select_cooking_level(level);
            assert!(wizard.can_proceed());
        }
    }

    #[test]
    fn test_optional_steps_always_proceed() {
        let mut wizard = ProfileWizard::new();
        wizard.select_cooking_level(CookingLevel::Beginner);
        walk_to(&mut wizard, WizardStep::Allergies);
        assert!(wizard.can_proceed());
        walk_to(&mut wizard, WizardStep::SpicyLevel);
        assert!(wizard.can_proceed());
        walk_to(&mut wizard, WizardStep::CookingTime);
        assert!(!wizard.can_proceed());
        assert_eq!(wizard.next(), NextTransition::Blocked);
    }

    #[test]
    fn test_kitchen_tool_step_requires_one_tool() {
        let mut wizard = ProfileWizard::new();
        wizard.select_cooking_level(CookingLevel::Advanced);
        wizard.select_cooking_time(CookingTime::UpTo30);
        walk_to(&mut wizard, WizardStep::KitchenTools);
        assert!(!wizard.can_proceed());

        wizard.toggle_kitchen_tool(KitchenTool::Oven);
        assert!(wizard.can_proceed());
        wizard.toggle_kitchen_tool(KitchenTool::Oven);
        assert!(!wizard.can_proceed());
    }

    #[test]
    fn test_full_traversal_completes_once() {
        let mut wizard = ProfileWizard::new();
        let mut completions = Vec::new();

        wizard.select_cooking_level(CookingLevel::Intermediate);
        assert_eq!(wizard.next(), NextTransition::Advanced(WizardStep::Allergies));

        wizard.toggle_allergy(Allergy::Milk);
        wizard.toggle_allergy(Allergy::Fish);
        assert_eq!(wizard.next(), NextTransition::Advanced(WizardStep::SpicyLevel));

        wizard.set_spicy_level(5).unwrap();
        assert_eq!(wizard.next(), NextTransition::Advanced(WizardStep::CookingTime));

        wizard.select_cooking_time(CookingTime::Over30);
        assert_eq!(wizard.next(), NextTransition::Advanced(WizardStep::KitchenTools));

        wizard.toggle_kitchen_tool(KitchenTool::Induction);
        wizard.toggle_kitchen_tool(KitchenTool::AirFryer);
        if let NextTransition::Completed(profile) = wizard.next() {
            completions.push(profile);
        }
        if let NextTransition::Completed(profile) = wizard.next() {
            completions.push(profile);
        }

        assert_eq!(completions.len(), 1);
        let profile = &completions[0];
        assert_eq!(profile.cooking_level, CookingLevel::Intermediate);
        assert!(profile.allergies.contains(&Allergy::Milk));
        assert!(profile.allergies.contains(&Allergy::Fish));
        assert_eq!(profile.spicy_level.value(), 5);
        assert_eq!(profile.cooking_time, CookingTime::Over30);
        assert_eq!(profile.kitchen_tools.len(), 2);

        assert!(wizard.is_finished());
        assert_eq!(wizard.next(), NextTransition::Finished);
        assert_eq!(wizard.back(), BackTransition::Finished);
    }

    #[test]
    fn test_back_walks_steps_then_exits() {
        let mut wizard = ProfileWizard::new();
        wizard.select_cooking_level(CookingLevel::Beginner);
        walk_to(&mut wizard, WizardStep::SpicyLevel);

        assert_eq!(wizard.back(), BackTransition::Retreated(WizardStep::Allergies));
        assert_eq!(wizard.back(), BackTransition::Retreated(WizardStep::CookingLevel));
        assert_eq!(wizard.back(), BackTransition::Exited);
        assert!(wizard.draft().cooking_level.is_none());
    }

    #[test]
    fn test_spicy_level_is_a_direct_set() {
        let mut wizard = ProfileWizard::new();
        wizard.set_spicy_level(4).unwrap();
        wizard.set_spicy_level(4).unwrap();
        assert_eq!(wizard.draft().spicy_level.value(), 4);

        assert!(wizard.set_spicy_level(9).is_err());
        assert_eq!(wizard.draft().spicy_level.value(), 4);
    }
}
