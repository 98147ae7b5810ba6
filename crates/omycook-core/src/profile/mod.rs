//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: cooking preferences vocabulary and the `Profile` it builds
//! - `selection`: toggle-based multi-select set (`MultiSelect`)
//! - `wizard`: the five-step setup flow (`ProfileWizard`)

mod model;
mod selection;
mod wizard;

pub use model::{
    Allergy, CookingLevel, CookingTime, KitchenTool, Profile, ProfileDraft, SpicyLevel,
};
pub use selection::MultiSelect;
pub use wizard::{BackTransition, NextTransition, ProfileWizard, WizardStep};
