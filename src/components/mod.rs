//! Reusable UI component modules.

pub mod navigation;
pub mod plan_card;
