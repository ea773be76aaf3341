//! Structural rules: names, labels, focus order, input purpose, link purpose.

pub mod accessible_label;
pub mod alt_text;
pub mod input_purpose;
pub mod link_purpose;
pub mod tab_order;

pub use accessible_label::AccessibleLabelRule;
pub use alt_text::AltTextRule;
pub use input_purpose::InputPurposeRule;
pub use link_purpose::LinkPurposeRule;
pub use tab_order::TabOrderRule;
