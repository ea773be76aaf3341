//! WCAG success criteria referenced by Lumen rules.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::model::Surface;

/// Conformance level of a success criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::AA => write!(f, "AA"),
            Self::AAA => write!(f, "AAA"),
        }
    }
}

/// WCAG release a criterion first appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagVersion {
    V2_0,
    V2_1,
    V2_2,
}

impl fmt::Display for WcagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2_0 => write!(f, "2.0"),
            Self::V2_1 => write!(f, "2.1"),
            Self::V2_2 => write!(f, "2.2"),
        }
    }
}

/// Canonical success-criterion tag. Serialized as its number (`"1.4.3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WcagCriterion {
    NonTextContent,
    InfoAndRelationships,
    IdentifyInputPurpose,
    UseOfColor,
    ContrastMinimum,
    ResizeText,
    ImagesOfText,
    Reflow,
    NonTextContrast,
    FocusOrder,
    LinkPurposeInContext,
    FocusNotObscuredMinimum,
    TargetSizeMinimum,
    LabelsOrInstructions,
    NameRoleValue,
}

impl WcagCriterion {
    pub fn all() -> &'static [WcagCriterion] {
        &[
            Self::NonTextContent, Self::InfoAndRelationships, Self::IdentifyInputPurpose,
            Self::UseOfColor, Self::ContrastMinimum, Self::ResizeText, Self::ImagesOfText,
            Self::Reflow, Self::NonTextContrast, Self::FocusOrder, Self::LinkPurposeInContext,
            Self::FocusNotObscuredMinimum, Self::TargetSizeMinimum, Self::LabelsOrInstructions,
            Self::NameRoleValue,
        ]
    }

    pub fn number(&self) -> &'static str {
        match self {
            Self::NonTextContent => "1.1.1",
            Self::InfoAndRelationships => "1.3.1",
            Self::IdentifyInputPurpose => "1.3.5",
            Self::UseOfColor => "1.4.1",
            Self::ContrastMinimum => "1.4.3",
            Self::ResizeText => "1.4.4",
            Self::ImagesOfText => "1.4.5",
            Self::Reflow => "1.4.10",
            Self::NonTextContrast => "1.4.11",
            Self::FocusOrder => "2.4.3",
            Self::LinkPurposeInContext => "2.4.4",
            Self::FocusNotObscuredMinimum => "2.4.11",
            Self::TargetSizeMinimum => "2.5.8",
            Self::LabelsOrInstructions => "3.3.2",
            Self::NameRoleValue => "4.1.2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NonTextContent => "Non-text Content",
            Self::InfoAndRelationships => "Info and Relationships",
            Self::IdentifyInputPurpose => "Identify Input Purpose",
            Self::UseOfColor => "Use of Color",
            Self::ContrastMinimum => "Contrast (Minimum)",
            Self::ResizeText => "Resize Text",
            Self::ImagesOfText => "Images of Text",
            Self::Reflow => "Reflow",
            Self::NonTextContrast => "Non-text Contrast",
            Self::FocusOrder => "Focus Order",
            Self::LinkPurposeInContext => "Link Purpose (In Context)",
            Self::FocusNotObscuredMinimum => "Focus Not Obscured (Minimum)",
            Self::TargetSizeMinimum => "Target Size (Minimum)",
            Self::LabelsOrInstructions => "Labels or Instructions",
            Self::NameRoleValue => "Name, Role, Value",
        }
    }

    pub fn level(&self) -> WcagLevel {
        match self {
            Self::NonTextContent
            | Self::InfoAndRelationships
            | Self::UseOfColor
            | Self::FocusOrder
            | Self::LinkPurposeInContext
            | Self::LabelsOrInstructions
            | Self::NameRoleValue => WcagLevel::A,
            Self::IdentifyInputPurpose
            | Self::ContrastMinimum
            | Self::ResizeText
            | Self::ImagesOfText
            | Self::Reflow
            | Self::NonTextContrast
            | Self::FocusNotObscuredMinimum
            | Self::TargetSizeMinimum => WcagLevel::AA,
        }
    }

    pub fn introduced_in(&self) -> WcagVersion {
        match self {
            Self::IdentifyInputPurpose | Self::Reflow | Self::NonTextContrast => WcagVersion::V2_1,
            Self::FocusNotObscuredMinimum | Self::TargetSizeMinimum => WcagVersion::V2_2,
            _ => WcagVersion::V2_0,
        }
    }

    /// Human-readable reference, e.g. `WCAG 2.1 SC 1.4.3 Contrast (Minimum) (Level AA)`.
    ///
    /// Criteria carried over from 2.0 are cited against 2.1, the baseline
    /// Section 508 refreshes point at.
    pub fn reference(&self) -> String {
        let version = match self.introduced_in() {
            WcagVersion::V2_2 => WcagVersion::V2_2,
            _ => WcagVersion::V2_1,
        };
        format!(
            "WCAG {} SC {} {} (Level {})",
            version,
            self.number(),
            self.title(),
            self.level()
        )
    }

    /// Section 508 provision incorporating this criterion for `surface`.
    /// Portal pages are web content (E205.4); app surfaces are software (E207.2).
    pub fn section508_reference(&self, surface: Surface) -> String {
        let provision = match surface {
            Surface::PortalPage => "E205.4",
            Surface::CanvasApp | Surface::ModelDrivenApp => "E207.2",
        };
        format!("Section 508 {} (WCAG {})", provision, self.number())
    }

    pub fn from_number(number: &str) -> Option<Self> {
        let number = number.trim();
        Self::all().iter().copied().find(|c| c.number() == number)
    }
}

impl fmt::Display for WcagCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.title())
    }
}

impl Serialize for WcagCriterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.number())
    }
}

impl<'de> Deserialize<'de> for WcagCriterion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_number(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown WCAG criterion: {raw}")))
    }
}
