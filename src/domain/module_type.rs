// src/domain/module_type.rs
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};

/// The closed set of content verticals. Every vertical shares the same
/// `ModuleEntry` schema; adding a vertical means adding a variant here and
/// nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    StudyIndia,
    StudyAbroad,
    MbbsIndia,
    MbbsAbroad,
    PlacementIndia,
    PlacementAbroad,
    Loans,
    Scholarships,
    TestPrep,
    Immigration,
    Internships,
    OnlineCourses,
}

impl ModuleType {
    pub const ALL: [ModuleType; 12] = [
        ModuleType::StudyIndia,
        ModuleType::StudyAbroad,
        ModuleType::MbbsIndia,
        ModuleType::MbbsAbroad,
        ModuleType::PlacementIndia,
        ModuleType::PlacementAbroad,
        ModuleType::Loans,
        ModuleType::Scholarships,
        ModuleType::TestPrep,
        ModuleType::Immigration,
        ModuleType::Internships,
        ModuleType::OnlineCourses,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleType::StudyIndia => "study-india",
            ModuleType::StudyAbroad => "study-abroad",
            ModuleType::MbbsIndia => "mbbs-india",
            ModuleType::MbbsAbroad => "mbbs-abroad",
            ModuleType::PlacementIndia => "placement-india",
            ModuleType::PlacementAbroad => "placement-abroad",
            ModuleType::Loans => "loans",
            ModuleType::Scholarships => "scholarships",
            ModuleType::TestPrep => "test-prep",
            ModuleType::Immigration => "immigration",
            ModuleType::Internships => "internships",
            ModuleType::OnlineCourses => "online-courses",
        }
    }
}

impl FromStr for ModuleType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|module_type| module_type.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unknown module type: {value}")))
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_variant() {
        for module_type in ModuleType::ALL {
            assert_eq!(module_type.as_str().parse::<ModuleType>().unwrap(), module_type);
        }
    }

    #[test]
    fn rejects_unknown_vertical() {
        assert!("study_india".parse::<ModuleType>().is_err());
        assert!("crypto".parse::<ModuleType>().is_err());
        assert!("".parse::<ModuleType>().is_err());
    }
}
