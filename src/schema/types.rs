//! Closed enumerations shared by every content collection
//!
//! Courses, exam sections, blueprint areas and the difficulty scales. Unknown
//! values are rejected at load time rather than passed through as strings.

use crate::blueprint::{self, WeightRange};
use crate::errors::ContentError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Course
// ============================================================================

/// Certification track a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    /// Certified Financial Planner
    Cfp,
    /// Enrolled Agent (Special Enrollment Examination)
    Ea,
}

impl Course {
    pub fn all() -> &'static [Self] {
        &[Self::Cfp, Self::Ea]
    }

    /// Wire code (`cfp`, `ea`)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cfp => "cfp",
            Self::Ea => "ea",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cfp => "Certified Financial Planner",
            Self::Ea => "Enrolled Agent (SEE)",
        }
    }

    pub fn is_cfp(&self) -> bool {
        matches!(self, Self::Cfp)
    }

    /// Sections examined under this course, in syllabus order
    pub fn sections(&self) -> impl Iterator<Item = ExamSection> + '_ {
        ExamSection::all()
            .iter()
            .copied()
            .filter(move |s| s.course() == *self)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Course {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cfp" => Ok(Self::Cfp),
            "ea" | "see" => Ok(Self::Ea),
            _ => Err(ContentError::invalid("course", s)),
        }
    }
}

// ============================================================================
// Exam sections
// ============================================================================

/// Exam section: a CFP principal knowledge domain or an EA exam part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ExamSection {
    #[serde(rename = "CFP-PCR")]
    CfpProfessionalConduct,
    #[serde(rename = "CFP-GEN")]
    CfpGeneralPrinciples,
    #[serde(rename = "CFP-RISK")]
    CfpRiskManagement,
    #[serde(rename = "CFP-INV")]
    CfpInvestments,
    #[serde(rename = "CFP-TAX")]
    CfpTax,
    #[serde(rename = "CFP-RET")]
    CfpRetirement,
    #[serde(rename = "CFP-EST")]
    CfpEstate,
    #[serde(rename = "CFP-PSY")]
    CfpPsychology,
    #[serde(rename = "SEE1")]
    EaIndividuals,
    #[serde(rename = "SEE2")]
    EaBusinesses,
    #[serde(rename = "SEE3")]
    EaRepresentation,
}

impl ExamSection {
    /// (code, blueprint prefix, display name, course)
    fn metadata(&self) -> (&'static str, &'static str, &'static str, Course) {
        match self {
            Self::CfpProfessionalConduct => {
                ("CFP-PCR", "PCR", "Professional Conduct and Regulation", Course::Cfp)
            }
            Self::CfpGeneralPrinciples => (
                "CFP-GEN",
                "GEN",
                "General Principles of Financial Planning",
                Course::Cfp,
            ),
            Self::CfpRiskManagement => (
                "CFP-RISK",
                "RIS",
                "Risk Management and Insurance Planning",
                Course::Cfp,
            ),
            Self::CfpInvestments => ("CFP-INV", "INV", "Investment Planning", Course::Cfp),
            Self::CfpTax => ("CFP-TAX", "TAX", "Tax Planning", Course::Cfp),
            Self::CfpRetirement => (
                "CFP-RET",
                "RET",
                "Retirement Savings and Income Planning",
                Course::Cfp,
            ),
            Self::CfpEstate => ("CFP-EST", "EST", "Estate Planning", Course::Cfp),
            Self::CfpPsychology => (
                "CFP-PSY",
                "PSY",
                "Psychology of Financial Planning",
                Course::Cfp,
            ),
            Self::EaIndividuals => ("SEE1", "SEE1", "Part 1: Individuals", Course::Ea),
            Self::EaBusinesses => ("SEE2", "SEE2", "Part 2: Businesses", Course::Ea),
            Self::EaRepresentation => (
                "SEE3",
                "SEE3",
                "Part 3: Representation, Practices and Procedures",
                Course::Ea,
            ),
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::CfpProfessionalConduct,
            Self::CfpGeneralPrinciples,
            Self::CfpRiskManagement,
            Self::CfpInvestments,
            Self::CfpTax,
            Self::CfpRetirement,
            Self::CfpEstate,
            Self::CfpPsychology,
            Self::EaIndividuals,
            Self::EaBusinesses,
            Self::EaRepresentation,
        ]
    }

    /// Wire code (`CFP-RISK`, `SEE1`, ...)
    pub fn code(&self) -> &'static str {
        self.metadata().0
    }

    /// Prefix used by this section's blueprint area codes
    pub fn area_prefix(&self) -> &'static str {
        self.metadata().1
    }

    pub fn display_name(&self) -> &'static str {
        self.metadata().2
    }

    pub fn course(&self) -> Course {
        self.metadata().3
    }

    /// Weight of this domain on the CFP exam; EA parts are separate exams
    pub fn exam_weight(&self) -> Option<WeightRange> {
        let percent = match self {
            Self::CfpProfessionalConduct => 8,
            Self::CfpGeneralPrinciples => 15,
            Self::CfpRiskManagement => 11,
            Self::CfpInvestments => 17,
            Self::CfpTax => 14,
            Self::CfpRetirement => 18,
            Self::CfpEstate => 10,
            Self::CfpPsychology => 7,
            Self::EaIndividuals | Self::EaBusinesses | Self::EaRepresentation => return None,
        };
        Some(WeightRange::exact(percent))
    }

    /// Resolve a blueprint-area prefix (`RIS`, `RISK`, `SEE2`, ...)
    pub fn from_area_prefix(prefix: &str) -> Option<Self> {
        let upper = prefix.to_uppercase();
        if upper == "RISK" {
            return Some(Self::CfpRiskManagement);
        }
        Self::all()
            .iter()
            .copied()
            .find(|s| s.area_prefix() == upper)
    }
}

impl fmt::Display for ExamSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExamSection {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        if upper == "CFP-RIS" {
            return Ok(Self::CfpRiskManagement);
        }
        Self::all()
            .iter()
            .copied()
            .find(|section| section.code() == upper)
            .ok_or_else(|| ContentError::UnknownSection(s.to_string()))
    }
}

/// Same rules as `FromStr`: case-insensitive, `CFP-RIS` accepted
impl<'de> Deserialize<'de> for ExamSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Blueprint areas
// ============================================================================

/// Exam-syllabus area, written `PREFIX-N` (e.g. `RIS-2`, `SEE1-3`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlueprintArea {
    pub section: ExamSection,
    pub number: u8,
}

impl BlueprintArea {
    /// Construct without checking the section's table; see [`is_known`](Self::is_known)
    pub const fn new(section: ExamSection, number: u8) -> Self {
        Self { section, number }
    }

    /// Whether the area appears in its section's blueprint table
    pub fn is_known(&self) -> bool {
        blueprint::area_spec(*self).is_some()
    }

    /// Official area name, if known
    pub fn name(&self) -> Option<&'static str> {
        blueprint::area_spec(*self).map(|spec| spec.name)
    }

    /// Weight within the section, if published
    pub fn weight(&self) -> Option<WeightRange> {
        blueprint::area_spec(*self).and_then(|spec| spec.weight)
    }
}

impl fmt::Display for BlueprintArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.section.area_prefix(), self.number)
    }
}

impl FromStr for BlueprintArea {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ContentError::UnknownBlueprintArea(s.to_string());
        let (prefix, number) = s.trim().rsplit_once('-').ok_or_else(unknown)?;
        let section = ExamSection::from_area_prefix(prefix).ok_or_else(unknown)?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        let number: u8 = number.parse().map_err(|_| unknown())?;
        let area = Self::new(section, number);
        if !area.is_known() {
            return Err(unknown());
        }
        Ok(area)
    }
}

impl Serialize for BlueprintArea {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlueprintArea {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Difficulty scales
// ============================================================================

/// Question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl QuestionDifficulty {
    pub fn all() -> &'static [Self] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for QuestionDifficulty {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ContentError::invalid("question difficulty", s)),
        }
    }
}

/// Cognitive skill level targeted by a question (Bloom-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum SkillLevel {
    #[serde(rename = "Remembering and Understanding", alias = "Remembering")]
    RememberingAndUnderstanding,
    #[default]
    Application,
    Analysis,
    Evaluation,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RememberingAndUnderstanding => "Remembering and Understanding",
            Self::Application => "Application",
            Self::Analysis => "Analysis",
            Self::Evaluation => "Evaluation",
        }
    }
}

/// Lesson difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonDifficulty {
    #[serde(alias = "basic")]
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl LessonDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}
