//! Blueprint area tables
//!
//! The closed set of syllabus areas for every exam section, with the exam
//! weight published for each area. CFP areas follow the CFP Board's 2026
//! principal knowledge domains; EA areas follow the IRS SEE content outline.

use crate::schema::{BlueprintArea, ExamSection};
use serde::Serialize;
use std::fmt;

/// Share of an exam (or exam section) covered by an area, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeightRange {
    pub min: u8,
    pub max: u8,
}

impl WeightRange {
    /// Single published percentage
    pub const fn exact(percent: u8) -> Self {
        Self {
            min: percent,
            max: percent,
        }
    }

    /// Published percentage range
    pub const fn range(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range, used when weights must be compared
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}%", self.min)
        } else {
            write!(f, "{}-{}%", self.min, self.max)
        }
    }
}

/// One row of a section's blueprint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaSpec {
    /// Area number within the section (1-based)
    pub number: u8,
    /// Official area name
    pub name: &'static str,
    /// Weight within the section, when published
    pub weight: Option<WeightRange>,
}

const fn area(number: u8, name: &'static str, weight: Option<WeightRange>) -> AreaSpec {
    AreaSpec {
        number,
        name,
        weight,
    }
}

const CFP_PCR: &[AreaSpec] = &[
    area(1, "CFP Board Code of Ethics and Standards of Conduct", Some(WeightRange::exact(35))),
    area(2, "CFP Board Procedural Rules", Some(WeightRange::exact(15))),
    area(3, "Fiduciary and Regulatory Requirements", Some(WeightRange::exact(30))),
    area(4, "Practice Standards for Financial Planning", Some(WeightRange::exact(20))),
];

const CFP_GEN: &[AreaSpec] = &[
    area(1, "Financial Planning Process", Some(WeightRange::exact(20))),
    area(2, "Financial Statements and Cash Flow", Some(WeightRange::exact(20))),
    area(3, "Time Value of Money", Some(WeightRange::exact(30))),
    area(4, "Education Planning", Some(WeightRange::exact(15))),
    area(5, "Economic Concepts and Debt Management", Some(WeightRange::exact(15))),
];

const CFP_RISK: &[AreaSpec] = &[
    area(1, "Risk Management Principles", Some(WeightRange::exact(10))),
    area(2, "Life Insurance", Some(WeightRange::exact(30))),
    area(3, "Health, Disability, and Long-Term Care", Some(WeightRange::exact(25))),
    area(4, "Property and Liability Insurance", Some(WeightRange::exact(20))),
    area(5, "Annuities and Business Insurance", Some(WeightRange::exact(15))),
];

const CFP_INV: &[AreaSpec] = &[
    area(1, "Investment Theory and Portfolio Management", Some(WeightRange::exact(30))),
    area(2, "Security Analysis", Some(WeightRange::exact(25))),
    area(3, "Fixed Income Analysis", Some(WeightRange::exact(20))),
    area(4, "Derivatives and Alternative Investments", Some(WeightRange::exact(15))),
    area(5, "Portfolio Performance and Tax Efficiency", Some(WeightRange::exact(10))),
];

const CFP_TAX: &[AreaSpec] = &[
    area(1, "Individual Income Tax Fundamentals", Some(WeightRange::exact(35))),
    area(2, "Deductions, Credits, and AMT", Some(WeightRange::exact(25))),
    area(3, "Capital Gains and Investment Taxation", Some(WeightRange::exact(20))),
    area(4, "Charitable and Gift Tax Planning", Some(WeightRange::exact(20))),
];

const CFP_RET: &[AreaSpec] = &[
    area(1, "Retirement Needs Analysis", Some(WeightRange::exact(15))),
    area(2, "Social Security and Medicare", Some(WeightRange::exact(20))),
    area(3, "Employer-Sponsored Retirement Plans", Some(WeightRange::exact(25))),
    area(4, "Individual Retirement Accounts", Some(WeightRange::exact(20))),
    area(5, "Distribution Planning and Strategies", Some(WeightRange::exact(20))),
];

const CFP_EST: &[AreaSpec] = &[
    area(1, "Estate Planning Documents", Some(WeightRange::exact(25))),
    area(2, "Trusts and Wealth Transfer", Some(WeightRange::exact(35))),
    area(3, "Estate, Gift, and GST Taxation", Some(WeightRange::exact(25))),
    area(4, "Charitable Estate Planning", Some(WeightRange::exact(15))),
];

const CFP_PSY: &[AreaSpec] = &[
    area(1, "Client Communication and Counseling", Some(WeightRange::exact(40))),
    area(2, "Behavioral Finance", Some(WeightRange::exact(40))),
    area(3, "Crisis and Special Circumstances", Some(WeightRange::exact(20))),
];

const SEE1: &[AreaSpec] = &[
    area(1, "Preliminary Work and Taxpayer Data", Some(WeightRange::range(15, 20))),
    area(2, "Income and Assets", Some(WeightRange::range(20, 25))),
    area(3, "Deductions and Adjustments", Some(WeightRange::range(20, 25))),
    area(4, "Taxation and Advice", Some(WeightRange::range(15, 20))),
    area(5, "Credits", Some(WeightRange::range(15, 20))),
    area(6, "Specialized Returns", Some(WeightRange::range(10, 15))),
];

const SEE2: &[AreaSpec] = &[
    area(1, "Business Entities and Taxpayer Data", None),
    area(2, "Business Financial Information", None),
    area(3, "Pass-Through Entities", None),
    area(4, "Specialized Returns and Taxpayers", None),
    area(5, "Partnerships", None),
    area(6, "C Corporations", None),
    area(7, "S Corporations", None),
];

const SEE3: &[AreaSpec] = &[
    area(1, "Practices and Procedures", None),
    area(2, "Representation Before the IRS", None),
    area(3, "Specific Areas of Representation", None),
    area(4, "Filing Process", None),
    area(5, "Penalties and Interest", None),
    area(6, "Appeals", None),
    area(7, "Collection Procedures", None),
];

/// Blueprint table for a section
pub fn areas(section: ExamSection) -> &'static [AreaSpec] {
    match section {
        ExamSection::CfpProfessionalConduct => CFP_PCR,
        ExamSection::CfpGeneralPrinciples => CFP_GEN,
        ExamSection::CfpRiskManagement => CFP_RISK,
        ExamSection::CfpInvestments => CFP_INV,
        ExamSection::CfpTax => CFP_TAX,
        ExamSection::CfpRetirement => CFP_RET,
        ExamSection::CfpEstate => CFP_EST,
        ExamSection::CfpPsychology => CFP_PSY,
        ExamSection::EaIndividuals => SEE1,
        ExamSection::EaBusinesses => SEE2,
        ExamSection::EaRepresentation => SEE3,
    }
}

/// Look up the table row for an area; `None` for numbers outside the table
pub fn area_spec(area: BlueprintArea) -> Option<&'static AreaSpec> {
    areas(area.section)
        .iter()
        .find(|spec| spec.number == area.number)
}

/// All known areas of a section as typed values
pub fn known_areas(section: ExamSection) -> impl Iterator<Item = BlueprintArea> {
    areas(section)
        .iter()
        .map(move |spec| BlueprintArea::new(section, spec.number))
}
