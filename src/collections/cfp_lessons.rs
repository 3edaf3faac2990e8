//! CFP Risk Management lessons (Domain 3)

use crate::schema::{BlueprintArea, ExamSection, Lesson, SectionBlock};

pub(super) fn risk_management() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "CFP-RIS-L001",
            BlueprintArea::new(ExamSection::CfpRiskManagement, 1),
            1,
        )
        .with_title("Risk Management Process")
        .with_description("Identify, measure and treat personal risk exposures")
        .with_duration(25)
        .with_topics(&["Risk identification", "Risk treatment", "Insurable risk"])
        .with_block(SectionBlock::table(
            "Risk Treatment Matrix",
            &["", "Low Frequency", "High Frequency"],
            &[
                &["High Severity", "Transfer", "Avoid"],
                &["Low Severity", "Retain", "Reduce"],
            ],
        ))
        .with_block(SectionBlock::summary(
            "Key Takeaways",
            &[
                "Transfer catastrophic but unlikely losses",
                "Retain small, predictable losses",
            ],
        )),
        Lesson::new(
            "CFP-RIS-L004",
            BlueprintArea::new(ExamSection::CfpRiskManagement, 2),
            4,
        )
        .with_title("Life Insurance Needs Analysis")
        .with_description(
            "Calculate life insurance needs using multiple methods and integrate coverage into the plan",
        )
        .with_duration(30)
        .with_topics(&[
            "Human life value",
            "Needs approach",
            "Capital retention",
        ])
        .with_block(SectionBlock::text(
            "Human Life Value Approach",
            "HLV values future earning potential: annual earnings net of taxes and \
             self-consumption, discounted over the remaining working years.",
        ))
        .with_block(SectionBlock::table(
            "Human Life Value Example",
            &["Factor", "Value"],
            &[
                &["Annual income", "$100,000"],
                &["Less personal consumption", "-$35,000"],
                &["Net for family", "$65,000"],
                &["Years to retirement", "25"],
                &["Discount rate", "5%"],
                &["PV annuity factor", "14.094"],
                &["Human life value", "$916,110"],
            ],
        ))
        .with_block(SectionBlock::callout(
            "Needs Approach",
            "The needs approach matches coverage to specific obligations and is the preferred \
             method for exam questions.",
        ))
        .with_block(SectionBlock::list(
            "Identify Needs",
            &[
                "Immediate needs: final expenses, emergency fund, debt payoff, education fund",
                "Ongoing needs: family living expenses, child care, spousal retirement funding",
            ],
        ))
        .with_block(SectionBlock::summary(
            "Key Takeaways",
            &[
                "HLV measures lost earnings; the needs approach measures obligations",
                "Non-working spouses need coverage for replacement cost of services",
            ],
        )),
    ]
}
