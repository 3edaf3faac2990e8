//! EA lesson sets (Parts 1-3)
//!
//! Tax law as of December 31, 2024.

use crate::schema::{BlueprintArea, ExamSection, Lesson, LessonDifficulty, SectionBlock};

fn see1(n: u8) -> BlueprintArea {
    BlueprintArea::new(ExamSection::EaIndividuals, n)
}

/// Part 1: Individuals
pub(super) fn part1() -> Vec<Lesson> {
    vec![
        Lesson::new("SEE1-001", see1(1), 1)
            .with_title("Filing Requirements and Due Dates")
            .with_description(
                "Who must file a federal income tax return, when it is due, and how extensions work",
            )
            .with_duration(45)
            .with_difficulty(LessonDifficulty::Beginner)
            .with_topics(&["Filing requirements", "Due dates", "Extensions"])
            .with_block(SectionBlock::callout(
                "Why This Matters",
                "Filing requirements are the foundation of tax practice and appear frequently on \
                 the SEE.",
            ))
            .with_block(SectionBlock::text(
                "Who Must File",
                "A return is required when gross income exceeds the threshold for the taxpayer's \
                 filing status, age and dependency status. For 2024 a single filer under 65 files \
                 at $14,600; married filing jointly with both spouses under 65 files at $29,200.",
            ))
            .with_block(SectionBlock::table(
                "Special Filing Requirements",
                &["Situation", "Filing Required?", "Why?"],
                &[
                    &["Self-employment income ≥ $400", "YES", "Must pay SE tax"],
                    &["Dependent with unearned income > $1,300", "YES", "Kiddie tax may apply"],
                    &["Advance Premium Tax Credit received", "YES", "Reconcile on Form 8962"],
                    &["Want to claim a refundable credit", "YES", "Must file to receive refund"],
                ],
            ))
            .with_block(SectionBlock::warning(
                "Exam Trap: Extensions",
                "Form 4868 grants an automatic 6-month extension to FILE, not to PAY. Tax is \
                 still due April 15.",
            ))
            .with_block(SectionBlock::summary(
                "Key Takeaways",
                &[
                    "Filing thresholds vary by filing status and age",
                    "Self-employment income ≥ $400 always requires filing",
                    "Form 4868 extends filing to October 15, not payment",
                ],
            )),
        Lesson::new("SEE1-002", see1(1), 2)
            .with_title("Filing Status Determination")
            .with_description("Choose the most advantageous filing status for every household")
            .with_duration(50)
            .with_topics(&["Single", "MFJ", "MFS", "HOH", "QSS"])
            .with_block(SectionBlock::list(
                "The Five Filing Statuses",
                &[
                    "Single",
                    "Married Filing Jointly",
                    "Married Filing Separately",
                    "Head of Household",
                    "Qualifying Surviving Spouse",
                ],
            ))
            .with_block(SectionBlock::example(
                "Head of Household",
                "An unmarried parent who pays more than half the cost of a home shared with a \
                 qualifying child for more than half the year files as Head of Household.",
            ))
            .with_block(SectionBlock::summary(
                "Key Takeaways",
                &[
                    "Marital status is determined on the last day of the year",
                    "HOH requires paying more than half the cost of the home",
                ],
            )),
        Lesson::new("SEE1-003", see1(1), 3)
            .with_title("Dependency Requirements")
            .with_description(
                "Apply the qualifying child and qualifying relative tests to claim dependents",
            )
            .with_duration(55)
            .with_topics(&["Qualifying child", "Qualifying relative", "Tie-breaker rules"])
            .with_block(SectionBlock::table(
                "Qualifying Child vs. Qualifying Relative",
                &["Test", "Qualifying Child", "Qualifying Relative"],
                &[
                    &["Age", "Under 19, or under 24 if a student", "Any age"],
                    &["Residency", "More than half the year", "All year, or listed relative"],
                    &["Support", "Child provides ≤ half", "Taxpayer provides > half"],
                    &["Gross income", "No limit", "Below the exemption amount"],
                ],
            ))
            .with_block(SectionBlock::summary(
                "Key Takeaways",
                &[
                    "The support test differs between the two dependent types",
                    "Tie-breaker rules decide who claims a child shared by two taxpayers",
                ],
            )),
    ]
}

/// Part 2: Businesses
pub(super) fn part2() -> Vec<Lesson> {
    vec![Lesson::new(
        "SEE2-001",
        BlueprintArea::new(ExamSection::EaBusinesses, 1),
        1,
    )
    .with_title("Entity Classification and Selection")
    .with_description("Business entity types and their tax implications")
    .with_duration(55)
    .with_topics(&["Sole proprietorship", "Partnership", "S corp", "C corp", "LLC"])
    .with_block(SectionBlock::table(
        "Entity Comparison Chart",
        &["Feature", "Sole Prop", "Partnership", "S Corp", "C Corp"],
        &[
            &["Owners", "1", "2+", "1-100", "Unlimited"],
            &["Pass-through taxation", "Yes", "Yes", "Yes", "No (double tax)"],
            &["Tax form", "Sch C", "Form 1065", "Form 1120-S", "Form 1120"],
        ],
    ))
    .with_block(SectionBlock::text(
        "S Corporation Eligibility",
        "A domestic corporation with at most 100 shareholders, one class of stock, and only \
         individual, estate or qualifying-trust shareholders may elect S status on Form 2553.",
    ))
    .with_block(SectionBlock::summary(
        "Key Takeaways",
        &[
            "Partnerships and S corporations pass income through to owners",
            "C corporations pay a flat 21% entity-level tax",
        ],
    ))]
}

/// Part 3: Representation, Practices and Procedures
pub(super) fn part3() -> Vec<Lesson> {
    vec![Lesson::new(
        "SEE3-001",
        BlueprintArea::new(ExamSection::EaRepresentation, 1),
        1,
    )
    .with_title("Who May Practice Before the IRS")
    .with_description("Who is authorized to represent taxpayers before the IRS")
    .with_duration(45)
    .with_difficulty(LessonDifficulty::Beginner)
    .with_topics(&["Enrolled agents", "CPAs", "Attorneys", "Limited practice"])
    .with_block(SectionBlock::key_points(
        "Unlimited Practice Rights",
        &["Enrolled agents", "Certified public accountants", "Attorneys"],
    ))
    .with_block(SectionBlock::callout(
        "Circular 230",
        "Practice before the IRS is governed by Treasury Department Circular 230.",
    ))
    .with_block(SectionBlock::summary(
        "Key Takeaways",
        &[
            "EAs, CPAs and attorneys have unlimited representation rights",
            "Unenrolled preparers have limited practice rights only",
        ],
    ))]
}
