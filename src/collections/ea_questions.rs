//! EA Special Enrollment Examination question banks (Parts 1-3)

use crate::schema::{BlueprintArea, ExamSection, Question, QuestionDifficulty, SkillLevel};

fn see1(n: u8) -> BlueprintArea {
    BlueprintArea::new(ExamSection::EaIndividuals, n)
}

fn see2(n: u8) -> BlueprintArea {
    BlueprintArea::new(ExamSection::EaBusinesses, n)
}

fn see3(n: u8) -> BlueprintArea {
    BlueprintArea::new(ExamSection::EaRepresentation, n)
}

/// Part 1: Individuals
pub(super) fn part1() -> Vec<Question> {
    vec![
        Question::new("see1-001", see1(1))
            .with_topic("Filing Requirements")
            .with_subtopic("Who Must File")
            .with_difficulty(QuestionDifficulty::Easy)
            .with_skill(SkillLevel::RememberingAndUnderstanding)
            .with_prompt(
                "For 2024, a single taxpayer under age 65 must file a federal income tax return \
                 if their gross income is at least:",
            )
            .with_options(&[
                ("A", "$13,850"),
                ("B", "$14,600"),
                ("C", "$15,700"),
                ("D", "$27,700"),
            ])
            .with_answer("B")
            .with_explanation(
                "The filing threshold for a single filer under 65 equals the standard deduction, \
                 $14,600 for 2024. The threshold is adjusted annually for inflation.",
            )
            .with_reference("IRC §6012; IRS Publication 501"),
        Question::new("see1-002", see1(1))
            .with_topic("Filing Status")
            .with_subtopic("Head of Household")
            .with_prompt(
                "Maria is unmarried and pays more than half the cost of maintaining a home for \
                 her 19-year-old son, a full-time student with no income. What is Maria's \
                 filing status?",
            )
            .with_options(&[
                ("A", "Single"),
                ("B", "Head of Household"),
                ("C", "Qualifying Surviving Spouse"),
                ("D", "Married Filing Separately"),
            ])
            .with_answer("B")
            .with_explanation(
                "Maria is unmarried, pays more than half the cost of keeping up the home, and her \
                 son is a qualifying child (under 24 and a full-time student) who lives with her.",
            )
            .with_reference("IRC §2(b); IRS Publication 501"),
        Question::new("see1-003", see1(1))
            .with_topic("Dependents")
            .with_subtopic("Qualifying Child Tests")
            .with_prompt(
                "Which of the following is NOT a requirement for a child to be claimed as a \
                 qualifying child?",
            )
            .with_options(&[
                ("A", "The child must be younger than the taxpayer"),
                (
                    "B",
                    "The child must share the taxpayer's principal residence for more than half the year",
                ),
                ("C", "The child must provide more than half of their own support"),
                ("D", "The child must be under 19, or under 24 if a full-time student"),
            ])
            .with_answer("C")
            .with_explanation(
                "The support test requires that the child NOT provide more than half of their own \
                 support. Options A, B and D are actual qualifying-child requirements.",
            )
            .with_reference("IRC §152(c); IRS Publication 501"),
        Question::new("see1-004", see1(1))
            .with_topic("Taxpayer Identification")
            .with_subtopic("ITIN")
            .with_difficulty(QuestionDifficulty::Easy)
            .with_skill(SkillLevel::RememberingAndUnderstanding)
            .with_prompt("An Individual Taxpayer Identification Number (ITIN) is issued to:")
            .with_options(&[
                ("A", "U.S. citizens who have lost their Social Security card"),
                (
                    "B",
                    "Individuals not eligible for a Social Security Number who need to file a return",
                ),
                ("C", "Employers for payroll tax purposes"),
                ("D", "Tax preparers for identification purposes"),
            ])
            .with_answer("B")
            .with_explanation(
                "The IRS issues ITINs to individuals who need a U.S. taxpayer identification \
                 number but cannot obtain an SSN, including many nonresident and resident aliens.",
            )
            .with_reference("IRS Publication 1915"),
    ]
}

/// Part 2: Businesses
pub(super) fn part2() -> Vec<Question> {
    vec![
        Question::new("see2-571", see2(1))
            .with_topic("Entity Selection")
            .with_subtopic("C Corp vs S Corp")
            .with_skill(SkillLevel::Analysis)
            .with_prompt(
                "Which of the following is an advantage of S corporation status over C \
                 corporation status?",
            )
            .with_options(&[
                ("A", "Unlimited number of shareholders"),
                ("B", "Ability to have multiple classes of stock"),
                ("C", "Avoidance of double taxation"),
                ("D", "Shareholders can be nonresident aliens"),
            ])
            .with_answer("C")
            .with_explanation(
                "S corporations pass income through to shareholders, avoiding the corporate-level \
                 tax plus dividend tax of a C corporation. They are limited to 100 shareholders, \
                 one class of stock, and U.S. citizen or resident owners.",
            )
            .with_reference("IRC §1361"),
        Question::new("see2-572", see2(5))
            .with_topic("Partnership Taxation")
            .with_subtopic("Guaranteed Payments")
            .with_prompt("Guaranteed payments to a partner for services are:")
            .with_options(&[
                ("A", "Deductible by the partnership and ordinary income to the partner"),
                ("B", "Not deductible by the partnership"),
                ("C", "Deductible by the partnership and capital gain to the partner"),
                ("D", "Subject to self-employment tax only"),
            ])
            .with_answer("A")
            .with_explanation(
                "Guaranteed payments are deductible in computing partnership ordinary income and \
                 are ordinary income to the partner, also subject to self-employment tax.",
            )
            .with_reference("IRC §707(c)"),
        Question::new("see2-573", see2(6))
            .with_topic("Corporate Taxation")
            .with_subtopic("Corporate Tax Rate")
            .with_difficulty(QuestionDifficulty::Easy)
            .with_skill(SkillLevel::RememberingAndUnderstanding)
            .with_prompt("The corporate income tax rate under current law is:")
            .with_options(&[("A", "15%"), ("B", "21%"), ("C", "28%"), ("D", "35%")])
            .with_answer("B")
            .with_explanation(
                "The TCJA set a flat 21% rate on C corporation taxable income for tax years \
                 beginning after 2017, replacing graduated rates that reached 35%.",
            )
            .with_reference("IRC §11"),
    ]
}

/// Part 3: Representation, Practices and Procedures
pub(super) fn part3() -> Vec<Question> {
    vec![
        Question::new("see3-571", see3(5))
            .with_topic("Penalty Abatement")
            .with_subtopic("First-Time Penalty Abatement")
            .with_prompt("To qualify for First-Time Penalty Abatement (FTA), a taxpayer must:")
            .with_options(&[
                ("A", "Have never filed a tax return late"),
                (
                    "B",
                    "Be penalty-free for the prior 3 years, have filed all required returns, and be current on payments",
                ),
                ("C", "Have reasonable cause for the penalty"),
                ("D", "Request abatement within 30 days of the penalty notice"),
            ])
            .with_answer("B")
            .with_explanation(
                "FTA requires a clean penalty history for the prior three years, all required \
                 returns filed or extended, and tax paid or an arrangement to pay. It is an \
                 administrative waiver, not a statutory one.",
            )
            .with_reference("IRM 20.1.1.3.6.1"),
        Question::new("see3-572", see3(1))
            .with_topic("IRS Notices")
            .with_subtopic("CP2000 Response")
            .with_prompt("A CP2000 notice indicates that:")
            .with_options(&[
                ("A", "The IRS has selected the return for audit"),
                ("B", "The return has a math error"),
                ("C", "Income reported to the IRS does not match the return"),
                ("D", "The taxpayer owes criminal penalties"),
            ])
            .with_answer("C")
            .with_explanation(
                "CP2000 is an Automated Underreporter notice: information returns do not match \
                 the income reported. It is not an audit; the taxpayer may agree, partially \
                 agree, or disagree.",
            )
            .with_reference("IRM 4.19.3"),
        Question::new("see3-573", see3(1))
            .with_topic("Statute of Limitations")
            .with_subtopic("Claim for Refund")
            .with_skill(SkillLevel::RememberingAndUnderstanding)
            .with_prompt("A claim for refund must generally be filed within:")
            .with_options(&[
                ("A", "2 years from the date the tax was paid"),
                (
                    "B",
                    "3 years from filing or 2 years from payment, whichever is later",
                ),
                ("C", "5 years from the due date"),
                ("D", "1 year from the assessment date"),
            ])
            .with_answer("B")
            .with_explanation(
                "A refund claim is timely within 3 years of filing or 2 years of payment, \
                 whichever is later; the refundable amount may be limited by when tax was paid.",
            )
            .with_reference("IRC §6511"),
    ]
}
