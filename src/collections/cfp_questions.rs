//! CFP Risk Management and Insurance question bank
//!
//! Domain 3 of the CFP exam (11%). Scenario and calculation items across
//! RIS-1 (risk management principles) and RIS-2 (life insurance).

use crate::schema::{BlueprintArea, ExamSection, Question, QuestionDifficulty, SkillLevel};

const RIS_1: BlueprintArea = BlueprintArea::new(ExamSection::CfpRiskManagement, 1);
const RIS_2: BlueprintArea = BlueprintArea::new(ExamSection::CfpRiskManagement, 2);

pub(super) fn insurance() -> Vec<Question> {
    vec![
        // RIS-1: Risk Management Principles
        Question::new("CFP-RIS-001", RIS_1)
            .with_topic("Risk Management & Insurance")
            .with_subtopic("Risk Treatment")
            .with_skill(SkillLevel::Application)
            .with_prompt(
                "A client faces a risk that could cause a loss of $500,000 but has only a 0.1% \
                 probability of occurring. Which risk management technique is MOST appropriate?",
            )
            .with_options(&[
                ("A", "Retention through an emergency fund"),
                ("B", "Avoidance by eliminating the activity"),
                ("C", "Transfer through insurance"),
                ("D", "Reduction through loss prevention"),
            ])
            .with_answer("C")
            .with_explanation(
                "High-severity, low-frequency risks should be transferred through insurance. The \
                 potential $500,000 loss could be devastating, while the 0.1% probability keeps the \
                 premium affordable. Retention is inappropriate for losses the client cannot absorb.",
            ),
        Question::new("CFP-RIS-002", RIS_1)
            .with_topic("Risk Management & Insurance")
            .with_subtopic("Coinsurance")
            .with_skill(SkillLevel::Application)
            .with_prompt(
                "A building valued at $800,000 is insured for $500,000 under a policy with an 80% \
                 coinsurance clause. A fire causes $200,000 in damage and the deductible is $2,500. \
                 How much will the insurer pay?",
            )
            .with_options(&[
                ("A", "$153,125"),
                ("B", "$197,500"),
                ("C", "$153,750"),
                ("D", "$175,000"),
            ])
            .with_answer("C")
            .with_explanation(
                "Required coverage = $800,000 x 80% = $640,000. Recovery = ($500,000 / $640,000) x \
                 $200,000 = $156,250, less the $2,500 deductible = $153,750. The insured bears part \
                 of the loss for carrying less than the required coverage.",
            ),
        Question::new("CFP-RIS-003", RIS_1)
            .with_topic("Risk Management & Insurance")
            .with_subtopic("Insurable Risk")
            .with_skill(SkillLevel::Analysis)
            .with_prompt("Which of the following is NOT a requirement for an insurable risk?")
            .with_options(&[
                ("A", "Loss must be accidental and unintentional"),
                ("B", "There must be a large number of similar exposure units"),
                ("C", "The probability of loss must be at least 50%"),
                ("D", "The loss must be determinable and measurable"),
            ])
            .with_answer("C")
            .with_explanation(
                "There is no minimum probability requirement. High-probability losses make \
                 insurance impractical because premiums approach the loss amount. The requirements \
                 are a large number of similar exposures, accidental, measurable and \
                 non-catastrophic losses, and an economically feasible premium.",
            ),
        Question::new("CFP-RIS-004", RIS_1)
            .with_topic("Risk Management & Insurance")
            .with_subtopic("Subrogation")
            .with_prompt(
                "After a car accident, the at-fault driver pays $10,000 in damages to the injured \
                 party. The injured party's auto insurer had already paid $10,000 for the same \
                 damages. The at-fault driver's payment should go to:",
            )
            .with_options(&[
                ("A", "The injured party"),
                ("B", "The injured party's insurer through subrogation"),
                ("C", "The at-fault driver's insurer"),
                ("D", "Split between the injured party and their insurer"),
            ])
            .with_answer("B")
            .with_explanation(
                "Subrogation lets the insurer that paid the claim recover from the responsible \
                 third party. It prevents double recovery by the injured party.",
            ),
        // RIS-2: Life Insurance
        Question::new("CFP-RIS-005", RIS_2)
            .with_topic("Life Insurance")
            .with_subtopic("Human Life Value")
            .with_prompt(
                "Robert, age 35, earns $90,000 annually. He expects to work until age 65 and \
                 allocates 30% to personal expenses. Using a 5% discount rate and a PV annuity \
                 factor of 15.372, what is his human life value?",
            )
            .with_options(&[
                ("A", "$968,436"),
                ("B", "$1,383,480"),
                ("C", "$945,000"),
                ("D", "$4,147,440"),
            ])
            .with_answer("A")
            .with_explanation(
                "Income available to the family = $90,000 x 70% = $63,000. HLV = $63,000 x 15.372 \
                 = $968,436, the present value of future earnings lost to dependents.",
            ),
        Question::new("CFP-RIS-006", RIS_2)
            .with_topic("Life Insurance")
            .with_subtopic("Policy Surrender")
            .with_prompt(
                "Linda surrenders a whole life policy with a $300,000 face amount. She paid \
                 $60,000 in premiums and the cash value is $75,000. What is the tax consequence?",
            )
            .with_options(&[
                ("A", "$75,000 tax-free"),
                ("B", "$15,000 taxable as ordinary income"),
                ("C", "$15,000 taxable as capital gain"),
                ("D", "$225,000 taxable as ordinary income"),
            ])
            .with_answer("B")
            .with_explanation(
                "Gain on surrender is cash value minus basis: $75,000 - $60,000 = $15,000, taxed \
                 as ordinary income. The face amount is irrelevant to surrender taxation.",
            )
            .with_reference("IRC §72(e)"),
        Question::new("CFP-RIS-007", RIS_2)
            .with_topic("Life Insurance")
            .with_subtopic("Policy Selection")
            .with_difficulty(QuestionDifficulty::Hard)
            .with_skill(SkillLevel::Evaluation)
            .with_prompt(
                "Michael, age 45, needs $1 million of coverage for 20 years until his children are \
                 independent, and wants to keep coverage if his health changes. Which policy is \
                 MOST appropriate?",
            )
            .with_options(&[
                ("A", "Annual renewable term"),
                ("B", "20-year level term with conversion privilege"),
                ("C", "Whole life"),
                ("D", "Variable universal life"),
            ])
            .with_answer("B")
            .with_explanation(
                "Level term covers the dependency period at the lowest cost, and the conversion \
                 privilege allows a switch to permanent coverage without evidence of insurability.",
            ),
    ]
}
