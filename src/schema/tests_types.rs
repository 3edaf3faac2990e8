//! Tests for schema enumerations and record wire shapes

use super::*;
use crate::errors::ContentError;
use std::str::FromStr;

// ========================================================================
// Course and section codes
// ========================================================================

#[test]
fn test_SCHEMA_course_codes_round_trip() {
    for course in Course::all() {
        assert_eq!(Course::from_str(course.code()).unwrap(), *course);
    }
    assert_eq!("CFP".parse::<Course>().unwrap(), Course::Cfp);
    assert!("cpa".parse::<Course>().is_err());
}

#[test]
fn test_SCHEMA_every_section_belongs_to_its_course() {
    for course in Course::all() {
        assert!(course.sections().all(|s| s.course() == *course));
    }
    let total: usize = Course::all().iter().map(|c| c.sections().count()).sum();
    assert_eq!(total, ExamSection::all().len());
}

#[test]
fn test_SCHEMA_section_parse_accepts_alias_and_case() {
    assert_eq!(
        "CFP-RIS".parse::<ExamSection>().unwrap(),
        ExamSection::CfpRiskManagement
    );
    assert_eq!(
        "cfp-risk".parse::<ExamSection>().unwrap(),
        ExamSection::CfpRiskManagement
    );
    assert_eq!("see2".parse::<ExamSection>().unwrap(), ExamSection::EaBusinesses);
    assert_eq!(
        "SEE4".parse::<ExamSection>().unwrap_err(),
        ContentError::UnknownSection("SEE4".to_string())
    );
}

#[test]
fn test_SCHEMA_section_serde_uses_canonical_code() {
    let json = serde_json::to_string(&ExamSection::CfpRiskManagement).unwrap();
    assert_eq!(json, "\"CFP-RISK\"");
    let alias: ExamSection = serde_json::from_str("\"CFP-RIS\"").unwrap();
    assert_eq!(alias, ExamSection::CfpRiskManagement);
    assert!(serde_json::from_str::<ExamSection>("\"CFP-XYZ\"").is_err());
}

#[test]
fn test_SCHEMA_section_serde_matches_area_case_rules() {
    let section: ExamSection = serde_json::from_str("\"see1\"").unwrap();
    assert_eq!(section, ExamSection::EaIndividuals);
    let area: BlueprintArea = serde_json::from_str("\"see1-1\"").unwrap();
    assert_eq!(area.section, section);

    let alias: ExamSection = serde_json::from_str("\"cfp-ris\"").unwrap();
    assert_eq!(alias, ExamSection::CfpRiskManagement);
    assert_eq!(
        serde_json::to_string(&ExamSection::EaIndividuals).unwrap(),
        "\"SEE1\""
    );
}

#[test]
fn test_SCHEMA_cfp_exam_weights_sum_to_100() {
    let sum: u32 = ExamSection::all()
        .iter()
        .filter_map(|s| s.exam_weight())
        .map(|w| u32::from(w.min))
        .sum();
    assert_eq!(sum, 100);
    assert!(ExamSection::EaIndividuals.exam_weight().is_none());
}

// ========================================================================
// Blueprint areas
// ========================================================================

#[test]
fn test_SCHEMA_blueprint_area_parse_and_display() {
    let area: BlueprintArea = "RIS-2".parse().unwrap();
    assert_eq!(area, BlueprintArea::new(ExamSection::CfpRiskManagement, 2));
    assert_eq!(area.to_string(), "RIS-2");
    assert_eq!(area.name(), Some("Life Insurance"));

    let alias: BlueprintArea = "RISK-2".parse().unwrap();
    assert_eq!(alias, area);

    let see: BlueprintArea = "see1-3".parse().unwrap();
    assert_eq!(see.to_string(), "SEE1-3");
}

#[test]
fn test_SCHEMA_blueprint_area_rejects_unknown() {
    for bad in ["RIS-0", "RIS-9", "XYZ-1", "RIS", "RIS-two", "SEE1-", "RIS-+2", "RIS- 2"] {
        assert_eq!(
            bad.parse::<BlueprintArea>().unwrap_err(),
            ContentError::UnknownBlueprintArea(bad.to_string()),
            "{bad}"
        );
    }
}

#[test]
fn test_SCHEMA_blueprint_area_serde_as_string() {
    let area = BlueprintArea::new(ExamSection::EaRepresentation, 5);
    assert_eq!(serde_json::to_string(&area).unwrap(), "\"SEE3-5\"");
    let back: BlueprintArea = serde_json::from_str("\"SEE3-5\"").unwrap();
    assert_eq!(back, area);
    assert!(serde_json::from_str::<BlueprintArea>("\"SEE3-99\"").is_err());
}

#[test]
fn test_SCHEMA_unknown_area_constructed_directly_is_not_known() {
    let area = BlueprintArea::new(ExamSection::CfpTax, 9);
    assert!(!area.is_known());
    assert!(area.name().is_none());
}

// ========================================================================
// Difficulty and skill scales
// ========================================================================

#[test]
fn test_SCHEMA_difficulty_wire_names() {
    for d in QuestionDifficulty::all() {
        assert_eq!(QuestionDifficulty::from_str(d.as_str()).unwrap(), *d);
        assert_eq!(
            serde_json::to_string(d).unwrap(),
            format!("\"{}\"", d.as_str())
        );
    }
    assert_eq!(QuestionDifficulty::default(), QuestionDifficulty::Medium);
    assert!("brutal".parse::<QuestionDifficulty>().is_err());
}

#[test]
fn test_SCHEMA_skill_level_alias() {
    let skill: SkillLevel = serde_json::from_str("\"Remembering\"").unwrap();
    assert_eq!(skill, SkillLevel::RememberingAndUnderstanding);
    assert_eq!(
        serde_json::to_string(&skill).unwrap(),
        "\"Remembering and Understanding\""
    );
}

#[test]
fn test_SCHEMA_lesson_difficulty_alias() {
    let basic: LessonDifficulty = serde_json::from_str("\"basic\"").unwrap();
    assert_eq!(basic, LessonDifficulty::Beginner);
    assert_eq!(basic.as_str(), "beginner");
}

// ========================================================================
// Section blocks
// ========================================================================

#[test]
fn test_SCHEMA_block_tags() {
    let blocks = [
        SectionBlock::text("t", "c"),
        SectionBlock::table("t", &["h"], &[&["r"]]),
        SectionBlock::callout("t", "c"),
        SectionBlock::warning("t", "c"),
        SectionBlock::example("t", "c"),
        SectionBlock::list("t", &["i"]),
        SectionBlock::summary("t", &["i"]),
        SectionBlock::key_points("t", &["i"]),
    ];
    for block in &blocks {
        let value = serde_json::to_value(block).unwrap();
        assert_eq!(value["type"], block.kind().as_str());
        let back: SectionBlock = serde_json::from_value(value).unwrap();
        assert_eq!(&back, block);
    }
}

#[test]
fn test_SCHEMA_block_title_optional_on_input() {
    let block: SectionBlock =
        serde_json::from_str(r#"{"type": "summary", "content": ["One", "Two"]}"#).unwrap();
    assert_eq!(block.title(), "");
    assert_eq!(block.items().map(<[String]>::len), Some(2));
}

#[test]
fn test_SCHEMA_list_blocks_accept_either_field_name() {
    let list: SectionBlock =
        serde_json::from_str(r#"{"type": "list", "title": "Steps", "content": ["Step 1"]}"#)
            .unwrap();
    assert_eq!(list.items(), Some(&["Step 1".to_string()][..]));

    for field in ["items", "points"] {
        let json = format!(r#"{{"type": "summary", "{field}": ["One"]}}"#);
        let summary: SectionBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(summary.items(), Some(&["One".to_string()][..]), "{field}");
        let out = serde_json::to_value(&summary).unwrap();
        assert_eq!(out["content"], serde_json::json!(["One"]));
    }

    let out = serde_json::to_value(&list).unwrap();
    assert_eq!(out["items"], serde_json::json!(["Step 1"]));
    assert!(out.get("content").is_none());
}

#[test]
fn test_SCHEMA_unknown_block_type_rejected() {
    let result: Result<SectionBlock, _> =
        serde_json::from_str(r#"{"type": "video", "content": "x"}"#);
    assert!(result.is_err());
}

#[test]
fn test_SCHEMA_lesson_detects_ragged_table() {
    let lesson = Lesson::new("SEE1-010", "SEE1-1".parse().unwrap(), 10).with_block(
        SectionBlock::table("Ragged", &["A", "B"], &[&["1", "2"], &["3"]]),
    );
    assert_eq!(lesson.malformed_tables().count(), 1);
}

// ========================================================================
// Question wire shapes
// ========================================================================

#[test]
fn test_SCHEMA_question_labelled_form() {
    let json = r#"{
        "id": "CFP-RIS-002",
        "courseId": "cfp",
        "section": "CFP-RISK",
        "blueprintArea": "RIS-1",
        "topic": "Risk Management & Insurance",
        "difficulty": "medium",
        "skillLevel": "Application",
        "question": "How much will the insurer pay?",
        "options": [
            {"id": "A", "text": "$153,125"},
            {"id": "B", "text": "$197,500"},
            {"id": "C", "text": "$153,750"}
        ],
        "correctOptionId": "C",
        "explanation": "Coinsurance applies."
    }"#;
    let q: Question = serde_json::from_str(json).unwrap();
    assert_eq!(q.correct_option_id, "C");
    assert_eq!(q.correct_option().map(|o| o.text.as_str()), Some("$153,750"));
    assert!(q.is_correct("C"));
    assert!(q.subtopic.is_none());
}

#[test]
fn test_SCHEMA_question_plain_form_normalizes_to_labels() {
    let json = r#"{
        "id": "see1-050",
        "courseId": "ea",
        "section": "SEE1",
        "blueprintArea": "SEE1-1",
        "question": "Pick one",
        "options": ["Alpha", "B) Bravo"],
        "correctAnswer": 1,
        "explanation": "Bravo is keyed."
    }"#;
    let q: Question = serde_json::from_str(json).unwrap();
    assert_eq!(q.options[1], AnswerOption::new("B", "Bravo"));
    assert_eq!(q.correct_option_id, "B");
    assert_eq!(q.difficulty, QuestionDifficulty::Medium);

    let out = serde_json::to_value(&q).unwrap();
    assert_eq!(out["correctOptionId"], "B");
    assert_eq!(out["options"][0]["id"], "A");
    assert_eq!(out["question"], "Pick one");
    assert!(out.get("correctAnswer").is_none());
}

#[test]
fn test_SCHEMA_question_answer_key_conflicts_rejected() {
    let base = r#"{
        "id": "q",
        "courseId": "ea",
        "section": "SEE1",
        "blueprintArea": "SEE1-1",
        "question": "?",
        "options": ["One", "Two"],
        KEY
        "explanation": "x"
    }"#;
    let disagree = base.replace("KEY", r#""correctOptionId": "A", "correctAnswer": 1,"#);
    assert!(serde_json::from_str::<Question>(&disagree).is_err());

    let agree = base.replace("KEY", r#""correctOptionId": "B", "correctAnswer": 1,"#);
    assert!(serde_json::from_str::<Question>(&agree).is_ok());

    let missing = base.replace("KEY", "");
    let err = serde_json::from_str::<Question>(&missing).unwrap_err();
    assert!(err.to_string().contains("no correctOptionId"));
}

#[test]
fn test_SCHEMA_question_mixed_option_forms_rejected() {
    let json = r#"{
        "id": "q",
        "courseId": "ea",
        "section": "SEE1",
        "blueprintArea": "SEE1-1",
        "question": "?",
        "options": [{"id": "A", "text": "One"}, "Two"],
        "correctOptionId": "A",
        "explanation": "x"
    }"#;
    let err = serde_json::from_str::<Question>(json).unwrap_err();
    assert!(err.to_string().contains("mixes labelled and plain"));
}

#[test]
fn test_SCHEMA_question_builder_derives_course_and_section() {
    let q = Question::new("see2-900", "SEE2-3".parse().unwrap());
    assert_eq!(q.course, Course::Ea);
    assert_eq!(q.section, ExamSection::EaBusinesses);
    assert_eq!(<Question as Record>::KIND, "question");
    assert_eq!(q.sequence_order(), None);
}

#[test]
fn test_SCHEMA_lesson_record_exposes_order() {
    let lesson = Lesson::new("SEE1-004", "SEE1-1".parse().unwrap(), 4)
        .with_title("Income")
        .with_topics(&["Wages", "Interest"]);
    assert_eq!(lesson.sequence_order(), Some(4));
    assert!(lesson.matches_query("wages"));
    assert!(!lesson.matches_query("estate"));
}
