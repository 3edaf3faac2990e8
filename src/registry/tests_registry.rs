//! Tests for registry construction and queries

use super::*;
use crate::blueprint;
use crate::collections::{builtin_lessons, builtin_questions, Collection};
use crate::errors::ContentError;
use crate::schema::{
    BlueprintArea, Course, ExamSection, Lesson, LessonDifficulty, Question, QuestionDifficulty,
    SectionBlock,
};
use crate::validation::ValidationRules;

fn question(id: &str, area: BlueprintArea) -> Question {
    Question::new(id, area)
        .with_topic("Fixture")
        .with_prompt("Which option is keyed as correct?")
        .with_options(&[("A", "First"), ("B", "Second"), ("C", "Third")])
        .with_answer("B")
        .with_explanation("The second option is keyed as the correct answer.")
        .with_reference("Fixture reference")
}

fn lesson(id: &str, section: ExamSection, order: u32) -> Lesson {
    Lesson::new(id, BlueprintArea::new(section, 1), order)
        .with_title(format!("Lesson {id}"))
        .with_duration(30)
        .with_topics(&["Fixture"])
        .with_block(SectionBlock::text("Body", "Lesson body text."))
        .with_block(SectionBlock::summary("Key Takeaways", &["One point"]))
}

fn ris(n: u8) -> BlueprintArea {
    BlueprintArea::new(ExamSection::CfpRiskManagement, n)
}

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_REGISTRY_build_empty() {
    let registry: Registry<Question> = Registry::build(Vec::new()).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.count(), 0);
    assert!(registry.get("anything").is_none());
    assert!(registry.count_by_section().is_empty());
}

#[test]
fn test_REGISTRY_build_preserves_collection_then_record_order() {
    let registry = Registry::build(vec![
        Collection::new("a", vec![question("A-2", ris(1)), question("A-1", ris(1))]),
        Collection::new("b", vec![question("B-1", ris(2))]),
    ])
    .unwrap();
    assert_eq!(registry.ids(), vec!["A-2", "A-1", "B-1"]);
    assert_eq!(registry.collection_names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_REGISTRY_duplicate_id_across_collections_is_fatal() {
    let err = Registry::build(vec![
        Collection::new("batch-a", vec![question("X-001", ris(1))]),
        Collection::new("batch-b", vec![question("X-001", ris(2))]),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        ContentError::DuplicateId {
            id: "X-001".to_string(),
            first: "batch-a".to_string(),
            second: "batch-b".to_string(),
        }
    );
}

#[test]
fn test_REGISTRY_duplicate_id_within_collection_is_fatal() {
    let err = Registry::build(vec![Collection::new(
        "solo",
        vec![question("X-001", ris(1)), question("X-001", ris(1))],
    )])
    .unwrap_err();
    assert!(matches!(err, ContentError::DuplicateId { first, second, .. } if first == "solo" && second == "solo"));
}

#[test]
fn test_REGISTRY_invalid_record_is_fatal() {
    let broken = question("X-002", ris(1)).with_answer("Z");
    let err = Registry::build(vec![Collection::new("bad", vec![broken])]).unwrap_err();
    match err {
        ContentError::Validation {
            id,
            collection,
            violations,
        } => {
            assert_eq!(id, "X-002");
            assert_eq!(collection, "bad");
            assert!(violations.iter().any(|v| v.contains("answer_key_resolves")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_REGISTRY_warnings_fatal_only_when_configured() {
    let terse = question("X-003", ris(1)).with_explanation("Too short.");
    let lenient = Registry::build(vec![Collection::new("c", vec![terse.clone()])]);
    assert!(lenient.is_ok());

    let strict_rules = ValidationRules {
        fail_on_warnings: true,
        ..ValidationRules::default()
    };
    let strict = Registry::build_with_rules(vec![Collection::new("c", vec![terse])], &strict_rules);
    assert!(matches!(strict, Err(ContentError::Validation { .. })));
}

#[test]
fn test_REGISTRY_duplicate_lesson_order_is_fatal() {
    let err = Registry::build(vec![Collection::new(
        "see1",
        vec![
            lesson("SEE1-001", ExamSection::EaIndividuals, 1),
            lesson("SEE1-002", ExamSection::EaIndividuals, 1),
        ],
    )])
    .unwrap_err();
    assert_eq!(
        err,
        ContentError::DuplicateOrder {
            section: "SEE1".to_string(),
            order: 1,
            first: "SEE1-001".to_string(),
            second: "SEE1-002".to_string(),
        }
    );
}

#[test]
fn test_REGISTRY_same_order_in_different_sections_is_fine() {
    let registry = Registry::build(vec![Collection::new(
        "mixed",
        vec![
            lesson("SEE1-001", ExamSection::EaIndividuals, 1),
            lesson("SEE2-001", ExamSection::EaBusinesses, 1),
        ],
    )])
    .unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_REGISTRY_conflicts_reports_every_collision() {
    let collections = vec![
        Collection::new(
            "see1-a",
            vec![
                lesson("SEE1-001", ExamSection::EaIndividuals, 1),
                lesson("SEE1-002", ExamSection::EaIndividuals, 1),
            ],
        ),
        Collection::new(
            "see1-b",
            vec![
                lesson("SEE1-001", ExamSection::EaIndividuals, 5),
                lesson("SEE2-001", ExamSection::EaBusinesses, 1),
            ],
        ),
    ];
    assert_eq!(
        Registry::conflicts(&collections),
        vec![
            ContentError::DuplicateOrder {
                section: "SEE1".to_string(),
                order: 1,
                first: "SEE1-001".to_string(),
                second: "SEE1-002".to_string(),
            },
            ContentError::DuplicateId {
                id: "SEE1-001".to_string(),
                first: "see1-a".to_string(),
                second: "see1-b".to_string(),
            },
        ]
    );
    assert!(Registry::conflicts(&builtin_lessons()).is_empty());
}

// ========================================================================
// Lookups
// ========================================================================

#[test]
fn test_REGISTRY_concrete_lookup_cfp_ris_002() {
    let registry = Registry::build(builtin_questions()).unwrap();
    let q = registry.get("CFP-RIS-002").expect("CFP-RIS-002 present");
    assert_eq!(q.correct_option_id, "C");
    assert_eq!(q.section, ExamSection::CfpRiskManagement);
    assert_eq!(registry.source_of("CFP-RIS-002"), Some("cfp-insurance"));
}

#[test]
fn test_REGISTRY_missing_id_is_none() {
    let registry = Registry::build(builtin_questions()).unwrap();
    assert!(registry.get("CFP-RIS-999").is_none());
    assert!(!registry.contains("CFP-RIS-999"));
    assert!(registry.source_of("CFP-RIS-999").is_none());
}

#[test]
fn test_REGISTRY_section_filter_keeps_order_and_excludes_other_parts() {
    let registry = Registry::build(vec![Collection::new(
        "ea",
        vec![
            lesson("SEE1-001", ExamSection::EaIndividuals, 1),
            lesson("SEE2-001", ExamSection::EaBusinesses, 1),
            lesson("SEE1-002", ExamSection::EaIndividuals, 2),
            lesson("SEE1-003", ExamSection::EaIndividuals, 3),
        ],
    )])
    .unwrap();
    let ids: Vec<_> = registry
        .by_section(ExamSection::EaIndividuals)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["SEE1-001", "SEE1-002", "SEE1-003"]);
}

#[test]
fn test_REGISTRY_builtin_lessons_section_filter() {
    let registry = Registry::build(builtin_lessons()).unwrap();
    let see1: Vec<_> = registry
        .by_section(ExamSection::EaIndividuals)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(see1, vec!["SEE1-001", "SEE1-002", "SEE1-003"]);
    assert!(registry.by_section(ExamSection::CfpTax).is_empty());
}

#[test]
fn test_REGISTRY_blueprint_area_filter() {
    let registry = Registry::build(builtin_questions()).unwrap();
    let ris2 = registry.by_blueprint_area(ris(2));
    assert!(!ris2.is_empty());
    assert!(ris2.iter().all(|q| q.blueprint_area == ris(2)));
}

#[test]
fn test_REGISTRY_course_and_difficulty_filters() {
    let registry = Registry::build(builtin_questions()).unwrap();
    let cfp = registry.by_course(Course::Cfp);
    let ea = registry.by_course(Course::Ea);
    assert_eq!(cfp.len() + ea.len(), registry.len());

    let hard = registry.by_difficulty(QuestionDifficulty::Hard);
    assert!(hard.iter().any(|q| q.id == "CFP-RIS-007"));
}

#[test]
fn test_REGISTRY_search_is_case_insensitive() {
    let registry = Registry::build(builtin_questions()).unwrap();
    let hits = registry.search("COINSURANCE");
    assert!(hits.iter().any(|q| q.id == "CFP-RIS-002"));
    assert!(registry.search("no such phrase anywhere").is_empty());
}

#[test]
fn test_REGISTRY_lesson_syllabus_sorted_by_order() {
    let registry = Registry::build(vec![Collection::new(
        "see1",
        vec![
            lesson("SEE1-003", ExamSection::EaIndividuals, 3),
            lesson("SEE1-001", ExamSection::EaIndividuals, 1),
        ],
    )])
    .unwrap();
    let ids: Vec<_> = registry
        .syllabus(ExamSection::EaIndividuals)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["SEE1-001", "SEE1-003"]);
    assert_eq!(
        registry.by_difficulty(LessonDifficulty::Intermediate).len(),
        2
    );
}

#[test]
fn test_REGISTRY_count_by_section_first_seen_order() {
    let registry = Registry::build(builtin_questions()).unwrap();
    let counts = registry.count_by_section();
    let sections: Vec<_> = counts.keys().copied().collect();
    assert_eq!(
        sections,
        vec![
            ExamSection::CfpRiskManagement,
            ExamSection::EaIndividuals,
            ExamSection::EaBusinesses,
            ExamSection::EaRepresentation,
        ]
    );
    assert_eq!(counts[&ExamSection::CfpRiskManagement], 7);
}

#[test]
fn test_REGISTRY_shared_across_threads() {
    let registry = Registry::build(builtin_questions()).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(registry.get("see1-001").is_some());
                assert_eq!(registry.count(), registry.iter().count());
            });
        }
    });
}

// ========================================================================
// Properties over generated registries
// ========================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_area() -> impl Strategy<Value = BlueprintArea> {
        (0..ExamSection::all().len(), 0usize..8).prop_map(|(s, a)| {
            let section = ExamSection::all()[s];
            let table = blueprint::areas(section);
            BlueprintArea::new(section, table[a % table.len()].number)
        })
    }

    /// Unique-id questions split into collections of up to `chunk` records
    fn arb_collections() -> impl Strategy<Value = Vec<Collection<Question>>> {
        (prop::collection::vec(arb_area(), 0..40), 1usize..6).prop_map(|(areas, chunk)| {
            let questions: Vec<_> = areas
                .into_iter()
                .enumerate()
                .map(|(i, area)| question(&format!("Q-{i:03}"), area))
                .collect();
            questions
                .chunks(chunk)
                .enumerate()
                .map(|(i, batch)| Collection::new(format!("batch-{i}"), batch.to_vec()))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_lookup_returns_each_record(collections in arb_collections()) {
            let registry = Registry::build(collections).unwrap();
            for q in registry.iter() {
                prop_assert_eq!(registry.get(&q.id), Some(q));
            }
        }

        #[test]
        fn prop_ids_unique(collections in arb_collections()) {
            let registry = Registry::build(collections).unwrap();
            let mut ids = registry.ids();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }

        #[test]
        fn prop_filters_are_complete(collections in arb_collections()) {
            let registry = Registry::build(collections).unwrap();
            for q in registry.iter() {
                prop_assert!(registry.by_section(q.section).iter().any(|r| r.id == q.id));
                prop_assert!(registry.by_blueprint_area(q.blueprint_area).iter().any(|r| r.id == q.id));
            }
        }

        #[test]
        fn prop_section_filter_preserves_order(collections in arb_collections()) {
            let registry = Registry::build(collections).unwrap();
            let ids = registry.ids();
            for section in ExamSection::all() {
                let positions: Vec<_> = registry
                    .by_section(*section)
                    .iter()
                    .map(|q| ids.iter().position(|id| *id == q.id).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn prop_counts_consistent(collections in arb_collections()) {
            let expected: usize = collections.iter().map(Collection::len).sum();
            let registry = Registry::build(collections).unwrap();
            prop_assert_eq!(registry.count(), expected);
            prop_assert_eq!(registry.count(), registry.count_by_section().values().sum::<usize>());
            prop_assert_eq!(registry.count(), registry.count_by_blueprint_area().values().sum::<usize>());
        }

        #[test]
        fn prop_absent_id_not_found(collections in arb_collections(), suffix in "[a-z]{1,8}") {
            let registry = Registry::build(collections).unwrap();
            let missing = format!("MISSING-{suffix}");
            prop_assert!(registry.get(&missing).is_none());
        }

        #[test]
        fn prop_reused_id_always_rejected(collections in arb_collections()) {
            prop_assume!(!collections.is_empty() && !collections[0].is_empty());
            let clash = collections[0].records()[0].clone();
            let mut collections = collections;
            collections.push(Collection::new("late", vec![clash]));
            prop_assert!(
                matches!(
                    Registry::build(collections),
                    Err(ContentError::DuplicateId { .. })
                ),
                "reused id was accepted"
            );
        }
    }
}
