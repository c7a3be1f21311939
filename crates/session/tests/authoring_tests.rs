//! End-to-end authoring scenarios driven through the wizard controller.
//!
//! Each test walks the full path an instructor takes: fill in basic info,
//! build the curriculum with commands, and register the assembled draft
//! with the persistence collaborator.

use assert_matches::assert_matches;

use learnflow_core::{
    Answer, BasicInfo, Category, CommandOutcome, CoreError, CurriculumCommand, Difficulty,
    LessonContent, LessonId, LessonType, QuestionId, SectionId,
};
use learnflow_session::{MemoryCourseStore, SessionError, StoreError, WizardController};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn controller_at_curriculum() -> WizardController {
    let mut controller = WizardController::new();
    controller
        .update_basic_info(BasicInfo {
            title: "Next.js 15 완벽 가이드".to_string(),
            category: Some(Category::Development),
            difficulty: Some(Difficulty::Beginner),
            description: "Next.js를 처음부터 배포까지".to_string(),
            ..Default::default()
        })
        .unwrap();
    controller.save_basic_info().unwrap();
    controller
}

fn add_section(controller: &mut WizardController) -> SectionId {
    match controller.apply(CurriculumCommand::AddSection).unwrap() {
        CommandOutcome::SectionAdded(id) => id,
        other => panic!("expected SectionAdded, got {other:?}"),
    }
}

fn add_lesson(
    controller: &mut WizardController,
    section_id: SectionId,
    lesson_type: LessonType,
) -> LessonId {
    let outcome = controller
        .apply(CurriculumCommand::AddLesson {
            section_id,
            lesson_type,
        })
        .unwrap();
    match outcome {
        CommandOutcome::LessonAdded(id) => id,
        other => panic!("expected LessonAdded, got {other:?}"),
    }
}

fn add_question(
    controller: &mut WizardController,
    section_id: SectionId,
    lesson_id: LessonId,
    prompt: &str,
    answer: Answer,
) -> Option<QuestionId> {
    let outcome = controller
        .apply(CurriculumCommand::AddQuestion {
            section_id,
            lesson_id,
            prompt: prompt.to_string(),
            answer,
        })
        .unwrap();
    match outcome {
        CommandOutcome::QuestionAdded(id) => Some(id),
        CommandOutcome::QuestionSkipped => None,
        other => panic!("expected a question outcome, got {other:?}"),
    }
}

fn question_count(controller: &WizardController, section: SectionId, lesson: LessonId) -> usize {
    match &controller.curriculum().lesson(section, lesson).unwrap().content {
        LessonContent::Quiz { questions } => questions.len(),
        LessonContent::Video { .. } => panic!("expected a quiz lesson"),
    }
}

// ---------------------------------------------------------------------------
// Scenario: sections and video lessons
// ---------------------------------------------------------------------------

#[test]
fn new_section_and_video_lesson_defaults() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);

    let stored = controller.curriculum().section(section).unwrap();
    assert_eq!(stored.title, "챕터 2: 새로운 챕터");

    let lesson = add_lesson(&mut controller, section, LessonType::Video);
    let stored = controller.curriculum().lesson(section, lesson).unwrap();
    assert_eq!(stored.title, "새로운 영상 레슨");
    assert_eq!(stored.lesson_type(), LessonType::Video);
    assert!(controller.is_editing(lesson), "new lessons open into edit mode");
}

// ---------------------------------------------------------------------------
// Scenario: quiz authoring
// ---------------------------------------------------------------------------

#[test]
fn quiz_lesson_collects_questions_in_order() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let quiz = add_lesson(&mut controller, section, LessonType::Quiz);

    let q1 = add_question(
        &mut controller,
        section,
        quiz,
        "Next.js는 프레임워크이다",
        Answer::O,
    )
    .expect("question should be added");

    let (_, stored) = controller.curriculum().find_question(q1).unwrap();
    assert_eq!(stored.prompt, "Next.js는 프레임워크이다");
    assert_eq!(stored.answer, Answer::O);
    assert_eq!(question_count(&controller, section, quiz), 1);
}

#[test]
fn empty_prompt_is_skipped_regardless_of_answer() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let quiz = add_lesson(&mut controller, section, LessonType::Quiz);
    add_question(&mut controller, section, quiz, "문제 하나", Answer::X).unwrap();

    for answer in [Answer::O, Answer::X] {
        assert_eq!(add_question(&mut controller, section, quiz, "", answer), None);
    }

    assert_eq!(question_count(&controller, section, quiz), 1);
}

#[test]
fn removing_the_only_question_empties_the_list() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let quiz = add_lesson(&mut controller, section, LessonType::Quiz);
    let q1 = add_question(&mut controller, section, quiz, "유일한 문제", Answer::O).unwrap();

    controller
        .apply(CurriculumCommand::RemoveQuestion {
            section_id: section,
            lesson_id: quiz,
            question_id: q1,
        })
        .unwrap();

    assert_eq!(question_count(&controller, section, quiz), 0);
}

// ---------------------------------------------------------------------------
// Scenario: toggle involution
// ---------------------------------------------------------------------------

#[test]
fn toggling_edit_twice_restores_the_original_flag() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let lesson = add_lesson(&mut controller, section, LessonType::Quiz);
    let original = controller.is_editing(lesson);

    for _ in 0..2 {
        controller
            .apply(CurriculumCommand::ToggleEdit {
                section_id: section,
                lesson_id: lesson,
            })
            .unwrap();
    }

    assert_eq!(controller.is_editing(lesson), original);
}

// ---------------------------------------------------------------------------
// Scenario: cascade deletion clears the global id space
// ---------------------------------------------------------------------------

#[test]
fn removing_a_section_removes_all_descendant_ids() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let quiz = add_lesson(&mut controller, section, LessonType::Quiz);
    let q1 = add_question(
        &mut controller,
        section,
        quiz,
        "Next.js는 프레임워크이다",
        Answer::O,
    )
    .unwrap();

    controller
        .apply(CurriculumCommand::RemoveSection {
            section_id: section,
        })
        .unwrap();

    let tree = controller.curriculum();
    assert!(tree.section(section).is_none());
    assert!(tree.find_lesson(quiz).is_none());
    assert!(tree.find_question(q1).is_none());

    // Follow-up commands against the removed ids fail loudly.
    let err = controller
        .apply(CurriculumCommand::RenameSection {
            section_id: section,
            title: "유령 챕터".to_string(),
        })
        .unwrap_err();
    assert_matches!(err, SessionError::Core(CoreError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Scenario: full run to registration
// ---------------------------------------------------------------------------

#[test]
fn full_authoring_run_registers_once() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let video = add_lesson(&mut controller, section, LessonType::Video);
    let quiz = add_lesson(&mut controller, section, LessonType::Quiz);
    add_question(&mut controller, section, quiz, "OX 문제", Answer::X).unwrap();
    controller
        .apply(CurriculumCommand::RenameLesson {
            section_id: section,
            lesson_id: video,
            title: "1강. 프로젝트 셋업".to_string(),
        })
        .unwrap();

    let mut store = MemoryCourseStore::new();
    let course_id = controller.register(&mut store).unwrap();

    let submitted = &store.accepted()[0];
    assert_eq!(submitted.id, course_id);
    assert_eq!(submitted.draft.basic_info.title, "Next.js 15 완벽 가이드");
    // Seed section plus the one added above.
    assert_eq!(submitted.draft.curriculum.len(), 2);
    assert_eq!(submitted.draft.curriculum[1].lessons.len(), 2);

    // Terminal: no further authoring.
    let err = controller.apply(CurriculumCommand::AddSection).unwrap_err();
    assert_matches!(err, SessionError::Core(CoreError::Conflict(_)));
}

#[test]
fn failed_registration_preserves_the_draft_for_retry() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    add_lesson(&mut controller, section, LessonType::Video);

    let mut store = MemoryCourseStore::new();
    store.fail_next("upstream validation rejected the draft");

    let err = controller.register(&mut store).unwrap_err();
    assert_matches!(err, SessionError::Store(StoreError::Persistence(_)));
    assert_eq!(controller.curriculum().section_count(), 2);

    let retried = controller.register(&mut store).unwrap();
    assert_eq!(store.accepted()[0].id, retried);
}

// ---------------------------------------------------------------------------
// Scenario: the submitted draft never carries presentation state
// ---------------------------------------------------------------------------

#[test]
fn serialized_draft_has_no_editing_flags() {
    let mut controller = controller_at_curriculum();
    let section = add_section(&mut controller);
    let lesson = add_lesson(&mut controller, section, LessonType::Video);
    assert!(controller.is_editing(lesson));

    let json = serde_json::to_value(controller.assemble_draft()).unwrap();
    let rendered = json.to_string();
    assert!(!rendered.contains("editing"), "draft JSON must not leak editor state");
    assert!(!rendered.contains("is_editing"));

    // The lesson itself is present with its tagged payload.
    assert_eq!(json["curriculum"][1]["lessons"][0]["type"], "video");
}
