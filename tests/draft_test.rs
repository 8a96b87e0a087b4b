use formguard::{
    Accepted, Error, FileCandidate, FormDraft, Rejection, RejectionReason, UploadPolicy,
};

const MB: u64 = 1024 * 1024;

fn policy() -> UploadPolicy {
    UploadPolicy::new(5_242_880, ["image/jpeg", "image/png"], 3).unwrap()
}

fn draft_with_images(count: usize) -> FormDraft {
    let policy = policy();
    let mut draft = FormDraft::new();
    for i in 0..count {
        draft
            .add_image(&policy, FileCandidate::new(format!("{i}.png"), MB, "image/png"))
            .unwrap();
    }
    draft
}

fn filled_draft() -> FormDraft {
    let mut draft = draft_with_images(0);
    draft.set_category("landscape");
    draft.set_title("Harbour at dusk");
    draft.set_description("Taken from the pier");
    draft
}

#[test]
fn test_scenario_full_draft() {
    let mut draft = draft_with_images(3);
    let outcome = draft.add_image(&policy(), FileCandidate::new("d.png", MB, "image/png"));

    assert_eq!(outcome, Err(Rejection::TooManyFiles { max_count: 3 }));
    assert_eq!(draft.images().len(), 3);
}

#[test]
fn test_scenario_too_large() {
    let mut draft = draft_with_images(2);
    let outcome = draft.add_image(&policy(), FileCandidate::new("big.jpg", 6 * MB, "image/jpeg"));

    assert_eq!(outcome.unwrap_err().reason(), RejectionReason::TooLarge);
    assert_eq!(draft.images().len(), 2);
}

#[test]
fn test_scenario_unsupported_type() {
    let mut draft = draft_with_images(2);
    let outcome = draft.add_image(&policy(), FileCandidate::new("anim.gif", MB, "image/gif"));

    assert_eq!(outcome.unwrap_err().reason(), RejectionReason::UnsupportedType);
    assert_eq!(draft.images().len(), 2);
}

#[test]
fn test_scenario_accepted() {
    let mut draft = draft_with_images(2);
    let outcome = draft.add_image(&policy(), FileCandidate::new("last.png", MB, "image/png"));

    assert_eq!(outcome, Ok(Accepted));
    assert_eq!(draft.images().len(), 3);
    assert_eq!(draft.images()[2].name, "last.png");
}

#[test]
fn test_add_images_stops_at_limit_without_truncating() {
    let policy = policy();
    let mut draft = FormDraft::new();
    let files = vec![
        FileCandidate::new("1.png", MB, "image/png"),
        FileCandidate::new("2.gif", MB, "image/gif"),
        FileCandidate::new("3.jpg", MB, "image/jpeg"),
        FileCandidate::new("4.png", MB, "image/png"),
        FileCandidate::new("5.png", MB, "image/png"),
    ];

    let outcomes = draft.add_images(&policy, files);
    let reasons: Vec<Option<RejectionReason>> = outcomes
        .iter()
        .map(|o| o.as_ref().err().map(Rejection::reason))
        .collect();

    assert_eq!(
        reasons,
        vec![
            None,
            Some(RejectionReason::UnsupportedType),
            None,
            None,
            Some(RejectionReason::TooManyFiles),
        ]
    );

    let names: Vec<&str> = draft.images().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["1.png", "3.jpg", "4.png"]);
}

#[test]
fn test_count_never_exceeds_limit() {
    let policy = policy();
    let mut draft = FormDraft::new();

    for i in 0..20 {
        let _ = draft.add_image(&policy, FileCandidate::new(format!("{i}.png"), MB, "image/png"));
        assert!(draft.images().len() <= policy.max_count());
    }
    assert_eq!(draft.remaining_slots(&policy), 0);
}

#[test]
fn test_same_file_twice_is_allowed() {
    let policy = policy();
    let mut draft = FormDraft::new();
    let file = FileCandidate::new("twice.png", MB, "image/png");

    assert!(draft.add_image(&policy, file.clone()).is_ok());
    assert!(draft.add_image(&policy, file).is_ok());
    assert_eq!(draft.images().len(), 2);
}

#[test]
fn test_clear_images() {
    let mut draft = draft_with_images(3);
    draft.clear_images();
    assert!(draft.images().is_empty());
    assert_eq!(draft.remaining_slots(&policy()), 3);
}

#[test]
fn test_submit_complete_draft() {
    let mut draft = filled_draft();
    draft
        .add_image(&policy(), FileCandidate::new("pier.jpg", 2 * MB, "image/jpeg"))
        .unwrap();

    let submission = draft.submit().unwrap();
    assert_eq!(submission.category, "landscape");
    assert_eq!(submission.title, "Harbour at dusk");
    assert_eq!(submission.description, "Taken from the pier");
    assert_eq!(submission.images.len(), 1);
    assert_eq!(submission.images[0].name.as_deref(), Some("pier.jpg"));
    assert_eq!(submission.images[0].size, 2 * MB);
    assert_eq!(submission.images[0].mime_type, "image/jpeg");
}

#[test]
fn test_submit_without_images() {
    let submission = filled_draft().submit().unwrap();
    assert!(submission.images.is_empty());
}

#[test]
fn test_submit_missing_fields() {
    let cases: [(&str, fn(&mut FormDraft)); 3] = [
        ("category", |d| d.set_category("")),
        ("title", |d| d.set_title("  ")),
        ("description", |d| d.set_description("\n")),
    ];

    for (expected, blank) in cases {
        let mut draft = filled_draft();
        blank(&mut draft);

        match draft.submit() {
            Err(Error::MissingField(field)) => assert_eq!(field, expected),
            other => panic!("Expected MissingField({expected}), got {other:?}"),
        }
    }
}
