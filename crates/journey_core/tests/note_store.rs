use journey_core::{InMemoryNoteRepository, NoteService, NoteServiceError, SAMPLE_NOTES};

fn empty_service() -> NoteService<InMemoryNoteRepository> {
    NoteService::new(InMemoryNoteRepository::new())
}

fn contents(service: &NoteService<InMemoryNoteRepository>, query: &str) -> Vec<String> {
    service
        .filter_notes(query)
        .into_iter()
        .map(|note| note.content)
        .collect()
}

#[test]
fn non_blank_add_becomes_first_note() {
    let mut service = empty_service();
    for content in ["a", " leading", "multi\nline", "日本語", "x "] {
        let id = service.add_note(content).unwrap();
        let listed = service.list_notes();
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].content, content);
    }
}

#[test]
fn blank_add_fails_and_leaves_store_unchanged() {
    let mut service = NoteService::with_sample_notes(InMemoryNoteRepository::new()).unwrap();
    let before = service.list_notes();

    for blank in ["", "   ", "\n", "\t\r\n "] {
        let err = service.add_note(blank).unwrap_err();
        assert_eq!(err, NoteServiceError::BlankContent);
    }

    assert_eq!(service.list_notes(), before);
}

#[test]
fn sequential_adds_are_newest_first() {
    let mut service = empty_service();
    let n = 25;
    for idx in 0..n {
        service.add_note(format!("note {idx}")).unwrap();
    }

    let listed = service.list_notes();
    assert_eq!(listed.len(), n);
    for (position, note) in listed.iter().enumerate() {
        assert_eq!(note.content, format!("note {}", n - 1 - position));
    }
}

#[test]
fn duplicate_content_is_kept() {
    let mut service = empty_service();
    let first = service.add_note("same").unwrap();
    let second = service.add_note("same").unwrap();
    assert_ne!(first, second);
    assert_eq!(service.note_count(), 2);
}

#[test]
fn blank_filter_equals_list() {
    let mut service = empty_service();
    assert_eq!(service.filter_notes(""), service.list_notes());

    service.add_note("one").unwrap();
    service.add_note("two").unwrap();
    assert_eq!(service.filter_notes(""), service.list_notes());
    assert_eq!(service.filter_notes("  "), service.list_notes());
}

#[test]
fn filter_is_case_insensitive() {
    let mut service = empty_service();
    service.add_note("Hello World").unwrap();
    assert_eq!(contents(&service, "hello"), vec!["Hello World"]);
    assert_eq!(contents(&service, "WORLD"), vec!["Hello World"]);
}

#[test]
fn filter_excludes_non_matching_notes() {
    let mut service = empty_service();
    service.add_note("abc").unwrap();
    service.add_note("xyz").unwrap();
    assert_eq!(contents(&service, "xy"), vec!["xyz"]);
}

#[test]
fn filter_on_empty_store_or_without_matches_is_empty() {
    let mut service = empty_service();
    assert!(service.filter_notes("anything").is_empty());

    service.add_note("abc").unwrap();
    assert!(service.filter_notes("zzz").is_empty());
}

#[test]
fn seeded_store_add_then_filter_scenario() {
    let mut service = NoteService::with_sample_notes(InMemoryNoteRepository::new()).unwrap();
    assert_eq!(service.note_count(), SAMPLE_NOTES.len());

    let id = service.add_note("test note").unwrap();
    let listed = service.list_notes();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].content, "test note");

    let hits = service.filter_notes("test");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);
}
