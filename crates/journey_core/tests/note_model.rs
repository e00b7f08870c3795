use journey_core::{Note, NoteValidationError};
use uuid::Uuid;

#[test]
fn note_new_sets_fresh_id_and_timestamp() {
    let before = now_epoch_ms();
    let note = Note::new("hello").unwrap();
    let after = now_epoch_ms();

    assert!(!note.id.is_nil());
    assert_eq!(note.content, "hello");
    assert!(note.created_at >= before && note.created_at <= after);
}

#[test]
fn note_ids_are_unique() {
    let a = Note::new("same").unwrap();
    let b = Note::new("same").unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn note_new_rejects_blank_content() {
    for blank in ["", " ", "\n\n", "\t \r\n"] {
        assert_eq!(
            Note::new(blank).unwrap_err(),
            NoteValidationError::BlankContent
        );
    }
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Note::with_id(Uuid::nil(), "invalid", 0).unwrap_err();
    assert_eq!(err, NoteValidationError::NilId);
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note::with_id(id, "line one\nline two", 1_700_000_000_000).unwrap();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["content"], "line one\nline two");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn deserialize_rejects_blank_content() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "content": "   ",
        "created_at": 0
    });

    let err = serde_json::from_value::<Note>(value).unwrap_err();
    assert!(
        err.to_string().contains("note content cannot be blank"),
        "unexpected error: {err}"
    );
}

fn now_epoch_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
