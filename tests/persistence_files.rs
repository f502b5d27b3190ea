use shape_paint::{Command, Document, ShapeColor, ShapeKind};
use tempfile::TempDir;

fn create_test_document() -> Document {
    let mut doc = Document::new();
    doc.set_color(ShapeColor::Red);
    doc.set_kind(ShapeKind::Rectangle);
    doc.begin_shape(10, 10);
    doc.update_active_shape(50, 40);
    doc.set_color(ShapeColor::Green);
    doc.set_kind(ShapeKind::Ellipse);
    doc.begin_shape(-20, 300);
    doc.update_active_shape(-60, 280);
    doc.set_kind(ShapeKind::Point);
    doc.begin_shape(7, 7);
    doc
}

#[test]
fn test_bytes_round_trip() {
    let doc = create_test_document();
    let bytes = doc.serialize().unwrap();

    let mut restored = Document::new();
    restored.deserialize(&bytes).unwrap();
    assert_eq!(restored.shapes(), doc.shapes());
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drawing.json");
    let doc = create_test_document();
    doc.save(&path).unwrap();

    let mut restored = Document::new();
    restored.begin_shape(1, 1);
    restored.load(&path).unwrap();
    assert_eq!(restored.shapes(), doc.shapes());

    // No temporary file is left behind
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_malformed_bytes_leave_history_untouched() {
    let mut doc = create_test_document();
    let before = doc.clone();

    let malformed: [&[u8]; 4] = [
        b"not json",
        br#"{ "version": 1 }"#,
        br#"{ "version": 99, "shapes": [] }"#,
        br#"{ "version": 1, "shapes": [ { "color": "red" } ] }"#,
    ];
    for garbage in malformed {
        let err = doc.deserialize(garbage).unwrap_err();
        assert!(err.is_decode_failure(), "unexpected error: {err}");
        assert_eq!(doc, before);
    }
}

#[test]
fn test_load_missing_file_is_a_decode_failure() {
    let dir = TempDir::new().unwrap();
    let mut doc = create_test_document();
    let before = doc.clone();

    let err = doc.load(&dir.path().join("missing.json")).unwrap_err();
    assert!(err.is_decode_failure());
    assert_eq!(doc, before);
}

#[test]
fn test_save_to_unwritable_destination() {
    let dir = TempDir::new().unwrap();
    let doc = create_test_document();

    let err = doc.save(&dir.path().join("no_such_dir").join("drawing.json")).unwrap_err();
    assert!(err.is_storage_failure());
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drawing.json");
    let doc = create_test_document();
    doc.save(&path).unwrap();
    let saved = std::fs::read(&path).unwrap();

    // A directory squatting on the temporary name makes the write fail
    std::fs::create_dir(dir.path().join(".drawing.json.tmp")).unwrap();
    let mut changed = doc.clone();
    changed.reset();
    assert!(changed.save(&path).unwrap_err().is_storage_failure());

    assert_eq!(std::fs::read(&path).unwrap(), saved);
}

#[test]
fn test_save_and_load_commands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commands.json");
    let mut doc = create_test_document();
    let original = doc.shapes().to_vec();

    Command::Save(path.clone()).execute(&mut doc).unwrap();
    Command::Reset.execute(&mut doc).unwrap();
    assert!(doc.is_empty());

    Command::Load(path).execute(&mut doc).unwrap();
    assert_eq!(doc.shapes(), original.as_slice());
}

#[test]
fn test_empty_history_round_trips() {
    let doc = Document::new();
    let mut restored = create_test_document();
    restored.deserialize(&doc.serialize().unwrap()).unwrap();
    assert!(restored.is_empty());
}
