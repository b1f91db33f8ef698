use exercise_export::export::{ExportOptions, export_to_writer};
use exercise_export::{ExportError, source};
use std::fs;
use tempfile::tempdir;

const CATALOG: &str = r#"[
  {"id":"13ea3417-4c7f-4385-8877-0d82ed594bf1","name":"Ab wheel rollout",
   "instructions":"Kneel on the floor\nRoll the wheel forward",
   "video_url":"https://example.com/gifs/AB%20Wheel_Female.gif",
   "created_at":"2025-04-22 20:37:38.504762+00","type":"abs",
   "difficulty":null,"category_id":null,"is_variation":false,
   "equipment":"{ab_wheel}","muscle":null},
  {"id":"b943ad86-373b-4bbd-aa33-1966433c3464","name":"Barbell curl",
   "instructions":"Stand upright holding a barbell\nCurl the bar",
   "video_url":"https://example.com/gifs/Barbell%20Curl_female.gif",
   "created_at":"2025-04-22 20:37:38.504762+00","type":"biceps",
   "difficulty":null,"category_id":null,"is_variation":false,
   "equipment":"{barbell}","muscle":null}
]"#;

#[test]
fn test_load_file_and_export() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("exercises_data.json");
    fs::write(&data, CATALOG).unwrap();

    let records = source::load_file(&data).unwrap();
    assert_eq!(records.len(), 2);

    let mut buf = Vec::new();
    let rep = export_to_writer(&records, &mut buf, &ExportOptions::default()).unwrap();
    assert_eq!(rep.written, 2);
    let s = String::from_utf8(buf).unwrap();
    assert!(s.contains("Ab wheel rollout") && s.contains("Barbell curl"));
}

#[test]
fn test_load_file_missing() {
    let dir = tempdir().unwrap();
    let err = source::load_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ExportError::SourceUnavailable(_)));
}

#[test]
fn test_load_file_not_an_array() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("exercises_data.json");
    fs::write(&data, r#"{"id":"1"}"#).unwrap();
    let err = source::load_file(&data).unwrap_err();
    assert!(matches!(err, ExportError::SourceUnavailable(_)));
}

#[test]
fn test_load_file_malformed_json() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("exercises_data.json");
    fs::write(&data, "[{not json").unwrap();
    let err = source::load_file(&data).unwrap_err();
    assert!(matches!(err, ExportError::Json(_)));
}
