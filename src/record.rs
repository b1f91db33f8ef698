use serde_json::{Map, Value};

/// One exercise catalog entry: a loosely-typed mapping from field name to
/// JSON value. Key order is whatever the source delivered; the exporter
/// imposes the column order of [`FIELDS`].
pub type Record = Map<String, Value>;

/// The eleven fields every record must carry, in output column order.
pub const FIELDS: [&str; 11] = [
    "id",
    "name",
    "instructions",
    "video_url",
    "created_at",
    "type",
    "difficulty",
    "category_id",
    "is_variation",
    "equipment",
    "muscle",
];

/// Render a field value as a CSV cell. Null becomes the empty string;
/// everything else keeps its string form verbatim (`equipment` stays an
/// opaque set-literal string, `created_at` is not reparsed).
pub(crate) fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
