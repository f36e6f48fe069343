use std::collections::HashMap;

use opentelemetry::Value;

/// Read access to named attributes of an instrumented object.
///
/// Instrumentation libraries implement this for the concrete types they
/// inspect (a connection, a client config, ...). Returning `None` means the
/// object has no such attribute (or it is currently unset); the name is then
/// skipped during extraction instead of producing an empty entry.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<Value>;
}

/// Extracts the listed attributes of `obj` into a string-valued map.
///
/// Entries of `existing` (if any) are copied into the result first, then each
/// name in `attributes` is looked up on `obj` in order. Absent attributes are
/// skipped, present values are stringified and overwrite any previous entry
/// under the same key, including one copied from `existing`.
///
/// Neither `obj` nor `existing` is mutated.
#[must_use]
pub fn extract_attributes_from_object<O>(
    obj: &O,
    attributes: &[&str],
    existing: Option<&HashMap<String, String>>,
) -> HashMap<String, String>
where
    O: AttributeSource + ?Sized,
{
    let mut extracted = existing.cloned().unwrap_or_default();
    for attr in attributes {
        if let Some(value) = obj.attribute(attr) {
            extracted.insert((*attr).to_string(), value.as_str().into_owned());
        }
    }
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;

    struct DbConnection {
        host: &'static str,
        port: i64,
        user: Option<&'static str>,
    }

    impl AttributeSource for DbConnection {
        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "host" => Some(self.host.into()),
                "port" => Some(self.port.into()),
                "user" => self.user.map(Value::from),
                _ => None,
            }
        }
    }

    fn connection() -> DbConnection {
        DbConnection {
            host: "db.internal",
            port: 5432,
            user: None,
        }
    }

    #[test]
    fn empty_attribute_list_returns_copy_of_existing() {
        let existing = HashMap::from([("a".to_string(), "1".to_string())]);
        let extracted = extract_attributes_from_object(&connection(), &[], Some(&existing));
        assert!(extracted == existing);
        // source map untouched
        assert!(existing.len() == 1);
    }

    #[test]
    fn empty_attribute_list_without_existing_returns_empty_map() {
        let extracted = extract_attributes_from_object(&connection(), &[], None);
        assert!(extracted.is_empty());
    }

    #[test]
    fn absent_attributes_are_skipped() {
        let extracted =
            extract_attributes_from_object(&connection(), &["missing_field", "user"], None);
        assert!(extracted.is_empty());
    }

    #[test]
    fn values_are_stringified() {
        let extracted = extract_attributes_from_object(&connection(), &["host", "port"], None);
        assert!(extracted.get("host").map(String::as_str) == Some("db.internal"));
        assert!(extracted.get("port").map(String::as_str) == Some("5432"));
    }

    #[test]
    fn extraction_overwrites_existing_entry_under_same_key() {
        let existing = HashMap::from([
            ("port".to_string(), "old".to_string()),
            ("kept".to_string(), "as-is".to_string()),
        ]);
        let extracted = extract_attributes_from_object(&connection(), &["port"], Some(&existing));
        assert!(extracted.get("port").map(String::as_str) == Some("5432"));
        assert!(extracted.get("kept").map(String::as_str) == Some("as-is"));
        assert!(existing.get("port").map(String::as_str) == Some("old"));
    }
}
