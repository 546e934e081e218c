use serde_json::Value;

/// The parts of a Cloudinary resource description this crate looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetMetadata {
    pub public_id: Option<String>,
    /// The resource's `context` object, if any.
    pub context: Option<Value>,
    /// `error.message` when the API answered with an error document.
    pub remote_error: Option<String>,
}

impl AssetMetadata {
    /// Pick the known fields out of a resource document. Unexpected shapes
    /// leave the corresponding field empty instead of failing.
    pub fn from_value(value: &Value) -> Self {
        Self {
            public_id: value
                .get("public_id")
                .and_then(Value::as_str)
                .map(str::to_owned),
            context: value.get("context").filter(|c| !c.is_null()).cloned(),
            remote_error: value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }

    /// Raw `context.custom.deviceId`, or an empty string if it is absent at
    /// any level.
    pub fn raw_owner_tag(&self) -> String {
        match self
            .context
            .as_ref()
            .and_then(|context| context.pointer("/custom/deviceId"))
        {
            Some(Value::String(tag)) => tag.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    /// Owner tag with percent-encoding removed.
    ///
    /// Uploaders store the tag url-encoded. A tag with a malformed escape,
    /// or one that does not decode to valid UTF-8, is returned as stored.
    pub fn owner_tag(&self) -> String {
        decode_owner_tag(self.raw_owner_tag())
    }
}

fn decode_owner_tag(raw: String) -> String {
    if !has_valid_escapes(&raw) {
        tracing::debug!("Owner tag has a malformed escape, using raw value");
        return raw;
    }

    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!("Owner tag is not valid UTF-8 once decoded, using raw value: {}", e);
            raw
        }
    }
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// Whether `device_id` may delete an asset tagged with `owner_tag`.
///
/// Both sides are compared after trimming surrounding whitespace.
pub fn is_owner(owner_tag: &str, device_id: &str) -> bool {
    owner_tag.trim() == device_id.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(value: Value) -> AssetMetadata {
        AssetMetadata::from_value(&value)
    }

    #[test]
    fn reads_owner_tag_from_custom_context() {
        let meta = metadata(json!({
            "public_id": "wedding/photo_1",
            "context": { "custom": { "deviceId": "abc-123", "caption": "hi" } }
        }));

        assert_eq!(meta.public_id.as_deref(), Some("wedding/photo_1"));
        assert_eq!(meta.owner_tag(), "abc-123");
    }

    #[test]
    fn missing_levels_yield_empty_tag() {
        for value in [
            json!({}),
            json!({ "context": null }),
            json!({ "context": {} }),
            json!({ "context": { "custom": {} } }),
            json!({ "context": { "custom": { "deviceId": null } } }),
            json!(null),
            json!([1, 2, 3]),
        ] {
            assert_eq!(metadata(value.clone()).owner_tag(), "", "{value}");
        }
    }

    #[test]
    fn decodes_percent_encoded_tag() {
        let meta = metadata(json!({
            "context": { "custom": { "deviceId": "device%20%C3%A7%40home" } }
        }));

        assert_eq!(meta.raw_owner_tag(), "device%20%C3%A7%40home");
        assert_eq!(meta.owner_tag(), "device ç@home");
    }

    #[test]
    fn undecodable_tag_falls_back_to_raw() {
        // %C3 alone is a truncated UTF-8 sequence.
        let meta = metadata(json!({
            "context": { "custom": { "deviceId": "abc%C3" } }
        }));

        assert_eq!(meta.owner_tag(), "abc%C3");
    }

    #[test]
    fn malformed_escape_keeps_whole_tag_raw() {
        for raw in ["abc%zz%20", "100%%20x", "abc%2", "%"] {
            let meta = metadata(json!({ "context": { "custom": { "deviceId": raw } } }));
            assert_eq!(meta.owner_tag(), raw);
        }
    }

    #[test]
    fn escape_check() {
        assert!(has_valid_escapes("plain"));
        assert!(has_valid_escapes("a%20b%2Fc%c3%a7"));
        assert!(!has_valid_escapes("abc%zz%20"));
        assert!(!has_valid_escapes("trailing%4"));
        assert!(!has_valid_escapes("100%"));
    }

    #[test]
    fn captures_api_error_message() {
        let meta = metadata(json!({ "error": { "message": "Resource not found - photo_1" } }));

        assert_eq!(meta.remote_error.as_deref(), Some("Resource not found - photo_1"));
        assert_eq!(meta.owner_tag(), "");
    }

    #[test]
    fn ownership_ignores_surrounding_whitespace() {
        assert!(is_owner("abc", "abc"));
        assert!(is_owner(" abc\n", "\tabc "));
        assert!(!is_owner("abc", "xyz"));
        assert!(!is_owner("abc", "ABC"));
        assert!(!is_owner("a b c", "abc"));
    }
}
