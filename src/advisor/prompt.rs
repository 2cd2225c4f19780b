//! Prompt templating and response extraction
//!
//! Templates use `{{{field}}}` placeholders that are filled from the
//! camelCase fields of a serialized input. Absent or null fields render as
//! an empty string, and whole-valued floats render without a decimal point.

use super::AdvisorError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};

const OPEN: &str = "{{{";
const CLOSE: &str = "}}}";

/// Fill every `{{{name}}}` placeholder in `template` from `input`
pub fn render<T: Serialize + ?Sized>(template: &str, input: &T) -> Result<String, AdvisorError> {
    let value =
        serde_json::to_value(input).map_err(|e| AdvisorError::InvalidInput(e.to_string()))?;
    let fields = match value {
        Value::Object(map) => map,
        other => {
            return Err(AdvisorError::InvalidInput(format!(
                "prompt input must serialize to an object, got {}",
                other
            )))
        }
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated placeholder, keep it verbatim
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = after_open[..end].trim();
        match fields.get(name) {
            Some(Value::String(s)) => out.push_str(s),
            Some(Value::Number(n)) => out.push_str(&render_number(n)),
            Some(Value::Null) | None => {}
            Some(other) => out.push_str(&other.to_string()),
        }
        rest = &after_open[end + CLOSE.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

fn render_number(n: &Number) -> String {
    match n.as_f64() {
        // f64's Display drops a zero fraction: 100.0 prints as "100"
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Parse a provider reply as JSON, tolerating a surrounding markdown fence
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, AdvisorError> {
    Ok(serde_json::from_str(strip_code_fence(reply))?)
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag, with or without a newline after it
    let body = body
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        .trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        place_name: String,
        level: f64,
        note: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reply {
        value: u32,
    }

    fn sample() -> Sample {
        Sample {
            place_name: "Ben Nevis".to_string(),
            level: 12.5,
            note: None,
        }
    }

    #[test]
    fn test_render_substitutes_fields() {
        let out = render("At {{{placeName}}}: {{{level}}} lux", &sample()).unwrap();
        assert_eq!(out, "At Ben Nevis: 12.5 lux");
    }

    #[test]
    fn test_render_whole_floats_without_fraction() {
        let input = Sample {
            level: 100.0,
            ..sample()
        };
        let out = render("{{{level}}} lux", &input).unwrap();
        assert_eq!(out, "100 lux");

        let out = render("{{{level}}} lux", &Sample { level: 0.0, ..sample() }).unwrap();
        assert_eq!(out, "0 lux");
    }

    #[test]
    fn test_render_accepts_unsized_input() {
        let items: &[u8] = &[1, 2];
        assert!(matches!(
            render("{{{x}}}", items),
            Err(AdvisorError::InvalidInput(_))
        ));
        assert!(render("{{{x}}}", "text").is_err());
    }

    #[test]
    fn test_render_missing_field_is_empty() {
        let out = render("Note: [{{{note}}}] [{{{unknown}}}]", &sample()).unwrap();
        assert_eq!(out, "Note: [] []");
    }

    #[test]
    fn test_render_keeps_unterminated_placeholder() {
        let out = render("Broken {{{placeName", &sample()).unwrap();
        assert_eq!(out, "Broken {{{placeName");
    }

    #[test]
    fn test_render_rejects_non_object_input() {
        assert!(render("x", &42).is_err());
    }

    #[test]
    fn test_parse_plain_json() {
        let reply: Reply = parse_reply(r#" {"value": 7} "#).unwrap();
        assert_eq!(reply, Reply { value: 7 });
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply: Reply = parse_reply("```json\n{\"value\": 3}\n```").unwrap();
        assert_eq!(reply, Reply { value: 3 });

        let reply: Reply = parse_reply("```\n{\"value\": 4}\n```").unwrap();
        assert_eq!(reply, Reply { value: 4 });
    }

    #[test]
    fn test_parse_single_line_fence() {
        let reply: Reply = parse_reply("```json {\"value\":1}```").unwrap();
        assert_eq!(reply, Reply { value: 1 });

        let reply: Reply = parse_reply("```{\"value\":2}```").unwrap();
        assert_eq!(reply, Reply { value: 2 });

        let reply: Reply = parse_reply("```json{\"value\":5}```").unwrap();
        assert_eq!(reply, Reply { value: 5 });
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let result: Result<Reply, _> = parse_reply("I think you should use SOS.");
        assert!(matches!(result, Err(AdvisorError::Malformed(_))));
    }
}
