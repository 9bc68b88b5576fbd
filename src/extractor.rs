//! Structured field extraction from free-form seller notes.

use schemars::schema_for;

use crate::domain::listing::ListingDraft;
use crate::gateway::{GatewayError, GatewayResult, ModelGateway};
use crate::prompts;

const EXTRACTION_TEMPERATURE: f32 = 0.2;
const EXTRACTION_MAX_TOKENS: u32 = 256;

/// Ask the text model for a [`ListingDraft`] and parse its answer.
pub async fn extract_fields<G>(
    gateway: &G,
    raw_text: &str,
    image_caption: Option<&str>,
) -> GatewayResult<ListingDraft>
where
    G: ModelGateway + ?Sized,
{
    let request = prompts::extraction_request(raw_text, image_caption, &format_instructions());
    let output = gateway
        .generate_text(
            prompts::EXTRACTOR_SYSTEM,
            &request,
            EXTRACTION_TEMPERATURE,
            EXTRACTION_MAX_TOKENS,
        )
        .await?;
    parse_draft(&output)
}

/// Output format description embedding the JSON schema of [`ListingDraft`].
pub fn format_instructions() -> String {
    let schema = schema_for!(ListingDraft);
    let schema_json = serde_json::to_string(&schema).unwrap_or_default();
    format!(
        "The output should be formatted as a JSON instance that conforms to the JSON schema below.\n\
```\n{schema_json}\n```\nReturn only the JSON object."
    )
}

/// Parse the model answer into a draft.
///
/// The answer may wrap the object in prose or a Markdown code fence; the
/// outermost `{ ... }` span is used.
pub fn parse_draft(output: &str) -> GatewayResult<ListingDraft> {
    let json = json_object(output)
        .ok_or_else(|| GatewayError::Parse(format!("no JSON object in model output: {output}")))?;

    let mut draft: ListingDraft = serde_json::from_str(json)
        .map_err(|e| GatewayError::Parse(format!("invalid listing fields: {e}")))?;

    draft.name = draft.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(GatewayError::Parse("extracted name is empty".to_string()));
    }
    Ok(draft)
}

fn json_object(output: &str) -> Option<&str> {
    let start = output.find('{')?;
    let end = output.rfind('}')?;
    (start < end).then(|| &output[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_json() {
        let output = "Here you go:\n```json\n{\"name\": \" Steel bottle \", \"price\": 250, \
\"unit\": \"piece\", \"tags\": [\"steel\", \"bottle\"], \"language\": \"en\"}\n```";

        let draft = parse_draft(output).unwrap();

        assert_eq!(draft.name, "Steel bottle");
        assert_eq!(draft.price, Some(250.0));
        assert_eq!(draft.unit.as_deref(), Some("piece"));
        assert_eq!(draft.tags, vec!["steel", "bottle"]);
        assert_eq!(draft.language.as_deref(), Some("en"));
        assert_eq!(draft.color, None);
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let draft = parse_draft(r#"{"name": "Tiffin box", "stock_qty": 12}"#).unwrap();
        assert!(draft.tags.is_empty());
        assert_eq!(draft.stock_qty, Some(12));
    }

    #[test]
    fn rejects_output_without_json() {
        let err = parse_draft("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn rejects_wrong_field_types() {
        let err = parse_draft(r#"{"name": "Mat", "price": "cheap"}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = parse_draft(r#"{"name": "  "}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn format_instructions_describe_every_field() {
        let instructions = format_instructions();
        for field in ["name", "price", "stock_qty", "tags", "language"] {
            assert!(instructions.contains(field), "missing {field}");
        }
    }
}
