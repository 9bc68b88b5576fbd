//! Instruction texts sent to the text-generation model.

/// System instructions for field extraction.
pub const EXTRACTOR_SYSTEM: &str = "Extract clean product fields from the user's messy notes. \
Use numbers when provided. Use null if a field is unknown.";

/// System instructions for translation.
pub const TRANSLATOR_SYSTEM: &str = "You are a careful translator. Preserve product terms/units.";

/// System instructions for marketing copy.
pub const COPYWRITER_SYSTEM: &str = "You are an e-commerce copywriter. \
Write clear, trustworthy copy for small Indian sellers.";

/// Extraction request built from the seller's text and optional image clues.
pub fn extraction_request(
    text: &str,
    image_caption: Option<&str>,
    format_instructions: &str,
) -> String {
    format!(
        "User text:\n{text}\n\nExtra clues (optional): {}\n{format_instructions}",
        image_caption.unwrap_or_default()
    )
}

pub fn translation_request(text: &str, target_lang: &str) -> String {
    format!("Translate to {target_lang}:\n{text}")
}

pub fn copy_request(structured_json: &str, tone: &str) -> String {
    format!(
        "Tone: {tone}\nUse this structured data:\n```json\n{structured_json}\n```\n\
Write an SEO-friendly description (70-120 words)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_request_leaves_clue_empty_without_caption() {
        let request = extraction_request("blue bottle", None, "FORMAT");
        assert!(request.contains("User text:\nblue bottle"));
        assert!(request.contains("Extra clues (optional): \nFORMAT"));
    }

    #[test]
    fn translation_request_names_target_language() {
        assert_eq!(translation_request("Kurta", "hi"), "Translate to hi:\nKurta");
    }
}
