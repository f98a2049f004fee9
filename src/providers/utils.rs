/// Turns an inbound image payload into something a vision API accepts.
///
/// Data URLs and http(s) URLs pass through; anything else is taken to be
/// bare base64 and wrapped as a JPEG data URL.
pub fn to_image_url(payload: &str) -> String {
    let payload = payload.trim();
    if payload.starts_with("data:")
        || payload.starts_with("http://")
        || payload.starts_with("https://")
    {
        payload.to_string()
    } else {
        format!("data:image/jpeg;base64,{}", payload)
    }
}

/// Strips a fenced code block wrapper, if the model added one.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let body = rest.strip_suffix("```").unwrap_or(rest);
            // Drop the language tag on the opening line, e.g. ```json
            match body.split_once('\n') {
                Some((tag, content)) if !tag.trim_start().starts_with('{') => content.trim(),
                _ => body.trim(),
            }
        }
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_passes_through() {
        let url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(to_image_url(url), url);
        assert_eq!(to_image_url("https://example.com/a.jpg"), "https://example.com/a.jpg");
    }

    #[test]
    fn test_bare_base64_is_wrapped() {
        assert_eq!(to_image_url(" /9j/4AAQ "), "data:image/jpeg;base64,/9j/4AAQ");
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```{\"a\": 1}```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }
}
