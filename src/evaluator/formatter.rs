//! @ai:module:intent Flatten search results into one text blob
//! @ai:module:layer domain
//! @ai:module:public_api format_search_results
//! @ai:module:stateless true

use crate::runner::client::SearchResultItem;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// @ai:intent Render results as 1-indexed title/URL/content blocks in input order
/// @ai:effects pure
/// @ai:example ([]) -> ""
pub fn format_search_results(results: &[SearchResultItem]) -> String {
    let mut lines = Vec::with_capacity(results.len() * 3);

    for (i, result) in results.iter().enumerate() {
        lines.push(format!("\n[{}] {}", i + 1, or_placeholder(&result.title, "No title")));
        lines.push(format!("URL: {}", or_placeholder(&result.url, "No URL")));
        lines.push(format!("Content: {}", or_placeholder(&result.content, "No content")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(title: &str, url: &str, content: &str) -> SearchResultItem {
        SearchResultItem {
            title: title.to_string(),
            url: url.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_empty_results_yield_empty_string() {
        assert_eq!(format_search_results(&[]), "");
    }

    #[test]
    fn test_blocks_are_one_indexed_in_order() {
        let results = vec![
            item("Solar", "https://a.example", "Solar power"),
            item("Wind", "https://b.example", "Wind energy"),
        ];

        let expected = "\n[1] Solar\nURL: https://a.example\nContent: Solar power\n\
                        \n[2] Wind\nURL: https://b.example\nContent: Wind energy";
        assert_eq!(format_search_results(&results), expected);
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let formatted = format_search_results(&[item("", "", "")]);
        assert!(formatted.contains("[1] No title"));
        assert!(formatted.contains("URL: No URL"));
        assert!(formatted.contains("Content: No content"));
    }
}
