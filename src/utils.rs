// src/utils.rs
use scraper::Html;

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop HTML markup such as hh.ru `<highlighttext>` tags and decode entities
pub fn strip_markup(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let plain = fragment.root_element().text().collect::<String>();
    clean_text(&plain)
}

/// Split user input into keywords on whitespace
pub fn parse_keywords(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}
