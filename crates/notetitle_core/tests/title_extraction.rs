use notetitle_core::{extract_title, TITLE_MAX_CHARS, TRUNCATION_MARKER, UNTITLED};

fn sample_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "   \n  ".to_string(),
        "#".to_string(),
        "- ".to_string(),
        "# Heading\nBody".to_string(),
        "## - Title".to_string(),
        "Sample Note Title\n\nThis is the content of the note.".to_string(),
        "A".repeat(60),
        "#".repeat(70),
        format!("# {}", "word ".repeat(30)),
        "ü".repeat(80),
        "🙂".repeat(51),
        "\u{00a0}\u{2003}spaced\u{2003}".to_string(),
        "\n\n\n* bullet after blanks".to_string(),
    ]
}

#[test]
fn every_title_is_bounded_and_non_blank() {
    for input in sample_inputs() {
        let title = extract_title(&input);
        assert!(
            title.char_len() <= TITLE_MAX_CHARS,
            "title too long for {input:?}: {title}"
        );
        assert!(!title.as_str().trim().is_empty(), "blank title for {input:?}");
    }
}

#[test]
fn documented_examples_hold() {
    assert_eq!(extract_title(""), "Untitled");
    assert_eq!(extract_title("   \n  "), "Untitled");
    assert_eq!(extract_title("# Heading\nBody"), "Heading");
    assert_eq!(extract_title("- item"), "item");
    assert_eq!(
        extract_title("Sample Note Title\n\nThis is the content of the note."),
        "Sample Note Title"
    );

    let long = extract_title(&"A".repeat(60));
    assert_eq!(long.as_str(), format!("{}...", "A".repeat(47)));
    assert_eq!(long.char_len(), 50);
}

#[test]
fn truncated_titles_end_with_marker() {
    let title = extract_title(&format!("# {}", "word ".repeat(30)));
    assert!(title.as_str().ends_with(TRUNCATION_MARKER));
    assert!(title.as_str().starts_with("word word"));
    assert_eq!(title.char_len(), TITLE_MAX_CHARS);
}

#[test]
fn heading_run_of_only_hashes_is_untitled() {
    assert_eq!(extract_title(&"#".repeat(70)), UNTITLED);
}

#[test]
fn emoji_titles_truncate_on_char_boundaries() {
    let title = extract_title(&"🙂".repeat(51));
    assert_eq!(title.as_str(), format!("{}...", "🙂".repeat(47)));
}

#[test]
fn unicode_whitespace_is_trimmed() {
    assert_eq!(extract_title("\u{00a0}\u{2003}spaced\u{2003}"), "spaced");
}

#[test]
fn title_serializes_as_plain_string() {
    let json = serde_json::to_value(extract_title("# Weekly plan")).unwrap();
    assert_eq!(json, serde_json::json!("Weekly plan"));
}

#[test]
fn title_converts_into_owned_string() {
    let owned: String = extract_title("+ shopping").into();
    assert_eq!(owned, "shopping");
    assert_eq!(extract_title("+ shopping").to_string(), "shopping");
}
