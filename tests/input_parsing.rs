//! Tests for input parsing (blank lines, field normalization, trace-only lines)

use redirect_check::{parse_line, parse_lines, TestCase};

#[test]
fn test_blank_line_parsing() {
    let lines = vec![
        "https://example.com",
        "",
        "   ",  // Whitespace only
        "\t\t", // Tabs only
        "https://rust-lang.org",
    ];

    let cases = parse_lines(lines);

    // Should have 2 cases (blanks skipped)
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].source_url, "https://example.com");
    assert_eq!(cases[1].source_url, "https://rust-lang.org");
}

#[test]
fn test_csv_and_txt_style_lines() {
    let cases = parse_lines(["old.example.com,www.example.com", "legacy.example.com"]);

    assert_eq!(
        cases,
        vec![
            TestCase {
                source_url: "http://old.example.com".to_string(),
                expected_url: Some("http://www.example.com".to_string()),
            },
            TestCase {
                source_url: "http://legacy.example.com".to_string(),
                expected_url: None,
            },
        ]
    );
}

#[test]
fn test_each_field_normalized_independently() {
    let case = parse_line("https://a.example.com,b.example.com/landing").expect("should parse");
    assert_eq!(case.source_url, "https://a.example.com");
    assert_eq!(
        case.expected_url.as_deref(),
        Some("http://b.example.com/landing")
    );
}

#[test]
fn test_windows_line_endings() {
    let case = parse_line("a.example.com,b.example.com\r").expect("should parse");
    assert_eq!(case.expected_url.as_deref(), Some("http://b.example.com"));
}

#[test]
fn test_hash_lines_are_not_comments() {
    // Every non-empty line yields a result; nothing else is filtered
    let case = parse_line("#fragment.example.com").expect("should parse");
    assert_eq!(case.source_url, "http://#fragment.example.com");
}
