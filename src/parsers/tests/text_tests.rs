use crate::parsers::text;

#[test]
fn test_empty_text() {
    assert_eq!(text::normalize(""), "");
    assert_eq!(text::normalize("   \n   \t   \r\n   "), "");
}

#[test]
fn test_single_line() {
    assert_eq!(text::normalize("Hello, world!"), "Hello, world!");
}

#[test]
fn test_line_breaks_are_kept() {
    assert_eq!(text::normalize("Line 1\nLine 2\nLine 3"), "Line 1\nLine 2\nLine 3");
}

#[test]
fn test_blank_runs_collapse_to_one() {
    let input = "Paragraph 1.\n\n\n\nParagraph 2.\n  \n\t\nParagraph 3.";
    assert_eq!(
        text::normalize(input),
        "Paragraph 1.\n\nParagraph 2.\n\nParagraph 3."
    );
}

#[test]
fn test_trailing_whitespace_trimmed_indentation_kept() {
    let input = "\n\n- item   \n  - nested\t\n\n    code block  \n\n";
    assert_eq!(text::normalize(input), "- item\n  - nested\n\n    code block");
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(text::normalize("a\r\nb\r\n\r\n\r\nc"), "a\nb\n\nc");
}

#[test]
fn test_split_into_paragraphs() {
    let paragraphs = text::split_into_paragraphs("a\nb\n\n\nc\n");
    assert_eq!(paragraphs, vec![vec!["a", "b"], vec!["c"]]);
}

#[test]
fn test_fenced_code_is_kept_verbatim() {
    let input = "Intro\n\n\n```rust\nfn a() {}  \n\n\n\nfn b() {}\n```\n\n\nOutro";
    assert_eq!(
        text::normalize(input),
        "Intro\n\n```rust\nfn a() {}  \n\n\n\nfn b() {}\n```\n\nOutro"
    );
}

#[test]
fn test_tilde_fence_and_unclosed_fence() {
    assert_eq!(text::normalize("~~~\na\n\n\nb\n~~~"), "~~~\na\n\n\nb\n~~~");
    assert_eq!(text::normalize("```\nx\n\n\ny"), "```\nx\n\n\ny");
}
