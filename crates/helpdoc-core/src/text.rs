//! Text measurement and wrapping for terminal output.
//!
//! Every width here is a *visible* width: ANSI escape sequences count as zero
//! columns and wide characters count as their display width.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\x1b\[[0-9;:?<=>]*[ -/]*[@-~]",          // CSI (SGR, cursor movement, ...)
        r"|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)",    // OSC, BEL or ST terminated
        r"|\x1b[@-Z\\-_]",                         // two-byte Fe escapes
        r"|\x1b",                                  // stray ESC
    ))
    .expect("regex for ANSI escape sequences")
});

/// Remove ANSI escape sequences, borrowing when there is nothing to strip.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    ANSI_RE.replace_all(s, "")
}

/// Number of terminal columns `s` occupies.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_ref())
}

/// Pad a string with trailing spaces to a visible width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let current = visible_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

/// Prefix every non-blank line with `columns` spaces.
pub fn indent(text: &str, columns: usize) -> String {
    let pad = " ".repeat(columns);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap text to a given width, preserving newlines.
///
/// Existing line breaks are hard breaks. Runs of spaces between words are kept
/// on a line but dropped at a break. A word wider than `width` is never split;
/// it overflows onto its own line.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

/// [`wrap_lines`] joined back into a single string.
pub fn wrap(text: &str, width: usize) -> String {
    wrap_lines(text, width).join("\n")
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let body = paragraph.trim_start();
    let leading = &paragraph[..paragraph.len() - body.len()];

    let mut current = leading.to_string();
    let mut current_width = visible_width(leading);
    let mut has_word = false;

    for (gap, word) in words(body) {
        let word_width = visible_width(word);
        if has_word {
            let gap_width = visible_width(gap);
            if current_width + gap_width + word_width > width {
                lines.push(current.trim_end().to_string());
                current = word.to_string();
                current_width = word_width;
                continue;
            }
            current.push_str(gap);
            current_width += gap_width;
        }
        current.push_str(word);
        current_width += word_width;
        has_word = true;
    }

    lines.push(current.trim_end().to_string());
}

/// Split into `(preceding whitespace, word)` pairs; trailing whitespace is dropped.
fn words(s: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut gap_start = 0;
    let mut word_start: Option<usize> = None;

    for (idx, ch) in s.char_indices() {
        match (ch.is_whitespace(), word_start) {
            (true, Some(start)) => {
                out.push((&s[gap_start..start], &s[start..idx]));
                gap_start = idx;
                word_start = None;
            }
            (false, None) => word_start = Some(idx),
            _ => {}
        }
    }
    if let Some(start) = word_start {
        out.push((&s[gap_start..start], &s[start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_ansi_sgr() {
        assert_eq!(strip_ansi("\x1b[1mUSAGE\x1b[22m"), "USAGE");
    }

    #[test]
    fn test_strip_ansi_borrows_plain_text() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_ansi_osc_hyperlink() {
        let link = "\x1b]8;;https://example.com\x07docs\x1b]8;;\x07";
        assert_eq!(strip_ansi(link), "docs");
    }

    #[test]
    fn test_visible_width_ignores_styles() {
        assert_eq!(visible_width("\x1b[4mvalue\x1b[24m"), 5);
        assert_eq!(visible_width("--name=\x1b[4mname\x1b[24m"), 11);
    }

    #[test]
    fn test_visible_width_wide_chars() {
        assert_eq!(visible_width("日本"), 4);
        assert_eq!(visible_width("héllo"), 5);
    }

    #[test]
    fn test_pad_right_uses_visible_width() {
        assert_eq!(pad_right("hi", 5), "hi   ");
        assert_eq!(pad_right("hello", 3), "hello");
        assert_eq!(pad_right("\x1b[1mhi\x1b[22m", 4), "\x1b[1mhi\x1b[22m  ");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
    }

    #[test]
    fn test_wrap_simple() {
        let lines = wrap_lines("hello world foo bar", 10);
        assert_eq!(lines, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap_lines("hello\n\nworld", 20);
        assert_eq!(lines, vec!["hello", "", "world"]);
    }

    #[test]
    fn test_wrap_keeps_inner_spacing() {
        assert_eq!(wrap("force  it force  it", 12), "force  it\nforce  it");
    }

    #[test]
    fn test_wrap_keeps_leading_indent() {
        assert_eq!(wrap("  indented text", 40), "  indented text");
    }

    #[test]
    fn test_wrap_long_word_overflows() {
        let lines = wrap_lines("a supercalifragilistic word", 8);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn test_wrap_measures_styled_words() {
        let text = "\x1b[2mone two three\x1b[22m";
        let lines = wrap_lines(text, 7);
        assert_eq!(lines.len(), 2);
        assert_eq!(strip_ansi(&lines[0]), "one two");
        assert_eq!(strip_ansi(&lines[1]), "three");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 10), "");
    }

    proptest! {
        #[test]
        fn prop_styles_are_zero_width(text in "[a-z ]{0,40}") {
            let styled = format!("\x1b[1m{}\x1b[22m", text);
            prop_assert_eq!(visible_width(&styled), visible_width(&text));
            prop_assert_eq!(visible_width(&strip_ansi(&styled)), visible_width(&styled));
        }

        #[test]
        fn prop_wrap_respects_width(words in prop::collection::vec("[a-z]{1,8}", 0..30), width in 8usize..60) {
            let text = words.join(" ");
            for line in wrap_lines(&text, width) {
                prop_assert!(visible_width(&line) <= width);
            }
        }

        #[test]
        fn prop_wrap_keeps_hard_breaks(a in "[a-z]{1,5}", b in "[a-z]{1,5}") {
            let text = format!("{}\n{}", a, b);
            prop_assert_eq!(wrap_lines(&text, 80), vec![a, b]);
        }
    }
}
