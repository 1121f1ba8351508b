//! Word-preserving line wrapping for hover text.

/// Default hover line length, in characters.
pub const DEFAULT_WRAP_LIMIT: usize = 120;

/// Marker appended to a line that is followed by a break. Treemap hover
/// labels render it as a line break.
pub const LINE_BREAK: &str = "<br />";

/// Greedily pack whitespace-separated words into lines of at most `limit`
/// characters.
///
/// Words on a line are joined by single spaces. A line that is followed by
/// another ends with [`LINE_BREAK`], and lines are joined with a space. A
/// word longer than `limit` sits alone on its line and is never cut.
///
/// # Examples
///
/// ```
/// use dommap::chart::wrap;
///
/// assert_eq!(wrap("a b c d", 3), "a b<br /> c d");
/// assert_eq!(wrap("", 3), "");
/// ```
pub fn wrap(text: &str, limit: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > limit {
            line.push_str(LINE_BREAK);
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join(" ")
}
