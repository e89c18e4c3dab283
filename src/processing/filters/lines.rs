use super::comments::{strip_comments, CommentStrategy};

/// Options controlling which lines survive [`filter_lines`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFilterOptions {
    /// Drop lines that are empty after trimming.
    pub skip_blank: bool,
    /// Drop comments (and lines that held nothing else).
    pub skip_comment: bool,
    /// Line prefixes marking a comment line when no comment strategy is known.
    pub fallback_prefixes: Vec<String>,
}

/// Turns decoded file content into the lines that go into the document.
///
/// Every returned line has its trailing whitespace trimmed. With
/// `skip_comment`, a known `strategy` strips comments from the whole text; a
/// line that only held a comment is dropped. Without a strategy, a line is a
/// comment when, after leading whitespace, it starts with one of the fallback
/// prefixes. With `skip_blank`, lines that are blank in the source are dropped.
///
/// # Examples
///
/// ```
/// use ccdoc::processing::filters::{filter_lines, LineFilterOptions};
///
/// let options = LineFilterOptions {
///     skip_blank: true,
///     skip_comment: true,
///     fallback_prefixes: vec!["#".to_string()],
/// };
/// let lines = filter_lines("a\n\n  # note\nb  \n", None, &options);
/// assert_eq!(lines, vec!["a", "b"]);
/// ```
pub fn filter_lines(
    content: &str,
    strategy: Option<&CommentStrategy>,
    options: &LineFilterOptions,
) -> Vec<String> {
    match strategy {
        Some(strategy) if options.skip_comment => {
            let stripped = strip_comments(content, strategy);
            content
                .split('\n')
                .zip(stripped.split('\n'))
                .take(line_count(content))
                .filter_map(|(original, kept)| {
                    let kept = kept.trim_end();
                    if !kept.is_empty() {
                        return Some(kept.to_string());
                    }
                    let was_blank = original.trim().is_empty();
                    // A line emptied by stripping held only a comment.
                    (was_blank && !options.skip_blank).then(String::new)
                })
                .collect()
        }
        _ => content
            .split('\n')
            .take(line_count(content))
            .map(str::trim_end)
            .filter(|line| !(options.skip_blank && line.is_empty()))
            .filter(|line| {
                strategy.is_some()
                    || !options.skip_comment
                    || !has_comment_prefix(line, &options.fallback_prefixes)
            })
            .map(str::to_string)
            .collect(),
    }
}

/// Checks whether a line starts, after leading whitespace, with any non-empty prefix.
pub fn has_comment_prefix(line: &str, prefixes: &[String]) -> bool {
    let line = line.trim_start();
    prefixes
        .iter()
        .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
}

/// Number of lines in `content`; a final newline does not start another line.
///
/// Stripping preserves every `\n`, so splitting the stripped text and taking
/// this many pieces pairs each source line with what is left of it.
fn line_count(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    content.matches('\n').count() + usize::from(!content.ends_with('\n'))
}
