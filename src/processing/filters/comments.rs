use log::trace;
use regex::{Captures, Regex};

/// Regex fragments the built-in strategies are assembled from.
///
/// Literal fragments are placed in the `literal` group and comment fragments
/// in the `comment` group of a tokenized pattern.
pub mod fragments {
    /// Double-quoted string with backslash escapes, single line.
    pub const DOUBLE_QUOTED: &str = r#""(?:\\(?s:.)|[^"\\\n])*""#;
    /// Single-quoted string with backslash escapes, single line.
    pub const SINGLE_QUOTED: &str = r#"'(?:\\(?s:.)|[^'\\\n])*'"#;
    /// Character literal (`'a'`, `'\n'`, `'\u{1F600}'`). Leaves lifetimes alone.
    pub const CHAR_LITERAL: &str = r#"'(?:[^'\\\n]|\\[^\n][^'\n]{0,8})'"#;
    /// Backtick template or raw string, may span lines.
    pub const BACKTICK: &str = r#"`(?:\\(?s:.)|[^`\\])*`"#;
    /// Triple-quoted text block.
    pub const TRIPLE_QUOTED: &str = r#""""(?s:.*?)""""#;
    pub const RUST_RAW_STRING: &str = r##"r#+"(?s:.*?)"#+|r"[^"]*""##;
    pub const CSHARP_VERBATIM: &str = r#"@"(?:""|[^"])*""#;
    pub const CPP_RAW_STRING: &str = r#"R"\((?s:.*?)\)""#;
    pub const LUA_LONG_STRING: &str = r"\[\[(?s:.*?)\]\]";
    /// `$#` and `${#` in shell, which are not comments.
    pub const SHELL_HASH_VARIABLE: &str = r"\$#|\$\{#";
    pub const PERL_HASH_VARIABLE: &str = r"\$#";
    /// Opening of a PHP 8 attribute (`#[Route("/x")]`), which is not a comment.
    pub const PHP_ATTRIBUTE_OPEN: &str = r"#\[";

    pub const SLASH_LINE: &str = r"//[^\n]*";
    pub const C_BLOCK: &str = r"/\*(?s:.*?)(?:\*/|\z)";
    pub const HASH_LINE: &str = r"#[^\n]*";
    /// `#` only at line start or after a blank, as in shell and YAML.
    pub const HASH_AFTER_BLANK: &str = r"(?m:(?:^|[ \t])#[^\n]*)";
    pub const DASH_LINE: &str = r"--[^\n]*";
    pub const LUA_BLOCK: &str = r"--\[\[(?s:.*?)(?:\]\]|\z)";
    pub const POWERSHELL_BLOCK: &str = r"<#(?s:.*?)(?:#>|\z)";
    pub const RUBY_BLOCK: &str = r"(?m:^=begin\b(?s:.*?)(?:^=end\b[^\n]*|\z))";
    pub const PERL_POD: &str = r"(?m:^=[a-zA-Z](?s:.*?)(?:^=cut\b[^\n]*|\z))";
    pub const MARKUP_BLOCK: &str = r"<!--(?s:.*?)(?:-->|\z)";

    pub(super) const PYTHON_TRIPLE: &str = r#""""(?s:.*?)(?:"""|\z)|'''(?s:.*?)(?:'''|\z)"#;
}

/// How comments are recognised in one language.
///
/// Limitations shared by all regex strategies: block comments do not nest
/// (the first closing marker ends the block), an unclosed block comment runs
/// to the end of the input, and malformed literals may over- or under-match.
#[derive(Debug, Clone)]
pub enum CommentStrategy {
    /// One pattern with named groups `literal` and `comment`. Literal
    /// alternatives come first, so at any position a string wins over a
    /// comment marker inside it.
    Tokenized(Regex),
    /// A pattern that only matches comment blocks (markup, stylesheets).
    BlockOnly(Regex),
    /// Python: `#` comments plus standalone triple-quoted blocks. The pattern
    /// has groups `triple`, `literal` and `comment`.
    Python(Regex),
    /// Content is never altered.
    None,
}

impl CommentStrategy {
    /// Builds a tokenized strategy from literal and comment fragments.
    ///
    /// Literal fragments are tried before comment fragments at each position.
    pub fn tokenized(literals: &[&str], comments: &[&str]) -> Result<Self, regex::Error> {
        let comment_group = format!("(?P<comment>{})", comments.join("|"));
        let pattern = if literals.is_empty() {
            comment_group
        } else {
            format!("(?P<literal>{})|{}", literals.join("|"), comment_group)
        };
        Ok(CommentStrategy::Tokenized(Regex::new(&pattern)?))
    }

    /// Builds a strategy that removes every match of the given block patterns.
    pub fn block_only(comments: &[&str]) -> Result<Self, regex::Error> {
        let pattern = format!("(?P<comment>{})", comments.join("|"));
        Ok(CommentStrategy::BlockOnly(Regex::new(&pattern)?))
    }

    /// Builds the Python strategy.
    pub fn python() -> Result<Self, regex::Error> {
        let pattern = format!(
            "(?P<triple>{})|(?P<literal>{}|{})|(?P<comment>{})",
            fragments::PYTHON_TRIPLE,
            fragments::DOUBLE_QUOTED,
            fragments::SINGLE_QUOTED,
            fragments::HASH_LINE,
        );
        Ok(CommentStrategy::Python(Regex::new(&pattern)?))
    }
}

/// Removes comments from `content` according to `strategy`.
///
/// Literals are kept verbatim. A removed comment is replaced by the line
/// breaks it spanned, so line `n` of the result corresponds to line `n` of
/// the input; a line holding only a comment comes back blank.
///
/// # Examples
/// ```
/// use ccdoc::processing::filters::{strip_comments, CommentStrategy};
/// use ccdoc::processing::filters::fragments::*;
///
/// let c_like = CommentStrategy::tokenized(
///     &[DOUBLE_QUOTED, CHAR_LITERAL],
///     &[SLASH_LINE, C_BLOCK],
/// ).unwrap();
///
/// let code = "x = \"// not a comment\"; // real\n/* a\n b */y = 2;";
/// assert_eq!(strip_comments(code, &c_like), "x = \"// not a comment\"; \n\ny = 2;");
/// ```
pub fn strip_comments(content: &str, strategy: &CommentStrategy) -> String {
    let stripped = match strategy {
        CommentStrategy::Tokenized(re) | CommentStrategy::BlockOnly(re) => {
            strip_with(re, content, |caps| caps.name("literal").is_some())
        }
        CommentStrategy::Python(re) => strip_with(re, content, |caps| {
            if caps.name("literal").is_some() {
                return true;
            }
            match caps.name("triple") {
                Some(m) => !is_standalone(content, m.start(), m.end()),
                None => false,
            }
        }),
        CommentStrategy::None => return content.to_string(),
    };
    trace!(
        "Comment removal applied. Original len: {}, New len: {}",
        content.len(),
        stripped.len()
    );
    stripped
}

/// Splices out every match for which `keep` returns false.
fn strip_with(re: &Regex, content: &str, keep: impl Fn(&Captures<'_>) -> bool) -> String {
    let mut result = String::with_capacity(content.len());
    let mut last = 0;
    for caps in re.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if keep(&caps) {
            continue;
        }
        result.push_str(&content[last..whole.start()]);
        for _ in whole.as_str().matches('\n') {
            result.push('\n');
        }
        last = whole.end();
    }
    result.push_str(&content[last..]);
    result
}

/// A triple-quoted block is standalone (a docstring) when only whitespace
/// precedes it on its first line and nothing but whitespace or a `#` comment
/// follows it on its last line.
fn is_standalone(content: &str, start: usize, end: usize) -> bool {
    let line_start = content[..start].rfind('\n').map_or(0, |i| i + 1);
    if !content[line_start..start].trim().is_empty() {
        return false;
    }
    let line_end = content[end..].find('\n').map_or(content.len(), |i| end + i);
    let rest = content[end..line_end].trim_start();
    rest.is_empty() || rest.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::fragments::*;
    use super::*;

    fn c_like() -> CommentStrategy {
        CommentStrategy::tokenized(&[DOUBLE_QUOTED, CHAR_LITERAL], &[SLASH_LINE, C_BLOCK])
            .unwrap()
    }

    fn python() -> CommentStrategy {
        CommentStrategy::python().unwrap()
    }

    #[test]
    fn test_remove_line_comment_simple() {
        let input = "code // comment\nmore code";
        assert_eq!(strip_comments(input, &c_like()), "code \nmore code");
    }

    #[test]
    fn test_remove_block_comment_multiline_keeps_line_count() {
        let input = "code /* comment\n more comment */ more code";
        let output = strip_comments(input, &c_like());
        assert_eq!(output, "code \n more code");
        assert_eq!(output.lines().count(), input.lines().count());
    }

    #[test]
    fn test_comment_markers_in_strings() {
        let input = r#"let s = "// not a comment"; /* also " not start */"#;
        assert_eq!(
            strip_comments(input, &c_like()),
            r#"let s = "// not a comment"; "#
        );
    }

    #[test]
    fn test_string_literal_unchanged() {
        let input = r#"x = "// not a comment""#;
        assert_eq!(strip_comments(input, &c_like()), input);
    }

    #[test]
    fn test_comment_markers_in_chars() {
        let input = "let c = '/'; // char comment\nlet d = '*'; /* block */";
        assert_eq!(
            strip_comments(input, &c_like()),
            "let c = '/'; \nlet d = '*'; "
        );
    }

    #[test]
    fn test_escaped_quotes_in_strings() {
        let input = r#"let s = "string with \" quote"; // comment"#;
        assert_eq!(
            strip_comments(input, &c_like()),
            r#"let s = "string with \" quote"; "#
        );
    }

    #[test]
    fn test_division_operator_is_not_a_comment() {
        let input = "a = b / c; // divide\nx = y / *p;";
        assert_eq!(strip_comments(input, &c_like()), "a = b / c; \nx = y / *p;");
    }

    #[test]
    fn test_block_comment_unterminated_runs_to_end() {
        let input = "code /* comment\nstill comment";
        assert_eq!(strip_comments(input, &c_like()), "code \n");
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let input = "/* outer /* inner */ tail */";
        assert_eq!(strip_comments(input, &c_like()), " tail */");
    }

    #[test]
    fn test_lifetimes_are_not_char_literals() {
        let input = "fn f<'a>(x: &'a str) {} // done";
        assert_eq!(strip_comments(input, &c_like()), "fn f<'a>(x: &'a str) {} ");
    }

    #[test]
    fn test_block_only_strategy() {
        let html = CommentStrategy::block_only(&[MARKUP_BLOCK]).unwrap();
        let input = "<p>hi</p><!-- note\n more -->\n<a href=\"//x\">";
        assert_eq!(strip_comments(input, &html), "<p>hi</p>\n\n<a href=\"//x\">");
    }

    #[test]
    fn test_none_strategy_is_identity() {
        let input = "{\"a\": \"// b\"} // c";
        assert_eq!(strip_comments(input, &CommentStrategy::None), input);
    }

    #[test]
    fn test_python_hash_comment_and_strings() {
        let input = "print(1)  # comment\ns = \"# not comment\"\nt = '#'  # real";
        assert_eq!(
            strip_comments(input, &python()),
            "print(1)  \ns = \"# not comment\"\nt = '#'  "
        );
    }

    #[test]
    fn test_python_docstring_removed() {
        let input = "def f():\n    \"\"\"Doc.\n\n    More.\n    \"\"\"\n    return 1\n";
        let output = strip_comments(input, &python());
        assert_eq!(output, "def f():\n    \n\n\n\n    return 1\n");
    }

    #[test]
    fn test_python_assigned_triple_string_kept() {
        let input = "SQL = \"\"\"\nSELECT 1 # not a comment\n\"\"\"\n";
        assert_eq!(strip_comments(input, &python()), input);
    }

    #[test]
    fn test_python_docstring_followed_by_comment() {
        let input = "'''module doc'''  # trailing\nx = 1";
        assert_eq!(strip_comments(input, &python()), "  \nx = 1");
    }

    #[test]
    fn test_shell_hash_variables_kept() {
        let shell = CommentStrategy::tokenized(
            &[DOUBLE_QUOTED, SINGLE_QUOTED, SHELL_HASH_VARIABLE],
            &[HASH_AFTER_BLANK],
        )
        .unwrap();
        let input = "#!/bin/sh\necho $# ${#arr} foo#bar # trailing";
        assert_eq!(strip_comments(input, &shell), "\necho $# ${#arr} foo#bar");
    }

    #[test]
    fn test_lua_block_before_line_comment() {
        let lua = CommentStrategy::tokenized(
            &[LUA_LONG_STRING, DOUBLE_QUOTED, SINGLE_QUOTED],
            &[LUA_BLOCK, DASH_LINE],
        )
        .unwrap();
        let input = "--[[ block\ncomment ]]x = [[-- kept]] -- gone";
        assert_eq!(strip_comments(input, &lua), "\nx = [[-- kept]] ");
    }

    #[test]
    fn test_ruby_begin_end_block() {
        let ruby = CommentStrategy::tokenized(
            &[DOUBLE_QUOTED, SINGLE_QUOTED],
            &[RUBY_BLOCK, HASH_LINE],
        )
        .unwrap();
        let input = "=begin\ndocs\n=end\nputs \"#{x}\" # note";
        assert_eq!(strip_comments(input, &ruby), "\n\n\nputs \"#{x}\" ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_comments("", &c_like()), "");
        assert_eq!(strip_comments("", &python()), "");
    }
}
