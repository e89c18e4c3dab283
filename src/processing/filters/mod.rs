//! Comment stripping and line filtering applied to decoded file content.

mod comments;
mod lines;

pub use comments::{fragments, strip_comments, CommentStrategy};
pub use lines::{filter_lines, has_comment_prefix, LineFilterOptions};
