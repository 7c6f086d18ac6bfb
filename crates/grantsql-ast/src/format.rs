//! Node-formatting protocol shared by every statement-tree element

use serde::{Deserialize, Serialize};

/// Formatting configuration threaded through every rendering call.
/// Child nodes receive it unmodified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmtFlags {
    /// Quote every identifier, even when quoting is not required
    pub always_quote: bool,
}

impl FmtFlags {
    /// Quote identifiers only when the canonical quoting rules require it
    pub fn simple() -> Self {
        Self::default()
    }

    /// Quote every identifier unconditionally
    pub fn quoted() -> Self {
        Self { always_quote: true }
    }
}

/// Protocol implemented by every statement-tree element to render itself
/// as canonical SQL text. Writing into an in-memory buffer cannot fail,
/// and rendering performs no validation.
pub trait FormatNode {
    /// Append the canonical SQL text of this node to `buf`
    fn format(&self, buf: &mut String, flags: FmtFlags);

    /// Render this node to a standalone SQL string
    fn to_sql(&self, flags: FmtFlags) -> String {
        let mut buf = String::new();
        self.format(&mut buf, flags);
        buf
    }
}

/// Comma-join the renderings of `items`, preserving order. An empty slice
/// produces no output.
pub fn format_comma_separated<T: FormatNode>(buf: &mut String, flags: FmtFlags, items: &[T]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        item.format(buf, flags);
    }
}

impl<T: FormatNode> FormatNode for [T] {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        format_comma_separated(buf, flags, self);
    }
}

impl<T: FormatNode> FormatNode for Vec<T> {
    fn format(&self, buf: &mut String, flags: FmtFlags) {
        format_comma_separated(buf, flags, self);
    }
}
