// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comment styles used to fence the merged partials section.
//!
//! The fence has to be a valid comment in the aggregate file's language, so
//! the style is either named explicitly, picked from the file extension
//! (`auto`), or taken verbatim as a custom line-comment prefix.

use std::path::Path;

/// Input value that asks for detection from the aggregate file's extension.
pub const AUTO_STYLE: &str = "auto";

/// Style used when detection finds no known extension.
pub const FALLBACK_STYLE: &str = "#";

/// Opening and closing comment tokens.
///
/// `end` is empty for line comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentStyle {
    /// Token that opens a comment.
    pub start: String,
    /// Token that closes a block comment; empty for line comments.
    pub end: String,
}

impl CommentStyle {
    /// A line-comment style such as `#` or `//`.
    pub fn line(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: String::new(),
        }
    }

    /// A block-comment style such as `/*` … `*/`.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns true if this style needs a closing token.
    pub fn is_block(&self) -> bool {
        !self.end.is_empty()
    }

    /// Looks up one of the built-in styles by its opening token.
    ///
    /// # Examples
    ///
    /// ```
    /// use parts::domain::CommentStyle;
    ///
    /// assert_eq!(CommentStyle::predefined("/*"), Some(CommentStyle::block("/*", "*/")));
    /// assert_eq!(CommentStyle::predefined("REM"), None);
    /// ```
    pub fn predefined(name: &str) -> Option<Self> {
        let style = match name {
            "#" | "//" | "--" | ";" | "%" | "'" | "rem" | "::" => Self::line(name),
            "/*" => Self::block("/*", "*/"),
            "<!--" => Self::block("<!--", "-->"),
            _ => return None,
        };
        Some(style)
    }

    /// Picks the built-in style name for a file from its extension.
    ///
    /// The extension is whatever follows the last `.` of the file name, so a
    /// bare `.css` counts as CSS. It is compared case-insensitively; unknown
    /// or missing extensions fall back to `#`.
    pub fn detect(path: impl AsRef<Path>) -> &'static str {
        let ext = path
            .as_ref()
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.rfind('.').map(|i| n[i + 1..].to_ascii_lowercase()));

        match ext.as_deref() {
            Some("sh" | "bash" | "zsh" | "py" | "yml" | "yaml" | "conf" | "config") => "#",
            Some(
                "go" | "js" | "ts" | "cpp" | "c" | "h" | "java" | "cs" | "php" | "scss" | "less",
            ) => "//",
            Some("sql" | "lua" | "hs") => "--",
            Some("css") => "/*",
            Some("lisp" | "ini") => ";",
            Some("tex") => "%",
            Some("html" | "xml") => "<!--",
            Some("vb") => "'",
            Some("bat" | "cmd") => "rem",
            _ => FALLBACK_STYLE,
        }
    }

    /// Resolves user input into a style.
    ///
    /// `auto` detects from `aggregate_file`, a built-in name selects that
    /// style, and anything else is used as a custom line-comment prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use parts::domain::CommentStyle;
    ///
    /// let style = CommentStyle::resolve("auto", "schema.sql");
    /// assert_eq!(style, CommentStyle::line("--"));
    ///
    /// let style = CommentStyle::resolve("##", "anything");
    /// assert_eq!(style, CommentStyle::line("##"));
    /// ```
    pub fn resolve(input: &str, aggregate_file: impl AsRef<Path>) -> Self {
        if input == AUTO_STYLE {
            let detected = Self::detect(aggregate_file);
            if let Some(style) = Self::predefined(detected) {
                return style;
            }
        }

        Self::predefined(input).unwrap_or_else(|| Self::line(input))
    }
}
