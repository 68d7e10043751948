// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// One line of a multi-line block, after the common indentation was stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrippedLine<'src> {
    /// The remaining content of a line that had some non-whitespace in it.
    Text(&'src str),
    /// The source line was empty, or consisted of whitespace only.
    Blank,
}

impl<'src> StrippedLine<'src> {
    #[must_use]
    pub const fn as_text(&self) -> Option<&'src str> {
        match *self {
            Self::Text(text) => Some(text),
            Self::Blank => None,
        }
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Counts the leading whitespace characters of `line`,
/// or returns `None` if there is nothing but whitespace.
fn indentation(line: &str) -> Option<usize> {
    if line.trim_start().is_empty() {
        return None;
    }
    Some(line.chars().take_while(|c| c.is_whitespace()).count())
}

/// Removes up to `count` leading whitespace characters.
fn strip_indentation(line: &str, count: usize) -> &str {
    let mut rest = line;
    for _ in 0..count {
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => rest = chars.as_str(),
            _ => break,
        }
    }
    rest
}

/// Splits a multi-line string into lines,
/// stripping the indentation common to all of them.
///
/// This is meant for text written as an indented string literal
/// inside the generator's own source code.
/// The common indentation is the smallest *non-zero* indentation
/// of all lines with content,
/// so a first line starting right after the opening quote
/// does not prevent stripping the rest.
/// Lines containing only whitespace come out as [`StrippedLine::Blank`].
///
/// ```
/// use srcgen::multiline::{parse_multiline, StrippedLine};
///
/// assert_eq!(
///     parse_multiline("\n    hello\n    world\n"),
///     vec![StrippedLine::Blank, StrippedLine::Text("hello"), StrippedLine::Text("world")],
/// );
/// ```
#[must_use]
pub fn parse_multiline(text: &str) -> Vec<StrippedLine<'_>> {
    let lines: Vec<&str> = text.lines().collect();
    let common = lines
        .iter()
        .filter_map(|line| indentation(line))
        .filter(|&indent| indent > 0)
        .min()
        .unwrap_or(0);
    lines
        .into_iter()
        .map(|line| {
            if indentation(line).is_some() {
                StrippedLine::Text(strip_indentation(line, common))
            } else {
                StrippedLine::Blank
            }
        })
        .collect()
}
