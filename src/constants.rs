// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use const_format::formatcp;

/// Number of spaces one level of indentation adds,
/// unless configured otherwise in [`crate::options::FormatterOptions`].
pub const DEFAULT_SHIFT_WIDTH: usize = 4;

/// Marker starting a regular line comment.
pub const COMMENT_MARKER: &str = "//";

/// What [`crate::formatter::Formatter::comment`] puts in front of the text.
pub const COMMENT_PREFIX: &str = formatcp!("{COMMENT_MARKER} ");

/// Marker starting a documentation comment line.
///
/// Blank lines within a doc comment consist of only this marker,
/// without a trailing space.
pub const DOC_COMMENT_MARKER: &str = "///";

pub const DOC_COMMENT_PREFIX: &str = formatcp!("{DOC_COMMENT_MARKER} ");
