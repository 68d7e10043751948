// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod error;
pub mod formatter;
pub mod multiline;
pub mod options;

/// Adds one indented line to a [`formatter::Formatter`],
/// with the arguments interpolated like in [`format!`].
///
/// ```
/// use srcgen::{fmtln, formatter::Formatter};
///
/// let mut fmt = Formatter::new();
/// fmt.indent_push();
/// fmtln!(fmt, "let {} = {};", "x", 42);
/// assert_eq!(fmt.lines(), ["    let x = 42;\n"]);
/// ```
#[macro_export]
macro_rules! fmtln {
    ($formatter:expr, $($arg:tt)*) => {
        $formatter.format(::std::format_args!($($arg)*))
    };
}
