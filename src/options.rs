// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::DEFAULT_SHIFT_WIDTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Number of spaces representing one level of indentation.
    ///
    /// NOTE A width of zero makes every level invisible,
    /// and popping below the top level undetectable;
    /// the formatter refuses it.
    pub shift_width: usize,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            shift_width: DEFAULT_SHIFT_WIDTH,
        }
    }
}
