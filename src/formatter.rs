// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::constants::{COMMENT_PREFIX, DOC_COMMENT_MARKER, DOC_COMMENT_PREFIX};
use crate::error::{Error, SrcGenResult};
use crate::multiline::{StrippedLine, parse_multiline};
use crate::options::FormatterOptions;

/// Collects generated source code line by line,
/// keeping track of the indentation.
///
/// Nothing is written anywhere until [`Self::writelines`]
/// or [`Self::update_file`] is called.
///
/// ```
/// use srcgen::{fmtln, formatter::Formatter};
///
/// let mut fmt = Formatter::new();
/// fmt.line("Hello line 1");
/// fmt.indent_push();
/// fmt.comment("Nested comment");
/// fmt.indent_pop();
/// fmtln!(fmt, "Back {} again", "home");
/// assert_eq!(
///     fmt.to_string(),
///     "Hello line 1\n    // Nested comment\nBack home again\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatterOptions,
    /// The current indentation prefix, consisting of spaces only.
    indent: String,
    /// Complete lines, each one terminated by a new-line.
    lines: Vec<String>,
}

impl Formatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// If `options.shift_width` is zero.
    #[must_use]
    pub fn with_options(options: FormatterOptions) -> Self {
        assert!(options.shift_width > 0, "Shift width must be at least 1");
        Self {
            options,
            indent: String::new(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// The prefix currently put in front of each non-blank line.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// The level of indentation
    /// (**not** measured in spaces).
    #[must_use]
    pub fn indent_level(&self) -> usize {
        self.indent.len() / self.options.shift_width
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Increases the current indentation level by one.
    pub fn indent_push(&mut self) {
        self.indent
            .extend(std::iter::repeat_n(' ', self.options.shift_width));
    }

    /// Decreases the current indentation level by one.
    ///
    /// # Panics
    ///
    /// If we are already at the top level.
    /// This always indicates unbalanced push/pop calls in the generator.
    pub fn indent_pop(&mut self) {
        assert!(
            !self.indent.is_empty(),
            "Already at top level indentation"
        );
        let new_len = self.indent.len() - self.options.shift_width;
        self.indent.truncate(new_len);
    }

    /// Adds a line with the current indentation.
    ///
    /// An empty `text` results in a blank line,
    /// which never receives any indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.blank_line();
        } else {
            self.lines.push(format!("{}{text}\n", self.indent));
        }
    }

    pub fn blank_line(&mut self) {
        self.lines.push("\n".to_string());
    }

    /// Adds a line indented one level less than the current indentation.
    ///
    /// This is used for `} else {` and similar things
    /// inside a single indented block.
    ///
    /// # Panics
    ///
    /// If we are at the top level,
    /// as there is nothing to outdent from.
    pub fn outdented_line(&mut self, text: impl AsRef<str>) {
        assert!(
            !self.indent.is_empty(),
            "Can not outdent a line at top level indentation"
        );
        let outer = self
            .indent
            .get(self.options.shift_width..)
            .unwrap_or_default();
        self.lines.push(format!("{outer}{}\n", text.as_ref()));
    }

    /// Adds an indented line, built from positional arguments.
    ///
    /// Usually called through the [`crate::fmtln`] macro.
    pub fn format(&mut self, args: fmt::Arguments<'_>) {
        self.line(fmt::format(args));
    }

    /// Adds one or more lines after stripping their common indentation.
    ///
    /// See [`parse_multiline`] for how the common indentation is determined.
    pub fn multi_line(&mut self, text: &str) {
        for stripped in parse_multiline(text) {
            match stripped {
                StrippedLine::Text(content) => self.line(content),
                StrippedLine::Blank => self.blank_line(),
            }
        }
    }

    /// Adds a single line comment.
    pub fn comment(&mut self, text: impl AsRef<str>) {
        self.line(format!("{COMMENT_PREFIX}{}", text.as_ref()));
    }

    /// Adds a (multi-line) documentation comment,
    /// stripped of its common indentation.
    ///
    /// Blank lines at the very start and end of `text`
    /// are left out,
    /// the ones in between become lines containing only the marker.
    pub fn doc_comment(&mut self, text: &str) {
        let stripped = parse_multiline(text);
        let Some(first) = stripped.iter().position(|line| !line.is_blank()) else {
            return;
        };
        let last = stripped
            .iter()
            .rposition(|line| !line.is_blank())
            .unwrap_or(first);
        for line in stripped.iter().skip(first).take(last + 1 - first) {
            match line {
                StrippedLine::Text(content) => {
                    self.line(format!("{DOC_COMMENT_PREFIX}{content}"));
                }
                StrippedLine::Blank => self.line(DOC_COMMENT_MARKER),
            }
        }
    }

    /// Opens an indented scope.
    ///
    /// `before` is added right away at the current indentation,
    /// then the indentation is increased until the returned guard is dropped.
    /// Dropping it restores the previous indentation
    /// and adds `after` at that level.
    /// This also happens when leaving the scope early
    /// (through `?` or a panic);
    /// lines emitted up to that point stay in the buffer.
    ///
    /// ```
    /// use srcgen::formatter::Formatter;
    ///
    /// let mut fmt = Formatter::new();
    /// {
    ///     let mut body = fmt.indented(Some("prefix {"), Some("} suffix"));
    ///     body.line("hello");
    /// }
    /// assert_eq!(fmt.to_string(), "prefix {\n    hello\n} suffix\n");
    /// ```
    pub fn indented(&mut self, before: Option<&str>, after: Option<&str>) -> Indented<'_> {
        if let Some(before) = before.filter(|text| !text.is_empty()) {
            self.line(before);
        }
        let outer_indent = self.indent.len();
        self.indent_push();
        Indented {
            formatter: self,
            outer_indent,
            after: after.filter(|text| !text.is_empty()).map(str::to_owned),
        }
    }

    /// Like [`Self::indented`],
    /// but with the scope being the given closure.
    pub fn indented_with<R>(
        &mut self,
        before: Option<&str>,
        after: Option<&str>,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let mut scope = self.indented(before, after);
        body(&mut *scope)
    }

    /// Writes all lines to `out`, as they are.
    ///
    /// # Errors
    ///
    /// Whatever `out` reports while being written to.
    pub fn writelines<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Writes all lines to the standard output of the process.
    ///
    /// # Errors
    ///
    /// If stdout is closed or otherwise not writable.
    pub fn write_stdout(&self) -> io::Result<()> {
        tracing::trace!("Writing {} lines to stdout", self.lines.len());
        let mut stdout = io::stdout().lock();
        self.writelines(&mut stdout)?;
        stdout.flush()
    }

    /// Writes all lines to `filename`,
    /// resolved against `directory` if one is given,
    /// replacing any previous content of the file.
    ///
    /// # Errors
    ///
    /// If the file can not be created or written to,
    /// for example because the directory does not exist.
    pub fn update_file(
        &self,
        filename: impl AsRef<Path>,
        directory: Option<&Path>,
    ) -> SrcGenResult<()> {
        let path = resolve_path(filename.as_ref(), directory);
        tracing::debug!("Writing {} lines to '{}'", self.lines.len(), path.display());
        self.write_file(&path)
            .map_err(|err| Error::FailedToWriteFile(path, err))
    }

    fn write_file(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.writelines(&mut writer)?;
        writer.flush()
    }
}

fn resolve_path(filename: &Path, directory: Option<&Path>) -> PathBuf {
    match directory {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(filename),
        _ => filename.to_path_buf(),
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<Formatter> for String {
    fn from(formatter: Formatter) -> Self {
        formatter.lines.concat()
    }
}

/// Guard of an indented scope, see [`Formatter::indented`].
///
/// Emit the lines of the scope through it;
/// it dereferences to the [`Formatter`] it was created from.
#[must_use = "the indentation is reverted as soon as this is dropped"]
pub struct Indented<'fmt> {
    formatter: &'fmt mut Formatter,
    /// Length of the indentation prefix when the scope was opened.
    outer_indent: usize,
    after: Option<String>,
}

impl Deref for Indented<'_> {
    type Target = Formatter;

    fn deref(&self) -> &Formatter {
        self.formatter
    }
}

impl DerefMut for Indented<'_> {
    fn deref_mut(&mut self) -> &mut Formatter {
        self.formatter
    }
}

impl Drop for Indented<'_> {
    fn drop(&mut self) {
        // Never panics, even if the scope left its pushes and pops unbalanced.
        self.formatter.indent = " ".repeat(self.outer_indent);
        if let Some(after) = self.after.take() {
            self.formatter.line(after);
        }
    }
}
