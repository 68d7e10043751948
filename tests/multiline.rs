// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use srcgen::multiline::StrippedLine::{self, Blank, Text};
use srcgen::multiline::parse_multiline;

#[test]
fn test_leading_blank_and_common_indent() {
    assert_eq!(
        parse_multiline("\n    foo\n    bar\n"),
        vec![Blank, Text("foo"), Text("bar")]
    );
}

#[test]
fn test_empty_input() {
    assert!(parse_multiline("").is_empty());
}

#[test]
fn test_no_indentation() {
    assert_eq!(parse_multiline("foo\nbar"), vec![Text("foo"), Text("bar")]);
}

#[test]
fn test_keeps_relative_indentation() {
    assert_eq!(
        parse_multiline("\n        if x {\n            y();\n        }\n"),
        vec![Blank, Text("if x {"), Text("    y();"), Text("}")]
    );
}

#[test]
fn test_interior_blank_and_whitespace_only_lines() {
    assert_eq!(
        parse_multiline("  a\n\n      \n  b"),
        vec![Text("a"), Blank, Blank, Text("b")]
    );
}

#[test]
fn test_unindented_first_line_does_not_defeat_stripping() {
    assert_eq!(
        parse_multiline("Summary.\n\n    Details\n    more details\n"),
        vec![Text("Summary."), Blank, Text("Details"), Text("more details")]
    );
}

#[test]
fn test_never_strips_content() {
    assert_eq!(
        parse_multiline("x\n    deep\n  shallow"),
        vec![Text("x"), Text("  deep"), Text("shallow")]
    );
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        parse_multiline("\r\n  a\r\n  b\r\n"),
        vec![Blank, Text("a"), Text("b")]
    );
}

#[test]
fn test_uniform_extra_indentation_is_removed() {
    let original = ["fn main() {", "    run();", "", "}"];
    let extra = " ".repeat(12);
    let indented: String = original
        .iter()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{extra}{line}\n")
            }
        })
        .collect();

    let stripped: Vec<Option<&str>> = parse_multiline(&indented)
        .iter()
        .map(StrippedLine::as_text)
        .collect();
    assert_eq!(
        stripped,
        vec![Some("fn main() {"), Some("    run();"), None, Some("}")]
    );
}
