//! Body formatting.
//!
//! Light markdown touch-up of the raw text:
//! - list lines are kept (`1)` numbering becomes `1.`)
//! - short lines ending in `:` become `## ` sub-headings
//! - everything else stays a plain paragraph
//!
//! Blank lines are dropped and paragraphs rejoined with one blank line between
//! them. The result always opens with a `# ` heading; the title is used when the
//! text does not start with one.

use super::title::strip_number_marker;

/// Lines ending in `:` shorter than this become sub-headings.
const SUBHEADING_MAX_LEN: usize = 50;

fn is_bullet(line: &str) -> bool {
    ["- ", "* ", "+ "].iter().any(|m| line.starts_with(m))
}

fn format_line(line: &str) -> String {
    if is_bullet(line) {
        return line.to_string();
    }
    if strip_number_marker(line).is_some() {
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        let rest = &line[digits + 1..];
        return format!("{}.{}", &line[..digits], rest);
    }
    if line.ends_with(':') && line.chars().count() < SUBHEADING_MAX_LEN {
        return format!("## {}", line);
    }
    line.to_string()
}

fn with_heading(body: String, title: &str) -> String {
    if body.starts_with("# ") {
        body
    } else {
        format!("# {}\n\n{}", title, body)
    }
}

/// Formats trimmed, non-empty note text into a markdown body.
pub fn format_body(text: &str, title: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() <= 1 {
        let line = lines.first().copied().unwrap_or(title);
        return format!("# {}\n\n{}", title, line);
    }

    let body = lines
        .iter()
        .map(|line| format_line(line))
        .collect::<Vec<_>>()
        .join("\n\n");
    with_heading(body, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_is_wrapped_under_heading() {
        assert_eq!(
            format_body("Call the plumber", "Call the plumber"),
            "# Call the plumber\n\nCall the plumber"
        );
    }

    #[test]
    fn test_single_line_with_surrounding_blanks() {
        assert_eq!(format_body("\n\nonly one\n\n", "only one"), "# only one\n\nonly one");
    }

    #[test]
    fn test_paragraphs_are_separated_by_blank_lines() {
        assert_eq!(
            format_body("first\n\n\n\nsecond\nthird", "first"),
            "# first\n\nfirst\n\nsecond\n\nthird"
        );
    }

    #[test]
    fn test_lists_are_preserved() {
        let body = format_body("Shopping\n- eggs\n* bread\n+ jam\n1. one\n2) two", "Shopping");
        assert_eq!(
            body,
            "# Shopping\n\nShopping\n\n- eggs\n\n* bread\n\n+ jam\n\n1. one\n\n2. two"
        );
    }

    #[test]
    fn test_colon_lines_become_subheadings() {
        let body = format_body("Trip\nTodo:\npack bags", "Trip");
        assert_eq!(body, "# Trip\n\nTrip\n\n## Todo:\n\npack bags");
    }

    #[test]
    fn test_long_colon_lines_stay_paragraphs() {
        let long = format!("{}:", "w".repeat(60));
        let body = format_body(&format!("Intro\n{}", long), "Intro");
        assert!(body.ends_with(&format!("\n\n{}", long)));
        assert!(!body.contains("## "));
    }

    #[test]
    fn test_existing_heading_is_kept() {
        assert_eq!(
            format_body("# Big plan\nstep one", "Big plan"),
            "# Big plan\n\nstep one"
        );
    }

    #[test]
    fn test_subheading_first_still_gets_top_heading() {
        assert_eq!(
            format_body("## Notes\nbody", "Notes"),
            "# Notes\n\n## Notes\n\nbody"
        );
    }
}
