//! Assembly of the generated file: header, container markers, functions

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// File header settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// File name shown in the header comment
    pub file_name: String,

    /// Project (module) name shown under the file name
    pub project: String,

    /// Author credited in the "Created by" line; omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Linter rules disabled for the generated file
    pub lint_suppressions: Vec<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            file_name: "Router+routing.swift".to_string(),
            project: "Squirrel".to_string(),
            author: None,
            lint_suppressions: ["trailing_whitespace", "line_length", "identifier_name", "file_length"]
                .iter()
                .map(|rule| rule.to_string())
                .collect(),
        }
    }
}

/// Date stamp as numeric month/day/two-digit year, unpadded: `7/9/17`
pub fn date_stamp(date: NaiveDate) -> String {
    format!("{}/{}/{:02}", date.month(), date.day(), date.year().rem_euclid(100))
}

/// Render the comment block and lint directives that open the file
pub fn render_header(header: &HeaderConfig, date: NaiveDate) -> String {
    let stamp = date_stamp(date);
    let mut code = String::new();

    code.push_str("//\n");
    code.push_str(&format!("//  {}\n", header.file_name));
    code.push_str(&format!("//  {}\n", header.project));
    code.push_str("//\n");
    match &header.author {
        Some(author) => code.push_str(&format!("//  Created by {author} on {stamp}.\n")),
        None => code.push_str(&format!("//  Generated on {stamp}.\n")),
    }
    code.push_str("//\n\n");

    for rule in &header.lint_suppressions {
        code.push_str(&format!("// swiftlint:disable {rule}\n"));
    }
    code.push('\n');

    code
}

/// Build the full document from already rendered function blocks.
pub fn assemble<I, S>(header: &HeaderConfig, container: &str, date: NaiveDate, functions: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut code = render_header(header, date);

    code.push_str("// MARK: - routes\n");
    code.push_str(&format!("extension {container} {{"));
    for function in functions {
        code.push_str(function.as_ref());
    }
    code.push_str("}\n");

    code
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(2017, 7, 9, "7/9/17")]
    #[test_case(2017, 12, 31, "12/31/17")]
    #[test_case(2005, 1, 1, "1/1/05")]
    #[test_case(2026, 10, 17, "10/17/26")]
    fn date_stamp___formats_unpadded_month_and_day(y: i32, m: u32, d: u32, expected: &str) {
        assert_eq!(date_stamp(date(y, m, d)), expected);
    }

    #[test]
    fn render_header___with_author___credits_author() {
        let header = HeaderConfig {
            author: Some("Filip Klembara".to_string()),
            ..HeaderConfig::default()
        };

        let code = render_header(&header, date(2017, 7, 9));

        assert_eq!(
            code,
            indoc! {"
                //
                //  Router+routing.swift
                //  Squirrel
                //
                //  Created by Filip Klembara on 7/9/17.
                //

                // swiftlint:disable trailing_whitespace
                // swiftlint:disable line_length
                // swiftlint:disable identifier_name
                // swiftlint:disable file_length

            "}
        );
    }

    #[test]
    fn render_header___without_author___says_generated() {
        let code = render_header(&HeaderConfig::default(), date(2017, 7, 9));

        assert!(code.contains("//  Generated on 7/9/17.\n"));
        assert!(!code.contains("Created by"));
    }

    #[test]
    fn render_header___no_lint_suppressions___emits_none() {
        let header = HeaderConfig {
            lint_suppressions: vec![],
            ..HeaderConfig::default()
        };

        let code = render_header(&header, date(2017, 7, 9));

        assert!(!code.contains("swiftlint"));
    }

    #[test]
    fn assemble___wraps_functions_in_extension() {
        let header = HeaderConfig {
            lint_suppressions: vec![],
            ..HeaderConfig::default()
        };

        let code = assemble(&header, "Router", date(2017, 7, 9), ["\n    A\n", "\n    B\n"]);

        assert!(code.ends_with("// MARK: - routes\nextension Router {\n    A\n\n    B\n}\n"));
    }

    #[test]
    fn assemble___no_functions___emits_empty_extension() {
        let code = assemble(
            &HeaderConfig::default(),
            "Router",
            date(2017, 7, 9),
            Vec::<String>::new(),
        );

        assert!(code.ends_with("extension Router {}\n"));
    }
}
