//! Extraction of the projected average salary from page text.
//!
//! The announcement page states the figure in a fixed sentence ("Kwota
//! prognozowanego przeciętnego wynagrodzenia w 2025 roku wynosi 8 673,00 zł").
//! The page is reduced to plain text, the sentence is located with a regex,
//! and the Polish-formatted numeral is converted to a [`Decimal`].

use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// A compiled salary pattern for one year.
#[derive(Debug, Clone)]
pub struct SalaryPattern {
    sentence: Regex,
    markup: Regex,
}

impl SalaryPattern {
    /// Compiles `template` with `{year}` replaced by `year`.
    ///
    /// Matching is case-insensitive. The first capture group must hold the
    /// numeral.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] if the resulting pattern is
    /// not a valid regex.
    pub fn for_year(template: &str, year: i32) -> EngineResult<Self> {
        let pattern = template.replace("{year}", &year.to_string());
        let sentence = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| EngineError::ConfigParseError {
                path: "reference_data.salary_pattern".to_string(),
                message: e.to_string(),
            })?;
        let markup = Regex::new(r"<[^>]*>").map_err(|e| EngineError::ConfigParseError {
            path: "reference_data.salary_pattern".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { sentence, markup })
    }

    /// Finds the first parseable salary figure in `page`.
    ///
    /// Matches are tried in document order; one whose numeral cannot be
    /// parsed is skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use b2b_contributions::config::DEFAULT_SALARY_PATTERN;
    /// use b2b_contributions::reference::SalaryPattern;
    /// use rust_decimal::Decimal;
    ///
    /// let pattern = SalaryPattern::for_year(DEFAULT_SALARY_PATTERN, 2025)?;
    /// let page = "<p>Kwota prognozowanego przeciętnego wynagrodzenia w 2025 roku \
    ///             wynosi <strong>8&nbsp;673,00 zł</strong>.</p>";
    /// assert_eq!(pattern.find_average_salary(page), Some(Decimal::new(867300, 2)));
    /// # Ok::<(), b2b_contributions::error::EngineError>(())
    /// ```
    pub fn find_average_salary(&self, page: &str) -> Option<Decimal> {
        let text = self.page_text(page);
        self.sentence
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .find_map(|numeral| parse_polish_amount(numeral.as_str()))
    }

    /// Reduces HTML to whitespace-separated text.
    fn page_text(&self, page: &str) -> String {
        self.markup
            .replace_all(page, " ")
            .replace("&nbsp;", " ")
            .replace("&#160;", " ")
            .replace('\u{a0}', " ")
    }
}

/// Parses a Polish-formatted amount such as `8 673,00` or `8.673,00`.
///
/// Whitespace and `.` are treated as thousands separators and `,` as the
/// decimal separator. Returns `None` for anything else.
pub fn parse_polish_amount(numeral: &str) -> Option<Decimal> {
    let cleaned: String = numeral
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}
