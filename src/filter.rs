// src/filter.rs
//! Whole-word keyword filtering over vacancy requirement text

use regex::{Regex, RegexBuilder};

use crate::types::WireVacancy;

/// Compiled keyword set. An empty set lets every record through.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    pattern: Option<Regex>,
}

impl KeywordFilter {
    /// Blank keywords are ignored. Each keyword is matched literally, as a whole
    /// word, ignoring case.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// Whether a single record passes. Records without a name or a non-empty
    /// requirement never match a non-empty keyword set.
    pub fn matches(&self, vacancy: &WireVacancy) -> bool {
        let Some(pattern) = &self.pattern else {
            return true;
        };

        if vacancy.title().is_none() {
            return false;
        }

        match vacancy.requirement() {
            Some(text) if !text.is_empty() => pattern.is_match(text),
            _ => false,
        }
    }

    pub fn apply(&self, vacancies: &[WireVacancy]) -> Vec<WireVacancy> {
        vacancies
            .iter()
            .filter(|v| self.matches(v))
            .cloned()
            .collect()
    }
}

/// Keep the records whose requirement mentions any of `keywords`, in input order.
pub fn filter_vacancies<S: AsRef<str>>(
    vacancies: &[WireVacancy],
    keywords: &[S],
) -> Result<Vec<WireVacancy>, regex::Error> {
    Ok(KeywordFilter::new(keywords)?.apply(vacancies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_vacancies() -> Vec<WireVacancy> {
        serde_json::from_value(json!([
            {
                "name": "Python Developer",
                "snippet": {
                    "requirement": "Experience with Python and Django",
                    "responsibility": "Develop web applications"
                }
            },
            {
                "name": "Java Developer",
                "snippet": {
                    "requirement": "Java and Spring experience",
                    "responsibility": "Backend development"
                }
            },
            {
                "name": "Frontend Developer",
                "snippet": {"requirement": "JavaScript, React", "responsibility": null}
            },
            {
                "name": "DevOps Engineer",
                "snippet": {"requirement": null, "responsibility": "Deploy and maintain infrastructure"}
            }
        ]))
        .unwrap()
    }

    fn names(vacancies: &[WireVacancy]) -> Vec<&str> {
        vacancies.iter().filter_map(|v| v.name.as_deref()).collect()
    }

    #[test]
    fn test_filter_with_matching_keywords() {
        let result = filter_vacancies(&sample_vacancies(), &["python", "django"]).unwrap();
        assert_eq!(names(&result), ["Python Developer"]);
    }

    #[test]
    fn test_filter_with_no_matches() {
        let result = filter_vacancies(&sample_vacancies(), &["ruby"]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_with_empty_keywords() {
        let input = sample_vacancies();
        let none: [&str; 0] = [];
        let result = filter_vacancies(&input, &none).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let input = sample_vacancies();
        let result = filter_vacancies(&input, &["", "   "]).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_whole_word_only() {
        // "java" must not hit "JavaScript"
        let result = filter_vacancies(&sample_vacancies(), &["java"]).unwrap();
        assert_eq!(names(&result), ["Java Developer"]);

        let single: Vec<WireVacancy> = serde_json::from_value(json!([
            {"name": "JS", "snippet": {"requirement": "Javascript developer"}}
        ]))
        .unwrap();
        assert!(filter_vacancies(&single, &["java"]).unwrap().is_empty());
    }

    #[test]
    fn test_filter_case_insensitive() {
        let result = filter_vacancies(&sample_vacancies(), &["PYTHON"]).unwrap();
        assert_eq!(names(&result), ["Python Developer"]);

        let result = filter_vacancies(&sample_vacancies(), &["JAVA"]).unwrap();
        assert_eq!(names(&result), ["Java Developer"]);
    }

    #[test]
    fn test_filter_matches_other_keyword_in_field() {
        let result = filter_vacancies(&sample_vacancies(), &["react"]).unwrap();
        assert_eq!(names(&result), ["Frontend Developer"]);
    }

    #[test]
    fn test_null_and_empty_requirements_excluded() {
        let mut input = sample_vacancies();
        input.extend(
            serde_json::from_value::<Vec<WireVacancy>>(json!([
                {"name": "Test Vacancy", "snippet": {"requirement": null}},
                {"name": "Empty Requirements", "snippet": {"requirement": ""}},
                {"name": "No snippet"}
            ]))
            .unwrap(),
        );

        assert!(filter_vacancies(&input, &["test"]).unwrap().is_empty());
        assert!(filter_vacancies(&input, &["empty"]).unwrap().is_empty());
        assert!(filter_vacancies(&input, &["snippet"]).unwrap().is_empty());
    }

    #[test]
    fn test_nameless_record_skipped() {
        let input: Vec<WireVacancy> = serde_json::from_value(json!([
            {"snippet": {"requirement": "Python"}}
        ]))
        .unwrap();
        assert!(filter_vacancies(&input, &["python"]).unwrap().is_empty());
    }

    #[test]
    fn test_keywords_are_literal() {
        let input: Vec<WireVacancy> = serde_json::from_value(json!([
            {"name": "A", "snippet": {"requirement": "Know C and Go"}},
            {"name": "B", "snippet": {"requirement": "Knowledge of C.Go"}}
        ]))
        .unwrap();

        // "." is escaped, so it only matches a literal dot
        let result = filter_vacancies(&input, &["c.go"]).unwrap();
        assert_eq!(names(&result), ["B"]);
    }

    #[test]
    fn test_unicode_words() {
        let input: Vec<WireVacancy> = serde_json::from_value(json!([
            {"name": "A", "snippet": {"requirement": "Опыт работы с Python"}},
            {"name": "B", "snippet": {"requirement": "Опытный разработчик"}}
        ]))
        .unwrap();

        let result = filter_vacancies(&input, &["опыт"]).unwrap();
        assert_eq!(names(&result), ["A"]);
    }

    #[test]
    fn test_filter_is_idempotent_and_ordered() {
        let keywords = ["java", "react", "django"];
        let once = filter_vacancies(&sample_vacancies(), &keywords).unwrap();
        let twice = filter_vacancies(&once, &keywords).unwrap();

        assert_eq!(once, twice);
        assert_eq!(
            names(&once),
            ["Python Developer", "Java Developer", "Frontend Developer"]
        );
    }
}
