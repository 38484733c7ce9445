// src/types/vacancy.rs
//! Vacancy record and its wire/detail representations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

use crate::utils::strip_markup;

const SEPARATOR: &str =
    "========================================================================";

// ===== Wire Shape (API + storage) =====

/// Posting as returned by the hh.ru API and as persisted in the store.
///
/// Every field is optional: records coming from the network or from an older
/// store file are accepted as-is and checked for presence where it matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireVacancy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_url: Option<String>,
    /// `title` of older detail-shaped store entries
    #[serde(default, rename = "title", skip_serializing_if = "Option::is_none")]
    pub legacy_title: Option<String>,
    /// API link on live items, page link on older detail-shaped entries
    #[serde(default, rename = "url", skip_serializing_if = "Option::is_none")]
    pub legacy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_from: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_to: Option<Value>,
    /// Nested salary block used by the live API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<ApiSalary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSalary {
    #[serde(default)]
    pub from: Option<Value>,
    #[serde(default)]
    pub to: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
}

impl WireVacancy {
    /// Requirement text, `None` when the snippet or the field is missing
    pub fn requirement(&self) -> Option<&str> {
        self.snippet.as_ref()?.requirement.as_deref()
    }

    /// `name`, or the legacy `title` when there is none
    pub fn title(&self) -> Option<&str> {
        self.name.as_deref().or(self.legacy_title.as_deref())
    }

    /// `(name, alternate_url)`, falling back to `title`/`url` for each missing part
    pub fn natural_key(&self) -> Option<(&str, &str)> {
        let name = self.title()?;
        let url = self
            .alternate_url
            .as_deref()
            .or(self.legacy_url.as_deref())?;
        Some((name, url))
    }

    fn salary_bounds(&self) -> (u64, u64) {
        let nested = self.salary.as_ref();
        let from = self
            .salary_from
            .as_ref()
            .or_else(|| nested.and_then(|s| s.from.as_ref()));
        let to = self
            .salary_to
            .as_ref()
            .or_else(|| nested.and_then(|s| s.to.as_ref()));

        (
            from.map(validate_salary).unwrap_or(0),
            to.map(validate_salary).unwrap_or(0),
        )
    }
}

// ===== Detail Shape (display) =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyDetail {
    pub title: String,
    pub url: String,
    pub min_salary: u64,
    pub max_salary: u64,
    pub requirements: Option<String>,
}

// ===== Vacancy =====

/// A validated job posting.
///
/// Ordering and equality look at `salary_from` only, so two different postings
/// with the same lower salary bound compare equal. Use [`Vacancy::natural_key`]
/// for identity.
#[derive(Debug, Clone)]
pub struct Vacancy {
    title: String,
    url: String,
    salary_from: u64,
    salary_to: u64,
    description: Option<String>,
}

/// Coerce an untyped salary value. Anything that is not a positive number
/// becomes 0.
pub fn validate_salary(value: &Value) -> u64 {
    let amount = match value {
        Value::Number(number) => {
            if let Some(exact) = number.as_u64() {
                return exact;
            }
            number.as_f64()
        }
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_finite() && amount > 0.0 => amount as u64,
        _ => 0,
    }
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        salary_from: i64,
        salary_to: i64,
        description: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            salary_from: salary_from.max(0) as u64,
            salary_to: salary_to.max(0) as u64,
            description,
        }
    }

    /// Build from a raw wire record. Returns `None` when the name or URL is missing.
    pub fn from_wire(wire: &WireVacancy) -> Option<Self> {
        let (title, url) = wire.natural_key()?;
        let (salary_from, salary_to) = wire.salary_bounds();

        Some(Self {
            title: title.to_string(),
            url: url.to_string(),
            salary_from,
            salary_to,
            description: wire.requirement().map(str::to_string),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn salary_from(&self) -> u64 {
        self.salary_from
    }

    pub fn salary_to(&self) -> u64 {
        self.salary_to
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn natural_key(&self) -> (&str, &str) {
        (&self.title, &self.url)
    }

    pub fn to_detail(&self) -> VacancyDetail {
        VacancyDetail {
            title: self.title.clone(),
            url: self.url.clone(),
            min_salary: self.salary_from,
            max_salary: self.salary_to,
            requirements: self.description.clone(),
        }
    }

    /// Storage form: flat salaries, nested requirement, no API-only fields
    pub fn to_wire(&self) -> WireVacancy {
        WireVacancy {
            name: Some(self.title.clone()),
            alternate_url: Some(self.url.clone()),
            legacy_title: None,
            legacy_url: None,
            salary_from: Some(Value::from(self.salary_from)),
            salary_to: Some(Value::from(self.salary_to)),
            salary: None,
            snippet: Some(Snippet {
                requirement: self.description.clone(),
                responsibility: None,
            }),
        }
    }
}

impl From<VacancyDetail> for Vacancy {
    fn from(detail: VacancyDetail) -> Self {
        Self {
            title: detail.title,
            url: detail.url,
            salary_from: detail.min_salary,
            salary_to: detail.max_salary,
            description: detail.requirements,
        }
    }
}

impl PartialEq for Vacancy {
    fn eq(&self, other: &Self) -> bool {
        self.salary_from == other.salary_from
    }
}

impl Eq for Vacancy {}

impl PartialOrd for Vacancy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vacancy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.salary_from.cmp(&other.salary_from)
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirements = self
            .description
            .as_deref()
            .map(strip_markup)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "not specified".to_string());

        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "Salary: from {} to {}", self.salary_from, self.salary_to)?;
        writeln!(f, "Requirements: {}", requirements)?;
        write!(f, "{}", SEPARATOR)
    }
}
