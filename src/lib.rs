// src/lib.rs
use anyhow::{Context, Result};

pub mod cli;
pub mod core;
pub mod filter;
pub mod store;
pub mod types;
pub mod utils;

pub use filter::{filter_vacancies, KeywordFilter};
pub use store::{JsonSaver, StoreDocument};
pub use types::{Vacancy, VacancyDetail, WireVacancy};

/// Merge the whole fetched batch into the store, then return the postings that
/// match `keywords`, in batch order. An empty batch leaves the store file alone.
pub fn process_batch<S: AsRef<str>>(
    saver: &JsonSaver,
    batch: &[WireVacancy],
    keywords: &[S],
) -> Result<Vec<Vacancy>> {
    if !batch.is_empty() {
        saver.save(batch)?;
    }

    let matching = filter_vacancies(batch, keywords).context("Failed to build keyword filter")?;
    Ok(matching.iter().filter_map(Vacancy::from_wire).collect())
}

/// Stored postings matching `keywords`, best paid first, cut to `top` when given
pub fn top_stored<S: AsRef<str>>(
    saver: &JsonSaver,
    keywords: &[S],
    top: Option<usize>,
) -> Result<Vec<Vacancy>> {
    let records = saver.read().records();
    let matching = filter_vacancies(&records, keywords).context("Failed to build keyword filter")?;

    let mut vacancies: Vec<Vacancy> = matching.iter().filter_map(Vacancy::from_wire).collect();
    vacancies.sort_by(|a, b| b.cmp(a));

    if let Some(limit) = top {
        vacancies.truncate(limit);
    }
    Ok(vacancies)
}
