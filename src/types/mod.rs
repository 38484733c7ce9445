// src/types/mod.rs
pub mod response;
pub mod vacancy;

pub use response::HhSearchResponse;
pub use vacancy::{validate_salary, ApiSalary, Snippet, Vacancy, VacancyDetail, WireVacancy};
