use serde_json::json;
use tempfile::TempDir;
use vacancy_scout::{process_batch, top_stored, JsonSaver, StoreDocument, WireVacancy};

fn batch() -> Vec<WireVacancy> {
    serde_json::from_value(json!([
        {
            "name": "Python Dev",
            "alternate_url": "u1",
            "salary_from": 100000,
            "salary_to": 150000,
            "snippet": {"requirement": "Python and Django"}
        },
        {
            "name": "Java Dev",
            "alternate_url": "u2",
            "salary_from": 90000,
            "salary_to": 120000,
            "snippet": {"requirement": "Java and Spring"}
        }
    ]))
    .unwrap()
}

#[test]
fn search_saves_everything_and_returns_matches() {
    let dir = TempDir::new().unwrap();
    let saver = JsonSaver::new(dir.path(), "vacancies");

    let matches = process_batch(&saver, &batch(), &["python", "django"]).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title(), "Python Dev");
    assert_eq!(matches[0].salary_to(), 150000);
    assert_eq!(saver.read().vacancies.len(), 2);

    let again = process_batch(&saver, &batch(), &["python", "django"]).unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(saver.read().vacancies.len(), 2);
}

#[test]
fn empty_fetch_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let saver = JsonSaver::new(dir.path(), "vacancies");
    saver.save(&batch()).unwrap();

    let matches = process_batch(&saver, &[], &["python"]).unwrap();
    assert!(matches.is_empty());
    assert_eq!(saver.read().vacancies.len(), 2);
}

#[test]
fn empty_fetch_does_not_touch_store_file() {
    let dir = TempDir::new().unwrap();
    let saver = JsonSaver::new(dir.path().join("data"), "vacancies");

    let matches = process_batch(&saver, &[], &["python"]).unwrap();
    assert!(matches.is_empty());
    assert!(!saver.path().exists());

    // a file the store cannot parse is not replaced by an empty document
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(saver.path(), "{not json").unwrap();
    process_batch(&saver, &[], &["python"]).unwrap();
    assert_eq!(std::fs::read_to_string(saver.path()).unwrap(), "{not json");
}

#[test]
fn listing_sorts_by_salary_and_limits() {
    let dir = TempDir::new().unwrap();
    let saver = JsonSaver::new(dir.path(), "vacancies");
    saver.save(&batch()).unwrap();
    saver
        .add(&json!({
            "name": "Rust Dev",
            "alternate_url": "u3",
            "salary_from": 200000,
            "salary_to": 250000,
            "snippet": {"requirement": "Rust and Tokio"}
        }))
        .unwrap();

    let none: [&str; 0] = [];
    let titles: Vec<String> = top_stored(&saver, &none, Some(2))
        .unwrap()
        .iter()
        .map(|v| v.title().to_string())
        .collect();
    assert_eq!(titles, ["Rust Dev", "Python Dev"]);

    let java = top_stored(&saver, &["spring"], None).unwrap();
    assert_eq!(java.len(), 1);
    assert_eq!(java[0].title(), "Java Dev");
}

#[test]
fn clear_resets_document() {
    let dir = TempDir::new().unwrap();
    let saver = JsonSaver::new(dir.path(), "vacancies.json");
    saver.save(&batch()).unwrap();
    saver.clear().unwrap();

    assert_eq!(saver.read(), StoreDocument::default());
    assert!(saver.path().ends_with("vacancies.json"));
}
