use directory_cell::models::{Availability, Doctor};
use directory_cell::services::search::{filter_doctors, suggest, MAX_SUGGESTIONS};

fn doctor(id: i64, full_name: &str, specialization: &str) -> Doctor {
    Doctor {
        id,
        full_name: full_name.to_string(),
        specialization: specialization.to_string(),
        phone: "555-0100".to_string(),
        email: format!("doctor{}@clinic.example", id),
        availability: Availability::default(),
    }
}

fn sample_directory() -> Vec<Doctor> {
    vec![
        doctor(1, "Jane Doe", "Cardiology"),
        doctor(2, "John Smith", "Dermatology"),
        doctor(3, "Maya Patel", "Cardiology"),
        doctor(4, "Liam Chen", "Neurology"),
    ]
}

#[test]
fn test_filter_is_case_insensitive_on_name() {
    let doctors = sample_directory();

    let matches = filter_doctors(&doctors, "JANE");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, 1);

    let matches = filter_doctors(&doctors, "jane");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, 1);
}

#[test]
fn test_filter_matches_specialization() {
    let doctors = sample_directory();

    let matches = filter_doctors(&doctors, "cardio");
    let ids: Vec<i64> = matches.iter().map(|doc| doc.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_filter_substring_anywhere() {
    let doctors = sample_directory();

    let matches = filter_doctors(&doctors, "mit");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].full_name, "John Smith");
}

#[test]
fn test_filter_no_match_yields_empty() {
    let doctors = sample_directory();

    assert!(filter_doctors(&doctors, "xyz").is_empty());
}

#[test]
fn test_filter_empty_query_returns_everything() {
    let doctors = sample_directory();

    assert_eq!(filter_doctors(&doctors, "").len(), doctors.len());
}

#[test]
fn test_filter_is_idempotent_from_full_list() {
    let doctors = sample_directory();

    let first: Vec<i64> = filter_doctors(&doctors, "cardio")
        .iter()
        .map(|doc| doc.id)
        .collect();
    let second: Vec<i64> = filter_doctors(&doctors, "cardio")
        .iter()
        .map(|doc| doc.id)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_suggestions_capped_at_five() {
    let mut doctors = sample_directory();
    for id in 5..=12 {
        doctors.push(doctor(id, &format!("Cara Lee {}", id), "Cardiology"));
    }

    let matches = suggest(&doctors, "car");
    assert_eq!(matches.len(), MAX_SUGGESTIONS);
}

#[test]
fn test_suggestions_below_cap_returns_all_matches() {
    let doctors = sample_directory();

    let matches = suggest(&doctors, "cardio");
    assert_eq!(matches.len(), 2);
}

#[test]
fn test_empty_query_suggests_nothing() {
    let doctors = sample_directory();

    assert!(suggest(&doctors, "").is_empty());
}
