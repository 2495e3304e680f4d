use crate::models::Doctor;

/// The suggestion panel never shows more than this many entries.
pub const MAX_SUGGESTIONS: usize = 5;

fn matches_query(doctor: &Doctor, needle: &str) -> bool {
    doctor.full_name.to_lowercase().contains(needle)
        || doctor.specialization.to_lowercase().contains(needle)
}

/// Case-insensitive substring filter over name and specialization.
///
/// Always runs against the full directory, never an already-filtered view,
/// so repeated queries cannot narrow each other.
pub fn filter_doctors<'a>(doctors: &'a [Doctor], query: &str) -> Vec<&'a Doctor> {
    let needle = query.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| matches_query(doctor, &needle))
        .collect()
}

/// Matches for the suggestion panel, capped at [`MAX_SUGGESTIONS`].
///
/// An empty query suggests nothing; the panel hides instead of echoing the
/// whole directory.
pub fn suggest<'a>(doctors: &'a [Doctor], query: &str) -> Vec<&'a Doctor> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches = filter_doctors(doctors, query);
    matches.truncate(MAX_SUGGESTIONS);
    matches
}
