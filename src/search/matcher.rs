use crate::models::Alumnus;

/// Does `alumnus` match an already lowercased, non-empty `needle`?
///
/// Checked fields: name, and company, title and location of the first job. Absent fields
/// never match.
fn matches_lowercase(alumnus: &Alumnus, needle: &str) -> bool {
    let first_job = alumnus.first_job();
    std::iter::once(alumnus.person().name.as_deref())
        .chain([first_job.comp.as_deref(), first_job.title.as_deref(), first_job.loc.as_deref()])
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive substring match of `query` against the searchable fields.
///
/// An empty or whitespace-only query matches everyone.
pub fn matches_query(alumnus: &Alumnus, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || matches_lowercase(alumnus, &needle)
}

/// Filter `alumni` by a free-text query, keeping original order.
///
/// Always evaluated against the full slice it is given; there is no incremental state.
pub fn search_people<'a>(alumni: &'a [Alumnus], query: &str) -> Vec<&'a Alumnus> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return alumni.iter().collect();
    }
    alumni.iter().filter(|alumnus| matches_lowercase(alumnus, &needle)).collect()
}
