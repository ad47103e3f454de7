use serde::Serialize;

/// Summary counts derived from the normalized alumni list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlumniStats {
    pub total_alumni: usize,
    pub total_jobs: usize,
    pub unique_companies: usize,
    pub unique_locations: usize,
    /// Distinct graduation years, ascending
    pub graduation_years: Vec<i32>,
}

impl AlumniStats {
    pub fn unique_graduation_years(&self) -> usize {
        self.graduation_years.len()
    }

    /// Earliest and latest graduation year, if any are known
    pub fn graduation_range(&self) -> Option<(i32, i32)> {
        Some((*self.graduation_years.first()?, *self.graduation_years.last()?))
    }
}
