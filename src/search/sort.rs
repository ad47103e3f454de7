use std::cmp::Ordering;

use crate::models::Alumnus;

/// Table column used for ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    /// Dataset order
    #[default]
    Original,
    Name,
    GradYear,
    Company,
    Title,
    Location,
}

impl SortColumn {
    /// Next column in the cycle used by the browser's sort key
    pub fn next(self) -> Self {
        match self {
            SortColumn::Original => SortColumn::Name,
            SortColumn::Name => SortColumn::GradYear,
            SortColumn::GradYear => SortColumn::Company,
            SortColumn::Company => SortColumn::Title,
            SortColumn::Title => SortColumn::Location,
            SortColumn::Location => SortColumn::Original,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Original => "original",
            SortColumn::Name => "name",
            SortColumn::GradYear => "grad",
            SortColumn::Company => "company",
            SortColumn::Title => "title",
            SortColumn::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Short description for the status bar, e.g. "name ↑"
    pub fn describe(&self) -> String {
        match (self.column, self.direction) {
            (SortColumn::Original, _) => SortColumn::Original.label().to_string(),
            (column, SortDirection::Ascending) => format!("{} ↑", column.label()),
            (column, SortDirection::Descending) => format!("{} ↓", column.label()),
        }
    }
}

/// Order rows in place. Stable; rows missing the sort value go last in either direction.
/// [`SortColumn::Original`] leaves the slice untouched.
pub fn sort_people(people: &mut [&Alumnus], order: SortOrder) {
    if order.column != SortColumn::Original {
        people.sort_by(|a, b| compare_alumni(a, b, order));
    }
}

/// Comparison behind [`sort_people`]; [`SortColumn::Original`] compares everything equal
pub fn compare_alumni(a: &Alumnus, b: &Alumnus, order: SortOrder) -> Ordering {
    match order.column {
        SortColumn::Original => Ordering::Equal,
        SortColumn::GradYear => compare_missing_last(a.grad_yr(), b.grad_yr(), order.direction),
        column => {
            compare_missing_last(text_key(a, column), text_key(b, column), order.direction)
        }
    }
}

fn text_key(alumnus: &Alumnus, column: SortColumn) -> Option<String> {
    let first_job = alumnus.first_job();
    let value = match column {
        SortColumn::Name => alumnus.person().name.as_deref(),
        SortColumn::Company => first_job.comp.as_deref(),
        SortColumn::Title => first_job.title.as_deref(),
        SortColumn::Location => first_job.loc.as_deref(),
        SortColumn::Original | SortColumn::GradYear => None,
    };
    value.map(str::to_lowercase)
}

fn compare_missing_last<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
