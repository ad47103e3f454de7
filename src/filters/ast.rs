/// Fields that can appear in a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Company of any job
    Company,
    /// Title of any job
    Title,
    /// Location of any job
    Location,
    /// Sector or sub-sector of any job
    Sector,
    /// Skill tag of any job
    Skill,
    /// Seniority of any job
    Seniority,
    /// Remote type of any job
    Remote,
    /// Whether any job carries the founder flag (yes/no)
    Founder,
    /// Exact graduation year
    Grad,
    /// Graduation year on or after the given year
    Since,
}

/// Logical operators for combining filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Both conditions must match (default between different fields)
    And,
    /// Either condition matches (default within same field)
    Or,
}

/// Single field:value filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}

/// Filter expression: field filters joined by operators, evaluated left to right.
///
/// No parentheses:
/// - Same-field filters are OR'd: comp:acme comp:globex → (acme OR globex)
/// - Cross-field filters are AND'd: comp:acme loc:pune → (acme AND pune)
/// - Explicit operators override defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpr {
    pub filters: Vec<FieldFilter>,
    pub operators: Vec<FilterOperator>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    pub fn add_operator(&mut self, operator: FilterOperator) {
        self.operators.push(operator);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
