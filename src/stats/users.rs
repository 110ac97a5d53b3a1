use crate::dataset::TripTable;

use super::mode::{CategoryCount, mode, value_counts};

/// A statistic over an optional column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    /// The source file has no such column.
    Unavailable,
    Available(T),
}

impl<T> Availability<T> {
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Unavailable => None,
            Self::Available(value) => Some(value),
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    /// Ties go to the earliest year.
    pub most_common: Option<i32>,
}

/// Breakdown of who rode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<CategoryCount>,
    pub genders: Availability<Vec<CategoryCount>>,
    pub birth_years: Availability<BirthYearStats>,
}

impl UserStats {
    /// Empty cells are skipped in every count.
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let columns = table.columns();

        let user_types = value_counts(table.iter().filter_map(|r| r.user_type.as_deref()));

        let genders = if columns.has_gender() {
            Availability::Available(value_counts(
                table.iter().filter_map(|r| r.gender.as_deref()),
            ))
        } else {
            Availability::Unavailable
        };

        let birth_years = if columns.has_birth_year() {
            let years = || table.iter().filter_map(|r| r.birth_year);
            Availability::Available(BirthYearStats {
                earliest: years().min(),
                most_recent: years().max(),
                most_common: mode(years()),
            })
        } else {
            Availability::Unavailable
        };

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}
