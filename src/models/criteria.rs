use crate::utils::number::parse_leading_int;
use serde::Serialize;
use std::collections::BTreeSet;

/// Current filter selection.
///
/// Every dimension is independent; an empty value means "not filtered on
/// this dimension", never "matches nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Canonical `YYYY-MM-DD`, or empty.
    pub date: String,
    pub weeks: BTreeSet<i64>,
    pub areas: BTreeSet<String>,
    pub classes: BTreeSet<String>,
    pub show_all: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Week values arrive as text from the selection surface; members that
    /// are not numeric are dropped.
    pub fn with_weeks<I, S>(mut self, weeks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.weeks = weeks
            .into_iter()
            .filter_map(|w| parse_leading_int(w.as_ref()))
            .collect();
        self
    }

    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// True when any dimension constrains the result.
    pub fn has_filters(&self) -> bool {
        !self.date.is_empty()
            || !self.weeks.is_empty()
            || !self.areas.is_empty()
            || !self.classes.is_empty()
    }
}
