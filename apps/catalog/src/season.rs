use chrono::{Datelike, Local};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{Fish, Product, Season, YEAR_ROUND_SENTINELS};

#[allow(clippy::expect_used)]
static MONTH_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)月至([0-9]+)月").expect("month range pattern"));

/// Source of the current calendar month (1-12).
pub trait Clock {
    fn current_month(&self) -> u32;
}

/// Reads the month from the local date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> u32 {
        Local::now().month()
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMonth(pub u32);

impl Clock for FixedMonth {
    fn current_month(&self) -> u32 {
        self.0
    }
}

/// How a fish's `peakSeason` text reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeakSeason {
    /// Absent, empty or a year-round sentinel.
    Unspecified,
    MonthRange { start: u32, end: u32 },
    Named(Vec<Season>),
}

impl PeakSeason {
    pub fn classify(peak_season: Option<&str>) -> Self {
        let Some(text) = peak_season.filter(|text| !text.is_empty()) else {
            return Self::Unspecified;
        };
        if YEAR_ROUND_SENTINELS.contains(&text) {
            return Self::Unspecified;
        }

        if let Some(captures) = MONTH_RANGE.captures(text) {
            let start = captures[1].parse::<u32>();
            let end = captures[2].parse::<u32>();
            if let (Ok(start), Ok(end)) = (start, end) {
                return Self::MonthRange { start, end };
            }
        }

        Self::Named(
            Season::ALL
                .into_iter()
                .filter(|season| text.contains(season.marker()))
                .collect(),
        )
    }

    /// `None` when the product's tags decide instead.
    pub fn includes_month(&self, month: u32) -> Option<bool> {
        match self {
            Self::Unspecified => None,
            Self::MonthRange { start, end } if start <= end => {
                Some((*start..=*end).contains(&month))
            }
            Self::MonthRange { start, end } => Some(month >= *start || month <= *end),
            Self::Named(seasons) => Some(seasons.iter().any(|season| season.contains_month(month))),
        }
    }
}

/// Whether `product` should carry the in-season badge in `month`.
///
/// Products without a resolvable fish, or whose fish has no specific peak
/// season, fall back to the seasonal marker in their tags.
pub fn is_in_season(product: &Product, fish_index: &HashMap<String, Fish>, month: u32) -> bool {
    let fish = product
        .related_fish_id
        .as_deref()
        .and_then(|fish_id| fish_index.get(fish_id));

    let peak = PeakSeason::classify(fish.and_then(|fish| fish.peak_season.as_deref()));
    peak.includes_month(month).unwrap_or_else(|| product.has_seasonal_marker())
}
