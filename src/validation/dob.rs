//! Date-of-birth validation
//!
//! Two policies exist because users disagreed on what a date of birth must
//! satisfy: [`DobPolicy::Calendar`] requires a real calendar date that is not
//! in the future, [`DobPolicy::Syntactic`] only requires the MM/DD/YYYY shape.
//! The active policy comes from the config file.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::rules::Verdict;

/// Zero-padded MM/DD/YYYY; "1/2/2020" does not match
static DOB_SHAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

/// How strictly the date of birth is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DobPolicy {
    /// MM/DD/YYYY shape, a real calendar date, and not after today
    #[default]
    Calendar,
    /// MM/DD/YYYY shape only; no calendar or future-date check
    Syntactic,
}

impl DobPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Syntactic => "syntactic",
        }
    }
}

/// Validate a date of birth under the given policy
pub fn validate_dob(text: &str, policy: DobPolicy) -> Verdict {
    if !DOB_SHAPE_RE.is_match(text) {
        return Verdict::fail("Invalid date");
    }
    match policy {
        DobPolicy::Syntactic => Verdict::pass(),
        DobPolicy::Calendar => match NaiveDate::parse_from_str(text, "%m/%d/%Y") {
            Ok(date) if date <= Local::now().date_naive() => Verdict::pass(),
            _ => Verdict::fail("Invalid date"),
        },
    }
}
