use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::JobApplication;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CompanyName,
    JobTitle,
    ApplicationDate,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CompanyName => "companyName",
            SortField::JobTitle => "jobTitle",
            SortField::ApplicationDate => "applicationDate",
            SortField::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SortField::CompanyName,
            SortField::JobTitle,
            SortField::ApplicationDate,
            SortField::Status,
        ]
        .into_iter()
        .find(|field| field.as_str() == s)
        .ok_or_else(|| format!("Unknown sort field '{s}'"))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Text columns compare case-insensitively, dates chronologically.
fn compare(a: &JobApplication, b: &JobApplication, field: SortField) -> Ordering {
    match field {
        SortField::CompanyName => a
            .company_name
            .to_lowercase()
            .cmp(&b.company_name.to_lowercase()),
        SortField::JobTitle => a.job_title.to_lowercase().cmp(&b.job_title.to_lowercase()),
        SortField::ApplicationDate => a.application_date.cmp(&b.application_date),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Stable in both directions: equal keys keep their insertion order.
pub fn sort_applications(
    applications: &[JobApplication],
    field: SortField,
    direction: SortDirection,
) -> Vec<&JobApplication> {
    let mut sorted: Vec<&JobApplication> = applications.iter().collect();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| compare(a, b, field)),
        SortDirection::Desc => sorted.sort_by(|a, b| compare(b, a, field)),
    }
    sorted
}
