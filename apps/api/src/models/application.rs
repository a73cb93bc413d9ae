use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Rejected,
        JobStatus::Offer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Rejected => "rejected",
            JobStatus::Offer => "offer",
        }
    }

    /// Capitalized form shown on status badges.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Rejected => "Rejected",
            JobStatus::Offer => "Offer",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown status '{s}' (expected applied, interview, rejected or offer)")
            })
    }
}

/// One tracked job application. `id` is assigned once at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub company_name: String,
    pub job_title: String,
    pub application_date: NaiveDate,
    pub status: JobStatus,
    pub notes: String,
}

/// Application fields supplied by the add/edit form. Everything but the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub company_name: String,
    pub job_title: String,
    pub application_date: NaiveDate,
    pub status: JobStatus,
    pub notes: String,
}

impl NewApplication {
    pub fn with_id(self, id: String) -> JobApplication {
        JobApplication {
            id,
            company_name: self.company_name,
            job_title: self.job_title,
            application_date: self.application_date,
            status: self.status,
            notes: self.notes,
        }
    }
}

impl From<&JobApplication> for NewApplication {
    fn from(app: &JobApplication) -> Self {
        NewApplication {
            company_name: app.company_name.clone(),
            job_title: app.job_title.clone(),
            application_date: app.application_date,
            status: app.status,
            notes: app.notes.clone(),
        }
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApplicationPatch {
    pub fn status(status: JobStatus) -> Self {
        ApplicationPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, app: &mut JobApplication) {
        if let Some(company_name) = &self.company_name {
            app.company_name = company_name.clone();
        }
        if let Some(job_title) = &self.job_title {
            app.job_title = job_title.clone();
        }
        if let Some(date) = self.application_date {
            app.application_date = date;
        }
        if let Some(status) = self.status {
            app.status = status;
        }
        if let Some(notes) = &self.notes {
            app.notes = notes.clone();
        }
    }
}

impl From<NewApplication> for ApplicationPatch {
    fn from(data: NewApplication) -> Self {
        ApplicationPatch {
            company_name: Some(data.company_name),
            job_title: Some(data.job_title),
            application_date: Some(data.application_date),
            status: Some(data.status),
            notes: Some(data.notes),
        }
    }
}
