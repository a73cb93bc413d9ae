//! Input checks applied at the HTTP boundary, before any mutation reaches
//! the tracker. The tracker itself accepts whatever it is given.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ApplicationPatch, JobStatus, NewApplication};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw add/edit form as submitted. Date and status arrive as text so that
/// bad values surface as validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_title: String,
    pub application_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatchForm {
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub application_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

pub fn validate_target(count: i64) -> Result<u32, AppError> {
    if count <= 0 {
        return Err(AppError::Validation(
            "targetJobCount must be greater than zero".to_string(),
        ));
    }
    u32::try_from(count)
        .map_err(|_| AppError::Validation(format!("targetJobCount {count} is too large")))
}

/// Missing date defaults to `today`, missing status to `applied`.
pub fn validate_form(form: ApplicationForm, today: NaiveDate) -> Result<NewApplication, AppError> {
    Ok(NewApplication {
        company_name: required_text("companyName", &form.company_name)?,
        job_title: required_text("jobTitle", &form.job_title)?,
        application_date: match form.application_date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => today,
        },
        status: match form.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => JobStatus::Applied,
        },
        notes: form.notes.unwrap_or_default(),
    })
}

pub fn validate_patch(form: ApplicationPatchForm) -> Result<ApplicationPatch, AppError> {
    Ok(ApplicationPatch {
        company_name: form
            .company_name
            .map(|v| required_text("companyName", &v))
            .transpose()?,
        job_title: form
            .job_title
            .map(|v| required_text("jobTitle", &v))
            .transpose()?,
        application_date: form.application_date.map(|v| parse_date(&v)).transpose()?,
        status: form.status.map(|v| parse_status(&v)).transpose()?,
        notes: form.notes,
    })
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        AppError::Validation(format!(
            "applicationDate '{raw}' is not a valid YYYY-MM-DD date"
        ))
    })
}

pub fn parse_status(raw: &str) -> Result<JobStatus, AppError> {
    raw.parse::<JobStatus>().map_err(AppError::Validation)
}

fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn form() -> ApplicationForm {
        ApplicationForm {
            company_name: "  Acme ".to_string(),
            job_title: "Engineer".to_string(),
            application_date: Some("2024-05-20".to_string()),
            status: Some("interview".to_string()),
            notes: Some("via referral".to_string()),
        }
    }

    #[test]
    fn test_target_must_be_positive() {
        assert!(validate_target(0).is_err());
        assert!(validate_target(-3).is_err());
        assert_eq!(validate_target(25).unwrap(), 25);
    }

    #[test]
    fn test_target_overflow_is_rejected() {
        assert!(validate_target(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_valid_form() {
        let app = validate_form(form(), today()).unwrap();
        assert_eq!(app.company_name, "Acme");
        assert_eq!(app.status, JobStatus::Interview);
        assert_eq!(
            app.application_date,
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        );
    }

    #[test]
    fn test_form_defaults() {
        let app = validate_form(
            ApplicationForm {
                company_name: "Acme".to_string(),
                job_title: "Engineer".to_string(),
                ..Default::default()
            },
            today(),
        )
        .unwrap();
        assert_eq!(app.application_date, today());
        assert_eq!(app.status, JobStatus::Applied);
        assert_eq!(app.notes, "");
    }

    #[test]
    fn test_blank_required_fields_rejected() {
        let mut f = form();
        f.company_name = "   ".to_string();
        assert!(matches!(
            validate_form(f, today()),
            Err(AppError::Validation(msg)) if msg.contains("companyName")
        ));

        let mut f = form();
        f.job_title = String::new();
        assert!(validate_form(f, today()).is_err());
    }

    #[test]
    fn test_bad_date_and_status_rejected() {
        let mut f = form();
        f.application_date = Some("05/20/2024".to_string());
        assert!(validate_form(f, today()).is_err());

        let mut f = form();
        f.application_date = Some("2023-02-30".to_string());
        assert!(validate_form(f, today()).is_err());

        let mut f = form();
        f.status = Some("ghosted".to_string());
        assert!(validate_form(f, today()).is_err());
    }

    #[test]
    fn test_patch_only_carries_supplied_fields() {
        let patch = validate_patch(ApplicationPatchForm {
            status: Some("offer".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch, ApplicationPatch::status(JobStatus::Offer));
    }

    #[test]
    fn test_patch_rejects_blank_company() {
        assert!(validate_patch(ApplicationPatchForm {
            company_name: Some(" ".to_string()),
            ..Default::default()
        })
        .is_err());
    }
}
