use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::{JobApplication, JobStatus, NewApplication};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Another form is already open")]
    FormAlreadyOpen,

    #[error("No form is open")]
    NoFormOpen,
}

/// Which form, if any, is open. Only one can be open at a time.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum EditorMode {
    #[default]
    Idle,
    Adding,
    Editing { application: JobApplication },
}

/// What a submitted form should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add,
    Update(String),
}

/// Form state plus the independently toggled details row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    mode: EditorMode,
    details_open: Option<String>,
}

impl Editor {
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn details_open(&self) -> Option<&str> {
        self.details_open.as_deref()
    }

    pub fn begin_add(&mut self) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.mode = EditorMode::Adding;
        Ok(())
    }

    pub fn begin_edit(&mut self, application: JobApplication) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.mode = EditorMode::Editing { application };
        Ok(())
    }

    /// Closes whichever form is open. Cancelling with nothing open is harmless.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Idle;
    }

    /// Closes the open form and reports what its submission should do.
    pub fn submit(&mut self) -> Result<Submission, EditorError> {
        match std::mem::take(&mut self.mode) {
            EditorMode::Idle => Err(EditorError::NoFormOpen),
            EditorMode::Adding => Ok(Submission::Add),
            EditorMode::Editing { application } => Ok(Submission::Update(application.id)),
        }
    }

    /// Opens the details row for `id`, or closes it if it was already open.
    pub fn toggle_details(&mut self, id: &str) {
        if self.details_open.as_deref() == Some(id) {
            self.details_open = None;
        } else {
            self.details_open = Some(id.to_string());
        }
    }

    /// Drops any transient state referring to a deleted record.
    pub fn forget(&mut self, id: &str) {
        if matches!(&self.mode, EditorMode::Editing { application } if application.id == id) {
            self.mode = EditorMode::Idle;
        }
        if self.details_open.as_deref() == Some(id) {
            self.details_open = None;
        }
    }

    /// Initial field values for the open form: today's date and `applied`
    /// for a new record, the record's own values when editing.
    pub fn form_values(&self, today: NaiveDate) -> Option<NewApplication> {
        match &self.mode {
            EditorMode::Idle => None,
            EditorMode::Adding => Some(NewApplication {
                company_name: String::new(),
                job_title: String::new(),
                application_date: today,
                status: JobStatus::Applied,
                notes: String::new(),
            }),
            EditorMode::Editing { application } => Some(NewApplication::from(application)),
        }
    }

    fn ensure_idle(&self) -> Result<(), EditorError> {
        match self.mode {
            EditorMode::Idle => Ok(()),
            _ => Err(EditorError::FormAlreadyOpen),
        }
    }
}
