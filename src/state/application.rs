//! State for the global "apply to this job" side panel.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use crate::error::ClientError;
use crate::net::api;
use crate::net::http::{ApiClient, Transport};
use crate::net::types::{Job, Role};
use crate::util::token_store::TokenStore;

/// Selected job plus panel visibility.
///
/// `panel_open` implies `selected_job` is set; closing clears both so a stale
/// job never flashes on the next open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationState {
    selected_job: Option<Job>,
    panel_open: bool,
}

impl ApplicationState {
    pub fn selected_job(&self) -> Option<&Job> {
        self.selected_job.as_ref()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Show the panel for `job`, replacing any previous selection.
    pub fn open_application_panel(&mut self, job: Job) {
        self.selected_job = Some(job);
        self.panel_open = true;
    }

    pub fn close_application_panel(&mut self) {
        self.selected_job = None;
        self.panel_open = false;
    }
}

/// Submit an application for `job_id` as the signed-in job seeker.
///
/// # Errors
///
/// [`ClientError::Auth`] when no job seeker token is stored, otherwise see
/// [`api::apply_to_job`].
pub async fn submit_application<T: Transport, S: TokenStore>(
    api: &ApiClient<T>,
    tokens: &S,
    job_id: &str,
    cover_letter: &str,
) -> Result<Option<String>, ClientError> {
    let Some(token) = tokens.read(Role::JobSeeker).await else {
        return Err(ClientError::Auth("Log in as a job seeker to apply".to_owned()));
    };
    api::apply_to_job(api, &token, job_id, cover_letter).await
}
