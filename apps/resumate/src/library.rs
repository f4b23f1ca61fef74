//! The "my resumes" carousel: list, browse, open and delete generated resumes.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// A delete the user has asked for but not yet confirmed. Dropping it cancels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until it is confirmed"]
pub struct PendingDelete {
    id: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug)]
pub struct ResumeLibrary {
    resumes: Vec<ResumeRecord>,
    index: usize,
    loading: bool,
}

impl ResumeLibrary {
    /// Starts in the loading state; the first `refresh` settles it.
    pub fn new() -> Self {
        Self {
            resumes: Vec::new(),
            index: 0,
            loading: true,
        }
    }

    pub fn resumes(&self) -> &[ResumeRecord] {
        &self.resumes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.resumes.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&ResumeRecord> {
        self.resumes.get(self.index)
    }

    /// Reloads the list. On failure the list is left empty.
    pub async fn refresh(&mut self, state: &AppState, token: &str) -> Result<(), AppError> {
        self.loading = true;
        let result = state.api.list_resumes(token).await;
        self.loading = false;

        match result {
            Ok(resumes) => {
                info!(count = resumes.len(), "Resumes fetched");
                self.resumes = resumes;
                self.index = self.index.min(self.resumes.len().saturating_sub(1));
                Ok(())
            }
            Err(e) => {
                warn!("Error fetching resumes: {e}");
                self.resumes.clear();
                self.index = 0;
                Err(e)
            }
        }
    }

    /// Moves the carousel. Out-of-range indices are ignored.
    pub fn scroll_to(&mut self, index: usize) -> bool {
        if index >= self.resumes.len() {
            return false;
        }
        self.index = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.scroll_to(self.index + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(index) => self.scroll_to(index),
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.resumes.len()
    }

    /// Opens the document at `index`. Returns `false` if there is none.
    pub fn open(&self, state: &AppState, index: usize) -> bool {
        match self.resumes.get(index) {
            Some(resume) => {
                state.opener.open(&resume.url);
                true
            }
            None => false,
        }
    }

    /// First half of a delete: the view asks the user to confirm.
    pub fn request_delete(&self, id: &str) -> Option<PendingDelete> {
        self.resumes
            .iter()
            .any(|r| r.id == id)
            .then(|| PendingDelete { id: id.to_string() })
    }

    /// Removes the resume from the list, then deletes it remotely.
    ///
    /// The local removal is not rolled back if the remote delete fails: the
    /// entry stays hidden until the next `refresh` and the error is returned.
    pub async fn confirm_delete(
        &mut self,
        state: &AppState,
        token: &str,
        pending: PendingDelete,
    ) -> Result<(), AppError> {
        self.resumes.retain(|r| r.id != pending.id);
        self.index = self.index.min(self.resumes.len().saturating_sub(1));

        match state.api.delete_resume(token, &pending.id).await {
            Ok(()) => {
                info!(id = %pending.id, "Resume deleted");
                Ok(())
            }
            Err(e) => {
                warn!(id = %pending.id, "Remote delete failed, local removal kept: {e}");
                Err(e)
            }
        }
    }
}
