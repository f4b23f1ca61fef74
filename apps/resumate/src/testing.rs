//! In-memory collaborators shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api_client::ResumeApi;
use crate::errors::AppError;
use crate::models::resume::{CreatedResume, ResumePayload, ResumeRecord};
use crate::models::user::User;
use crate::opener::ResourceOpener;

pub(crate) const TOKEN: &str = "token-123";
pub(crate) const CREATED_URL: &str = "https://cdn.example.com/resume.pdf";

#[derive(Default)]
pub(crate) struct FakeApi {
    failure: Option<(u16, Option<String>)>,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) payloads: Mutex<Vec<ResumePayload>>,
    pub(crate) resumes: Mutex<Vec<ResumeRecord>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every call answers with this status and message.
    pub(crate) fn failing(status: u16, message: Option<&str>) -> Self {
        Self {
            failure: Some((status, message.map(str::to_string))),
            ..Self::default()
        }
    }

    pub(crate) fn with_resumes(self, resumes: Vec<ResumeRecord>) -> Self {
        *self.resumes.lock().unwrap() = resumes;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, message)) => Err(AppError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResumeApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<String, AppError> {
        self.record(format!("login {username}"))?;
        Ok(TOKEN.to_string())
    }

    async fn register(&self, username: &str, _password: &str) -> Result<(), AppError> {
        self.record(format!("register {username}"))
    }

    async fn profile(&self, token: &str) -> Result<User, AppError> {
        self.record(format!("profile {token}"))?;
        Ok(User {
            id: Some("u1".to_string()),
            username: "jane".to_string(),
        })
    }

    async fn create_resume(
        &self,
        token: &str,
        payload: &ResumePayload,
    ) -> Result<CreatedResume, AppError> {
        self.record(format!("create {token}"))?;
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(CreatedResume {
            url: CREATED_URL.to_string(),
        })
    }

    async fn list_resumes(&self, token: &str) -> Result<Vec<ResumeRecord>, AppError> {
        self.record(format!("list {token}"))?;
        Ok(self.resumes.lock().unwrap().clone())
    }

    async fn delete_resume(&self, token: &str, id: &str) -> Result<(), AppError> {
        self.record(format!("delete {token} {id}"))?;
        self.resumes.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingOpener {
    pub(crate) opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ResourceOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

pub(crate) fn record(id: &str) -> ResumeRecord {
    ResumeRecord {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{id}.pdf"),
        preview_url: format!("https://cdn.example.com/{id}.png"),
    }
}
