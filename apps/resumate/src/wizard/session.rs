//! One run of the resume builder: step position, draft, staged entries and
//! the single-flight submission gate.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::resume::{CreatedResume, ResumeDraft, ResumePayload};
use crate::state::AppState;
use crate::validation::{validate_draft, ValidationError};
use crate::wizard::editors::{
    remove_entry, EducationForm, ExperienceForm, LinkForm, ProjectForm, Section, SkillForm,
    SubCollectionEditor,
};
use crate::wizard::navigator::StepNavigator;

/// A validated draft ready to be sent, detached from the session so the
/// network call does not hold it borrowed.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    token: String,
    payload: ResumePayload,
}

impl PendingSubmission {
    pub fn payload(&self) -> &ResumePayload {
        &self.payload
    }

    /// Posts the draft and, on success, opens the returned document.
    pub async fn send(&self, state: &AppState) -> Result<CreatedResume, AppError> {
        info!(
            skills = self.payload.skills.len(),
            projects = self.payload.projects.len(),
            experience = self.payload.experience.len(),
            education = self.payload.education.len(),
            "Submitting resume"
        );

        match state.api.create_resume(&self.token, &self.payload).await {
            Ok(created) => {
                info!(url = %created.url, "Resume generated");
                state.opener.open(&created.url);
                Ok(created)
            }
            Err(e) => {
                warn!("Resume generation failed: {e}");
                Err(e)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct WizardSession {
    pub navigator: StepNavigator,
    pub link_editor: SubCollectionEditor<LinkForm>,
    pub skill_editor: SubCollectionEditor<SkillForm>,
    pub project_editor: SubCollectionEditor<ProjectForm>,
    pub experience_editor: SubCollectionEditor<ExperienceForm>,
    pub education_editor: SubCollectionEditor<EducationForm>,
    draft: ResumeDraft,
    submitting: bool,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ResumeDraft {
        &self.draft
    }

    /// Mutable access for the free-text scalars (name, contact details, about).
    pub fn draft_mut(&mut self) -> &mut ResumeDraft {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn commit_link(&mut self) -> Result<usize, ValidationError> {
        let position = self.link_editor.commit(&mut self.draft.links)?;
        debug!(position, "link committed");
        Ok(position)
    }

    pub fn commit_skill(&mut self) -> Result<usize, ValidationError> {
        let position = self.skill_editor.commit(&mut self.draft.skills)?;
        debug!(position, "skill committed");
        Ok(position)
    }

    pub fn commit_project(&mut self) -> Result<usize, ValidationError> {
        let position = self.project_editor.commit(&mut self.draft.projects)?;
        debug!(position, "project committed");
        Ok(position)
    }

    pub fn commit_experience(&mut self) -> Result<usize, ValidationError> {
        let position = self.experience_editor.commit(&mut self.draft.experience)?;
        debug!(position, "experience committed");
        Ok(position)
    }

    pub fn commit_education(&mut self) -> Result<usize, ValidationError> {
        let position = self.education_editor.commit(&mut self.draft.education)?;
        debug!(position, "education committed");
        Ok(position)
    }

    /// Deletes one committed entry. Returns `false` when `position` is out of range.
    pub fn remove(&mut self, section: Section, position: usize) -> bool {
        let removed = match section {
            Section::Links => remove_entry(&mut self.draft.links, position).is_some(),
            Section::Skills => remove_entry(&mut self.draft.skills, position).is_some(),
            Section::Projects => remove_entry(&mut self.draft.projects, position).is_some(),
            Section::Experience => remove_entry(&mut self.draft.experience, position).is_some(),
            Section::Education => remove_entry(&mut self.draft.education, position).is_some(),
        };
        debug!(section = section.as_str(), position, removed, "entry removal");
        removed
    }

    /// Validates the draft and raises the in-flight flag.
    ///
    /// Nothing reaches the network unless this succeeds. The flag stays raised
    /// until `finish_submit`, so the view can disable its trigger meanwhile.
    pub fn begin_submit(&mut self, token: Option<&str>) -> Result<PendingSubmission, AppError> {
        if self.submitting {
            return Err(AppError::SubmissionInFlight);
        }
        validate_draft(&self.draft)?;
        let token = token.ok_or(AppError::Unauthenticated)?;

        self.submitting = true;
        Ok(PendingSubmission {
            token: token.to_string(),
            payload: self.draft.to_payload(),
        })
    }

    /// Lowers the in-flight flag. The draft is kept either way so a failed
    /// submission can be retried as is.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Validate, send and open in one call, for callers that can hold the
    /// session for the duration of the request.
    pub async fn submit(
        &mut self,
        state: &AppState,
        token: Option<&str>,
    ) -> Result<CreatedResume, AppError> {
        let pending = self.begin_submit(token)?;
        let _in_flight = InFlight(&mut self.submitting);
        let result = pending.send(state).await;
        result
    }
}

/// Lowers the submitting flag when dropped, including when the request future is abandoned.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::errors::Operation;
    use crate::testing::{FakeApi, RecordingOpener, CREATED_URL, TOKEN};
    use crate::validation::Field;
    use crate::wizard::navigator::Step;

    fn state_with(api: Arc<FakeApi>, opener: Arc<RecordingOpener>) -> AppState {
        AppState::with_collaborators(Config::new("http://localhost:0"), api, opener)
    }

    fn filled_session() -> WizardSession {
        let mut session = WizardSession::new();
        let draft = session.draft_mut();
        draft.name = "Jane".to_string();
        draft.email = "j@x.com".to_string();
        draft.address = "1 Main St".to_string();
        draft.phone = "555-1234".to_string();
        session
    }

    #[test]
    fn test_staged_link_with_blank_title_is_rejected() {
        let mut session = WizardSession::new();
        session.link_editor.stage(LinkForm {
            title: String::new(),
            url: "https://x.com".to_string(),
        });

        let err = session.commit_link().unwrap_err();
        assert_eq!(err.field, Field::LinkTitle);
        assert!(session.draft().links().is_empty());
        assert_eq!(session.link_editor.staged().url, "https://x.com");
    }

    #[test]
    fn test_skills_are_not_deduplicated() {
        let mut session = WizardSession::new();
        session.skill_editor.staged_mut().name = " Go ".to_string();
        session.commit_skill().unwrap();
        session.skill_editor.staged_mut().name = "Go".to_string();
        session.commit_skill().unwrap();
        assert_eq!(session.draft().skills(), ["Go", "Go"]);
    }

    #[test]
    fn test_project_without_lines_does_not_mutate_draft() {
        let mut session = WizardSession::new();
        session.project_editor.stage(ProjectForm {
            name: "Compiler".to_string(),
            from: "01/2020".to_string(),
            to: "06/2020".to_string(),
            ..Default::default()
        });
        assert!(session.commit_project().is_err());
        assert!(session.draft().projects().is_empty());

        session
            .project_editor
            .staged_mut()
            .description
            .add_line("Wrote a parser");
        assert_eq!(session.commit_project().unwrap(), 0);
        assert_eq!(session.draft().projects()[0].project_description, ["Wrote a parser"]);
    }

    #[test]
    fn test_experience_without_lines_does_not_mutate_draft() {
        let mut session = WizardSession::new();
        session.experience_editor.open();
        session.experience_editor.stage(ExperienceForm {
            position: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            location: "Remote".to_string(),
            from: "01/2021".to_string(),
            to: "Present".to_string(),
            ..Default::default()
        });

        let err = session.commit_experience().unwrap_err();
        assert_eq!(err.field, Field::ExperienceDescription);
        assert!(session.draft().experience().is_empty());
        assert!(session.experience_editor.is_open());
        assert_eq!(session.experience_editor.staged().company_name, "Acme");

        session
            .experience_editor
            .staged_mut()
            .description
            .add_line("Shipped billing");
        assert_eq!(session.commit_experience().unwrap(), 0);
        assert_eq!(session.draft().experience()[0].description, ["Shipped billing"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut session = WizardSession::new();
        for skill in ["Rust", "Go", "SQL"] {
            session.skill_editor.staged_mut().name = skill.to_string();
            session.commit_skill().unwrap();
        }
        assert!(session.remove(Section::Skills, 1));
        assert_eq!(session.draft().skills(), ["Rust", "SQL"]);
        assert!(!session.remove(Section::Skills, 5));
        assert!(!session.remove(Section::Education, 0));
        assert_eq!(session.draft().skills(), ["Rust", "SQL"]);
    }

    #[test]
    fn test_navigation_ignores_incomplete_steps() {
        let mut session = WizardSession::new();
        assert_eq!(session.navigator.go_to(Step::Confirm.index()), Step::Confirm);
    }

    #[tokio::test]
    async fn test_each_missing_scalar_blocks_network() {
        let blanks: [fn(&mut ResumeDraft); 4] = [
            |d| d.name.clear(),
            |d| d.email = "  ".to_string(),
            |d| d.address.clear(),
            |d| d.phone = "\n".to_string(),
        ];
        for blank in blanks {
            let api = Arc::new(FakeApi::new());
            let opener = Arc::new(RecordingOpener::default());
            let state = state_with(api.clone(), opener.clone());
            let mut session = filled_session();
            blank(session.draft_mut());

            let err = session.submit(&state, Some(TOKEN)).await.unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.notice(Operation::GenerateResume).title, "Resume Generation Failed");
            assert!(api.calls().is_empty());
            assert!(opener.opened().is_empty());
            assert!(!session.is_submitting());
        }
    }

    #[tokio::test]
    async fn test_minimal_draft_submits_empty_lists() {
        let api = Arc::new(FakeApi::new());
        let opener = Arc::new(RecordingOpener::default());
        let state = state_with(api.clone(), opener.clone());
        let mut session = filled_session();

        let created = session.submit(&state, Some(TOKEN)).await.unwrap();
        assert_eq!(created.url, CREATED_URL);
        assert_eq!(api.calls(), [format!("create {TOKEN}")]);
        assert_eq!(opener.opened(), [CREATED_URL]);

        let payloads = api.payloads.lock().unwrap();
        let payload = &payloads[0];
        assert_eq!(payload.name, "Jane");
        assert!(payload.projects.is_empty());
        assert!(payload.skills.is_empty());
        assert!(payload.experience.is_empty());
        assert!(payload.education.is_empty());
    }

    #[tokio::test]
    async fn test_committed_entries_round_trip_in_order() {
        let api = Arc::new(FakeApi::new());
        let state = state_with(api.clone(), Arc::new(RecordingOpener::default()));
        let mut session = filled_session();

        for (title, url) in [("GitHub", "https://github.com/jane"), ("Blog", "https://jane.dev")] {
            session.link_editor.stage(LinkForm {
                title: title.to_string(),
                url: url.to_string(),
            });
            session.commit_link().unwrap();
        }
        for skill in ["Rust", "Go"] {
            session.skill_editor.staged_mut().name = skill.to_string();
            session.commit_skill().unwrap();
        }
        for name in ["Compiler", "Database"] {
            let mut project = ProjectForm {
                name: name.to_string(),
                from: "01/2020".to_string(),
                to: "06/2020".to_string(),
                ..Default::default()
            };
            project.description.add_line(&format!("Built the {name}"));
            session.project_editor.stage(project);
            session.commit_project().unwrap();
        }
        for company in ["Acme", "Globex"] {
            let mut experience = ExperienceForm {
                position: "Engineer".to_string(),
                company_name: company.to_string(),
                location: "Remote".to_string(),
                from: "01/2021".to_string(),
                to: "Present".to_string(),
                ..Default::default()
            };
            experience.description.add_line(&format!("Shipped billing at {company}"));
            session.experience_editor.stage(experience);
            session.commit_experience().unwrap();
        }
        for degree in ["BSc", "MSc"] {
            session.education_editor.stage(EducationForm {
                degree: degree.to_string(),
                university: "State U".to_string(),
                location: "Springfield".to_string(),
                from: "09/2015".to_string(),
                to: "06/2019".to_string(),
            });
            session.commit_education().unwrap();
        }

        session.submit(&state, Some(TOKEN)).await.unwrap();

        let payloads = api.payloads.lock().unwrap();
        let payload = &payloads[0];
        let link_titles: Vec<_> = payload.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(link_titles, ["GitHub", "Blog"]);
        assert_eq!(payload.skills, ["Rust", "Go"]);
        let project_names: Vec<_> = payload
            .projects
            .iter()
            .map(|p| p.project_name.as_str())
            .collect();
        assert_eq!(project_names, ["Compiler", "Database"]);
        assert_eq!(payload.projects[1].project_description, ["Built the Database"]);
        let companies: Vec<_> = payload
            .experience
            .iter()
            .map(|e| e.company_name.as_str())
            .collect();
        assert_eq!(companies, ["Acme", "Globex"]);
        let degrees: Vec<_> = payload.education.iter().map(|e| e.degree.as_str()).collect();
        assert_eq!(degrees, ["BSc", "MSc"]);

        assert_eq!(payload.links, session.draft().links());
        assert_eq!(payload.projects, session.draft().projects());
        assert_eq!(payload.experience, session.draft().experience());
        assert_eq!(payload.education, session.draft().education());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft() {
        let api = Arc::new(FakeApi::failing(500, Some("Renderer unavailable")));
        let opener = Arc::new(RecordingOpener::default());
        let state = state_with(api.clone(), opener.clone());
        let mut session = filled_session();
        let before = session.draft().clone();

        let err = session.submit(&state, Some(TOKEN)).await.unwrap_err();
        assert_eq!(err.notice(Operation::GenerateResume).message, "Renderer unavailable");
        assert_eq!(session.draft(), &before);
        assert!(!session.is_submitting());
        assert!(opener.opened().is_empty());

        // no automatic retry
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_submission_requires_token() {
        let api = Arc::new(FakeApi::new());
        let state = state_with(api.clone(), Arc::new(RecordingOpener::default()));
        let mut session = filled_session();

        let err = session.submit(&state, None).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_second_submission_refused_while_in_flight() {
        let mut session = filled_session();
        let pending = session.begin_submit(Some(TOKEN)).unwrap();
        assert_eq!(pending.payload().email, "j@x.com");
        assert!(session.is_submitting());
        assert!(matches!(
            session.begin_submit(Some(TOKEN)),
            Err(AppError::SubmissionInFlight)
        ));

        session.finish_submit();
        assert!(session.begin_submit(Some(TOKEN)).is_ok());
    }
}
