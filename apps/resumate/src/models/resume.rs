use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_name: String,
    pub project_description: Vec<String>,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub position: String,
    pub company_name: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub from: String,
    pub to: String,
}

/// The in-memory resume being assembled by one wizard session.
///
/// Scalar fields are edited freely while the user types. The list fields only
/// change through the wizard's sub-collection editors, which validate an entry
/// before appending it, so they are exposed read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeDraft {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub about: String,
    pub(crate) links: Vec<Link>,
    pub(crate) skills: Vec<String>,
    pub(crate) projects: Vec<Project>,
    pub(crate) experience: Vec<Experience>,
    pub(crate) education: Vec<Education>,
}

impl ResumeDraft {
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    /// Builds the `POST /resume` body. Scalars are trimmed; committed entries
    /// are already trimmed and are copied in commit order.
    pub fn to_payload(&self) -> ResumePayload {
        ResumePayload {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            links: self.links.clone(),
            about: self.about.trim().to_string(),
            skills: self.skills.clone(),
            projects: self.projects.clone(),
            experience: self.experience.clone(),
            education: self.education.clone(),
        }
    }
}

/// Wire shape of a resume generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePayload {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub links: Vec<Link>,
    pub about: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

/// Successful `POST /resume` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResume {
    pub url: String,
}

/// One generated resume as listed by `GET /resume`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
    #[serde(rename = "previewUrl")]
    pub preview_url: String,
}
