//! Client-side validation for wizard entries, the full draft and the auth forms.
//!
//! Every validator checks its fields in a fixed order and stops at the first
//! failure, so the user is told about exactly one missing field at a time.
//! Required values are compared after trimming surrounding whitespace and are
//! returned trimmed, ready to be committed.

use thiserror::Error;

use crate::models::resume::{Education, Experience, Link, Project, ResumeDraft};
use crate::wizard::editors::{EducationForm, ExperienceForm, LinkForm, ProjectForm, SkillForm};

/// Every user-editable field a validator can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LinkTitle,
    LinkUrl,
    SkillName,
    ProjectName,
    ProjectFrom,
    ProjectTo,
    ProjectDescription,
    Position,
    CompanyName,
    ExperienceLocation,
    ExperienceFrom,
    ExperienceTo,
    ExperienceDescription,
    Degree,
    University,
    EducationLocation,
    EducationFrom,
    EducationTo,
    Name,
    Email,
    Address,
    Phone,
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Message shown when the field is left empty.
    pub fn missing_message(self) -> &'static str {
        match self {
            Field::LinkTitle => "Link Title cannot be empty",
            Field::LinkUrl => "Link URL cannot be empty",
            Field::SkillName => "Skill Name cannot be empty",
            Field::ProjectName => "Project Name cannot be empty",
            Field::ProjectFrom | Field::ExperienceFrom | Field::EducationFrom => "Enter Start Date",
            Field::ProjectTo | Field::ExperienceTo | Field::EducationTo => "Enter End Date",
            Field::ProjectDescription => "At least add one line to Project description",
            Field::Position => "Position cannot be empty",
            Field::CompanyName => "Company Name cannot be empty",
            Field::ExperienceLocation | Field::EducationLocation => "Location cannot be empty",
            Field::ExperienceDescription => "At least add one line to Experience description",
            Field::Degree => "Degree cannot be empty",
            Field::University => "University Name cannot be empty",
            Field::Name => "Name cannot be empty",
            Field::Email => "Email cannot be empty",
            Field::Address => "Address cannot be empty",
            Field::Phone => "Phone cannot be empty",
            Field::Username => "Username cannot be empty",
            Field::Password => "Password cannot be empty",
            Field::ConfirmPassword => "Passwords don't match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn missing(field: Field) -> Self {
        Self {
            field,
            message: field.missing_message().to_string(),
        }
    }

    pub fn invalid(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Returns the trimmed value, or a missing-field error if nothing is left.
pub fn require(field: Field, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(trimmed.to_string())
}

fn require_lines(field: Field, lines: &[String]) -> Result<Vec<String>, ValidationError> {
    if lines.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(lines.to_vec())
}

pub fn validate_link(form: &LinkForm) -> Result<Link, ValidationError> {
    let title = require(Field::LinkTitle, &form.title)?;
    let link = require(Field::LinkUrl, &form.url)?;
    Ok(Link { title, link })
}

pub fn validate_skill(form: &SkillForm) -> Result<String, ValidationError> {
    require(Field::SkillName, &form.name)
}

pub fn validate_project(form: &ProjectForm) -> Result<Project, ValidationError> {
    let project_name = require(Field::ProjectName, &form.name)?;
    let from = require(Field::ProjectFrom, &form.from)?;
    let to = require(Field::ProjectTo, &form.to)?;
    let project_description = require_lines(Field::ProjectDescription, form.description.lines())?;
    Ok(Project {
        project_name,
        project_description,
        from,
        to,
    })
}

pub fn validate_experience(form: &ExperienceForm) -> Result<Experience, ValidationError> {
    let position = require(Field::Position, &form.position)?;
    let company_name = require(Field::CompanyName, &form.company_name)?;
    let location = require(Field::ExperienceLocation, &form.location)?;
    let from = require(Field::ExperienceFrom, &form.from)?;
    let to = require(Field::ExperienceTo, &form.to)?;
    let description = require_lines(Field::ExperienceDescription, form.description.lines())?;
    Ok(Experience {
        position,
        company_name,
        location,
        from,
        to,
        description,
    })
}

pub fn validate_education(form: &EducationForm) -> Result<Education, ValidationError> {
    let degree = require(Field::Degree, &form.degree)?;
    let university = require(Field::University, &form.university)?;
    let location = require(Field::EducationLocation, &form.location)?;
    let from = require(Field::EducationFrom, &form.from)?;
    let to = require(Field::EducationTo, &form.to)?;
    Ok(Education {
        degree,
        university,
        location,
        from,
        to,
    })
}

/// Pre-submission check. Only the contact scalars are required; every list may be empty.
/// Email is checked for presence only.
pub fn validate_draft(draft: &ResumeDraft) -> Result<(), ValidationError> {
    require(Field::Name, &draft.name)?;
    require(Field::Email, &draft.email)?;
    require(Field::Address, &draft.address)?;
    require(Field::Phone, &draft.phone)?;
    Ok(())
}

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    require(Field::Username, username)?;
    require(Field::Password, password)?;
    Ok(())
}

/// Registration rules. Length and whitespace checks run on the raw username.
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    require(Field::Username, username)?;
    require(Field::Password, password)?;
    if username.chars().count() <= 3 {
        return Err(ValidationError::invalid(
            Field::Username,
            "Username must be greater than 3 characters",
        ));
    }
    if username.contains(' ') {
        return Err(ValidationError::invalid(
            Field::Username,
            "Username cannot have spaces",
        ));
    }
    if password != confirm_password {
        return Err(ValidationError::missing(Field::ConfirmPassword));
    }
    Ok(())
}
