//! Sub-collection editors: the add/remove pattern behind every list field of the draft.
//!
//! An editor owns the staged ("form-in-progress") values for one list and knows
//! how to commit them. Committed entries live in the draft, never in the editor.

use crate::models::resume::{Education, Experience, Link, Project};
use crate::validation::{
    validate_education, validate_experience, validate_link, validate_project, validate_skill,
    ValidationError,
};

/// The five list-valued sections of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Links,
    Skills,
    Projects,
    Experience,
    Education,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Links => "links",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }
}

/// Staged fields for one entry type, validated on commit.
pub trait EntryForm: Default {
    type Entry;

    fn validate(&self) -> Result<Self::Entry, ValidationError>;
}

/// Ordered description lines for a project or experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionLines {
    lines: Vec<String>,
}

impl DescriptionLines {
    /// Appends the trimmed text. Blank input is ignored and returns `false`.
    pub fn add_line(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.lines.push(trimmed.to_string());
        true
    }

    pub fn remove_line(&mut self, position: usize) -> Option<String> {
        remove_entry(&mut self.lines, position)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub title: String,
    pub url: String,
}

impl EntryForm for LinkForm {
    type Entry = Link;

    fn validate(&self) -> Result<Link, ValidationError> {
        validate_link(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillForm {
    pub name: String,
}

impl EntryForm for SkillForm {
    type Entry = String;

    fn validate(&self) -> Result<String, ValidationError> {
        validate_skill(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub from: String,
    pub to: String,
    pub description: DescriptionLines,
}

impl EntryForm for ProjectForm {
    type Entry = Project;

    fn validate(&self) -> Result<Project, ValidationError> {
        validate_project(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceForm {
    pub position: String,
    pub company_name: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub description: DescriptionLines,
}

impl EntryForm for ExperienceForm {
    type Entry = Experience;

    fn validate(&self) -> Result<Experience, ValidationError> {
        validate_experience(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationForm {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub from: String,
    pub to: String,
}

impl EntryForm for EducationForm {
    type Entry = Education;

    fn validate(&self) -> Result<Education, ValidationError> {
        validate_education(self)
    }
}

/// Staged form plus modal visibility for one sub-collection.
#[derive(Debug, Clone, Default)]
pub struct SubCollectionEditor<F> {
    staged: F,
    open: bool,
}

impl<F: EntryForm> SubCollectionEditor<F> {
    pub fn new() -> Self {
        Self {
            staged: F::default(),
            open: false,
        }
    }

    /// Replaces the staged fields wholesale.
    pub fn stage(&mut self, form: F) {
        self.staged = form;
    }

    pub fn staged(&self) -> &F {
        &self.staged
    }

    pub fn staged_mut(&mut self) -> &mut F {
        &mut self.staged
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the modal and throws the staged fields away.
    pub fn dismiss(&mut self) {
        self.staged = F::default();
        self.open = false;
    }

    /// Validates the staged fields and appends the entry to `entries`.
    ///
    /// On success the staged fields are cleared, the modal closes and the new
    /// entry's position is returned. On failure nothing changes.
    pub fn commit(&mut self, entries: &mut Vec<F::Entry>) -> Result<usize, ValidationError> {
        let entry = self.staged.validate()?;
        entries.push(entry);
        self.staged = F::default();
        self.open = false;
        Ok(entries.len() - 1)
    }
}

/// Removes the entry at `position`, shifting later entries down.
/// Out-of-range positions are a no-op.
pub fn remove_entry<T>(entries: &mut Vec<T>, position: usize) -> Option<T> {
    (position < entries.len()).then(|| entries.remove(position))
}
