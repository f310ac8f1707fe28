//! Question and school catalogs: loaded once at startup, read-only afterwards.
//!
//! The catalog is the InvalidInput boundary: anything malformed (empty lists,
//! option-less questions, tag-less schools, unknown traits, bad answer indices)
//! is rejected here so the matcher and analyzer can assume validated input.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::errors::AppError;
use crate::models::catalog::{Question, School, Trait};

/// Catalog shipped with the binary. Override with `CATALOG_PATH`.
const EMBEDDED_CATALOG: &str = include_str!("../../catalog/artsoul.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no questions")]
    NoQuestions,

    #[error("Catalog has no schools")]
    NoSchools,

    #[error("Question {0} has no options")]
    QuestionWithoutOptions(u32),

    #[error("Question {question_id}, option {option_index} contributes no traits")]
    OptionWithoutTraits {
        question_id: u32,
        option_index: usize,
    },

    #[error("School '{0}' has no tags")]
    SchoolWithoutTags(String),

    #[error("Duplicate question id {0}")]
    DuplicateQuestion(u32),

    #[error("Duplicate school id '{0}'")]
    DuplicateSchool(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub schools: Vec<School>,
}

impl Catalog {
    /// Loads the catalog from `path` if given, otherwise from the embedded copy,
    /// and validates it.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("Loading catalog from {}", path.display());
                Self::from_json(&raw)?
            }
            None => Self::from_json(EMBEDDED_CATALOG)?,
        };

        info!(
            "Catalog loaded: {} questions, {} schools",
            catalog.questions.len(),
            catalog.schools.len()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }
        if self.schools.is_empty() {
            return Err(CatalogError::NoSchools);
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(CatalogError::QuestionWithoutOptions(question.id));
            }
            if let Some(option_index) = question.options.iter().position(|o| o.traits.is_empty())
            {
                return Err(CatalogError::OptionWithoutTraits {
                    question_id: question.id,
                    option_index,
                });
            }
        }

        let mut school_ids = HashSet::new();
        for school in &self.schools {
            if !school_ids.insert(school.id.as_str()) {
                return Err(CatalogError::DuplicateSchool(school.id.clone()));
            }
            if school.tags.is_empty() {
                return Err(CatalogError::SchoolWithoutTags(school.id.clone()));
            }
        }

        Ok(())
    }

    pub fn school(&self, id: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.id == id)
    }

    /// Converts one chosen option index per question (in question order) into
    /// the run's trait list. Traits are appended in answer order.
    pub fn collect_traits(&self, answers: &[usize]) -> Result<Vec<Trait>, AppError> {
        if answers.len() != self.questions.len() {
            return Err(AppError::InvalidInput(format!(
                "Expected {} answers, got {}",
                self.questions.len(),
                answers.len()
            )));
        }

        let mut traits = Vec::with_capacity(answers.len());
        for (question, &choice) in self.questions.iter().zip(answers) {
            let option = question.options.get(choice).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Question {} has {} options; answer index {choice} is out of range",
                    question.id,
                    question.options.len()
                ))
            })?;
            traits.extend_from_slice(&option.traits);
        }

        Ok(traits)
    }
}
