use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{FieldName, QuestionId};

const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/questions.json");

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question catalog has no questions")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("duplicate field name: {0}")]
    DuplicateField(FieldName),

    #[error("question {0} has no text")]
    BlankText(QuestionId),

    #[error("question catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single Likert-scale prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "questionId")]
    id: QuestionId,
    #[serde(rename = "questionText")]
    text: String,
    #[serde(rename = "fieldName")]
    field_name: FieldName,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, field_name: FieldName) -> Self {
        Self {
            id,
            text: text.into(),
            field_name,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn field_name(&self) -> &FieldName {
        &self.field_name
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

/// Ordered, read-only list of survey questions.
///
/// Questions are kept sorted by id. Ids and field names are unique and the
/// catalog always holds at least one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the list is empty, contains duplicate ids or
    /// field names, or has a question with blank text.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(questions.len());
        let mut fields = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.text.trim().is_empty() {
                return Err(CatalogError::BlankText(question.id));
            }
            if !ids.insert(question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }
            if !fields.insert(question.field_name.clone()) {
                return Err(CatalogError::DuplicateField(question.field_name.clone()));
            }
        }

        questions.sort_by_key(Question::id);
        Ok(Self { questions })
    }

    /// Parse a catalog from `{"questions": [{questionId, questionText, fieldName}, ...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and the validation
    /// errors of [`QuestionCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.questions)
    }

    /// The catalog bundled with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled file fails validation.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(DEFAULT_CATALOG_JSON)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated catalog; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a zero-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
