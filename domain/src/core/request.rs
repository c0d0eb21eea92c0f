//! Generation request value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A natural-language question to turn into a query (Value Object)
///
/// Carries an optional scope identifier (a project or tenant name). The scope
/// is prepended to the question text before it is sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    question: String,
    scope: Option<String>,
}

impl GenerationRequest {
    /// Create a new request
    ///
    /// # Panics
    /// Panics if the question is empty or only whitespace
    pub fn new(question: impl Into<String>) -> Self {
        let question = question.into();
        assert!(!question.trim().is_empty(), "Question cannot be empty");
        Self {
            question,
            scope: None,
        }
    }

    /// Try to create a new request, rejecting blank questions
    pub fn try_new(question: impl Into<String>) -> Result<Self, DomainError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            question,
            scope: None,
        })
    }

    /// Narrow the request to one project. Blank scopes are ignored.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        self.scope = if scope.trim().is_empty() {
            None
        } else {
            Some(scope)
        };
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The text actually submitted to the model.
    pub fn prompt(&self) -> String {
        match &self.scope {
            Some(scope) => format!("For project with id '{}', {}", scope, self.question),
            None => self.question.clone(),
        }
    }
}

impl std::fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt())
    }
}

impl From<&str> for GenerationRequest {
    fn from(s: &str) -> Self {
        GenerationRequest::new(s)
    }
}

impl From<String> for GenerationRequest {
    fn from(s: String) -> Self {
        GenerationRequest::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_scope() {
        let request = GenerationRequest::new("How many classes are there?");
        assert_eq!(request.prompt(), "How many classes are there?");
        assert!(request.scope().is_none());
    }

    #[test]
    fn test_prompt_with_scope() {
        let request = GenerationRequest::new("list the files").with_scope("acme");
        assert_eq!(request.prompt(), "For project with id 'acme', list the files");
        assert_eq!(request.scope(), Some("acme"));
    }

    #[test]
    fn test_blank_scope_is_ignored() {
        let request = GenerationRequest::new("list the files").with_scope("  ");
        assert!(request.scope().is_none());
        assert_eq!(request.prompt(), "list the files");
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        GenerationRequest::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(matches!(
            GenerationRequest::try_new("   "),
            Err(DomainError::InvalidQuestion(_))
        ));
        assert!(GenerationRequest::try_new("What calls main?").is_ok());
    }
}
