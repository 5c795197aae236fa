//! Question data and question-set validation

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::errors::{QuizError, Result};
use super::labels::Labels;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options` of the one correct answer
    #[serde(rename = "correct")]
    pub correct_option: usize,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, options: &[&str], correct_option: usize) -> Self {
        Question {
            id,
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option,
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }

    /// Text of the correct option
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_option]
    }

    fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(QuizError::EmptyPrompt { id: self.id });
        }
        if self.options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                id: self.id,
                count: self.options.len(),
            });
        }
        if self.correct_option >= self.options.len() {
            return Err(QuizError::CorrectOptionOutOfRange {
                id: self.id,
                correct: self.correct_option,
                count: self.options.len(),
            });
        }
        Ok(())
    }
}

/// On-disk layout of a question file
#[derive(Debug, Deserialize)]
struct QuestionFile {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
    #[serde(default)]
    labels: Labels,
}

/// A validated, non-empty, immutable sequence of questions.
///
/// Every question in a `QuestionSet` has a non-empty prompt, at least two
/// options and a correct index that names one of them. Identifiers are
/// unique. Sessions rely on these guarantees and never re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    title: String,
    description: Option<String>,
    questions: Vec<Question>,
    labels: Labels,
}

impl QuestionSet {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.id) {
                return Err(QuizError::DuplicateId { id: question.id });
            }
        }

        Ok(QuestionSet {
            title: title.into(),
            description: None,
            questions,
            labels: Labels::default(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Parse and validate a question set from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: QuestionFile = toml::from_str(source)?;
        let set = QuestionSet::new(file.title, file.questions)?.with_labels(file.labels);
        Ok(match file.description {
            Some(description) => set.with_description(description.trim().to_string()),
            None => set,
        })
    }

    /// Read a question set from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            questions = set.len(),
            "Loaded question set"
        );
        Ok(set)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// One-line report printed by `--check`
    pub fn summary(&self) -> String {
        let options: usize = self.questions.iter().map(|q| q.options.len()).sum();
        format!(
            "{}: {} question(s), {} option(s), all valid.",
            self.title,
            self.questions.len(),
            options
        )
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions, always at least one
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl std::ops::Index<usize> for QuestionSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_options(id: u32, correct: usize) -> Question {
        Question::new(id, "Pick one", &["yes", "no"], correct)
    }

    #[test]
    fn test_rejects_empty_set() {
        let err = QuestionSet::new("Empty", Vec::new()).unwrap_err();
        assert!(matches!(err, QuizError::EmptyQuestionSet));
    }

    #[test]
    fn test_rejects_correct_option_out_of_range() {
        let err = QuestionSet::new("Bad", vec![two_options(1, 2)]).unwrap_err();
        assert!(matches!(
            err,
            QuizError::CorrectOptionOutOfRange {
                id: 1,
                correct: 2,
                count: 2
            }
        ));
    }

    #[test]
    fn test_rejects_single_option() {
        let question = Question::new(7, "Only one", &["lonely"], 0);
        let err = QuestionSet::new("Bad", vec![question]).unwrap_err();
        assert!(matches!(err, QuizError::TooFewOptions { id: 7, count: 1 }));
    }

    #[test]
    fn test_rejects_blank_prompt() {
        let question = Question::new(3, "   ", &["a", "b"], 0);
        let err = QuestionSet::new("Bad", vec![question]).unwrap_err();
        assert!(matches!(err, QuizError::EmptyPrompt { id: 3 }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = QuestionSet::new("Dup", vec![two_options(4, 0), two_options(4, 1)]).unwrap_err();
        assert!(matches!(err, QuizError::DuplicateId { id: 4 }));
    }

    #[test]
    fn test_from_toml_str() {
        let source = r#"
            title = "Capitals"
            description = "  Name the capital.  "

            [[questions]]
            id = 10
            text = "Capital of France?"
            options = ["Lyon", "Paris", "Nice"]
            correct = 1
        "#;

        let set = QuestionSet::from_toml_str(source).expect("valid question file");
        assert_eq!(set.title(), "Capitals");
        assert_eq!(set.description(), Some("Name the capital."));
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].correct_text(), "Paris");
        assert!(set[0].is_correct(1));
        assert!(!set[0].is_correct(0));
    }

    #[test]
    fn test_from_toml_str_reads_labels() {
        let source = r#"
            title = "Hauptstädte"

            [[questions]]
            id = 1
            text = "Hauptstadt von Frankreich?"
            options = ["Lyon", "Paris"]
            correct = 1

            [labels]
            retry = "Nochmal"
        "#;

        let set = QuestionSet::from_toml_str(source).unwrap();
        assert_eq!(set.labels().retry, "Nochmal");
        assert_eq!(set.labels().next, Labels::default().next);
    }

    #[test]
    fn test_summary() {
        let set = QuestionSet::new("Pairs", vec![two_options(1, 0), two_options(2, 1)]).unwrap();
        assert_eq!(set.summary(), "Pairs: 2 question(s), 4 option(s), all valid.");
    }

    #[test]
    fn test_from_toml_str_without_questions() {
        let err = QuestionSet::from_toml_str("title = \"Nothing\"").unwrap_err();
        assert!(matches!(err, QuizError::EmptyQuestionSet));
    }

    #[test]
    fn test_from_toml_str_syntax_error() {
        let err = QuestionSet::from_toml_str("title = ").unwrap_err();
        assert!(matches!(err, QuizError::Parse(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_load_missing_file() {
        let err = QuestionSet::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }));
    }
}
