use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::info;
use crate::study_engine::{error::BankError, models::SourceRecord};

const SAMPLE_BANK: &str = include_str!("../../data/sample_bank.json");

/// Validated, read-only question bank.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    records: Vec<SourceRecord>,
}

impl QuestionBank {
    /// Validate `records`: ids must be unique and answers non-empty.
    pub fn new(records: Vec<SourceRecord>) -> Result<Self, BankError> {
        let mut ids = HashSet::new();
        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(BankError::DuplicateId(record.id.clone()));
            }
            if record.answer.trim().is_empty() {
                return Err(BankError::EmptyAnswer(record.id.clone()));
            }
        }
        Ok(QuestionBank { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let records: Vec<SourceRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json_str(&json)?;
        info!("loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// The road-rules sample bank compiled into the crate.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json_str(SAMPLE_BANK)
    }

    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SourceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }

    /// Case-insensitive lookup of a category name.
    pub fn find_category(&self, name: &str) -> Option<String> {
        let wanted = name.trim().to_lowercase();
        self.categories().into_iter().find(|c| c.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin().unwrap();
        assert!(bank.len() >= 20);
        assert!(bank.categories().len() >= 3);
    }

    #[test]
    fn missing_and_null_distractors_parse_as_empty() {
        let json = r#"[
            {"id": "a", "prompt": "p", "answer": "x", "category": "c"},
            {"id": "b", "prompt": "p", "answer": "y", "category": "c", "distractors": null, "reference": "r"}
        ]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert!(bank.records().iter().all(|r| r.distractors().is_empty()));
        assert_eq!(bank.get("b").unwrap().reference, "r");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "a", "prompt": "p", "answer": "x", "category": "c"},
            {"id": "a", "prompt": "q", "answer": "y", "category": "c"}
        ]"#;
        assert!(matches!(QuestionBank::from_json_str(json), Err(BankError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn blank_answers_are_rejected() {
        let json = r#"[{"id": "a", "prompt": "p", "answer": "   ", "category": "c"}]"#;
        assert!(matches!(QuestionBank::from_json_str(json), Err(BankError::EmptyAnswer(_))));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(QuestionBank::from_json_str("{"), Err(BankError::Json(_))));
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let json = r#"[
            {"id": "1", "prompt": "p", "answer": "a", "category": "Signs"},
            {"id": "2", "prompt": "p", "answer": "b", "category": "Parking"},
            {"id": "3", "prompt": "p", "answer": "c", "category": "Signs"}
        ]"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert_eq!(bank.categories(), ["Signs", "Parking"]);
        assert_eq!(bank.find_category("parking").as_deref(), Some("Parking"));
        assert!(bank.find_category("speed").is_none());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = QuestionBank::load("/nonexistent/bank.json").unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
    }
}
