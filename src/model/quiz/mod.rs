use crate::model::discord::PartialDelivery;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const MAX_QUESTIONS: usize = 10;
pub const DEFAULT_AMOUNT: usize = 1;

pub static USAGE_MESSAGE: Lazy<String> = Lazy::new(|| {
    format!(
        "Format: !quiz język poziom(opcjonalny) ilość(opcjonalny).
Dostępne wartości:
* język: {}
* poziom: {}
* liczba: [1 - {}] - ile pytań wylosować
",
        Language::ALL
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Level::ALL
            .iter()
            .map(Level::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        MAX_QUESTIONS
    )
});

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Language {
    Html,
    Css,
    Js,
    Angular,
    React,
    Git,
    Other,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Html,
        Language::Css,
        Language::Js,
        Language::Angular,
        Language::React,
        Language::Git,
        Language::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Js => "js",
            Language::Angular => "angular",
            Language::React => "react",
            Language::Git => "git",
            Language::Other => "other",
        }
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or(ValidationError::UnknownLanguage)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Level {
    Junior,
    Mid,
    Senior,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Junior, Level::Mid, Level::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "junior",
            Level::Mid => "mid",
            Level::Senior => "senior",
        }
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(ValidationError::UnknownLevel)
    }
}

/// A validated `quiz` invocation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct QuizInvocation {
    pub language: Language,
    pub level: Option<Level>,
    pub amount: usize,
}

/// Reasons an invocation is rejected before any request is made.
/// The display text is what the user sees in the channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("Nie znalazłam takiego języka 😭")]
    UnknownLanguage,
    #[error("Nie znalazłam takiego poziomu 😭")]
    UnknownLevel,
    #[error("Maksymalnie możesz poprosić o {} pytań.", MAX_QUESTIONS)]
    InvalidAmount,
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to fetch questions from the question bank: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The question bank returned a malformed payload: {0}")]
    MalformedResponse(String),
    #[error("Failed to deliver the reply: {0}")]
    Delivery(anyhow::Error),
    #[error("The reply was only partially delivered: {0}")]
    PartialDelivery(PartialDelivery),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum QuizOutcome {
    InvalidArguments(ValidationError),
    NoQuestions,
    Questions(Vec<String>),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub id: Option<u64>,
    pub question: String,
    #[serde(rename = "_categoryId", default)]
    pub category_id: Option<String>,
    #[serde(rename = "_levelId", default)]
    pub level_id: Option<String>,
    #[serde(rename = "_statusId", default)]
    pub status_id: Option<String>,
    #[serde(default)]
    pub accepted_at: Option<String>,
    #[serde(default)]
    pub current_user_voted_on: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct QuestionSetResponse {
    pub data: Vec<Question>,
    pub meta: QuestionSetMeta,
}

#[derive(Deserialize, Serialize, Debug, Copy, Clone, Default, PartialEq)]
pub struct QuestionSetMeta {
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_message_lists_every_option() {
        assert_eq!(
            USAGE_MESSAGE.as_str(),
            "Format: !quiz język poziom(opcjonalny) ilość(opcjonalny).\n\
             Dostępne wartości:\n\
             * język: html, css, js, angular, react, git, other\n\
             * poziom: junior, mid, senior\n\
             * liczba: [1 - 10] - ile pytań wylosować\n"
        );
    }

    #[test]
    fn languages_are_matched_exactly() {
        assert_eq!("git".parse::<Language>(), Ok(Language::Git));
        assert_eq!("Git".parse::<Language>(), Err(ValidationError::UnknownLanguage));
        assert_eq!("ruby".parse::<Language>(), Err(ValidationError::UnknownLanguage));
        assert_eq!("senior".parse::<Level>(), Ok(Level::Senior));
        assert_eq!("lead".parse::<Level>(), Err(ValidationError::UnknownLevel));
    }

    #[test]
    fn validation_errors_render_user_text() {
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Maksymalnie możesz poprosić o 10 pytań."
        );
        assert_eq!(
            ValidationError::UnknownLanguage.to_string(),
            "Nie znalazłam takiego języka 😭"
        );
    }

    #[test]
    fn question_set_decodes_bank_payload() {
        let payload = r#"{
            "data": [{
                "id": 12,
                "question": "Czym jest hoisting?",
                "_categoryId": "js",
                "_levelId": "mid",
                "_statusId": "accepted",
                "acceptedAt": "2020-01-01T00:00:00.000Z",
                "currentUserVotedOn": false
            }],
            "meta": { "total": 1 }
        }"#;
        let response = serde_json::from_str::<QuestionSetResponse>(payload)
            .expect("Failed to decode question set.");
        assert_eq!(response.meta.total, 1);
        assert_eq!(response.data[0].question, "Czym jest hoisting?");
        assert_eq!(response.data[0].level_id.as_deref(), Some("mid"));
    }

    #[test]
    fn question_set_rejects_negative_total() {
        let payload = r#"{ "data": [], "meta": { "total": -1 } }"#;
        assert!(serde_json::from_str::<QuestionSetResponse>(payload).is_err());
    }
}
