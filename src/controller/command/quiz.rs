use crate::model::app_state::AppState;
use crate::model::discord::{PartialDelivery, Reply};
use crate::model::quiz::{
    Language, Level, Question, QuestionSetResponse, QuizError, QuizInvocation, QuizOutcome,
    ValidationError, DEFAULT_AMOUNT, MAX_QUESTIONS, USAGE_MESSAGE,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::Instrument;
use uuid::Uuid;

pub const NAME: &str = "quiz";
pub const DESCRIPTION: &str = "Odpowiedz na pytanie";
pub const NO_QUESTIONS_MESSAGE: &str = "Niestety nie znalazłam pytań 😭";

/// Runs one `quiz` invocation and sends exactly one reply to `channel_id`.
pub async fn execute(
    state: &AppState,
    channel_id: &str,
    args: &[String],
) -> Result<QuizOutcome, QuizError> {
    let span = tracing::info_span!("quiz", invocation_id = %Uuid::new_v4(), channel_id);
    async move {
        let invocation = match QuizInvocation::from_args(args) {
            Ok(invocation) => invocation,
            Err(e) => {
                tracing::info!("Rejected quiz arguments {:?}: {:?}", args, e);
                send(state, channel_id, Reply::Text(error_reply(e))).await?;
                return Ok(QuizOutcome::InvalidArguments(e));
            }
        };

        let url = prepare_url(
            &state.question_bank_url,
            invocation.language.as_str(),
            invocation.level.map(|level| level.as_str()).unwrap_or_default(),
        );
        let response = fetch_questions(&state.http_client, &url).await?;

        if response.meta.total == 0 || response.data.is_empty() {
            tracing::info!("No questions found at {}.", &url);
            send(state, channel_id, Reply::Text(NO_QUESTIONS_MESSAGE.into())).await?;
            return Ok(QuizOutcome::NoQuestions);
        }

        let selected = {
            let mut rng = rand::thread_rng();
            select_questions(response.data, invocation.amount, &mut rng)
        };
        let lines = format_questions(&selected);
        send(state, channel_id, Reply::Lines(lines.clone())).await?;
        Ok(QuizOutcome::Questions(lines))
    }
    .instrument(span)
    .await
}

impl QuizInvocation {
    /// Reads `[language, level?, amount?]`. Missing positions count as empty.
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let arg = |index: usize| args.get(index).map(String::as_str).unwrap_or_default();
        validate_params(arg(0), arg(1), arg(2))
    }
}

pub fn validate_params(
    language: &str,
    level: &str,
    amount: &str,
) -> Result<QuizInvocation, ValidationError> {
    let language = language.parse::<Language>()?;

    let level = if level.is_empty() {
        None
    } else {
        Some(level.parse::<Level>()?)
    };

    let amount = if amount.is_empty() {
        DEFAULT_AMOUNT
    } else {
        amount
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| (1..=MAX_QUESTIONS as i64).contains(n))
            .ok_or(ValidationError::InvalidAmount)? as usize
    };

    Ok(QuizInvocation {
        language,
        level,
        amount,
    })
}

pub fn prepare_url(base_url: &str, language: &str, level: &str) -> String {
    let url = format!(
        "{}/questions?category={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(language)
    );
    if level.is_empty() {
        url
    } else {
        format!("{}&level={}", url, urlencoding::encode(level))
    }
}

pub async fn fetch_questions(
    client: &reqwest::Client,
    url: &str,
) -> Result<QuestionSetResponse, QuizError> {
    let body = client.get(url).send().await?.error_for_status()?.bytes().await?;
    serde_json::from_slice::<QuestionSetResponse>(&body).map_err(|e| {
        tracing::error!("Failed to decode question set from {}: {}", url, e);
        QuizError::MalformedResponse(e.to_string())
    })
}

pub fn select_questions<R: Rng + ?Sized>(
    mut questions: Vec<Question>,
    amount: usize,
    rng: &mut R,
) -> Vec<Question> {
    questions.shuffle(rng);
    questions.truncate(amount);
    questions
}

pub fn format_questions(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .map(|(index, item)| format!("**Pytanie {}:**   {}", index + 1, item.question))
        .collect()
}

pub fn error_reply(error: ValidationError) -> String {
    format!("{} ```{}```", error, USAGE_MESSAGE.as_str())
}

async fn send(state: &AppState, channel_id: &str, reply: Reply) -> Result<(), QuizError> {
    state
        .sender
        .send(channel_id, &reply)
        .await
        .map_err(|e| match e.downcast::<PartialDelivery>() {
            Ok(partial) => QuizError::PartialDelivery(partial),
            Err(e) => QuizError::Delivery(e),
        })
}
