use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::DailyLog;

/// At most this many records ride along with a generate request.
pub const INSIGHT_WINDOW: usize = 14;

const BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Style preset controlling the tone of generated narrative insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Professional,
    Friendly,
    ToughLove,
    Poetic,
    Humorous,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Professional,
        Persona::Friendly,
        Persona::ToughLove,
        Persona::Poetic,
        Persona::Humorous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Persona::Professional => "Professional Analyst",
            Persona::Friendly => "Supportive Friend",
            Persona::ToughLove => "Tough Coach",
            Persona::Poetic => "Philosopher",
            Persona::Humorous => "Comedian",
        }
    }

    fn system_instruction(&self) -> String {
        let base = "You are LifeDash AI, a personal analytics assistant. \
                    Analyze the user's daily logs (mood, sleep, habits, expenses).";
        let style = match self {
            Persona::Professional => {
                "Be data-driven, concise, and professional. Focus on correlations \
                 and actionable productivity metrics."
            }
            Persona::Friendly => {
                "Be warm, encouraging, and empathetic. Use emojis. Celebrate small wins."
            }
            Persona::ToughLove => {
                "Be direct and no-nonsense. Call out bad habits and excuses. \
                 Demand better performance."
            }
            Persona::Poetic => {
                "Speak in metaphors and philosophical musings about the passage of \
                 time and the nature of self-improvement."
            }
            Persona::Humorous => {
                "Be witty, sarcastic, and funny. Roast the user gently for bad \
                 habits but keep it lighthearted."
            }
        };
        format!("{base} {style}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Pattern,
    Warning,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub content: String,
}

/// The structured reply the service is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub summary: String,
    pub insights: Vec<Insight>,
}

// Envelope of a generateContent reply; only the path down to the text part
// matters here.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

/// One-shot client for the Gemini `generateContent` endpoint. No retry, no
/// request de-duplication: a second call while one is pending is simply an
/// independent call.
pub struct InsightClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl InsightClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::RemoteService(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }

    /// Send the most recent records (at most [`INSIGHT_WINDOW`]) plus the
    /// persona instruction, and parse the structured reply. Fails fast on a
    /// missing credential before any network I/O.
    pub async fn generate(
        &self,
        records: &[DailyLog],
        persona: Persona,
    ) -> AppResult<InsightReport> {
        if self.api_key.is_empty() {
            return Err(AppError::RemoteService(
                "GEMINI_API_KEY is not set; cannot request insights".into(),
            ));
        }

        let recent = recent_window(records);
        let prompt = build_prompt(&recent)?;

        let url = format!(
            "{BASE_URL}/v1beta/models/{}:generateContent",
            self.model
        );
        tracing::debug!(model = %self.model, records = recent.len(), persona = persona.label(), "requesting insights");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(&prompt, persona))
            .send()
            .await
            .map_err(|e| AppError::RemoteService(format!("insight request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RemoteService(format!(
                "insight API error {status}: {body}"
            )));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| AppError::RemoteService(format!("cannot read insight reply: {e}")))?;
        parse_generate_response(&raw)
    }
}

/// Most recent records first, capped at [`INSIGHT_WINDOW`].
fn recent_window(records: &[DailyLog]) -> Vec<DailyLog> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(INSIGHT_WINDOW);
    sorted
}

fn build_prompt(recent: &[DailyLog]) -> AppResult<String> {
    let data = serde_json::to_string(recent)
        .map_err(|e| AppError::RemoteService(format!("cannot serialize records: {e}")))?;
    Ok(format!(
        "Analyze the following JSON data representing my last {} days of life \
         (Mood 1-5, Sleep Hours, Expenses, Habits).\n\n\
         Data: {data}\n\n\
         Please provide 3 distinct insights:\n\
         1. A pattern recognition (correlation between two metrics).\n\
         2. A specific warning or area for improvement.\n\
         3. A positive reinforcement or recommendation.\n\n\
         Return the response in JSON format.",
        recent.len()
    ))
}

fn request_body(prompt: &str, persona: Persona) -> serde_json::Value {
    serde_json::json!({
        "systemInstruction": { "parts": [{ "text": persona.system_instruction() }] },
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "summary": { "type": "STRING" },
                    "insights": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "type": { "type": "STRING", "enum": ["pattern", "warning", "recommendation"] },
                                "title": { "type": "STRING" },
                                "content": { "type": "STRING" }
                            },
                            "required": ["type", "title", "content"]
                        }
                    }
                },
                "required": ["summary", "insights"]
            }
        }
    })
}

/// Validate the reply against the documented shape at the boundary. Any
/// mismatch — empty candidates, missing text part, or a payload that does
/// not match [`InsightReport`] — is a `RemoteService` failure, not data.
fn parse_generate_response(raw: &str) -> AppResult<InsightReport> {
    let envelope: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| AppError::RemoteService(format!("unparseable insight reply: {e}")))?;

    let text = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| AppError::RemoteService("insight reply carried no content".into()))?;

    serde_json::from_str(&text)
        .map_err(|e| AppError::RemoteService(format!("malformed insight payload: {e}")))
}
