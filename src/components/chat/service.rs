use std::collections::BTreeMap;

use gloo_net::http::Request;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::transcript::{PendingRequest, Role, Turn};
use crate::config::ChatConfig;
use crate::content::PortfolioContent;

#[derive(Debug, Error, PartialEq)]
pub enum ChatError {
	#[error("no API key configured")]
	MissingCredential,
	#[error("request failed: {0}")]
	Network(String),
	#[error("service answered {status}: {body}")]
	Status { status: u16, body: String },
	#[error("malformed response: {0}")]
	Decode(String),
	#[error("response carried no text")]
	EmptyReply,
}

impl ChatError {
	/// Sentence shown in the transcript in place of a reply.
	pub fn fallback_text(&self) -> &'static str {
		match self {
			ChatError::MissingCredential => {
				"I'm sorry, but I can't connect to my brain right now (API Key missing). Please try exploring the network graph instead!"
			}
			ChatError::EmptyReply => "I'm having trouble thinking of a response right now.",
			ChatError::Network(_) | ChatError::Status { .. } | ChatError::Decode(_) => {
				"I seem to be momentarily disconnected from the universal web. Please try again later."
			}
		}
	}
}

pub fn system_instruction(content: &PortfolioContent) -> String {
	let projects = serde_json::to_string(content.projects).unwrap_or_default();
	let connections: BTreeMap<&str, &[&str]> = content.connections.iter().copied().collect();
	let connections = serde_json::to_string(&connections).unwrap_or_default();

	format!(
		"You are an AI assistant for the design portfolio of Alina Schmeiß.
Alina is an Integrated Designer who focuses on relationships between humans, nature, and the universe.
Her work intersects social justice, environmental stewardship, and creative expression.

Here is her project data:
{projects}

Here are the thematic connections between projects:
{connections}

Your goal is to answer visitor questions about her work, philosophy, and specific projects.
Keep answers concise, professional, yet warm and slightly poetic, matching her design philosophy.
If asked about a specific project, provide details from the data.
If asked about her skills, infer them from the connections (e.g., Figma, InDesign, Social Design).
Do not hallucinate contact information. If asked for contact, suggest looking at the portfolio footer (if it existed) or imply she is open to collaboration.
"
	)
}

#[derive(Debug, Serialize)]
struct Part<'a> {
	text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	role: Option<Role>,
	parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
	system_instruction: Content<'a>,
	contents: Vec<Content<'a>>,
}

impl<'a> GenerateRequest<'a> {
	fn new(instruction: &'a str, history: &'a [Turn], message: &'a str) -> Self {
		let turn = |role: Role, text: &'a str| Content {
			role: Some(role),
			parts: vec![Part { text }],
		};
		Self {
			system_instruction: Content {
				role: None,
				parts: vec![Part { text: instruction }],
			},
			contents: history
				.iter()
				.map(|t| turn(t.role, t.text.as_str()))
				.chain(std::iter::once(turn(Role::User, message)))
				.collect(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
	#[serde(default)]
	content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
	#[serde(default)]
	parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
	#[serde(default)]
	text: Option<String>,
}

impl GenerateResponse {
	fn into_text(self) -> Result<String, ChatError> {
		let text: String = self
			.candidates
			.into_iter()
			.next()
			.and_then(|c| c.content)
			.map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
			.unwrap_or_default();
		if text.trim().is_empty() {
			Err(ChatError::EmptyReply)
		} else {
			Ok(text)
		}
	}
}

/// Sends one completion request; no retries, no timeout.
pub async fn request_reply(
	config: &ChatConfig,
	content: &PortfolioContent,
	history: &[Turn],
	message: &str,
) -> Result<String, ChatError> {
	let key = config.api_key.as_deref().ok_or(ChatError::MissingCredential)?;
	let instruction = system_instruction(content);
	let body = GenerateRequest::new(&instruction, history, message);

	debug!("Sending chat request with {} prior turns", history.len());
	let response = Request::post(&config.generate_url())
		.header("x-goog-api-key", key)
		.json(&body)
		.map_err(|e| ChatError::Network(e.to_string()))?
		.send()
		.await
		.map_err(|e| ChatError::Network(e.to_string()))?;

	if !response.ok() {
		let status = response.status();
		let body = response.text().await.unwrap_or_default();
		return Err(ChatError::Status { status, body });
	}

	response
		.json::<GenerateResponse>()
		.await
		.map_err(|e| ChatError::Decode(e.to_string()))?
		.into_text()
}

/// Reply text for a submission; failures become their fallback sentence.
pub async fn generate_reply(
	config: &ChatConfig,
	content: &PortfolioContent,
	request: &PendingRequest,
) -> String {
	match request_reply(config, content, &request.history, &request.message).await {
		Ok(text) => text,
		Err(err) => {
			match err {
				ChatError::MissingCredential | ChatError::EmptyReply => warn!("Chat reply unavailable: {err}"),
				_ => error!("Chat service error: {err}"),
			}
			err.fallback_text().to_string()
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::components::chat::transcript::Transcript;

	#[test]
	fn instruction_embeds_portfolio_tables() {
		let text = system_instruction(&PortfolioContent::builtin());
		assert!(text.contains("\"label\":\"Co-Heat Wuppertal\""));
		assert!(text.contains("\"p7\":[\"Gender Design\",\"Feminism\",\"Textile Making\"]"));
	}

	#[test]
	fn request_body_carries_history_then_message() {
		let history = vec![
			Turn { role: Role::Assistant, text: "hello".into() },
			Turn { role: Role::User, text: "hi".into() },
		];
		let body = GenerateRequest::new("be kind", &history, "What is Co-Heat?");
		assert_eq!(
			serde_json::to_value(&body).unwrap(),
			json!({
				"systemInstruction": { "parts": [{ "text": "be kind" }] },
				"contents": [
					{ "role": "model", "parts": [{ "text": "hello" }] },
					{ "role": "user", "parts": [{ "text": "hi" }] },
					{ "role": "user", "parts": [{ "text": "What is Co-Heat?" }] }
				]
			})
		);
	}

	#[test]
	fn reply_text_joins_first_candidate_parts() {
		let response: GenerateResponse = serde_json::from_value(json!({
			"candidates": [
				{ "content": { "role": "model", "parts": [{ "text": "Warmth, " }, { "text": "shared." }] } },
				{ "content": { "parts": [{ "text": "ignored" }] } }
			]
		}))
		.unwrap();
		assert_eq!(response.into_text().unwrap(), "Warmth, shared.");
	}

	#[test]
	fn empty_responses_are_errors() {
		let none: GenerateResponse = serde_json::from_value(json!({})).unwrap();
		assert_eq!(none.into_text(), Err(ChatError::EmptyReply));

		let blank: GenerateResponse =
			serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [{ "text": " " }] } }] }))
				.unwrap();
		assert_eq!(blank.into_text(), Err(ChatError::EmptyReply));
	}

	#[test]
	fn every_failure_has_a_fallback() {
		assert!(ChatError::MissingCredential.fallback_text().contains("API Key missing"));
		assert_eq!(
			ChatError::EmptyReply.fallback_text(),
			"I'm having trouble thinking of a response right now."
		);
		let transport = ChatError::Status { status: 503, body: String::new() }.fallback_text();
		assert_eq!(transport, ChatError::Network("x".into()).fallback_text());
		assert_eq!(transport, ChatError::Decode("x".into()).fallback_text());
	}

	#[test]
	fn missing_key_short_circuits() {
		let config = ChatConfig::with_key(None);
		let mut transcript = Transcript::default();
		let request = transcript.submit("What is Co-Heat?").unwrap();

		let reply = futures::executor::block_on(generate_reply(
			&config,
			&PortfolioContent::builtin(),
			&request,
		));
		transcript.resolve(reply);

		assert!(!transcript.is_awaiting());
		assert_eq!(
			transcript.turns().last().unwrap().text,
			ChatError::MissingCredential.fallback_text()
		);
	}
}
