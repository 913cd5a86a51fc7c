use serde::Serialize;

pub const GREETING: &str =
	"Hi! I'm Alina's AI assistant. Ask me anything about her design philosophy or projects.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Role {
	#[serde(rename = "user")]
	User,
	#[serde(rename = "model")]
	Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
	pub role: Role,
	pub text: String,
}

/// What goes out with a submission: the history before it, and the message.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
	pub history: Vec<Turn>,
	pub message: String,
}

/// Append-only conversation, idle or awaiting exactly one reply.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
	turns: Vec<Turn>,
	awaiting: bool,
}

impl Transcript {
	pub fn new(greeting: &str) -> Self {
		Self {
			turns: vec![Turn {
				role: Role::Assistant,
				text: greeting.to_string(),
			}],
			awaiting: false,
		}
	}

	pub fn turns(&self) -> &[Turn] {
		&self.turns
	}

	pub fn is_awaiting(&self) -> bool {
		self.awaiting
	}

	/// Whether `input` would be accepted by [`Transcript::submit`].
	pub fn accepts(&self, input: &str) -> bool {
		!self.awaiting && !input.trim().is_empty()
	}

	/// Records the user's turn and moves to awaiting. Blank input, or a
	/// submission while a reply is outstanding, changes nothing.
	pub fn submit(&mut self, input: &str) -> Option<PendingRequest> {
		if !self.accepts(input) {
			return None;
		}
		let message = input.trim().to_string();
		let history = self.turns.clone();
		self.turns.push(Turn {
			role: Role::User,
			text: message.clone(),
		});
		self.awaiting = true;
		Some(PendingRequest { history, message })
	}

	/// Records the assistant's reply and returns to idle.
	pub fn resolve(&mut self, reply: String) {
		if !self.awaiting {
			return;
		}
		self.turns.push(Turn {
			role: Role::Assistant,
			text: reply,
		});
		self.awaiting = false;
	}
}

impl Default for Transcript {
	fn default() -> Self {
		Self::new(GREETING)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_with_greeting() {
		let transcript = Transcript::default();
		assert_eq!(transcript.turns().len(), 1);
		assert_eq!(transcript.turns()[0].role, Role::Assistant);
		assert_eq!(transcript.turns()[0].text, GREETING);
		assert!(!transcript.is_awaiting());
	}

	#[test]
	fn blank_input_is_ignored() {
		let mut transcript = Transcript::default();
		assert!(transcript.submit("").is_none());
		assert!(transcript.submit("   \n\t").is_none());
		assert_eq!(transcript, Transcript::default());
	}

	#[test]
	fn round_trip_adds_two_turns() {
		let mut transcript = Transcript::default();
		let request = transcript.submit("What is Co-Heat?").unwrap();

		assert_eq!(request.message, "What is Co-Heat?");
		assert_eq!(request.history, vec![Turn { role: Role::Assistant, text: GREETING.into() }]);
		assert!(transcript.is_awaiting());
		assert_eq!(transcript.turns().last().unwrap().role, Role::User);
		assert_eq!(transcript.turns().last().unwrap().text, "What is Co-Heat?");

		transcript.resolve("A shared heating system.".into());
		assert!(!transcript.is_awaiting());
		assert_eq!(transcript.turns().len(), 3);
		assert_eq!(transcript.turns()[2].role, Role::Assistant);
		assert_eq!(transcript.turns()[2].text, "A shared heating system.");
	}

	#[test]
	fn input_is_trimmed() {
		let mut transcript = Transcript::default();
		let request = transcript.submit("  hello  ").unwrap();
		assert_eq!(request.message, "hello");
		assert_eq!(transcript.turns()[1].text, "hello");
	}

	#[test]
	fn submit_while_awaiting_is_a_no_op() {
		let mut transcript = Transcript::default();
		transcript.submit("first").unwrap();
		let before = transcript.clone();
		assert!(transcript.submit("second").is_none());
		assert_eq!(transcript, before);
	}

	#[test]
	fn history_excludes_the_new_message() {
		let mut transcript = Transcript::default();
		transcript.submit("one").unwrap();
		transcript.resolve("reply one".into());
		let request = transcript.submit("two").unwrap();
		let texts: Vec<&str> = request.history.iter().map(|t| t.text.as_str()).collect();
		assert_eq!(texts, [GREETING, "one", "reply one"]);
	}

	#[test]
	fn stray_reply_is_dropped() {
		let mut transcript = Transcript::default();
		transcript.resolve("unprompted".into());
		assert_eq!(transcript.turns().len(), 1);
	}
}
