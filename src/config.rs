//! Build-time configuration of the chat assistant.

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
	pub api_key: Option<String>,
	pub model: String,
	pub endpoint: String,
}

impl ChatConfig {
	/// Reads the credential baked in at build time from `GEMINI_API_KEY`,
	/// falling back to `API_KEY`.
	pub fn from_env() -> Self {
		Self::with_key(option_env!("GEMINI_API_KEY").or(option_env!("API_KEY")))
	}

	pub fn with_key(api_key: Option<&str>) -> Self {
		Self {
			api_key: api_key
				.map(str::trim)
				.filter(|k| !k.is_empty())
				.map(str::to_string),
			model: DEFAULT_MODEL.to_string(),
			endpoint: DEFAULT_ENDPOINT.to_string(),
		}
	}

	pub fn generate_url(&self) -> String {
		format!(
			"{}/{}:generateContent",
			self.endpoint.trim_end_matches('/'),
			self.model
		)
	}
}

impl Default for ChatConfig {
	fn default() -> Self {
		Self::from_env()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_key_counts_as_missing() {
		assert_eq!(ChatConfig::with_key(Some("   ")).api_key, None);
		assert_eq!(ChatConfig::with_key(None).api_key, None);
		assert_eq!(ChatConfig::with_key(Some("k-1")).api_key.as_deref(), Some("k-1"));
	}

	#[test]
	fn url_names_the_model() {
		let config = ChatConfig::with_key(None);
		assert_eq!(
			config.generate_url(),
			"https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
		);
	}
}
