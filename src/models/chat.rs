use chrono::{ DateTime, SecondsFormat, Utc };
use serde::{ Deserialize, Serialize };
use serde_json::Value as JsonValue;

pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;
pub const MIN_MAX_TOKENS: u32 = 1;
pub const MAX_MAX_TOKENS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    Temperature(f64),
    #[error("max_tokens must be between 1 and 4000, got {0}")]
    MaxTokens(u32),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("messages[{0}].content must not be empty")]
    EmptyContent(usize),
}

/// Sampling parameters forwarded with every completion request.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatParameters {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for ChatParameters {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ChatParameters {
    /// Checks the bounds the upstream API accepts. NaN is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(ValidationError::Temperature(self.temperature));
        }
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&self.max_tokens) {
            return Err(ValidationError::MaxTokens(self.max_tokens));
        }
        Ok(())
    }
}

/// Result of one orchestrated chat call. Failures are data, not errors.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatOutcome {
    Success {
        ai_response: String,
        model: String,
        usage: Option<JsonValue>,
        processing_time_seconds: f64,
        timestamp: DateTime<Utc>,
    },
    Failure {
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl ChatOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ChatOutcome::Success { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            ChatOutcome::Success { .. } => "success",
            ChatOutcome::Failure { .. } => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientHealth {
    pub status: String,
    pub api_key_configured: bool,
    pub base_url: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub service: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepseek_client: Option<ClientHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_valid() {
        let params = ChatParameters::default();
        assert_eq!(params.model, "deepseek-chat");
        assert_eq!(params.max_tokens, 1000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        for (temperature, max_tokens) in [(0.0, 1), (2.0, 4000), (1.3, 250)] {
            let params = ChatParameters { temperature, max_tokens, ..Default::default() };
            assert!(params.validate().is_ok(), "{} / {}", temperature, max_tokens);
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let hot = ChatParameters { temperature: 2.1, ..Default::default() };
        assert_eq!(hot.validate(), Err(ValidationError::Temperature(2.1)));

        let cold = ChatParameters { temperature: -0.1, ..Default::default() };
        assert!(cold.validate().is_err());

        let nan = ChatParameters { temperature: f64::NAN, ..Default::default() };
        assert!(nan.validate().is_err());

        let none = ChatParameters { max_tokens: 0, ..Default::default() };
        assert_eq!(none.validate(), Err(ValidationError::MaxTokens(0)));

        let many = ChatParameters { max_tokens: 4001, ..Default::default() };
        assert!(many.validate().is_err());
    }

    #[test]
    fn temperature_just_above_bound_is_not_rounded_into_range() {
        let params = ChatParameters {
            temperature: serde_json::from_str("2.00000001").unwrap(),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ValidationError::Temperature(2.00000001)));
    }

    #[test]
    fn any_model_name_is_forwarded() {
        let params = ChatParameters { model: String::new(), ..Default::default() };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn roles_use_lowercase_wire_names() {
        let msg: Message = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(msg, Message::assistant("hi"));
        assert_eq!(serde_json::to_value(Message::system("x")).unwrap()["role"], "system");
        assert!(serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#).is_err());
    }

    #[test]
    fn outcome_status_strings() {
        let failure = ChatOutcome::Failure { error: "boom".into(), timestamp: Utc::now() };
        assert_eq!(failure.status(), "error");
        assert!(!failure.is_success());
    }
}
