use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub funnel: FunnelConfig,
}

/// Settings for the generative content provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the Gemini API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier (e.g. "gemini-2.5-flash").
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the quiz itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How many questions to request per session.
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

/// Where "unlock" sends the user, and what the share action hands out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelConfig {
    #[serde(default = "default_sales_url")]
    pub sales_url: String,
    /// Address of the hosted quiz, used as the shareable link.
    #[serde(default = "default_quiz_url")]
    pub quiz_url: String,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_question_count() -> u32 {
    5
}

fn default_sales_url() -> String {
    "https://pay.kiwify.com.br/ZXa3bQ4".to_string()
}

fn default_quiz_url() -> String {
    "https://mestre-da-conversa.quiz".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
        }
    }
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            sales_url: default_sales_url(),
            quiz_url: default_quiz_url(),
        }
    }
}
