use crate::error::AppError;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:5173";
const DEFAULT_PORT: u16 = 3000;

/// Process-scoped configuration, read once at startup and shared read-only
/// with every request handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_key: String,
    pub model: String,
    /// The single browser origin allowed by the CORS policy.
    pub allowed_origin: String,
    pub port: u16,
    /// Opt-in post-parse check that the model output carries the expected
    /// top-level keys. Off by default: the stock behavior passes any valid
    /// JSON through untouched.
    pub schema_check: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let openai_key = std::env::var("OPENAI_KEY")
            .map_err(|_| AppError::Config("OPENAI_KEY environment variable is required".into()))?;

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let schema_check = matches!(
            std::env::var("SCHEMA_CHECK").as_deref(),
            Ok("1") | Ok("true")
        );

        Ok(Self {
            openai_key,
            model,
            allowed_origin,
            port,
            schema_check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_config_error() {
        unsafe { std::env::remove_var("OPENAI_KEY") };
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_KEY"));
    }
}
