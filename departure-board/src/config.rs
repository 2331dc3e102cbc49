//! Runtime configuration for the departure board.

/// Environment variable overriding the input prompt.
pub const PROMPT_VAR: &str = "DEPARTURE_BOARD_PROMPT";

/// Environment variable overriding the JSON indent width.
pub const JSON_INDENT_VAR: &str = "DEPARTURE_BOARD_JSON_INDENT";

/// Environment variable holding the default log filter.
pub const LOG_VAR: &str = "DEPARTURE_BOARD_LOG";

/// Configuration for a board session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Printed before every command is read.
    pub prompt: String,

    /// Spaces per indent level in saved JSON files.
    pub json_indent: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        prompt: impl Into<String>,
        json_indent: usize,
        log_filter: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            json_indent,
            log_filter: log_filter.into(),
        }
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults plus whatever `lookup` returns.
    ///
    /// An unparseable indent falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        if let Some(raw) = lookup(JSON_INDENT_VAR) {
            if let Ok(indent) = raw.trim().parse() {
                config.json_indent = indent;
            }
        }

        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }

        config
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            json_indent: 4,
            log_filter: "error".to_string(),
        }
    }
}
