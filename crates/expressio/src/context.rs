//! Evaluation context configuration

use crate::lexer::LexerConfig;
use crate::locale::Language;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration for one interpreter session.
///
/// This is passed through the pipeline and controls behavior like the
/// decimal separator, nesting limits and tracing.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Active language (decides the decimal separator)
    pub language: Language,

    /// Maximum tree height and parenthesis nesting (stack overflow protection)
    pub max_depth: usize,

    /// Whether to log each evaluated node (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for the given language.
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Lexer settings derived from this context.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig::for_language(self.language)
    }
}
