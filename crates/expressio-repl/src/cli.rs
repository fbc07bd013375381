//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use expressio::Language;

/// Evaluate arithmetic expressions and assignments.
///
/// Without `--eval`, starts an interactive session.
#[derive(Parser, Debug)]
#[command(name = "expressio", version, about, long_about = None)]
pub struct Args {
    /// Language for messages and decimal separator (en, pt); overrides the saved preference
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Preferences file
    #[arg(long, value_name = "PATH", default_value = "preferences.json")]
    pub preferences: PathBuf,

    /// Evaluate an expression and exit; repeat to evaluate several in one session
    #[arg(short, long = "eval", value_name = "EXPR", allow_hyphen_values = true)]
    pub eval: Vec<String>,

    /// Log every evaluated node (needs RUST_LOG=debug)
    #[arg(long)]
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args =
            Args::try_parse_from(["expressio", "-l", "pt", "-e", "a = 1", "-e", "a + 1"]).unwrap();
        assert_eq!(args.language, Some(Language::Portuguese));
        assert_eq!(args.eval, vec!["a = 1".to_string(), "a + 1".to_string()]);
        assert_eq!(args.preferences, PathBuf::from("preferences.json"));
        assert!(!args.trace);
    }

    #[test]
    fn test_eval_accepts_leading_minus() {
        let args = Args::try_parse_from(["expressio", "-e", "-2 ^ 2"]).unwrap();
        assert_eq!(args.eval, vec!["-2 ^ 2".to_string()]);
    }

    #[test]
    fn test_bad_language_rejected() {
        assert!(Args::try_parse_from(["expressio", "--language", "xx"]).is_err());
    }
}
