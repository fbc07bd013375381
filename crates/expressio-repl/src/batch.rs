//! Non-interactive evaluation of `--eval` expressions

use std::io::Write;

use anyhow::{Context, Result};

use crate::repl::Session;

/// Evaluate `lines` in order within one session, echoing each line and its
/// rendering to `out`.
///
/// Returns `true` when every line evaluated successfully. A failing line
/// does not stop the later ones.
pub fn run_batch<W: Write>(session: &mut Session, lines: &[String], out: &mut W) -> Result<bool> {
    let mut succeeded = true;

    for line in lines {
        let rendered = match session.evaluate(line) {
            Ok(text) => text,
            Err(text) => {
                succeeded = false;
                text
            }
        };
        writeln!(out, "{}\n{}", line, rendered).context("failed to write output")?;
    }

    Ok(succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Preferences;
    use expressio::Language;
    use pretty_assertions::assert_eq;

    fn session(tag: &str, language: Language) -> Session {
        let path = std::env::temp_dir().join(format!(
            "expressio-{}-{}-prefs.json",
            std::process::id(),
            tag
        ));
        Session::new(Preferences { language }, path)
    }

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_batch_all_succeed() {
        let mut s = session("batch-ok", Language::English);
        let mut out = Vec::new();

        let ok = run_batch(&mut s, &lines(&["a = 2", "a * 3"]), &mut out).unwrap();
        assert!(ok);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a = 2\n>> a = 2.00000\na * 3\n>> 6.00000\n"
        );
    }

    #[test]
    fn test_batch_failure_is_reported_and_later_lines_run() {
        let mut s = session("batch-fail", Language::English);
        let mut out = Vec::new();

        let ok = run_batch(&mut s, &lines(&["1 / 0", "2 + 2"]), &mut out).unwrap();
        assert!(!ok);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 / 0\n   ^\n>> Error: division by zero.\n2 + 2\n>> 4.00000\n"
        );
    }

    #[test]
    fn test_batch_portuguese_rendering() {
        let mut s = session("batch-pt", Language::Portuguese);
        let mut out = Vec::new();

        assert!(run_batch(&mut s, &lines(&["x = 1,25 * 2"]), &mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x = 1,25 * 2\n>> x = 2,50000\n"
        );
    }
}
