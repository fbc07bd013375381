//! Turning interpreter results into console lines

use expressio::{ExpressionError, Language, Output};

use crate::messages::Messages;

/// Digits shown after the decimal separator.
pub const PRECISION: usize = 5;

/// `>> 14.00000` or `>> x = 14.00000`, using the language's separator.
pub fn render_output(output: &Output, language: Language) -> String {
    let text = format!(">> {:.*}", PRECISION, output);
    let separator = language.decimal_separator();
    if separator == '.' {
        text
    } else {
        // Names are alphabetic, so the only `.` is the decimal point
        text.replace('.', &separator.to_string())
    }
}

/// A caret under the offending column, then the localized message.
pub fn render_error(error: &ExpressionError, messages: &Messages) -> String {
    format!(
        "{}^\n>> {}",
        " ".repeat(error.position),
        messages.error(error.kind)
    )
}
