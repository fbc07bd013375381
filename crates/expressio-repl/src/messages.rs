//! Localized console strings

use expressio::{ErrorKind, Language};

/// Every user-facing string the console prints, in one language.
#[derive(Debug)]
pub struct Messages {
    pub editor: &'static str,
    pub help: &'static str,
    pub about: &'static str,
    pub copyright: &'static str,
    pub license: &'static str,

    pub empty_history: &'static str,
    pub history_cleared: &'static str,
    pub no_variables: &'static str,
    pub exported: &'static str,
    pub export_failed: &'static str,
    pub export_usage: &'static str,
    pub language_changed: &'static str,
    pub language_usage: &'static str,
    pub preferences_failed: &'static str,
    pub unknown_command: &'static str,

    unknown_symbol: &'static str,
    invalid_expression: &'static str,
    undefined_variable: &'static str,
    division_by_zero: &'static str,
}

impl Messages {
    /// The string table for `language`.
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }

    /// Localized description of an evaluation failure.
    pub fn error(&self, kind: ErrorKind) -> &'static str {
        match kind {
            ErrorKind::UnknownSymbol => self.unknown_symbol,
            ErrorKind::InvalidExpression => self.invalid_expression,
            ErrorKind::UndefinedVariable => self.undefined_variable,
            ErrorKind::DivisionByZero => self.division_by_zero,
        }
    }
}

static ENGLISH: Messages = Messages {
    editor: "Enter a mathematical expression (:help for commands):",
    help: "\
:help              show this list
:vars              list defined variables
:history           show the history list
:clear             clear the history list and variables
:export <file>     write the history list to a file
:language <en|pt>  change the language
:about             about this program
:quit              leave",
    about: "A simple mathematical expression solver.",
    copyright: "Copyright (c) 2017, Danilo Peixoto. All rights reserved.",
    license: "Software developed under the BSD-3-Clause license.",

    empty_history: "History list is empty.",
    history_cleared: "History list cleared.",
    no_variables: "No variables defined.",
    exported: "History list exported to",
    export_failed: "Could not export the history list",
    export_usage: "Usage: :export <file>",
    language_changed: "Language changed to",
    language_usage: "Usage: :language <en|pt>",
    preferences_failed: "Could not save preferences",
    unknown_command: "Unknown command. Type :help for the list of commands.",

    unknown_symbol: "Error: unknown symbol.",
    invalid_expression: "Error: invalid expression.",
    undefined_variable: "Error: undefined variable.",
    division_by_zero: "Error: division by zero.",
};

static PORTUGUESE: Messages = Messages {
    editor: "Insira uma expressão matemática (:help para comandos):",
    help: "\
:help              mostra esta lista
:vars              lista as variáveis definidas
:history           mostra a lista de histórico
:clear             limpa a lista de histórico e as variáveis
:export <arquivo>  grava a lista de histórico em um arquivo
:language <en|pt>  altera o idioma
:about             sobre este programa
:quit              sair",
    about: "Um simples solucionador de expressão matemática.",
    copyright: "Copyright (c) 2017, Danilo Peixoto. Todos os direitos reservados.",
    license: "Programa desenvolvido sob a licença BSD-3-Clause.",

    empty_history: "A lista de histórico está vazia.",
    history_cleared: "Lista de histórico limpa.",
    no_variables: "Nenhuma variável definida.",
    exported: "Lista de histórico exportada para",
    export_failed: "Não foi possível exportar a lista de histórico",
    export_usage: "Uso: :export <arquivo>",
    language_changed: "Idioma alterado para",
    language_usage: "Uso: :language <en|pt>",
    preferences_failed: "Não foi possível salvar as preferências",
    unknown_command: "Comando desconhecido. Digite :help para a lista de comandos.",

    unknown_symbol: "Erro: símbolo desconhecido.",
    invalid_expression: "Erro: expressão inválida.",
    undefined_variable: "Erro: variável indefinida.",
    division_by_zero: "Erro: divisão por zero.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_strings() {
        let en = Messages::for_language(Language::English);
        assert_eq!(en.error(ErrorKind::DivisionByZero), "Error: division by zero.");

        let pt = Messages::for_language(Language::Portuguese);
        assert_eq!(pt.error(ErrorKind::UnknownSymbol), "Erro: símbolo desconhecido.");
    }

    #[test]
    fn test_help_lists_every_command() {
        for language in Language::ALL {
            let help = Messages::for_language(language).help;
            for cmd in [
                ":help", ":vars", ":history", ":clear", ":export", ":language", ":about", ":quit",
            ] {
                assert!(help.contains(cmd), "{} missing from {:?} help", cmd, language);
            }
        }
    }
}
