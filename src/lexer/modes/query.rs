//! Язык запросов и язык ограничений доступа

use super::{ModeId, IDENT};
use crate::lexer::classify;
use crate::lexer::engine::{Action, Mode, Rule, Transition};
use crate::lexer::lookahead::line_head;
use crate::lexer::token::TokenKind;

use Action::{Call, Emit};
use TokenKind::*;

/// Rules shared by both dialects up to the identifier rule
fn common() -> Vec<Rule> {
    vec![
        Rule::new(r"\n", Emit(Text)),
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new(r"//[^\n]*", Emit(CommentLine)),
        Rule::new("\"", Emit(String)).then(Transition::Push(ModeId::SdblString)),
        // Параметр запроса
        Rule::new(&format!("&{IDENT}"), Emit(IdentifierVariable)),
        Rule::new(r"\d+(?:\.\d*)?", Emit(Number)),
        Rule::new(r"<=|>=|<>|!=", Emit(Operator)),
        Rule::new(r"[=<>+\-*/.]", Emit(Operator)),
        Rule::new(r"[\[\]:(),;{}]", Emit(Punctuation)),
    ]
}

pub(super) fn sdbl_root() -> Mode {
    let mut rules = common();
    rules.push(Rule::new(IDENT, Call(classify::sdbl_identifier)));
    Mode::new(ModeId::SdblRoot, rules)
}

/// String literal inside query text
pub(super) fn sdbl_string() -> Mode {
    let rules = vec![
        Rule::new("\"\"", Emit(StringEscape)),
        Rule::new("\"", Emit(String)).then(Transition::Pop),
        Rule::new(r"\n", Emit(Text)),
        Rule::new(r"[^\S\n]+", Emit(Text)).when(line_head),
        Rule::new(r"//[^\n]*", Emit(CommentLine)).when(line_head),
        Rule::new(r#"[^"\n]+"#, Emit(String)),
    ];
    Mode::new(ModeId::SdblString, rules)
}

/// Access restriction text: query expressions plus `#Если` templates
pub(super) fn constraint_root() -> Mode {
    let mut rules = common();
    rules.push(Rule::new(&format!("#{IDENT}"), Emit(CommentPreproc)));
    rules.push(Rule::new(IDENT, Call(classify::constraint_identifier)));
    Mode::new(ModeId::ConstraintRoot, rules)
}

#[cfg(test)]
mod tests {
    use crate::lexer::engine::Tokens;
    use crate::lexer::modes::ModeId;
    use crate::lexer::token::TokenKind;

    fn significant(text: &str, root: ModeId) -> Vec<(TokenKind, std::string::String)> {
        Tokens::new(text, root)
            .filter(|t| !t.is_trivia())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_query_parameter_and_table() {
        let tokens = significant("ГДЕ Т.Ссылка = &Ссылка", ModeId::SdblRoot);
        assert_eq!(
            tokens,
            vec![
                (TokenKind::KeywordDeclaration, "ГДЕ".into()),
                (TokenKind::IdentifierVariable, "Т".into()),
                (TokenKind::Operator, ".".into()),
                (TokenKind::IdentifierVariable, "Ссылка".into()),
                (TokenKind::Operator, "=".into()),
                (TokenKind::IdentifierVariable, "&Ссылка".into()),
            ]
        );
    }

    #[test]
    fn test_constraint_template_directive() {
        let tokens = significant("#Если &ОграничениеДоступа #Тогда", ModeId::ConstraintRoot);
        assert_eq!(tokens[0], (TokenKind::CommentPreproc, "#Если".into()));
        assert_eq!(tokens[2], (TokenKind::CommentPreproc, "#Тогда".into()));
    }
}
