use crate::error::LexError;
use crate::token::{Token, TokenKind};
use log::{debug, trace};

/// Returns the byte length of the match anchored at the start of the input.
type Matcher = fn(&str) -> Option<usize>;

/// Lexical rules in priority order. The first rule that matches at the
/// cursor wins, so KEYWORD and CONSTANT must stay ahead of IDENTIFIER.
pub const RULES: &[(TokenKind, Matcher)] = &[
    (TokenKind::Keyword, match_keyword),
    (TokenKind::Constant, match_constant),
    (TokenKind::Identifier, match_identifier),
    (TokenKind::Operator, match_operator),
    (TokenKind::SpecialSymbol, match_special_symbol),
];

pub const KEYWORDS: &[&str] = &["if", "else", "while", "for", "int", "double", "return"];

/// Output of a full lexing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

pub fn lex(input: &str) -> Lexed {
    Lexer::new(input).tokenize()
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    pub errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            errors: vec![],
        }
    }

    pub fn tokenize(mut self) -> Lexed {
        let tokens: Vec<Token> = self.by_ref().collect();
        Lexed { tokens, errors: self.errors }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) -> bool {
        let len = self
            .rest()
            .find(|c: char| !c.is_ascii_whitespace())
            .unwrap_or(self.rest().len());
        self.position += len;
        len > 0
    }

    /// Produces the next token, skipping whitespace and unknown characters.
    /// Returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.position < self.input.len() {
            if self.skip_whitespace() {
                continue;
            }

            let rest = self.rest();
            for (kind, matcher) in RULES {
                if let Some(len) = matcher(rest) {
                    let token = Token::new(*kind, &rest[..len], self.position);
                    trace!("lexed {} at {}", token, self.position);
                    self.position += len;
                    return Some(token);
                }
            }

            // Unknown character: report it and step over it
            let Some(ch) = rest.chars().next() else { break };
            debug!("unknown character {:?} at position {}", ch, self.position);
            self.errors.push(LexError::UnknownCharacter { ch, position: self.position });
            self.position += ch.len_utf8();
        }
        None
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn is_word_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn leading(input: &str, pred: impl Fn(u8) -> bool) -> usize {
    input.bytes().take_while(|&b| pred(b)).count()
}

fn match_keyword(input: &str) -> Option<usize> {
    let len = leading(input, is_word_char);
    KEYWORDS.contains(&&input[..len]).then_some(len)
}

fn match_constant(input: &str) -> Option<usize> {
    let digits = leading(input, |b| b.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    // A trailing '.' with no fraction digits still belongs to the constant
    if input.as_bytes().get(digits) == Some(&b'.') {
        let fraction = leading(&input[digits + 1..], |b| b.is_ascii_digit());
        return Some(digits + 1 + fraction);
    }
    Some(digits)
}

fn match_identifier(input: &str) -> Option<usize> {
    match input.bytes().next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => Some(leading(input, is_word_char)),
        _ => None,
    }
}

fn match_operator(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    match bytes.first() {
        Some(b'>' | b'<' | b'=' | b'!') => {
            if bytes.get(1) == Some(&b'=') { Some(2) } else { Some(1) }
        }
        _ => None,
    }
}

fn match_special_symbol(input: &str) -> Option<usize> {
    match input.bytes().next() {
        Some(b'(' | b')' | b'{' | b'}' | b';') => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_values(input: &str) -> Vec<(TokenKind, String)> {
        lex(input)
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
        (kind, value.to_string())
    }

    #[test]
    fn test_if_statement_tokens() {
        let lexed = lex("if (x > 5) { y = 10; }");
        assert!(lexed.errors.is_empty());
        assert_eq!(
            lexed.tokens.iter().map(|t| (t.kind, t.value.as_str())).collect::<Vec<_>>(),
            vec![
                (TokenKind::Keyword, "if"),
                (TokenKind::SpecialSymbol, "("),
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, ">"),
                (TokenKind::Constant, "5"),
                (TokenKind::SpecialSymbol, ")"),
                (TokenKind::SpecialSymbol, "{"),
                (TokenKind::Identifier, "y"),
                (TokenKind::Operator, "="),
                (TokenKind::Constant, "10"),
                (TokenKind::SpecialSymbol, ";"),
                (TokenKind::SpecialSymbol, "}"),
            ]
        );
    }

    #[test]
    fn test_keywords() {
        let input = "if else while for int double return";
        let tokens = kinds_and_values(input);
        assert_eq!(tokens.len(), KEYWORDS.len());
        for ((kind, value), keyword) in tokens.iter().zip(KEYWORDS) {
            assert_eq!(*kind, TokenKind::Keyword);
            assert_eq!(value, keyword);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds_and_values("iffy"), vec![tok(TokenKind::Identifier, "iffy")]);
        assert_eq!(kinds_and_values("format"), vec![tok(TokenKind::Identifier, "format")]);
        assert_eq!(kinds_and_values("int2"), vec![tok(TokenKind::Identifier, "int2")]);
        assert_eq!(kinds_and_values("_if"), vec![tok(TokenKind::Identifier, "_if")]);
    }

    #[test]
    fn test_operators_match_greedily() {
        assert_eq!(kinds_and_values("=="), vec![tok(TokenKind::Operator, "==")]);
        assert_eq!(
            kinds_and_values("!= <= >= < > = !"),
            vec![
                tok(TokenKind::Operator, "!="),
                tok(TokenKind::Operator, "<="),
                tok(TokenKind::Operator, ">="),
                tok(TokenKind::Operator, "<"),
                tok(TokenKind::Operator, ">"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Operator, "!"),
            ]
        );
        // '===' is '==' followed by '='
        assert_eq!(
            kinds_and_values("==="),
            vec![tok(TokenKind::Operator, "=="), tok(TokenKind::Operator, "=")]
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(kinds_and_values("42"), vec![tok(TokenKind::Constant, "42")]);
        assert_eq!(kinds_and_values("3.14"), vec![tok(TokenKind::Constant, "3.14")]);
        assert_eq!(kinds_and_values("5."), vec![tok(TokenKind::Constant, "5.")]);
        assert_eq!(
            kinds_and_values("7abc"),
            vec![tok(TokenKind::Constant, "7"), tok(TokenKind::Identifier, "abc")]
        );
    }

    #[test]
    fn test_whitespace_invariance() {
        let tight = kinds_and_values("if(x>=5){y=10;}");
        let loose = kinds_and_values("  if \t( x\n>=  5 )\r\n{\n\ty =\t10 ;\n}\n");
        assert_eq!(tight, loose);
    }

    #[test]
    fn test_unknown_character_is_skipped() {
        let lexed = lex("x @ y");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>(),
            vec!["x", "y"]
        );
        assert_eq!(lexed.errors, vec![LexError::UnknownCharacter { ch: '@', position: 2 }]);
        assert_eq!(
            lexed.errors[0].to_string(),
            "Lexer Error : Unknown character @ at position 2"
        );
    }

    #[test]
    fn test_unknown_multibyte_character() {
        let lexed = lex("a é b");
        assert_eq!(lexed.tokens.len(), 2);
        assert_eq!(lexed.errors, vec![LexError::UnknownCharacter { ch: 'é', position: 2 }]);
        assert_eq!(lexed.tokens[1].offset, 5);
    }

    #[test]
    fn test_offsets() {
        let lexed = lex("if  (x)");
        let offsets: Vec<usize> = lexed.tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 4, 5, 6]);
    }

    #[test]
    fn test_empty_input() {
        let lexed = lex(" \n\t ");
        assert!(lexed.tokens.is_empty());
        assert!(lexed.errors.is_empty());
    }

    #[test]
    fn test_rule_priority_order() {
        let kinds: Vec<TokenKind> = RULES.iter().map(|(kind, _)| *kind).collect();
        let position = |k: TokenKind| kinds.iter().position(|&x| x == k).unwrap();
        assert!(position(TokenKind::Keyword) < position(TokenKind::Identifier));
        assert!(position(TokenKind::Constant) < position(TokenKind::Identifier));
    }
}
