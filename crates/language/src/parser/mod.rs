use crate::ast::{Expression, Operator, Statement};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use log::debug;

/// Recursive descent parser for `if` statements.
///
/// One parser per parse run: it owns the token cursor and the diagnostics,
/// and allocates the tree into the caller's arena. Parsing stops at the first
/// error; the diagnostic is recorded and `None` unwinds to the entry point.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    arena: &'a Bump,
    eof: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, arena: &'a Bump) -> Self {
        let end = tokens.last().map(|t| t.offset + t.value.len()).unwrap_or(0);
        Parser {
            tokens,
            position: 0,
            arena,
            eof: Token::eof(end),
            errors: vec![],
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.position + 1).unwrap_or(&self.eof)
    }

    fn next_token(&mut self) {
        self.position += 1;
    }

    fn error(&mut self, err: ParseError) {
        debug!("parse error at token {}: {}", self.position, err);
        self.errors.push(err);
    }

    /// Consumes a token of the given kind. Does not advance on mismatch.
    fn expect(&mut self, kind: TokenKind) -> bool {
        let found = self.current_token().kind;
        if found == kind {
            self.next_token();
            true
        } else {
            self.error(ParseError::UnexpectedKind { expected: kind, found, position: self.position });
            false
        }
    }

    /// Like `expect`, but the literal text has to match as well.
    fn expect_value(&mut self, kind: TokenKind, value: &'static str) -> bool {
        let tok = self.current_token();
        if tok.kind == kind && tok.value != value {
            let found = tok.value.clone();
            self.error(ParseError::UnexpectedValue { expected: value, found, position: self.position });
            return false;
        }
        self.expect(kind)
    }

    // --- if ( Condition ) Block ---
    pub fn parse_if_statement(&mut self) -> Option<Statement<'a>> {
        debug!("parsing if statement over {} tokens", self.tokens.len());

        if !self.expect_value(TokenKind::Keyword, "if") {
            return None;
        }
        if !self.expect_value(TokenKind::SpecialSymbol, "(") {
            return None;
        }

        let condition = self.parse_condition()?;

        if !self.expect_value(TokenKind::SpecialSymbol, ")") {
            return None;
        }

        if !self.current_token().is(TokenKind::SpecialSymbol, "{") {
            self.error(ParseError::MissingBody);
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Statement::If {
            condition,
            body: self.arena.alloc(body),
        })
    }

    // --- Condition: x > 5, or a bare primary ---
    fn parse_condition(&mut self) -> Option<Expression<'a>> {
        let left = self.parse_primary()?;

        if self.current_token().kind != TokenKind::Operator {
            return Some(left);
        }

        let symbol = self.current_token().value.clone();
        if symbol == "=" {
            self.error(ParseError::AssignmentInCondition);
            return None;
        }
        let Some(operator) = Operator::from_symbol(&symbol) else {
            self.error(ParseError::InvalidOperator(symbol));
            return None;
        };
        self.next_token(); // consume operator

        let right = self.parse_primary()?;

        Some(Expression::Condition {
            left: self.arena.alloc(left),
            operator,
            right: self.arena.alloc(right),
        })
    }

    // --- Primary: identifier or number ---
    fn parse_primary(&mut self) -> Option<Expression<'a>> {
        let arena = self.arena;
        let tok = self.current_token();

        let expression = match tok.kind {
            TokenKind::Identifier => Expression::Identifier(arena.alloc_str(&tok.value)),
            TokenKind::Constant => Expression::NumberLiteral(arena.alloc_str(&tok.value)),
            kind => {
                let value = tok.value.clone();
                self.error(ParseError::UnexpectedPrimary { kind, value });
                return None;
            }
        };
        self.next_token();
        Some(expression)
    }

    // --- Block: { stmt1; stmt2; ... } ---
    fn parse_block_statement(&mut self) -> Option<Statement<'a>> {
        if !self.expect_value(TokenKind::SpecialSymbol, "{") {
            return None;
        }

        let mut statements = BumpVec::new_in(self.arena);
        while self.current_token().kind != TokenKind::Eof
            && !self.current_token().is(TokenKind::SpecialSymbol, "}")
        {
            let statement = self.parse_statement()?;
            statements.push(statement);
        }

        // Runs out of tokens here if the block was never closed
        if !self.expect_value(TokenKind::SpecialSymbol, "}") {
            return None;
        }

        Some(Statement::Block {
            statements: statements.into_bump_slice(),
        })
    }

    fn parse_statement(&mut self) -> Option<Statement<'a>> {
        let tok = self.current_token();
        if tok.kind == TokenKind::Identifier {
            let next = self.peek_token();

            if Operator::from_symbol(&next.value).is_some() {
                let err = ParseError::ComparisonAsStatement {
                    name: tok.value.clone(),
                    operator: next.value.clone(),
                };
                self.error(err);
                return None;
            }

            if next.value == "=" {
                return self.parse_assignment_statement();
            }
        }

        self.parse_expression_statement()
    }

    // --- Expression statement: x; ---
    fn parse_expression_statement(&mut self) -> Option<Statement<'a>> {
        let expression = self.parse_primary()?;

        if !self.current_token().is(TokenKind::SpecialSymbol, ";") {
            self.error(ParseError::MissingSemicolonAfterExpression);
            return None;
        }
        self.next_token();

        Some(Statement::Expression { expression })
    }

    // --- Assignment: y = 10; ---
    fn parse_assignment_statement(&mut self) -> Option<Statement<'a>> {
        let arena = self.arena;
        let name: &'a str = arena.alloc_str(&self.current_token().value);
        self.next_token(); // consume name

        if !self.current_token().is(TokenKind::Operator, "=") {
            self.error(ParseError::MissingAssign);
            return None;
        }
        self.next_token(); // consume =

        let value = self.parse_primary()?;

        if !self.current_token().is(TokenKind::SpecialSymbol, ";") {
            self.error(ParseError::MissingSemicolonAfterAssignment { name: name.to_string() });
            return None;
        }
        self.next_token();

        Some(Statement::Assignment { name, value })
    }
}
