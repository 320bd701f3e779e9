use std::fmt;

/// Comparison operators allowed inside an `if` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Ge,
        Operator::Le,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            ">=" => Some(Operator::Ge),
            "<=" => Some(Operator::Le),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Statements live in the parser's arena; children are borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    If {
        condition: Expression<'a>,
        body: &'a Statement<'a>, // Block
    },
    Block {
        statements: &'a [Statement<'a>],
    },
    Expression {
        expression: Expression<'a>,
    },
    Assignment {
        name: &'a str,
        value: Expression<'a>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression<'a> {
    Identifier(&'a str),
    /// Numeric text kept verbatim, e.g. `"5."`.
    NumberLiteral(&'a str),
    Condition {
        left: &'a Expression<'a>,
        operator: Operator,
        right: &'a Expression<'a>,
    },
}
