/// MiniC language front end.
/// Tokenizes source text, parses `if` statements into an arena-allocated AST,
/// and projects the AST into a generic tree for rendering.

pub mod token;
pub mod lexer;
pub mod ast;
pub mod error;
pub mod parser;
pub mod tree;

pub use error::{LexError, ParseError};
pub use lexer::{lex, Lexed, Lexer};
pub use parser::Parser;
pub use tree::{to_generic_tree, GenericNode, Node};
