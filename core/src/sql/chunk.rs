use std::borrow::Cow;
use std::fmt::Write;

use crate::sql::tokens::Token;
use crate::value::Value;

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Token` - SQL keywords and operators (SELECT, FROM, =, etc.)
/// - `Ident` - Quoted identifiers ("users", "user")
/// - `Raw` - Unquoted raw SQL text (function names)
/// - `Number` - Unsigned integer literal rendered inline (LIMIT / OFFSET)
/// - `Param` - Bound parameter, rendered as `?`
/// - `Column` - Alias-qualified column reference
/// - `Invalid` - A fragment that could not be built; rendering it fails
#[derive(Clone, Debug)]
pub enum SQLChunk {
    /// SQL keywords and operators: SELECT, FROM, WHERE, =, AND, etc.
    Token(Token),

    /// Quoted identifier
    /// Renders as: "name"
    Ident(Cow<'static, str>),

    /// Raw SQL text (unquoted) for function names
    Raw(Cow<'static, str>),

    /// Inline unsigned integer
    Number(u64),

    /// Parameter with value
    Param(Value),

    /// Column reference
    /// Renders as: "alias"."column"
    Column {
        alias: &'static str,
        name: &'static str,
    },

    /// Deferred construction error carried inside an embedded fragment.
    /// Renders as nothing; [`SQL::build`](super::SQL::build) rejects it.
    Invalid(Cow<'static, str>),
}

impl SQLChunk {
    /// Write chunk content to buffer
    pub(crate) fn write(&self, buf: &mut impl Write) {
        match self {
            SQLChunk::Token(token) => {
                let _ = buf.write_str(token.as_str());
            }
            SQLChunk::Ident(name) => {
                let _ = buf.write_char('"');
                let _ = buf.write_str(name);
                let _ = buf.write_char('"');
            }
            SQLChunk::Raw(text) => {
                let _ = buf.write_str(text);
            }
            SQLChunk::Number(n) => {
                let _ = write!(buf, "{n}");
            }
            SQLChunk::Param(_) => {
                let _ = buf.write_char('?');
            }
            SQLChunk::Column { alias, name } => {
                let _ = buf.write_char('"');
                let _ = buf.write_str(alias);
                let _ = buf.write_str("\".\"");
                let _ = buf.write_str(name);
                let _ = buf.write_char('"');
            }
            SQLChunk::Invalid(_) => {}
        }
    }

    /// Whether a space is written between `self` and `next`.
    pub(crate) fn space_before(&self, next: &SQLChunk) -> bool {
        if matches!(self, SQLChunk::Invalid(_)) || matches!(next, SQLChunk::Invalid(_)) {
            return false;
        }
        if matches!(self, SQLChunk::Token(Token::LPAREN | Token::DOT)) {
            return false;
        }
        match next {
            SQLChunk::Token(Token::RPAREN | Token::COMMA | Token::DOT) => false,
            // function call: COUNT(
            SQLChunk::Token(Token::LPAREN) => !matches!(self, SQLChunk::Raw(_)),
            _ => true,
        }
    }
}

impl From<Token> for SQLChunk {
    #[inline]
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}

impl From<Value> for SQLChunk {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Param(value)
    }
}
