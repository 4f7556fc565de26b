mod chunk;
mod tokens;

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

pub use chunk::*;
use smallvec::SmallVec;
pub use tokens::*;

use crate::error::{QueryError, Result};
use crate::executor::Statement;
use crate::traits::ToSQL;
use crate::value::Value;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation. Fragments compose by appending chunks, so an
/// embedded subquery is inlined into the outer statement rather than executed
/// on its own.
#[derive(Debug, Clone, Default)]
pub struct SQL {
    pub chunks: SmallVec<[SQLChunk; 8]>,
}

impl SQL {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with a quoted identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single unsigned integer literal.
    #[inline]
    pub fn number(value: u64) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Number(value)],
        }
    }

    /// Creates SQL with a single parameter value
    #[inline]
    pub fn param(value: impl Into<Value>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(value.into())],
        }
    }

    /// Creates SQL referencing `"alias"."name"`
    #[inline]
    pub fn column(alias: &'static str, name: &'static str) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Column { alias, name }],
        }
    }

    /// Creates a fragment that fails to build with the given message.
    #[inline]
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Invalid(message.into())],
        }
    }

    /// Creates SQL for a function call: NAME(args)
    #[inline]
    pub fn func(name: &'static str, args: SQL) -> Self {
        SQL::raw(name)
            .push(Token::LPAREN)
            .append(args)
            .push(Token::RPAREN)
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL>) -> Self {
        self.append_mut(other);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL>) {
        let other = other.into();
        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: Token) -> SQL
    where
        T: IntoIterator,
        T::Item: ToSQL,
    {
        let mut iter = sqls.into_iter();
        let Some(first) = iter.next() else {
            return SQL::empty();
        };

        let mut result = first.to_sql();
        for item in iter {
            result.chunks.push(SQLChunk::Token(separator));
            result.chunks.extend(item.to_sql().chunks);
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // ==================== output methods ====================

    /// Returns the first construction error carried by this fragment, if any.
    pub fn error(&self) -> Option<&str> {
        self.chunks.iter().find_map(|chunk| match chunk {
            SQLChunk::Invalid(message) => Some(message.as_ref()),
            _ => None,
        })
    }

    /// Returns the SQL text with `?` placeholders.
    pub fn sql(&self) -> String {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        self.write_to(&mut buf);
        buf
    }

    /// Bound parameter values in placeholder order.
    pub fn params(&self) -> impl Iterator<Item = &Value> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Param(value) => Some(value),
            _ => None,
        })
    }

    /// Renders the fragment into an executable statement.
    ///
    /// Fails with [`QueryError::Configuration`] if any embedded fragment was
    /// marked invalid during construction.
    pub fn build(&self) -> Result<Statement> {
        if let Some(message) = self.error() {
            return Err(QueryError::Configuration(message.to_string()));
        }
        Ok(Statement {
            sql: self.sql(),
            params: self.params().cloned().collect(),
        })
    }

    /// Write SQL to a buffer.
    pub fn write_to(&self, buf: &mut impl Write) {
        let mut previous: Option<&SQLChunk> = None;
        for chunk in &self.chunks {
            if let Some(prev) = previous
                && prev.space_before(chunk)
            {
                let _ = buf.write_char(' ');
            }
            chunk.write(buf);
            if !matches!(chunk, SQLChunk::Invalid(_)) {
                previous = Some(chunk);
            }
        }
    }
}

impl Display for SQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_to(&mut buf);
        f.write_str(&buf)
    }
}

impl From<Token> for SQL {
    #[inline]
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl FromIterator<Token> for SQL {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        SQL {
            chunks: iter.into_iter().map(SQLChunk::Token).collect(),
        }
    }
}

impl ToSQL for SQL {
    fn to_sql(&self) -> SQL {
        self.clone()
    }
}
