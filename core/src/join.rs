//! JOIN clauses.

use crate::sql::{SQL, Token};
use crate::traits::ToSQL;

/// The type of JOIN operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JoinType {
    /// Plain `JOIN`, which is an inner join.
    #[default]
    Join,
    Inner,
    Left,
    Right,
}

impl ToSQL for JoinType {
    fn to_sql(&self) -> SQL {
        match self {
            JoinType::Join => SQL::token(Token::JOIN),
            JoinType::Inner => SQL::from_iter([Token::INNER, Token::JOIN]),
            JoinType::Left => SQL::from_iter([Token::LEFT, Token::JOIN]),
            JoinType::Right => SQL::from_iter([Token::RIGHT, Token::JOIN]),
        }
    }
}

/// A registered join: `<kind> "table" AS "alias" ON <condition>`.
#[derive(Debug, Clone)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: &'static str,
    pub alias: &'static str,
    pub on: SQL,
}

impl ToSQL for JoinClause {
    fn to_sql(&self) -> SQL {
        self.join_type
            .to_sql()
            .append(SQL::ident(self.table))
            .push(Token::AS)
            .append(SQL::ident(self.alias))
            .push(Token::ON)
            .append(self.on.clone())
    }
}
