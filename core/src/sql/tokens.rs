/// SQL keywords, operators and punctuation.
///
/// Tokens render verbatim; spacing between chunks is decided by
/// [`SQL`](super::SQL) when the fragment is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    // Clauses
    SELECT,
    DISTINCT,
    FROM,
    AS,
    JOIN,
    INNER,
    LEFT,
    RIGHT,
    ON,
    WHERE,
    GROUP,
    BY,
    HAVING,
    ORDER,
    LIMIT,
    OFFSET,

    // Ordering
    ASC,
    DESC,
    NULLS,
    FIRST,
    LAST,

    // Logical
    AND,
    OR,
    NOT,

    // Predicates
    IN,
    BETWEEN,
    LIKE,
    IS,
    NULL,

    // Conditional
    CASE,
    WHEN,
    THEN,
    ELSE,
    END,

    // Punctuation
    LPAREN,
    RPAREN,
    COMMA,
    DOT,
    STAR,

    // Comparison
    EQ,
    NE,
    LT,
    GT,
    LE,
    GE,

    // Arithmetic
    PLUS,
    MINUS,
    SLASH,
}

impl Token {
    /// Returns the SQL text of the token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Token::SELECT => "SELECT",
            Token::DISTINCT => "DISTINCT",
            Token::FROM => "FROM",
            Token::AS => "AS",
            Token::JOIN => "JOIN",
            Token::INNER => "INNER",
            Token::LEFT => "LEFT",
            Token::RIGHT => "RIGHT",
            Token::ON => "ON",
            Token::WHERE => "WHERE",
            Token::GROUP => "GROUP",
            Token::BY => "BY",
            Token::HAVING => "HAVING",
            Token::ORDER => "ORDER",
            Token::LIMIT => "LIMIT",
            Token::OFFSET => "OFFSET",
            Token::ASC => "ASC",
            Token::DESC => "DESC",
            Token::NULLS => "NULLS",
            Token::FIRST => "FIRST",
            Token::LAST => "LAST",
            Token::AND => "AND",
            Token::OR => "OR",
            Token::NOT => "NOT",
            Token::IN => "IN",
            Token::BETWEEN => "BETWEEN",
            Token::LIKE => "LIKE",
            Token::IS => "IS",
            Token::NULL => "NULL",
            Token::CASE => "CASE",
            Token::WHEN => "WHEN",
            Token::THEN => "THEN",
            Token::ELSE => "ELSE",
            Token::END => "END",
            Token::LPAREN => "(",
            Token::RPAREN => ")",
            Token::COMMA => ",",
            Token::DOT => ".",
            Token::STAR => "*",
            Token::EQ => "=",
            Token::NE => "<>",
            Token::LT => "<",
            Token::GT => ">",
            Token::LE => "<=",
            Token::GE => ">=",
            Token::PLUS => "+",
            Token::MINUS => "-",
            Token::SLASH => "/",
        }
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
