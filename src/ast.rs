use std::rc::Rc;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::util::num::plain_decimal;

/// Identifies a node of the syntax tree.
///
/// The parser hands out ids in creation order, so they are unique within one
/// parsed [`Source`]. The analyzer keys its side table (resolved types and
/// bindings) by these ids instead of writing into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. Its `Display` implementation renders the value back into
/// source form, so the output can be lexed and parsed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// The `NIL` literal.
    Nil,
    /// A boolean literal value: `TRUE` or `FALSE`.
    Boolean(bool),
    /// An arbitrary precision integer literal.
    Integer(BigInt),
    /// An arbitrary precision decimal literal.
    Decimal(BigDecimal),
    /// A character literal, already unescaped.
    Character(char),
    /// A string literal, already unescaped.
    String(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "NIL"),
            Self::Boolean(true) => write!(f, "TRUE"),
            Self::Boolean(false) => write!(f, "FALSE"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{}", plain_decimal(d)),
            Self::Character(c) => write!(f, "'{}'", escape(&c.to_string(), '\'')),
            Self::String(s) => write!(f, "\"{}\"", escape(s, '"')),
        }
    }
}

/// Escapes a literal body so it lexes back to the same text.
///
/// Only the quote that delimits the literal kind is escaped, together with
/// backslashes and the control characters that have escape sequences.
fn escape(text: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{8}' => escaped.push_str("\\b"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            },
            c => escaped.push(c),
        }
    }
    escaped
}

/// Represents a binary operator.
///
/// Binary operators include logical connectives, comparisons and arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical and (`AND`)
    And,
    /// Logical or (`OR`)
    Or,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps operator text to its binary operator.
    ///
    /// # Example
    /// ```
    /// use ember::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_text("<="), Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_text("AND"), Some(BinaryOperator::And));
    /// assert_eq!(BinaryOperator::from_text("%"), None);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
                 "AND" => Self::And,
                 "OR" => Self::Or,
                 "<" => Self::Less,
                 "<=" => Self::LessEqual,
                 ">" => Self::Greater,
                 ">=" => Self::GreaterEqual,
                 "==" => Self::Equal,
                 "!=" => Self::NotEqual,
                 "+" => Self::Add,
                 "-" => Self::Sub,
                 "*" => Self::Mul,
                 "/" => Self::Div,
                 _ => return None,
             })
    }

    /// Returns `true` for the ordering and equality operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// An expression node.
///
/// Every expression carries its [`NodeId`] and the offset of its first token.
/// After analysis the id maps to exactly one concrete type.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Identity of this node.
    pub id:     NodeId,
    /// Offset of the token that starts (or, for member access, names) the
    /// expression.
    pub offset: usize,
    /// The expression itself.
    pub kind:   ExprKind,
}

/// The kinds of expression in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A literal value.
    Literal(LiteralValue),
    /// A parenthesized expression.
    Group(Box<Expr>),
    /// A binary operation.
    Binary {
        /// The operator.
        operator: BinaryOperator,
        /// Left operand.
        left:     Box<Expr>,
        /// Right operand.
        right:    Box<Expr>,
    },
    /// A variable reference, or a field access when a receiver is present.
    Access {
        /// The object whose field is accessed.
        receiver: Option<Box<Expr>>,
        /// The variable or field name.
        name:     String,
    },
    /// A function call, or a method call when a receiver is present.
    Function {
        /// The object whose method is called.
        receiver:  Option<Box<Expr>>,
        /// The function or method name.
        name:      String,
        /// The call arguments, in source order.
        arguments: Vec<Expr>,
    },
}

/// A local variable declaration (`LET name: Type = value;`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Identity of this node.
    pub id:        NodeId,
    /// The declared name.
    pub name:      String,
    /// The optional type annotation.
    pub type_name: Option<String>,
    /// The optional initializer.
    pub value:     Option<Expr>,
    /// Offset of the `LET` keyword.
    pub offset:    usize,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression(Expr),
    /// A variable declaration.
    Declaration(Declaration),
    /// An assignment to a variable or field.
    Assignment {
        /// The assigned location.
        receiver: Expr,
        /// The assigned value.
        value:    Expr,
    },
    /// A conditional with an optional else branch.
    If {
        /// The condition.
        condition:       Expr,
        /// Statements executed when the condition holds.
        then_statements: Vec<Self>,
        /// Statements executed otherwise.
        else_statements: Vec<Self>,
    },
    /// A loop over the values of an iterable.
    For {
        /// The loop variable.
        name:       String,
        /// The iterated value.
        value:      Expr,
        /// The loop body.
        statements: Vec<Self>,
    },
    /// A loop that runs while its condition holds.
    While {
        /// The condition.
        condition:  Expr,
        /// The loop body.
        statements: Vec<Self>,
    },
    /// Returns a value from the enclosing method.
    Return {
        /// The returned value.
        value:  Expr,
        /// Offset of the `RETURN` keyword.
        offset: usize,
    },
}

/// A global variable (`LET name: Type = value;` before the first method).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Identity of this node.
    pub id:        NodeId,
    /// The field name.
    pub name:      String,
    /// The declared type name.
    pub type_name: String,
    /// The optional initializer.
    pub value:     Option<Expr>,
    /// Offset of the `LET` keyword.
    pub offset:    usize,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// The parameter name.
    pub name:      String,
    /// The optional type annotation; a missing annotation means `Any`.
    pub type_name: Option<String>,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    /// Identity of this node.
    pub id:               NodeId,
    /// The method name.
    pub name:             String,
    /// The parameters, in declaration order.
    pub parameters:       Vec<Parameter>,
    /// The optional return type; a missing annotation means `Nil`.
    pub return_type_name: Option<String>,
    /// The method body.
    pub statements:       Vec<Stmt>,
    /// Offset of the `DEF` keyword.
    pub offset:           usize,
}

/// A whole translation unit: fields first, then methods.
///
/// Methods are reference counted so that runtime closures can hold on to
/// their declaration without borrowing the tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    /// The global variables, in declaration order.
    pub fields:  Vec<Field>,
    /// The methods, in declaration order.
    pub methods: Vec<Rc<Method>>,
}
