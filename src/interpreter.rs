/// The analyzer module checks programs before they run.
///
/// The analyzer walks the syntax tree once, resolves every name to a
/// variable, field, function or method, and assigns a type to every
/// expression. The results are recorded in a side table keyed by node id.
///
/// # Responsibilities
/// - Enforces the typing rules of the language and the shape of `main`.
/// - Mirrors the interpreter's scoping, including shadowing and closures.
/// - Reports the first violation as a `TypeError`.
pub mod analyzer;
/// The environment module holds what analysis and execution share.
///
/// It defines the lexical `Scope` chain, static types and signatures, and the
/// `Registry` of host functions and object types.
pub mod environment;
/// The evaluator module executes programs.
///
/// The evaluator traverses the syntax tree, evaluates expressions, executes
/// statements, manages variable state and calls functions. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every kind of expression and statement.
/// - Handles scopes, closures and `RETURN`.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat list of tokens:
/// identifiers (keywords included), numbers, characters, strings and
/// operators, each with the character offset where it starts. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Validates number, character and string literals and their escapes.
/// - Reports lexical errors with the offset of the offending character.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is a recursive-descent parser that consumes the lexer's tokens
/// and constructs a `Source` made of fields and methods.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions with operator
///   precedence.
/// - Validates the grammar, reporting errors with the offending offset.
/// - Decodes literal values.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum used during execution: nil,
/// booleans, arbitrary precision integers and decimals, characters, strings,
/// iterables and objects.
pub mod value;
