#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised by static analysis.
///
/// Types are rendered by name (e.g. `Integer`, `IntegerIterable`) so the error
/// stays independent of the analyzer's internal representation.
pub enum TypeError {
    /// No zero-parameter method named `main` was declared.
    MissingMain,
    /// `main` was declared with a return type other than `Integer`.
    InvalidMainReturnType {
        /// The declared return type.
        found: String,
    },
    /// A type annotation named a type that does not exist.
    UnknownType {
        /// The unresolved type name.
        name: String,
    },
    /// A name did not resolve to any variable in scope.
    UnknownVariable {
        /// The unresolved name.
        name:   String,
        /// Offset of the access expression.
        offset: usize,
    },
    /// A call did not resolve to any function with that name and arity.
    UnknownFunction {
        /// The unresolved function name.
        name:   String,
        /// The number of arguments supplied.
        arity:  usize,
        /// Offset of the call expression.
        offset: usize,
    },
    /// A qualified access named a field the receiver type does not have.
    UnknownField {
        /// The receiver type.
        owner:  String,
        /// The missing field.
        name:   String,
        /// Offset of the access expression.
        offset: usize,
    },
    /// A qualified call named a method the receiver type does not have.
    UnknownMethod {
        /// The receiver type.
        owner:  String,
        /// The missing method.
        name:   String,
        /// The number of arguments supplied.
        arity:  usize,
        /// Offset of the call expression.
        offset: usize,
    },
    /// A field access or method call was applied to a non-object type.
    NotAnObject {
        /// The receiver type.
        found:  String,
        /// Offset of the receiver expression.
        offset: usize,
    },
    /// A value of one type was used where another type is required.
    NotAssignable {
        /// The required type.
        target: String,
        /// The actual type.
        found:  String,
    },
    /// A field, variable or return type was declared as `Comparable` or
    /// `Any`.
    CapabilityDeclaration {
        /// The declared field, variable or method name.
        name:  String,
        /// The declared type.
        found: String,
    },
    /// A `LET` had neither a type annotation nor an initializer.
    MissingDeclarationType {
        /// The declared name.
        name: String,
    },
    /// The left side of an assignment was not an access expression.
    InvalidAssignmentReceiver {
        /// Offset of the receiver expression.
        offset: usize,
    },
    /// A condition did not have type `Boolean`.
    ExpectedBoolean {
        /// The actual type.
        found:  String,
        /// Offset of the condition.
        offset: usize,
    },
    /// A `FOR` loop iterated over something other than `IntegerIterable`.
    ExpectedIterable {
        /// The actual type.
        found:  String,
        /// Offset of the iterated expression.
        offset: usize,
    },
    /// An `IF` statement had no statements in its then branch.
    EmptyThenBranch {
        /// Offset of the condition.
        offset: usize,
    },
    /// A binary operator was applied to operand types it does not accept.
    InvalidOperands {
        /// The operator.
        operator: String,
        /// The left operand type.
        left:     String,
        /// The right operand type.
        right:    String,
        /// Offset of the binary expression.
        offset:   usize,
    },
    /// An integer literal does not fit in 32 signed bits.
    IntegerOutOfRange {
        /// Offset of the literal.
        offset: usize,
    },
    /// A decimal literal does not fit in a double.
    DecimalOutOfRange {
        /// Offset of the literal.
        offset: usize,
    },
    /// A parenthesized expression did not contain a binary expression.
    GroupNotBinary {
        /// Offset of the group.
        offset: usize,
    },
    /// An expression statement was not a function call.
    ExpressionNotCall {
        /// Offset of the expression.
        offset: usize,
    },
    /// A variable was declared twice in the same scope.
    VariableRedefinition {
        /// The declared name.
        name: String,
    },
    /// A method was declared twice with the same name and arity.
    FunctionRedefinition {
        /// The declared name.
        name:  String,
        /// The declared arity.
        arity: usize,
    },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMain => write!(f, "Type error: No method 'main()' is defined."),
            Self::InvalidMainReturnType { found } => write!(f,
                                                            "Type error: Method 'main()' must return Integer, but returns {found}."),
            Self::UnknownType { name } => write!(f, "Type error: Unknown type '{name}'."),
            Self::UnknownVariable { name, offset } => {
                write!(f, "Type error at offset {offset}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name,
                                    arity,
                                    offset, } => write!(f,
                                                        "Type error at offset {offset}: Unknown function '{name}' taking {arity} argument(s)."),
            Self::UnknownField { owner,
                                 name,
                                 offset, } => {
                write!(f, "Type error at offset {offset}: Type {owner} has no field '{name}'.")
            },
            Self::UnknownMethod { owner,
                                  name,
                                  arity,
                                  offset, } => write!(f,
                                                      "Type error at offset {offset}: Type {owner} has no method '{name}' taking {arity} argument(s)."),
            Self::NotAnObject { found, offset } => write!(f,
                                                          "Type error at offset {offset}: {found} has no fields or methods."),
            Self::NotAssignable { target, found } => {
                write!(f, "Type error: Expected {target}, found {found}.")
            },
            Self::CapabilityDeclaration { name, found } => write!(f,
                                                                  "Type error: '{name}' cannot be declared as {found}; only parameters may use it."),
            Self::MissingDeclarationType { name } => write!(f,
                                                            "Type error: Declaration of '{name}' needs a type or an initial value."),
            Self::InvalidAssignmentReceiver { offset } => write!(f,
                                                                 "Type error at offset {offset}: Only variables and fields can be assigned."),
            Self::ExpectedBoolean { found, offset } => write!(f,
                                                              "Type error at offset {offset}: Condition must be Boolean, found {found}."),
            Self::ExpectedIterable { found, offset } => write!(f,
                                                               "Type error at offset {offset}: Loop value must be IntegerIterable, found {found}."),
            Self::EmptyThenBranch { offset } => write!(f,
                                                       "Type error at offset {offset}: IF statement needs at least one statement before ELSE or END."),
            Self::InvalidOperands { operator,
                                    left,
                                    right,
                                    offset, } => write!(f,
                                                        "Type error at offset {offset}: Cannot use '{operator}' on {left} and {right}."),
            Self::IntegerOutOfRange { offset } => write!(f,
                                                         "Type error at offset {offset}: Integer literal does not fit in 32 bits."),
            Self::DecimalOutOfRange { offset } => write!(f,
                                                         "Type error at offset {offset}: Decimal literal is out of double precision range."),
            Self::GroupNotBinary { offset } => write!(f,
                                                      "Type error at offset {offset}: Parentheses must contain a binary expression."),
            Self::ExpressionNotCall { offset } => write!(f,
                                                         "Type error at offset {offset}: Expression statements must be function calls."),
            Self::VariableRedefinition { name } => {
                write!(f, "Type error: Variable '{name}' is already defined in this scope.")
            },
            Self::FunctionRedefinition { name, arity } => write!(f,
                                                                 "Type error: Method '{name}' taking {arity} argument(s) is already defined."),
        }
    }
}

impl std::error::Error for TypeError {}
