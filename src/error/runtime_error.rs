#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during interpretation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not defined with this arity.
    UnknownFunction {
        /// The name of the function.
        name:  String,
        /// The number of arguments supplied.
        arity: usize,
    },
    /// Accessed a field the object does not have.
    UnknownField {
        /// The object's type name.
        owner: String,
        /// The missing field.
        name:  String,
    },
    /// Called a method the object does not have.
    UnknownMethod {
        /// The object's type name.
        owner: String,
        /// The missing method.
        name:  String,
        /// The number of arguments supplied.
        arity: usize,
    },
    /// A field access or method call was applied to a non-object value.
    NotAnObject {
        /// The kind of the receiver value.
        found: String,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The kind of the value found.
        found: String,
    },
    /// An integer value was expected, but not found.
    ExpectedInteger {
        /// The kind of the value found.
        found: String,
    },
    /// An iterable value was expected, but not found.
    ExpectedIterable {
        /// The kind of the value found.
        found: String,
    },
    /// A binary operator was applied to values it does not accept.
    InvalidOperands {
        /// The operator.
        operator: String,
        /// The kind of the left operand.
        left:     String,
        /// The kind of the right operand.
        right:    String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// The left side of an assignment was not a variable or field.
    InvalidAssignmentReceiver,
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// The integer returned by `main` does not fit an exit status.
    ExitCodeOutOfRange {
        /// The returned value.
        value: String,
    },
    /// Declared methods called each other more deeply than allowed.
    CallDepthExceeded {
        /// The call depth limit.
        limit: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Runtime error: Unknown variable '{name}'."),
            Self::UnknownFunction { name, arity } => write!(f,
                                                            "Runtime error: Unknown function '{name}' taking {arity} argument(s)."),
            Self::UnknownField { owner, name } => {
                write!(f, "Runtime error: {owner} has no field '{name}'.")
            },
            Self::UnknownMethod { owner, name, arity } => write!(f,
                                                                 "Runtime error: {owner} has no method '{name}' taking {arity} argument(s)."),
            Self::NotAnObject { found } => {
                write!(f, "Runtime error: {found} has no fields or methods.")
            },
            Self::ExpectedBoolean { found } => {
                write!(f, "Runtime error: Expected Boolean, found {found}.")
            },
            Self::ExpectedInteger { found } => {
                write!(f, "Runtime error: Expected Integer, found {found}.")
            },
            Self::ExpectedIterable { found } => {
                write!(f, "Runtime error: Expected an iterable value, found {found}.")
            },
            Self::InvalidOperands { operator,
                                    left,
                                    right, } => {
                write!(f, "Runtime error: Cannot use '{operator}' on {left} and {right}.")
            },
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Runtime error: '{name}' takes {expected} argument(s), but {found} were supplied."),
            Self::InvalidAssignmentReceiver => {
                write!(f, "Runtime error: Only variables and fields can be assigned.")
            },
            Self::InvalidArgument { details } => {
                write!(f, "Runtime error: Invalid argument: {details}.")
            },
            Self::ExitCodeOutOfRange { value } => write!(f,
                                                         "Runtime error: 'main' returned {value}, which is not a valid exit status."),
            Self::CallDepthExceeded { limit } => {
                write!(f, "Runtime error: Calls nested more than {limit} levels deep.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
