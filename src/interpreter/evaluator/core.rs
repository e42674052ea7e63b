use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, ExprKind, Method, Source},
    error::RuntimeError,
    interpreter::{
        environment::{registry::Registry, scope::Scope, types::NativeBody},
        value::core::Value,
    },
    util::num::bigint_to_i32_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Deepest chain of declared method calls a program may build.
///
/// Every call recurses through the evaluator, so the limit turns runaway
/// recursion into a [`RuntimeError::CallDepthExceeded`] before the stack runs
/// out. It assumes a stack of at least 8 MiB, the size of a main thread.
pub const MAX_CALL_DEPTH: usize = 128;

/// The scope chain the interpreter runs in.
pub type RuntimeScope = Scope<Rc<Variable>, Rc<Function>>;

/// A mutable storage cell, bound to a name by the scope that holds it.
///
/// Variables are shared through `Rc`, so a closure and the block that
/// declared the variable observe the same value.
#[derive(Debug)]
pub struct Variable {
    value: RefCell<Value>,
}

impl Variable {
    /// Creates a variable holding `value`.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value: RefCell::new(value) }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> Value {
        self.value.borrow().clone()
    }

    /// Replaces the current value.
    pub fn set(&self, value: Value) {
        *self.value.borrow_mut() = value;
    }
}

/// How a callable is implemented.
#[derive(Clone)]
pub enum Implementation {
    /// A function provided by the host.
    Native(NativeBody),
    /// A method declared in the program, closing over the scope it was
    /// declared in.
    Declared {
        /// The declaration.
        method:  Rc<Method>,
        /// The scope the declaration was evaluated in.
        closure: Rc<RuntimeScope>,
    },
}

/// A callable bound in a scope under its name and arity.
#[derive(Clone)]
pub struct Function {
    /// The function name.
    pub name:           String,
    /// The number of parameters.
    pub arity:          usize,
    /// The implementation.
    pub implementation: Implementation,
}

/// Executes analyzed (or unanalyzed) programs by walking their syntax tree.
///
/// ## Usage
///
/// An `Interpreter` is created from a [`Registry`], whose functions become
/// the outermost scope, and then runs one [`Source`]. Runtime violations
/// abort the run with a [`RuntimeError`]; the analyzer rules out most of them
/// in advance.
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) scope:      Rc<RuntimeScope>,
    pub(in crate::interpreter::evaluator) call_depth: usize,
}

impl Interpreter {
    /// Creates an interpreter whose outermost scope holds the registry's
    /// functions.
    #[must_use]
    pub fn new(registry: &Registry) -> Self {
        let scope = RuntimeScope::new(None);
        for native in registry.functions() {
            let function = Function { name:           native.signature.name.clone(),
                                      arity:          native.signature.arity(),
                                      implementation: Implementation::Native(Rc::clone(&native.body)), };
            scope.define_function(function.name.clone(), function.arity, Rc::new(function));
        }

        Self { scope,
               call_depth: 0, }
    }

    /// The scope currently active.
    #[must_use]
    pub const fn scope(&self) -> &Rc<RuntimeScope> {
        &self.scope
    }

    /// Runs a program and returns the value `main()` returned.
    ///
    /// Fields are evaluated in declaration order into a new source scope,
    /// every method is bound there as a closure over that scope, and then
    /// `main` is invoked without arguments.
    ///
    /// # Errors
    /// `UnknownFunction` if there is no `main()`, or any error raised while
    /// running the program.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     environment::registry::Registry,
    ///     evaluator::core::Interpreter,
    ///     lexer::lex,
    ///     parser::parse,
    ///     value::core::Value,
    /// };
    ///
    /// let source = parse(lex("DEF main(): Integer DO RETURN 6 * 7; END").unwrap()).unwrap();
    /// let result = Interpreter::new(&Registry::standard()).run(&source).unwrap();
    ///
    /// assert_eq!(result, Value::from(42));
    /// ```
    pub fn run(&mut self, source: &Source) -> EvalResult<Value> {
        let source_scope = RuntimeScope::new(Some(Rc::clone(&self.scope)));
        self.with_scope(source_scope, |this| {
                for field in &source.fields {
                    let value = match &field.value {
                        Some(value) => this.eval(value)?,
                        None => Value::Nil,
                    };
                    this.scope
                        .define_variable(field.name.clone(), Rc::new(Variable::new(value)));
                }

                for method in &source.methods {
                    let function = Function { name:           method.name.clone(),
                                              arity:          method.parameters.len(),
                                              implementation: Implementation::Declared { method:  Rc::clone(method),
                                                                                         closure: Rc::clone(&this.scope), }, };
                    this.scope
                        .define_function(method.name.clone(), function.arity, Rc::new(function));
                }

                let main = this.scope.lookup_function("main", 0).ok_or_else(|| {
                                                                     RuntimeError::UnknownFunction { name:  "main".to_string(),
                                                                                                     arity: 0, }
                                                                 })?;
                this.invoke(&main, Vec::new())
            })
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression kind.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the expression or its
    /// operands.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),
            ExprKind::Group(inner) => self.eval(inner),
            ExprKind::Binary { operator,
                               left,
                               right, } => self.eval_binary(*operator, left, right),
            ExprKind::Access { receiver, name } => self.eval_access(receiver.as_deref(), name),
            ExprKind::Function { receiver,
                                 name,
                                 arguments, } => {
                self.eval_function(receiver.as_deref(), name, arguments)
            },
        }
    }

    /// Reads a variable, or a field when a receiver is given.
    fn eval_access(&mut self, receiver: Option<&Expr>, name: &str) -> EvalResult<Value> {
        match receiver {
            Some(receiver) => self.eval(receiver)?.as_object()?.field(name),
            None => Ok(self.lookup_variable(name)?.get()),
        }
    }

    /// Finds a variable visible from the current scope.
    pub(in crate::interpreter::evaluator) fn lookup_variable(&self,
                                                            name: &str)
                                                            -> EvalResult<Rc<Variable>> {
        self.scope
            .lookup_variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Runs `f` with `scope` as the current scope and restores the previous
    /// scope afterwards, whether `f` succeeds or fails.
    pub(in crate::interpreter::evaluator) fn with_scope<T>(&mut self,
                                                          scope: Rc<RuntimeScope>,
                                                          f: impl FnOnce(&mut Self) -> EvalResult<T>)
                                                          -> EvalResult<T> {
        let previous = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = previous;
        result
    }

    /// Runs `f` in a fresh child of the current scope.
    pub(in crate::interpreter::evaluator) fn with_child_scope<T>(&mut self,
                                                                f: impl FnOnce(&mut Self) -> EvalResult<T>)
                                                                -> EvalResult<T> {
        let child = RuntimeScope::new(Some(Rc::clone(&self.scope)));
        self.with_scope(child, f)
    }
}

/// Converts the value returned by `main` into a process exit status.
///
/// # Errors
/// `ExpectedInteger` for non-integer values, `ExitCodeOutOfRange` for
/// integers outside the `i32` range.
///
/// # Example
/// ```
/// use ember::{error::RuntimeError, interpreter::{evaluator::core::exit_code, value::core::Value}};
///
/// assert_eq!(exit_code(&Value::from(3)), Ok(3));
/// assert!(matches!(exit_code(&Value::from(1_i64 << 40)),
///                  Err(RuntimeError::ExitCodeOutOfRange { .. })));
/// ```
pub fn exit_code(value: &Value) -> EvalResult<i32> {
    let integer = value.as_integer()?;
    bigint_to_i32_checked(integer).ok_or_else(|| RuntimeError::ExitCodeOutOfRange { value: integer.to_string() })
}
