use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{
                EvalResult, Function, Implementation, Interpreter, RuntimeScope, Variable,
                MAX_CALL_DEPTH,
            },
            statement::Completion,
            utils::check_arity,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a function call, or a method call when a receiver is given.
    ///
    /// The receiver is evaluated first, then the arguments from left to
    /// right. Methods are looked up on the receiver's object type; plain
    /// functions by name and arity in the current scope chain.
    ///
    /// # Errors
    /// `UnknownFunction` / `UnknownMethod` if nothing matches, `NotAnObject`
    /// for a receiver without methods, or any error raised by the call.
    pub(in crate::interpreter::evaluator) fn eval_function(&mut self,
                                                          receiver: Option<&Expr>,
                                                          name: &str,
                                                          arguments: &[Expr])
                                                          -> EvalResult<Value> {
        let receiver = receiver.map(|receiver| self.eval(receiver)).transpose()?;
        let arguments = arguments.iter()
                                 .map(|argument| self.eval(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;

        if let Some(receiver) = receiver {
            let object_type = Rc::clone(receiver.as_object()?.object_type());
            return object_type.call_method(receiver, name, arguments);
        }

        let function =
            self.scope
                .lookup_function(name, arguments.len())
                .ok_or_else(|| RuntimeError::UnknownFunction { name:  name.to_string(),
                                                               arity: arguments.len(), })?;
        self.invoke(&function, arguments)
    }

    /// Calls a function with already evaluated arguments.
    ///
    /// A declared method runs in a new scope nested in its closure, with one
    /// variable per parameter; the caller's scope is restored afterwards. The
    /// result is the returned value, or `NIL` if the body ends without
    /// `RETURN`.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if the arity differs, `CallDepthExceeded` once
    /// [`MAX_CALL_DEPTH`] declared calls are active, or any error raised by
    /// the body.
    pub fn invoke(&mut self, function: &Function, arguments: Vec<Value>) -> EvalResult<Value> {
        check_arity(&function.name, &arguments, function.arity)?;

        match &function.implementation {
            Implementation::Native(body) => body(&arguments),
            Implementation::Declared { method, closure } => {
                if self.call_depth == MAX_CALL_DEPTH {
                    return Err(RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH });
                }

                let scope = RuntimeScope::new(Some(Rc::clone(closure)));
                for (parameter, argument) in method.parameters.iter().zip(arguments) {
                    scope.define_variable(parameter.name.clone(),
                                          Rc::new(Variable::new(argument)));
                }

                self.call_depth += 1;
                let completion =
                    self.with_scope(scope, |this| this.execute_statements(&method.statements));
                self.call_depth -= 1;

                Ok(match completion? {
                    Completion::Normal => Value::Nil,
                    Completion::Return(value) => value,
                })
            },
        }
    }
}
