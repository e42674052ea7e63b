use std::rc::Rc;

use crate::{
    ast::{Declaration, Expr, ExprKind, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Variable},
        value::core::Value,
    },
};

/// How a statement finished.
///
/// `RETURN` does not unwind the host stack; it completes every enclosing
/// statement with `Return` until the method call that runs the body turns it
/// into the call's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Execution continues with the next statement.
    Normal,
    /// A `RETURN` was executed with this value.
    Return(Value),
}

impl Interpreter {
    /// Executes a single statement.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the statement's expressions, or
    /// `InvalidAssignmentReceiver` when assigning to something that is not a
    /// variable or field.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<Completion> {
        match statement {
            Stmt::Expression(expression) => {
                self.eval(expression)?;
                Ok(Completion::Normal)
            },
            Stmt::Declaration(declaration) => {
                self.execute_declaration(declaration)?;
                Ok(Completion::Normal)
            },
            Stmt::Assignment { receiver, value } => {
                self.execute_assignment(receiver, value)?;
                Ok(Completion::Normal)
            },
            Stmt::If { condition,
                       then_statements,
                       else_statements, } => {
                if self.eval(condition)?.as_boolean()? {
                    self.execute_block(then_statements)
                } else {
                    self.execute_block(else_statements)
                }
            },
            Stmt::For { name,
                        value,
                        statements, } => self.execute_for(name, value, statements),
            Stmt::While { condition,
                          statements, } => {
                while self.eval(condition)?.as_boolean()? {
                    if let Completion::Return(value) = self.execute_block(statements)? {
                        return Ok(Completion::Return(value));
                    }
                }
                Ok(Completion::Normal)
            },
            Stmt::Return { value, .. } => Ok(Completion::Return(self.eval(value)?)),
        }
    }

    /// Executes statements in a fresh child scope, stopping at the first
    /// `RETURN`.
    ///
    /// The child scope is discarded on every exit path.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a statement.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<Completion> {
        self.with_child_scope(|this| this.execute_statements(statements))
    }

    /// Executes statements in the current scope, stopping at the first
    /// `RETURN`.
    pub(in crate::interpreter::evaluator) fn execute_statements(&mut self,
                                                               statements: &[Stmt])
                                                               -> EvalResult<Completion> {
        for statement in statements {
            if let Completion::Return(value) = self.execute(statement)? {
                return Ok(Completion::Return(value));
            }
        }
        Ok(Completion::Normal)
    }

    /// Defines a variable in the current scope, initialized to its value or
    /// to `NIL`.
    fn execute_declaration(&mut self, declaration: &Declaration) -> EvalResult<()> {
        let value = match &declaration.value {
            Some(value) => self.eval(value)?,
            None => Value::Nil,
        };

        self.scope.define_variable(declaration.name.clone(),
                                   Rc::new(Variable::new(value)));
        Ok(())
    }

    /// Stores a value into a variable or an object field.
    ///
    /// For fields the receiver object is evaluated before the value.
    fn execute_assignment(&mut self, receiver: &Expr, value: &Expr) -> EvalResult<()> {
        let ExprKind::Access { receiver: object, name } = &receiver.kind else {
            return Err(RuntimeError::InvalidAssignmentReceiver);
        };

        match object {
            Some(object) => {
                let object = self.eval(object)?;
                let value = self.eval(value)?;
                object.as_object()?.set_field(name, value)
            },
            None => {
                let variable = self.lookup_variable(name)?;
                variable.set(self.eval(value)?);
                Ok(())
            },
        }
    }
}
