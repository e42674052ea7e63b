use std::rc::Rc;

use crate::{
    ast::{Expr, Stmt},
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, Variable},
            statement::Completion,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes a `FOR` loop.
    ///
    /// The iterated expression must evaluate to a range. Each element is
    /// bound to the loop variable in a fresh scope of its own, in which the
    /// body runs; assignments to the loop variable therefore never leak into
    /// the next iteration.
    ///
    /// A `RETURN` inside the body ends the loop and is passed on.
    ///
    /// # Errors
    /// `ExpectedIterable` if the value is not iterable, or any error raised
    /// by the body.
    ///
    /// # Example
    /// ```
    /// use ember::{ast::Stmt, interpreter::{
    ///     environment::registry::Registry,
    ///     evaluator::{core::Interpreter, statement::Completion},
    ///     lexer::lex,
    ///     parser::Parser,
    /// }};
    ///
    /// let tokens = lex("FOR i IN range(0, 3) DO RETURN i; END").unwrap();
    /// let statement = Parser::new(tokens).parse_statement().unwrap();
    ///
    /// let Stmt::For { name, value, statements } = &statement else { unreachable!() };
    /// let mut interpreter = Interpreter::new(&Registry::standard());
    ///
    /// assert_eq!(interpreter.execute_for(name, value, statements).unwrap(),
    ///            Completion::Return(0.into()));
    /// ```
    pub fn execute_for(&mut self,
                       name: &str,
                       value: &Expr,
                       statements: &[Stmt])
                       -> EvalResult<Completion> {
        let range = self.eval(value)?.as_range()?.clone();

        for element in range.iter() {
            let completion = self.with_child_scope(|this| {
                                     this.scope
                                         .define_variable(name, Rc::new(Variable::new(Value::from(element))));
                                     this.execute_statements(statements)
                                 })?;

            if let Completion::Return(value) = completion {
                return Ok(Completion::Return(value));
            }
        }

        Ok(Completion::Normal)
    }
}
