use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary expression.
    ///
    /// `AND` and `OR` evaluate their right operand only when needed. Every
    /// other operator evaluates both operands, left first, and is routed to
    /// `eval_comparison` or `eval_arithmetic`.
    ///
    /// # Example
    /// ```
    /// use ember::{
    ///     ast::{BinaryOperator, Expr, ExprKind, LiteralValue, NodeId},
    ///     interpreter::{
    ///         environment::registry::Registry, evaluator::core::Interpreter, value::core::Value,
    ///     },
    /// };
    ///
    /// let literal = |value: i64| Expr { id:     NodeId(0),
    ///                                   offset: 0,
    ///                                   kind:   ExprKind::Literal(LiteralValue::from(value)), };
    ///
    /// let mut interpreter = Interpreter::new(&Registry::standard());
    /// let result = interpreter.eval_binary(BinaryOperator::Sub, &literal(3), &literal(4));
    ///
    /// assert_eq!(result, Ok(Value::from(-1)));
    /// ```
    pub fn eval_binary(&mut self,
                       operator: BinaryOperator,
                       left: &Expr,
                       right: &Expr)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match operator {
            And | Or => self.eval_logic(operator, left, right),
            Less | LessEqual | Greater | GreaterEqual | Equal | NotEqual => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_comparison(operator, &left, &right)
            },
            Add | Sub | Mul | Div => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_arithmetic(operator, &left, &right)
            },
        }
    }
}
