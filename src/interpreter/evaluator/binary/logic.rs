use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `AND` or `OR` with short-circuiting.
    ///
    /// The left operand must be a boolean. The right operand is evaluated,
    /// and must then be a boolean too, only when the left operand does not
    /// decide the result.
    pub(in crate::interpreter::evaluator) fn eval_logic(&mut self,
                                                       operator: BinaryOperator,
                                                       left: &Expr,
                                                       right: &Expr)
                                                       -> EvalResult<Value> {
        let left = self.eval(left)?.as_boolean()?;

        let decided = match operator {
            BinaryOperator::And => !left,
            _ => left,
        };
        if decided {
            return Ok(Value::Boolean(left));
        }

        Ok(Value::Boolean(self.eval(right)?.as_boolean()?))
    }
}
