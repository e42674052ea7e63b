use crate::{
    ast::{BinaryOperator, Expr, ExprKind, LiteralValue},
    error::TypeError,
    interpreter::{
        analyzer::{
            assignable::require_assignable,
            core::{AnalyzeResult, Analyzer, Binding},
        },
        environment::types::{Signature, Type},
    },
    util::num::{bigint_to_i32_checked, decimal_to_f64_checked},
};

impl Analyzer<'_> {
    /// Analyzes an expression and returns its type.
    ///
    /// The type is also recorded for the expression's id, together with the
    /// binding of every name the expression refers to.
    ///
    /// # Errors
    /// The first `TypeError` in the expression or its operands.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     analyzer::core::Analyzer, environment::{registry::Registry, types::Type},
    ///     lexer::lex, parser::Parser,
    /// };
    ///
    /// let registry = Registry::standard();
    /// let mut analyzer = Analyzer::new(&registry);
    ///
    /// let expression = Parser::new(lex("\"a\" + 1").unwrap()).parse_expression().unwrap();
    /// assert_eq!(analyzer.analyze_expression(&expression), Ok(Type::String));
    /// ```
    pub fn analyze_expression(&mut self, expr: &Expr) -> AnalyzeResult<Type> {
        let expr_type = match &expr.kind {
            ExprKind::Literal(literal) => Self::literal_type(literal, expr.offset)?,
            ExprKind::Group(inner) => {
                if !matches!(inner.kind, ExprKind::Binary { .. }) {
                    return Err(TypeError::GroupNotBinary { offset: expr.offset });
                }
                self.analyze_expression(inner)?
            },
            ExprKind::Binary { operator,
                               left,
                               right, } => self.analyze_binary(*operator, left, right, expr.offset)?,
            ExprKind::Access { receiver, name } => match receiver {
                Some(receiver) => self.analyze_field_access(expr, receiver, name)?,
                None => {
                    let variable_type = self.scope.lookup_variable(name).ok_or_else(|| {
                                                  TypeError::UnknownVariable { name:   name.clone(),
                                                                               offset: expr.offset, }
                                              })?;
                    self.record_binding(expr.id,
                                        Binding::Variable { name:          name.clone(),
                                                            variable_type: variable_type.clone(), });
                    variable_type
                },
            },
            ExprKind::Function { receiver,
                                 name,
                                 arguments, } => match receiver {
                Some(receiver) => self.analyze_method_call(expr, receiver, name, arguments)?,
                None => {
                    let signature =
                        self.scope
                            .lookup_function(name, arguments.len())
                            .ok_or_else(|| TypeError::UnknownFunction { name:   name.clone(),
                                                                        arity:  arguments.len(),
                                                                        offset: expr.offset, })?;
                    self.analyze_arguments(&signature, arguments)?;
                    let return_type = signature.return_type.clone();
                    self.record_binding(expr.id, Binding::Function(signature));
                    return_type
                },
            },
        };

        Ok(self.record_type(expr.id, expr_type))
    }

    /// Integer literals must fit in 32 signed bits and decimal literals in a
    /// double.
    fn literal_type(literal: &LiteralValue, offset: usize) -> AnalyzeResult<Type> {
        Ok(match literal {
            LiteralValue::Nil => Type::Nil,
            LiteralValue::Boolean(_) => Type::Boolean,
            LiteralValue::Integer(n) => {
                bigint_to_i32_checked(n).ok_or(TypeError::IntegerOutOfRange { offset })?;
                Type::Integer
            },
            LiteralValue::Decimal(d) => {
                decimal_to_f64_checked(d).ok_or(TypeError::DecimalOutOfRange { offset })?;
                Type::Decimal
            },
            LiteralValue::Character(_) => Type::Character,
            LiteralValue::String(_) => Type::String,
        })
    }

    /// Types a binary expression.
    ///
    /// - `AND` / `OR`: both operands `Boolean`.
    /// - Comparisons: both operands of one comparable type; the result is
    ///   `Boolean`.
    /// - `+`: `String` when either operand is a string, otherwise like the
    ///   other arithmetic operators.
    /// - `-`, `*`, `/`: both operands `Integer` or both `Decimal`.
    fn analyze_binary(&mut self,
                      operator: BinaryOperator,
                      left: &Expr,
                      right: &Expr,
                      offset: usize)
                      -> AnalyzeResult<Type> {
        let left_type = self.analyze_expression(left)?;

        if matches!(operator, BinaryOperator::And | BinaryOperator::Or) {
            Self::require_boolean_operand(&left_type, left)?;
            let right_type = self.analyze_expression(right)?;
            Self::require_boolean_operand(&right_type, right)?;
            return Ok(Type::Boolean);
        }

        let right_type = self.analyze_expression(right)?;
        let invalid = || TypeError::InvalidOperands { operator: operator.to_string(),
                                                      left: left_type.to_string(),
                                                      right: right_type.to_string(),
                                                      offset };

        if operator.is_comparison() {
            if !left_type.is_comparable() || left_type != right_type {
                return Err(invalid());
            }
            return Ok(Type::Boolean);
        }

        if operator == BinaryOperator::Add
           && (left_type == Type::String || right_type == Type::String)
        {
            return Ok(Type::String);
        }

        match (&left_type, &right_type) {
            (Type::Integer, Type::Integer) => Ok(Type::Integer),
            (Type::Decimal, Type::Decimal) => Ok(Type::Decimal),
            _ => Err(invalid()),
        }
    }

    fn require_boolean_operand(operand_type: &Type, operand: &Expr) -> AnalyzeResult<()> {
        if *operand_type == Type::Boolean {
            Ok(())
        } else {
            Err(TypeError::ExpectedBoolean { found:  operand_type.to_string(),
                                             offset: operand.offset, })
        }
    }

    /// Types `receiver.name`, which must name a field of the receiver's
    /// object type.
    fn analyze_field_access(&mut self,
                            expr: &Expr,
                            receiver: &Expr,
                            name: &str)
                            -> AnalyzeResult<Type> {
        let owner = self.analyze_expression(receiver)?;
        let Type::Object(object_type) = &owner else {
            return Err(TypeError::NotAnObject { found:  owner.to_string(),
                                                offset: receiver.offset, });
        };

        let field_type =
            object_type.field_type(name)
                       .cloned()
                       .ok_or_else(|| TypeError::UnknownField { owner:  owner.to_string(),
                                                                name:   name.to_string(),
                                                                offset: expr.offset, })?;

        self.record_binding(expr.id,
                            Binding::Field { owner: owner.clone(),
                                             name: name.to_string(),
                                             field_type: field_type.clone() });
        Ok(field_type)
    }

    /// Types `receiver.name(arguments)`, which must name a method of the
    /// receiver's object type.
    fn analyze_method_call(&mut self,
                           expr: &Expr,
                           receiver: &Expr,
                           name: &str,
                           arguments: &[Expr])
                           -> AnalyzeResult<Type> {
        let owner = self.analyze_expression(receiver)?;
        let Type::Object(object_type) = &owner else {
            return Err(TypeError::NotAnObject { found:  owner.to_string(),
                                                offset: receiver.offset, });
        };

        let signature = object_type.method(name, arguments.len())
                                   .map(|method| method.signature.clone())
                                   .ok_or_else(|| TypeError::UnknownMethod { owner:  owner.to_string(),
                                                                             name:   name.to_string(),
                                                                             arity:  arguments.len(),
                                                                             offset: expr.offset, })?;
        self.analyze_arguments(&signature, arguments)?;

        let return_type = signature.return_type.clone();
        self.record_binding(expr.id, Binding::Method { owner: owner.clone(), signature });
        Ok(return_type)
    }

    /// Each argument must be assignable to its parameter type.
    fn analyze_arguments(&mut self, signature: &Signature, arguments: &[Expr]) -> AnalyzeResult<()> {
        for (parameter_type, argument) in signature.parameter_types.iter().zip(arguments) {
            let argument_type = self.analyze_expression(argument)?;
            require_assignable(parameter_type, &argument_type)?;
        }
        Ok(())
    }
}
