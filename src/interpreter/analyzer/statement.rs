use crate::{
    ast::{Declaration, Expr, ExprKind, Stmt},
    error::TypeError,
    interpreter::{
        analyzer::{
            assignable::require_assignable,
            core::{AnalyzeResult, Analyzer},
        },
        environment::types::Type,
    },
};

impl Analyzer<'_> {
    /// Analyzes statements in the current scope.
    pub(in crate::interpreter::analyzer) fn analyze_statements(&mut self,
                                                              statements: &[Stmt])
                                                              -> AnalyzeResult<()> {
        for statement in statements {
            self.analyze_statement(statement)?;
        }
        Ok(())
    }

    /// Analyzes statements in a fresh child scope.
    fn analyze_block(&mut self, statements: &[Stmt]) -> AnalyzeResult<()> {
        self.with_child_scope(|this| this.analyze_statements(statements))
    }

    /// Analyzes a single statement.
    ///
    /// # Errors
    /// The first `TypeError` in the statement or its nested blocks.
    pub fn analyze_statement(&mut self, statement: &Stmt) -> AnalyzeResult<()> {
        match statement {
            Stmt::Expression(expression) => {
                self.analyze_expression(expression)?;
                if !matches!(expression.kind, ExprKind::Function { .. }) {
                    return Err(TypeError::ExpressionNotCall { offset: expression.offset });
                }
                Ok(())
            },
            Stmt::Declaration(declaration) => self.analyze_declaration(declaration),
            Stmt::Assignment { receiver, value } => self.analyze_assignment(receiver, value),
            Stmt::If { condition,
                       then_statements,
                       else_statements, } => {
                self.require_boolean(condition)?;
                if then_statements.is_empty() {
                    return Err(TypeError::EmptyThenBranch { offset: condition.offset });
                }
                self.analyze_block(then_statements)?;
                self.analyze_block(else_statements)
            },
            Stmt::For { name,
                        value,
                        statements, } => {
                let value_type = self.analyze_expression(value)?;
                if value_type != Type::IntegerIterable {
                    return Err(TypeError::ExpectedIterable { found:  value_type.to_string(),
                                                             offset: value.offset, });
                }
                self.with_child_scope(|this| {
                        this.define_variable(name, Type::Integer)?;
                        this.analyze_statements(statements)
                    })
            },
            Stmt::While { condition,
                          statements, } => {
                self.require_boolean(condition)?;
                self.analyze_block(statements)
            },
            Stmt::Return { value, .. } => {
                let value_type = self.analyze_expression(value)?;
                require_assignable(&self.return_type, &value_type)
            },
        }
    }

    /// A declaration takes its type from the annotation, or else from the
    /// initializer. With both present the initializer must be assignable to
    /// the annotation.
    fn analyze_declaration(&mut self, declaration: &Declaration) -> AnalyzeResult<()> {
        let declared_type = declaration.type_name
                                       .as_deref()
                                       .map(|name| self.resolve_concrete_type(&declaration.name, name))
                                       .transpose()?;
        let value_type = declaration.value
                                    .as_ref()
                                    .map(|value| self.analyze_expression(value))
                                    .transpose()?;

        let variable_type = match (declared_type, value_type) {
            (Some(declared), Some(value)) => {
                require_assignable(&declared, &value)?;
                declared
            },
            (Some(declared), None) => declared,
            (None, Some(value)) => value,
            (None, None) => {
                return Err(TypeError::MissingDeclarationType { name: declaration.name.clone() });
            },
        };

        self.define_variable(&declaration.name, variable_type.clone())?;
        self.record_declaration(declaration.id, variable_type);
        Ok(())
    }

    /// The receiver must be a variable or field access; the value must be
    /// assignable to its type.
    fn analyze_assignment(&mut self, receiver: &Expr, value: &Expr) -> AnalyzeResult<()> {
        if !matches!(receiver.kind, ExprKind::Access { .. }) {
            return Err(TypeError::InvalidAssignmentReceiver { offset: receiver.offset });
        }

        let target_type = self.analyze_expression(receiver)?;
        let value_type = self.analyze_expression(value)?;
        require_assignable(&target_type, &value_type)
    }

    fn require_boolean(&mut self, condition: &Expr) -> AnalyzeResult<()> {
        let condition_type = self.analyze_expression(condition)?;
        if condition_type == Type::Boolean {
            Ok(())
        } else {
            Err(TypeError::ExpectedBoolean { found:  condition_type.to_string(),
                                             offset: condition.offset, })
        }
    }
}
