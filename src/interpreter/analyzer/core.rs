use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Field, Method, NodeId, Source},
    error::TypeError,
    interpreter::{
        analyzer::assignable::require_assignable,
        environment::{
            registry::Registry,
            scope::Scope,
            types::{Signature, Type},
        },
    },
};

/// Result type used by the analyzer.
pub type AnalyzeResult<T> = Result<T, TypeError>;

/// The scope chain used during analysis: variables map to their types,
/// functions to their signatures.
pub type AnalysisScope = Scope<Type, Signature>;

/// What a name in the source resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A local variable, parameter or global field.
    Variable {
        /// The variable name.
        name:          String,
        /// The variable's declared or inferred type.
        variable_type: Type,
    },
    /// A field of an object.
    Field {
        /// The object type declaring the field.
        owner:      Type,
        /// The field name.
        name:       String,
        /// The declared field type.
        field_type: Type,
    },
    /// A function declared in the source or registered by the host.
    Function(Signature),
    /// A method of an object.
    Method {
        /// The object type declaring the method.
        owner:     Type,
        /// The method signature, without the receiver.
        signature: Signature,
    },
}

/// The facts established by a successful analysis, keyed by node id.
///
/// The syntax tree itself is never modified; everything the analyzer derives
/// lives here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analysis {
    types:        HashMap<NodeId, Type>,
    bindings:     HashMap<NodeId, Binding>,
    declarations: HashMap<NodeId, Type>,
    signatures:   HashMap<NodeId, Signature>,
}

impl Analysis {
    /// The type of an expression.
    ///
    /// After a successful analysis every expression has exactly one concrete
    /// type.
    #[must_use]
    pub fn type_of(&self, id: NodeId) -> Option<&Type> {
        self.types.get(&id)
    }

    /// What an access or call expression resolved to.
    #[must_use]
    pub fn binding(&self, id: NodeId) -> Option<&Binding> {
        self.bindings.get(&id)
    }

    /// The type of the variable a field or `LET` declaration introduced.
    #[must_use]
    pub fn declared_type(&self, id: NodeId) -> Option<&Type> {
        self.declarations.get(&id)
    }

    /// The signature of a method declaration.
    #[must_use]
    pub fn signature(&self, id: NodeId) -> Option<&Signature> {
        self.signatures.get(&id)
    }

    /// The number of expressions with a recorded type.
    #[must_use]
    pub fn expression_count(&self) -> usize {
        self.types.len()
    }
}

/// Checks a [`Source`] against the typing rules of the language.
///
/// The analyzer walks the tree once, keeping a scope chain that mirrors the
/// one the interpreter will build, and stops at the first violation.
pub struct Analyzer<'a> {
    registry:                                  &'a Registry,
    pub(in crate::interpreter::analyzer) scope: Rc<AnalysisScope>,
    pub(in crate::interpreter::analyzer) analysis: Analysis,
    pub(in crate::interpreter::analyzer) return_type: Type,
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer whose outermost scope holds the registry's
    /// function signatures.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        let scope = AnalysisScope::new(None);
        for function in registry.functions() {
            let signature = function.signature.clone();
            scope.define_function(signature.name.clone(), signature.arity(), signature);
        }

        Self { registry,
               scope,
               analysis: Analysis::default(),
               return_type: Type::Nil }
    }

    /// Analyzes a whole source.
    ///
    /// Fields are analyzed in order, each one visible to the fields after
    /// it. Then every method signature is registered before any method body
    /// is analyzed, so methods may call each other regardless of declaration
    /// order. Finally `main()` must exist and return `Integer`.
    ///
    /// # Errors
    /// The first [`TypeError`] found.
    pub fn analyze_source(mut self, source: &Source) -> AnalyzeResult<Analysis> {
        self.scope = AnalysisScope::new(Some(Rc::clone(&self.scope)));

        for field in &source.fields {
            self.analyze_field(field)?;
        }
        for method in &source.methods {
            self.register_method(method)?;
        }

        let main = self.scope.lookup_function("main", 0).ok_or(TypeError::MissingMain)?;
        if main.return_type != Type::Integer {
            return Err(TypeError::InvalidMainReturnType { found: main.return_type.to_string() });
        }

        for method in &source.methods {
            self.analyze_method(method)?;
        }

        Ok(self.analysis)
    }

    fn analyze_field(&mut self, field: &Field) -> AnalyzeResult<()> {
        let field_type = self.resolve_concrete_type(&field.name, &field.type_name)?;
        if let Some(value) = &field.value {
            let value_type = self.analyze_expression(value)?;
            require_assignable(&field_type, &value_type)?;
        }

        self.define_variable(&field.name, field_type.clone())?;
        self.record_declaration(field.id, field_type);
        Ok(())
    }

    /// Resolves a method's signature and defines it in the source scope.
    fn register_method(&mut self, method: &Method) -> AnalyzeResult<()> {
        let parameter_types = method.parameters
                                    .iter()
                                    .map(|parameter| self.resolve_optional_type(parameter.type_name.as_deref(), Type::Any))
                                    .collect::<AnalyzeResult<Vec<_>>>()?;
        let return_type = match method.return_type_name.as_deref() {
            Some(name) => self.resolve_concrete_type(&method.name, name)?,
            None => Type::Nil,
        };
        let signature = Signature::new(&method.name, parameter_types, return_type);

        if self.scope.has_local_function(&method.name, signature.arity()) {
            return Err(TypeError::FunctionRedefinition { name:  method.name.clone(),
                                                         arity: signature.arity(), });
        }

        self.scope
            .define_function(method.name.clone(), signature.arity(), signature.clone());
        self.analysis.signatures.insert(method.id, signature);
        Ok(())
    }

    /// Analyzes a method body in a new scope holding its parameters.
    fn analyze_method(&mut self, method: &Method) -> AnalyzeResult<()> {
        let Some(signature) = self.analysis.signatures.get(&method.id).cloned() else {
            return Err(TypeError::UnknownFunction { name:   method.name.clone(),
                                                    arity:  method.parameters.len(),
                                                    offset: method.offset, });
        };

        let previous_return_type = std::mem::replace(&mut self.return_type, signature.return_type);
        let scope = AnalysisScope::new(Some(Rc::clone(&self.scope)));
        let result = self.with_scope(scope, |this| {
                             for (parameter, parameter_type) in
                                 method.parameters.iter().zip(signature.parameter_types)
                             {
                                 this.define_variable(&parameter.name, parameter_type)?;
                             }
                             this.analyze_statements(&method.statements)
                         });
        self.return_type = previous_return_type;
        result
    }

    /// Resolves a type name against the built-in types and the registry's
    /// object types.
    pub(in crate::interpreter::analyzer) fn resolve_type(&self, name: &str) -> AnalyzeResult<Type> {
        self.registry
            .resolve_type(name)
            .ok_or_else(|| TypeError::UnknownType { name: name.to_string() })
    }

    /// Resolves the declared type of a field, variable or method result,
    /// which must not be a capability type.
    pub(in crate::interpreter::analyzer) fn resolve_concrete_type(&self,
                                                                  declared: &str,
                                                                  name: &str)
                                                                  -> AnalyzeResult<Type> {
        let resolved = self.resolve_type(name)?;
        if resolved.is_capability() {
            return Err(TypeError::CapabilityDeclaration { name:  declared.to_string(),
                                                          found: resolved.name().to_string(), });
        }
        Ok(resolved)
    }

    fn resolve_optional_type(&self, name: Option<&str>, default: Type) -> AnalyzeResult<Type> {
        name.map_or(Ok(default), |name| self.resolve_type(name))
    }

    /// Defines a variable in the current scope.
    ///
    /// # Errors
    /// `VariableRedefinition` if the current scope already has it; shadowing
    /// a variable of an enclosing scope is fine.
    pub(in crate::interpreter::analyzer) fn define_variable(&self,
                                                           name: &str,
                                                           variable_type: Type)
                                                           -> AnalyzeResult<()> {
        if self.scope.has_local_variable(name) {
            return Err(TypeError::VariableRedefinition { name: name.to_string() });
        }
        self.scope.define_variable(name, variable_type);
        Ok(())
    }

    /// Runs `f` with `scope` as the current scope, restoring the previous
    /// scope afterwards.
    pub(in crate::interpreter::analyzer) fn with_scope<T>(&mut self,
                                                         scope: Rc<AnalysisScope>,
                                                         f: impl FnOnce(&mut Self) -> AnalyzeResult<T>)
                                                         -> AnalyzeResult<T> {
        let previous = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = previous;
        result
    }

    /// Runs `f` in a fresh child of the current scope.
    pub(in crate::interpreter::analyzer) fn with_child_scope<T>(&mut self,
                                                               f: impl FnOnce(&mut Self) -> AnalyzeResult<T>)
                                                               -> AnalyzeResult<T> {
        let child = AnalysisScope::new(Some(Rc::clone(&self.scope)));
        self.with_scope(child, f)
    }

    pub(in crate::interpreter::analyzer) fn record_type(&mut self, id: NodeId, expr_type: Type) -> Type {
        self.analysis.types.insert(id, expr_type.clone());
        expr_type
    }

    pub(in crate::interpreter::analyzer) fn record_binding(&mut self, id: NodeId, binding: Binding) {
        self.analysis.bindings.insert(id, binding);
    }

    pub(in crate::interpreter::analyzer) fn record_declaration(&mut self,
                                                              id: NodeId,
                                                              variable_type: Type) {
        self.analysis.declarations.insert(id, variable_type);
    }
}

/// Analyzes `source` with the functions and types of `registry`.
///
/// # Errors
/// Returns the first [`TypeError`]; analysis does not continue past it.
///
/// # Example
/// ```
/// use ember::{
///     error::TypeError,
///     interpreter::{analyzer::analyze, environment::registry::Registry, lexer::lex, parser::parse},
/// };
///
/// let source = parse(lex("DEF main() DO END").unwrap()).unwrap();
///
/// assert_eq!(analyze(&source, &Registry::standard()),
///            Err(TypeError::InvalidMainReturnType { found: "Nil".to_string() }));
/// ```
pub fn analyze(source: &Source, registry: &Registry) -> AnalyzeResult<Analysis> {
    Analyzer::new(registry).analyze_source(source)
}
