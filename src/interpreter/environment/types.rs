use std::{collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The body of a function implemented by the host.
///
/// It receives the already evaluated arguments; for object methods the
/// receiver comes first.
pub type NativeBody = Rc<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// A static type.
///
/// `Comparable` and `Any` are capability types: they never describe a value
/// directly, but are accepted as parameter types. See
/// [`require_assignable`](crate::interpreter::analyzer::assignable::require_assignable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// The type of `NIL` and of methods without a return type.
    Nil,
    /// `TRUE` and `FALSE`.
    Boolean,
    /// Arbitrary precision integers.
    Integer,
    /// Arbitrary precision decimals.
    Decimal,
    /// Single characters.
    Character,
    /// Strings.
    String,
    /// Any of `Integer`, `Decimal`, `Character` or `String`.
    Comparable,
    /// Every type.
    Any,
    /// A sequence of integers, iterated by `FOR`.
    IntegerIterable,
    /// A host-declared object type.
    Object(Rc<ObjectType>),
}

impl Type {
    /// Resolves the name of one of the built-in types.
    ///
    /// Object types are resolved through the registry instead.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::environment::types::Type;
    ///
    /// assert_eq!(Type::from_builtin_name("Comparable"), Some(Type::Comparable));
    /// assert_eq!(Type::from_builtin_name("Point"), None);
    /// ```
    #[must_use]
    pub fn from_builtin_name(name: &str) -> Option<Self> {
        Some(match name {
                 "Nil" => Self::Nil,
                 "Boolean" => Self::Boolean,
                 "Integer" => Self::Integer,
                 "Decimal" => Self::Decimal,
                 "Character" => Self::Character,
                 "String" => Self::String,
                 "Comparable" => Self::Comparable,
                 "Any" => Self::Any,
                 "IntegerIterable" => Self::IntegerIterable,
                 _ => return None,
             })
    }

    /// The name the type is written as in source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Nil => "Nil",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Character => "Character",
            Self::String => "String",
            Self::Comparable => "Comparable",
            Self::Any => "Any",
            Self::IntegerIterable => "IntegerIterable",
            Self::Object(object_type) => object_type.name(),
        }
    }

    /// Returns `true` for the types `Comparable` stands for.
    #[must_use]
    pub const fn is_comparable(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal | Self::Character | Self::String)
    }

    /// Returns `true` for `Comparable` and `Any`, which describe what a value
    /// can do rather than what it is.
    ///
    /// Only parameters may be declared with these types.
    #[must_use]
    pub const fn is_capability(&self) -> bool {
        matches!(self, Self::Comparable | Self::Any)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The static description of a callable: its name, parameter types and
/// return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The function name.
    pub name:            String,
    /// The declared parameter types, in order.
    pub parameter_types: Vec<Type>,
    /// The declared return type.
    pub return_type:     Type,
}

impl Signature {
    /// Creates a signature.
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_types: Vec<Type>, return_type: Type) -> Self {
        Self { name: name.into(),
               parameter_types,
               return_type }
    }

    /// The number of parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

/// A function implemented by the host, together with its signature.
#[derive(Clone)]
pub struct NativeFunction {
    /// Name, parameter types and return type.
    pub signature: Signature,
    /// The implementation.
    pub body:      NativeBody,
}

impl NativeFunction {
    /// Creates a native function.
    pub fn new(signature: Signature,
               body: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
               -> Self {
        Self { signature,
               body: Rc::new(body) }
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
         .field("signature", &self.signature)
         .finish_non_exhaustive()
    }
}

/// A nominal aggregate type declared by the host.
///
/// An object type has named, typed fields and native methods. Methods
/// receive the object itself as their first argument; their signature lists
/// only the explicit parameters. Two object types are the same type exactly
/// when their names are equal.
#[derive(Debug, Clone)]
pub struct ObjectType {
    name:    String,
    fields:  Vec<(String, Type)>,
    methods: HashMap<(String, usize), NativeFunction>,
}

impl ObjectType {
    /// Creates an object type without fields or methods.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:    name.into(),
               fields:  Vec::new(),
               methods: HashMap::new(), }
    }

    /// Adds a field, replacing an earlier field with the same name.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field_type: Type) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = field_type;
        } else {
            self.fields.push((name, field_type));
        }
        self
    }

    /// Adds a method, replacing an earlier method with the same name and
    /// arity.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     environment::types::{ObjectType, Type},
    ///     value::core::Value,
    /// };
    ///
    /// let counter = ObjectType::new("Counter").with_field("count", Type::Integer)
    ///                                         .with_method("reset", vec![], Type::Nil, |args| {
    ///                                             args[0].as_object()?.set_field("count", 0.into())?;
    ///                                             Ok(Value::Nil)
    ///                                         });
    ///
    /// assert!(counter.method("reset", 0).is_some());
    /// assert!(counter.method("reset", 1).is_none());
    /// ```
    #[must_use]
    pub fn with_method(mut self,
                       name: impl Into<String>,
                       parameter_types: Vec<Type>,
                       return_type: Type,
                       body: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
                       -> Self {
        let signature = Signature::new(name, parameter_types, return_type);
        let key = (signature.name.clone(), signature.arity());
        self.methods.insert(key, NativeFunction::new(signature, body));
        self
    }

    /// The type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.fields.iter().map(|(name, field_type)| (name.as_str(), field_type))
    }

    /// Looks up the type of a field.
    #[must_use]
    pub fn field_type(&self, name: &str) -> Option<&Type> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, field_type)| field_type)
    }

    /// Looks up a method by name and number of explicit arguments.
    #[must_use]
    pub fn method(&self, name: &str, arity: usize) -> Option<&NativeFunction> {
        self.methods.get(&(name.to_string(), arity))
    }

    /// Invokes a method on `receiver`.
    ///
    /// # Errors
    /// `UnknownMethod` if no method matches, otherwise whatever the method
    /// body returns.
    pub fn call_method(&self,
                       receiver: Value,
                       name: &str,
                       arguments: Vec<Value>)
                       -> EvalResult<Value> {
        let method =
            self.method(name, arguments.len())
                .ok_or_else(|| RuntimeError::UnknownMethod { owner: self.name.clone(),
                                                             name:  name.to_string(),
                                                             arity: arguments.len(), })?;

        let mut values = Vec::with_capacity(arguments.len() + 1);
        values.push(receiver);
        values.extend(arguments);
        (method.body)(&values)
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ObjectType {}
