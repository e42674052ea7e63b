use std::{collections::BTreeMap, rc::Rc};

use crate::interpreter::{
    environment::types::{NativeFunction, ObjectType, Signature, Type},
    evaluator::{core::EvalResult, function::builtin},
    value::core::Value,
};

/// Defines the standard built-in functions by generating a constructor for
/// their table.
///
/// Each entry provides:
/// - a string name,
/// - the parameter types,
/// - the return type,
/// - a function implementing the built-in.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                parameters: [$($parameter:expr),* $(,)?],
                returns: $returns:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        fn builtin_table() -> Vec<NativeFunction> {
            vec![
                $(
                    NativeFunction::new(Signature::new($name, vec![$($parameter),*], $returns),
                                        $func),
                )*
            ]
        }
    };
}

builtin_functions! {
    "print"     => { parameters: [Type::Any], returns: Type::Nil, func: builtin::print },
    "logarithm" => { parameters: [Type::Decimal], returns: Type::Decimal, func: builtin::logarithm },
    "range"     => { parameters: [Type::Integer, Type::Integer],
                     returns: Type::IntegerIterable,
                     func: builtin::range },
}

/// The functions and object types a program can use without declaring them.
///
/// The same registry is handed to the analyzer, which checks calls against
/// the registered signatures, and to the interpreter, which invokes the
/// registered bodies. A host embeds its own functionality by defining
/// additional functions and types before running a program.
///
/// # Example
/// ```
/// use ember::interpreter::{
///     environment::{registry::Registry, types::Type},
///     value::core::Value,
/// };
///
/// let mut registry = Registry::standard();
/// registry.define_function("answer", vec![], Type::Integer, |_| Ok(Value::from(42)));
///
/// assert!(registry.function("answer", 0).is_some());
/// assert!(registry.function("print", 1).is_some());
/// assert!(registry.function("print", 2).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    functions: BTreeMap<(String, usize), NativeFunction>,
    types:     BTreeMap<String, Rc<ObjectType>>,
}

impl Registry {
    /// Creates a registry without any functions or types.
    #[must_use]
    pub const fn empty() -> Self {
        Self { functions: BTreeMap::new(),
               types:     BTreeMap::new(), }
    }

    /// Creates a registry holding the standard built-in functions: `print`,
    /// `logarithm` and `range`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for function in builtin_table() {
            registry.define_native(function);
        }
        registry
    }

    /// Defines a function, replacing any function with the same name and
    /// arity.
    pub fn define_function(&mut self,
                           name: impl Into<String>,
                           parameter_types: Vec<Type>,
                           return_type: Type,
                           body: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
                           -> &mut Self {
        let signature = Signature::new(name, parameter_types, return_type);
        self.define_native(NativeFunction::new(signature, body))
    }

    /// Defines an already constructed native function, replacing any
    /// function with the same name and arity.
    pub fn define_native(&mut self, function: NativeFunction) -> &mut Self {
        let key = (function.signature.name.clone(), function.signature.arity());
        self.functions.insert(key, function);
        self
    }

    /// Declares an object type and returns it as a [`Type`], ready to be used
    /// in signatures of further functions.
    ///
    /// A later type with the same name replaces the earlier one.
    pub fn define_type(&mut self, object_type: ObjectType) -> Type {
        let object_type = Rc::new(object_type);
        self.types
            .insert(object_type.name().to_string(), Rc::clone(&object_type));
        Type::Object(object_type)
    }

    /// Looks up a function by name and arity.
    #[must_use]
    pub fn function(&self, name: &str, arity: usize) -> Option<&NativeFunction> {
        self.functions.get(&(name.to_string(), arity))
    }

    /// All registered functions, ordered by name and arity.
    pub fn functions(&self) -> impl Iterator<Item = &NativeFunction> {
        self.functions.values()
    }

    /// Looks up an object type by name.
    #[must_use]
    pub fn object_type(&self, name: &str) -> Option<&Rc<ObjectType>> {
        self.types.get(name)
    }

    /// Resolves a type name written in source: a built-in type or a
    /// registered object type.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::environment::{
    ///     registry::Registry,
    ///     types::{ObjectType, Type},
    /// };
    ///
    /// let mut registry = Registry::standard();
    /// let point = registry.define_type(ObjectType::new("Point"));
    ///
    /// assert_eq!(registry.resolve_type("Point"), Some(point));
    /// assert_eq!(registry.resolve_type("Integer"), Some(Type::Integer));
    /// assert_eq!(registry.resolve_type("Float"), None);
    /// ```
    #[must_use]
    pub fn resolve_type(&self, name: &str) -> Option<Type> {
        Type::from_builtin_name(name).or_else(|| {
                                         self.object_type(name)
                                             .map(|object_type| Type::Object(Rc::clone(object_type)))
                                     })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
