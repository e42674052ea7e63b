use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::types::ObjectType, evaluator::core::EvalResult, value::core::Value,
    },
};

/// An instance of a host-declared [`ObjectType`].
///
/// Every field declared by the type exists on the instance from the start,
/// initialized to `NIL`. Fields are mutable through a shared reference, so
/// assignments through one handle are visible through every other.
#[derive(Debug, PartialEq)]
pub struct Object {
    object_type: Rc<ObjectType>,
    fields:      RefCell<BTreeMap<String, Value>>,
}

impl Object {
    /// Creates an instance of `object_type` with every field set to `NIL`.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::{
    ///     environment::types::{ObjectType, Type},
    ///     value::{core::Value, object::Object},
    /// };
    ///
    /// let point = ObjectType::new("Point").with_field("x", Type::Integer);
    /// let object = Object::new(point.into());
    ///
    /// object.set_field("x", 4.into()).unwrap();
    /// assert_eq!(object.field("x"), Ok(Value::from(4)));
    /// assert_eq!(object.to_string(), "Point { x: 4 }");
    /// ```
    #[must_use]
    pub fn new(object_type: Rc<ObjectType>) -> Self {
        let fields = object_type.fields()
                                .map(|(name, _)| (name.to_string(), Value::Nil))
                                .collect();
        Self { object_type,
               fields: RefCell::new(fields) }
    }

    /// The type this object is an instance of.
    #[must_use]
    pub const fn object_type(&self) -> &Rc<ObjectType> {
        &self.object_type
    }

    /// Reads a field.
    ///
    /// # Errors
    /// `UnknownField` if the type declares no such field.
    pub fn field(&self, name: &str) -> EvalResult<Value> {
        self.fields
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| self.unknown_field(name))
    }

    /// Overwrites a field.
    ///
    /// # Errors
    /// `UnknownField` if the type declares no such field.
    pub fn set_field(&self, name: &str, value: Value) -> EvalResult<()> {
        let mut fields = self.fields.borrow_mut();
        let slot = fields.get_mut(name).ok_or_else(|| self.unknown_field(name))?;
        *slot = value;
        Ok(())
    }

    fn unknown_field(&self, name: &str) -> RuntimeError {
        RuntimeError::UnknownField { owner: self.object_type.name().to_string(),
                                     name:  name.to_string(), }
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.fields.borrow();
        write!(f, "{} {{", self.object_type.name())?;
        for (i, (name, _)) in self.object_type.fields().enumerate() {
            let value = fields.get(name).unwrap_or(&Value::Nil);
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{separator}{name}: {value}")?;
        }
        if fields.is_empty() {
            write!(f, "}}")
        } else {
            write!(f, " }}")
        }
    }
}
