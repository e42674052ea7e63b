use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// One level of lexical scope.
///
/// A scope maps names to variables and `(name, arity)` pairs to functions,
/// and links to the scope it is nested in. Lookups walk outwards through the
/// parents; definitions always go into the scope they are made on, which is
/// how inner declarations shadow outer ones.
///
/// The payloads are generic so that analysis (which stores types and
/// signatures) and interpretation (which stores value cells and callables)
/// share one implementation. Scopes are reference counted: a scope lives as
/// long as the block that created it, or longer if a closure keeps it.
pub struct Scope<V, F> {
    parent:    Option<Rc<Self>>,
    variables: RefCell<HashMap<String, V>>,
    functions: RefCell<HashMap<(String, usize), F>>,
}

impl<V: Clone, F: Clone> Scope<V, F> {
    /// Creates a scope nested in `parent`, or a root scope.
    ///
    /// # Example
    /// ```
    /// use ember::interpreter::environment::scope::Scope;
    ///
    /// let outer = Scope::<i32, ()>::new(None);
    /// outer.define_variable("x", 1);
    ///
    /// let inner = Scope::new(Some(outer.clone()));
    /// inner.define_variable("x", 2);
    ///
    /// assert_eq!(inner.lookup_variable("x"), Some(2));
    /// assert_eq!(outer.lookup_variable("x"), Some(1));
    /// ```
    #[must_use]
    pub fn new(parent: Option<Rc<Self>>) -> Rc<Self> {
        Rc::new(Self { parent,
                       variables: RefCell::new(HashMap::new()),
                       functions: RefCell::new(HashMap::new()) })
    }

    /// Defines (or redefines) a variable in this scope.
    pub fn define_variable(&self, name: impl Into<String>, variable: V) {
        self.variables.borrow_mut().insert(name.into(), variable);
    }

    /// Returns `true` if this scope itself, ignoring its parents, defines
    /// `name`.
    #[must_use]
    pub fn has_local_variable(&self, name: &str) -> bool {
        self.variables.borrow().contains_key(name)
    }

    /// Finds the innermost variable called `name`.
    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<V> {
        if let Some(variable) = self.variables.borrow().get(name) {
            return Some(variable.clone());
        }
        self.parent.as_ref()?.lookup_variable(name)
    }

    /// Defines (or redefines) a function in this scope.
    pub fn define_function(&self, name: impl Into<String>, arity: usize, function: F) {
        self.functions.borrow_mut().insert((name.into(), arity), function);
    }

    /// Returns `true` if this scope itself defines a function with this name
    /// and arity.
    #[must_use]
    pub fn has_local_function(&self, name: &str, arity: usize) -> bool {
        self.functions.borrow().contains_key(&(name.to_string(), arity))
    }

    /// Finds the innermost function with this name and arity.
    ///
    /// Functions with the same name but a different arity are unrelated.
    #[must_use]
    pub fn lookup_function(&self, name: &str, arity: usize) -> Option<F> {
        if let Some(function) = self.functions.borrow().get(&(name.to_string(), arity)) {
            return Some(function.clone());
        }
        self.parent.as_ref()?.lookup_function(name, arity)
    }
}
