use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Fn-pointer alias for a non-capturing read-only field accessor.
///
/// Field closures like `|r: &User| &r.name` coerce to this, which keeps the
/// keypath type nameable in return position (derive-generated accessors use
/// it).
pub type FieldPath<Root, Value> = KeyPath<Root, Value, for<'r> fn(&'r Root) -> &'r Value>;

/// Fn-pointer alias for a non-capturing writable field accessor.
pub type FieldPathMut<Root, Value> =
    WritableKeyPath<Root, Value, for<'r> fn(&'r mut Root) -> &'r mut Value>;

/// Read-only keypath: how to reach a `Value` inside a `Root`.
#[derive(Clone)]
pub struct KeyPath<Root, Value, F>
where
    F: for<'r> Fn(&'r Root) -> &'r Value,
{
    getter: F,
    _phantom: PhantomData<(Root, Value)>,
}

impl<Root, Value, F> KeyPath<Root, Value, F>
where
    F: for<'r> Fn(&'r Root) -> &'r Value,
{
    pub fn new(getter: F) -> Self {
        Self {
            getter,
            _phantom: PhantomData,
        }
    }

    pub fn get<'r>(&self, root: &'r Root) -> &'r Value {
        (self.getter)(root)
    }

    /// Compose with a keypath rooted at `Value`, yielding `Root -> Sub`.
    pub fn then<Sub, G>(
        self,
        next: KeyPath<Value, Sub, G>,
    ) -> KeyPath<Root, Sub, impl for<'r> Fn(&'r Root) -> &'r Sub>
    where
        Value: 'static,
        G: for<'r> Fn(&'r Value) -> &'r Sub,
    {
        let first = self.getter;
        let second = next.getter;

        KeyPath::new(move |root: &Root| second(first(root)))
    }

    // Box<T> -> T (and any other Deref container)
    pub fn for_box<Target>(
        self,
    ) -> KeyPath<Root, Target, impl for<'r> Fn(&'r Root) -> &'r Target>
    where
        Value: 'static + Deref<Target = Target>,
    {
        let getter = self.getter;

        KeyPath::new(move |root: &Root| getter(root).deref())
    }
}

/// Writable keypath: how to reach a `Value` inside a `Root` for mutation.
///
/// This is the path kind every chain operation writes through; a path whose
/// value is an `Option<T>` slot doubles as an optional property path.
#[derive(Clone)]
pub struct WritableKeyPath<Root, Value, F>
where
    F: for<'r> Fn(&'r mut Root) -> &'r mut Value,
{
    getter: F,
    _phantom: PhantomData<(Root, Value)>,
}

impl<Root, Value, F> WritableKeyPath<Root, Value, F>
where
    F: for<'r> Fn(&'r mut Root) -> &'r mut Value,
{
    pub fn new(getter: F) -> Self {
        Self {
            getter,
            _phantom: PhantomData,
        }
    }

    pub fn get_mut<'r>(&self, root: &'r mut Root) -> &'r mut Value {
        (self.getter)(root)
    }

    /// Replace the value at the path.
    pub fn set(&self, root: &mut Root, value: Value) {
        *(self.getter)(root) = value;
    }

    /// Compose with a writable keypath rooted at `Value`, yielding
    /// `Root -> Sub`. Writes through the composition land on the original
    /// root.
    pub fn then<Sub, G>(
        self,
        next: WritableKeyPath<Value, Sub, G>,
    ) -> WritableKeyPath<Root, Sub, impl for<'r> Fn(&'r mut Root) -> &'r mut Sub>
    where
        Value: 'static,
        G: for<'r> Fn(&'r mut Value) -> &'r mut Sub,
    {
        let first = self.getter;
        let second = next.getter;

        WritableKeyPath::new(move |root: &mut Root| second(first(root)))
    }

    // Box<T> -> T (and any other DerefMut container with exclusive access)
    pub fn for_box<Target>(
        self,
    ) -> WritableKeyPath<Root, Target, impl for<'r> Fn(&'r mut Root) -> &'r mut Target>
    where
        Value: 'static + DerefMut<Target = Target>,
    {
        let getter = self.getter;

        WritableKeyPath::new(move |root: &mut Root| getter(root).deref_mut())
    }
}
