use std::panic::Location;

use crate::diag::SkippedWrite;
use crate::paths::WritableKeyPath;

/// Top-level chaining facade over a `&mut` target.
///
/// Every operation consumes the builder and returns a fresh one wrapping the
/// same target, so a chain is a single moved value with no aliasing of the
/// builder itself. The location captured at chain entry is threaded through
/// sub-builders unchanged; skipped optional writes are attributed to it.
pub struct Tidy<'t, Root> {
    root: &'t mut Root,
    location: &'static Location<'static>,
}

impl<'t, Root> Tidy<'t, Root> {
    #[track_caller]
    pub fn new(root: &'t mut Root) -> Self {
        Self {
            root,
            location: Location::caller(),
        }
    }

    pub(crate) fn with_location(root: &'t mut Root, location: &'static Location<'static>) -> Self {
        Self { root, location }
    }

    /// Write `value` through a direct property path. Cannot fail.
    pub fn set<Value, F>(self, path: WritableKeyPath<Root, Value, F>, value: Value) -> Self
    where
        F: for<'r> Fn(&'r mut Root) -> &'r mut Value,
    {
        path.set(self.root, value);
        self
    }

    /// Scope the chain to a non-optional property, ahead of a nested write.
    /// No side effect by itself.
    pub fn at<Value, F>(self, path: WritableKeyPath<Root, Value, F>) -> Prop<'t, Root, Value, F>
    where
        F: for<'r> Fn(&'r mut Root) -> &'r mut Value,
    {
        Prop {
            root: self.root,
            path,
            location: self.location,
        }
    }

    /// Scope the chain to an optional property (a path to an `Option` slot),
    /// ahead of a nested write. No side effect by itself.
    pub fn at_some<Value, F>(
        self,
        path: WritableKeyPath<Root, Option<Value>, F>,
    ) -> OptProp<'t, Root, Value, F>
    where
        F: for<'r> Fn(&'r mut Root) -> &'r mut Option<Value>,
    {
        OptProp {
            root: self.root,
            path,
            location: self.location,
        }
    }

    /// Run an arbitrary mutation on the target, then continue chaining.
    pub fn mutate<A>(self, action: A) -> Self
    where
        A: FnOnce(&mut Root),
    {
        action(&mut *self.root);
        self
    }

    /// Apply a block of configuration and hand back the configured target.
    ///
    /// The only chain terminator: the block receives a fresh builder (with a
    /// freshly captured location) and the underlying `&mut` is returned,
    /// identity intact.
    #[track_caller]
    pub fn configure<B>(self, block: B) -> &'t mut Root
    where
        B: FnOnce(Tidy<'t, Root>) -> Tidy<'t, Root>,
    {
        block(Tidy::with_location(self.root, Location::caller())).finalize()
    }

    fn finalize(self) -> &'t mut Root {
        self.root
    }
}

/// A located, not-yet-written non-optional property.
pub struct Prop<'t, Root, Value, F>
where
    F: for<'r> Fn(&'r mut Root) -> &'r mut Value,
{
    root: &'t mut Root,
    path: WritableKeyPath<Root, Value, F>,
    location: &'static Location<'static>,
}

impl<'t, Root, Value, F> Prop<'t, Root, Value, F>
where
    F: for<'r> Fn(&'r mut Root) -> &'r mut Value,
{
    /// Write `value` through the composed `Root -> Value -> Sub` path and
    /// resume top-level chaining. Cannot fail.
    pub fn set<Sub, G>(self, nested: WritableKeyPath<Value, Sub, G>, value: Sub) -> Tidy<'t, Root>
    where
        Value: 'static,
        G: for<'r> Fn(&'r mut Value) -> &'r mut Sub,
    {
        self.path.then(nested).set(self.root, value);
        Tidy::with_location(self.root, self.location)
    }
}

/// A located, not-yet-written optional property, with enough context to
/// report a skipped write.
pub struct OptProp<'t, Root, Value, F>
where
    F: for<'r> Fn(&'r mut Root) -> &'r mut Option<Value>,
{
    root: &'t mut Root,
    path: WritableKeyPath<Root, Option<Value>, F>,
    location: &'static Location<'static>,
}

impl<'t, Root, Value, F> OptProp<'t, Root, Value, F>
where
    F: for<'r> Fn(&'r mut Root) -> &'r mut Option<Value>,
{
    /// Write `value` at the nested path inside the optional, if it is
    /// currently present.
    ///
    /// When the slot is `None` the write is dropped: the target is left
    /// untouched and a [`SkippedWrite`] is logged, attributed to where the
    /// chain began. The chain itself continues either way.
    pub fn set<Sub, G>(self, nested: WritableKeyPath<Value, Sub, G>, value: Sub) -> Tidy<'t, Root>
    where
        G: for<'r> Fn(&'r mut Value) -> &'r mut Sub,
    {
        match self.path.get_mut(self.root).as_mut() {
            Some(current) => nested.set(current, value),
            None => SkippedWrite::of::<Root, Value, Sub>(self.location).emit(),
        }
        Tidy::with_location(self.root, self.location)
    }
}
