/// Build a writable keypath from `Type.field` segments.
///
/// Expands to `Root::field()` for a single segment, and to
/// `Root::field().then(Type2::field2())...` for nested paths; nested
/// segments name the type before each field so the macro can pick the right
/// generated accessor. Use with types that carry keypath accessors, e.g.
/// via `#[derive(Paths)]` from tidy-derive.
///
/// # Examples
///
/// ```ignore
/// // Single field
/// path!(Button.label)
///
/// // Nested path (type before each field)
/// path!(Button.style.Style.corner_radius)
///
/// // Feeding a chain
/// button.tidy().set(path!(Button.label), "Save".to_string());
/// ```
#[macro_export]
macro_rules! path {
    ( $root:ident . $field:ident ) => {
        $root::$field()
    };
    ( $root:ident . $field:ident $( . $ty:ident . $nested:ident )+ ) => {
        $root::$field() $( .then($ty::$nested()) )+
    };
}
