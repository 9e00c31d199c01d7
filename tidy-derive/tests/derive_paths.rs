//! Integration tests for `#[derive(Paths)]`: named, tuple, and generic
//! structs, read and write accessors, and composition with `then`.

use tidy::Tidyable;
use tidy_derive::Paths;

#[derive(Debug, Default, Paths)]
struct Button {
    label: String,
    enabled: bool,
    style: Style,
}

#[derive(Debug, Default, Paths)]
struct Style {
    corner_radius: u32,
}

#[derive(Debug, Paths)]
struct Pair(String, u32);

#[derive(Debug, Paths)]
struct Holder<T> {
    value: T,
}

#[test]
fn named_struct_accessors_read_and_write() {
    let mut button = Button::default();

    Button::label().set(&mut button, "Save".to_string());
    assert_eq!(Button::label_r().get(&button), "Save");

    *Button::enabled().get_mut(&mut button) = true;
    assert!(button.enabled);
}

#[test]
fn accessors_compose_with_then() {
    let mut button = Button::default();

    Button::style()
        .then(Style::corner_radius())
        .set(&mut button, 8);
    assert_eq!(button.style.corner_radius, 8);

    let radius = Button::style_r().then(Style::corner_radius_r());
    assert_eq!(*radius.get(&button), 8);
}

#[test]
fn tuple_struct_accessors_are_positional() {
    let mut pair = Pair("left".to_string(), 1);

    Pair::f0().set(&mut pair, "right".to_string());
    *Pair::f1().get_mut(&mut pair) += 1;

    assert_eq!(Pair::f0_r().get(&pair), "right");
    assert_eq!(*Pair::f1_r().get(&pair), 2);
}

#[test]
fn generic_struct_accessors_instantiate_per_type() {
    let mut holder = Holder { value: 41u32 };

    *Holder::<u32>::value().get_mut(&mut holder) += 1;
    assert_eq!(*Holder::<u32>::value_r().get(&holder), 42);
}

#[test]
fn derived_accessors_feed_a_chain() {
    let mut button = Button::default();

    button
        .tidy()
        .set(Button::label(), "Submit".to_string())
        .at(Button::style())
        .set(Style::corner_radius(), 12);

    assert_eq!(button.label, "Submit");
    assert_eq!(button.style.corner_radius, 12);
}
