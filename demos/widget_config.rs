//! Configure a small widget tree through chains, including a skipped write
//! through an absent optional. Run with `cargo run --example widget_config`.

use log::{LevelFilter, Metadata, Record};
use tidy::{Tidyable, path};
use tidy_derive::Paths;

#[derive(Debug, Default, Paths)]
struct Button {
    label: String,
    enabled: bool,
    style: Style,
    badge: Option<Badge>,
}

#[derive(Debug, Default, Paths)]
struct Style {
    corner_radius: u32,
    font_size: u32,
}

#[derive(Debug, Default, Paths)]
struct Badge {
    count: u32,
}

struct StdoutLog;

static LOGGER: StdoutLog = StdoutLog;

impl log::Log for StdoutLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", record.args());
    }

    fn flush(&self) {}
}

fn main() {
    log::set_logger(&LOGGER).expect("first logger");
    log::set_max_level(LevelFilter::Warn);

    let mut save = Button::default();
    let configured = save.tidy().configure(|b| {
        b.set(Button::label(), "Save".to_string())
            .set(Button::enabled(), true)
            .at(Button::style())
            .set(Style::corner_radius(), 8)
            .set(path!(Button.style.Style.font_size), 14)
            .mutate(|b| b.label.push('…'))
    });
    println!("configured: {configured:?}");

    // The badge is absent, so this write is dropped and reported.
    let mut cancel = Button::default();
    cancel
        .tidy()
        .set(Button::label(), "Cancel".to_string())
        .at_some(Button::badge())
        .set(Badge::count(), 3);
    println!("badge still {:?}", cancel.badge);

    // Present badge: the nested write lands.
    cancel.badge = Some(Badge::default());
    cancel
        .tidy()
        .at_some(Button::badge())
        .set(Badge::count(), 3);
    println!("badge now {:?}", cancel.badge);
}
