// Relative time expressions ("۲ ساعت پیش", "فردا", ...) from elapsed seconds.
use super::ladder::{select_unit, Rung};
use chrono::{DateTime, Utc};
use shared::models::{Direction, TimeStyle};
use shared::utils::persian_format::{number_to_words, to_persian_digits};

/// Rendered for anything under ten seconds, in either direction.
pub const JUST_NOW: &str = "هم\u{200C}اکنون";
const JUST_NOW_THRESHOLD: u64 = 10;
const FEW_MOMENTS: &str = "چند لحظه";
const FEW: &str = "چند";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

pub const TIME_LADDER: [Rung<TimeUnit>; 7] = [
    Rung::new(TimeUnit::Second, 1),
    Rung::new(TimeUnit::Minute, 60),
    Rung::new(TimeUnit::Hour, 3_600),
    Rung::new(TimeUnit::Day, 86_400),
    Rung::new(TimeUnit::Week, 604_800),
    Rung::new(TimeUnit::Month, 2_592_000),
    Rung::new(TimeUnit::Year, 31_536_000),
];

impl TimeUnit {
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "ثانیه",
            TimeUnit::Minute => "دقیقه",
            TimeUnit::Hour => "ساعت",
            TimeUnit::Day => "روز",
            TimeUnit::Week => "هفته",
            TimeUnit::Month => "ماه",
            TimeUnit::Year => "سال",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Second => "ث",
            TimeUnit::Minute => "دق",
            TimeUnit::Hour => "س",
            TimeUnit::Day => "ر",
            TimeUnit::Week => "هف",
            TimeUnit::Month => "ما",
            TimeUnit::Year => "سال",
        }
    }

    // Days and weeks take "دیگر" in the future; every other unit takes "بعد".
    pub fn suffix(self, direction: Direction) -> &'static str {
        match (direction, self) {
            (Direction::Past, _) => "پیش",
            (Direction::Future, TimeUnit::Day | TimeUnit::Week) => "دیگر",
            (Direction::Future, _) => "بعد",
        }
    }

    /// Fixed expression for exactly one of this unit.
    pub fn idiom(self, direction: Direction) -> &'static str {
        match (self, direction) {
            (TimeUnit::Second, Direction::Past) => "یک ثانیه پیش",
            (TimeUnit::Second, Direction::Future) => "یک ثانیه بعد",
            (TimeUnit::Minute, Direction::Past) => "یک دقیقه پیش",
            (TimeUnit::Minute, Direction::Future) => "یک دقیقه بعد",
            (TimeUnit::Hour, Direction::Past) => "یک ساعت پیش",
            (TimeUnit::Hour, Direction::Future) => "یک ساعت بعد",
            (TimeUnit::Day, Direction::Past) => "دیروز",
            (TimeUnit::Day, Direction::Future) => "فردا",
            (TimeUnit::Week, Direction::Past) => "هفته گذشته",
            (TimeUnit::Week, Direction::Future) => "هفته آینده",
            (TimeUnit::Month, Direction::Past) => "ماه گذشته",
            (TimeUnit::Month, Direction::Future) => "ماه آینده",
            (TimeUnit::Year, Direction::Past) => "سال گذشته",
            (TimeUnit::Year, Direction::Future) => "سال آینده",
        }
    }
}

/// Whole units elapsed; the remainder is truncated.
pub fn scale_value(seconds: u64, rung: &Rung<TimeUnit>) -> u64 {
    seconds / rung.scale
}

pub fn format_elapsed(seconds: u64, direction: Direction, style: TimeStyle) -> String {
    if seconds < JUST_NOW_THRESHOLD {
        return JUST_NOW.to_string();
    }
    if seconds < TIME_LADDER[1].scale {
        return format!("{} {}", FEW_MOMENTS, TimeUnit::Second.suffix(direction));
    }

    match select_unit(seconds, &TIME_LADDER) {
        Some(rung) => render(scale_value(seconds, rung), rung.unit, direction, style),
        None => render(seconds, TimeUnit::Second, direction, style),
    }
}

pub fn render(value: u64, unit: TimeUnit, direction: Direction, style: TimeStyle) -> String {
    let suffix = unit.suffix(direction);
    match style {
        TimeStyle::Numeric => format!("{} {} {}", to_persian_digits(&value.to_string()), unit.name(), suffix),
        TimeStyle::Words => format!("{} {} {}", number_to_words(value), unit.name(), suffix),
        TimeStyle::Short => format!("{}{} {}", to_persian_digits(&value.to_string()), unit.abbreviation(), suffix),
        TimeStyle::Fuzzy => match value {
            1 => unit.idiom(direction).to_string(),
            2..=4 => format!("{} {} {}", FEW, unit.name(), suffix),
            _ => render(value, unit, direction, TimeStyle::Numeric),
        },
    }
}

/// Describes `then` relative to `now`; instants after `now` read as future.
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>, style: TimeStyle) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let direction = if delta >= 0 { Direction::Past } else { Direction::Future };
    format_elapsed(delta.unsigned_abs(), direction, style)
}

pub fn format_since(then: DateTime<Utc>, style: TimeStyle) -> String {
    format_relative(then, Utc::now(), style)
}
