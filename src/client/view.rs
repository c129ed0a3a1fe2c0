//! Plain-text rendering of a [`Session`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt::Write;

use super::form::BirthField;
use super::session::{Flow, Session};

pub const HOROSCOPE_LOADING: &str = "Consulting the stars...";
pub const ASK_LOADING: &str = "Your AI astrologer is analyzing the cosmic energies...";

#[must_use]
pub fn horoscope_button_label(busy: bool) -> &'static str {
    if busy { "Generating Horoscope..." } else { "Generate Horoscope" }
}

#[must_use]
pub fn ask_button_label(busy: bool) -> &'static str {
    if busy { "Consulting AI..." } else { "Ask AI Astrologer" }
}

/// Render the whole page, top to bottom.
#[must_use]
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    let horoscope_busy = session.is_busy(Flow::Horoscope);
    let ask_busy = session.is_busy(Flow::Ask);

    // `fmt::Write` for `String` never fails.
    let _ = writeln!(out, "== Enter Your Birth Details ==");
    for field in BirthField::ALL {
        let _ = writeln!(out, "{}: {}", field.label(), session.form.get(field));
    }
    let _ = writeln!(out, "[{}]", horoscope_button_label(horoscope_busy));

    if let Some(error) = session.error() {
        let _ = writeln!(out, "\nError: {}", error.message);
    }

    if horoscope_busy {
        let _ = writeln!(out, "\n{HOROSCOPE_LOADING}");
    }

    let Some(horoscope) = session.horoscope() else {
        return out;
    };

    if !horoscope_busy {
        let _ = writeln!(out, "\n== Your Astrological Profile ==");
        let _ = writeln!(out, "{}", horoscope.zodiac_sign);
        let _ = writeln!(out, "Element: {}", horoscope.element);
        let _ = writeln!(out, "Your Personality Traits: {}", horoscope.personality_traits.join(", "));
        let _ = writeln!(out, "Your Yearly Forecast: {}", horoscope.predictions);
    }

    let _ = writeln!(out, "\n== Ask Your Personal AI Astrologer ==");
    let _ = writeln!(out, "Question: {}", session.question());
    let _ = writeln!(out, "[{}]", ask_button_label(ask_busy));
    if ask_busy {
        let _ = writeln!(out, "{ASK_LOADING}");
    } else if let Some(answer) = session.answer() {
        let _ = writeln!(out, "\n== AI Astrological Insight ==");
        let _ = writeln!(out, "{}", answer.answer);
    }

    out
}
