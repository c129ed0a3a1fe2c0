//! Domain services behind the HTTP routes.
//!
//! DESIGN
//! ======
//! Each service takes already-extracted inputs and returns typed results
//! or a `thiserror` enum; mapping to HTTP status codes happens in
//! `routes`. Both services resolve the zodiac sign from the birth date
//! the same way, via [`resolve_sign`].

pub mod ask;
pub mod horoscope;

use time::Date;
use time::macros::format_description;

use crate::zodiac::ZodiacSign;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignError {
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,
    #[error("Could not determine zodiac sign")]
    UnknownSign,
}

/// Parse a `YYYY-MM-DD` birth date and resolve its sign.
///
/// Month and day may omit their leading zero (`1990-5-1`); surrounding
/// whitespace is rejected.
///
/// # Errors
///
/// Returns [`SignError::InvalidDate`] when the string is not a valid
/// calendar date, and [`SignError::UnknownSign`] when no range matches.
pub fn resolve_sign(date_of_birth: &str) -> Result<ZodiacSign, SignError> {
    let date = Date::parse(date_of_birth, format_description!("[year]-[month padding:none]-[day padding:none]"))
        .map_err(|_| SignError::InvalidDate)?;
    ZodiacSign::from_month_day(u8::from(date.month()), date.day()).ok_or(SignError::UnknownSign)
}
