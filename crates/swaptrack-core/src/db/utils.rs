//! Row decoding helpers.

use std::{fmt::Display, str::FromStr};

use rusqlite::{types::Type, Row};

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, message.into())
}

/// Reads a text column and parses it with [`FromStr`].
pub(super) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(idx)?;
    text.parse::<T>()
        .map_err(|e| conversion_error(idx, format!("Invalid value '{text}': {e}")))
}

/// Reads a nullable text column and parses it when present.
pub(super) fn parse_optional_column<T>(row: &Row, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let text: Option<String> = row.get(idx)?;
    text.map(|text| {
        text.parse::<T>()
            .map_err(|e| conversion_error(idx, format!("Invalid value '{text}': {e}")))
    })
    .transpose()
}

/// Reads a text column holding JSON.
pub(super) fn json_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
