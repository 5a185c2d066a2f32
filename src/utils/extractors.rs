use serde::{Deserialize, Deserializer, de};
use std::{fmt::Display, str::FromStr};

/// Query-string field where an empty value (an untouched form input) counts as absent.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Like `empty_string_as_none`, but a value that does not parse is also
/// treated as absent instead of rejecting the whole request.
pub fn unparsable_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match s.parse() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::debug!("Ignoring query value {:?}: {}", s, e);
                Ok(None)
            }
        },
    }
}
