//! Integers that clients send either as JSON numbers or numeric strings
//! (`"age": 40` and `"age": "40"` both parse).

use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString<T> {
    Int(T),
    Str(String),
}

impl<T: FromStr> IntOrString<T> {
    fn into_int<E: de::Error>(self) -> Result<T, E> {
        match self {
            Self::Int(v) => Ok(v),
            Self::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer: {s:?}"))),
        }
    }
}

pub fn int<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    IntOrString::<T>::deserialize(d)?.into_int()
}

pub fn opt_int<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Option::<IntOrString<T>>::deserialize(d)?
        .map(IntOrString::into_int)
        .transpose()
}
