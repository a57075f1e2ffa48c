use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::TokenRef;

pub fn de_token_entries<'de, D>(deserializer: D) -> Result<IndexMap<String, TokenRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, String>::deserialize(deserializer)?;

    if raw.is_empty() {
        return Err(D::Error::custom("token registry can't be empty."));
    }

    raw.into_iter()
        .map(|(name, value)| {
            if name.trim().is_empty() {
                return Err(D::Error::custom("token names can't be blank."));
            }

            match TokenRef::parse(&value) {
                Some(token) => Ok((name, token)),
                None => Err(D::Error::custom(format!(
                    "token `{name}`: expected `var(--name)` or `--name`, found `{value}`"
                ))),
            }
        })
        .collect()
}

pub fn de_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(count) => Ok(count),

        StringOrInt::String(string) => match string.trim().parse::<usize>() {
            Ok(count) => Ok(count),
            Err(_) => Err(D::Error::custom("could not convert string into a count")),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    Int(usize),
    String(String),
}
