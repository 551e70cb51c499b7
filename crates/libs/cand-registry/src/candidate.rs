//! Candidate model.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};

const NAME_KEY: &str = "name";
const IMAGE_URL_KEY: &str = "imageUrl";

/// A named entity tracked by the registry.
///
/// `name` is the identifying key. Decoding is lenient:
///
/// - keys match `name` and `imageUrl` ignoring ASCII case
/// - unknown keys are ignored
/// - a missing key, or a `null` value, leaves the field empty
///
/// A known key holding anything other than a string or `null` is still a
/// decode error, as is any input that is not an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

impl<'de> Deserialize<'de> for Candidate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CandidateVisitor)
    }
}

struct CandidateVisitor;

impl<'de> Visitor<'de> for CandidateVisitor {
    type Value = Candidate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a candidate object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Candidate, A::Error> {
        let mut candidate = Candidate::default();
        while let Some(key) = map.next_key::<String>()? {
            // A repeated key overwrites, a null value keeps what is there.
            let field = if key.eq_ignore_ascii_case(NAME_KEY) {
                &mut candidate.name
            } else if key.eq_ignore_ascii_case(IMAGE_URL_KEY) {
                &mut candidate.image_url
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }
        Ok(candidate)
    }
}
