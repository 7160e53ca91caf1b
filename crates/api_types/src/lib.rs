//! Wire types of the remote expense API.
//!
//! The remote store does not enforce a schema, so every field a client reads
//! is optional or lenient. Writers always send the full shape.

use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub mod user {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: String,
        pub username: String,
        #[serde(default)]
        pub password: String,
    }

    /// Query string of `GET /users`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserQuery {
        pub username: String,
    }
}

pub mod expense {
    use super::*;

    /// Amount as found on the wire: either a JSON number or a string.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum RawAmount {
        Number(f64),
        Text(String),
    }

    impl From<f64> for RawAmount {
        fn from(value: f64) -> Self {
            Self::Number(value)
        }
    }

    /// A record as stored remotely.
    ///
    /// Fields of an unexpected JSON type read as absent instead of failing
    /// the record; a numeric `id` is kept as its decimal text.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Expense {
        #[serde(default, deserialize_with = "lenient::id")]
        pub id: String,
        #[serde(default, deserialize_with = "lenient::field")]
        pub description: Option<String>,
        #[serde(default, deserialize_with = "lenient::field")]
        pub amount: Option<RawAmount>,
        /// Blank or missing means "no category".
        #[serde(default, deserialize_with = "lenient::field")]
        pub category: Option<String>,
        /// RFC 3339 timestamp.
        #[serde(default, deserialize_with = "lenient::field")]
        pub created_at: Option<String>,
    }

    mod lenient {
        use serde::{Deserialize, Deserializer, de::IgnoredAny};

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Loose<T> {
            Known(T),
            Other(IgnoredAny),
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
            Float(f64),
        }

        pub(super) fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de>,
        {
            Ok(match Option::<Loose<T>>::deserialize(deserializer)? {
                Some(Loose::Known(value)) => Some(value),
                Some(Loose::Other(_)) | None => None,
            })
        }

        pub(super) fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
        where
            D: Deserializer<'de>,
        {
            Ok(match field::<D, RawId>(deserializer)? {
                Some(RawId::Text(id)) => id,
                Some(RawId::Unsigned(id)) => id.to_string(),
                Some(RawId::Signed(id)) => id.to_string(),
                Some(RawId::Float(id)) => id.to_string(),
                None => String::new(),
            })
        }
    }

    /// Request body of `POST /expenses`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub description: String,
        pub amount: f64,
        /// Empty string when the user gave no category.
        pub category: String,
        pub created_at: String,
    }
}
