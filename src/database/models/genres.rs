use serde::{Deserialize, Serialize};

/// Ordered list of genre tags. Persisted as a JSON array in a TEXT column,
/// so list order survives a round-trip through the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreList(pub Vec<String>);

impl GenreList {
    pub fn new(genres: Vec<String>) -> Self {
        Self(genres)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for GenreList {
    fn from(genres: Vec<String>) -> Self {
        Self(genres)
    }
}

impl From<Vec<&str>> for GenreList {
    fn from(genres: Vec<&str>) -> Self {
        Self(genres.into_iter().map(String::from).collect())
    }
}

impl sqlx::Type<sqlx::Sqlite> for GenreList {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for GenreList {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let s = serde_json::to_string(&self.0)?;
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&s, args)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for GenreList {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        let genres: Vec<String> = serde_json::from_str(&s)?;
        Ok(GenreList(genres))
    }
}
