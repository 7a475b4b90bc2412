use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub uid: i32,
    pub name: String,
    pub gender: String,
    pub skin_color: String,
    pub hair_color: String,
    pub height: i32,
    pub eye_color: String,
    pub mass: i32,
    pub homeworld: Option<i32>,
    pub birth_year: String,
    pub url: String,
}

/// Body of `POST /people`.
///
/// `homeworld` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`); the key is required but its value may be null.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateCharacterDto {
    pub uid: Option<i32>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub eye_color: Option<String>,
    pub mass: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub homeworld: Option<Option<i32>>,
    pub birth_year: Option<String>,
    pub url: Option<String>,
}

/// Body of `PUT /people/{id}`; an explicit `"homeworld": null` clears the homeworld.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateCharacterDto {
    pub uid: Option<i32>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub eye_color: Option<String>,
    pub mass: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>, nullable)]
    pub homeworld: Option<Option<i32>>,
    pub birth_year: Option<String>,
    pub url: Option<String>,
}

/// Wraps whatever value is present so `null` becomes `Some(None)`.
///
/// Paired with `#[serde(default)]`, which yields `None` when the key is missing.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
