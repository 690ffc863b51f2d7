use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub discord_id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    /// 0 grants administrative privileges
    pub access: i32,
    pub os_contribution: i32,
    pub patronage: PatronageDto,
    pub donations: Vec<DonationDto>,
    pub factions: Vec<NamedDto>,
    pub systems: Vec<NamedDto>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PatronageDto {
    pub level: i32,
    pub since: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DonationDto {
    pub amount: f64,
    pub date: NaiveDateTime,
}

/// A followed faction or system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NamedDto {
    pub name: String,
    pub name_lower: String,
}

/// Body of a user update.
///
/// Optional fields distinguish "absent" (leave unchanged) from `null` (unset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserUpdateDto {
    pub id: i32,
    pub username: String,
    pub discriminator: String,
    pub access: i32,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub avatar: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub os_contribution: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<PatronageDto>))]
    pub patronage: Option<Option<PatronageDto>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<NamedDto>>))]
    pub factions: Option<Option<Vec<NamedDto>>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<NamedDto>>))]
    pub systems: Option<Option<Vec<NamedDto>>>,
}

/// Maps a present field to `Some`, so `null` becomes `Some(None)` and absence stays `None`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
