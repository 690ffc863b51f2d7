//! JSON column payloads stored inside history snapshots.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A faction state with its optional trend, as recorded in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTrend {
    pub state: String,
    pub trend: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StateList(pub Vec<StateTrend>);

/// A faction named by a system snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionName {
    pub name: String,
    pub name_lower: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct FactionNameList(pub Vec<FactionName>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct NameList(pub Vec<String>);
