use sea_orm::{
    sea_query::{DynIden, Expr, Func, IntoIden, LikeExpr},
    Condition, ExprTrait,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::query::QueryError,
    query::{
        filter::{Filter, FilterField, Target},
        params::{self, escape_like},
    },
};

/// Filterable user fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Id,
}

impl FilterField for UserField {
    fn table() -> DynIden {
        entity::bgs_user::Entity.into_iden()
    }

    fn primary_key() -> DynIden {
        entity::bgs_user::Column::Id.into_iden()
    }

    fn target(self) -> Target {
        match self {
            Self::Id => Target::Column(entity::bgs_user::Column::Id.into_iden()),
        }
    }
}

/// Query parameters accepted by the user listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Database ids, comma separated
    pub id: Option<String>,
    /// Case-insensitive username prefix, or Discord id prefix
    pub begins_with: Option<String>,
    pub page: Option<String>,
}

impl UserQuery {
    pub fn filter(&self) -> Result<Filter<UserField>, QueryError> {
        let mut filter = Filter::new();

        filter.any_of(UserField::Id, params::number_list::<i32>("id", self.id.as_deref())?);

        Ok(filter)
    }

    /// The id filter plus the username or Discord id prefix match.
    pub fn condition(&self) -> Result<Condition, QueryError> {
        let mut condition = self.filter()?.condition();

        if let Some(prefix) = params::lower(self.begins_with.as_deref()) {
            let pattern = || LikeExpr::new(format!("{}%", escape_like(&prefix))).escape('\\');
            let username = Func::lower(Expr::col((
                entity::bgs_user::Entity,
                entity::bgs_user::Column::Username,
            )));
            let discord_id = Expr::col((
                entity::bgs_user::Entity,
                entity::bgs_user::Column::DiscordId,
            ));

            condition = condition.add(
                Condition::any()
                    .add(Expr::expr(username).like(pattern()))
                    .add(discord_id.like(pattern())),
            );
        }

        Ok(condition)
    }

    pub fn page(&self) -> u64 {
        params::page(self.page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    /// Expect a prefix to match either the lowercased username or the Discord id
    #[test]
    fn begins_with_matches_username_or_discord_id() {
        let query = UserQuery {
            begins_with: Some("Cmdr".to_string()),
            ..Default::default()
        };

        let sql = entity::prelude::BgsUser::find()
            .filter(query.condition().unwrap())
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains("LOWER"), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
    }

    /// Expect invalid ids to be a usage error
    #[test]
    fn invalid_id_is_rejected() {
        let query = UserQuery {
            id: Some("abc".to_string()),
            ..Default::default()
        };

        assert!(query.condition().is_err());
    }
}
