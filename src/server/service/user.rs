use std::{collections::HashMap, time::Duration};

use sea_orm::{
    ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::{
    model::{
        api::PageDto,
        user::{DonationDto, NamedDto, PatronageDto, UserDto, UserUpdateDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, query::QueryError, Error},
        model::{caller::Caller, db::UserModel},
        query::user::UserQuery,
        service::pagination::paginate,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    query_timeout: Duration,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    /// Lists one page of users; administrators only
    ///
    /// # Returns
    /// - `Ok(PageDto<UserDto>)` - The page with each user's donations and followed names
    /// - `Err(Error::AuthError)` - The caller is anonymous or not an administrator
    /// - `Err(Error::QueryError)` - Invalid parameters or time budget exceeded
    /// - `Err(Error::DbErr)` - Database error
    pub async fn list(
        &self,
        query: &UserQuery,
        caller: &Caller,
    ) -> Result<PageDto<UserDto>, Error> {
        let user = caller.user().ok_or(AuthError::UserNotInSession)?;
        if !caller.is_privileged() {
            return Err(AuthError::AccessDenied(user.id).into());
        }

        let select = entity::prelude::BgsUser::find()
            .filter(query.condition()?)
            .order_by_asc(entity::bgs_user::Column::Id);
        let page = paginate(self.db, select, query.page(), self.query_timeout).await?;

        let docs = user_views(self.db, &page.docs).await?;

        Ok(page.into_dto(docs))
    }

    /// Applies `update` to a user; administrators may update anyone, other users only themselves
    ///
    /// The user row and the followed faction and system lists are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::AuthError)` - Anonymous caller, another user's record, an access level change by a non-administrator, or unknown target user
    /// - `Err(Error::QueryError)` - A followed name whose lowercase form does not match
    /// - `Err(Error::DbErr)` - Database error
    pub async fn update(&self, update: UserUpdateDto, caller: &Caller) -> Result<UserDto, Error> {
        let caller_user = caller.user().ok_or(AuthError::UserNotInSession)?;
        let privileged = caller.is_privileged();

        if !privileged && caller_user.id != update.id {
            return Err(AuthError::AccessDenied(caller_user.id).into());
        }
        if !privileged && update.access != caller_user.access {
            return Err(AuthError::AccessDenied(caller_user.id).into());
        }

        let factions = validate_names("factions", update.factions.clone())?;
        let systems = validate_names("systems", update.systems.clone())?;

        let txn = self.db.begin().await?;
        let repository = UserRepository::new(&txn);

        let user = repository
            .update(update.id, changes(&update))
            .await?
            .ok_or(AuthError::UserNotFound(update.id))?;

        if let Some(factions) = factions {
            repository.replace_factions(user.id, factions).await?;
        }
        if let Some(systems) = systems {
            repository.replace_systems(user.id, systems).await?;
        }

        let view = user_views(&txn, std::slice::from_ref(&user)).await?;

        txn.commit().await?;

        view.into_iter()
            .next()
            .ok_or_else(|| Error::InternalError(format!("User {} vanished during update", user.id)))
    }
}

/// Checks every followed name; `None` means the list was not supplied.
///
/// A supplied `null` clears the list.
fn validate_names(
    field: &str,
    names: Option<Option<Vec<NamedDto>>>,
) -> Result<Option<Vec<(String, String)>>, QueryError> {
    let Some(names) = names else {
        return Ok(None);
    };

    names
        .unwrap_or_default()
        .into_iter()
        .map(|named| {
            if named.name_lower != named.name.to_lowercase() {
                return Err(QueryError::InvalidUserUpdate(format!(
                    "{field} entry {:?} has name_lower {:?}",
                    named.name, named.name_lower
                )));
            }

            Ok((named.name, named.name_lower))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Column changes for an update; absent optional fields are left untouched.
fn changes(update: &UserUpdateDto) -> entity::bgs_user::ActiveModel {
    let mut changes = entity::bgs_user::ActiveModel {
        username: ActiveValue::Set(update.username.clone()),
        discriminator: ActiveValue::Set(update.discriminator.clone()),
        access: ActiveValue::Set(update.access),
        ..Default::default()
    };

    if let Some(avatar) = &update.avatar {
        changes.avatar = ActiveValue::Set(avatar.clone());
    }
    if let Some(os_contribution) = update.os_contribution {
        changes.os_contribution = ActiveValue::Set(os_contribution.unwrap_or(0));
    }
    if let Some(patronage) = &update.patronage {
        let patronage = patronage.clone().unwrap_or_default();
        changes.patronage_level = ActiveValue::Set(patronage.level);
        changes.patronage_since = ActiveValue::Set(patronage.since);
    }

    changes
}

async fn user_views<C: ConnectionTrait>(
    db: &C,
    users: &[UserModel],
) -> Result<Vec<UserDto>, Error> {
    let repository = UserRepository::new(db);
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();

    let mut donations: HashMap<i32, Vec<DonationDto>> = HashMap::new();
    for donation in repository.donations(&ids).await? {
        donations.entry(donation.user_id).or_default().push(DonationDto {
            amount: donation.amount,
            date: donation.date,
        });
    }

    let mut factions: HashMap<i32, Vec<NamedDto>> = HashMap::new();
    for faction in repository.factions(&ids).await? {
        factions.entry(faction.user_id).or_default().push(NamedDto {
            name: faction.name,
            name_lower: faction.name_lower,
        });
    }

    let mut systems: HashMap<i32, Vec<NamedDto>> = HashMap::new();
    for system in repository.systems(&ids).await? {
        systems.entry(system.user_id).or_default().push(NamedDto {
            name: system.name,
            name_lower: system.name_lower,
        });
    }

    Ok(users
        .iter()
        .map(|user| UserDto {
            id: user.id,
            discord_id: user.discord_id.clone(),
            username: user.username.clone(),
            discriminator: user.discriminator.clone(),
            avatar: user.avatar.clone(),
            access: user.access,
            os_contribution: user.os_contribution,
            patronage: PatronageDto {
                level: user.patronage_level,
                since: user.patronage_since,
            },
            donations: donations.remove(&user.id).unwrap_or_default(),
            factions: factions.remove(&user.id).unwrap_or_default(),
            systems: systems.remove(&user.id).unwrap_or_default(),
            created_at: user.created_at,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, name_lower: &str) -> NamedDto {
        NamedDto {
            name: name.to_string(),
            name_lower: name_lower.to_string(),
        }
    }

    /// Expect mismatched lowercase names to be rejected
    #[test]
    fn validate_names_rejects_mismatch() {
        let result = validate_names("factions", Some(Some(vec![named("Mother Gaia", "gaia")])));

        assert!(matches!(result, Err(QueryError::InvalidUserUpdate(_))));
    }

    /// Expect null to clear and absence to leave the list alone
    #[test]
    fn validate_names_distinguishes_null_from_absent() {
        assert_eq!(validate_names("systems", None).unwrap(), None);
        assert_eq!(validate_names("systems", Some(None)).unwrap(), Some(Vec::new()));
    }

    /// Expect unset optional fields to reset to their empty values
    #[test]
    fn null_fields_reset() {
        let update = UserUpdateDto {
            id: 1,
            username: "cmdr".to_string(),
            discriminator: "0001".to_string(),
            access: 2,
            avatar: Some(None),
            os_contribution: Some(None),
            patronage: Some(None),
            factions: None,
            systems: None,
        };

        let changes = changes(&update);

        assert_eq!(changes.avatar, ActiveValue::Set(None));
        assert_eq!(changes.os_contribution, ActiveValue::Set(0));
        assert_eq!(changes.patronage_level, ActiveValue::Set(0));
        assert_eq!(changes.patronage_since, ActiveValue::Set(None));
    }

    mod database {
        use bgs_test_utils::prelude::*;
        use entity::bgs_user::{ACCESS_ADMIN, ACCESS_NORMAL};

        use super::*;

        fn update_for(user: &UserModel) -> UserUpdateDto {
            UserUpdateDto {
                id: user.id,
                username: user.username.clone(),
                discriminator: user.discriminator.clone(),
                access: user.access,
                avatar: None,
                os_contribution: None,
                patronage: None,
                factions: None,
                systems: None,
            }
        }

        /// Expect a non-administrator listing users to be denied
        #[tokio::test]
        async fn list_requires_admin() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let user = test.user().insert_user("1", "cmdr", ACCESS_NORMAL).await?;
            let service = UserService::new(&test.db, Duration::from_secs(60));

            let result = service
                .list(&UserQuery::default(), &Caller::User(user))
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::AccessDenied(_)))
            ));

            Ok(())
        }

        /// Expect administrators to see users with their donations
        #[tokio::test]
        async fn list_includes_donations() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let admin = test.user().insert_user("1", "admin", ACCESS_ADMIN).await?;
            let donor = test.user().insert_user("2", "donor", ACCESS_NORMAL).await?;
            test.user()
                .insert_donation(&donor, 5.0, factory::at(factory::FIXED_MILLIS))
                .await?;
            let service = UserService::new(&test.db, Duration::from_secs(60));

            let page = service
                .list(&UserQuery::default(), &Caller::User(admin))
                .await
                .unwrap();

            assert_eq!(page.total, 2);
            assert_eq!(page.docs[1].donations.len(), 1);
            assert!(page.docs[0].donations.is_empty());

            Ok(())
        }

        /// Expect users to update their own followed factions
        #[tokio::test]
        async fn update_replaces_followed_factions() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let user = test.user().insert_user("1", "cmdr", ACCESS_NORMAL).await?;
            test.user().insert_faction_interest(&user, "Old Faction").await?;
            let service = UserService::new(&test.db, Duration::from_secs(60));

            let mut update = update_for(&user);
            update.factions = Some(Some(vec![named("Mother Gaia", "mother gaia")]));

            let updated = service
                .update(update, &Caller::User(user))
                .await
                .unwrap();

            assert_eq!(updated.factions, vec![named("Mother Gaia", "mother gaia")]);

            Ok(())
        }

        /// Expect a non-administrator changing their own access level to be denied
        #[tokio::test]
        async fn update_rejects_access_escalation() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let user = test.user().insert_user("1", "cmdr", ACCESS_NORMAL).await?;
            let service = UserService::new(&test.db, Duration::from_secs(60));

            let mut update = update_for(&user);
            update.access = ACCESS_ADMIN;

            let result = service.update(update, &Caller::User(user)).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::AccessDenied(_)))
            ));

            Ok(())
        }

        /// Expect administrators updating an unknown user to get a not found error
        #[tokio::test]
        async fn update_unknown_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let admin = test.user().insert_user("1", "admin", ACCESS_ADMIN).await?;
            let service = UserService::new(&test.db, Duration::from_secs(60));

            let mut update = update_for(&admin);
            update.id = 42;

            let result = service.update(update, &Caller::User(admin)).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::UserNotFound(42)))
            ));

            Ok(())
        }
    }
}
