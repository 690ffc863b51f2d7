use sea_orm::DatabaseConnection;

use crate::{
    model::community::{CreditDto, DonorDto, PatronDto},
    server::{data::user::UserRepository, error::Error},
};

pub struct CommunityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityService<'a> {
    /// Creates a new instance of [`CommunityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One entry per donation, newest first
    ///
    /// Donations whose user no longer exists are left out.
    pub async fn donors(&self) -> Result<Vec<DonorDto>, Error> {
        let donations = UserRepository::new(self.db).donors().await?;

        Ok(donations
            .into_iter()
            .filter_map(|(donation, user)| {
                user.map(|user| DonorDto {
                    username: user.username,
                    amount: donation.amount,
                    date: donation.date,
                })
            })
            .collect())
    }

    /// Users with a patronage level above zero, newest patrons first
    pub async fn patrons(&self) -> Result<Vec<PatronDto>, Error> {
        let patrons = UserRepository::new(self.db).patrons().await?;

        Ok(patrons
            .into_iter()
            .map(|user| PatronDto {
                username: user.username,
                level: user.patronage_level,
                since: user.patronage_since,
            })
            .collect())
    }

    pub async fn credits(&self) -> Result<Vec<CreditDto>, Error> {
        let credited = UserRepository::new(self.db).credited().await?;

        Ok(credited
            .into_iter()
            .map(|user| CreditDto {
                username: user.username,
                avatar: user.avatar,
                discord_id: user.discord_id,
                os_contribution: user.os_contribution,
                level: user.patronage_level,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use bgs_test_utils::prelude::*;
    use entity::bgs_user::ACCESS_NORMAL;
    use sea_orm::ActiveValue;

    use super::*;

    /// Expect each donation to be listed under its donor, newest first
    #[tokio::test]
    async fn donors_newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        let user = test.user().insert_user("1", "cmdr", ACCESS_NORMAL).await?;
        test.user()
            .insert_donation(&user, 5.0, factory::at(factory::FIXED_MILLIS))
            .await?;
        test.user()
            .insert_donation(&user, 10.0, factory::at(factory::FIXED_MILLIS + 1000))
            .await?;

        let donors = CommunityService::new(&test.db).donors().await.unwrap();

        assert_eq!(donors.len(), 2);
        assert_eq!(donors[0].amount, 10.0);
        assert_eq!(donors[0].username, "cmdr");

        Ok(())
    }

    /// Expect only contributors and patrons above the first tier to be credited
    #[tokio::test]
    async fn credits_filter_by_contribution() -> Result<(), TestError> {
        let test = TestBuilder::new().with_user_tables().build().await?;
        test.user().insert_user("1", "bystander", ACCESS_NORMAL).await?;

        let mut contributor = factory::user("2", "contributor", ACCESS_NORMAL);
        contributor.os_contribution = ActiveValue::Set(3);
        test.user().insert(contributor).await?;

        let mut first_tier = factory::user("3", "first tier", ACCESS_NORMAL);
        first_tier.patronage_level = ActiveValue::Set(1);
        test.user().insert(first_tier).await?;

        let service = CommunityService::new(&test.db);
        let credits = service.credits().await.unwrap();
        let patrons = service.patrons().await.unwrap();

        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].username, "contributor");
        assert_eq!(patrons.len(), 1);
        assert_eq!(patrons[0].username, "first tier");

        Ok(())
    }
}
