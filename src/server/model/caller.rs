use entity::bgs_user::ACCESS_ADMIN;

use crate::server::model::db::UserModel;

/// Identity of the user making a request.
#[derive(Clone, Debug, PartialEq)]
pub enum Caller {
    Anonymous,
    User(UserModel),
}

impl Caller {
    /// Privileged callers may list entities without any filter.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::User(user) if user.access == ACCESS_ADMIN)
    }

    pub fn user(&self) -> Option<&UserModel> {
        match self {
            Self::User(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}
