use lostfound_result::Result;

use crate::MongoDb;
use crate::User;

use super::AbstractUsers;

static COL: &str = "users";

#[async_trait]
impl AbstractUsers for MongoDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        query!(self, insert_one, COL, user).map(|_| ())
    }

    /// Fetch a user by their id
    async fn fetch_user(&self, id: &str) -> Result<User> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("find_one", COL))?
            .ok_or_else(|| create_error!(UnknownUser))
    }

    /// Fetch a user by their session token
    async fn fetch_user_by_token(&self, token: &str) -> Result<User> {
        self.find_one(
            COL,
            doc! {
                "token": token
            },
        )
        .await
        .map_err(|_| create_database_error!("find_one", COL))?
        .ok_or_else(|| create_error!(NotAuthenticated))
    }
}
