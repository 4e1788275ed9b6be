use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::result::Error as DieselError;
use crate::{
    models::scan_models::{User, NewUser},
    schema::users,
    DbPool,
};

sql_function! {
    fn lower(x: Text) -> Text;
}

pub struct UserCore {
    pool: DbPool,
}

impl UserCore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_user(&self, new_user: NewUser) -> Result<User, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        diesel::insert_into(users::table)
            .values(&new_user)
            .execute(&mut conn)?;
        users::table
            .filter(users::email.eq(&new_user.email))
            .first::<User>(&mut conn)
    }

    pub fn find_by_email(&self, search_email: &str) -> Result<Option<User>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        let user = users::table
            .filter(lower(users::email).eq(lower(search_email)))
            .first::<User>(&mut conn)
            .optional()?;
        Ok(user)
    }

    pub fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        let user = users::table
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()?;
        Ok(user)
    }

    pub fn email_exists(&self, search_email: &str) -> Result<bool, DieselError> {
        Ok(self.find_by_email(search_email)?.is_some())
    }

    // The first account registered on an instance is the admin.
    pub fn is_admin(&self, user_id: i32) -> Result<bool, DieselError> {
        Ok(self.find_by_id(user_id)?.map(|u| u.id == 1).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    fn sample_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn create_and_find_by_email_is_case_insensitive() {
        let pool = test_pool();
        let core = UserCore::new(pool);
        let created = core.create_user(sample_user("Person@Example.com")).unwrap();
        assert_eq!(created.email, "Person@Example.com");

        let found = core.find_by_email("person@example.COM").unwrap();
        assert_eq!(found.map(|u| u.id), Some(created.id));
        assert!(core.email_exists("PERSON@example.com").unwrap());
        assert!(!core.email_exists("nobody@example.com").unwrap());
    }

    #[test]
    fn first_user_is_admin() {
        let pool = test_pool();
        let core = UserCore::new(pool);
        let first = core.create_user(sample_user("a@example.com")).unwrap();
        let second = core.create_user(sample_user("b@example.com")).unwrap();
        assert!(core.is_admin(first.id).unwrap());
        assert!(!core.is_admin(second.id).unwrap());
        assert!(!core.is_admin(999).unwrap());
    }
}
