use diesel::prelude::*;
use diesel::result::Error as DieselError;
use crate::{
    models::scan_models::{ContactMessage, NewContactMessage},
    schema::contact_messages,
    DbPool,
};

pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn insert_message(&self, new_message: NewContactMessage) -> Result<(), DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        diesel::insert_into(contact_messages::table)
            .values(&new_message)
            .execute(&mut conn)?;
        Ok(())
    }

    pub fn list_messages(&self) -> Result<Vec<ContactMessage>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        contact_messages::table
            .order(contact_messages::created_at.desc())
            .load::<ContactMessage>(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    #[test]
    fn messages_come_back_newest_first() {
        let pool = test_pool();
        let repo = ContactRepository::new(pool);
        for (subject, ts) in [("first", 100), ("second", 300), ("third", 200)] {
            repo.insert_message(NewContactMessage {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                subject: subject.to_string(),
                body: "hello".to_string(),
                created_at: ts,
            })
            .unwrap();
        }
        let messages = repo.list_messages().unwrap();
        let subjects: Vec<&str> = messages.iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(subjects, vec!["second", "third", "first"]);
    }
}
