use diesel::prelude::*;
use diesel::result::Error as DieselError;
use crate::{
    models::scan_models::{ScalpScan, NewScalpScan},
    schema::scalp_scans,
    DbPool,
};

pub struct ScanRepository {
    pool: DbPool,
}

impl ScanRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn insert_scan(&self, new_scan: NewScalpScan) -> Result<ScalpScan, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        diesel::insert_into(scalp_scans::table)
            .values(&new_scan)
            .execute(&mut conn)?;
        scalp_scans::table
            .order(scalp_scans::id.desc())
            .first::<ScalpScan>(&mut conn)
    }

    pub fn list_for_user(&self, user_id: i32) -> Result<Vec<ScalpScan>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        scalp_scans::table
            .filter(scalp_scans::user_id.eq(user_id))
            .order(scalp_scans::created_at.desc())
            .load::<ScalpScan>(&mut conn)
    }

    pub fn get_for_user(&self, scan_id: i32, user_id: i32) -> Result<Option<ScalpScan>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        scalp_scans::table
            .filter(scalp_scans::id.eq(scan_id))
            .filter(scalp_scans::user_id.eq(user_id))
            .first::<ScalpScan>(&mut conn)
            .optional()
    }

    /// Deletes a scan owned by the user and hands back its image path so the
    /// caller can remove the file.
    pub fn delete_for_user(&self, scan_id: i32, user_id: i32) -> Result<Option<Option<String>>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        let existing = scalp_scans::table
            .filter(scalp_scans::id.eq(scan_id))
            .filter(scalp_scans::user_id.eq(user_id))
            .first::<ScalpScan>(&mut conn)
            .optional()?;
        match existing {
            Some(scan) => {
                diesel::delete(
                    scalp_scans::table
                        .filter(scalp_scans::id.eq(scan_id))
                        .filter(scalp_scans::user_id.eq(user_id)),
                )
                .execute(&mut conn)?;
                Ok(Some(scan.image_path))
            }
            None => Ok(None),
        }
    }

    /// Scans whose image is still on disk but older than the cutoff. Used by
    /// the retention sweep.
    pub fn scans_with_stale_images(&self, cutoff: i32) -> Result<Vec<(i32, String)>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        let rows = scalp_scans::table
            .filter(scalp_scans::image_path.is_not_null())
            .filter(scalp_scans::created_at.lt(cutoff))
            .load::<ScalpScan>(&mut conn)?;
        Ok(rows
            .into_iter()
            .filter_map(|s| match (s.id, s.image_path) {
                (Some(id), Some(path)) => Some((id, path)),
                _ => None,
            })
            .collect())
    }

    pub fn clear_image(&self, scan_id: i32) -> Result<(), DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        diesel::update(scalp_scans::table.filter(scalp_scans::id.eq(scan_id)))
            .set(scalp_scans::image_path.eq(None::<String>))
            .execute(&mut conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scan_models::NewUser;
    use crate::repositories::user_core::UserCore;
    use crate::test_support::test_pool;

    fn scan_for(user_id: i32, created_at: i32, score: i32, image: Option<&str>) -> NewScalpScan {
        NewScalpScan {
            user_id,
            created_at,
            health_score: score,
            image_path: image.map(|s| s.to_string()),
            conditions: "[]".to_string(),
            causes: "[]".to_string(),
            recommendations: "[]".to_string(),
            hair_care_routine: "{}".to_string(),
            dos_and_donts: "{}".to_string(),
            overall_assessment: "ok".to_string(),
        }
    }

    fn seed_user(pool: &DbPool, email: &str) -> i32 {
        let core = UserCore::new(pool.clone());
        core.create_user(NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            created_at: 0,
        })
        .unwrap()
        .id
    }

    #[test]
    fn list_is_newest_first_and_owner_scoped() {
        let pool = test_pool();
        let repo = ScanRepository::new(pool.clone());
        let alice = seed_user(&pool, "alice@example.com");
        let bob = seed_user(&pool, "bob@example.com");

        repo.insert_scan(scan_for(alice, 100, 60, None)).unwrap();
        repo.insert_scan(scan_for(alice, 300, 80, None)).unwrap();
        repo.insert_scan(scan_for(bob, 200, 70, None)).unwrap();

        let scans = repo.list_for_user(alice).unwrap();
        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].created_at, 300);
        assert_eq!(scans[1].created_at, 100);
    }

    #[test]
    fn get_and_delete_respect_ownership() {
        let pool = test_pool();
        let repo = ScanRepository::new(pool.clone());
        let alice = seed_user(&pool, "alice@example.com");
        let bob = seed_user(&pool, "bob@example.com");

        let scan = repo.insert_scan(scan_for(alice, 100, 60, Some("abc.png"))).unwrap();
        let scan_id = scan.id.unwrap();

        assert!(repo.get_for_user(scan_id, bob).unwrap().is_none());
        assert!(repo.delete_for_user(scan_id, bob).unwrap().is_none());

        let deleted = repo.delete_for_user(scan_id, alice).unwrap();
        assert_eq!(deleted, Some(Some("abc.png".to_string())));
        assert!(repo.get_for_user(scan_id, alice).unwrap().is_none());
    }

    #[test]
    fn stale_image_sweep_targets_old_rows_only() {
        let pool = test_pool();
        let repo = ScanRepository::new(pool.clone());
        let alice = seed_user(&pool, "alice@example.com");

        let old = repo.insert_scan(scan_for(alice, 100, 60, Some("old.png"))).unwrap();
        repo.insert_scan(scan_for(alice, 100, 60, None)).unwrap();
        repo.insert_scan(scan_for(alice, 900, 60, Some("new.png"))).unwrap();

        let stale = repo.scans_with_stale_images(500).unwrap();
        assert_eq!(stale, vec![(old.id.unwrap(), "old.png".to_string())]);

        repo.clear_image(old.id.unwrap()).unwrap();
        assert!(repo.scans_with_stale_images(500).unwrap().is_empty());
    }
}
