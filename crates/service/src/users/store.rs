use std::sync::Arc;

use tokio::sync::RwLock;

use models::user::User;

/// In-memory registered-user sequence, append-only, in registration order.
/// Usernames are unique; `try_insert` enforces that under one write lock.
pub struct UserStore {
    inner: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(Vec::new()) })
    }

    /// Exact-match scan for a username.
    pub async fn contains(&self, username: &str) -> bool {
        let users = self.inner.read().await;
        users.iter().any(|u| u.username == username)
    }

    /// Append the user unless the username is already taken. The duplicate
    /// check and the append share the same write lock, so two racing
    /// inserts of one username cannot both succeed. Returns whether the
    /// user was added.
    pub async fn try_insert(&self, user: User) -> bool {
        let mut users = self.inner.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return false;
        }
        users.push(user);
        true
    }

    pub async fn len(&self) -> usize {
        let users = self.inner.read().await;
        users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn try_insert_blocks_duplicates() {
        let store = UserStore::new();
        assert!(store.is_empty().await);
        assert!(!store.contains("ada").await);

        let added = store
            .try_insert(User { username: "ada".into(), password: "pw".into() })
            .await;
        assert!(added);

        let again = store
            .try_insert(User { username: "ada".into(), password: "other".into() })
            .await;
        assert!(!again);

        assert!(store.contains("ada").await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn racing_inserts_admit_one_winner() {
        let store = UserStore::new();
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .try_insert(User { username: "grace".into(), password: format!("pw{}", i) })
                    .await
            }));
        }
        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap_or(false) {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(store.len().await, 1);
    }
}
