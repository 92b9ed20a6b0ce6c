//! Persistence of the signed-in user in browser storage.

use crate::{
    app_lib::AppError,
    features::auth::{ports::SessionStorage, types::SessionUser},
};

/// Storage key holding the JSON-encoded [`SessionUser`].
pub const SESSION_USER_KEY: &str = "currentUser";

/// Loads the stored user. Unreadable or undecodable entries count as signed out;
/// a corrupt entry is removed so it does not fail again on the next load.
pub fn restore<S: SessionStorage>(storage: &S) -> Option<SessionUser> {
    let raw = match storage.get_item(SESSION_USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("unable to read stored session: {err}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding undecodable stored session: {err}");
            if let Err(err) = storage.remove_item(SESSION_USER_KEY) {
                log::warn!("unable to remove stored session: {err}");
            }
            None
        }
    }
}

pub fn persist<S: SessionStorage>(storage: &S, user: &SessionUser) -> Result<(), AppError> {
    let encoded = serde_json::to_string(user)
        .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;
    storage.set_item(SESSION_USER_KEY, &encoded)
}

pub fn forget<S: SessionStorage>(storage: &S) -> Result<(), AppError> {
    storage.remove_item(SESSION_USER_KEY)
}

/// Turns a `document.cookie` string into the assignments that expire each cookie
/// on the root path.
pub fn expired_cookie_assignments(cookie_header: &str) -> Vec<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| {
            let name = pair.split('=').next().unwrap_or_default().trim();
            (!name.is_empty())
                .then(|| format!("{name}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{SESSION_USER_KEY, expired_cookie_assignments, forget, persist, restore};
    use crate::features::auth::{ports::SessionStorage, testing::MemoryStorage, types::SessionUser};

    fn ada() -> SessionUser {
        SessionUser {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            auth_provider: None,
        }
    }

    #[test]
    fn persist_then_restore_returns_same_user() {
        let storage = MemoryStorage::default();
        persist(&storage, &ada()).expect("persist");

        assert_eq!(restore(&storage), Some(ada()));
    }

    #[test]
    fn restore_discards_corrupt_entry() {
        let storage = MemoryStorage::default();
        storage
            .set_item(SESSION_USER_KEY, "{not json")
            .expect("seed");

        assert_eq!(restore(&storage), None);
        assert_eq!(storage.stored(SESSION_USER_KEY), None);
    }

    #[test]
    fn forget_removes_entry() {
        let storage = MemoryStorage::default();
        persist(&storage, &ada()).expect("persist");
        forget(&storage).expect("forget");

        assert_eq!(restore(&storage), None);
    }

    #[test]
    fn cookie_assignments_cover_each_named_cookie() {
        let assignments = expired_cookie_assignments("KC_STATE=abc; theme=dark;  ;flag");

        assert_eq!(
            assignments,
            vec![
                "KC_STATE=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/".to_string(),
                "theme=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/".to_string(),
                "flag=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/".to_string(),
            ]
        );
        assert!(expired_cookie_assignments("").is_empty());
    }
}
