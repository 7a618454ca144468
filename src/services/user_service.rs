use crate::{
    models::{NewUser, User},
    store::{StoreError, UserStore},
    utils::{error::AppError, password::hash_password},
};

const ADD_USER_FAILED: &str = "Error adding user";
const LIST_USERS_FAILED: &str = "Error fetching users";
const USER_EXISTS: &str = "User already exists.";

/// Registers a user after checking that neither email nor phone is taken.
///
/// The pre-check gives the caller a clean conflict in the common case. Two concurrent
/// requests can both pass it, so a duplicate reported by the store on insert is also
/// turned into a conflict.
pub async fn add_user(store: &dyn UserStore, new_user: NewUser) -> Result<(), AppError> {
    let existing = store
        .find_by_email_or_phone(&new_user.email, &new_user.phone)
        .await
        .map_err(|e| AppError::internal(ADD_USER_FAILED, e))?;

    if existing.is_some() {
        return Err(AppError::Conflict(USER_EXISTS.to_string()));
    }

    let password_hash = hash_password(new_user.password.clone()).await?;
    let user = new_user.into_document(password_hash);

    match store.insert(&user).await {
        Ok(()) => Ok(()),
        Err(StoreError::Duplicate) => {
            log::warn!("⚠️  Duplicate rejected by store: {}", user.email);
            Err(AppError::Conflict(USER_EXISTS.to_string()))
        }
        Err(e) => Err(AppError::internal(ADD_USER_FAILED, e)),
    }
}

pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
    store
        .list()
        .await
        .map_err(|e| AppError::internal(LIST_USERS_FAILED, e))
}
