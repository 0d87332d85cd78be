use std::sync::{Arc, PoisonError, RwLock};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
  shared::timestamp,
  users::model::user::{NewUser, User},
};

#[derive(Debug, Error)]
pub enum UserRepositoryError {
  #[error("User {0} not found")]
  NotFound(u64),

  #[error("User store unavailable: {0}")]
  Unavailable(String),
}

impl<T> From<PoisonError<T>> for UserRepositoryError {
  fn from(error: PoisonError<T>) -> Self {
    UserRepositoryError::Unavailable(error.to_string())
  }
}

pub trait UserRepository {
  async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;
  async fn find_one(&self, id: u64) -> Result<User, UserRepositoryError>;
  async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;
  async fn update(
    &self,
    id: u64,
    patch: &Map<String, Value>,
  ) -> Result<User, UserRepositoryError>;
  async fn delete(&self, id: u64) -> Result<(), UserRepositoryError>;
}

// ### In-memory implementation ###

/// Ordered users living for the lifetime of the process. Ids are not unique:
/// a new user gets `count + 1`, which can repeat an id freed by a delete.
/// Lookups always resolve to the first match.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
  users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
  pub fn with_users(users: Vec<User>) -> Self {
    Self {
      users: Arc::new(RwLock::new(users)),
    }
  }

  #[cfg(test)]
  pub fn shared_users(&self) -> Arc<RwLock<Vec<User>>> {
    self.users.clone()
  }
}

impl UserRepository for InMemoryUserRepository {
  async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
    Ok(self.users.read()?.clone())
  }

  async fn find_one(&self, id: u64) -> Result<User, UserRepositoryError> {
    let users = self.users.read()?;
    users
      .iter()
      .find(|user| user.id == id)
      .cloned()
      .ok_or(UserRepositoryError::NotFound(id))
  }

  async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
    let mut users = self.users.write()?;
    let user = user.into_user(users.len() as u64 + 1, timestamp::now());
    users.push(user.clone());
    Ok(user)
  }

  async fn update(
    &self,
    id: u64,
    patch: &Map<String, Value>,
  ) -> Result<User, UserRepositoryError> {
    let mut users = self.users.write()?;
    let user = users
      .iter_mut()
      .find(|user| user.id == id)
      .ok_or(UserRepositoryError::NotFound(id))?;
    user.apply_patch(patch, timestamp::now());
    Ok(user.clone())
  }

  async fn delete(&self, id: u64) -> Result<(), UserRepositoryError> {
    let mut users = self.users.write()?;
    let position = users
      .iter()
      .position(|user| user.id == id)
      .ok_or(UserRepositoryError::NotFound(id))?;
    users.remove(position);
    Ok(())
  }
}
