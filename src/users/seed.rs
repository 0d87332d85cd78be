use super::model::user::{NewUser, User};
use crate::shared::timestamp;

const SEED_PASSWORD: &str = "password123";

/// The three users every fresh process starts with.
pub fn seed_users() -> Vec<User> {
  let now = timestamp::now();
  [
    ("John Doe", "johndoe", "john@example.com", "john.jpg", "admin"),
    ("Jane Smith", "janesmith", "jane@example.com", "jane.jpg", "user"),
    ("Robert Brown", "robbrown", "robert@example.com", "robert.jpg", "user"),
  ]
  .into_iter()
  .zip(1..)
  .map(|((name, username, email, image, rol), id)| {
    NewUser {
      name: Some(name.to_string()),
      username: Some(username.to_string()),
      email: Some(email.to_string()),
      password: Some(SEED_PASSWORD.to_string()),
      image: Some(image.to_string()),
      rol: Some(rol.to_string()),
    }
    .into_user(id, now)
  })
  .collect()
}
