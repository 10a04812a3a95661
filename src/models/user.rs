use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,  // bcrypt, never the plaintext
    pub emergency_contact: String,
}

/// A user as handed to the store, before it assigns an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub emergency_contact: String,
}

impl NewUser {
    pub fn with_id(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            emergency_contact: self.emergency_contact,
        }
    }
}
