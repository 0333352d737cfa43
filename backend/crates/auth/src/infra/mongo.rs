//! MongoDB Repository Implementation

use kernel::id::UserId;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::error::{Error as MongoError, ErrorKind as MongoErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use platform::password::HashedPassword;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{InsertOutcome, UniqueField, UserRepository};
use crate::domain::value_object::{
    email::Email, session_token::SessionToken, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB-backed user store
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }

    /// Create the unique indexes on `username` and `email` (idempotent)
    pub async fn ensure_indexes(&self) -> AuthResult<()> {
        for field in ["username", "email"] {
            let mut keys = Document::new();
            keys.insert(field, 1);

            let index = IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().unique(true).build())
                .build();

            self.users.create_index(index).await?;
        }

        tracing::info!(collection = USERS_COLLECTION, "Ensured unique user indexes");

        Ok(())
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for MongoUserStore {
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let document = self
            .users
            .find_one(doc! { "username": user_name.as_str() })
            .await?;

        document.map(UserDocument::into_user).transpose()
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let count = self
            .users
            .count_documents(doc! { "username": user_name.as_str() })
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let count = self
            .users
            .count_documents(doc! { "email": email.as_str() })
            .await?;

        Ok(count > 0)
    }

    async fn insert(&self, user: &NewUser) -> AuthResult<InsertOutcome> {
        let document = UserDocument::from_new_user(user);

        let result = match self.users.insert_one(&document).await {
            Ok(result) => result,
            Err(e) => {
                return match duplicate_field(&e) {
                    Some(field) => Ok(InsertOutcome::Duplicate(field)),
                    None => Err(e.into()),
                };
            }
        };

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AuthError::Internal("Inserted user id is not an ObjectId".to_string())
        })?;

        Ok(InsertOutcome::Inserted(UserId::new(id.to_hex())))
    }
}

// ============================================================================
// Document mapping
// ============================================================================

/// Shape of a document in the `users` collection
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    username: String,
    email: String,
    /// Argon2 PHC string
    password: String,
    token: String,
}

impl UserDocument {
    fn from_new_user(user: &NewUser) -> Self {
        Self {
            id: None,
            username: user.user_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            password: user.password_hash.as_phc_string().to_string(),
            token: user.token.as_str().to_string(),
        }
    }

    fn into_user(self) -> AuthResult<User> {
        let id = self
            .id
            .ok_or_else(|| AuthError::Internal("User document has no _id".to_string()))?;

        Ok(User {
            user_id: UserId::new(id.to_hex()),
            user_name: UserName::new(self.username)
                .map_err(|e| AuthError::Internal(e.to_string()))?,
            email: Email::new(self.email).map_err(|e| AuthError::Internal(e.to_string()))?,
            password_hash: HashedPassword::from_stored(self.password),
            token: SessionToken::from_stored(self.token),
        })
    }
}

/// Which unique index a write error violated, if it was a duplicate key
fn duplicate_field(err: &MongoError) -> Option<UniqueField> {
    match err.kind.as_ref() {
        MongoErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(field_from_duplicate_message(&write_error.message))
        }
        _ => None,
    }
}

/// Read the index name from "E11000 ... index: email_1 dup key: { ... }"
///
/// The dup key part echoes the submitted value, so only the index name is
/// inspected.
fn field_from_duplicate_message(message: &str) -> UniqueField {
    let index = message
        .split_once("index: ")
        .and_then(|(_, rest)| rest.split_whitespace().next())
        .unwrap_or_default();

    if index.starts_with("email") {
        UniqueField::Email
    } else {
        UniqueField::UserName
    }
}
