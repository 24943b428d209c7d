pub use super::_entities::sea_orm_active_enums::Role;
pub use super::_entities::users::{ActiveModel, Column, Entity, Model};
use loco_rs::model::{ModelError, ModelResult};
use loco_rs::validation::Validatable;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::TransactionTrait;
use serde::Deserialize;
use validator::Validate;

pub type Users = Entity;

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct Validator {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
    #[validate(email(message = "Invalid email address."))]
    pub email: String,
}

impl Validatable for ActiveModel {
    fn validator(&self) -> Box<dyn Validate> {
        Box::new(Validator {
            name: self.name.as_ref().to_owned(),
            email: self.email.as_ref().to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> std::result::Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.validate()?;
        if insert {
            let mut this = self;
            // Mirrors the column default so rows built in process code agree
            // with rows the database fills in.
            if this.role.is_not_set() {
                this.role = Set(Role::User);
            }
            Ok(this)
        } else if self.updated_at.is_unchanged() {
            let mut this = self;
            this.updated_at = Set(chrono::Utc::now().into());
            Ok(this)
        } else {
            Ok(self)
        }
    }
}

// implement your read-oriented logic here
impl Model {
    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// When the user could not be found or on a DB query error.
    pub async fn find_by_email<C>(db: &C, email: &str) -> ModelResult<Self>
    where
        C: ConnectionTrait,
    {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await?;
        user.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Creates a user, rejecting duplicate email addresses before the insert
    /// is attempted. The unique index on `users.email` backs this check.
    ///
    /// # Errors
    ///
    /// When the email is already taken, validation fails, or on a DB error.
    pub async fn create<C>(db: &C, params: &CreateParams) -> ModelResult<Self>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        if Entity::find()
            .filter(Column::Email.eq(&params.email))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(ModelError::EntityAlreadyExists {});
        }

        let user = ActiveModel {
            name: Set(params.name.clone()),
            email: Set(params.email.clone()),
            role: params
                .role
                .clone()
                .map_or(sea_orm::ActiveValue::NotSet, Set),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(user)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// implement your write-oriented logic here
impl ActiveModel {}

// implement your custom finders, selectors oriented logic here
impl Entity {}
