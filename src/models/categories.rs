pub use super::_entities::categories::{ActiveModel, Column, Entity, Model};
use loco_rs::model::{ModelError, ModelResult};
use loco_rs::validation::Validatable;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::TransactionTrait;
use serde::Deserialize;
use validator::Validate;

pub type Categories = Entity;

#[derive(Debug, Validate, Deserialize)]
pub struct Validator {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
}

impl Validatable for ActiveModel {
    fn validator(&self) -> Box<dyn Validate> {
        Box::new(Validator {
            name: self.name.as_ref().to_owned(),
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
        if !insert && self.updated_at.is_unchanged() {
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
    /// Finds a category by its (unique) name.
    ///
    /// # Errors
    ///
    /// When the category could not be found or on a DB query error.
    pub async fn find_by_name<C>(db: &C, name: &str) -> ModelResult<Self>
    where
        C: ConnectionTrait,
    {
        let category = Entity::find()
            .filter(Column::Name.eq(name))
            .one(db)
            .await?;
        category.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Creates a category, rejecting duplicate names before the insert is
    /// attempted. The unique index on `categories.name` backs this check.
    ///
    /// # Errors
    ///
    /// When the name is already taken, validation fails, or on a DB error.
    pub async fn create<C>(db: &C, name: String, description: Option<String>) -> ModelResult<Self>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        if Entity::find()
            .filter(Column::Name.eq(&name))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(ModelError::EntityAlreadyExists {});
        }

        let category = ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(category)
    }
}

// implement your write-oriented logic here
impl ActiveModel {}

// implement your custom finders, selectors oriented logic here
impl Entity {}
