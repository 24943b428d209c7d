pub use super::_entities::products::{ActiveModel, Column, Entity, Model};
use crate::models::_entities::categories;
use loco_rs::model::ModelResult;
use loco_rs::validation::Validatable;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use validator::Validate;

pub type Products = Entity;

#[derive(Debug, Validate, Deserialize)]
pub struct Validator {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative."))]
    pub price: f32,
}

impl Validatable for ActiveModel {
    fn validator(&self) -> Box<dyn Validate> {
        Box::new(Validator {
            name: self.name.as_ref().to_owned(),
            price: *self.price.as_ref(),
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
            if this.stock.is_not_set() {
                this.stock = Set(0);
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
    /// Loads the category this product is filed under, if any.
    ///
    /// # Errors
    ///
    /// On a DB query error.
    pub async fn category<C>(&self, db: &C) -> ModelResult<Option<categories::Model>>
    where
        C: ConnectionTrait,
    {
        let category = self.find_related(categories::Entity).one(db).await?;
        Ok(category)
    }

    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// implement your write-oriented logic here
impl ActiveModel {}

// implement your custom finders, selectors oriented logic here
impl Entity {
    /// All products filed under the given category.
    pub async fn find_in_category<C>(db: &C, category_id: i32) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::find()
            .filter(Column::CategoryId.eq(category_id))
            .all(db)
            .await
    }
}
