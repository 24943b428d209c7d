#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unnecessary_struct_initialization)]
#![allow(clippy::unused_async)]
use axum::debug_handler;
use axum::extract::Query;
use derive_more::with_trait::Constructor;
use loco_rs::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::warn;

use crate::models::_entities::categories;
use crate::models::products::{ActiveModel, Entity, Model};

/// Custom error type for catalog browsing.
#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(i32),
}

impl From<CatalogError> for loco_rs::Error {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCategory(id) => {
                warn!("browse request for unknown category: {id}");
                Self::NotFound
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    pub name: String,
    pub description: Option<String>,
    pub price: f32,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
}

impl Params {
    fn update(&self, item: &mut ActiveModel) {
        item.name = Set(self.name.clone());
        item.description = Set(self.description.clone());
        item.price = Set(self.price);
        if let Some(stock) = self.stock {
            item.stock = Set(stock);
        }
        item.image_url = Set(self.image_url.clone());
        item.category_id = Set(self.category_id);
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    pub category_id: Option<i32>,
}

/// Response structure for storefront browsing: matched products plus count.
#[derive(Constructor, Serialize)]
pub struct BrowseResponse {
    count: usize,
    products: Vec<Model>,
}

async fn load_item(ctx: &AppContext, id: i32) -> Result<Model> {
    let item = Entity::find_by_id(id).one(&ctx.db).await?;
    item.ok_or_else(|| Error::NotFound)
}

/// Lists the catalog. With `?category_id=N`, narrows to one category's
/// products and 404s when that category does not exist.
#[debug_handler]
pub async fn list(
    State(ctx): State<AppContext>,
    Query(query): Query<ListQueryParams>,
) -> Result<Response> {
    let products = match query.category_id {
        Some(category_id) => {
            if categories::Entity::find_by_id(category_id)
                .one(&ctx.db)
                .await?
                .is_none()
            {
                return Err(CatalogError::UnknownCategory(category_id).into());
            }
            Entity::find_in_category(&ctx.db, category_id).await?
        }
        None => Entity::find().all(&ctx.db).await?,
    };

    format::json(BrowseResponse::new(products.len(), products))
}

#[debug_handler]
pub async fn add(State(ctx): State<AppContext>, Json(params): Json<Params>) -> Result<Response> {
    let mut item = ActiveModel {
        ..Default::default()
    };
    params.update(&mut item);
    let item = item.insert(&ctx.db).await?;
    format::json(item)
}

#[debug_handler]
pub async fn update(
    Path(id): Path<i32>,
    State(ctx): State<AppContext>,
    Json(params): Json<Params>,
) -> Result<Response> {
    let item = load_item(&ctx, id).await?;
    let mut item = item.into_active_model();
    params.update(&mut item);
    let item = item.update(&ctx.db).await?;
    format::json(item)
}

#[debug_handler]
pub async fn remove(Path(id): Path<i32>, State(ctx): State<AppContext>) -> Result<Response> {
    load_item(&ctx, id).await?.delete(&ctx.db).await?;
    format::empty()
}

#[debug_handler]
pub async fn get_one(Path(id): Path<i32>, State(ctx): State<AppContext>) -> Result<Response> {
    format::json(load_item(&ctx, id).await?)
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("api/products/")
        .add("/", get(list))
        .add("/", post(add))
        .add("{id}", get(get_one))
        .add("{id}", delete(remove))
        .add("{id}", put(update))
        .add("{id}", patch(update))
}
