use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::{api_url, api_url_with_id};
use crate::shared::state::RecordApi;
use async_trait::async_trait;
use contracts::domain::a002_product::aggregate::{NewProduct, Product};

const PRODUCTS_PATH: &str = "/products";

/// `POST /products/{rawMaterialId}` target for a draft.
///
/// The material id is not validated client-side.
pub fn create_path(draft: &NewProduct) -> String {
    format!(
        "{}/{}",
        PRODUCTS_PATH,
        urlencoding::encode(&draft.raw_material_id)
    )
}

/// `/products` resource
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductApi;

#[async_trait(?Send)]
impl RecordApi for ProductApi {
    type Record = Product;
    type Draft = NewProduct;

    const NAME: &'static str = "product";

    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        api_client::get_json(&api_url(PRODUCTS_PATH)).await
    }

    async fn create(&self, draft: &NewProduct) -> Result<(), ApiError> {
        api_client::post_json(&api_url(&create_path(draft)), draft).await
    }

    async fn update(&self, record: &Product) -> Result<(), ApiError> {
        api_client::put_json(&api_url_with_id(PRODUCTS_PATH, &record.id), record).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        api_client::delete(&api_url_with_id(PRODUCTS_PATH, id)).await
    }
}
