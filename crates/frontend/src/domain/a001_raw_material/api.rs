use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::{api_url, api_url_with_id};
use crate::shared::state::RecordApi;
use async_trait::async_trait;
use contracts::domain::a001_raw_material::aggregate::{NewRawMaterial, RawMaterial};

const MATERIAL_PATH: &str = "/material";

/// `/material` resource
#[derive(Clone, Copy, Debug, Default)]
pub struct RawMaterialApi;

#[async_trait(?Send)]
impl RecordApi for RawMaterialApi {
    type Record = RawMaterial;
    type Draft = NewRawMaterial;

    const NAME: &'static str = "raw material";

    async fn list(&self) -> Result<Vec<RawMaterial>, ApiError> {
        fetch_raw_materials().await
    }

    async fn create(&self, draft: &NewRawMaterial) -> Result<(), ApiError> {
        api_client::post_json(&api_url(MATERIAL_PATH), draft).await
    }

    async fn update(&self, record: &RawMaterial) -> Result<(), ApiError> {
        api_client::put_json(&api_url_with_id(MATERIAL_PATH, &record.id), record).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        api_client::delete(&api_url_with_id(MATERIAL_PATH, id)).await
    }
}

/// `GET /material`; also feeds the material picker of the product form
pub async fn fetch_raw_materials() -> Result<Vec<RawMaterial>, ApiError> {
    api_client::get_json(&api_url(MATERIAL_PATH)).await
}
