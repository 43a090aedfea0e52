use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::ItemError;
use crate::services::ItemValidator;
use crate::stores::ItemStore;
use crate::types::dto::items::{CreateItemRequest, ItemResponse};

/// Shopping item endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
    expose_fault_details: bool,
}

impl ItemsApi {
    /// Create a new ItemsApi over the given store
    ///
    /// `expose_fault_details` adds internal error text to 500 bodies and must
    /// stay off in production.
    pub fn new(item_store: Arc<ItemStore>, expose_fault_details: bool) -> Self {
        Self {
            item_store,
            expose_fault_details,
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Shopping list management
    Items,
}

/// Response for a successful create
#[derive(ApiResponse, Debug)]
pub enum CreateItemResponse {
    /// Item created; `Location` points at the new item
    #[oai(status = 201)]
    Created(Json<ItemResponse>, #[oai(header = "Location")] String),
}

/// Response for a successful delete
#[derive(ApiResponse, Debug)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    Deleted,
}

/// Relative URL of a single item
pub fn item_location(id: &Uuid) -> String {
    format!("/items/{}", id)
}

#[OpenApi]
impl ItemsApi {
    /// List every item on the shopping list
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Json<Vec<ItemResponse>> {
        let items: Vec<ItemResponse> = self
            .item_store
            .list()
            .into_iter()
            .map(ItemResponse::from)
            .collect();

        tracing::debug!(count = items.len(), "Listed items");
        Json(items)
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, id: Path<Uuid>) -> Result<Json<ItemResponse>, ItemError> {
        self.item_store
            .get(&id.0)
            .map(|item| Json(item.into()))
            .ok_or_else(ItemError::not_found)
    }

    /// Add an item to the shopping list
    ///
    /// Status defaults to Planned when omitted.
    #[oai(path = "/items", method = "post", tag = "ItemTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> Result<CreateItemResponse, ItemError> {
        let input = ItemValidator::validate(&body.0).map_err(ItemError::validation_failed)?;

        let item = self
            .item_store
            .create(input)
            .map_err(|e| ItemError::from_internal_error(e, self.expose_fault_details))?;

        tracing::info!(item_id = %item.id, name = %item.name, "Shopping item created");

        let location = item_location(&item.id);
        Ok(CreateItemResponse::Created(Json(item.into()), location))
    }

    /// Replace an item's name, category, quantity and status
    ///
    /// Status keeps its current value when omitted. Id and creation time
    /// never change.
    #[oai(path = "/items/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        id: Path<Uuid>,
        body: Json<CreateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemError> {
        let input = ItemValidator::validate(&body.0).map_err(ItemError::validation_failed)?;

        let item = self
            .item_store
            .update(&id.0, &input)
            .ok_or_else(ItemError::not_found)?;

        tracing::info!(item_id = %item.id, "Shopping item updated");
        Ok(Json(item.into()))
    }

    /// Remove an item from the shopping list
    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<Uuid>) -> Result<DeleteItemResponse, ItemError> {
        if !self.item_store.delete(&id.0) {
            return Err(ItemError::not_found());
        }

        tracing::info!(item_id = %id.0, "Shopping item deleted");
        Ok(DeleteItemResponse::Deleted)
    }

    /// Mark an item as purchased
    ///
    /// Idempotent: purchasing an already purchased item succeeds.
    #[oai(path = "/items/:id/purchase", method = "patch", tag = "ItemTags::Items")]
    async fn mark_purchased(&self, id: Path<Uuid>) -> Result<Json<ItemResponse>, ItemError> {
        let item = self
            .item_store
            .mark_purchased(&id.0)
            .ok_or_else(ItemError::not_found)?;

        tracing::info!(item_id = %item.id, "Shopping item marked as purchased");
        Ok(Json(item.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::item::ItemStatus;
    use chrono::Utc;

    fn setup() -> (Arc<ItemStore>, ItemsApi) {
        let store = Arc::new(ItemStore::new());
        let api = ItemsApi::new(store.clone(), false);
        (store, api)
    }

    fn request(name: &str, category: &str, quantity: i64) -> Json<CreateItemRequest> {
        Json(CreateItemRequest {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            quantity: Some(quantity),
            status: None,
        })
    }

    async fn create(api: &ItemsApi, name: &str) -> ItemResponse {
        match api.create_item(request(name, "Lácteos", 2)).await.unwrap() {
            CreateItemResponse::Created(json, _) => json.0,
        }
    }

    #[tokio::test]
    async fn test_create_item_returns_created_with_location() {
        let (store, api) = setup();
        let before = Utc::now();

        let response = api.create_item(request("Leche", "Lácteos", 2)).await.unwrap();

        match response {
            CreateItemResponse::Created(json, location) => {
                assert_eq!(json.name, "Leche");
                assert_eq!(json.category, "Lácteos");
                assert_eq!(json.quantity, 2);
                assert_eq!(json.status, ItemStatus::Planned);
                assert!(json.created_at >= before);
                assert_eq!(location, format!("/items/{}", json.id));
                assert!(store.get(&json.id).is_some());
            }
        }
    }

    #[tokio::test]
    async fn test_create_item_with_quantity_out_of_range_creates_nothing() {
        let (store, api) = setup();

        let err = api.create_item(request("Leche", "Lácteos", 150)).await.unwrap_err();

        assert_eq!(err.status_code(), 400);
        match err {
            ItemError::ValidationFailed(json) => {
                assert_eq!(json.0.details[0].field, "quantity");
            }
            other => panic!("Expected ValidationFailed, got: {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_item_with_explicit_status() {
        let (_store, api) = setup();
        let mut body = request("Pan", "Panadería", 1);
        body.0.status = Some(ItemStatus::OutOfStock);

        match api.create_item(body).await.unwrap() {
            CreateItemResponse::Created(json, _) => assert_eq!(json.status, ItemStatus::OutOfStock),
        }
    }

    #[tokio::test]
    async fn test_list_items() {
        let (_store, api) = setup();
        assert!(api.list_items().await.0.is_empty());

        create(&api, "Leche").await;
        create(&api, "Pan").await;

        assert_eq!(api.list_items().await.0.len(), 2);
    }

    #[tokio::test]
    async fn test_get_item() {
        let (_store, api) = setup();
        let created = create(&api, "Leche").await;

        let fetched = api.get_item(Path(created.id)).await.unwrap();
        assert_eq!(fetched.0, created);
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let (_store, api) = setup();

        let err = api.get_item(Path(Uuid::new_v4())).await.unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Item not found");
    }

    #[tokio::test]
    async fn test_update_item_preserves_id_and_created_at() {
        let (_store, api) = setup();
        let created = create(&api, "Leche").await;

        let updated = api
            .update_item(Path(created.id), request("Leche desnatada", "Lácteos", 6))
            .await
            .unwrap()
            .0;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Leche desnatada");
        assert_eq!(updated.quantity, 6);
        assert_eq!(updated.status, ItemStatus::Planned);
    }

    #[tokio::test]
    async fn test_update_item_validates_before_lookup() {
        let (_store, api) = setup();

        let err = api
            .update_item(Path(Uuid::new_v4()), request("", "Lácteos", 2))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let (_store, api) = setup();

        let err = api
            .update_item(Path(Uuid::new_v4()), request("Leche", "Lácteos", 2))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_item_twice() {
        let (store, api) = setup();
        let created = create(&api, "Leche").await;

        assert!(matches!(
            api.delete_item(Path(created.id)).await,
            Ok(DeleteItemResponse::Deleted)
        ));
        assert_eq!(api.delete_item(Path(created.id)).await.unwrap_err().status_code(), 404);
        assert_eq!(api.get_item(Path(created.id)).await.unwrap_err().status_code(), 404);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_mark_purchased_twice() {
        let (_store, api) = setup();
        let created = create(&api, "Leche").await;

        let first = api.mark_purchased(Path(created.id)).await.unwrap().0;
        let second = api.mark_purchased(Path(created.id)).await.unwrap().0;

        assert_eq!(first.status, ItemStatus::Purchased);
        assert_eq!(second.status, ItemStatus::Purchased);
        assert_eq!(second.id, created.id);
        assert_eq!(second.quantity, created.quantity);
    }

    #[tokio::test]
    async fn test_mark_purchased_missing_item_is_not_found() {
        let (_store, api) = setup();

        let err = api.mark_purchased(Path(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
