use serde::de::DeserializeOwned;
use serde::Serialize;

/// Sparse search criteria accepted by a resource's `/filter` endpoint.
///
/// Every field is optional and unset fields are skipped during
/// serialization, so the request body carries only the criteria the user
/// actually entered.
pub trait ResourceFilter:
    Serialize + Clone + Default + PartialEq + Send + Sync + 'static
{
    /// Number of criteria currently set.
    fn active_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// A backend-managed entity exposed through the standard CRUD surface.
///
/// The generic list controller, API client, and tab titles are all driven
/// by this trait, so a new resource needs exactly one implementation of it
/// plus a page configuration.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static
{
    /// Criteria for the collection endpoint.
    type Filter: ResourceFilter;

    /// Payload submitted on create and update.
    type Dto: Serialize + Clone + Default + Send + Sync + 'static;

    // ========================================================================
    // Class-level metadata
    // ========================================================================

    /// URL segment of the resource, e.g. "products".
    fn base_path() -> &'static str;

    /// Singular UI name, e.g. "Product".
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Products".
    fn list_name() -> &'static str;

    // ========================================================================
    // Instance data
    // ========================================================================

    fn id(&self) -> i64;

    /// Human label of the record, used in prompts and tab titles.
    fn title(&self) -> String;
}
