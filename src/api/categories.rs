//! Categories API endpoints

use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use crate::categories::Category;
use crate::storage::CreateCategoryValues;
use crate::storage::Store;
use crate::storage::UpdateCategoryValues;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;
use super::trimmed;

const NAME_REQUIRED: &str = "Name is required";

/// Category response going to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl CategoryResponse {
    fn from_category(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            color: category.color,
        }
    }

    fn from_category_multiple(categories: Vec<Category>) -> Vec<Self> {
        categories.into_iter().map(Self::from_category).collect()
    }
}

/// List all categories, ordered by name
///
/// Request:
/// ```sh
/// curl -v http://localhost:8080/api/categories
/// ```
///
/// Response:
/// ```json
/// [ { "id": "general", "name": "General", "color": "#6b7280" } ]
/// ```
pub async fn list(Extension(store): Extension<Store>) -> Success<Vec<CategoryResponse>> {
    let categories = store.find_all_categories().await;

    Success::ok(CategoryResponse::from_category_multiple(categories))
}

/// Get a single category
pub async fn single(
    Extension(store): Extension<Store>,
    PathParameters(category_id): PathParameters<String>,
) -> Result<Success<CategoryResponse>, Error> {
    let category = store.find_single_category_by_id(&category_id).await?;

    Ok(Success::ok(CategoryResponse::from_category(category)))
}

/// Create and update category form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    /// Name, required
    name: Option<String>,

    /// Color, the default (or current) one when omitted
    color: Option<String>,
}

/// Create a category based on the [`CategoryForm`](CategoryForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "name": "Work", "color": "#ef4444" }' \
///     http://localhost:8080/api/categories
/// ```
///
/// Response:
/// ```json
/// { "id": "<uuid>", "name": "Work", "color": "#ef4444" }
/// ```
pub async fn create(
    Extension(store): Extension<Store>,
    Form(form): Form<CategoryForm>,
) -> Result<Success<CategoryResponse>, Error> {
    let name = trimmed(form.name.as_deref()).ok_or_else(|| Error::bad_request(NAME_REQUIRED))?;

    let values = CreateCategoryValues {
        name,
        color: trimmed(form.color.as_deref()),
    };

    let category = store.create_category(&values).await?;

    Ok(Success::created(CategoryResponse::from_category(category)))
}

/// Update a category based on the [`CategoryForm`](CategoryForm) form
pub async fn update(
    Extension(store): Extension<Store>,
    PathParameters(category_id): PathParameters<String>,
    Form(form): Form<CategoryForm>,
) -> Result<Success<CategoryResponse>, Error> {
    store.find_single_category_by_id(&category_id).await?;

    let name = trimmed(form.name.as_deref()).ok_or_else(|| Error::bad_request(NAME_REQUIRED))?;

    let values = UpdateCategoryValues {
        name,
        color: trimmed(form.color.as_deref()),
    };

    let category = store.update_category(&category_id, &values).await?;

    Ok(Success::ok(CategoryResponse::from_category(category)))
}

/// Delete a category
///
/// Not possible for the general category, or while notes still use it
pub async fn delete(
    Extension(store): Extension<Store>,
    PathParameters(category_id): PathParameters<String>,
) -> Result<Success<()>, Error> {
    store.delete_category(&category_id).await?;

    Ok(Success::no_content())
}
