//! Stock Mutations
//!
//! createStock / updateStock / deleteStock, plus the dispatcher mapping editor
//! changes onto them.

use serde::{Deserialize, Serialize};

use inventory_domain::{Change, Item, ItemId};
use super::GraphqlClient;

pub const CREATE_STOCK: &str = "mutation CreateStock($input: CreateStockInput!) {
  createStock(input: $input) { id name price category }
}";

pub const UPDATE_STOCK: &str = "mutation UpdateStock($input: UpdateStockInput!) {
  updateStock(input: $input) { id name price category }
}";

pub const DELETE_STOCK: &str = "mutation DeleteStock($input: DeleteStockInput!) {
  deleteStock(input: $input) { id name price category }
}";

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct InputArgs<T: Serialize> {
    input: T,
}

#[derive(Serialize)]
struct DeleteStockInput<'a> {
    id: &'a ItemId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateStockData {
    create_stock: Item,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStockData {
    update_stock: Item,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteStockData {
    delete_stock: Option<Item>,
}

// ========================
// Mutations
// ========================

pub async fn create_stock(client: &GraphqlClient, item: &Item) -> Result<Item, String> {
    let data: CreateStockData = client.execute(CREATE_STOCK, InputArgs { input: item }).await?;
    Ok(data.create_stock)
}

pub async fn update_stock(client: &GraphqlClient, item: &Item) -> Result<Item, String> {
    let data: UpdateStockData = client.execute(UPDATE_STOCK, InputArgs { input: item }).await?;
    Ok(data.update_stock)
}

/// Returns the removed record, or None if the server had no such stock
pub async fn delete_stock(client: &GraphqlClient, id: &ItemId) -> Result<Option<Item>, String> {
    let data: DeleteStockData = client.execute(DELETE_STOCK, InputArgs { input: DeleteStockInput { id } }).await?;
    Ok(data.delete_stock)
}

/// Mirror one local change remotely
pub async fn push_change(client: &GraphqlClient, change: &Change) -> Result<(), String> {
    match change {
        Change::Created(item) => create_stock(client, item).await.map(|_| ()),
        Change::Updated(item) => update_stock(client, item).await.map(|_| ()),
        Change::Deleted(id) => delete_stock(client, id).await.map(|_| ()),
    }
}
