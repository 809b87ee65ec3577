use std::borrow::Cow;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: Cow<'static, str>,
}

/// Items served by `GET /api/users`, in response order.
pub static ITEMS: [Item; 3] = [
    Item { id: 1, name: Cow::Borrowed("Item 1") },
    Item { id: 2, name: Cow::Borrowed("Item 2") },
    Item { id: 3, name: Cow::Borrowed("Item 3") },
];

#[tracing::instrument]
pub async fn users(State(AppState { items }): State<AppState>) -> Json<&'static [Item]> {
    Json(items)
}
