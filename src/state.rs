use crate::route::users::{Item, ITEMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppState {
    pub items: &'static [Item],
}
impl Default for AppState {
    fn default() -> Self {
        Self { items: &ITEMS }
    }
}
