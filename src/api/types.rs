use serde::Deserialize;

/// Paged response envelope shared by the properties and reservations endpoints
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
}

impl PageMeta {
    /// True on the final page of a listing
    pub fn is_last(&self) -> bool {
        self.current_page == self.last_page
    }
}
