use grill_core::records::RecordItem;

pub trait RecordStore: Send + Sync {
    /// Unconditional write keyed by the item's `id`.
    fn put_item(&self, item: &RecordItem) -> Result<(), String>;
    fn get_item(&self, id: &str) -> Result<Option<RecordItem>, String>;
}
