use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::resource::Resource;

/// Number of records requested per list page.
pub const PAGE_SIZE: u32 = 20;

/// One decoded page of a list response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub items: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeHeader {
    total: u64,
    page_size: u32,
    current_page: u32,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a list envelope, reading records from the collection's own array field.
    /// A missing array field is an empty page.
    pub fn decode(resource: Resource, mut body: serde_json::Value) -> Result<Self, FetchError> {
        let items = match body
            .as_object_mut()
            .and_then(|obj| obj.remove(resource.list_field()))
        {
            Some(serde_json::Value::Null) | None => Vec::new(),
            Some(raw) => serde_json::from_value::<Vec<T>>(raw)
                .map_err(|e| FetchError::Decode(format!("{} records: {e}", resource.path())))?,
        };
        let header: EnvelopeHeader = serde_json::from_value(body)
            .map_err(|e| FetchError::Decode(format!("{} envelope: {e}", resource.path())))?;

        Ok(Self {
            total: header.total,
            page_size: header.page_size,
            current_page: header.current_page,
            items,
        })
    }
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    pub fn next_page(&self) -> Option<u32> {
        next_page(self.current_page, self.total, self.page_size)
    }
}

/// `ceil(total / page_size)`; zero when the page size is zero.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The page after `current_page`, if the envelope says one exists.
pub fn next_page(current_page: u32, total: u64, page_size: u32) -> Option<u32> {
    let next = current_page.checked_add(1)?;
    (next <= total_pages(total, page_size)).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Character, Group};
    use serde_json::json;

    #[test]
    fn next_page_follows_ceiling_of_total() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(next_page(1, 45, 20), Some(2));
        assert_eq!(next_page(2, 45, 20), Some(3));
        assert_eq!(next_page(3, 45, 20), None);
    }

    #[test]
    fn exact_multiple_and_empty_totals() {
        assert_eq!(next_page(2, 40, 20), None);
        assert_eq!(next_page(1, 0, 20), None);
        assert_eq!(next_page(1, 10, 0), None);
    }

    #[test]
    fn decodes_collection_specific_field() {
        let body = json!({
            "total": 9,
            "pageSize": 20,
            "currentPage": 1,
            "tailed-beasts": [{"id": 1, "name": "Shukaku"}, {"id": 2, "name": "Matatabi"}]
        });
        let page = Page::<Character>::decode(Resource::TailedBeasts, body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "Matatabi");
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn null_name_keeps_the_rest_of_the_page() {
        let body = json!({
            "total": 2,
            "pageSize": 20,
            "currentPage": 1,
            "characters": [{"id": 1, "name": "Naruto"}, {"id": 2, "name": null}]
        });
        let page = Page::<Character>::decode(Resource::Characters, body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Naruto");
        assert_eq!(page.items[1].id, 2);
        assert_eq!(page.items[1].name, "");
    }

    #[test]
    fn missing_array_field_is_empty_page() {
        let body = json!({"total": 0, "pageSize": 20, "currentPage": 1});
        let page = Page::<Group>::decode(Resource::Clans, body).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn envelope_without_counts_is_decode_error() {
        let body = json!({"clans": []});
        let err = Page::<Group>::decode(Resource::Clans, body).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
