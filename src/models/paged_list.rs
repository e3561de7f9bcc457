use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::order::PageRequest;

use super::beer_order::BeerOrderDto;

/// One page of a customer's orders together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderPagedList {
    pub content: Vec<BeerOrderDto>,
    /// Zero-based page index.
    pub number: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl BeerOrderPagedList {
    /// Builds a page from its content, the request that produced it and the
    /// total reported by the store.
    ///
    /// A non-empty page whose window extends past `total` raises the total
    /// to `offset + content.len()`, so the total never undercounts what the
    /// caller can see.
    pub fn new(content: Vec<BeerOrderDto>, page: PageRequest, total: i64) -> Self {
        let offset = page.offset();
        let size = i64::from(page.page_size);
        let number_of_elements = content.len();

        let total_elements = if !content.is_empty() && offset + size > total {
            offset + number_of_elements as i64
        } else {
            total
        };
        let total_pages = if size == 0 {
            1
        } else {
            (total_elements + size - 1) / size
        };

        Self {
            number: page.page_number,
            size: page.page_size,
            total_elements,
            total_pages,
            number_of_elements,
            first: page.page_number == 0,
            last: i64::from(page.page_number) + 1 >= total_pages,
            empty: content.is_empty(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::order::OrderStatus;

    fn order() -> BeerOrderDto {
        let now = Utc::now();
        BeerOrderDto {
            id: Uuid::new_v4(),
            version: 0,
            created_date: now,
            last_modified_date: now,
            customer_id: Uuid::new_v4(),
            customer_ref: Some("1234".to_string()),
            beer_order_lines: vec![],
            order_status: OrderStatus::New,
            order_status_callback_url: None,
        }
    }

    #[test]
    fn total_is_raised_to_cover_visible_elements() {
        let page = BeerOrderPagedList::new(vec![order()], PageRequest::of(1, 1), 1);

        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 2);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn total_is_kept_when_more_pages_follow() {
        let page = BeerOrderPagedList::new(vec![order(), order()], PageRequest::of(0, 2), 5);

        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number_of_elements, 2);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn empty_page_reports_zero_pages() {
        let page = BeerOrderPagedList::new(vec![], PageRequest::default(), 0);

        assert!(page.empty);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.size, 25);
        assert!(page.first && page.last);
    }

    #[test]
    fn empty_page_past_the_end_keeps_total() {
        let page = BeerOrderPagedList::new(vec![], PageRequest::of(4, 10), 12);

        assert_eq!(page.total_elements, 12);
        assert_eq!(page.total_pages, 2);
        assert!(page.last);
    }

    #[test]
    fn serializes_spring_style_metadata() {
        let page = BeerOrderPagedList::new(vec![order()], PageRequest::of(0, 25), 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["numberOfElements"], 1);
        assert_eq!(json["size"], 25);
        assert_eq!(json["number"], 0);
        assert!(json["content"].is_array());
    }
}
