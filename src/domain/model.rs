use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET /sites/{site_id}/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub site_id: String,
    pub query: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub paging: Paging,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<Product>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paging {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_results: u32,
}

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    pub original_price: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_quantity: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub condition: String,
    pub shipping: Option<Shipping>,
    pub seller: Option<Seller>,
    pub attributes: Option<Vec<Attribute>>,
}

impl Product {
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.map(|s| s.free_shipping).unwrap_or(false)
    }

    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(self.original_price, self.price)
    }
}

/// Body of `GET /items/{item_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    pub original_price: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_quantity: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub condition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pictures: Vec<Picture>,
    pub shipping: Option<Shipping>,
    #[serde(deserialize_with = "null_as_default")]
    pub seller_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    pub attributes: Option<Vec<Attribute>>,
    pub warranty: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sold_quantity: u32,
}

impl ProductDetail {
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.map(|s| s.free_shipping).unwrap_or(false)
    }

    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(self.original_price, self.price)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secure_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_size: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipping {
    #[serde(deserialize_with = "null_as_default")]
    pub free_shipping: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nickname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub value_name: Option<String>,
}

/// Treats an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn discount_percent(original: Option<f64>, price: f64) -> Option<u32> {
    match original {
        Some(original) if original > price && original > 0.0 => {
            Some(((original - price) / original * 100.0).round() as u32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_search_json_parses() {
        let json = r#"{
            "results": [
                { "id": "MLA1", "title": "Arroz Tio João", "price": 15.0 }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "Arroz Tio João");
        assert!(response.results[0].shipping.is_none());
        assert_eq!(response.paging, Paging::default());
    }

    #[test]
    fn test_sparse_detail_json_parses() {
        let json = r#"{
            "id": "MLA123",
            "title": "Test Product",
            "price": 100.0,
            "currency_id": "BRL",
            "category_id": "cat-01"
        }"#;

        let detail: ProductDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "Test Product");
        assert_eq!(detail.category_id, "cat-01");
        assert!(detail.pictures.is_empty());
        assert!(detail.warranty.is_none());
    }

    #[test]
    fn test_null_scalars_fall_back_to_defaults() {
        let json = r#"{
            "site_id": "MLB",
            "paging": null,
            "results": [
                { "id": "MLB1", "title": null, "price": null, "available_quantity": null,
                  "shipping": { "free_shipping": null }, "seller": { "id": null, "nickname": "LOJA" } },
                { "id": "MLB2", "title": "Cafeteira", "price": 99.9 }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.paging, Paging::default());
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].title, "");
        assert_eq!(response.results[0].price, 0.0);
        assert!(!response.results[0].has_free_shipping());
        assert_eq!(response.results[0].seller.as_ref().map(|s| s.id), Some(0));
        assert_eq!(response.results[1].title, "Cafeteira");

        let detail: ProductDetail =
            serde_json::from_str(r#"{"id": "MLB1", "pictures": null, "sold_quantity": null}"#)
                .unwrap();
        assert!(detail.pictures.is_empty());
        assert_eq!(detail.sold_quantity, 0);
    }

    #[test]
    fn test_discount_percent() {
        let product = Product {
            price: 75.0,
            original_price: Some(100.0),
            ..Default::default()
        };
        assert_eq!(product.discount_percent(), Some(25));

        let no_discount = Product {
            price: 100.0,
            original_price: Some(90.0),
            ..Default::default()
        };
        assert_eq!(no_discount.discount_percent(), None);
    }

    #[test]
    fn test_free_shipping_flag() {
        let detail = ProductDetail {
            shipping: Some(Shipping {
                free_shipping: true,
            }),
            ..Default::default()
        };
        assert!(detail.has_free_shipping());
        assert!(!ProductDetail::default().has_free_shipping());
    }
}
