// ============================================================================
// PRODUCT - Producto de catálogo (best sellers, wishlist, recomendaciones)
// ============================================================================

use serde::Deserialize;
use crate::models::common::{resolve_asset_url, RawId, RawNumber, RawStringList};

/// DTO crudo tal como llega del backend (snake_case o camelCase, campos
/// opcionales, listas array-o-string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "subtitle")]
    pub tagline: String,
    #[serde(default)]
    pub price: RawNumber,
    #[serde(default, alias = "compareAtPrice", alias = "compare_at_price")]
    pub compare_at: Option<RawNumber>,
    #[serde(default, alias = "imageUrl", alias = "image")]
    pub image_url: String,
    #[serde(default)]
    pub images: RawStringList,
    #[serde(default, alias = "orderIndex", alias = "position")]
    pub order_index: Option<i64>,
    #[serde(default = "default_in_stock", alias = "inStock")]
    pub in_stock: bool,
    #[serde(default)]
    pub tags: RawStringList,
}

fn default_in_stock() -> bool {
    true
}

/// View model plano para render
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub price_cents: i64,
    /// 0 = sin precio tachado
    pub compare_at_cents: i64,
    pub image_url: String,
    pub order_index: i64,
    pub in_stock: bool,
    pub tags: Vec<String>,
}

impl Product {
    /// Mapeo total: cada variante de entrada produce un valor para cada campo.
    /// Numéricos ausentes → 0, strings ausentes → "", imagen relativa → con prefijo.
    pub fn from_raw(raw: &RawProduct) -> Product {
        let image = if !raw.image_url.trim().is_empty() {
            raw.image_url.clone()
        } else {
            raw.images.items().into_iter().next().unwrap_or_default()
        };
        Product {
            id: raw.id.canonical(),
            name: raw.name.trim().to_string(),
            tagline: raw.tagline.trim().to_string(),
            price_cents: raw.price.as_cents(),
            compare_at_cents: raw.compare_at.as_ref().map(|p| p.as_cents()).unwrap_or(0),
            image_url: resolve_asset_url(&image),
            order_index: raw.order_index.unwrap_or(0),
            in_stock: raw.in_stock,
            tags: raw.tags.items(),
        }
    }
}

/// Orden de display de best sellers: order_index ascendente, empates por id
/// ascendente. Estable e idempotente.
pub fn sort_best_sellers(products: &mut Vec<Product>) {
    products.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, order_index: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            tagline: String::new(),
            price_cents: 1000,
            compare_at_cents: 0,
            image_url: String::new(),
            order_index,
            in_stock: true,
            tags: Vec::new(),
        }
    }

    #[test]
    fn camel_and_snake_case_spellings_map_identically() {
        let snake: RawProduct = serde_json::from_str(
            r#"{"id":1,"name":"Serum","image_url":"/uploads/s.jpg","order_index":3,"in_stock":false}"#,
        )
        .unwrap();
        let camel: RawProduct = serde_json::from_str(
            r#"{"id":"1","name":"Serum","imageUrl":"/uploads/s.jpg","orderIndex":3,"inStock":false}"#,
        )
        .unwrap();
        assert_eq!(Product::from_raw(&snake), Product::from_raw(&camel));
    }

    #[test]
    fn missing_fields_map_to_defaults_not_panics() {
        let raw: RawProduct = serde_json::from_str(r#"{"name":"Mist"}"#).unwrap();
        let product = Product::from_raw(&raw);
        assert_eq!(product.id, "");
        assert_eq!(product.price_cents, 0);
        assert_eq!(product.compare_at_cents, 0);
        assert_eq!(product.order_index, 0);
        assert_eq!(product.image_url, "");
        assert!(product.in_stock);
    }

    #[test]
    fn image_falls_back_to_first_of_encoded_list() {
        let raw: RawProduct = serde_json::from_str(
            r#"{"name":"Balm","images":"[\"/uploads/balm.jpg\",\"/uploads/balm2.jpg\"]"}"#,
        )
        .unwrap();
        let product = Product::from_raw(&raw);
        assert!(product.image_url.ends_with("/uploads/balm.jpg"));
    }

    #[test]
    fn best_sellers_sort_ascending_by_order_index() {
        // order_index 2,0,1 debe renderizar como 0,1,2
        let mut products = vec![product("a", 2), product("b", 0), product("c", 1)];
        sort_best_sellers(&mut products);
        let order: Vec<i64> = products.iter().map(|p| p.order_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn sorting_is_idempotent_and_order_independent() {
        let mut first = vec![product("a", 2), product("b", 0), product("c", 1)];
        let mut second = vec![product("c", 1), product("a", 2), product("b", 0)];
        sort_best_sellers(&mut first);
        sort_best_sellers(&mut second);
        assert_eq!(first, second);
        let again = {
            let mut v = first.clone();
            sort_best_sellers(&mut v);
            v
        };
        assert_eq!(first, again);
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let mut products = vec![product("z", 1), product("a", 1), product("m", 1)];
        sort_best_sellers(&mut products);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "z"]);
    }
}
