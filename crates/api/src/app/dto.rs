use serde::Deserialize;

use forestal_products::Product;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/productos` and `PUT /api/productos/:id`.
///
/// Field names match the `productos` columns. Missing fields fall back to the
/// unset values of a fresh record; an `id` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    pub stock: i32,
    #[serde(rename = "imagen")]
    pub image: String,
}

impl ProductRequest {
    pub fn into_product(self) -> Product {
        Product::with_details(
            self.name,
            self.kind,
            self.brand,
            self.description,
            self.price,
            self.stock,
            self.image,
        )
    }
}
