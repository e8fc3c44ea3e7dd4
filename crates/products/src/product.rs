use core::str::FromStr;

use serde::{Deserialize, Serialize};

use forestal_core::{DomainError, Entity, SurrogateId};

/// Product identifier (storage-assigned surrogate key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub SurrogateId);

impl ProductId {
    pub fn new(id: SurrogateId) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0.get()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for ProductId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        SurrogateId::new(value).map(Self)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<SurrogateId>().map(Self)
    }
}

/// One catalog item: identity, descriptive attributes, price and stock on hand.
///
/// This is a passive value holder. Setters never validate; callers own any
/// constraint checking. The `id` is absent until a store persists the record and
/// can only be filled in through [`Product::assigned`].
///
/// Equality is **identity** equality (see [`Entity::same_entity`]): two records
/// are equal iff both carry an id and the ids match. Use [`Product::same_attributes`]
/// to compare by value.
///
/// Field names on the wire follow the `productos` table columns. An `id` in
/// incoming JSON is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_deserializing)]
    id: Option<ProductId>,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "tipo")]
    kind: String,
    #[serde(rename = "marca")]
    brand: String,
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "precio")]
    price: Option<f64>,
    stock: i32,
    #[serde(rename = "imagen")]
    image: String,
}

impl Product {
    /// A record with every attribute unset (empty text, no price, zero stock).
    pub fn new() -> Self {
        Self::default()
    }

    /// A not-yet-persisted record with caller-supplied attributes.
    pub fn with_details(
        name: impl Into<String>,
        kind: impl Into<String>,
        brand: impl Into<String>,
        description: impl Into<String>,
        price: Option<f64>,
        stock: i32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
            brand: brand.into(),
            description: description.into(),
            price,
            stock,
            image: image.into(),
        }
    }

    /// Attach the storage-assigned identifier.
    ///
    /// Ids are immutable once assigned: if the record already has one, it is
    /// returned unchanged.
    pub fn assigned(mut self, id: ProductId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }

    /// Copy of this record without its identifier.
    pub fn detached(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    /// Value comparison over every attribute except `id`.
    pub fn same_attributes(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.brand == other.brand
            && self.description == other.description
            && self.price == other.price
            && self.stock == other.stock
            && self.image == other.image
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Category label ("tipo"), free text.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn set_price(&mut self, price: Option<f64>) {
        self.price = price;
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
    }

    /// Reference or path to the product image.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.same_entity(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: i64) -> ProductId {
        ProductId::try_from(raw).unwrap()
    }

    fn roble() -> Product {
        Product::with_details(
            "Roble macizo",
            "Madera",
            "Bosque Real",
            "Tabla de roble",
            Some(45.50),
            12,
            "roble.jpg",
        )
    }

    #[test]
    fn constructed_record_reads_back_every_field() {
        let p = roble();
        assert_eq!(p.name(), "Roble macizo");
        assert_eq!(p.kind(), "Madera");
        assert_eq!(p.brand(), "Bosque Real");
        assert_eq!(p.description(), "Tabla de roble");
        assert_eq!(p.price(), Some(45.50));
        assert_eq!(p.stock(), 12);
        assert_eq!(p.image(), "roble.jpg");
    }

    #[test]
    fn new_record_has_no_id() {
        assert_eq!(Product::new().id(), None);
        assert!(!roble().is_persisted());
    }

    #[test]
    fn empty_record_has_unset_attributes() {
        let p = Product::new();
        assert_eq!(p.name(), "");
        assert_eq!(p.price(), None);
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn setters_replace_values_without_validation() {
        let mut p = Product::new();
        p.set_name("Pino");
        p.set_kind("Madera blanda");
        p.set_brand("Norte");
        p.set_description("");
        p.set_price(Some(-1.0));
        p.set_stock(-5);
        p.set_image("pino.png");

        assert_eq!(p.name(), "Pino");
        assert_eq!(p.kind(), "Madera blanda");
        assert_eq!(p.brand(), "Norte");
        assert_eq!(p.description(), "");
        assert_eq!(p.price(), Some(-1.0));
        assert_eq!(p.stock(), -5);
        assert_eq!(p.image(), "pino.png");

        p.set_price(None);
        assert_eq!(p.price(), None);
    }

    #[test]
    fn identical_records_without_id_are_distinct() {
        let a = roble();
        let b = roble();
        assert!(a.same_attributes(&b));
        assert_ne!(a, b);
        assert!(!a.same_entity(&b));
    }

    #[test]
    fn shared_id_makes_records_the_same_entity() {
        let a = roble().assigned(pid(3));
        let mut b = Product::new().assigned(pid(3));
        b.set_name("Otro nombre");
        assert_eq!(a, b);
    }

    #[test]
    fn differing_ids_are_different_entities() {
        let a = roble().assigned(pid(1));
        let b = roble().assigned(pid(2));
        assert_ne!(a, b);
        assert_ne!(a, roble());
    }

    #[test]
    fn assigned_id_is_immutable() {
        let p = roble().assigned(pid(1)).assigned(pid(99));
        assert_eq!(p.id(), Some(pid(1)));
    }

    #[test]
    fn detached_drops_only_the_id() {
        let p = roble().assigned(pid(4));
        let copy = p.detached();
        assert_eq!(copy.id(), None);
        assert!(copy.same_attributes(&p));
    }

    #[test]
    fn serializes_with_column_names() {
        let json = serde_json::to_value(roble().assigned(pid(8))).unwrap();
        assert_eq!(json["id"], 8);
        assert_eq!(json["nombre"], "Roble macizo");
        assert_eq!(json["tipo"], "Madera");
        assert_eq!(json["marca"], "Bosque Real");
        assert_eq!(json["descripcion"], "Tabla de roble");
        assert_eq!(json["precio"], 45.5);
        assert_eq!(json["stock"], 12);
        assert_eq!(json["imagen"], "roble.jpg");
    }

    #[test]
    fn unpersisted_id_serializes_as_null() {
        let json = serde_json::to_value(Product::new()).unwrap();
        assert!(json["id"].is_null());
        assert!(json["precio"].is_null());
    }

    #[test]
    fn deserializes_partial_payloads() {
        let p: Product =
            serde_json::from_str(r#"{"id": 5, "nombre": "Haya", "stock": 3}"#).unwrap();
        assert_eq!(p.name(), "Haya");
        assert_eq!(p.stock(), 3);
        assert_eq!(p.id(), None);
        assert_eq!(p.image(), "");
    }

    #[test]
    fn product_id_parses_from_path_segments() {
        assert_eq!("15".parse::<ProductId>().unwrap(), pid(15));
        assert!(matches!("x".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: set then get returns the value that was set.
            #[test]
            fn accessors_round_trip(
                name in ".{0,64}",
                kind in ".{0,32}",
                brand in ".{0,32}",
                description in ".{0,256}",
                price in proptest::option::of(-1.0e9f64..1.0e9f64),
                stock in any::<i32>(),
                image in ".{0,128}",
            ) {
                let mut p = Product::new();
                p.set_name(name.clone());
                p.set_kind(kind.clone());
                p.set_brand(brand.clone());
                p.set_description(description.clone());
                p.set_price(price);
                p.set_stock(stock);
                p.set_image(image.clone());

                prop_assert_eq!(p.name(), name.as_str());
                prop_assert_eq!(p.kind(), kind.as_str());
                prop_assert_eq!(p.brand(), brand.as_str());
                prop_assert_eq!(p.description(), description.as_str());
                prop_assert_eq!(p.price(), price);
                prop_assert_eq!(p.stock(), stock);
                prop_assert_eq!(p.image(), image.as_str());
                prop_assert!(p.id().is_none());
            }

            /// Property: identity equality follows the id, never the attributes.
            #[test]
            fn equality_follows_id(
                a in 1i64..10_000,
                b in 1i64..10_000,
                name in "[A-Za-z ]{0,20}",
            ) {
                let mut left = Product::new();
                left.set_name(name.clone());
                let right = left.clone();

                prop_assert_ne!(&left, &right);

                let left = left.assigned(pid(a));
                let right = right.assigned(pid(b));
                prop_assert_eq!(left == right, a == b);
            }
        }
    }
}
