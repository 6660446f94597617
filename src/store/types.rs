//! Store item view-model and its backend wire shape

use serde::{Deserialize, Serialize};

use crate::wire;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreCategory {
    Apparel,
    Vinyl,
    Accessories,
    Tickets,
    Other,
}

impl StoreCategory {
    /// Lenient parse; anything unrecognized is `Other`
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "apparel" | "clothing" | "merch" | "shirts" => StoreCategory::Apparel,
            "vinyl" | "records" | "music" => StoreCategory::Vinyl,
            "accessories" => StoreCategory::Accessories,
            "tickets" | "ticket" => StoreCategory::Tickets,
            _ => StoreCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreCategory::Apparel => "apparel",
            StoreCategory::Vinyl => "vinyl",
            StoreCategory::Accessories => "accessories",
            StoreCategory::Tickets => "tickets",
            StoreCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub images: Vec<String>,
    pub category: StoreCategory,
    pub in_stock: bool,
    pub sizes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreItemDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "inStock")]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
}

pub fn normalize_store_item(dto: StoreItemDto) -> StoreItem {
    let mut images = dto.images.unwrap_or_default();
    if let Some(single) = dto.image_url {
        if !images.contains(&single) {
            images.insert(0, single);
        }
    }

    StoreItem {
        id: dto.id,
        name: dto.name.unwrap_or_default(),
        description: dto.description.unwrap_or_default(),
        price: dto.price.unwrap_or(0.0),
        currency: dto
            .currency
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.trim().to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        images,
        category: dto
            .category
            .as_deref()
            .map_or(StoreCategory::Other, StoreCategory::from_wire),
        in_stock: dto.in_stock.unwrap_or(true),
        sizes: dto.sizes.unwrap_or_default(),
    }
}

impl From<&StoreItem> for StoreItemDto {
    fn from(item: &StoreItem) -> Self {
        Self {
            id: item.id.clone(),
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            price: Some(item.price),
            currency: Some(item.currency.clone()),
            images: Some(item.images.clone()),
            image_url: None,
            category: Some(item.category.as_str().to_string()),
            in_stock: Some(item.in_stock),
            sizes: Some(item.sizes.clone()),
        }
    }
}
