//! # Catalog Data
//!
//! Deterministic product generation and catalog queries.
//!
//! ## Generation
//! ```text
//! per category: (name list, id prefix)
//!      │
//!      ▼  for each name at index i, with a global seed counter
//! Product {
//!     id:       "{prefix}{i+1}"                   ("v1", "ro3", ...)
//!     price:    35 + (seed × 17) % 250            rupees, deterministic
//!     rating:   RATINGS[seed % 5]                 4.5 ..= 4.9
//!     stock:    50 + i × 2
//!     unit:     "1L" for Dairy/Beverages, "1kg" otherwise
//!     is_fresh: i % 4 == 0
//! }
//! ```

use aura_core::types::{Category, Product};
use aura_core::Rupees;

/// Products the bulk dashboard pins as frequently ordered, by id.
const FREQUENT_BULK_IDS: [&str; 5] = ["v5", "s1", "d1", "v1", "s2"];

/// Rating values a product can carry.
const RATINGS: [f32; 5] = [4.5, 4.6, 4.7, 4.8, 4.9];

// =============================================================================
// Name Lists
// =============================================================================

const VEGETABLE_NAMES: [&str; 25] = [
    "Vine-Ripened Tomatoes",
    "Green Broccoli",
    "Sweet Red Onions",
    "Crisp Cucumber",
    "Russet Potatoes",
    "Baby Carrots",
    "White Cauliflower",
    "Organic Spinach",
    "Fresh Okra",
    "Purple Eggplant",
    "Yellow Bell Pepper",
    "Green Cabbage",
    "Sweet Garden Peas",
    "Young Ginger",
    "Pearl Garlic",
    "White Radish",
    "Beetroot",
    "Golden Pumpkin",
    "Bottle Gourd",
    "Bitter Gourd",
    "Green Chilies",
    "Seedless Lemon",
    "Sweet Potato",
    "Button Mushroom",
    "Baby Corn",
];

const FRUIT_NAMES: [&str; 25] = [
    "Alphonso Mango",
    "Hass Avocado",
    "Red Fuji Apple",
    "Cavendish Banana",
    "Nagpur Orange",
    "Sweet Green Grapes",
    "Pomegranate",
    "Ripe Papaya",
    "Sugarbaby Watermelon",
    "Queen Pineapple",
    "Fresh Strawberry",
    "Organic Blueberry",
    "Zespri Kiwi",
    "Red Dragon Fruit",
    "Conference Pear",
    "Pink Guava",
    "Custard Apple",
    "Sweet Muskmelon",
    "Fresh Lychee",
    "Black Jamun",
    "Juicy Peach",
    "Sweet Apricot",
    "Bing Cherry",
    "Fresh Purple Fig",
    "Tender Coconut",
];

const ORGANIC_NAMES: [&str; 25] = [
    "Heirloom Black Rice",
    "Certified Organic Quinoa",
    "Raw Wildflower Honey",
    "Cold-Pressed Coconut Oil",
    "Organic Turmeric Powder",
    "Brown Flax Seeds",
    "Organic Chia Seeds",
    "Hand-Pounded Wheat Flour",
    "Organic Jaggery Powder",
    "Himalayan Pink Salt",
    "Organic A2 Ghee",
    "Certified Organic Walnuts",
    "Raw Cashew Nuts",
    "Organic Peanuts",
    "Cold-Pressed Sesame Oil",
    "Organic Moong Dal",
    "Organic Rajma",
    "Brown Chickpeas",
    "Organic Sunflower Seeds",
    "Pure Vanilla Extract",
    "Organic Cocoa Powder",
    "Stevia Dry Leaves",
    "Organic Moringa Powder",
    "Tulsi Green Tea Leaves",
    "Organic Amaranth Grains",
];

const REGIONAL_ORG_NAMES: [&str; 20] = [
    "MDU 1 Brinjal",
    "Dharapuram Brinjal",
    "Vellore Spiny Brinjal",
    "Bhavani Brinjal",
    "Poyyur Kathari",
    "Arka Bahar Bottle Gourd",
    "Pusa Summer Prolific Bottle Gourd",
    "Pusa Manjari Bottle Gourd",
    "Maljal Pusani Pumpkin",
    "Ash Gourd",
    "Red Amaranth Leaves",
    "Green Amaranth Leaves",
    "Drumstick (Moringa Pods)",
    "Fresh Curry Leaves",
    "Small Onions (Shallots)",
    "Country Garlic (Native)",
    "Native Ridge Gourd",
    "Cluster Beans",
    "Broad Beans",
    "Raw Banana (Plantain)",
];

const DAIRY_NAMES: [&str; 25] = [
    "Fresh Farm Cow Milk",
    "Pure Buffalo Milk",
    "Artisanal Salted Butter",
    "Unsalted Farm Butter",
    "Fresh Buffalo Paneer",
    "Greek Style Plain Yogurt",
    "Set Curd (Clay Pot)",
    "Sweet Lassi (Chilled)",
    "Spiced Buttermilk",
    "Low Fat Skimmed Milk",
    "Thick Dairy Cream",
    "Mozzarella Cheese Blocks",
    "Cheddar Cheese Slices",
    "Flavored Fruit Yogurt",
    "Probiotic Drink",
    "Whipping Cream",
    "Condensed Milk",
    "Milk Khoa (Fresh)",
    "Mascarpone Cheese",
    "Dairy Whitener",
    "Gouda Cheese Wedges",
    "Fresh Ricotta",
    "Fresh Malai Paneer",
    "Ghee (Buffalo Milk)",
    "Fresh Chhena",
];

const STAPLE_NAMES: [&str; 25] = [
    "Premium Basmati Rice",
    "Sona Masuri Rice",
    "Whole Wheat Atta",
    "Multi-Grain Flour",
    "Toor Dal (Pigeon Peas)",
    "Masoor Dal (Red Lentils)",
    "Urad Dal (Black Gram)",
    "Chana Dal (Bengal Gram)",
    "Kabuli Chana",
    "Moong Dal (Yellow)",
    "Refined Wheat Flour",
    "Semolina (Sooji)",
    "Poha (Flattened Rice)",
    "Vermicelli (Roasted)",
    "Premium Mustard Oil",
    "Pure Sunflower Oil",
    "Filtered Groundnut Oil",
    "Iodized Table Salt",
    "Granulated Sugar",
    "Natural Brown Sugar",
    "Fenugreek Seeds",
    "Whole Cumin Seeds",
    "Black Pepper Pods",
    "Green Cardamom Pods",
    "Whole Cloves",
];

const BEVERAGE_NAMES: [&str; 25] = [
    "Filter Coffee Powder",
    "Instant Coffee Mix",
    "CTC Tea Dust",
    "Masala Chai Leaves",
    "Green Tea Bags",
    "Tender Coconut Water",
    "Fresh Orange Juice",
    "Mixed Fruit Juice",
    "Apple Cider (Non-Alc)",
    "Lemon Mint Mojito",
    "Natural Sparkling Water",
    "Almond Milk (Unsweet)",
    "Soy Milk (Chocolate)",
    "Mango Pulp Drink",
    "Thick Tomato Juice",
    "Cold Brew Coffee",
    "Ceremonial Matcha Tea",
    "Chamomile Tea Leaves",
    "Hibiscus Tea Mix",
    "Energy Malt Drink",
    "Aloe Vera Juice",
    "Pomegranate Nectar",
    "Dark Cocoa Mix",
    "Barley Drink",
    "Spiced Tomato Juice",
];

// =============================================================================
// Generation
// =============================================================================

fn push_category(
    products: &mut Vec<Product>,
    category: Category,
    names: &[&str],
    prefix: &str,
    seed: &mut usize,
) {
    let unit = match category {
        Category::Dairy | Category::Beverages => "1L",
        _ => "1kg",
    };

    for (i, name) in names.iter().enumerate() {
        let price = 35 + ((*seed * 17) % 250) as i64;

        products.push(Product {
            id: format!("{}{}", prefix, i + 1),
            name: (*name).to_string(),
            category,
            price: Rupees::new(price),
            unit: unit.to_string(),
            description: format!(
                "Premium fresh {} sourced directly from local sustainable farms. \
                 Guaranteed freshness and taste.",
                name.to_lowercase()
            ),
            stock: 50 + (i as i64) * 2,
            rating: RATINGS[*seed % RATINGS.len()],
            is_fresh: i % 4 == 0,
        });

        *seed += 1;
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full product catalog, generated once and read-only afterward.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl Catalog {
    /// Generates the catalog. Same output on every call.
    pub fn new() -> Self {
        let mut products = Vec::with_capacity(170);
        let mut seed = 0usize;

        push_category(&mut products, Category::Vegetables, &VEGETABLE_NAMES, "v", &mut seed);
        push_category(&mut products, Category::Fruits, &FRUIT_NAMES, "f", &mut seed);
        push_category(&mut products, Category::Organic, &ORGANIC_NAMES, "o", &mut seed);
        push_category(&mut products, Category::RegionalOrg, &REGIONAL_ORG_NAMES, "ro", &mut seed);
        push_category(&mut products, Category::Dairy, &DAIRY_NAMES, "d", &mut seed);
        push_category(&mut products, Category::Staples, &STAPLE_NAMES, "s", &mut seed);
        push_category(&mut products, Category::Beverages, &BEVERAGE_NAMES, "b", &mut seed);

        Catalog { products }
    }

    /// Every product, in shop display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by its catalog id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The first catalog product in a category (the voucher auto-add target).
    pub fn first_in_category(&self, category: Category) -> Option<&Product> {
        self.products.iter().find(|p| p.category == category)
    }

    /// Shop-grid filter: optional category chip plus a case-insensitive
    /// name substring search. An empty query matches everything.
    pub fn browse(&self, category: Option<Category>, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();

        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Curated picks shown on the bulk-buyer dashboard, in catalog order.
    pub fn frequent_bulk_picks(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| FREQUENT_BULK_IDS.contains(&p.id.as_str()))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
