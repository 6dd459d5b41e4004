//! Catalog phase: venues, menu, ingredients, recipes, equipment,
//! vehicles, suppliers
//!
//! Independent groups are dispatched concurrently; dependent groups
//! (ingredients → suppliers, packages/recipes → menu items) follow.

use super::record_id;
use crate::db::models::{
    Equipment, Ingredient, MenuCategory, MenuItem, MenuPackage, Recipe, Supplier, Vehicle, Venue,
};
use crate::db::repository::{
    EquipmentRepository, IngredientRepository, MenuItemRepository, MenuPackageRepository,
    RecipeRepository, SupplierRepository, VehicleRepository, VenueRepository,
};
use crate::utils::AppResult;

/// Catalog rows downstream phases hang their links on
pub(super) struct SeededCatalog {
    pub venues: Vec<Venue>,
    pub packages: Vec<MenuPackage>,
    pub vehicles: Vec<Vehicle>,
    pub suppliers: Vec<Supplier>,
}

/// (name, address, capacity, rental fee, amenities)
const VENUES: &[(&str, &str, i32, f64, &[&str])] = &[
    (
        "The Grand Atrium",
        "12 Meridian Plaza, Portsworth",
        250,
        3500.0,
        &["stage", "AV system", "coat check", "loading dock"],
    ),
    (
        "Riverside Pavilion",
        "88 Quay Road, Portsworth",
        120,
        1800.0,
        &["waterfront terrace", "outdoor heaters"],
    ),
    (
        "Heritage Loft",
        "4 Tannery Lane, Old Town",
        80,
        1200.0,
        &["exposed brick", "freight elevator"],
    ),
    (
        "Botanical Terrace",
        "201 Garden Way, Portsworth",
        160,
        2200.0,
        &["greenhouse", "string lighting", "rain contingency hall"],
    ),
];

/// (name, price, category, vegetarian, vegan, gluten-free)
const MENU_ITEMS: &[(&str, f64, MenuCategory, bool, bool, bool)] = &[
    ("Smoked Beet Crostini", 6.5, MenuCategory::Appetizer, true, false, false),
    ("Citrus Shrimp Skewers", 9.0, MenuCategory::Appetizer, false, false, true),
    ("Wild Mushroom Tartlets", 7.5, MenuCategory::Appetizer, true, false, false),
    ("Heirloom Tomato Bruschetta", 6.0, MenuCategory::Appetizer, true, true, false),
    ("Herb-Roasted Chicken Breast", 24.0, MenuCategory::Entree, false, false, true),
    ("Pan-Seared Salmon", 28.5, MenuCategory::Entree, false, false, true),
    ("Truffle Mushroom Risotto", 22.0, MenuCategory::Entree, true, false, true),
    ("Braised Short Rib", 32.0, MenuCategory::Entree, false, false, false),
    ("Charred Cauliflower Steak", 19.5, MenuCategory::Entree, true, true, true),
    ("Garlic Confit Mashed Potatoes", 5.5, MenuCategory::Side, true, false, true),
    ("Grilled Seasonal Vegetables", 6.0, MenuCategory::Side, true, true, true),
    ("Saffron Rice Pilaf", 5.0, MenuCategory::Side, true, true, true),
    ("Honey-Glazed Carrots", 4.5, MenuCategory::Side, true, false, true),
    ("Vanilla Bean Panna Cotta", 8.0, MenuCategory::Dessert, true, false, true),
    ("Dark Chocolate Torte", 9.5, MenuCategory::Dessert, true, false, false),
    ("Lemon Olive-Oil Cake", 8.5, MenuCategory::Dessert, true, false, false),
    ("Sparkling Elderflower Punch", 4.0, MenuCategory::Beverage, true, true, true),
    ("Cold Brew Station", 3.5, MenuCategory::Beverage, true, true, true),
];

/// (name, price per person, min guests, max guests, description)
const PACKAGES: &[(&str, f64, i32, i32, &str)] = &[
    (
        "Garden Party Buffet",
        65.0,
        20,
        80,
        "Relaxed buffet service with seasonal sides and dessert table",
    ),
    (
        "Executive Banquet",
        95.0,
        50,
        200,
        "Plated three-course dinner with synchronized service",
    ),
    (
        "Cocktail Reception",
        45.0,
        30,
        150,
        "Passed appetizers and stations, ninety-minute service window",
    ),
];

/// Package composition: (package idx, menu item idx, quantity, required)
const PACKAGE_ITEMS: &[(usize, usize, i32, bool)] = &[
    // Garden Party Buffet
    (0, 0, 2, true),
    (0, 4, 1, true),
    (0, 8, 1, false),
    (0, 10, 2, true),
    (0, 12, 1, false),
    (0, 15, 1, true),
    // Executive Banquet
    (1, 2, 2, true),
    (1, 5, 1, true),
    (1, 7, 1, true),
    (1, 9, 1, true),
    (1, 13, 1, true),
    (1, 16, 1, false),
    // Cocktail Reception
    (2, 0, 3, true),
    (2, 1, 3, true),
    (2, 3, 2, true),
    (2, 11, 1, false),
    (2, 17, 1, false),
];

/// (name, unit, cost per unit)
const INGREDIENTS: &[(&str, &str, f64)] = &[
    ("Chicken breast", "kg", 8.4),
    ("Salmon fillet", "kg", 19.5),
    ("Arborio rice", "kg", 4.2),
    ("Wild mushrooms", "kg", 12.0),
    ("Red beets", "kg", 2.1),
    ("Shrimp", "kg", 16.0),
    ("Heavy cream", "l", 3.2),
    ("Dark chocolate", "kg", 11.0),
    ("Cauliflower", "each", 2.4),
    ("Carrots", "kg", 1.6),
    ("Lemons", "kg", 3.0),
    ("Elderflower cordial", "l", 9.5),
];

/// (menu item idx, recipe name, yield, prep minutes, BOM edges as
/// (ingredient idx, quantity, unit))
const RECIPES: &[(usize, &str, i32, i32, &[(usize, f64, &str)])] = &[
    (
        6,
        "Truffle Mushroom Risotto",
        10,
        45,
        &[(2, 1.2, "kg"), (3, 0.8, "kg"), (6, 0.5, "l")],
    ),
    (
        6,
        "Truffle Mushroom Risotto (large batch)",
        40,
        90,
        &[(2, 4.8, "kg"), (3, 3.2, "kg"), (6, 2.0, "l")],
    ),
    (
        4,
        "Herb-Roasted Chicken Breast",
        20,
        35,
        &[(0, 4.0, "kg"), (9, 1.0, "kg"), (10, 0.3, "kg")],
    ),
    (
        13,
        "Vanilla Bean Panna Cotta",
        24,
        30,
        &[(6, 2.4, "l"), (10, 0.2, "kg")],
    ),
    (
        8,
        "Charred Cauliflower Steak",
        12,
        25,
        &[(8, 6.0, "each"), (10, 0.25, "kg")],
    ),
    (
        1,
        "Citrus Shrimp Skewers",
        30,
        40,
        &[(5, 2.5, "kg"), (10, 0.5, "kg")],
    ),
];

/// (name, category, quantity, notes)
const EQUIPMENT: &[(&str, &str, i32, Option<&str>)] = &[
    ("Chafing Dish", "serving", 24, None),
    ("60in Round Table", "furniture", 30, None),
    ("Folding Chair", "furniture", 260, Some("stackable, banquet style")),
    ("Linen Set", "textile", 40, Some("ivory and slate colorways")),
    ("Portable Bar", "serving", 3, None),
    ("Mobile Convection Oven", "kitchen", 2, Some("requires 32A supply")),
];

/// (name, plate, type, refrigerated)
const VEHICLES: &[(&str, &str, &str, bool)] = &[
    ("Refrigerated Van 1", "BQ-204-RF", "VAN", true),
    ("Box Truck", "BQ-118-BX", "TRUCK", false),
    ("Cargo Van", "BQ-309-CV", "VAN", false),
];

/// (name, contact, email, phone, address)
const SUPPLIERS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Harbor Fresh Seafood",
        "Mick Doyle",
        "orders@harborfresh.example",
        "+1-555-0401",
        "Pier 9, Portsworth Harbor",
    ),
    (
        "Green Valley Produce",
        "Rosa Delgado",
        "sales@greenvalley.example",
        "+1-555-0402",
        "14 Market Road, Easton",
    ),
    (
        "Metro Restaurant Supply",
        "Ken Abara",
        "accounts@metrosupply.example",
        "+1-555-0403",
        "Unit 7, Industrial Park West",
    ),
    (
        "Hillside Dairy Co.",
        "Greta Lindqvist",
        "greta@hillsidedairy.example",
        "+1-555-0404",
        "Hillside Farm, Route 12",
    ),
];

#[allow(clippy::too_many_arguments)]
pub(super) async fn seed(
    venues: &VenueRepository,
    menu_items: &MenuItemRepository,
    packages: &MenuPackageRepository,
    ingredients: &IngredientRepository,
    recipes: &RecipeRepository,
    equipment: &EquipmentRepository,
    vehicles: &VehicleRepository,
    suppliers: &SupplierRepository,
) -> AppResult<SeededCatalog> {
    // Five independent groups, dispatched concurrently
    let (seeded_venues, seeded_items, _, seeded_vehicles, seeded_suppliers) = tokio::try_join!(
        seed_venues(venues),
        seed_menu_items(menu_items),
        seed_equipment(equipment),
        seed_vehicles(vehicles),
        seed_suppliers(suppliers),
    )?;

    // Ingredients reference suppliers (round-robin)
    let seeded_ingredients = seed_ingredients(ingredients, &seeded_suppliers).await?;

    // Packages and recipes reference menu items
    let seeded_packages = seed_packages(packages, &seeded_items).await?;
    seed_recipes(recipes, &seeded_items, &seeded_ingredients).await?;

    Ok(SeededCatalog {
        venues: seeded_venues,
        packages: seeded_packages,
        vehicles: seeded_vehicles,
        suppliers: seeded_suppliers,
    })
}

async fn seed_venues(repo: &VenueRepository) -> AppResult<Vec<Venue>> {
    let mut out = Vec::with_capacity(VENUES.len());
    for (name, address, capacity, rental_fee, amenities) in VENUES {
        let venue = repo
            .create(Venue {
                id: None,
                name: (*name).to_string(),
                address: (*address).to_string(),
                capacity: *capacity,
                description: None,
                amenities: amenities.iter().map(|s| s.to_string()).collect(),
                rental_fee: *rental_fee,
            })
            .await?;
        out.push(venue);
    }
    Ok(out)
}

async fn seed_menu_items(repo: &MenuItemRepository) -> AppResult<Vec<MenuItem>> {
    let mut out = Vec::with_capacity(MENU_ITEMS.len());
    for (name, price, category, vegetarian, vegan, gluten_free) in MENU_ITEMS {
        let item = repo
            .create(MenuItem {
                id: None,
                name: (*name).to_string(),
                description: None,
                price: *price,
                category: *category,
                is_vegetarian: *vegetarian,
                is_vegan: *vegan,
                is_gluten_free: *gluten_free,
                is_active: true,
            })
            .await?;
        out.push(item);
    }
    Ok(out)
}

async fn seed_packages(
    repo: &MenuPackageRepository,
    items: &[MenuItem],
) -> AppResult<Vec<MenuPackage>> {
    let mut out = Vec::with_capacity(PACKAGES.len());
    for (name, price_per_person, min_guests, max_guests, description) in PACKAGES {
        let package = repo
            .create(MenuPackage {
                id: None,
                name: (*name).to_string(),
                description: Some((*description).to_string()),
                price_per_person: *price_per_person,
                min_guests: *min_guests,
                max_guests: *max_guests,
                is_active: true,
            })
            .await?;
        out.push(package);
    }

    for (package_idx, item_idx, quantity, required) in PACKAGE_ITEMS {
        let package_id = record_id(&out[*package_idx].id, "package")?;
        let item_id = record_id(&items[*item_idx].id, "menu item")?;
        repo.add_item(&package_id, &item_id, *quantity, *required)
            .await?;
    }

    Ok(out)
}

async fn seed_ingredients(
    repo: &IngredientRepository,
    suppliers: &[Supplier],
) -> AppResult<Vec<Ingredient>> {
    let mut out = Vec::with_capacity(INGREDIENTS.len());
    for (idx, (name, unit, cost_per_unit)) in INGREDIENTS.iter().enumerate() {
        // 轮转分配首选供应商
        let supplier = suppliers[idx % suppliers.len()].id.clone();
        let ingredient = repo
            .create(Ingredient {
                id: None,
                name: (*name).to_string(),
                unit: (*unit).to_string(),
                cost_per_unit: *cost_per_unit,
                supplier,
            })
            .await?;
        out.push(ingredient);
    }
    Ok(out)
}

async fn seed_recipes(
    repo: &RecipeRepository,
    items: &[MenuItem],
    ingredients: &[Ingredient],
) -> AppResult<()> {
    for (item_idx, name, yield_servings, prep_minutes, bom) in RECIPES {
        let menu_item = record_id(&items[*item_idx].id, "menu item")?;
        let recipe = repo
            .create(Recipe {
                id: None,
                menu_item,
                name: (*name).to_string(),
                yield_servings: *yield_servings,
                prep_minutes: *prep_minutes,
                instructions: None,
            })
            .await?;
        let recipe_id = record_id(&recipe.id, "recipe")?;

        for (ingredient_idx, quantity, unit) in *bom {
            let ingredient_id = record_id(&ingredients[*ingredient_idx].id, "ingredient")?;
            repo.add_ingredient(&recipe_id, &ingredient_id, *quantity, unit)
                .await?;
        }
    }
    Ok(())
}

async fn seed_equipment(repo: &EquipmentRepository) -> AppResult<Vec<Equipment>> {
    let mut out = Vec::with_capacity(EQUIPMENT.len());
    for (name, category, quantity, notes) in EQUIPMENT {
        let row = repo
            .create(Equipment {
                id: None,
                name: (*name).to_string(),
                category: (*category).to_string(),
                quantity: *quantity,
                notes: notes.map(str::to_string),
            })
            .await?;
        out.push(row);
    }
    Ok(out)
}

async fn seed_vehicles(repo: &VehicleRepository) -> AppResult<Vec<Vehicle>> {
    let mut out = Vec::with_capacity(VEHICLES.len());
    for (name, plate, vehicle_type, refrigerated) in VEHICLES {
        let vehicle = repo
            .create(Vehicle {
                id: None,
                name: (*name).to_string(),
                plate: (*plate).to_string(),
                vehicle_type: (*vehicle_type).to_string(),
                refrigerated: *refrigerated,
            })
            .await?;
        out.push(vehicle);
    }
    Ok(out)
}

async fn seed_suppliers(repo: &SupplierRepository) -> AppResult<Vec<Supplier>> {
    let mut out = Vec::with_capacity(SUPPLIERS.len());
    for (name, contact, email, phone, address) in SUPPLIERS {
        let supplier = repo
            .create(Supplier {
                id: None,
                name: (*name).to_string(),
                contact_name: Some((*contact).to_string()),
                email: Some((*email).to_string()),
                phone: Some((*phone).to_string()),
                address: Some((*address).to_string()),
                is_active: true,
            })
            .await?;
        out.push(supplier);
    }
    Ok(out)
}
