//! Ingredient and Recipe Repositories

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Ingredient, MenuItem, Recipe, RecipeIngredient};
use crate::utils::money::validate_amount;
use crate::utils::validation::{MAX_NAME_LEN, validate_positive, validate_required_text};

const INGREDIENT_TABLE: &str = "ingredient";
const RECIPE_TABLE: &str = "recipe";
const RECIPE_INGREDIENT_TABLE: &str = "recipe_ingredient";

// =============================================================================
// Ingredient Repository
// =============================================================================

#[derive(Clone)]
pub struct IngredientRepository {
    base: BaseRepository,
}

impl IngredientRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, ingredient: Ingredient) -> RepoResult<Ingredient> {
        validate_required_text(&ingredient.name, "ingredient name", MAX_NAME_LEN)?;
        validate_amount(ingredient.cost_per_unit, "cost_per_unit")?;

        let created: Option<Ingredient> = self
            .base
            .db()
            .create(INGREDIENT_TABLE)
            .content(ingredient)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create ingredient".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(INGREDIENT_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(INGREDIENT_TABLE).await
    }
}

// =============================================================================
// Recipe Repository (owns the bill-of-materials rows)
// =============================================================================

#[derive(Clone)]
pub struct RecipeRepository {
    base: BaseRepository,
}

impl RecipeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, recipe: Recipe) -> RepoResult<Recipe> {
        validate_required_text(&recipe.name, "recipe name", MAX_NAME_LEN)?;
        validate_positive(recipe.yield_servings, "yield_servings")?;

        // 配方必须挂在已存在的菜品上
        let item: Option<MenuItem> = self.base.db().select(recipe.menu_item.clone()).await?;
        if item.is_none() {
            return Err(RepoError::NotFound(format!(
                "Menu item {} not found",
                recipe.menu_item
            )));
        }

        let created: Option<Recipe> = self.base.db().create(RECIPE_TABLE).content(recipe).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create recipe".to_string()))
    }

    /// Add a bill-of-materials edge to a recipe
    pub async fn add_ingredient(
        &self,
        recipe: &RecordId,
        ingredient: &RecordId,
        quantity: f64,
        unit: &str,
    ) -> RepoResult<RecipeIngredient> {
        if quantity <= 0.0 {
            return Err(RepoError::Validation(format!(
                "quantity must be positive, got {quantity}"
            )));
        }

        let existing: Option<Ingredient> = self.base.db().select(ingredient.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!(
                "Ingredient {ingredient} not found"
            )));
        }

        let row = RecipeIngredient {
            id: None,
            recipe: recipe.clone(),
            ingredient: ingredient.clone(),
            quantity,
            unit: unit.to_string(),
        };
        let created: Option<RecipeIngredient> = self
            .base
            .db()
            .create(RECIPE_INGREDIENT_TABLE)
            .content(row)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create recipe ingredient".to_string()))
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(RECIPE_TABLE).await
    }

    pub async fn count_ingredients(&self) -> RepoResult<usize> {
        self.base.count_table(RECIPE_INGREDIENT_TABLE).await
    }

    /// Remove recipes and their BOM rows
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(RECIPE_INGREDIENT_TABLE).await?;
        self.base.clear_table(RECIPE_TABLE).await
    }
}
