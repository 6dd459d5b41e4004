//! Menu Repositories (items, packages, package composition)

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuPackage, PackageItem};
use crate::utils::money::validate_amount;
use crate::utils::validation::{MAX_NAME_LEN, validate_positive, validate_required_text};

const MENU_ITEM_TABLE: &str = "menu_item";
const MENU_PACKAGE_TABLE: &str = "menu_package";
const PACKAGE_ITEM_TABLE: &str = "package_item";

// =============================================================================
// Menu Item Repository
// =============================================================================

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, item: MenuItem) -> RepoResult<MenuItem> {
        validate_required_text(&item.name, "menu item name", MAX_NAME_LEN)?;
        validate_amount(item.price, "price")?;

        let created: Option<MenuItem> =
            self.base.db().create(MENU_ITEM_TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_active = true ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(MENU_ITEM_TABLE).await
    }

    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(MENU_ITEM_TABLE).await
    }
}

// =============================================================================
// Menu Package Repository (owns the package_item join rows)
// =============================================================================

#[derive(Clone)]
pub struct MenuPackageRepository {
    base: BaseRepository,
}

impl MenuPackageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, package: MenuPackage) -> RepoResult<MenuPackage> {
        validate_required_text(&package.name, "package name", MAX_NAME_LEN)?;
        validate_amount(package.price_per_person, "price_per_person")?;
        validate_positive(package.min_guests, "min_guests")?;
        if package.max_guests < package.min_guests {
            return Err(RepoError::Validation(format!(
                "max_guests ({}) must be >= min_guests ({})",
                package.max_guests, package.min_guests
            )));
        }

        let created: Option<MenuPackage> = self
            .base
            .db()
            .create(MENU_PACKAGE_TABLE)
            .content(package)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu package".to_string()))
    }

    /// Attach a menu item to a package (join row with quantity + flag)
    pub async fn add_item(
        &self,
        package: &RecordId,
        menu_item: &RecordId,
        quantity: i32,
        is_required: bool,
    ) -> RepoResult<PackageItem> {
        validate_positive(quantity, "quantity")?;

        let item: Option<MenuItem> = self.base.db().select(menu_item.clone()).await?;
        if item.is_none() {
            return Err(RepoError::NotFound(format!(
                "Menu item {menu_item} not found"
            )));
        }

        let row = PackageItem {
            id: None,
            package: package.clone(),
            menu_item: menu_item.clone(),
            quantity,
            is_required,
        };
        let created: Option<PackageItem> = self
            .base
            .db()
            .create(PACKAGE_ITEM_TABLE)
            .content(row)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create package item".to_string()))
    }

    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<MenuPackage>> {
        let package: Option<MenuPackage> = self.base.db().select(id.clone()).await?;
        Ok(package)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<MenuPackage>> {
        let packages: Vec<MenuPackage> = self
            .base
            .db()
            .query("SELECT * FROM menu_package WHERE is_active = true ORDER BY price_per_person")
            .await?
            .take(0)?;
        Ok(packages)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(MENU_PACKAGE_TABLE).await
    }

    pub async fn count_items(&self) -> RepoResult<usize> {
        self.base.count_table(PACKAGE_ITEM_TABLE).await
    }

    /// Remove packages and their composition rows
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(PACKAGE_ITEM_TABLE).await?;
        self.base.clear_table(MENU_PACKAGE_TABLE).await
    }
}
