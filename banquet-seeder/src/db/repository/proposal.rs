//! Proposal Repository
//!
//! ACCEPTED ⟺ signed_by/signed_at 双向强制; 客户姓名经由 event.client
//! 用户行解析后快照 (而不是读取一个从不存在的内嵌对象)。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    Event, MenuPackage, Proposal, ProposalCreate, ProposalLineItem, ProposalMenu, ProposalStatus,
    User,
};
use crate::utils::money;

const PROPOSAL_TABLE: &str = "proposal";
const PROPOSAL_MENU_TABLE: &str = "proposal_menu";
const PROPOSAL_LINE_ITEM_TABLE: &str = "proposal_line_item";

#[derive(Clone)]
pub struct ProposalRepository {
    base: BaseRepository,
}

impl ProposalRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a proposal with its package snapshot and line items
    pub async fn create(&self, data: ProposalCreate) -> RepoResult<Proposal> {
        // Signature invariant, both directions
        match data.status {
            ProposalStatus::Accepted => {
                if data.signed_by.is_none() || data.signed_at.is_none() {
                    return Err(RepoError::Validation(
                        "ACCEPTED proposal requires signed_by and signed_at".to_string(),
                    ));
                }
            }
            _ => {
                if data.signed_by.is_some() || data.signed_at.is_some() {
                    return Err(RepoError::Validation(format!(
                        "{:?} proposal must not carry a signature",
                        data.status
                    )));
                }
            }
        }

        let event: Option<Event> = self.base.db().select(data.event.clone()).await?;
        let event = event
            .ok_or_else(|| RepoError::NotFound(format!("Event {} not found", data.event)))?;

        let package: Option<MenuPackage> = self.base.db().select(data.package.clone()).await?;
        let package = package
            .ok_or_else(|| RepoError::NotFound(format!("Package {} not found", data.package)))?;

        if !package.accepts_guest_count(event.guest_count) {
            return Err(RepoError::Validation(format!(
                "Event '{}' has {} guests, outside package '{}' range [{}, {}]",
                event.name,
                event.guest_count,
                package.name,
                package.min_guests,
                package.max_guests
            )));
        }

        // Resolve the client display name through the event's client link
        let client: Option<User> = self.base.db().select(event.client.clone()).await?;
        let client_name = client
            .ok_or_else(|| RepoError::NotFound(format!("Client {} not found", event.client)))?
            .name;

        let mut line_totals = Vec::with_capacity(data.line_items.len());
        for (description, quantity, unit_price) in &data.line_items {
            money::validate_amount(*unit_price, description)?;
            if *quantity <= 0 {
                return Err(RepoError::Validation(format!(
                    "quantity for '{description}' must be positive, got {quantity}"
                )));
            }
            line_totals.push(money::line_total(*unit_price, *quantity));
        }

        let menu_subtotal = money::line_total(package.price_per_person, event.guest_count);
        let total = money::sum(
            std::iter::once(menu_subtotal).chain(line_totals.iter().copied()),
        );

        let proposal = Proposal {
            id: None,
            event: data.event,
            client_name,
            status: data.status,
            valid_until: data.valid_until,
            sent_at: data.sent_at,
            total,
            signed_by: data.signed_by,
            signed_at: data.signed_at,
        };
        let created: Option<Proposal> = self
            .base
            .db()
            .create(PROPOSAL_TABLE)
            .content(proposal)
            .await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create proposal".to_string()))?;
        let proposal_id = created
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Proposal row without id".to_string()))?;

        let menu = ProposalMenu {
            id: None,
            proposal: proposal_id.clone(),
            package: package.id.clone().ok_or_else(|| {
                RepoError::Database("Package row without id".to_string())
            })?,
            package_name: package.name.clone(),
            price_per_person: package.price_per_person,
        };
        let _: Option<ProposalMenu> = self
            .base
            .db()
            .create(PROPOSAL_MENU_TABLE)
            .content(menu)
            .await?;

        for ((description, quantity, unit_price), line_total) in
            data.line_items.into_iter().zip(line_totals)
        {
            let item = ProposalLineItem {
                id: None,
                proposal: proposal_id.clone(),
                description,
                quantity,
                unit_price,
                line_total,
            };
            let _: Option<ProposalLineItem> = self
                .base
                .db()
                .create(PROPOSAL_LINE_ITEM_TABLE)
                .content(item)
                .await?;
        }

        Ok(created)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Proposal>> {
        let proposals: Vec<Proposal> = self
            .base
            .db()
            .query("SELECT * FROM proposal ORDER BY valid_until")
            .await?
            .take(0)?;
        Ok(proposals)
    }

    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count_table(PROPOSAL_TABLE).await
    }

    pub async fn count_menus(&self) -> RepoResult<usize> {
        self.base.count_table(PROPOSAL_MENU_TABLE).await
    }

    pub async fn count_line_items(&self) -> RepoResult<usize> {
        self.base.count_table(PROPOSAL_LINE_ITEM_TABLE).await
    }

    /// Remove proposals with their menu snapshots and line items
    pub async fn clear(&self) -> RepoResult<()> {
        self.base.clear_table(PROPOSAL_LINE_ITEM_TABLE).await?;
        self.base.clear_table(PROPOSAL_MENU_TABLE).await?;
        self.base.clear_table(PROPOSAL_TABLE).await
    }
}
