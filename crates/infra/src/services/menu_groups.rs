use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kitchenpos_core::MenuGroupId;
use kitchenpos_menu_groups::{CreateMenuGroup, MenuGroup};

use super::ServiceError;
use crate::store::MenuGroupRepository;

/// Read representation of a menu group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroupResponse {
    pub id: MenuGroupId,
    pub name: String,
}

impl From<&MenuGroup> for MenuGroupResponse {
    fn from(group: &MenuGroup) -> Self {
        Self {
            id: group.id_typed(),
            name: group.name().to_string(),
        }
    }
}

#[derive(Debug)]
pub struct MenuGroupService<G> {
    menu_groups: G,
}

impl<G> MenuGroupService<G>
where
    G: MenuGroupRepository,
{
    pub fn new(menu_groups: G) -> Self {
        Self { menu_groups }
    }

    pub fn create(&self, request: CreateMenuGroup) -> Result<MenuGroupResponse, ServiceError> {
        debug!(menu_group_id = %request.menu_group_id, "creating menu group");
        let group = MenuGroup::create(request)?;
        let saved = self.menu_groups.save(group)?;
        info!(menu_group_id = %saved.id_typed(), "menu group created");
        Ok(MenuGroupResponse::from(&saved))
    }

    pub fn list(&self) -> Result<Vec<MenuGroupResponse>, ServiceError> {
        Ok(self
            .menu_groups
            .find_all()?
            .iter()
            .map(MenuGroupResponse::from)
            .collect())
    }
}
