use serde::{Deserialize, Serialize};

use kitchenpos_core::{DomainError, DomainResult, Entity, EntityKind, MenuGroupId};

/// Entity: MenuGroup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    id: MenuGroupId,
    name: String,
}

/// Command: CreateMenuGroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMenuGroup {
    pub menu_group_id: MenuGroupId,
    pub name: String,
}

impl MenuGroup {
    pub fn create(cmd: CreateMenuGroup) -> DomainResult<Self> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::invalid_value("menu group name cannot be empty"));
        }
        Ok(Self {
            id: cmd.menu_group_id,
            name: cmd.name,
        })
    }

    pub fn id_typed(&self) -> MenuGroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for MenuGroup {
    type Id = MenuGroupId;
    const KIND: EntityKind = EntityKind::MenuGroup;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
