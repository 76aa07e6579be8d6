//! Built-in menu catalog.
//!
//! Used when the stored catalog cannot be loaded so the role editor stays
//! usable. Ids are fixed so permissions saved against them survive restarts.

use uuid::Uuid;

use crate::domain::MenuNode;

pub const OPERATIONS_CATEGORY: &str = "업무";
pub const ADMIN_CATEGORY: &str = "관리자";

const OPERATIONS_ID: u128 = 0x1000;
const CHECKLIST_ID: u128 = 0x1001;
const HARDWARE_ASSET_ID: u128 = 0x1002;
const SECURITY_INSPECTION_ID: u128 = 0x1003;
const INVESTMENT_ID: u128 = 0x1004;
const ADMIN_ID: u128 = 0x2000;
const ROLE_MANAGEMENT_ID: u128 = 0x2001;

pub fn default_menu_catalog() -> Vec<MenuNode> {
    vec![
        MenuNode::category(Uuid::from_u128(OPERATIONS_ID), OPERATIONS_CATEGORY, Some("briefcase")),
        MenuNode::page(Uuid::from_u128(CHECKLIST_ID), OPERATIONS_CATEGORY, "체크리스트", "/checklists")
            .with_description("Checklist records"),
        MenuNode::page(Uuid::from_u128(HARDWARE_ASSET_ID), OPERATIONS_CATEGORY, "하드웨어 자산", "/assets/hardware")
            .with_description("Hardware asset records"),
        MenuNode::page(Uuid::from_u128(SECURITY_INSPECTION_ID), OPERATIONS_CATEGORY, "보안 점검", "/security/inspections")
            .with_description("Security inspection records"),
        MenuNode::page(Uuid::from_u128(INVESTMENT_ID), OPERATIONS_CATEGORY, "투자", "/investments")
            .with_description("Investment records"),
        MenuNode::category(Uuid::from_u128(ADMIN_ID), ADMIN_CATEGORY, Some("shield")),
        MenuNode::page(Uuid::from_u128(ROLE_MANAGEMENT_ID), ADMIN_CATEGORY, "역할 관리", "/admin/roles")
            .with_description("Roles and permissions"),
    ]
}
