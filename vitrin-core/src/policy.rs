use serde::{Deserialize, Serialize};

/// Console roles, from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Superuser,
    Staff,
    Anonymous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminAction {
    View,
    Add,
    Change,
    Delete,
}

/// Entity families the admin console operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    User,
    Category,
    Product,
    Customer,
    Order,
    Vendor,
}

/// Capability table for the external admin console: (role, entity, action)
/// resolved in one place instead of per-action boolean checks.
///
/// User records are superuser-only. Catalog, customer and order records are
/// open to staff. Vendor records can be viewed by staff but only mutated by
/// a superuser, because vendor rows carry the accrued profit balance.
pub fn is_allowed(role: Role, entity: EntityKind, action: AdminAction) -> bool {
    match (entity, role) {
        (_, Role::Anonymous) => false,
        (EntityKind::User, role) => role == Role::Superuser,
        (EntityKind::Vendor, Role::Staff) => action == AdminAction::View,
        (EntityKind::Vendor, Role::Superuser) => true,
        (
            EntityKind::Category | EntityKind::Product | EntityKind::Customer | EntityKind::Order,
            Role::Staff | Role::Superuser,
        ) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_access() {
        for entity in [
            EntityKind::User,
            EntityKind::Product,
            EntityKind::Order,
            EntityKind::Vendor,
        ] {
            assert!(!is_allowed(Role::Anonymous, entity, AdminAction::View));
        }
    }

    #[test]
    fn test_user_records_are_superuser_only() {
        assert!(is_allowed(Role::Superuser, EntityKind::User, AdminAction::Change));
        assert!(!is_allowed(Role::Staff, EntityKind::User, AdminAction::View));
    }

    #[test]
    fn test_staff_can_manage_catalog_and_orders() {
        assert!(is_allowed(Role::Staff, EntityKind::Product, AdminAction::Add));
        assert!(is_allowed(Role::Staff, EntityKind::Order, AdminAction::Change));
        assert!(is_allowed(Role::Staff, EntityKind::Customer, AdminAction::Delete));
    }

    #[test]
    fn test_staff_can_only_view_vendors() {
        assert!(is_allowed(Role::Staff, EntityKind::Vendor, AdminAction::View));
        assert!(!is_allowed(Role::Staff, EntityKind::Vendor, AdminAction::Change));
        assert!(is_allowed(Role::Superuser, EntityKind::Vendor, AdminAction::Delete));
    }
}
