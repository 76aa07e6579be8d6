//! Load and save transforms between [`PermissionMatrix`] and stored rows.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use super::engine::PermissionMatrix;
use crate::domain::{MenuNode, PermissionFlags, PermissionRow, PermissionState};

/// Reads the five primary flags of a stored row.
///
/// Rows written before the granular columns existed only carry the legacy
/// `read`/`write`/`full` columns. When none of the primary flags is set but a
/// legacy column is, the primary flags are rebuilt from the legacy ones.
pub fn flags_from_row(row: &PermissionRow) -> PermissionFlags {
    let primary = row.primary_flags();
    if primary.has_any() || !(row.can_read || row.can_write || row.can_full) {
        return primary;
    }

    if row.can_full {
        return PermissionFlags::all();
    }

    let mut flags = PermissionFlags::none();
    if row.can_read || row.can_write {
        flags.view_category = true;
        flags.read_data = true;
    }
    if row.can_write {
        flags.create_data = true;
        flags.edit_own = true;
    }
    flags
}

impl PermissionMatrix {
    /// Seeds a matrix for `menus` from a persisted snapshot. Menus without a
    /// row start with every flag off; rows for unknown menus are dropped.
    /// Legacy-only rows are upgraded.
    pub fn from_rows(menus: &[MenuNode], rows: &[PermissionRow]) -> Self {
        Self::seed(menus, rows, flags_from_row)
    }

    /// Same as [`PermissionMatrix::from_rows`] for rows coming from a client
    /// save. Only the primary flags are read, so stale derived columns can
    /// never grant anything.
    pub fn from_primary_rows(menus: &[MenuNode], rows: &[PermissionRow]) -> Self {
        Self::seed(menus, rows, PermissionRow::primary_flags)
    }

    fn seed(
        menus: &[MenuNode],
        rows: &[PermissionRow],
        flags_of: fn(&PermissionRow) -> PermissionFlags,
    ) -> Self {
        let by_menu: HashMap<Uuid, &PermissionRow> =
            rows.iter().map(|row| (row.menu_id, row)).collect();

        let states: Vec<PermissionState> = menus
            .iter()
            .map(|menu| {
                let flags = by_menu
                    .get(&menu.id)
                    .map(|&row| flags_of(row))
                    .unwrap_or_default();
                PermissionState::new(menu, flags)
            })
            .collect();

        let unknown = rows
            .iter()
            .filter(|row| !menus.iter().any(|m| m.id == row.menu_id))
            .count();
        if unknown > 0 {
            debug!("Dropped {} permission rows for menus not in the catalog", unknown);
        }

        PermissionMatrix::new(states)
    }

    /// One row per menu, in catalog order, with derived columns filled in.
    pub fn to_rows(&self) -> Vec<PermissionRow> {
        self.states().iter().map(PermissionRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PermissionToggle;

    fn catalog() -> Vec<MenuNode> {
        vec![
            MenuNode::category(Uuid::from_u128(1), "관리자", None),
            MenuNode::page(Uuid::from_u128(2), "관리자", "역할 관리", "/admin/roles"),
            MenuNode::page(Uuid::from_u128(3), "관리자", "체크리스트", "/admin/checklists"),
        ]
    }

    #[test]
    fn test_round_trip_is_exact() {
        let menus = catalog();
        let matrix = PermissionMatrix::empty_for(&menus)
            .apply_toggle(&Uuid::from_u128(1), PermissionToggle::ReadData)
            .apply_toggle(&Uuid::from_u128(3), PermissionToggle::EditOthers)
            .apply_toggle(&Uuid::from_u128(2), PermissionToggle::EditOwn);

        let rows = matrix.to_rows();
        let reloaded = PermissionMatrix::from_rows(&menus, &rows);

        assert_eq!(reloaded, matrix);
        assert_eq!(reloaded.to_rows(), rows);
    }

    #[test]
    fn test_missing_rows_default_to_none() {
        let menus = catalog();
        let rows = vec![PermissionRow::from_flags(Uuid::from_u128(2), &PermissionFlags::all())];

        let matrix = PermissionMatrix::from_rows(&menus, &rows);

        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.get(&Uuid::from_u128(1)).unwrap().flags, PermissionFlags::none());
        assert_eq!(matrix.get(&Uuid::from_u128(2)).unwrap().flags, PermissionFlags::all());
        assert_eq!(matrix.get(&Uuid::from_u128(3)).unwrap().flags, PermissionFlags::none());
    }

    #[test]
    fn test_rows_for_unknown_menus_are_dropped() {
        let menus = catalog();
        let rows = vec![PermissionRow::from_flags(Uuid::from_u128(99), &PermissionFlags::all())];
        let matrix = PermissionMatrix::from_rows(&menus, &rows);
        assert!(matrix.get(&Uuid::from_u128(99)).is_none());
        assert_eq!(matrix, PermissionMatrix::empty_for(&menus));
    }

    #[test]
    fn test_order_follows_catalog_not_rows() {
        let menus = catalog();
        let mut rows = PermissionMatrix::empty_for(&menus).to_rows();
        rows.reverse();
        let matrix = PermissionMatrix::from_rows(&menus, &rows);
        let ids: Vec<_> = matrix.states().iter().map(|s| s.menu_id).collect();
        assert_eq!(ids, vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]);
    }

    #[test]
    fn test_legacy_rows_are_upgraded() {
        let legacy = |read, write, full| PermissionRow {
            menu_id: Uuid::nil(),
            can_view_category: false,
            can_read_data: false,
            can_create_data: false,
            can_edit_own: false,
            can_edit_others: false,
            can_read: read,
            can_write: write,
            can_full: full,
        };

        assert_eq!(flags_from_row(&legacy(false, false, true)), PermissionFlags::all());
        assert_eq!(
            flags_from_row(&legacy(true, false, false)),
            PermissionFlags { view_category: true, read_data: true, ..PermissionFlags::none() }
        );
        let write = flags_from_row(&legacy(false, true, false));
        assert!(write.create_data && write.edit_own && write.read_data && write.view_category);
        assert!(!write.edit_others);
        assert_eq!(flags_from_row(&legacy(false, false, false)), PermissionFlags::none());
    }

    #[test]
    fn test_client_rows_ignore_derived_columns() {
        let menus = catalog();
        let stale = PermissionRow {
            can_read: true,
            can_write: true,
            can_full: true,
            ..PermissionRow::from_flags(Uuid::from_u128(2), &PermissionFlags::none())
        };

        let matrix = PermissionMatrix::from_primary_rows(&menus, &[stale]);
        assert_eq!(matrix, PermissionMatrix::empty_for(&menus));
        assert!(matrix.to_rows().iter().all(|row| !row.can_full && !row.can_read));

        // The same row read back from the store is a legacy row.
        let loaded = PermissionMatrix::from_rows(&menus, &[stale]);
        assert_eq!(loaded.get(&Uuid::from_u128(2)).unwrap().flags, PermissionFlags::all());
    }

    #[test]
    fn test_primary_flags_win_over_legacy_columns() {
        let row = PermissionRow {
            can_full: true,
            ..PermissionRow::from_flags(
                Uuid::nil(),
                &PermissionFlags { view_category: true, ..PermissionFlags::none() },
            )
        };
        assert_eq!(
            flags_from_row(&row),
            PermissionFlags { view_category: true, ..PermissionFlags::none() }
        );
    }
}
