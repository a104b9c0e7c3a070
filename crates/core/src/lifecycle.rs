//! Asset lifecycle status constants and derivation rules.
//!
//! An asset's `status` is not freely caller-controlled. Two rules apply, and
//! they are deliberately asymmetric:
//!
//! - On create, a missing assignee forces [`STATUS_IN_STOCK`].
//! - On update, only a *transition* from assigned to unassigned forces
//!   [`STATUS_UNASSIGNED`]; an asset that was never assigned keeps whatever
//!   status the merged request carries.

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Newly registered hardware with nobody assigned.
pub const STATUS_IN_STOCK: &str = "inStock";
/// Hardware in use by a person. Counted as "usage" on the dashboard.
pub const STATUS_ASSIGNED: &str = "Assigned";
/// Hardware held in storage. Counted as "stock" on the dashboard.
pub const STATUS_STOCK: &str = "Stock";
/// Hardware whose assignee was removed.
pub const STATUS_UNASSIGNED: &str = "Unassigned";
/// Retired hardware. The row is kept for history.
pub const STATUS_DISPOSED: &str = "disposed";

/// Statuses the lifecycle rules and dashboard know about. Other values are
/// accepted verbatim.
pub const KNOWN_STATUSES: &[&str] = &[
    STATUS_IN_STOCK,
    STATUS_ASSIGNED,
    STATUS_STOCK,
    STATUS_UNASSIGNED,
    STATUS_DISPOSED,
];

/// Software rows whose `expiredstatus` equals this are counted as expired.
pub const SOFTWARE_EXPIRED: &str = "Yes";

// ---------------------------------------------------------------------------
// Derivation rules
// ---------------------------------------------------------------------------

/// Status to persist for a newly created asset.
///
/// `assignee` must already be normalised (blank strings mapped to `None`).
/// With an assignee the requested status is kept verbatim, including `None`.
pub fn status_on_create(assignee: Option<&str>, requested: Option<&str>) -> Option<String> {
    match assignee {
        Some(_) => requested.map(str::to_string),
        None => Some(STATUS_IN_STOCK.to_string()),
    }
}

/// Status to persist after merging an update into an existing asset.
///
/// `previous_assignee` is the stored value before the update, `merged_assignee`
/// and `merged_status` are the values after overlaying the request.
pub fn status_on_update(
    previous_assignee: Option<&str>,
    merged_assignee: Option<&str>,
    merged_status: Option<&str>,
) -> Option<String> {
    if previous_assignee.is_some() && merged_assignee.is_none() {
        return Some(STATUS_UNASSIGNED.to_string());
    }
    merged_status.map(str::to_string)
}

/// Whether `status` is one of [`KNOWN_STATUSES`].
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_without_assignee_forces_in_stock() {
        assert_eq!(
            status_on_create(None, Some(STATUS_ASSIGNED)).as_deref(),
            Some(STATUS_IN_STOCK)
        );
        assert_eq!(status_on_create(None, None).as_deref(), Some(STATUS_IN_STOCK));
        assert_eq!(
            status_on_create(None, Some("Broken")).as_deref(),
            Some(STATUS_IN_STOCK)
        );
    }

    #[test]
    fn create_with_assignee_keeps_requested_status() {
        assert_eq!(
            status_on_create(Some("U1"), Some(STATUS_ASSIGNED)).as_deref(),
            Some(STATUS_ASSIGNED)
        );
        assert_eq!(
            status_on_create(Some("U1"), Some("On loan")).as_deref(),
            Some("On loan")
        );
        assert_eq!(status_on_create(Some("U1"), None), None);
    }

    #[test]
    fn update_clearing_assignee_forces_unassigned() {
        assert_eq!(
            status_on_update(Some("U1"), None, Some(STATUS_ASSIGNED)).as_deref(),
            Some(STATUS_UNASSIGNED)
        );
        assert_eq!(
            status_on_update(Some("U1"), None, None).as_deref(),
            Some(STATUS_UNASSIGNED)
        );
    }

    #[test]
    fn update_without_transition_keeps_merged_status() {
        // Never assigned: no forced status, unlike create.
        assert_eq!(
            status_on_update(None, None, Some(STATUS_ASSIGNED)).as_deref(),
            Some(STATUS_ASSIGNED)
        );
        // Still assigned, possibly to someone else.
        assert_eq!(
            status_on_update(Some("U1"), Some("U2"), Some(STATUS_ASSIGNED)).as_deref(),
            Some(STATUS_ASSIGNED)
        );
        // Newly assigned.
        assert_eq!(
            status_on_update(None, Some("U3"), Some(STATUS_STOCK)).as_deref(),
            Some(STATUS_STOCK)
        );
    }

    #[test]
    fn known_statuses() {
        assert!(is_known_status(STATUS_DISPOSED));
        assert!(is_known_status("inStock"));
        assert!(!is_known_status("instock"));
    }
}
