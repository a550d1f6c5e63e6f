//! UI panel modules extracted from the main app update loop.

/// Left panel: filter controls and the snippet list.
pub(super) mod browser;
/// Top bar and bottom status bar surfaces.
pub(super) mod chrome;
/// Delete confirmation modal.
pub(super) mod confirm;
/// Central panel: snippet detail view and the create/edit form.
pub(super) mod detail;
/// Transient toast notifications.
pub(super) mod toasts;
