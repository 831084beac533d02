//! Content area messages

/// Interactions with the focused page content
#[derive(Debug, Clone)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Previous listing page
    PrevPage,
    /// Next listing page
    NextPage,
    /// Enter on a row: open the edit dialog where the page has one
    Confirm,
    /// Open the create dialog (plans, vendors)
    Add,
    /// Open the edit dialog for the highlighted row
    Edit,
    /// Open the delete confirmation (profiles)
    Delete,
    /// Begin feeding keys into the search box
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Keep the keyword and leave search entry
    SearchAccept,
    /// Drop the keyword and leave search entry
    SearchCancel,
    /// Call logs: advance the event facet
    CycleEventFilter,
    /// Call logs: advance the result facet
    CycleResultFilter,
    /// Assignments: advance the days-left bucket
    CycleBucketFilter,
    /// Settings: step the focused value back
    TogglePrev,
    /// Settings: advance the focused value
    ToggleNext,
}
