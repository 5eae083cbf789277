/// Literal heading line that opens the essentials-checklist sub-block.
pub(crate) const CHECKLIST_HEADER: &str = "Essentials Checklist";
/// Literal heading line that opens the picnic-essentials sub-block.
pub(crate) const PICNIC_HEADER: &str = "Picnic Essentials";

/// Section mode of the per-segment line scan.
///
/// States are mutually exclusive and never carry across plan segments. A
/// line that is not a list item always drops back to [`SectionMode::Default`]
/// before its key is considered, so a sub-block ends at the first top-level
/// line after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SectionMode {
    /// Scanning top-level field lines
    #[default]
    Default,
    /// Inside an `Essentials Checklist` sub-block
    Checklist,
    /// Inside a `Picnic Essentials` sub-block
    Picnic,
}

impl SectionMode {
    /// The mode in effect after seeing a line with the given shape and
    /// marker-stripped key. Header lines switch modes but emit no field.
    pub(crate) fn next(self, is_list_item: bool, clean_key: &str) -> SectionMode {
        let mode = if is_list_item { self } else { SectionMode::Default };
        match clean_key {
            CHECKLIST_HEADER => SectionMode::Checklist,
            PICNIC_HEADER => SectionMode::Picnic,
            _ => mode,
        }
    }
}
