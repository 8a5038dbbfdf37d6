pub mod export;
pub mod preview;

use std::collections::BTreeMap;

use termcal_core::SectionRecord;

/// Group section records by worklist number, keeping input order within
/// each group, so one malformed record only fails its own export.
pub fn group_by_worklist(sections: Vec<SectionRecord>) -> BTreeMap<u32, Vec<SectionRecord>> {
    let mut groups: BTreeMap<u32, Vec<SectionRecord>> = BTreeMap::new();

    for section in sections {
        groups.entry(section.worklist_number).or_default().push(section);
    }

    groups
}
