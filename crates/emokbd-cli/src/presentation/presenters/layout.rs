use emokbd_engine::NamedLayout;

use crate::presentation::view_models::{
    CommandResultViewModel, LayoutEntryViewModel, LayoutListViewModel,
};

pub fn present_layout_list(
    layouts: &[NamedLayout],
    active: &str,
) -> CommandResultViewModel<LayoutListViewModel> {
    let entries = layouts
        .iter()
        .map(|named| LayoutEntryViewModel {
            name: named.name.clone(),
            symbol: named.symbol.clone(),
            keys: named.layout.key_count(),
            rows: named
                .layout
                .rows()
                .map(|row| row.iter().collect::<String>())
                .collect(),
            active: named.name.eq_ignore_ascii_case(active),
        })
        .collect();

    CommandResultViewModel::new(LayoutListViewModel {
        active: active.to_string(),
        layouts: entries,
    })
}
