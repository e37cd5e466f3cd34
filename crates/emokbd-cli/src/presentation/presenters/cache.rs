use std::path::Path;

use emokbd_corpus::Corpus;

use crate::presentation::view_models::{CacheRebuildViewModel, CommandResultViewModel, StatusBadge};

pub fn present_cache_rebuild(
    corpus: &Corpus,
    cache_dir: &Path,
) -> CommandResultViewModel<CacheRebuildViewModel> {
    CommandResultViewModel::new(CacheRebuildViewModel {
        items: corpus.items.len(),
        variants: corpus.variant_count(),
        groups: corpus.groups.len(),
        cache_dir: cache_dir.display().to_string(),
    })
    .with_badge(StatusBadge::success("Corpus cache rebuilt"))
}
