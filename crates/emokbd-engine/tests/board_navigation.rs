use emokbd_engine::{Activation, Board, Layout, NamedLayout, PageKind, RecentStore};
use emokbd_types::{GroupBuilder, Item, Mark};

const CORNE: &str = "
JDUAX PHLMW
CTIEO BNRSG
?,VFQ YKZ.-
";

const NUMPAD: &str = "
789
456
123
";

fn emoji(symbol: &str, code: &str, sub: &str, label: &str, tags: &str) -> Item {
    Item::new(symbol)
        .with_code(code)
        .with_category("animals & nature", sub)
        .with_label(label)
        .with_tags(tags)
}

fn corpus() -> Vec<Item> {
    let mut items = vec![
        emoji("🐒", "1F412", "animal-mammal", "monkey", "monkey, primate"),
        emoji("🦍", "1F98D", "animal-mammal", "gorilla", "gorilla, primate"),
        emoji("🐕", "1F415", "animal-mammal", "dog", "dog, pet"),
        emoji("🦜", "1F99C", "animal-bird", "parrot", "bird, pirate, talk"),
        emoji("🐧", "1F427", "animal-bird", "penguin", "bird, penguin"),
    ];
    // enough filler to need several pages on the numpad
    items.extend((0..30).map(|n| {
        emoji(
            &char::from_u32(0x2600 + n).unwrap().to_string(),
            &format!("{:X}", 0x2600 + n),
            "misc",
            &format!("filler {n}"),
            "",
        )
    }));
    items
}

fn groups(corpus: &[Item]) -> Vec<Item> {
    let mut mammals = GroupBuilder::new("").label("Mammals");
    let mut birds = GroupBuilder::new("").label("Birds");
    let mut misc = GroupBuilder::new("☀").label("Misc");
    for item in corpus {
        match item.subcategory.as_str() {
            "animal-mammal" => mammals.push(item.clone()),
            "animal-bird" => birds.push(item.clone()),
            _ => misc.push(item.clone()),
        };
    }
    vec![mammals.finish(), birds.finish(), misc.finish()]
}

fn board_with(recent: RecentStore) -> Board {
    let layouts = vec![
        NamedLayout::new("Corne", "🦴", Layout::parse(CORNE).unwrap()),
        NamedLayout::new("Numpad", "🔢", Layout::parse(NUMPAD).unwrap()),
    ];
    let corpus = corpus();
    let groups = groups(&corpus);
    Board::new(layouts, "corne", corpus, groups, recent).unwrap()
}

fn board() -> Board {
    board_with(RecentStore::in_memory())
}

#[test]
fn push_pop_restores_page_offset_and_key() {
    let mut board = board();
    board.select_layout_by_name("numpad").unwrap();
    board.set_cursor_to_key('6').unwrap();
    assert_eq!(board.activate_current(false), Activation::Entered(PageKind::Group));
    assert_eq!(board.page_title(), "Misc");
    board.scroll(1);
    assert_eq!(board.offset(), 9);
    board.set_cursor_to_key('5').unwrap();

    board.push_board("Temporary", vec![Item::new("x")]);
    assert_eq!(board.offset(), 0);
    assert_eq!(board.current_key(), '7');
    assert_eq!(board.depth(), 2);

    assert!(board.pop_board());
    assert_eq!(board.page_title(), "Misc");
    assert_eq!(board.offset(), 9);
    assert_eq!(board.current_key(), '5');
}

#[test]
fn pop_falls_back_to_first_key_when_slot_is_gone() {
    let mut board = board_with(RecentStore::in_memory());
    board.push_board(
        "Short",
        vec![Item::new("a").with_code("61"), Item::new("b").with_code("62")],
    );
    board.set_cursor_to_key('D').unwrap();
    board.recent_add();
    board.pop_board();

    // recent list holds a single entry, the cursor key 'D' is unbound there
    board.activate('J', false).unwrap();
    assert!(board.is_recent());
    board.set_cursor_to_key('D').unwrap();
    board.push_board("Inner", vec![]);
    board.pop_board();
    assert!(board.is_recent());
    assert_eq!(board.current_key(), 'J');
}

#[test]
fn scroll_clamps_to_last_page() {
    let mut board = board();
    board.select_layout_by_name("Numpad").unwrap();
    board.activate('6', false).unwrap();
    assert_eq!(board.items().len(), 30);

    assert_eq!(board.scroll(-1), 0);
    assert_eq!(board.page_of_pages(), (1, 4));
    for _ in 0..10 {
        board.scroll(1);
    }
    assert_eq!(board.offset(), 27);
    assert_eq!(board.page_of_pages(), (4, 4));
    assert_eq!(board.mapping().len(), 3);
}

#[test]
fn search_filters_with_and_across_tokens() {
    let mut board = board();
    let count = board.search("ani,mam primate");
    assert_eq!(count, 2);
    let symbols: Vec<&str> = board.items().iter().map(|i| i.symbol.as_str()).collect();
    assert_eq!(symbols, ["🐒", "🦍"]);
    assert!(board.items().iter().all(|i| i.search_score > 0));

    // the corpus itself carries no scores
    assert!(board.all_items().iter().all(|i| i.search_score == 0));

    assert_eq!(board.search(""), board.all_items().len());
    assert_eq!(board.items(), board.all_items());
}

#[test]
fn search_generates_unknown_code_points() {
    let mut board = board();
    assert_eq!(board.search("+1F9A9"), 1);
    let item = board.get_emoji().unwrap();
    assert_eq!(item.symbol, "🦩");
    assert_eq!(item.code, "1F9A9");

    assert_eq!(board.search("+nothex"), 0);
    assert!(board.get_emoji().is_none());
}

#[test]
fn selected_items_land_in_recent_list() {
    let mut board = board();
    board.search("parrot");
    let Activation::Selected(item) = board.activate('J', false).unwrap() else {
        panic!("expected a selection");
    };
    assert_eq!(item.symbol, "🦜");
    assert!(board.recent_add());

    board.pop_board();
    assert_eq!(board.activate('J', false).unwrap(), Activation::Entered(PageKind::Recent));
    let entry = board.get_emoji().unwrap();
    assert_eq!(entry.symbol, "🦜");
    assert_eq!(entry.usage_weight, 10);
    assert_eq!(entry.mark, "10");
}

#[test]
fn recent_list_persists_between_boards() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent.txt");

    {
        let mut board = board_with(RecentStore::open(&path));
        board.activate('A', false).unwrap();
        assert_eq!(board.page_title(), "Mammals");
        for _ in 0..12 {
            board.activate('J', false).unwrap();
            board.recent_add();
        }
        board.activate('D', false).unwrap();
        board.recent_add();
    }

    let board = board_with(RecentStore::open(&path));
    let recent = board.recent().items();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].symbol, "🐒");
    assert_eq!(recent[0].usage_weight, 100);
    assert_eq!(recent[0].mark, Mark::FAVORITE);
    assert_eq!(recent[1].symbol, "🦍");
    assert_eq!(recent[1].usage_weight, 10);
}

#[test]
fn settings_page_swaps_layout_and_keeps_slot() {
    let mut board = board();
    assert_eq!(board.activate('U', false).unwrap(), Activation::Entered(PageKind::Settings));
    let labels: Vec<&str> = board.items().iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["Corne", "Numpad"]);

    assert_eq!(
        board.activate('D', false).unwrap(),
        Activation::LayoutChanged("Numpad".into())
    );
    assert_eq!(board.layout().key_count(), 9);
    assert_eq!(board.current_key(), '8');
    assert_eq!(board.items()[1].mark, Mark::ACTIVE);

    board.pop_board();
    // 'U' was slot 2 on the corne layout
    assert_eq!(board.current_key(), '9');
    assert!(board.select_layout(5).is_err());
}
