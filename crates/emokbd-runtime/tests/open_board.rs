use emokbd_corpus::cache::{GROUPS_CACHE, ITEMS_CACHE};
use emokbd_runtime::{Config, Dirs, Environment, Error};
use emokbd_testing::fixtures::{self, NUMPAD_CONFIG, SAMPLE_GROUPS, SAMPLE_RECENT};
use tempfile::TempDir;

fn environment(temp: &TempDir, config: Config) -> Environment {
    let dirs = Dirs {
        config: temp.path().join("config"),
        state: temp.path().join("state"),
        cache: temp.path().join("cache"),
    };
    Environment::new(dirs, config)
}

fn numpad() -> Config {
    toml::from_str(NUMPAD_CONFIG).unwrap()
}

#[test]
fn board_binds_pseudo_pages_and_groups_to_keys() {
    let temp = TempDir::new().unwrap();
    let env = environment(&temp, numpad());
    fixtures::write_sources(&env.dirs.cache).unwrap();

    let board = env.open_board(None).unwrap();
    assert_eq!(board.layout_name(), "Numpad");
    assert_eq!(board.page_of_pages(), (1, 2));

    let symbol = |key| board.get_emoji_for_key(key).map(|i| i.symbol.clone());
    assert_eq!(symbol('7').as_deref(), Some("⟲"));
    assert_eq!(symbol('9').as_deref(), Some("⚙️"));
    assert_eq!(symbol('4').as_deref(), Some(SAMPLE_GROUPS[0]));
    assert_eq!(symbol('3').as_deref(), Some(SAMPLE_GROUPS[5]));

    assert!(env.dirs.cache.join(ITEMS_CACHE).exists());
    assert!(env.dirs.cache.join(GROUPS_CACHE).exists());
}

#[test]
fn explicit_layout_overrides_config() {
    let temp = TempDir::new().unwrap();
    let env = environment(&temp, Config::default());
    fixtures::write_sources(&env.dirs.cache).unwrap();

    let board = env.open_board(Some("bone corne")).unwrap();
    assert_eq!(board.layout_name(), "Bone Corne");
    assert_eq!(board.current_key(), 'J');
}

#[test]
fn unknown_layout_is_an_engine_error() {
    let temp = TempDir::new().unwrap();
    let env = environment(&temp, Config::default());
    fixtures::write_sources(&env.dirs.cache).unwrap();

    let err = env.open_board(Some("dvorak")).unwrap_err();
    assert!(matches!(err, Error::Engine(_)), "{err:?}");
    assert!(err.to_string().contains("dvorak"), "{}", err);
}

#[test]
fn recent_list_is_read_from_the_state_dir() {
    let temp = TempDir::new().unwrap();
    let env = environment(&temp, numpad());
    fixtures::write_sources(&env.dirs.cache).unwrap();
    std::fs::create_dir_all(&env.dirs.state).unwrap();
    std::fs::write(env.dirs.recent_file(), SAMPLE_RECENT).unwrap();

    let board = env.open_board(None).unwrap();
    let symbols: Vec<&str> = board
        .recent()
        .items()
        .iter()
        .map(|i| i.symbol.as_str())
        .collect();
    assert_eq!(symbols, ["🐒", "😀"]);
}

#[test]
fn missing_sources_are_reported() {
    let temp = TempDir::new().unwrap();
    let env = environment(&temp, Config::default());

    let err = env.open_board(None).unwrap_err();
    assert!(matches!(err, Error::Corpus(_)), "{err:?}");
    assert!(err.to_string().contains("UnicodeData.txt"), "{}", err);
}

#[test]
fn rebuild_replaces_stale_caches() {
    let temp = TempDir::new().unwrap();
    let env = environment(&temp, Config::default());
    fixtures::write_sources(&env.dirs.cache).unwrap();
    std::fs::write(env.dirs.cache.join(ITEMS_CACHE), "😀;1F600;grinning face;a;b;c\n").unwrap();
    std::fs::write(env.dirs.cache.join(GROUPS_CACHE), "😀;1F600\n").unwrap();

    assert_eq!(env.load_corpus().unwrap().items.len(), 1);
    let corpus = env.rebuild_corpus().unwrap();
    assert_eq!(corpus.items.len(), fixtures::SAMPLE_ITEM_COUNT);
    assert_eq!(corpus.groups.len(), fixtures::SAMPLE_GROUP_COUNT);
}
