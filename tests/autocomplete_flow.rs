use std::sync::Arc;

use chat_emoji::{
    extract_trigger, insert, Composer, ComposerAction, ComposerKeybindings,
    ComposerKeybindingsConfig, EmojiCandidate, EmojiIndex, EmojiSearch, KeyOutcome,
    NavigatorState, ResultNavigator,
};
use pretty_assertions::assert_eq;

fn candidates(glyphs: &[&str]) -> Vec<EmojiCandidate> {
    glyphs
        .iter()
        .map(|glyph| EmojiCandidate::new(*glyph, *glyph))
        .collect()
}

#[test]
fn trigger_end_is_always_the_cursor() {
    let cases = [
        ("hello :sm", 9),
        (":a", 2),
        ("x :thumbs_up", 12),
        ("first :a second :b", 18),
        ("mid :wo rd", 7),
    ];
    for (text, cursor) in cases {
        let token = extract_trigger(text, cursor).unwrap_or_else(|| panic!("{text:?}"));
        assert_eq!(token.end, cursor, "{text:?}");
        assert_eq!(&text[token.start..token.start + 1], ":");
    }
}

#[test]
fn space_between_colon_and_cursor_never_triggers() {
    for text in [": sm", "a: b", ":sm x", "x :  "] {
        assert_eq!(extract_trigger(text, text.len()), None, "{text:?}");
    }
}

#[test]
fn forward_steps_land_on_n_mod_k() {
    for k in 1..=5usize {
        let mut navigator = ResultNavigator::new();
        let glyphs: Vec<String> = (0..k).map(|i| i.to_string()).collect();
        let set: Arc<[EmojiCandidate]> = glyphs
            .iter()
            .map(|g| EmojiCandidate::new(g.as_str(), g.as_str()))
            .collect::<Vec<_>>()
            .into();
        navigator.show(set);
        for n in 1..=12usize {
            navigator.select_next();
            assert_eq!(navigator.selected_index(), Some(n % k));
        }
    }
}

#[test]
fn insertion_example() {
    assert_eq!(insert("hello :sm", 6..9, "😄"), "hello 😄 ");
}

#[test]
fn confirming_with_no_results_changes_nothing() {
    let mut composer = Composer::new();
    let request = composer.on_input("hey :zzz", 8).expect("search issued");
    assert!(composer.apply_results(request.ticket, Vec::new()));

    assert_eq!(composer.on_key("Tab"), KeyOutcome::Ignored);
    assert_eq!(composer.buffer().text(), "hey :zzz");
    assert!(!composer.is_selection_mode());

    let mut navigator = ResultNavigator::new();
    navigator.show(Vec::<EmojiCandidate>::new().into());
    assert!(navigator.confirm_selection().is_none());
    assert_eq!(navigator.state(), &NavigatorState::Idle);
}

#[test]
fn stale_search_never_overwrites_newer_query() {
    let mut composer = Composer::new();
    let ab = composer.on_input("say :ab", 7).expect("ab");
    let abc = composer.on_input("say :abc", 8).expect("abc");
    assert_eq!(abc.query, "abc");

    assert!(composer.apply_results(abc.ticket, candidates(&["🔤"])));
    assert!(!composer.apply_results(ab.ticket, candidates(&["🅰️", "🆎"])));

    let view = composer.results_view().expect("abc results shown");
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].glyph, "🔤");
}

#[test]
fn full_flow_with_bundled_index() {
    let index = EmojiIndex::default();
    let mut composer = Composer::new();

    assert!(composer.on_input_with("good morning :sun", 17, &index));
    assert!(composer.is_selection_mode());
    let view = composer.results_view().expect("results");
    let highlighted = view.highlighted_item().expect("highlight").glyph.clone();

    match composer.on_key("Enter") {
        KeyOutcome::Inserted { text, cursor } => {
            assert_eq!(text, format!("good morning {highlighted} "));
            assert_eq!(cursor, text.len());
        }
        other => panic!("expected insertion, got {other:?}"),
    }

    assert_eq!(
        composer.on_key("Enter"),
        KeyOutcome::Submit(format!("good morning {highlighted} "))
    );
}

#[test]
fn query_touching_an_inserted_emoji_is_suppressed() {
    let index = EmojiIndex::default();
    let mut composer = Composer::new();
    composer.on_input_with(":smile", 6, &index);
    let KeyOutcome::Inserted { text, .. } = composer.on_key("Tab") else {
        panic!("expected insertion");
    };

    let edited = format!(":sm{}", text.trim_end());
    assert!(composer.on_input(edited, 3).is_none());
    assert!(!composer.is_selection_mode());
}

#[test]
fn custom_bindings_drive_navigation() {
    let mut config = ComposerKeybindingsConfig::new();
    config.set(ComposerAction::SelectNext, vec!["ctrl+n"]);
    config.set(ComposerAction::SelectPrevious, vec!["ctrl+p"]);
    let mut composer = Composer::with_keybindings(ComposerKeybindings::new(config));

    let request = composer.on_input(":x", 2).expect("search");
    composer.apply_results(request.ticket, candidates(&["1️⃣", "2️⃣", "3️⃣"]));

    assert_eq!(composer.on_key("ArrowDown"), KeyOutcome::Ignored);
    assert_eq!(composer.on_key("Ctrl+N"), KeyOutcome::Navigated);
    assert_eq!(composer.results_view().map(|v| v.highlighted), Some(1));
    assert_eq!(composer.on_key("ctrl+p"), KeyOutcome::Navigated);
    assert_eq!(composer.on_key("ctrl+p"), KeyOutcome::Navigated);
    assert_eq!(composer.results_view().map(|v| v.highlighted), Some(2));
}

#[test]
fn index_search_is_deterministic() {
    let index = EmojiIndex::new(10);
    let first = index.search("heart");
    assert!(!first.is_empty());
    assert!(first.len() <= 10);
    assert_eq!(first, index.search("heart"));
}
