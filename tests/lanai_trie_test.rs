//! Integration tests for the Lanai Trie public API.

use mauka_dictionary_lib::config::{LoaderConfig, MaukaConfig, PopularityMode};
use mauka_dictionary_lib::data_structures::{
    LanaiTrie, LanaiTrieConfig, TieBreak, WordEntry, ZeroPopularity,
};
use mauka_dictionary_lib::loader::WordLoader;
use proptest::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;
use test_case::test_case;

fn dictionary(words: &[&str]) -> LanaiTrie {
    words.iter().map(|w| WordEntry::new(*w)).collect()
}

#[test_case(&[] => 1; "empty tree")]
#[test_case(&["word"] => 5; "single word")]
#[test_case(&["word", "worg"] => 6; "shared prefix")]
#[test_case(&["info", "information"] => 12; "prefix word")]
fn test_size(words: &[&str]) -> usize {
    dictionary(words).size()
}

#[test_case(&[] => 1; "empty tree")]
#[test_case(&["word"] => 1; "single word")]
#[test_case(&["abc", "xyz"] => 2; "disjoint words")]
#[test_case(&["a", "ab", "abc"] => 1; "chain of prefix words")]
fn test_num_leaves(words: &[&str]) -> usize {
    dictionary(words).num_leaves()
}

#[test_case(&[], "" => 0; "empty tree")]
#[test_case(&["word"], "word" => 4; "single word")]
#[test_case(&["a", "dec", "feaddad"], "feaddad" => 7; "several words")]
fn test_height_and_longest(words: &[&str], longest: &str) -> usize {
    let trie = dictionary(words);
    assert_eq!(trie.longest_word(), longest);
    trie.height()
}

#[test_case("info", "information" ; "remove prefix word")]
#[test_case("information", "info" ; "remove extension")]
#[test_case("car", "cat" ; "remove below branch")]
#[test_case("m", "mat" ; "remove single char")]
fn test_remove_preserves_other(removed: &str, kept: &str) {
    let mut trie = dictionary(&[removed, kept]);
    assert!(trie.remove(removed));
    assert!(!trie.contains(removed));
    assert!(trie.contains(kept));
    assert_eq!(trie.all_words(), vec![kept.to_string()]);
}

#[test]
fn test_phone_scenario_from_word_list() {
    let input = "phone\t484\nphoto\t247\nphotos\t90\nphones\t8\nphysical\t4\npile\t37\ntest\n";
    let mut trie = LanaiTrie::new();
    WordLoader::new(LoaderConfig::default())
        .load_reader(Cursor::new(input), &mut trie)
        .unwrap();

    assert_eq!(
        trie.predict_n("ph", 5),
        vec!["phone", "photo", "photos", "phones", "physical"]
    );
    assert_eq!(trie.predict("p").as_deref(), Some("phone"));
    assert_eq!(trie.predict("q"), None);
}

#[test]
fn test_configured_trie_policies() {
    let mut config = MaukaConfig::default();
    config.trie = LanaiTrieConfig::new()
        .with_zero_popularity(ZeroPopularity::Absent)
        .with_tie_break(TieBreak::ReverseLexicographic);
    config.loader.popularity = PopularityMode::Column;

    let mut trie = mauka_dictionary_lib::build_trie(&config);
    trie.insert_with_popularity("abch", 0);
    trie.insert_with_popularity("abca", 1);
    trie.insert_with_popularity("abcc", 3);
    trie.insert_with_popularity("abcd", 3);

    assert_eq!(trie.popularity("abch"), None);
    assert_eq!(trie.predict_n("abc", 4), vec!["abcd", "abcc", "abca", "abch"]);
}

#[test]
fn test_stats_serialize() {
    let trie = dictionary(&["word", "wdrd"]);
    let json = serde_json::to_value(trie.stats()).unwrap();
    assert_eq!(json["size"], 8);
    assert_eq!(json["maximum_branching"], 2);
    assert_eq!(json["longest_word"], "word");
}

proptest! {
    #[test]
    fn prop_all_words_matches_inserted_set(words in proptest::collection::hash_set("[a-d]{1,6}", 0..50)) {
        let trie: LanaiTrie = words.iter().map(|w| WordEntry::new(w.as_str())).collect();
        let all: HashSet<String> = trie.all_words().into_iter().collect();
        prop_assert_eq!(trie.all_words().len(), words.len());
        prop_assert_eq!(all, words);
    }

    #[test]
    fn prop_num_leaves_bounded_by_words(words in proptest::collection::hash_set("[a-d]{1,6}", 1..50)) {
        let trie: LanaiTrie = words.iter().map(|w| WordEntry::new(w.as_str())).collect();
        prop_assert!(trie.num_leaves() <= trie.len());
        prop_assert!(trie.size() <= 1 + words.iter().map(|w| w.len()).sum::<usize>());
    }
}
