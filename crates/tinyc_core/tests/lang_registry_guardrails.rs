use std::collections::HashMap;

use tinyc_core::lang::keywords;
use tinyc_core::lang::operators;
use tinyc_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for (index, info) in keywords::KEYWORDS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "keyword table out of order at {:?}", info.id);
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(keywords::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate keyword spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
    assert_eq!(keywords::KEYWORDS.len(), 20);
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for (index, info) in operators::OPERATORS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "operator table out of order at {:?}", info.id);
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.spelling, prev, info.id);
        }
    }
}

#[test]
fn word_operators_are_reserved_keywords() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
        let keyword = keywords::from_str(info.spelling)
            .unwrap_or_else(|| panic!("word operator {:?} is not a keyword", info.spelling));
        assert_eq!(keyword.as_operator(), Some(info.id));
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    for (index, info) in punctuation::PUNCTUATION.iter().enumerate() {
        assert_eq!(info.id as usize, index);
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
    }
}

#[test]
fn no_spelling_shared_between_registries() {
    for info in punctuation::PUNCTUATION {
        assert_eq!(operators::from_str(info.canonical), None);
        assert_eq!(keywords::from_str(info.canonical), None);
    }
}
