//! The built-in self test should pass against the shipped word list

use phonetic::selftest::{self, FIXTURES};

#[test]
fn test_selftest_passes() {
    let report = selftest::run();
    assert!(report.is_success(), "{}", report.render());
    // Word list check, invalid names, then one check per fixture
    assert_eq!(report.results.len(), FIXTURES.len() + 2);
}

#[test]
fn test_selftest_render() {
    let text = selftest::run().render();
    assert!(text.contains("nato_word_list ... ok"));
    assert!(text.contains("spell_vandeusen ... ok"));
    assert!(text.trim_end().ends_with("OK"));
}
