use nautilus_core::{Reveal, BLOCK_REVEAL_THRESHOLD, CARD_REVEAL_THRESHOLD};

#[test]
fn thresholds_match_element_kinds() {
    assert_eq!(Reveal::card().threshold(), CARD_REVEAL_THRESHOLD);
    assert_eq!(Reveal::block().threshold(), BLOCK_REVEAL_THRESHOLD);
    assert_eq!(CARD_REVEAL_THRESHOLD, 0.15);
    assert_eq!(BLOCK_REVEAL_THRESHOLD, 0.10);
}

#[test]
fn hidden_until_first_qualifying_sample() {
    let mut reveal = Reveal::block();
    assert!(!reveal.is_visible());
    assert!(!reveal.observe(false, 0.0));
    assert!(!reveal.observe(true, 0.05));
    assert!(!reveal.observe(false, 0.5));
    assert!(!reveal.is_visible());
    assert!(reveal.observe(true, 0.2));
    assert!(reveal.is_visible());
}

#[test]
fn never_reverts_after_scrolling_away() {
    let mut reveal = Reveal::card();
    assert!(reveal.observe(true, 1.0));
    let samples = [(false, 0.0), (true, 0.01), (false, 0.0), (true, 0.9)];
    for (intersecting, ratio) in samples {
        assert!(!reveal.observe(intersecting, ratio));
        assert!(reveal.is_visible());
    }
}
