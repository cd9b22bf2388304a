//! Initializer layering and bridging between vocabularies

use motion_expression::{ChainSettings, Expression, Language, Term};

use crate::common::{Caption, Captions, Spacing, caption_texts};

#[test]
fn base_caption_uses_base_defaults() {
    let caption = Captions::new().caption();
    assert_eq!(
        caption.intentions(),
        vec![Caption {
            text: "caption".to_owned(),
            emphasis: 1,
        }]
    );
}

#[test]
fn derived_initializer_overrides_base_field() {
    let headline = Captions::new().headline();
    let intentions = headline.intentions();
    assert_eq!(intentions[0].text, "caption");
    assert_eq!(intentions[0].emphasis, 5);
}

#[test]
fn modifiers_stack_on_layered_defaults() {
    let headline = Captions::new().headline().louder().unwrap().louder().unwrap();
    assert_eq!(headline.intentions()[0].emphasis, 7);
    assert_eq!(headline.state().work().depth(), 3);
}

#[test]
fn whole_slice_modifier_sees_every_seed() {
    let numbered = Captions::new().captions(3).numbered().unwrap();
    assert_eq!(
        caption_texts(&numbered),
        vec!["caption 1", "caption 2", "caption 3"]
    );
}

#[test]
fn translate_continues_in_another_vocabulary() {
    let captions = Captions::new().caption().text("title").unwrap().and().unwrap();
    let spacing: Spacing = captions.translate().unwrap();
    let spacer = spacing.spacer();

    assert_eq!(caption_texts(&spacer), vec!["title", "-"]);

    let back: Captions = spacer.and().unwrap().translate().unwrap();
    let closing = back.caption().text("end").unwrap();
    assert_eq!(caption_texts(&closing), vec!["title", "-", "end"]);
}

#[test]
fn translated_language_keeps_settings() {
    let captions = Captions::with_settings(ChainSettings::memoized());
    let spacing: Spacing = captions.translate().unwrap();
    assert!(spacing.state().settings().cache().is_memoized());
    assert!(spacing.spacer().state().work().is_memoized());
}
