//! Chains shared across threads

use std::thread;

use motion_expression::{ChainSettings, Expression, Term};
use motion_expression_cli::TextLanguage;

use crate::common::texts;

#[test]
fn threads_branching_from_one_term_do_not_interfere() {
    let shared = TextLanguage::new()
        .term()
        .text("shared")
        .unwrap()
        .and()
        .unwrap()
        .term();

    let results: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|index| {
                let shared = &shared;
                scope.spawn(move || {
                    let branch = shared.text(format!("branch {index}")).unwrap();
                    texts(&branch)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("branch thread panicked"))
            .collect()
    });

    for (index, result) in results.iter().enumerate() {
        assert_eq!(result, &vec!["shared".to_owned(), format!("branch {index}")]);
    }
    assert_eq!(texts(&shared), vec!["shared", "default"]);
}

#[test]
fn concurrent_readers_of_a_memoized_chain_agree() {
    let chain = TextLanguage::with_settings(ChainSettings::memoized())
        .term()
        .text("a")
        .unwrap()
        .and()
        .unwrap()
        .term()
        .text("b")
        .unwrap();
    let expected = vec!["a".to_owned(), "b".to_owned()];

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(texts(&chain), expected);
                }
            });
        }
    });
    assert_eq!(chain.intentions().len(), 2);
}

#[test]
fn terms_can_move_to_another_thread() {
    let term = TextLanguage::new().term().text("moved").unwrap();
    let rendered = thread::spawn(move || texts(&term))
        .join()
        .expect("thread panicked");
    assert_eq!(rendered, vec!["moved"]);
}
