//! Identical inputs must produce identical outputs, across repeated calls
//! and across independently built searchers.

use super::common::{build_searcher, soliloquy_searcher, swapcase, SOLILOQUY};

#[test]
fn repeated_searches_return_identical_results() {
    let searcher = soliloquy_searcher();

    let first = searcher.search("to").unwrap();
    for _ in 0..3 {
        assert_eq!(searcher.search("to").unwrap(), first);
    }
}

#[test]
fn independently_built_searchers_agree() {
    let a = build_searcher(SOLILOQUY);
    let b = build_searcher(SOLILOQUY);

    for query in ["to be", "the", "fortune"] {
        assert_eq!(a.search(query).unwrap(), b.search(query).unwrap());
    }
}

#[test]
fn swapcased_query_returns_identical_results() {
    let searcher = soliloquy_searcher();

    for query in ["to be", "QUESTION", "Slings and Arrows"] {
        let original = searcher.search(query).unwrap();
        let swapped = searcher.search(&swapcase(query)).unwrap();
        assert_eq!(original, swapped, "query {:?}", query);
    }
}

#[test]
fn concurrent_searches_agree_with_serial_results() {
    use std::sync::Arc;

    let searcher = Arc::new(soliloquy_searcher());
    let expected = searcher.search("the").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let searcher = Arc::clone(&searcher);
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(searcher.search("the").unwrap(), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
