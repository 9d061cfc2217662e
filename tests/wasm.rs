#![cfg(feature = "wasm")]

use htmldiff::{Match, wasm::*};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_diff() {
    assert_eq!(
        diff("<p>hello world</p>", "<p>hello there world</p>"),
        "<p>hello <ins>there </ins>world</p>"
    );
    assert_eq!(diff("<p>same</p>", "<p>same</p>"), "<p>same</p>");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_tokenize() {
    assert_eq!(tokenize("<p>Hi, you</p>"), vec!["<p>", "Hi", ",", " ", "you", "</p>"]);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_find_matching_blocks() {
    let before = tokenize("<p>abc</p>");
    let after = tokenize("<p>xyz</p>");

    assert_eq!(
        find_matching_blocks(before, after),
        vec![Match::new(0, 0, 1), Match::new(2, 2, 1)]
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_operations_round_trip_through_js_types() {
    let before = tokenize("<p>abc</p>");
    let after = tokenize("<p>xyz</p>");

    let Ok(operations) = calculate_operations(Some(before.clone()), Some(after.clone())) else {
        panic!("both token arrays are present");
    };

    assert_eq!(
        operations.iter().map(JsOperation::action).collect::<Vec<_>>(),
        vec!["equal", "replace", "equal"]
    );
    assert_eq!(operations[1].start_in_before(), 1);
    assert_eq!(operations[1].end_in_before(), 2);

    let Ok(rendered) = render_operations(before, after, operations) else {
        panic!("operations were calculated for these tokens");
    };
    assert_eq!(rendered, "<p><del>abc</del><ins>xyz</ins></p>");
}

// `JsError` can only be constructed when running inside a JS engine
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test]
fn test_operations_of_other_tokens_are_an_error() {
    let Ok(operations) =
        calculate_operations(Some(tokenize("<p>a b c</p>")), Some(tokenize("<p>a x c</p>")))
    else {
        panic!("both token arrays are present");
    };

    assert!(render_operations(tokenize("<p>a</p>"), tokenize("<p>b</p>"), operations).is_err());
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test]
fn test_missing_tokens_are_an_error() {
    assert!(calculate_operations(None, Some(tokenize("<p>a</p>"))).is_err());
}
