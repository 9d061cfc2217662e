//! Expose the `htmldiff` crate's functionality to WebAssembly.
//!
//! Tokens cross the boundary as plain strings and are classified again on
//! the Rust side, so a token sequence returned by `tokenize` can be passed
//! back to `calculateOperations` and `renderOperations` unchanged.

use wasm_bindgen::prelude::*;

use crate::{Match, Operation, Token};

mod types;

pub use types::JsOperation;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::diff`.
#[wasm_bindgen]
#[must_use]
pub fn diff(before: &str, after: &str) -> String {
    set_panic_hook();

    crate::diff(before, after)
}

/// WASM wrapper around `crate::tokenize` returning the tokens' text.
#[wasm_bindgen]
#[must_use]
pub fn tokenize(html: &str) -> Vec<String> {
    set_panic_hook();

    crate::tokenize(html)
        .iter()
        .map(|token| token.text().to_owned())
        .collect()
}

/// WASM wrapper around `crate::find_matching_blocks`.
#[wasm_bindgen(js_name = findMatchingBlocks)]
#[must_use]
pub fn find_matching_blocks(before: Vec<String>, after: Vec<String>) -> Vec<Match> {
    set_panic_hook();

    crate::find_matching_blocks(&to_tokens(&before), &to_tokens(&after))
}

/// WASM wrapper around `crate::try_calculate_operations`.
///
/// # Errors
///
/// If either of the token arrays is `undefined` or `null`.
#[wasm_bindgen(js_name = calculateOperations)]
pub fn calculate_operations(
    before: Option<Vec<String>>,
    after: Option<Vec<String>>,
) -> Result<Vec<JsOperation>, JsError> {
    set_panic_hook();

    let before = before.as_deref().map(to_tokens);
    let after = after.as_deref().map(to_tokens);

    let operations = crate::try_calculate_operations(before.as_deref(), after.as_deref())?;

    Ok(operations.into_iter().map(JsOperation::from).collect())
}

/// WASM wrapper around `crate::try_render_operations`.
///
/// # Errors
///
/// If an operation has an unknown action or doesn't fit the token arrays.
#[wasm_bindgen(js_name = renderOperations)]
pub fn render_operations(
    before: Vec<String>,
    after: Vec<String>,
    operations: Vec<JsOperation>,
) -> Result<String, JsError> {
    set_panic_hook();

    let operations = operations
        .into_iter()
        .map(Operation::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(crate::try_render_operations(
        &to_tokens(&before),
        &to_tokens(&after),
        &operations,
    )?)
}

fn to_tokens(texts: &[String]) -> Vec<Token<'_>> {
    texts.iter().map(|text| Token::from(text.as_str())).collect()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
