use wasm_bindgen::prelude::*;

use crate::{Action, HtmlDiffError, Operation};

/// Wrapper type to expose `Operation` to JS.
///
/// Ranges are half-open. `action` is one of `"equal"`, `"insert"`,
/// `"delete"` and `"replace"`.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsOperation {
    action: String,
    start_in_before: usize,
    end_in_before: usize,
    start_in_after: usize,
    end_in_after: usize,
}

#[wasm_bindgen]
impl JsOperation {
    #[must_use]
    pub fn action(&self) -> String { self.action.clone() }

    #[wasm_bindgen(js_name = startInBefore)]
    #[must_use]
    pub fn start_in_before(&self) -> usize { self.start_in_before }

    #[wasm_bindgen(js_name = endInBefore)]
    #[must_use]
    pub fn end_in_before(&self) -> usize { self.end_in_before }

    #[wasm_bindgen(js_name = startInAfter)]
    #[must_use]
    pub fn start_in_after(&self) -> usize { self.start_in_after }

    #[wasm_bindgen(js_name = endInAfter)]
    #[must_use]
    pub fn end_in_after(&self) -> usize { self.end_in_after }
}

impl From<Operation> for JsOperation {
    fn from(operation: Operation) -> Self {
        let action = match operation.action {
            Action::Equal => "equal",
            Action::Insert => "insert",
            Action::Delete => "delete",
            Action::Replace => "replace",
        };

        JsOperation {
            action: action.to_owned(),
            start_in_before: operation.before.start,
            end_in_before: operation.before.end,
            start_in_after: operation.after.start,
            end_in_after: operation.after.end,
        }
    }
}

impl TryFrom<JsOperation> for Operation {
    type Error = HtmlDiffError;

    fn try_from(operation: JsOperation) -> Result<Self, Self::Error> {
        let action = match operation.action.as_str() {
            "equal" => Action::Equal,
            "insert" => Action::Insert,
            "delete" => Action::Delete,
            "replace" => Action::Replace,
            _ => {
                return Err(HtmlDiffError::UnknownAction {
                    action: operation.action,
                });
            }
        };

        Ok(Operation {
            action,
            before: operation.start_in_before..operation.end_in_before,
            after: operation.start_in_after..operation.end_in_after,
        })
    }
}
