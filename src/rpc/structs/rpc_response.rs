use std::marker::PhantomData;
use serde::Deserialize;

/// The `{"result": ..., "arguments": ...}` envelope every method answers with.
///
/// `arguments` stays untyped until `result` reports success, so a failing
/// command with an unexpected payload is still a command error.
#[derive(Deserialize, Debug)]
#[serde(bound = "")]
pub struct RpcResponse<T> {
    pub result: String,
    pub arguments: Option<serde_json::Value>,
    #[serde(skip)]
    pub(crate) payload: PhantomData<T>,
}
