use serde::de::DeserializeOwned;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::rpc_response::RpcResponse;

pub const RESULT_SUCCESS: &str = "success";

impl<T: DeserializeOwned> RpcResponse<T> {
    pub fn from_slice(body: &[u8]) -> Result<RpcResponse<T>, RpcError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Unwraps the payload of a successful command. The daemon reports
    /// command failures with HTTP 200 and a descriptive `result`.
    pub fn into_arguments(self, method: &str) -> Result<T, RpcError> {
        if self.result != RESULT_SUCCESS {
            return Err(RpcError::Command(self.result));
        }
        let arguments = self.arguments.ok_or_else(|| RpcError::MissingArguments(method.to_string()))?;
        Ok(serde_json::from_value(arguments)?)
    }
}
