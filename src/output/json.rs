//! JSON output for calculation results.

use crate::models::SubnetResult;
use std::error::Error;

/// Render the result as pretty-printed JSON.
pub fn to_json(result: &SubnetResult) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(result).map_err(|e| format!("Error serializing JSON: {e}").into())
}
