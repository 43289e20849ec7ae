use serde::{Deserialize, Serialize};

use crate::error::{PlaneError, PlaneResult};

use super::Profile;

pub const PROFILE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileJsonContractV1 {
    pub schema_version: u32,
    pub profile: Profile,
}

impl Profile {
    pub fn to_json_contract_v1_pretty(&self) -> PlaneResult<String> {
        let payload = ProfileJsonContractV1 {
            schema_version: PROFILE_JSON_SCHEMA_V1,
            profile: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlaneError::InvalidData(format!("failed to serialize profile contract v1: {e}"))
        })
    }

    /// Loads either a versioned contract payload or a bare profile object.
    pub fn from_json_compat_str(input: &str) -> PlaneResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            PlaneError::InvalidData(format!("failed to parse profile json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value)
                .map_err(|e| PlaneError::InvalidData(format!("invalid profile json: {e}")));
        }

        let payload: ProfileJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| PlaneError::InvalidData(format!("invalid profile contract json: {e}")))?;
        if payload.schema_version != PROFILE_JSON_SCHEMA_V1 {
            return Err(PlaneError::InvalidData(format!(
                "unsupported profile schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.profile)
    }
}
