use serde::{Deserialize, Serialize};

/// Request to run a maintenance script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ScriptRunDto {
    pub script: String,
}
