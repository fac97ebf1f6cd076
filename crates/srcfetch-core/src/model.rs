use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters for one repository fetch run. The credential pair is plumbed
/// through to the listing and clone collaborators; it is never interpreted
/// by the engine itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchParams {
    pub region: String,
    pub target_directory: PathBuf,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteRepo {
    pub name: String,
    pub clone_url: String,
}

/// Configuration-schema declaration for UI/tooling consumers. Not
/// behaviorally load-bearing.
#[derive(Clone, Debug, Serialize)]
pub struct ConnectionMetadata {
    pub connection_type: &'static str,
    pub fields: &'static [&'static str],
}

pub fn connection_metadata() -> ConnectionMetadata {
    ConnectionMetadata {
        connection_type: "AWS",
        fields: &["region", "access_key", "secret_key", "target_directory"],
    }
}

pub fn connection_icon() -> &'static str {
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 20 20">
  <circle cx="10" cy="10" r="10" fill="#252F3E"/>
</svg>"##
}
