use super::DeletedIds;
use crate::{Client, Envelope, Result};
use serde::{Deserialize, Serialize};

/// A workspace tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub wid: u64,
    pub name: String,
}

#[derive(Serialize)]
struct TagFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    wid: Option<u64>,
    name: &'a str,
}

#[derive(Serialize)]
struct TagBody<'a> {
    tag: TagFields<'a>,
}

impl Client {
    /// Creates a tag in the given workspace.
    pub async fn create_tag(&self, name: &str, workspace_id: u64) -> Result<Tag> {
        let body = TagBody {
            tag: TagFields {
                wid: Some(workspace_id),
                name,
            },
        };
        let response = self.post::<_, Envelope<Tag>>("tags", &body).await?;
        Ok(response.into_data().into_inner())
    }

    /// Renames a tag.
    pub async fn update_tag(&self, id: u64, name: &str) -> Result<Tag> {
        let body = TagBody {
            tag: TagFields { wid: None, name },
        };
        let response = self
            .put::<_, Envelope<Tag>>(format!("tags/{}", id), &body)
            .await?;
        Ok(response.into_data().into_inner())
    }

    /// Deletes a tag.
    pub async fn delete_tag(&self, id: u64) -> Result<()> {
        self.delete::<DeletedIds>(format!("tags/{}", id)).await?;
        Ok(())
    }
}
