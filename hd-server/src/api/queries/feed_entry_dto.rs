use crate::api::queries::query_dto::QueryDto;

use hd_core::mask_identifier;
use hd_db::FeedRow;

use serde::Serialize;

/// Public feed entry: the query plus its author's masked identifier
#[derive(Debug, Serialize)]
pub struct FeedEntryDto {
    #[serde(flatten)]
    pub query: QueryDto,
    pub identifier: String,
}

impl From<FeedRow> for FeedEntryDto {
    fn from(row: FeedRow) -> Self {
        Self {
            query: row.query.into(),
            identifier: mask_identifier(&row.identifier),
        }
    }
}
