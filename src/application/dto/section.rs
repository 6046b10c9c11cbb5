use serde::{Deserialize, Serialize};

use crate::domain::entities::SectionKind;

#[derive(Debug, Deserialize)]
pub struct SetFieldRequestDto {
    pub value: String,
}

/// Fixed label set of one section, for building the form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSchemaDto {
    pub key: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldSchemaDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSchemaDto {
    pub key: &'static str,
    pub hint: &'static str,
}

impl From<SectionKind> for SectionSchemaDto {
    fn from(kind: SectionKind) -> Self {
        Self {
            key: kind.key(),
            title: kind.title(),
            fields: kind
                .fields()
                .into_iter()
                .map(|(key, hint)| FieldSchemaDto { key, hint })
                .collect(),
        }
    }
}

/// Schema of every section, in display order
pub fn notebook_schema() -> Vec<SectionSchemaDto> {
    SectionKind::ALL.iter().copied().map(SectionSchemaDto::from).collect()
}
