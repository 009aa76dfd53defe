//! Wire Models
//!
//! Data structures matching the portal backend API. The backend speaks
//! Spanish field names on the wire; everything is renamed here once so
//! the rest of the crate stays in one vocabulary.

use serde::{Deserialize, Serialize};

use schedule_grid::{PersistedItem, Subject};

/// Catalog subject as returned by `GET /catalogos/materias/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectRecord {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// One schedule row as returned inside `GET /horarios/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersistedItemRecord {
    #[serde(rename = "materia_id")]
    pub subject_id: i64,
    #[serde(rename = "hora_grupo", default)]
    pub time_label: Option<String>,
    #[serde(rename = "materia_nombre", default)]
    pub subject_name: Option<String>,
}

/// A persisted schedule, header plus rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleRecord {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<PersistedItemRecord>,
}

/// Body of `POST /horarios/`
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePayload {
    #[serde(rename = "nombre")]
    pub name: String,
    pub items: Vec<PersistedItemPayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersistedItemPayload {
    #[serde(rename = "materia_id")]
    pub subject_id: i64,
    #[serde(rename = "hora_grupo")]
    pub time_label: String,
}

/// Fixed palette cycled over the catalog to color subject cards and cells.
pub const SUBJECT_PALETTE: [&str; 10] = [
    "#ffadad", "#ffd6a5", "#fdffb6", "#caffbf", "#9bf6ff", "#a0c4ff", "#bdb2ff", "#ffc6ff",
    "#ff9aa2", "#e2f0cb",
];

/// Turn catalog records into engine subjects, assigning
/// `palette[index % len]` in catalog order.
pub fn subjects_with_colors(records: Vec<SubjectRecord>) -> Vec<Subject> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Subject::new(
                record.id,
                record.name,
                SUBJECT_PALETTE[index % SUBJECT_PALETTE.len()],
            )
        })
        .collect()
}

/// Engine-side rows for a fetched schedule. Rows without a time label
/// carry nothing reconstructable and are dropped here.
pub fn persisted_items(record: &ScheduleRecord) -> Vec<PersistedItem> {
    record
        .items
        .iter()
        .filter_map(|item| {
            item.time_label.clone().map(|time_label| PersistedItem {
                subject_id: item.subject_id,
                time_label,
                subject_name: item.subject_name.clone(),
            })
        })
        .collect()
}

/// Save-payload rows for serialized grid cells.
pub fn payload_items(items: Vec<PersistedItem>) -> Vec<PersistedItemPayload> {
    items
        .into_iter()
        .map(|item| PersistedItemPayload {
            subject_id: item.subject_id,
            time_label: item.time_label,
        })
        .collect()
}
