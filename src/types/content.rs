// src/types/content.rs
//! Profile and blog structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cv_data::Contact;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub publish_date: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Same post under another id
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }
}
