// src/types/cv_data.rs
//! CV data structures served by the portfolio API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::recency::{sort_by_date, sort_by_recency, Dated, YearRange};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    // Personal info
    pub name: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub contact: Contact,

    // Professional info
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub languages: Vec<Language>,
    pub awards: Vec<Award>,

    pub certificates: Vec<Certificate>,
    pub badges: Vec<Badge>,

    pub summary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub issuer: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A professional certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: DateTime<Utc>,
    pub description: String,
    pub image_url: String,
}

/// An earned badge or achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: DateTime<Utc>,
    pub description: String,
    pub image_url: String,
}

impl YearRange for Education {
    fn year_range(&self) -> &str {
        &self.year
    }
}

impl YearRange for Experience {
    fn year_range(&self) -> &str {
        &self.year
    }
}

impl Dated for Certificate {
    fn date(&self) -> DateTime<Utc> {
        self.issue_date
    }
}

impl Dated for Badge {
    fn date(&self) -> DateTime<Utc> {
        self.issue_date
    }
}

impl Cv {
    /// Order every timed section most recent first
    pub fn sort_by_recency(&mut self) {
        sort_by_recency(&mut self.education);
        sort_by_recency(&mut self.experience);
        sort_by_date(&mut self.certificates);
        sort_by_date(&mut self.badges);
    }
}
