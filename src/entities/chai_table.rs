use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Directory (relative to the media root) that catalog images live under.
pub const UPLOAD_TO: &str = "chai_images/";
pub const NAME_MAX_LEN: usize = 100;
/// Stored image paths, `chai_images/` prefix included.
pub const IMAGE_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chai_chaitable")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Path relative to the media root, always under `chai_images/`
    pub image: String,
    pub date_added: DateTimeUtc,
    pub chai_type: ChaiType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            date_added: Set(chrono::Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum ChaiType {
    #[sea_orm(string_value = "ml")]
    #[serde(rename = "ml")]
    Masala,
    #[sea_orm(string_value = "gr")]
    #[serde(rename = "gr")]
    Ginger,
    #[sea_orm(string_value = "ki")]
    #[serde(rename = "ki")]
    Kiwi,
    #[sea_orm(string_value = "pt")]
    #[serde(rename = "pt")]
    Plain,
    #[sea_orm(string_value = "eh")]
    #[serde(rename = "eh")]
    Elachi,
}

impl ChaiType {
    /// All choices, in the order they are offered.
    pub fn all() -> [ChaiType; 5] {
        [
            ChaiType::Masala,
            ChaiType::Ginger,
            ChaiType::Kiwi,
            ChaiType::Plain,
            ChaiType::Elachi,
        ]
    }

    pub fn code(self) -> &'static str {
        match self {
            ChaiType::Masala => "ml",
            ChaiType::Ginger => "gr",
            ChaiType::Kiwi => "ki",
            ChaiType::Plain => "pt",
            ChaiType::Elachi => "eh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChaiType::Masala => "Masale Tea",
            ChaiType::Ginger => "Ginger Tea",
            ChaiType::Kiwi => "Kiwi Tea",
            ChaiType::Plain => "Plain Tea",
            ChaiType::Elachi => "Elachi Tea",
        }
    }
}

impl fmt::Display for ChaiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChaiType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChaiType::all()
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| ValidationError::UnknownChaiType(s.to_string()))
    }
}
