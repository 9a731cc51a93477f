use std::path::{Component, Path};

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, Set};

use crate::entities::chai_table::{self, ChaiType, IMAGE_MAX_LEN, NAME_MAX_LEN, UPLOAD_TO};
use crate::error::ValidationError;

pub use crate::entities::chai_table::Model as Chai;

/// Input for a new catalog entry.
#[derive(Debug, Clone)]
pub struct NewChai {
    pub name: String,
    pub image: String,
    pub chai_type: ChaiType,
}

impl NewChai {
    /// Check the input and return it normalised: trimmed name, image path
    /// placed under the upload directory.
    pub fn validate(&self) -> Result<NewChai, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong { max: NAME_MAX_LEN });
        }

        Ok(NewChai {
            name: name.to_string(),
            image: upload_path(&self.image)?,
            chai_type: self.chai_type,
        })
    }

    pub async fn insert<C: ConnectionTrait>(&self, db: &C) -> Result<Chai, InsertError> {
        let valid = self.validate()?;

        let mut new_chai = <chai_table::ActiveModel as ActiveModelBehavior>::new();
        new_chai.name = Set(valid.name);
        new_chai.image = Set(valid.image);
        new_chai.chai_type = Set(valid.chai_type);

        Ok(new_chai.insert(db).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl From<InsertError> for crate::error::Error {
    fn from(e: InsertError) -> Self {
        match e {
            InsertError::Invalid(v) => v.into(),
            InsertError::Db(d) => d.into(),
        }
    }
}

/// Resolve a user-supplied image reference to a storage path under `chai_images/`.
fn upload_path(image: &str) -> Result<String, ValidationError> {
    let image = image.trim();
    if image.is_empty() {
        return Err(ValidationError::EmptyImage);
    }

    let path = Path::new(image);
    let relative_only = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !relative_only {
        return Err(ValidationError::InvalidImagePath(image.to_string()));
    }

    let image = image.trim_start_matches("./");
    let stored = if image.starts_with(UPLOAD_TO) {
        if image.len() == UPLOAD_TO.len() {
            return Err(ValidationError::EmptyImage);
        }
        image.to_string()
    } else {
        format!("{UPLOAD_TO}{image}")
    };

    if stored.chars().count() > IMAGE_MAX_LEN {
        return Err(ValidationError::ImagePathTooLong { max: IMAGE_MAX_LEN });
    }
    Ok(stored)
}
