use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub category: String,

    // Column name is part of the persisted contract.
    #[sea_orm(column_name = "imageFileName")]
    pub image_file_name: String,
}

impl ActiveModelBehavior for ActiveModel {}
