use domain_suppliers::entity as supplier;
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the product table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub supplier_id: Uuid,
    pub image_id: Option<Uuid>,
    pub price: f64,
    pub available_stock: i32,
    pub last_update_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "supplier::Entity",
        from = "Column::SupplierId",
        to = "supplier::Column::Id"
    )]
    Supplier,
}

impl Related<supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: model.category,
            price: model.price,
            available_stock: model.available_stock,
            last_update_date: model.last_update_date.into(),
            supplier_id: model.supplier_id,
            image_id: model.image_id,
        }
    }
}
