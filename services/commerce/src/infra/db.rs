use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel as _, LoaderTrait as _, QueryFilter, QueryOrder, QuerySelect,
    TransactionError, TransactionTrait, sea_query::OnConflict,
};

use shopfront_commerce_schema::{customers, order_products, orders, products};
use shopfront_core::sea_ext::DbErrExt as _;

use crate::domain::repository::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::types::{Customer, CustomerFields, Order, OrderFields, Product, ProductFields};
use crate::error::CommerceError;

// ── Customer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, CommerceError> {
        let models = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .all(&self.db)
            .await
            .context("list customers")?;
        let orders = models
            .load_many(orders::Entity, &self.db)
            .await
            .context("load customer orders")?;
        Ok(models
            .into_iter()
            .zip(orders)
            .map(|(model, orders)| {
                let mut order_ids: Vec<i32> = orders.into_iter().map(|o| o.id).collect();
                order_ids.sort_unstable();
                customer_from_model(model, order_ids)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, CommerceError> {
        let Some(model) = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find customer by id")?
        else {
            return Ok(None);
        };
        let order_ids = order_ids_of(&self.db, model.id)
            .await
            .context("list customer order ids")?;
        Ok(Some(customer_from_model(model, order_ids)))
    }

    async fn create(&self, fields: &CustomerFields) -> Result<Customer, CommerceError> {
        let model = customers::ActiveModel {
            name: Set(fields.name.clone()),
            email: Set(fields.email.clone()),
            address: Set(fields.address.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create customer")?;
        Ok(customer_from_model(model, Vec::new()))
    }

    async fn update(
        &self,
        id: i32,
        fields: &CustomerFields,
    ) -> Result<Option<Customer>, CommerceError> {
        let fields = fields.clone();
        let customer = self
            .db
            .transaction::<_, Option<Customer>, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(model) = customers::Entity::find_by_id(id).one(txn).await? else {
                        return Ok(None);
                    };
                    let mut customer = model.into_active_model();
                    customer.name = Set(fields.name);
                    customer.email = Set(fields.email);
                    customer.address = Set(fields.address);
                    let model = customer.update(txn).await?;
                    let order_ids = order_ids_of(txn, model.id).await?;
                    Ok(Some(customer_from_model(model, order_ids)))
                })
            })
            .await
            .context("update customer")?;
        Ok(customer)
    }

    async fn delete(&self, id: i32) -> Result<bool, CommerceError> {
        let result = customers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete customer")?;
        Ok(result.rows_affected > 0)
    }
}

async fn order_ids_of<C: ConnectionTrait>(db: &C, customer_id: i32) -> Result<Vec<i32>, DbErr> {
    orders::Entity::find()
        .select_only()
        .column(orders::Column::Id)
        .filter(orders::Column::CustomerId.eq(customer_id))
        .order_by_asc(orders::Column::Id)
        .into_tuple::<i32>()
        .all(db)
        .await
}

fn customer_from_model(model: customers::Model, order_ids: Vec<i32>) -> Customer {
    Customer {
        id: model.id,
        name: model.name,
        email: model.email,
        address: model.address,
        order_ids,
    }
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list(&self) -> Result<Vec<Product>, CommerceError> {
        let models = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, CommerceError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, CommerceError> {
        let model = products::ActiveModel {
            product_name: Set(fields.product_name.clone()),
            price: Set(fields.price),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create product")?;
        Ok(product_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<Product>, CommerceError> {
        let fields = fields.clone();
        let model = self
            .db
            .transaction::<_, Option<products::Model>, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(model) = products::Entity::find_by_id(id).one(txn).await? else {
                        return Ok(None);
                    };
                    let mut product = model.into_active_model();
                    product.product_name = Set(fields.product_name);
                    product.price = Set(fields.price);
                    product.update(txn).await.map(Some)
                })
            })
            .await
            .context("update product")?;
        Ok(model.map(product_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, CommerceError> {
        let result = products::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        product_name: model.product_name,
        price: model.price,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, CommerceError> {
        let models = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .context("list orders")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, CommerceError> {
        let model = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        Ok(model.map(order_from_model))
    }

    async fn create(&self, fields: &OrderFields) -> Result<Order, CommerceError> {
        let model = orders::ActiveModel {
            order_date: Set(fields.order_date),
            customer_id: Set(fields.customer_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| customer_reference_error(e, "create order"))?;
        Ok(order_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        fields: &OrderFields,
    ) -> Result<Option<Order>, CommerceError> {
        let fields = fields.clone();
        let model = self
            .db
            .transaction::<_, Option<orders::Model>, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(model) = orders::Entity::find_by_id(id).one(txn).await? else {
                        return Ok(None);
                    };
                    let mut order = model.into_active_model();
                    order.order_date = Set(fields.order_date);
                    order.customer_id = Set(fields.customer_id);
                    order.update(txn).await.map(Some)
                })
            })
            .await
            .map_err(|e| {
                let err = match e {
                    TransactionError::Connection(err) | TransactionError::Transaction(err) => err,
                };
                customer_reference_error(err, "update order")
            })?;
        Ok(model.map(order_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, CommerceError> {
        let result = orders::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete order")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, CommerceError> {
        let models = orders::Entity::find()
            .filter(orders::Column::CustomerId.eq(customer_id))
            .order_by_asc(orders::Column::Id)
            .all(&self.db)
            .await
            .context("list orders by customer")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn list_products(&self, order_id: i32) -> Result<Vec<Product>, CommerceError> {
        let models = products::Entity::find()
            .inner_join(order_products::Entity)
            .filter(order_products::Column::OrderId.eq(order_id))
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .context("list order products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn add_product(&self, order_id: i32, product_id: i32) -> Result<bool, CommerceError> {
        let link = order_products::ActiveModel {
            order_id: Set(order_id),
            product_id: Set(product_id),
        };
        // The composite primary key arbitrates concurrent inserts of the same pair.
        let inserted = order_products::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    order_products::Column::OrderId,
                    order_products::Column::ProductId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("add product to order")?;
        Ok(inserted > 0)
    }

    async fn remove_product(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<bool, CommerceError> {
        let result = order_products::Entity::delete_many()
            .filter(order_products::Column::OrderId.eq(order_id))
            .filter(order_products::Column::ProductId.eq(product_id))
            .exec(&self.db)
            .await
            .context("remove product from order")?;
        Ok(result.rows_affected > 0)
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        order_date: model.order_date,
        customer_id: model.customer_id,
    }
}

/// A dangling `customer_id` surfaces as a foreign-key violation on insert or update.
fn customer_reference_error(err: DbErr, context: &'static str) -> CommerceError {
    if err.is_foreign_key_violation() {
        CommerceError::CustomerNotFound
    } else {
        anyhow::Error::new(err).context(context).into()
    }
}
