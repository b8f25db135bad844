use sea_orm_migration::prelude::*;

use shopfront_commerce_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
