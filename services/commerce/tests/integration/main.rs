mod customer_test;
mod helpers;
mod product_test;
