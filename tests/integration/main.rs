//! End-to-end tests exercising the HTTP surface against in-memory stores.

mod helpers;

mod auth_test;
mod employee_query_test;
