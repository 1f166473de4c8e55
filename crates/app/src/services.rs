//! Application services — one per collection.
//!
//! Each service is a thin use-case layer over its repository port. There is
//! deliberately almost no logic here: the API's contract is "one request,
//! one storage call, raw result". The only branch in the whole system is
//! [`user_service::UserService::is_admin`].

pub mod order_service;
pub mod product_service;
pub mod review_service;
pub mod user_service;
