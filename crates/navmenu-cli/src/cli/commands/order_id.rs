//! `navmenu order-id <url>` – order id from an order-details URL.

use navmenu_core::endpoint::parse_order_id;

pub fn run_order_id(url: &str) {
    match parse_order_id(url) {
        Some(id) => println!("{id}"),
        None => println!("none"),
    }
}
