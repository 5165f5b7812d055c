//! `navmenu active <item-url> <current-url>`.

use navmenu_core::url_model::is_active;

pub fn run_active(item_url: &str, current_url: &str) {
    if is_active(item_url, current_url) {
        println!("active");
    } else {
        println!("inactive");
    }
}
