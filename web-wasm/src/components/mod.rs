pub mod header;
pub mod search_bar;
pub mod search_results;
pub mod settings_panel;
pub mod status_line;
pub mod watch_list;
