pub mod bar_list;
pub mod page_header;
pub mod record_table;
pub mod search_input;
pub mod stat_card;

/// Series colors shared by the chart-like widgets.
pub const COLOR_PALETTE: [&str; 8] = [
    "#6366f1", "#10b981", "#f43f5e", "#f59e0b", "#8b5cf6", "#06b6d4", "#fb923c", "#ec4899",
];
