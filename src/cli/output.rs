// Output formatting utilities

use crate::models::Order;
use std::collections::HashSet;
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

// Background colors for the two group bands
const ANSI_BG_CYAN: &str = "\x1b[46m";
const ANSI_BG_GREEN: &str = "\x1b[42m";

// Fallback background for alternating rows when banding is off
const ANSI_BG_BRIGHT_BLACK: &str = "\x1b[100m";

// Fixed column widths; the detail column absorbs whatever terminal width
// is left over
const DUE_WIDTH: usize = 10;
const EXPIRY_WIDTH: usize = 10;
const RECEPTION_WIDTH: usize = 6;
const CUSTOMER_WIDTH: usize = 14;
const PRODUCT_WIDTH: usize = 20;
const QTY_WIDTH: usize = 4;
const REQ_WIDTH: usize = 10;
const PREP_WIDTH: usize = 5;
const OUT_WIDTH: usize = 3;

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    // Try terminal_size crate first (most reliable, works after resize)
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    // Fallback to COLUMNS environment variable (set by most shells)
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    // Default fallback - reasonable default for most terminals
    120
}

/// Background escape for one board row.
///
/// With banding on, the group band picks the color: band 0 is cyan,
/// band 1 is green. With banding off (or no band assigned) rows fall
/// back to plain alternation so adjacent lines stay distinguishable.
fn row_background(order: &Order, row_index: usize, color_enabled: bool) -> Option<&'static str> {
    if color_enabled {
        match order.group_color_index {
            Some(0) => Some(ANSI_BG_CYAN),
            Some(_) => Some(ANSI_BG_GREEN),
            None => None,
        }
    } else if row_index % 2 == 1 {
        Some(ANSI_BG_BRIGHT_BLACK)
    } else {
        None
    }
}

/// Truncate to a maximum number of characters, marking the cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Pad or truncate to an exact column width.
fn cell(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

fn detail_width(terminal_width: usize) -> usize {
    let fixed = DUE_WIDTH
        + EXPIRY_WIDTH
        + RECEPTION_WIDTH
        + CUSTOMER_WIDTH
        + PRODUCT_WIDTH
        + QTY_WIDTH
        + REQ_WIDTH
        + PREP_WIDTH
        + OUT_WIDTH;
    // 9 separators of two spaces between 10 columns
    let separators = 18;
    terminal_width.saturating_sub(fixed + separators).clamp(8, 40)
}

fn format_row(order: &Order, detail_w: usize) -> String {
    let expiry = match (&order.expiry_primary, &order.expiry_secondary) {
        (Some(p), Some(s)) => format!("{} {}", p, s),
        (Some(p), None) => p.clone(),
        (None, Some(s)) => s.clone(),
        (None, None) => String::new(),
    };
    let reception = order
        .reception_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let preparer = match order.preparer_id {
        Some(p) if p != 0 => p.to_string(),
        _ => "-".to_string(),
    };
    let departed = if order.has_departed() { "out" } else { "" };

    [
        cell(&order.due_date.format("%Y-%m-%d").to_string(), DUE_WIDTH),
        cell(&expiry, EXPIRY_WIDTH),
        cell(&reception, RECEPTION_WIDTH),
        cell(order.customer_name.as_deref().unwrap_or(""), CUSTOMER_WIDTH),
        cell(order.product_name.as_deref().unwrap_or(""), PRODUCT_WIDTH),
        cell(&order.quantity.to_string(), QTY_WIDTH),
        cell(order.requirements.as_deref().unwrap_or(""), REQ_WIDTH),
        cell(order.detail.as_deref().unwrap_or(""), detail_w),
        cell(&preparer, PREP_WIDTH),
        cell(departed, OUT_WIDTH),
    ]
    .join("  ")
}

/// Render the board as a table.
///
/// `color_enabled` should already account for TTY detection; escapes are
/// emitted only when it is true or the alternation fallback kicks in on
/// a TTY (the caller passes `use_ansi` for that gate).
pub fn format_board(orders: &[Order], color_enabled: bool, use_ansi: bool, terminal_width: usize) -> String {
    let detail_w = detail_width(terminal_width);

    let header = [
        cell("Due", DUE_WIDTH),
        cell("Expiry", EXPIRY_WIDTH),
        cell("Recv#", RECEPTION_WIDTH),
        cell("Customer", CUSTOMER_WIDTH),
        cell("Product", PRODUCT_WIDTH),
        cell("Qty", QTY_WIDTH),
        cell("Req", REQ_WIDTH),
        cell("Detail", detail_w),
        cell("Prep", PREP_WIDTH),
        cell("Out", OUT_WIDTH),
    ]
    .join("  ");

    let mut out = String::new();
    if use_ansi {
        out.push_str(&format!("{}{}{}\n", ANSI_BOLD, header, ANSI_RESET));
    } else {
        out.push_str(&header);
        out.push('\n');
    }

    for (row_index, order) in orders.iter().enumerate() {
        let line = format_row(order, detail_w);
        match row_background(order, row_index, color_enabled).filter(|_| use_ansi) {
            Some(bg) => out.push_str(&format!("{}{}{}\n", bg, line, ANSI_RESET)),
            None => {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    out
}

/// Summary line under the table.
pub fn format_summary(orders: &[Order], store_total: i64) -> String {
    let receptions: HashSet<Option<i64>> =
        orders.iter().map(|o| o.reception_number).collect();
    format!(
        "{} lines in {} receptions ({} orders in store)",
        orders.len(),
        receptions.len(),
        store_total
    )
}
