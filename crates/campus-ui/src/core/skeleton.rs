//! Placeholder shapes for loading skeletons.

/// Column count used by `TableRowSkeleton` when none is given.
pub const DEFAULT_TABLE_COLUMNS: usize = 5;

/// Width cycle for table placeholder cells, so rows do not look uniform.
pub const TABLE_CELL_WIDTHS: [&str; 4] = ["w-3/4", "w-1/2", "w-2/3", "w-1/3"];

/// Width class for each of `columns` placeholder cells.
#[must_use]
pub fn table_cell_widths(columns: usize) -> Vec<&'static str> {
    TABLE_CELL_WIDTHS.iter().copied().cycle().take(columns).collect()
}

/// Inline `width`/`height` style for a skeleton block.
#[must_use]
pub fn block_style(width: Option<&str>, height: Option<&str>) -> String {
    let mut style = String::new();
    if let Some(width) = width {
        style.push_str("width:");
        style.push_str(width);
        style.push(';');
    }
    if let Some(height) = height {
        style.push_str("height:");
        style.push_str(height);
        style.push(';');
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_matches_columns() {
        for columns in [0, 1, 3, DEFAULT_TABLE_COLUMNS, 9] {
            assert_eq!(table_cell_widths(columns).len(), columns);
        }
    }

    #[test]
    fn cell_widths_cycle() {
        let widths = table_cell_widths(6);
        assert_eq!(widths[0], widths[4]);
        assert_eq!(widths[1], widths[5]);
    }

    #[test]
    fn block_style_skips_missing_dimensions() {
        assert_eq!(block_style(None, None), "");
        assert_eq!(block_style(Some("4rem"), None), "width:4rem;");
        assert_eq!(
            block_style(Some("100%"), Some("1rem")),
            "width:100%;height:1rem;"
        );
    }
}
