#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::net::types::Recipient;

/// Rows per page; the original page fixes this (no length selector).
pub const PAGE_SIZE: usize = 10;

/// Sortable display columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortColumn {
    #[default]
    RecipientName,
    EndpointConfName,
}

/// Pagination, sort, and filter state for the recipient table.
///
/// Serializable so it can be persisted in localStorage (via
/// `util::view_prefs`) and survive a full-page session. The recipient
/// list is not part of this state; [`TableState::visible`] derives the
/// displayed window from the latest reload snapshot on every render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableState {
    pub filter: String,
    pub sort: SortColumn,
    pub ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: SortColumn::RecipientName,
            ascending: true,
            page: 0,
            page_size: PAGE_SIZE,
        }
    }
}

/// The derived window of rows to render, plus the numbers for the
/// summary line and pagination controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<Recipient>,
    /// Current page, clamped into range.
    pub page: usize,
    pub page_count: usize,
    /// 1-based index of the first visible row; 0 when empty.
    pub first_row: usize,
    pub last_row: usize,
    /// Row count after filtering.
    pub total: usize,
}

impl TableState {
    /// Sort by `column`, flipping direction when it is already active.
    /// Resets to the first page.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort == column {
            self.ascending = !self.ascending;
        } else {
            self.sort = column;
            self.ascending = true;
        }
        self.page = 0;
    }

    /// Replace the filter text and reset to the first page.
    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.page = 0;
    }

    fn matches(&self, recipient: &Recipient) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        recipient.recipient_name.to_lowercase().contains(&needle)
            || recipient
                .endpoint_conf
                .endpoint_conf_name
                .to_lowercase()
                .contains(&needle)
    }

    /// Derive the visible window from the current reload snapshot:
    /// filter, sort, clamp the page into range, and slice.
    pub fn visible(&self, rows: &[Recipient]) -> TableView {
        let mut filtered: Vec<Recipient> =
            rows.iter().filter(|r| self.matches(r)).cloned().collect();

        filtered.sort_by(|a, b| {
            let ord = match self.sort {
                SortColumn::RecipientName => a
                    .recipient_name
                    .to_lowercase()
                    .cmp(&b.recipient_name.to_lowercase()),
                SortColumn::EndpointConfName => a
                    .endpoint_conf
                    .endpoint_conf_name
                    .to_lowercase()
                    .cmp(&b.endpoint_conf.endpoint_conf_name.to_lowercase())
                    // Stable display order for equal endpoint names.
                    .then_with(|| a.recipient_name.cmp(&b.recipient_name)),
            };
            if self.ascending { ord } else { ord.reverse() }
        });

        let total = filtered.len();
        let page_size = self.page_size.max(1);
        let page_count = total.div_ceil(page_size);
        let page = self.page.min(page_count.saturating_sub(1));

        let start = page * page_size;
        let end = (start + page_size).min(total);
        let rows = filtered[start..end].to_vec();

        TableView {
            first_row: if total == 0 { 0 } else { start + 1 },
            last_row: end,
            rows,
            page,
            page_count,
            total,
        }
    }
}
