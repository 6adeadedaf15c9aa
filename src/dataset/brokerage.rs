// src/dataset/brokerage.rs
//! Brokerage comparison sheet: picker list, Funnel Pilot lookup and the
//! text artifacts built from a picked row.

use crate::config::consts::FUNNEL_PILOT;
use crate::core::sanitize::sanitize_filename;
use super::entry::BrokerageEntry;

/// Cleaned brokerage rows in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrokerageSheet {
    rows: Vec<BrokerageEntry>,
}

impl BrokerageSheet {
    pub fn new(rows: Vec<BrokerageEntry>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[BrokerageEntry] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Distinct brokerage names, sorted.
    pub fn brokerages(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.brokerage.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// First row for an exact brokerage name.
    pub fn find(&self, brokerage: &str) -> Option<&BrokerageEntry> {
        self.rows.iter().find(|r| r.brokerage == brokerage)
    }

    /// First row whose name contains "funnel pilot", any case.
    pub fn funnel_pilot(&self) -> Option<&BrokerageEntry> {
        self.rows.iter().find(|r| r.brokerage.to_lowercase().contains(FUNNEL_PILOT))
    }

    /// Every row in `BROKERAGE_HEADERS` order.
    pub fn export_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(BrokerageEntry::to_row).collect()
    }
}

/// Plain-text bundle of everything said about one brokerage.
pub fn pack_text(row: &BrokerageEntry) -> String {
    [
        &*join!("Brokerage: ", &row.brokerage),
        "",
        "Rebuttal:",
        &row.rebuttal,
        "",
        "One-liner:",
        &row.one_liner,
        "",
        "SMS:",
        &row.sms,
        "",
    ]
    .join("\n")
}

/// `Keller Williams` → `Keller_Williams_pack.txt`
pub fn pack_filename(brokerage: &str) -> String {
    join!(&*sanitize_filename(brokerage, "brokerage"), "_pack.txt")
}

/// Talk track for moving an agent off `picked`.
pub fn positioning_script(picked: &str) -> String {
    let opener = format!("Totally hear the appeal of {picked}. Here are a few reasons agents pick Funnel Pilot:");
    [
        opener.as_str(),
        "",
        "- Control and ownership: your ads, your CRM, your data.",
        "- Lower lead cost and faster testing to keep CPL efficient.",
        "- Done-for-you setup: domains, A2P, automations, lender co-marketing.",
        "- Weekly coaching and scripts with real-time tweaks.",
        "- Aligned incentives: no platform fee; we win when you close.",
        "",
        "Would it be crazy to run the first 60\u{2013}90 days with FP, review ROI, and then decide from a position of data?",
    ]
    .join("\n")
}
