use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{BlacklistEntry, BlacklistEntryRequest};

/// Blacklist
///
/// The security blacklist, held in memory only. Ids are unique within the
/// current set; they are never reused while a higher id is still present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: Vec<BlacklistEntry>,
}

/// BlacklistState
///
/// Shared across requests; the lock serializes edits.
pub type BlacklistState = Arc<RwLock<Blacklist>>;

impl Blacklist {
    pub fn new(entries: Vec<BlacklistEntry>) -> Self {
        Self { entries }
    }

    /// The three restricted visitors every fresh process starts with.
    pub fn seeded() -> Self {
        let seed = [
            (1, "Michael Johnson", "michael.j@email.com", "Security breach attempt", (2024, 3, 10), "Admin"),
            (2, "Emily Davis", "emily.davis@email.com", "Inappropriate behavior", (2024, 3, 8), "Security Team"),
            (3, "Anonymous User", "unknown@temp.com", "Suspicious activity", (2024, 3, 5), "System"),
        ];

        let entries = seed
            .into_iter()
            .filter_map(|(id, name, email, reason, (y, m, d), added_by)| {
                Some(BlacklistEntry {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    reason: reason.to_string(),
                    date_added: NaiveDate::from_ymd_opt(y, m, d)?,
                    added_by: added_by.to_string(),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn into_state(self) -> BlacklistState {
        Arc::new(RwLock::new(self))
    }

    pub fn entries(&self) -> &[BlacklistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&BlacklistEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Highest id plus one; an empty list starts at 1.
    pub fn next_id(&self) -> u32 {
        self.entries.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }

    /// add
    ///
    /// Appends a new entry with the next id. Input is assumed validated.
    pub fn add(
        &mut self,
        req: BlacklistEntryRequest,
        added_by: &str,
        date_added: NaiveDate,
    ) -> BlacklistEntry {
        let entry = BlacklistEntry {
            id: self.next_id(),
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            reason: req.reason.trim().to_string(),
            date_added,
            added_by: added_by.to_string(),
        };
        self.entries.push(entry.clone());
        entry
    }

    /// update
    ///
    /// Replaces name, email and reason of the entry with `id`. Id, date and
    /// author are kept. `None` when no such entry exists.
    pub fn update(&mut self, id: u32, req: BlacklistEntryRequest) -> Option<BlacklistEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.name = req.name.trim().to_string();
        entry.email = req.email.trim().to_string();
        entry.reason = req.reason.trim().to_string();
        Some(entry.clone())
    }

    /// remove
    ///
    /// Drops exactly the entry with `id`; the rest keep their order.
    pub fn remove(&mut self, id: u32) -> Option<BlacklistEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// search
    ///
    /// Case-insensitive substring match on name or email. The term is used
    /// as typed, surrounding whitespace included; only an empty term matches
    /// everything.
    pub fn search(&self, term: &str) -> Vec<BlacklistEntry> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.name.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
