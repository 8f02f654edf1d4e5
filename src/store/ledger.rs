use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::LedgerError;
use crate::models::goal::Goal;
use crate::models::transaction::Transaction;
use crate::operations::remove;

const TRANSACTIONS_FILE: &str = "transactions.json";
const GOALS_FILE: &str = "goals.json";

/// The aggregate root: both collections, insertion-ordered. Also the shape
/// of the export document.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
}

/// Owns the durable collections for the process lifetime. All mutation goes
/// through these operations; each one persists the whole affected collection
/// as a single unit, so the two files never half-update each other.
pub struct LedgerStore {
    data_dir: PathBuf,
    state: LedgerState,
}

impl LedgerStore {
    /// Opens the data directory and loads both collections. Absent or
    /// corrupt data falls back to an empty collection for that part; the
    /// ledger must stay usable with zero records.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let transactions = read_collection(&data_dir.join(TRANSACTIONS_FILE));
        let goals = read_collection(&data_dir.join(GOALS_FILE));

        Ok(Self {
            data_dir,
            state: LedgerState {
                transactions,
                goals,
            },
        })
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.state.goals
    }

    pub fn append_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        if self
            .state
            .transactions
            .iter()
            .any(|t| t.id == transaction.id)
        {
            return Err(LedgerError::Validation(format!(
                "Transaction id '{}' already exists",
                transaction.id
            )));
        }
        self.state.transactions.push(transaction);
        self.persist_transactions()
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<(), LedgerError> {
        remove::remove_transaction(&mut self.state.transactions, id)?;
        self.persist_transactions()
    }

    /// Replaces the goal carrying the same id, or appends when the id is
    /// new. `submit_goal` has already rejected stale ids by this point.
    pub fn upsert_goal(&mut self, goal: Goal) -> Result<(), LedgerError> {
        match self.state.goals.iter().position(|g| g.id == goal.id) {
            Some(pos) => self.state.goals[pos] = goal,
            None => self.state.goals.push(goal),
        }
        self.persist_goals()
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<(), LedgerError> {
        remove::remove_goal(&mut self.state.goals, id)?;
        self.persist_goals()
    }

    /// Writes both collections out, each as its own independent unit.
    pub fn persist(&self) -> Result<(), LedgerError> {
        self.persist_transactions()?;
        self.persist_goals()
    }

    fn persist_transactions(&self) -> Result<(), LedgerError> {
        self.write_collection(TRANSACTIONS_FILE, &self.state.transactions)
    }

    fn persist_goals(&self) -> Result<(), LedgerError> {
        self.write_collection(GOALS_FILE, &self.state.goals)
    }

    // Tempfile-then-rename, so a crash mid-write leaves the previous file
    // intact rather than a truncated one.
    fn write_collection<T: Serialize>(&self, name: &str, items: &[T]) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(items)?;
        let mut file = NamedTempFile::new_in(&self.data_dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(self.data_dir.join(name))
            .map_err(|err| LedgerError::Persistence(err.error))?;
        Ok(())
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            tracing::warn!("failed to read {}: {err}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("discarding corrupt data in {}: {err}", path.display());
            Vec::new()
        }
    }
}
