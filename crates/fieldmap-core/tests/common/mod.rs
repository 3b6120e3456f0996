//! Shared fixtures for workbench and session tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use fieldmap_core::{DialogOutcome, FileDialog};

/// Dialog that answers from a script and records what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    pub sources: VecDeque<DialogOutcome>,
    pub saves: VecDeque<DialogOutcome>,
    pub offered_extensions: Vec<String>,
    pub suggested_names: Vec<String>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, outcome: DialogOutcome) -> Self {
        self.sources.push_back(outcome);
        self
    }

    pub fn with_save(mut self, outcome: DialogOutcome) -> Self {
        self.saves.push_back(outcome);
        self
    }
}

impl FileDialog for ScriptedDialog {
    fn pick_source(&mut self, extensions: &[&str]) -> DialogOutcome {
        self.offered_extensions = extensions.iter().map(|ext| ext.to_string()).collect();
        self.sources.pop_front().unwrap_or(DialogOutcome::Cancelled)
    }

    fn pick_save_path(&mut self, default_name: &str) -> DialogOutcome {
        self.suggested_names.push(default_name.to_string());
        self.saves.pop_front().unwrap_or(DialogOutcome::Cancelled)
    }
}

/// `[ID, Name, Value]` with Alice and Bob.
pub fn write_customers(dir: &Path) -> PathBuf {
    let path = dir.join("customers.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "ID").unwrap();
    sheet.write_string(0, 1, "Name").unwrap();
    sheet.write_string(0, 2, "Value").unwrap();
    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_string(1, 1, "Alice").unwrap();
    sheet.write_number(1, 2, 100.0).unwrap();
    sheet.write_number(2, 0, 2.0).unwrap();
    sheet.write_string(2, 1, "Bob").unwrap();
    sheet.write_number(2, 2, 200.0).unwrap();
    workbook.save(&path).unwrap();
    path
}
