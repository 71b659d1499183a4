//! Flat symbol table.
//!
//! The language has one global namespace, so the table is a single name-keyed map. Entries are
//! created once, at first declaration, and never removed; only their occurrence lines grow.

use std::collections::HashMap;
use std::fmt;

use tinyc_core::ValueType;

/// Storage slot of a variable: assigned once, in declaration order, starting at 0.
pub type SlotId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub slot: SlotId,
    pub ty: ValueType,
    /// Every line the name appeared on, in traversal order; starts with the declaring line.
    pub lines: Vec<usize>,
}

impl SymbolEntry {
    pub fn first_line(&self) -> usize {
        self.lines.first().copied().unwrap_or_default()
    }
}

/// Returned by [`SymbolTable::declare`] when the name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redeclared {
    pub slot: SlotId,
    pub first_line: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    by_name: HashMap<String, usize>,
    next_slot: SlotId,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` with a fresh storage slot.
    ///
    /// ## Errors
    /// - [`Redeclared`] if the name is already declared; the existing entry is left untouched.
    pub fn declare(&mut self, name: &str, ty: ValueType, line: usize) -> Result<SlotId, Redeclared> {
        if let Some(existing) = self.lookup(name) {
            return Err(Redeclared {
                slot: existing.slot,
                first_line: existing.first_line(),
            });
        }
        let slot = self.next_slot;
        self.next_slot += 1;
        self.by_name.insert(name.to_string(), self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            slot,
            ty,
            lines: vec![line],
        });
        Ok(slot)
    }

    /// Append an occurrence line to an existing entry.
    ///
    /// ## Returns
    /// - The entry's slot, or `None` if the name was never declared.
    pub fn record_use(&mut self, name: &str, line: usize) -> Option<SlotId> {
        let index = *self.by_name.get(name)?;
        let entry = &mut self.entries[index];
        entry.lines.push(line);
        Some(entry.slot)
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Entries in declaration (slot) order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry and restart slot allocation at 0.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_name.clear();
        self.next_slot = 0;
    }
}

/// Symbol table report: one row per variable with its slot rendered as an address.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAME: &str = "Variable_Name";
        const ADDRESS: &str = "Memory_Address";
        const TYPE: &str = "Type";
        const LINES: &str = "Appear_Line_Number";

        let name_width = self.entries.iter().map(|e| e.name.len()).chain([NAME.len()]).max().unwrap_or(0);
        let type_width = self
            .entries
            .iter()
            .map(|e| e.ty.to_string().len())
            .chain([TYPE.len()])
            .max()
            .unwrap_or(0);

        writeln!(f, "{NAME:<name_width$}  {ADDRESS:<14}  {TYPE:<type_width$}  {LINES}")?;
        for entry in &self.entries {
            let lines: Vec<String> = entry.lines.iter().map(usize::to_string).collect();
            writeln!(
                f,
                "{:<name_width$}  {:<14}  {:<type_width$}  {}",
                entry.name,
                format!("0x{:08x}", entry.slot),
                entry.ty.to_string(),
                lines.join(" "),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_allocated_in_declaration_order() {
        let mut table = SymbolTable::new();
        assert_eq!(table.declare("a", ValueType::Integer, 1), Ok(0));
        assert_eq!(table.declare("b", ValueType::Double, 2), Ok(1));
        assert_eq!(table.lookup("b").map(|e| e.slot), Some(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_redeclaration_keeps_first_entry() {
        let mut table = SymbolTable::new();
        table.declare("a", ValueType::Integer, 1).ok();
        let err = table.declare("a", ValueType::Double, 3);
        assert_eq!(err, Err(Redeclared { slot: 0, first_line: 1 }));
        let entry = table.lookup("a");
        assert_eq!(entry.map(|e| e.ty), Some(ValueType::Integer));
        assert_eq!(entry.map(|e| e.lines.clone()), Some(vec![1]));
        // the failed declaration does not consume a slot
        assert_eq!(table.declare("c", ValueType::Boolean, 4), Ok(1));
    }

    #[test]
    fn test_record_use_appends_lines() {
        let mut table = SymbolTable::new();
        table.declare("x", ValueType::String, 1).ok();
        assert_eq!(table.record_use("x", 2), Some(0));
        assert_eq!(table.record_use("x", 2), Some(0));
        assert_eq!(table.record_use("y", 3), None);
        assert_eq!(table.lookup("x").map(|e| e.lines.clone()), Some(vec![1, 2, 2]));
    }

    #[test]
    fn test_clear_restarts_slots() {
        let mut table = SymbolTable::new();
        table.declare("x", ValueType::String, 1).ok();
        table.clear();
        assert!(table.is_empty());
        assert!(table.lookup("x").is_none());
        assert_eq!(table.declare("y", ValueType::String, 1), Ok(0));
    }

    #[test]
    fn test_report() {
        let mut table = SymbolTable::new();
        table.declare("count", ValueType::Integer, 1).ok();
        table.declare("ratio", ValueType::Double, 2).ok();
        table.record_use("count", 3);
        table.record_use("count", 5);
        insta::assert_snapshot!(table.to_string(), @r"
        Variable_Name  Memory_Address  Type    Appear_Line_Number
        count          0x00000000      int     1 3 5
        ratio          0x00000001      double  2
        ");
    }
}
