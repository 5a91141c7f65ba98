// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A printable description of a module's imports and exports.

use std::fmt::{self, Display, Formatter};
use wasmtime::{ExternType, Module};

/// The kind of an imported or exported item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemKind {
    /// A function, with the number of parameters and results it declares.
    Function {
        /// How many parameters the function takes.
        parameters: usize,
        /// How many values the function returns.
        results: usize,
    },
    Global,
    Table,
    Memory,
    Other,
}

impl From<ExternType> for ItemKind {
    fn from(item: ExternType) -> Self {
        match item {
            ExternType::Func(function) => ItemKind::Function {
                parameters: function.params().len(),
                results: function.results().len(),
            },
            ExternType::Global(_) => ItemKind::Global,
            ExternType::Table(_) => ItemKind::Table,
            ExternType::Memory(_) => ItemKind::Memory,
            #[allow(unreachable_patterns)]
            _ => ItemKind::Other,
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Function {
                parameters,
                results,
            } => write!(formatter, "function ({parameters} -> {results})"),
            ItemKind::Global => write!(formatter, "global"),
            ItemKind::Table => write!(formatter, "table"),
            ItemKind::Memory => write!(formatter, "memory"),
            ItemKind::Other => write!(formatter, "other"),
        }
    }
}

/// An item the module expects the host to provide.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Import {
    /// The namespace the item is imported from.
    pub module: String,
    /// The item's name inside `module`.
    pub name: String,
    /// What sort of item is expected.
    pub kind: ItemKind,
}

/// An item the module makes available to the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Export {
    /// The name the item is exported as.
    pub name: String,
    /// What sort of item it is.
    pub kind: ItemKind,
}

/// The imports and exports of a compiled module, in declaration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ModuleSummary {
    /// Items the module expects the host to provide.
    pub imports: Vec<Import>,
    /// Items the module makes available to the host.
    pub exports: Vec<Export>,
}

impl ModuleSummary {
    /// Describes a compiled `module`.
    pub fn new(module: &Module) -> Self {
        let imports = module
            .imports()
            .map(|import| Import {
                module: import.module().to_owned(),
                name: import.name().to_owned(),
                kind: import.ty().into(),
            })
            .collect();
        let exports = module
            .exports()
            .map(|export| Export {
                name: export.name().to_owned(),
                kind: export.ty().into(),
            })
            .collect();

        ModuleSummary { imports, exports }
    }

    /// Returns `true` if the module imports a function called `module.name`.
    pub fn imports_function(&self, module: &str, name: &str) -> bool {
        self.imports.iter().any(|import| {
            import.module == module
                && import.name == name
                && matches!(import.kind, ItemKind::Function { .. })
        })
    }

    /// Returns the kind of the export called `name`, if there is one.
    pub fn export(&self, name: &str) -> Option<ItemKind> {
        self.exports
            .iter()
            .find(|export| export.name == name)
            .map(|export| export.kind)
    }
}

impl Display for ModuleSummary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "imports:")?;
        for Import { module, name, kind } in &self.imports {
            writeln!(formatter, "  {module}.{name}: {kind}")?;
        }

        writeln!(formatter, "exports:")?;
        for Export { name, kind } in &self.exports {
            writeln!(formatter, "  {name}: {kind}")?;
        }

        Ok(())
    }
}
