use phf::{Map, phf_map};
use std::collections::HashMap;
use thiserror::Error;

static BOCTOPUS2_SYMBOLS: Map<char, usize> = phf_map! {
    'I' => 0, // inner loop
    'O' => 1, // outer loop
    'i' => 2, // pore-facing
    'o' => 3, // lipid-facing
};

static TMHMM_SYMBOLS: Map<char, usize> = phf_map! {
    'i' => 0, 'I' => 0,
    'o' => 1, 'O' => 1,
    'm' => 2, 'M' => 2,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Alphabet '{alphabet}' has no symbol classes")]
    NoClasses { alphabet: String },
    #[error("Symbol '{symbol}' is assigned to more than one class in alphabet '{alphabet}'")]
    DuplicateSymbol { alphabet: String, symbol: char },
}

/// One label class of an annotation alphabet.
///
/// `key` is the stem used for output columns (`inner` becomes `inner_count`
/// and `inner_prop`), `label` is the human-readable name used in summaries.
/// Classes flagged `membrane` form the transmembrane subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolClass {
    pub key: String,
    pub label: String,
    pub symbols: Vec<char>,
    pub membrane: bool,
}

impl SymbolClass {
    pub fn new(key: &str, label: &str, symbols: &[char], membrane: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            symbols: symbols.to_vec(),
            membrane,
        }
    }
}

#[derive(Debug, Clone)]
enum SymbolTable {
    Static(&'static Map<char, usize>),
    Owned(HashMap<char, usize>),
}

/// The per-residue label alphabet of one prediction tool.
#[derive(Debug, Clone)]
pub struct AlphabetConfig {
    name: String,
    classes: Vec<SymbolClass>,
    symbols: SymbolTable,
}

impl AlphabetConfig {
    pub fn new(name: &str, classes: Vec<SymbolClass>) -> Result<Self, AlphabetError> {
        if classes.is_empty() {
            return Err(AlphabetError::NoClasses {
                alphabet: name.to_string(),
            });
        }
        let mut table = HashMap::new();
        for (index, class) in classes.iter().enumerate() {
            for &symbol in &class.symbols {
                if table.insert(symbol, index).is_some() {
                    return Err(AlphabetError::DuplicateSymbol {
                        alphabet: name.to_string(),
                        symbol,
                    });
                }
            }
        }
        Ok(Self {
            name: name.to_string(),
            classes,
            symbols: SymbolTable::Owned(table),
        })
    }

    /// BOCTOPUS2 beta-barrel topology: `I`/`O` loops, `i`/`o` membrane residues.
    pub fn boctopus2() -> Self {
        Self {
            name: "boctopus2".to_string(),
            classes: vec![
                SymbolClass::new("inner", "Inner", &['I'], false),
                SymbolClass::new("outer", "Outer", &['O'], false),
                SymbolClass::new("pore_facing", "Pore-facing", &['i'], true),
                SymbolClass::new("lipid_facing", "Lipid-facing", &['o'], true),
            ],
            symbols: SymbolTable::Static(&BOCTOPUS2_SYMBOLS),
        }
    }

    /// TMHMM helix topology: inside, outside and membrane, case-insensitive.
    pub fn tmhmm() -> Self {
        Self {
            name: "tmhmm".to_string(),
            classes: vec![
                SymbolClass::new("inside", "Inside", &['i', 'I'], false),
                SymbolClass::new("outside", "Outside", &['o', 'O'], false),
                SymbolClass::new("membrane", "Membrane", &['m', 'M'], true),
            ],
            symbols: SymbolTable::Static(&TMHMM_SYMBOLS),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[SymbolClass] {
        &self.classes
    }

    #[inline]
    pub fn class_of(&self, symbol: char) -> Option<usize> {
        match &self.symbols {
            SymbolTable::Static(map) => map.get(&symbol).copied(),
            SymbolTable::Owned(map) => map.get(&symbol).copied(),
        }
    }

    pub fn is_membrane(&self, class: usize) -> bool {
        self.classes.get(class).is_some_and(|c| c.membrane)
    }
}
