//! Shipped grammars.

pub mod eel;

use crate::grammar::GrammarFn;

/// Every shipped grammar with its registration name
pub const BUILTIN: &[(&str, GrammarFn)] = &[(eel::NAME, eel::grammar)];
