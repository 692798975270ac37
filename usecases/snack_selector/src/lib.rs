#![warn(clippy::restriction, clippy::pedantic)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::mod_module_files,
    clippy::self_named_module_files,

    clippy::implicit_return,
    clippy::shadow_reuse,
    clippy::match_ref_pats,
    clippy::question_mark_used,
)]

//! Picks a snack on behalf of a known customer

use std::collections::HashMap;

use dispenser::{error, Dispenser};
use serde::{Deserialize, Serialize};

/// Requester -> favorite good, with a fallback for strangers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Preferences {
    ///
    #[serde(default)]
    pub favorites: HashMap<String, String>,

    /// Handed to requesters without a favorite
    #[serde(default = "default_selection")]
    pub default_selection: String,
}

///
fn default_selection() -> String {
    "Chips".to_owned()
}

impl Default for Preferences {
    #[inline]
    fn default() -> Self {
        let favorites = [("Mahesh", "Cakes"), ("Vibhor", "Chips"), ("Duke", "Cookies")]
            .into_iter()
            .map(|(requester, good)| (requester.to_owned(), good.to_owned()))
            .collect();

        Self {
            favorites,
            default_selection: default_selection(),
        }
    }
}

impl Preferences {
    ///
    #[inline]
    #[must_use]
    pub fn new(favorites: HashMap<String, String>, default_selection: String) -> Self {
        Self {
            favorites,
            default_selection,
        }
    }

    ///
    #[inline]
    #[must_use]
    pub fn resolve_preference(&self, requester: &str) -> &str {
        self.favorites
            .get(requester)
            .map_or(self.default_selection.as_str(), String::as_str)
    }

    /// The dispenser's answer comes back untouched
    ///
    /// # Errors
    #[inline]
    pub fn buy_favorite(&self, requester: &str, dispenser: &mut Dispenser) -> error::Result<()> {
        dispenser.dispense(self.resolve_preference(requester))
    }
}
