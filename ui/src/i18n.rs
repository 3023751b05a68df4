//! User-facing string translation.
//!
//! The host app may provide a [`Translator`] context. Without one, strings
//! are shown as written.

use std::borrow::Cow;

use dioxus::prelude::*;

/// Maps an English source string to the string shown to the user.
#[derive(Clone, Copy)]
pub struct Translator(pub fn(&'static str) -> Cow<'static, str>);

impl Translator {
    pub fn identity() -> Self {
        Self(Cow::Borrowed)
    }

    pub fn tr(&self, msg: &'static str) -> Cow<'static, str> {
        (self.0)(msg)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

pub fn use_translator() -> Translator {
    try_use_context::<Translator>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(msg: &'static str) -> Cow<'static, str> {
        Cow::Owned(msg.to_uppercase())
    }

    #[test]
    fn identity_returns_source_string() {
        assert_eq!(Translator::default().tr("gwei"), "gwei");
    }

    #[test]
    fn custom_translator_is_applied() {
        assert_eq!(Translator(shout).tr("gwei"), "GWEI");
    }
}
