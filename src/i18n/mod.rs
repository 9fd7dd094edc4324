// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. A
//! directory passed with `--i18n-dir` can add locales or replace embedded
//! ones. The active locale is picked from the CLI, then the config file,
//! then the OS, and finally `en-US`.

pub mod fluent;
