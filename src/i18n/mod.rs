// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale chosen from the CLI or the config file, never from the OS
//! - `.ftl` translation files embedded at build time
//! - Fallback to `en-US` when the requested locale is not available

pub mod fluent;
