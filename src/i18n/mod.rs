// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the lightbox labels.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale detection, embedded translation loading, and string
//! formatting for the viewer's controls and error texts.

pub mod fluent;
