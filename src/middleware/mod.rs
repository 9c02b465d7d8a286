// SPDX-License-Identifier: MIT

//! Axum middleware.

pub mod security;
