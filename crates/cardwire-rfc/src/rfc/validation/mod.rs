//! Validation logic for RFC compliance.
//!
//! This module provides the parameter-domain predicates used when building
//! vCard properties.

pub mod parameter;

pub use parameter::{
    is_valid_cc, is_valid_group, is_valid_index, is_valid_pid, is_valid_pref, is_valid_script,
};
